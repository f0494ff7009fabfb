//! Property-based tests for the trip data model
//!
//! These tests use proptest to verify invariants across many random inputs.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use domain::{ClockTime, SortField, Trip, TripCollection, TripFilter};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn station() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z][A-Za-z0-9 ]{0,15}",
        "[а-яА-Я][а-яА-Я ]{0,15}",
        Just("Белорусский вокзал".to_string()),
    ]
}

fn time() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{:02}:{:02}", h, m))
}

fn trip() -> impl Strategy<Value = Trip> {
    (
        any::<u32>(),
        station(),
        "[A-Za-z0-9-]{1,10}",
        time(),
        station(),
        time(),
        "[0-9a-f]{1,12}",
    )
        .prop_map(|(id, start, line, t0, end, t1, global)| {
            Trip::new(&id.to_string(), &start, &line, &t0, &end, &t1, &global)
                .expect("generated trip must be valid")
        })
}

fn collection() -> impl Strategy<Value = TripCollection> {
    prop::collection::vec(trip(), 0..20).prop_map(TripCollection::from)
}

// ============================================================================
// ClockTime Property Tests
// ============================================================================

mod clock_time_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_times_are_accepted(h in 0u32..24, m in 0u32..60) {
            let text = format!("{:02}:{:02}", h, m);
            let parsed = ClockTime::parse(&text);
            prop_assert!(parsed.is_ok());
            prop_assert_eq!(parsed.unwrap().to_string(), text);
        }

        #[test]
        fn hours_out_of_range_are_rejected(h in 24u32..100, m in 0u32..60) {
            let input = format!("{h:02}:{m:02}");
            prop_assert!(ClockTime::parse(&input).is_err());
        }

        #[test]
        fn minutes_out_of_range_are_rejected(h in 0u32..24, m in 60u32..100) {
            let input = format!("{h:02}:{m:02}");
            prop_assert!(ClockTime::parse(&input).is_err());
        }

        #[test]
        fn ordering_matches_string_ordering(a in time(), b in time()) {
            let ta = ClockTime::parse(&a).unwrap();
            let tb = ClockTime::parse(&b).unwrap();
            prop_assert_eq!(ta.cmp(&tb), a.cmp(&b));
        }
    }
}

// ============================================================================
// Trip Property Tests
// ============================================================================

mod trip_tests {
    use super::*;

    proptest! {
        #[test]
        fn csv_row_roundtrip_is_exact(trip in trip()) {
            let row = trip.to_csv_row();
            let parsed = Trip::from_csv_row(&row).unwrap();
            prop_assert_eq!(parsed.to_csv_row(), row);
            prop_assert_eq!(parsed, trip);
        }
    }
}

// ============================================================================
// TripCollection Property Tests
// ============================================================================

mod collection_tests {
    use super::*;

    proptest! {
        #[test]
        fn filter_by_start_is_idempotent(trips in collection(), pick in any::<prop::sample::Index>()) {
            let target = if trips.is_empty() {
                "nowhere".to_string()
            } else {
                trips[pick.index(trips.len())].station_start().to_string()
            };
            let filter = TripFilter::StationStart(target);
            let once = trips.filter(|t| filter.matches(t));
            let twice = once.filter(|t| filter.matches(t));
            prop_assert_eq!(&once, &twice);
            prop_assert!(once.len() <= trips.len());
        }

        #[test]
        fn filter_result_is_subsequence(trips in collection(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!trips.is_empty());
            let target = trips[pick.index(trips.len())].station_end().to_string();
            let filtered = trips.filter(|t| t.station_end() == target);
            let mut source = trips.iter();
            for trip in &filtered {
                prop_assert!(source.any(|candidate| candidate == trip));
            }
        }

        #[test]
        fn sort_by_start_is_idempotent(trips in collection()) {
            let mut once = trips.clone();
            once.sort_by(|a, b| SortField::TimeStart.compare(a, b));
            let mut twice = once.clone();
            twice.sort_by(|a, b| SortField::TimeStart.compare(a, b));
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once.len(), trips.len());
        }

        #[test]
        fn sort_orders_start_times(trips in collection()) {
            let mut sorted = trips;
            sorted.sort_by(|a, b| SortField::TimeStart.compare(a, b));
            for pair in sorted.iter().collect::<Vec<_>>().windows(2) {
                prop_assert!(pair[0].time_start() <= pair[1].time_start());
            }
        }

        #[test]
        fn concat_length_adds_up(a in collection(), b in collection()) {
            let joined = a.concat(&b);
            prop_assert_eq!(joined.len(), a.len() + b.len());
        }
    }
}
