//! Ordered collection of trips owned by one session

use std::cmp::Ordering;
use std::fmt::Write as _;
use std::ops::{Add, Index};

use serde::{Deserialize, Serialize};

use super::trip::Trip;

/// Number of trips rendered by [`TripCollection::preview`]
pub const PREVIEW_LIMIT: usize = 5;

/// An ordered sequence of trips
///
/// Order is insertion order until [`TripCollection::sort_by`] reorders it.
/// Filtering and concatenation build new collections; trips themselves are
/// never changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripCollection {
    trips: Vec<Trip>,
}

impl TripCollection {
    /// Create an empty collection
    pub const fn new() -> Self {
        Self { trips: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Trip at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Trip> {
        self.trips.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// Append a trip at the end
    pub fn push(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// New collection with this collection's trips followed by `other`'s
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Sort in place with a caller-supplied comparator (stable)
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Trip, &Trip) -> Ordering,
    {
        self.trips.sort_by(compare);
    }

    /// New collection of the trips matching `predicate`, order preserved
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Trip) -> bool,
    {
        self.iter().filter(|trip| predicate(trip)).cloned().collect()
    }

    /// Each trip rendered as a CSV data row
    pub fn csv_rows(&self) -> Vec<String> {
        self.iter().map(Trip::to_csv_row).collect()
    }

    /// Human-readable summary: the trip count and the first few trips
    pub fn preview(&self) -> String {
        let mut out = format!("There are {} trips in your file\n", self.len());
        for trip in self.iter().take(PREVIEW_LIMIT) {
            let _ = writeln!(out, "{trip}");
        }
        out
    }
}

impl Index<usize> for TripCollection {
    type Output = Trip;

    fn index(&self, index: usize) -> &Self::Output {
        &self.trips[index]
    }
}

impl Add for TripCollection {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.trips.extend(rhs.trips);
        self
    }
}

impl From<Vec<Trip>> for TripCollection {
    fn from(trips: Vec<Trip>) -> Self {
        Self { trips }
    }
}

impl FromIterator<Trip> for TripCollection {
    fn from_iter<I: IntoIterator<Item = Trip>>(iter: I) -> Self {
        Self {
            trips: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TripCollection {
    type Item = Trip;
    type IntoIter = std::vec::IntoIter<Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.into_iter()
    }
}

impl<'a> IntoIterator for &'a TripCollection {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(id: &str, start: &str, time_start: &str, end: &str, time_end: &str) -> Trip {
        Trip::new(id, start, "LineX", time_start, end, time_end, &format!("g{id}")).unwrap()
    }

    fn sample() -> TripCollection {
        TripCollection::from(vec![
            trip("1", "A", "09:00", "B", "09:40"),
            trip("2", "C", "07:15", "B", "08:00"),
            trip("3", "A", "06:30", "D", "07:05"),
        ])
    }

    #[test]
    fn empty_collection() {
        let empty = TripCollection::new();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(empty.get(0).is_none());
    }

    #[test]
    fn indexed_access() {
        let trips = sample();
        assert_eq!(trips[1].station_start(), "C");
        assert_eq!(trips.get(2).map(Trip::station_end), Some("D"));
    }

    #[test]
    fn concat_keeps_left_then_right_order() {
        let left = sample();
        let right = TripCollection::from(vec![trip("9", "Z", "10:00", "Y", "10:30")]);
        let joined = left.concat(&right);
        assert_eq!(joined.len(), 4);
        assert_eq!(joined[0].id().value(), 1);
        assert_eq!(joined[3].id().value(), 9);
        assert_eq!(left.clone() + right, joined);
    }

    #[test]
    fn filter_preserves_order_and_source() {
        let trips = sample();
        let from_a = trips.filter(|t| t.station_start() == "A");
        assert_eq!(from_a.len(), 2);
        assert_eq!(from_a[0].id().value(), 1);
        assert_eq!(from_a[1].id().value(), 3);
        assert_eq!(trips.len(), 3);
    }

    #[test]
    fn sort_by_start_time() {
        let mut trips = sample();
        trips.sort_by(|a, b| a.time_start().cmp(&b.time_start()));
        let ids: Vec<u64> = trips.iter().map(|t| t.id().value()).collect();
        assert_eq!(ids, [3, 2, 1]);
    }

    #[test]
    fn preview_lists_at_most_five() {
        let trips: TripCollection = (0..8)
            .map(|i| trip(&i.to_string(), "A", "08:00", "B", "08:30"))
            .collect();
        let preview = trips.preview();
        assert!(preview.starts_with("There are 8 trips in your file\n"));
        assert_eq!(preview.lines().count(), 1 + PREVIEW_LIMIT);
    }

    #[test]
    fn preview_of_small_collection_lists_all() {
        let preview = sample().preview();
        assert_eq!(preview.lines().count(), 4);
        assert!(preview.contains(r#""2";"C";"LineX";"07:15";"B";"08:00";"g2";"#));
    }

    #[test]
    fn csv_rows_follow_order() {
        let rows = sample().csv_rows();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("\"1\";"));
    }
}
