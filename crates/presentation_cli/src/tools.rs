//! Offline trip file tools: format conversion and validation

use std::path::Path;

use anyhow::Context;
use application::TripCodecs;
use domain::{DataFormat, TripCollection};
use tracing::{info, instrument};

/// Read and decode a trip file, choosing the codec by extension
pub async fn read_trips(codecs: &TripCodecs, path: &Path) -> anyhow::Result<TripCollection> {
    let format = DataFormat::from_path(path)?;
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(codecs.get(format)?.decode(&bytes)?)
}

/// Re-encode `input` into `output`, each format taken from the extension
///
/// Returns the number of trips written.
#[instrument(skip(codecs), fields(input = %input.display(), output = %output.display()))]
pub async fn convert(codecs: &TripCodecs, input: &Path, output: &Path) -> anyhow::Result<usize> {
    let target = DataFormat::from_path(output)?;
    let trips = read_trips(codecs, input).await?;
    let bytes = codecs.get(target)?.encode(&trips)?;
    tokio::fs::write(output, bytes)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(trips = trips.len(), format = %target, "Converted trip file");
    Ok(trips.len())
}

/// Check that a file would be accepted as an upload
///
/// Returns the number of trips it holds.
pub async fn validate(codecs: &TripCodecs, path: &Path) -> anyhow::Result<usize> {
    Ok(read_trips(codecs, path).await?.len())
}
