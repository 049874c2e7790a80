use thiserror::Error;

/// Failures turning a save snapshot into or out of JSON.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("could not encode save snapshot: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("save snapshot is corrupt: {0}")]
    Decode(#[source] serde_json::Error),
}
