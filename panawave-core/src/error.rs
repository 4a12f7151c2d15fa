use crate::ring::RingId;

/// Rejected at the mutating call, before any geometry is regenerated.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvalidGeometryError {
    #[error("ring count must be at least 1")]
    ZeroCount,

    #[error("ring radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("scaler list must not be empty")]
    EmptyScalerList,

    #[error("scaler list entry at index {0} must be positive")]
    ZeroScalerEntry(usize),
}

/// An operation referenced a ring id not present in the composition.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("unknown ring id: {0}")]
pub struct UnknownRingError(pub RingId);

/// Raised by `load_from_file`; the prior in-memory composition is left
/// untouched in every case.
#[derive(Debug, thiserror::Error)]
pub enum CorruptDocumentError {
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("ring_array key {key:?} is not a ring id")]
    InvalidRingId { key: String },

    #[error("duplicate ring id {0} in ring_array")]
    DuplicateRingId(RingId),

    #[error("ring {id}: {source}")]
    InvalidRing {
        id: RingId,
        source: InvalidGeometryError,
    },

    #[error("ring {id}: base sticker has {points} points, need at least 3")]
    DegenerateRingSticker { id: RingId, points: usize },

    #[error("composition base sticker has {points} points, need at least 3")]
    DegenerateBaseSticker { points: usize },
}

/// Raised by `write_out`; on failure the previous file has been restored
/// from its backup.
#[derive(Debug, thiserror::Error)]
pub enum WriteDocumentError {
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}
