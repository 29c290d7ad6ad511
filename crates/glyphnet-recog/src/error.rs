//! Error types for glyphnet-recog

use thiserror::Error;

/// Errors that can occur during tile normalization and recognition
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphnet_core::Error),

    /// Transform library error
    #[error("transform error: {0}")]
    Transform(#[from] glyphnet_transform::TransformError),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Tile dimensions differ from the network's tile dimensions
    #[error(
        "tile size mismatch: expected {}x{}, got {}x{}",
        .expected.0, .expected.1, .actual.0, .actual.1
    )]
    TileSizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Pixel vector length differs from the network's input count
    #[error("pixel vector length mismatch: expected {expected}, got {actual}")]
    VectorLengthMismatch { expected: usize, actual: usize },

    /// Training requires a tile with a known letter
    #[error("tile has no letter to train on")]
    UnlabelledTile,

    /// Output bits did not decode to a character
    #[error("failed to decode output bits: {0}")]
    Decode(String),

    /// Malformed network snapshot
    #[error("invalid network snapshot: {0}")]
    Snapshot(String),

    /// I/O error while reading or writing a snapshot
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
