//! Error types for glyphnet-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphnet_core::Error),

    /// Invalid scale factor
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(String),

    /// Invalid target dimensions
    #[error("invalid target size: {width}x{height}")]
    InvalidTargetSize { width: u32, height: u32 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
