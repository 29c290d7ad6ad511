//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// An ASCII-art fixture was malformed
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphnet_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
