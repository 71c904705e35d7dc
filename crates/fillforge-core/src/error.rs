//! Error types for FillForge

use thiserror::Error;

/// Main error type for FillForge operations
#[derive(Debug, Error)]
pub enum FillForgeError {
    /// An item amount is negative or not comparable (NaN)
    #[error("Invalid amount for item '{id}': {amount}")]
    InvalidAmount { id: String, amount: String },

    /// The ceiling is not comparable (NaN)
    #[error("Invalid ceiling: {0}")]
    InvalidCeiling(String),

    /// Error in filler configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error reading an item source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error decoding an item source
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for FillForge operations
pub type Result<T> = std::result::Result<T, FillForgeError>;
