//! Error types for the ticket-triage engine.

use thiserror::Error;

/// Unified error type for triage operations.
///
/// Scoring and classification never fail; this type covers the edges
/// where external input crosses into the engine (corpus parsing,
/// configuration loading).
#[derive(Debug, Error)]
pub enum TriageError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
