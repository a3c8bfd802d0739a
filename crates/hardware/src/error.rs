//! Error types for the translation pipeline.
//!
//! Page faults and cache misses are ordinary control flow and never show up
//! here; these variants cover malformed input, bad configuration and broken
//! internal bookkeeping.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MmuError>;

/// Errors raised by the translator and its collaborators.
#[derive(Error, Debug)]
pub enum MmuError {
    /// Address text too short for the configured split, or not a hex address.
    #[error("invalid address '{address}': {reason}")]
    InvalidAddressFormat { address: String, reason: String },

    /// A container was configured with zero capacity.
    #[error("{component} capacity must be at least 1")]
    CapacityMisconfiguration { component: &'static str },

    /// Replacement state and container mapping disagree.
    #[error("replacement policy invariant violated: {0}")]
    PolicyInvariantViolation(String),

    /// Configuration value outside its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MmuError {
    pub(crate) fn invalid_address(address: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAddressFormat {
            address: address.to_string(),
            reason: reason.into(),
        }
    }
}
