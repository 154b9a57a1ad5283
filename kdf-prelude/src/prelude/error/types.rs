//! Core Error Types for Key Derivation
//!
//! Every derivation failure collapses into one of the variants below. None of
//! them carries secret material: messages only mention lengths, counters and
//! algorithm names.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use thiserror::Error;

/// Error type conversion implementations.
pub mod conversions;
/// Error recovery strategies and utilities.
pub mod recovery;

/// Result type alias for key derivation operations
pub type Result<T> = std::result::Result<T, KdfError>;

/// Error type for all key derivation operations
///
/// The derivation engines abort on the first error of any kind and never
/// expose partially written output, so a caller only needs `is_ok()` to
/// recover the all-or-nothing contract. The variants exist so that logs and
/// audit trails can tell an argument mistake from a primitive fault.
#[derive(Debug, Error, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum KdfError {
    /// Empty secret, zero output length, undersized block buffer
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Counter space exhausted, input-length bound exceeded, or size arithmetic overflow
    #[error("Length overflow: {0}")]
    LengthOverflow(String),

    /// Underlying hash or keyed-hash primitive failed or misreported its size
    #[error("Primitive failure: {0}")]
    PrimitiveFailure(String),

    /// Variant or primitive context could not be constructed
    #[error("Context failure: {0}")]
    ContextFailure(String),

    /// Digest name not recognized
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Module refused service because self-tests failed or never ran
    #[error("Module not operational: {0}")]
    NotOperational(String),

    /// Configuration rejected at build time
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Known-answer test mismatch
    #[error("Validation error: {message}")]
    ValidationError {
        /// Validation error message
        message: String,
    },
}

impl KdfError {
    /// Short stable name of the error kind, suitable for structured log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            KdfError::InvalidArgument(_) => "invalid_argument",
            KdfError::LengthOverflow(_) => "length_overflow",
            KdfError::PrimitiveFailure(_) => "primitive_failure",
            KdfError::ContextFailure(_) => "context_failure",
            KdfError::UnsupportedAlgorithm(_) => "unsupported_algorithm",
            KdfError::NotOperational(_) => "not_operational",
            KdfError::InvalidConfiguration(_) => "invalid_configuration",
            KdfError::ValidationError { .. } => "validation_error",
        }
    }

    /// Whether repeating the same call could succeed.
    ///
    /// Derivations are deterministic, so this is always `false`: the same
    /// inputs fail the same way every time.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

// Re-export recovery types and functions
pub use recovery::{
    ErrorRecoveryStrategy, ErrorSeverity, attempt_error_recovery, get_error_severity,
    is_recoverable_error, requires_security_response,
};
