//! Error Handling Module
//!
//! Error types and severity classification for key derivation.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Core error types and result handling.
pub mod types;

pub use types::{
    ErrorRecoveryStrategy, ErrorSeverity, KdfError, Result, attempt_error_recovery,
    get_error_severity, is_recoverable_error, requires_security_response,
};
