//! Error Recovery Strategies
//!
//! Derivations are deterministic: a failed hash call fails again on retry.
//! The only recoverable condition is a module that has not yet passed its
//! power-up self-tests.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use super::KdfError;

/// Error recovery strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorRecoveryStrategy {
    /// Re-run the power-up self-tests and try again.
    RerunSelfTests,
    /// Fail immediately without recovery.
    Fail,
}

/// Error severity level for compliance reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Low severity - caller mistake, no module impact.
    Low = 1,
    /// Medium severity - request rejected by policy.
    Medium = 2,
    /// High severity - primitive misbehaved.
    High = 3,
    /// Critical severity - module integrity in question.
    Critical = 4,
}

/// Attempt error recovery based on error type.
#[must_use]
pub fn attempt_error_recovery(error: &KdfError) -> Option<ErrorRecoveryStrategy> {
    match error {
        KdfError::NotOperational(_) => Some(ErrorRecoveryStrategy::RerunSelfTests),
        KdfError::InvalidConfiguration(_) => Some(ErrorRecoveryStrategy::Fail),
        KdfError::InvalidArgument(_)
        | KdfError::LengthOverflow(_)
        | KdfError::PrimitiveFailure(_)
        | KdfError::ContextFailure(_)
        | KdfError::UnsupportedAlgorithm(_)
        | KdfError::ValidationError { .. } => None,
    }
}

/// Check if error is recoverable.
///
/// Returns true only when a strategy other than `Fail` exists.
#[must_use]
pub fn is_recoverable_error(error: &KdfError) -> bool {
    matches!(attempt_error_recovery(error), Some(ErrorRecoveryStrategy::RerunSelfTests))
}

/// Get error severity for compliance reporting.
#[must_use]
pub fn get_error_severity(error: &KdfError) -> ErrorSeverity {
    match error {
        KdfError::ValidationError { .. } => ErrorSeverity::Critical,

        KdfError::PrimitiveFailure(_) | KdfError::ContextFailure(_) => ErrorSeverity::High,

        KdfError::NotOperational(_) | KdfError::InvalidConfiguration(_) => ErrorSeverity::Medium,

        KdfError::InvalidArgument(_)
        | KdfError::LengthOverflow(_)
        | KdfError::UnsupportedAlgorithm(_) => ErrorSeverity::Low,
    }
}

/// Check if error requires immediate security response.
///
/// Returns true for Critical and High severity errors.
#[must_use]
pub fn requires_security_response(error: &KdfError) -> bool {
    matches!(get_error_severity(error), ErrorSeverity::Critical | ErrorSeverity::High)
}
