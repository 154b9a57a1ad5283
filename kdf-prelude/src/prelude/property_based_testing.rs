//! Property-Based Testing using Proptest
//!
//! Properties of the error layer that must hold for arbitrary messages:
//! display is stable, serde keeps the variant, classification is a pure
//! function of the variant.

#![deny(unsafe_code)]
// Property-based testing modules are test-only and use test patterns
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::redundant_clone))]

#[cfg(test)]
use proptest::prelude::*;

#[cfg(test)]
use crate::error::KdfError;

/// Strategy for generating error messages.
#[cfg(test)]
fn arb_error_message() -> impl Strategy<Value = String> {
    // Compile-time constant regex, always valid
    prop::string::string_regex("[a-zA-Z0-9 .,!?_-]{1,100}")
        .expect("valid regex pattern for error messages")
}

/// Strategy covering every message-carrying error variant.
#[cfg(test)]
fn arb_kdf_error() -> impl Strategy<Value = KdfError> {
    (0u8..8, arb_error_message()).prop_map(|(kind, msg)| match kind {
        0 => KdfError::InvalidArgument(msg),
        1 => KdfError::LengthOverflow(msg),
        2 => KdfError::PrimitiveFailure(msg),
        3 => KdfError::ContextFailure(msg),
        4 => KdfError::UnsupportedAlgorithm(msg),
        5 => KdfError::NotOperational(msg),
        6 => KdfError::InvalidConfiguration(msg),
        _ => KdfError::ValidationError { message: msg },
    })
}

// Property: Error display formatting is consistent
#[cfg(test)]
proptest! {
    #[test]
    fn prop_error_display_consistent(error in arb_kdf_error()) {
        let display1 = format!("{}", error);
        let display2 = format!("{}", error);

        prop_assert_eq!(display1.clone(), display2);
        prop_assert!(display1.len() > 10);
    }
}

// Property: Error serialization/deserialization round-trip
#[cfg(test)]
proptest! {
    #[test]
    fn prop_error_serialization_roundtrip(error in arb_kdf_error()) {
        let json: String = serde_json::to_string(&error)?;
        let deserialized: KdfError = serde_json::from_str(&json)?;

        prop_assert_eq!(error.kind(), deserialized.kind());
        prop_assert_eq!(error, deserialized);
    }
}

// Property: Classification depends only on the variant, never on the message
#[cfg(test)]
proptest! {
    #[test]
    fn prop_classification_ignores_message(
        error in arb_kdf_error(),
        other in arb_error_message(),
    ) {
        use crate::prelude::error::{get_error_severity, is_recoverable_error};

        let relabelled = match &error {
            KdfError::InvalidArgument(_) => KdfError::InvalidArgument(other),
            KdfError::LengthOverflow(_) => KdfError::LengthOverflow(other),
            KdfError::PrimitiveFailure(_) => KdfError::PrimitiveFailure(other),
            KdfError::ContextFailure(_) => KdfError::ContextFailure(other),
            KdfError::UnsupportedAlgorithm(_) => KdfError::UnsupportedAlgorithm(other),
            KdfError::NotOperational(_) => KdfError::NotOperational(other),
            KdfError::InvalidConfiguration(_) => KdfError::InvalidConfiguration(other),
            KdfError::ValidationError { .. } => KdfError::ValidationError { message: other },
        };

        prop_assert_eq!(get_error_severity(&error), get_error_severity(&relabelled));
        prop_assert_eq!(is_recoverable_error(&error), is_recoverable_error(&relabelled));
    }
}
