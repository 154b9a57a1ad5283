//! Error Type Conversions
//!
//! `From` implementations so primitive and arithmetic failures propagate with `?`.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use super::KdfError;

impl From<std::num::TryFromIntError> for KdfError {
    fn from(err: std::num::TryFromIntError) -> Self {
        KdfError::LengthOverflow(format!("Integer conversion out of range: {err}"))
    }
}

impl From<digest::InvalidLength> for KdfError {
    fn from(_err: digest::InvalidLength) -> Self {
        KdfError::ContextFailure("Keyed hash rejected key length".to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_int_maps_to_length_overflow() {
        let err: KdfError = u32::try_from(u64::MAX).unwrap_err().into();
        assert!(matches!(err, KdfError::LengthOverflow(_)));
    }

    #[test]
    fn test_invalid_length_maps_to_context_failure() {
        let err: KdfError = digest::InvalidLength.into();
        assert!(matches!(err, KdfError::ContextFailure(_)));
    }
}
