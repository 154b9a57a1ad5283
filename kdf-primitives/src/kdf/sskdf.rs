#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! SP 800-56C: Single-Step Key Derivation Function
//!
//! One-step KDF used after a key-establishment scheme to turn the shared
//! secret `Z` into keying material.
//!
//! K(i) = Aux([i]_32 || Z || FixedInfo)
//!
//! Where:
//! - Aux: `H` (option 1) or `HMAC_salt` (option 2)
//! - i: Counter (32-bit big-endian, starting at 1)
//! - Z: The shared secret
//! - FixedInfo: Context bound into every block (`info`)
//!
//! Output is `K(1) || K(2) || ...` truncated to the requested length.

use kdf_prelude::{KdfError, Result};
use tracing::instrument;

use super::derived_key::DerivedKey;
use super::driver;
use super::length;
use super::variant::SskdfVariant;
use crate::hash::DigestAlgorithm;

/// Run single-step derivation over an already constructed `variant`.
///
/// Fills all of `out`. On error `out` holds unspecified bytes.
///
/// # Errors
/// - `KdfError::InvalidArgument` if `out` or `secret` is empty
/// - `KdfError::LengthOverflow` if the block count exceeds 2^32 - 1 or
///   `4 + secret.len() + info.len()` exceeds 2^32 - 1 bytes
/// - `KdfError::PrimitiveFailure` if the variant reports a block size outside `1..=64`
#[instrument(
    level = "debug",
    skip(variant, secret, info, out),
    fields(variant = %variant.name(), secret_len = secret.len(), info_len = info.len(), out_len = out.len())
)]
pub fn sskdf(variant: &mut SskdfVariant, secret: &[u8], info: &[u8], out: &mut [u8]) -> Result<()> {
    if out.is_empty() {
        return Err(KdfError::InvalidArgument("output length must be non-zero".to_string()));
    }
    if secret.is_empty() {
        return Err(KdfError::InvalidArgument("secret must be non-empty".to_string()));
    }
    length::check_input_len(secret.len(), info.len())?;

    let h_len = variant.size();
    driver::fill_counter_blocks(out, h_len, |counter, block| {
        variant.compute(block, counter, secret, info)
    })
    .inspect_err(|e| tracing::debug!(kind = e.kind(), error = %e, "SSKDF derivation failed"))
}

/// SSKDF with a plain hash, writing into `out`.
///
/// # Errors
/// See [`sskdf`].
pub fn sskdf_digest_into(
    algorithm: DigestAlgorithm,
    secret: &[u8],
    info: &[u8],
    out: &mut [u8],
) -> Result<()> {
    let mut variant = SskdfVariant::digest(algorithm);
    sskdf(&mut variant, secret, info, out)
}

/// SSKDF with HMAC keyed by `salt`, writing into `out`.
///
/// An empty `salt` is used as a zero-length HMAC key.
///
/// # Errors
/// See [`sskdf`]; also `KdfError::ContextFailure` if the HMAC cannot be keyed.
pub fn sskdf_hmac_into(
    algorithm: DigestAlgorithm,
    secret: &[u8],
    info: &[u8],
    salt: &[u8],
    out: &mut [u8],
) -> Result<()> {
    let mut variant = SskdfVariant::hmac(algorithm, salt)?;
    sskdf(&mut variant, secret, info, out)
}

/// SSKDF with a plain hash, returning `out_len` fresh bytes.
///
/// # Errors
/// See [`sskdf`].
pub fn sskdf_digest(
    algorithm: DigestAlgorithm,
    secret: &[u8],
    info: &[u8],
    out_len: usize,
) -> Result<DerivedKey> {
    DerivedKey::derive(algorithm.output_len(), out_len, |out| {
        sskdf_digest_into(algorithm, secret, info, out)
    })
}

/// SSKDF with HMAC keyed by `salt`, returning `out_len` fresh bytes.
///
/// # Errors
/// See [`sskdf_hmac_into`].
pub fn sskdf_hmac(
    algorithm: DigestAlgorithm,
    secret: &[u8],
    info: &[u8],
    salt: &[u8],
    out_len: usize,
) -> Result<DerivedKey> {
    DerivedKey::derive(algorithm.output_len(), out_len, |out| {
        sskdf_hmac_into(algorithm, secret, info, salt, out)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_digest_single_block() {
        let mut out = [0u8; 32];
        sskdf_digest_into(DigestAlgorithm::Sha256, &[0x01; 32], b"", &mut out).unwrap();
        assert_eq!(out, hex!("f03fb92fb76fce8fd8b2d7e4d48c466f3ba15408db67b40992c22d0a74e73927"));
    }

    #[test]
    fn test_digest_truncated_final_block() {
        let key = sskdf_digest(DigestAlgorithm::Sha512_256, b"secret", b"info", 100).unwrap();
        assert_eq!(
            key.key(),
            hex!(
                "5fc8801d66a85bef62f388dd03a34606b4a8203a3f841f0e522fb87b227adec4"
                "d9920d19721e06657efbfb40a8e9bb32ff7ae051c4531c5bf7f5a790315dfc1d"
                "3d0289309931c444dbdc2d3d2fb7ca5c69bab335aa3425d7f310ba5ea25a295d"
                "16aa467c"
            )
        );
    }

    #[test]
    fn test_hmac_empty_salt() {
        let key = sskdf_hmac(DigestAlgorithm::Sha3_384, b"secret", b"info", b"", 50).unwrap();
        assert_eq!(
            key.key(),
            hex!(
                "40d56f1624eb2902ef643e625267b2167ef37cd7452fd39dabd0c413a4d25ede"
                "186c66d68f5ed47ecb240ec7386056a636bf"
            )
        );
    }

    #[test]
    fn test_variant_reused_across_calls() {
        let mut variant = SskdfVariant::hmac(DigestAlgorithm::Sha256, b"salt").unwrap();
        let mut first = [0u8; 70];
        let mut second = [0u8; 70];
        sskdf(&mut variant, b"secret", b"info", &mut first).unwrap();
        sskdf(&mut variant, b"secret", b"info", &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_input_bound_enforced_by_engine() {
        // 4 + secret.len() is one past 2^32 - 1; the secret is never hashed.
        let secret = vec![0u8; u32::MAX as usize - 3];
        let mut out = [0u8; 16];
        assert!(matches!(
            sskdf_digest_into(DigestAlgorithm::Sha256, &secret, b"", &mut out),
            Err(KdfError::LengthOverflow(_))
        ));
        assert!(matches!(
            sskdf_hmac_into(DigestAlgorithm::Sha256, &secret[1..], b"i", b"salt", &mut out),
            Err(KdfError::LengthOverflow(_))
        ));
        assert_eq!(out, [0u8; 16]);

        // Exactly at the bound is accepted by the check.
        assert!(length::check_input_len(secret.len() - 1, 0).is_ok());
    }

    #[test]
    fn test_rejects_empty_inputs() {
        let mut out = [0u8; 16];
        assert!(matches!(
            sskdf_digest_into(DigestAlgorithm::Sha256, b"", b"info", &mut out),
            Err(KdfError::InvalidArgument(_))
        ));
        assert!(matches!(
            sskdf_hmac_into(DigestAlgorithm::Sha256, b"secret", b"info", b"salt", &mut []),
            Err(KdfError::InvalidArgument(_))
        ));
        assert!(matches!(
            sskdf_digest(DigestAlgorithm::Sha256, b"secret", b"info", 0),
            Err(KdfError::InvalidArgument(_))
        ));
    }
}
