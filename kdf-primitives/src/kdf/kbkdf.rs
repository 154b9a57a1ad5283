#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! SP 800-108: Counter-based Key Derivation Function
//!
//! NIST SP 800-108 specifies key derivation using pseudorandom functions.
//! This implementation provides the counter mode KDF using HMAC as the PRF.
//!
//! The counter-based KDF follows the format:
//! K(i) = PRF(KI, [i]_2 || FixedInfo)
//!
//! Where:
//! - KI: Keying material input (the secret, used as the HMAC key)
//! - i: Counter (32-bit big-endian, starting at 1)
//! - FixedInfo: Caller-supplied `info`. [`KbkdfFixedInfo`] builds the
//!   recommended `Label || 0x00 || Context || [L]_2` encoding.
//!
//! Unlike keyed-hash SSKDF, the secret is the key and is not part of the
//! message: each block authenticates only `counter || info`.

use kdf_prelude::{KdfError, Result};
use tracing::instrument;

use super::derived_key::DerivedKey;
use super::driver;
use crate::hash::DigestAlgorithm;
use crate::mac::HmacContext;

/// SP 800-108 counter mode with HMAC over `algorithm`, writing into `out`.
///
/// Fills all of `out`. On error `out` holds unspecified bytes.
///
/// # Errors
/// - `KdfError::InvalidArgument` if `out` or `secret` is empty
/// - `KdfError::LengthOverflow` if more than 2^32 - 1 blocks are needed
/// - `KdfError::ContextFailure` if the HMAC cannot be keyed with `secret`
#[instrument(
    level = "debug",
    skip(secret, info, out),
    fields(secret_len = secret.len(), info_len = info.len(), out_len = out.len())
)]
pub fn kbkdf_ctr_into(
    algorithm: DigestAlgorithm,
    secret: &[u8],
    info: &[u8],
    out: &mut [u8],
) -> Result<()> {
    if out.is_empty() {
        return Err(KdfError::InvalidArgument("output length must be non-zero".to_string()));
    }
    if secret.is_empty() {
        return Err(KdfError::InvalidArgument("secret must be non-empty".to_string()));
    }

    let mut prf = HmacContext::new(algorithm, secret)?;
    let h_len = prf.output_len();

    driver::fill_counter_blocks(out, h_len, |counter, block| {
        prf.reinit();
        prf.update(counter);
        prf.update(info);
        prf.finalize_into(block)
    })
    .inspect_err(|e| tracing::debug!(kind = e.kind(), error = %e, "KBKDF derivation failed"))
}

/// SP 800-108 counter mode returning `out_len` fresh bytes.
///
/// # Errors
/// See [`kbkdf_ctr_into`].
pub fn kbkdf_ctr(
    algorithm: DigestAlgorithm,
    secret: &[u8],
    info: &[u8],
    out_len: usize,
) -> Result<DerivedKey> {
    DerivedKey::derive(algorithm.output_len(), out_len, |out| {
        kbkdf_ctr_into(algorithm, secret, info, out)
    })
}

/// SP 800-108 fixed input data: `Label || 0x00 || Context || [L]_2`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KbkdfFixedInfo {
    /// Purpose of the derived key
    pub label: Vec<u8>,
    /// Parties, nonces or other binding context
    pub context: Vec<u8>,
}

impl KbkdfFixedInfo {
    /// Fixed info with `label` and an empty context
    #[must_use]
    pub fn new(label: &[u8]) -> Self {
        Self { label: label.to_vec(), context: Vec::new() }
    }

    /// Set context information
    #[must_use]
    pub fn with_context(mut self, context: &[u8]) -> Self {
        self.context = context.to_vec();
        self
    }

    /// Encode for a derivation of `out_len` bytes. `[L]_2` is the output
    /// length in bits as a 32-bit big-endian integer.
    ///
    /// # Errors
    /// `KdfError::LengthOverflow` if `out_len * 8` does not fit 32 bits.
    pub fn encode(&self, out_len: usize) -> Result<Vec<u8>> {
        let bits = out_len
            .checked_mul(8)
            .and_then(|bits| u32::try_from(bits).ok())
            .ok_or_else(|| {
                KdfError::LengthOverflow(format!("{out_len} bytes is too long for a 32-bit [L]_2"))
            })?;

        let mut encoded = Vec::with_capacity(
            self.label.len().saturating_add(self.context.len()).saturating_add(5),
        );
        encoded.extend_from_slice(&self.label);
        encoded.push(0x00);
        encoded.extend_from_slice(&self.context);
        encoded.extend_from_slice(&bits.to_be_bytes());
        Ok(encoded)
    }
}

/// Derive several keys from one secret, one label per key.
///
/// Each `(label, length)` pair runs its own counter-mode derivation with
/// fixed info `label || 0x00 || context || [length * 8]_2`.
///
/// # Errors
/// Returns the first error of any individual derivation.
pub fn derive_keys(
    algorithm: DigestAlgorithm,
    secret: &[u8],
    context: &[u8],
    key_specs: &[(&[u8], usize)],
) -> Result<Vec<DerivedKey>> {
    key_specs
        .iter()
        .map(|&(label, out_len)| {
            let info = KbkdfFixedInfo::new(label).with_context(context).encode(out_len)?;
            kbkdf_ctr(algorithm, secret, &info, out_len)
        })
        .collect()
}
