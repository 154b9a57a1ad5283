#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! HMAC (Hash-based Message Authentication Code)
//!
//! This module provides a runtime-selected HMAC on top of the audited `hmac`
//! crate from RustCrypto.
//!
//! HMAC is specified in FIPS 198-1:
//! H((K ⊕ opad) || H((K ⊕ ipad) || text))
//!
//! The key schedule (padding or pre-hashing `K`) runs once in
//! [`HmacContext::new`]. Every later message starts from a copy of that keyed
//! state, so a counter-mode loop re-keys for free and never re-supplies the key.
//! Keys of any length are accepted, including the empty key.

use std::fmt;

use ::hmac::{Hmac, Mac};
use kdf_prelude::{KdfError, Result};

use crate::hash::DigestAlgorithm;

#[derive(Clone)]
enum HmacState {
    Sha1(Hmac<sha1::Sha1>),
    Sha224(Hmac<sha2::Sha224>),
    Sha256(Hmac<sha2::Sha256>),
    Sha384(Hmac<sha2::Sha384>),
    Sha512(Hmac<sha2::Sha512>),
    Sha512_224(Hmac<sha2::Sha512_224>),
    Sha512_256(Hmac<sha2::Sha512_256>),
    Sha3_224(Hmac<sha3::Sha3_224>),
    Sha3_256(Hmac<sha3::Sha3_256>),
    Sha3_384(Hmac<sha3::Sha3_384>),
    Sha3_512(Hmac<sha3::Sha3_512>),
}

macro_rules! with_mac {
    ($state:expr, $m:ident => $body:expr) => {
        match $state {
            HmacState::Sha1($m) => $body,
            HmacState::Sha224($m) => $body,
            HmacState::Sha256($m) => $body,
            HmacState::Sha384($m) => $body,
            HmacState::Sha512($m) => $body,
            HmacState::Sha512_224($m) => $body,
            HmacState::Sha512_256($m) => $body,
            HmacState::Sha3_224($m) => $body,
            HmacState::Sha3_256($m) => $body,
            HmacState::Sha3_384($m) => $body,
            HmacState::Sha3_512($m) => $body,
        }
    };
}

impl HmacState {
    fn new(algorithm: DigestAlgorithm, key: &[u8]) -> Result<Self> {
        let state = match algorithm {
            DigestAlgorithm::Sha1 => Self::Sha1(Hmac::new_from_slice(key)?),
            DigestAlgorithm::Sha224 => Self::Sha224(Hmac::new_from_slice(key)?),
            DigestAlgorithm::Sha256 => Self::Sha256(Hmac::new_from_slice(key)?),
            DigestAlgorithm::Sha384 => Self::Sha384(Hmac::new_from_slice(key)?),
            DigestAlgorithm::Sha512 => Self::Sha512(Hmac::new_from_slice(key)?),
            DigestAlgorithm::Sha512_224 => Self::Sha512_224(Hmac::new_from_slice(key)?),
            DigestAlgorithm::Sha512_256 => Self::Sha512_256(Hmac::new_from_slice(key)?),
            DigestAlgorithm::Sha3_224 => Self::Sha3_224(Hmac::new_from_slice(key)?),
            DigestAlgorithm::Sha3_256 => Self::Sha3_256(Hmac::new_from_slice(key)?),
            DigestAlgorithm::Sha3_384 => Self::Sha3_384(Hmac::new_from_slice(key)?),
            DigestAlgorithm::Sha3_512 => Self::Sha3_512(Hmac::new_from_slice(key)?),
        };
        Ok(state)
    }

    fn finalize_into(self, dst: &mut [u8]) {
        with_mac!(self, m => dst.copy_from_slice(&Mac::finalize(m).into_bytes()));
    }
}

/// Keyed HMAC state that can be restarted under the same key
pub struct HmacContext {
    algorithm: DigestAlgorithm,
    keyed: HmacState,
    active: HmacState,
}

impl HmacContext {
    /// Run the HMAC key schedule for `key`.
    ///
    /// # Errors
    /// Returns `KdfError::ContextFailure` if the primitive rejects the key.
    pub fn new(algorithm: DigestAlgorithm, key: &[u8]) -> Result<Self> {
        let keyed = HmacState::new(algorithm, key)?;
        Ok(Self { algorithm, active: keyed.clone(), keyed })
    }

    /// Algorithm under the HMAC
    #[must_use]
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Tag size in bytes
    #[must_use]
    pub fn output_len(&self) -> usize {
        self.algorithm.output_len()
    }

    /// Start a new message under the existing key.
    pub fn reinit(&mut self) {
        self.active = self.keyed.clone();
    }

    /// Absorb `data` into the current message.
    pub fn update(&mut self, data: &[u8]) {
        with_mac!(&mut self.active, m => Mac::update(m, data));
    }

    /// Write the tag to `out[..output_len()]` and restart under the same key.
    ///
    /// # Errors
    /// Returns `KdfError::InvalidArgument` if `out` is shorter than the tag.
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<()> {
        let h_len = self.output_len();
        let out_len = out.len();
        let dst = out.get_mut(..h_len).ok_or_else(|| {
            KdfError::InvalidArgument(format!(
                "HMAC-{} tag needs {} bytes, buffer holds {}",
                self.algorithm, h_len, out_len
            ))
        })?;
        let finished = std::mem::replace(&mut self.active, self.keyed.clone());
        finished.finalize_into(dst);
        Ok(())
    }
}

impl fmt::Debug for HmacContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacContext").field("algorithm", &self.algorithm).finish_non_exhaustive()
    }
}
