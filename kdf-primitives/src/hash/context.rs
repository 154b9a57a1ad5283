#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Reusable Hash Context
//!
//! A [`DigestContext`] wraps one RustCrypto hasher chosen at runtime. It is
//! reset and reused for every counter block instead of being rebuilt.

use std::fmt;

use digest::Digest;
use kdf_prelude::{KdfError, Result};

use super::DigestAlgorithm;

enum DigestState {
    Sha1(sha1::Sha1),
    Sha224(sha2::Sha224),
    Sha256(sha2::Sha256),
    Sha384(sha2::Sha384),
    Sha512(sha2::Sha512),
    Sha512_224(sha2::Sha512_224),
    Sha512_256(sha2::Sha512_256),
    Sha3_224(sha3::Sha3_224),
    Sha3_256(sha3::Sha3_256),
    Sha3_384(sha3::Sha3_384),
    Sha3_512(sha3::Sha3_512),
}

/// Expands `$body` once per hasher type with `$h` bound to the live state.
macro_rules! with_hasher {
    ($state:expr, $h:ident => $body:expr) => {
        match $state {
            DigestState::Sha1($h) => $body,
            DigestState::Sha224($h) => $body,
            DigestState::Sha256($h) => $body,
            DigestState::Sha384($h) => $body,
            DigestState::Sha512($h) => $body,
            DigestState::Sha512_224($h) => $body,
            DigestState::Sha512_256($h) => $body,
            DigestState::Sha3_224($h) => $body,
            DigestState::Sha3_256($h) => $body,
            DigestState::Sha3_384($h) => $body,
            DigestState::Sha3_512($h) => $body,
        }
    };
}

impl DigestState {
    fn new(algorithm: DigestAlgorithm) -> Self {
        match algorithm {
            DigestAlgorithm::Sha1 => Self::Sha1(sha1::Sha1::new()),
            DigestAlgorithm::Sha224 => Self::Sha224(sha2::Sha224::new()),
            DigestAlgorithm::Sha256 => Self::Sha256(sha2::Sha256::new()),
            DigestAlgorithm::Sha384 => Self::Sha384(sha2::Sha384::new()),
            DigestAlgorithm::Sha512 => Self::Sha512(sha2::Sha512::new()),
            DigestAlgorithm::Sha512_224 => Self::Sha512_224(sha2::Sha512_224::new()),
            DigestAlgorithm::Sha512_256 => Self::Sha512_256(sha2::Sha512_256::new()),
            DigestAlgorithm::Sha3_224 => Self::Sha3_224(sha3::Sha3_224::new()),
            DigestAlgorithm::Sha3_256 => Self::Sha3_256(sha3::Sha3_256::new()),
            DigestAlgorithm::Sha3_384 => Self::Sha3_384(sha3::Sha3_384::new()),
            DigestAlgorithm::Sha3_512 => Self::Sha3_512(sha3::Sha3_512::new()),
        }
    }
}

/// Runtime-selected hash state that can be reset and reused
pub struct DigestContext {
    algorithm: DigestAlgorithm,
    state: DigestState,
}

impl DigestContext {
    /// Create a fresh context for `algorithm`.
    #[must_use]
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self { algorithm, state: DigestState::new(algorithm) }
    }

    /// Algorithm this context computes
    #[must_use]
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Digest size in bytes
    #[must_use]
    pub fn output_len(&self) -> usize {
        self.algorithm.output_len()
    }

    /// Discard any absorbed input.
    pub fn reset(&mut self) {
        with_hasher!(&mut self.state, h => Digest::reset(h));
    }

    /// Absorb `data`.
    pub fn update(&mut self, data: &[u8]) {
        with_hasher!(&mut self.state, h => Digest::update(h, data));
    }

    /// Write the digest to `out[..output_len()]` and reset the context.
    ///
    /// # Errors
    /// Returns `KdfError::InvalidArgument` if `out` is shorter than the digest.
    /// The absorbed input is kept in that case.
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<()> {
        let h_len = self.output_len();
        let out_len = out.len();
        let dst = out.get_mut(..h_len).ok_or_else(|| {
            KdfError::InvalidArgument(format!(
                "{} block needs {} bytes, buffer holds {}",
                self.algorithm, h_len, out_len
            ))
        })?;
        with_hasher!(&mut self.state, h => dst.copy_from_slice(&Digest::finalize_reset(h)));
        Ok(())
    }
}

impl fmt::Debug for DigestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestContext").field("algorithm", &self.algorithm).finish_non_exhaustive()
    }
}
