#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! SSKDF Auxiliary Function Variants
//!
//! SP 800-56C single-step derivation runs one of two auxiliary functions per
//! counter block:
//!
//! - **Digest**: `H(counter || secret || info)`
//! - **Keyed hash**: `HMAC_salt(counter || secret || info)`
//!
//! [`SskdfVariant`] picks one at runtime and exposes the same `size` /
//! `compute` pair for both, so the engine never branches on which it holds.

use kdf_prelude::{COUNTER_LEN, KdfError, Result};

use crate::hash::{DigestAlgorithm, DigestContext};
use crate::mac::HmacContext;

fn require_secret(secret: &[u8]) -> Result<()> {
    if secret.is_empty() {
        return Err(KdfError::InvalidArgument("secret must be non-empty".to_string()));
    }
    Ok(())
}

/// Plain-hash auxiliary function
#[derive(Debug)]
pub struct DigestVariant {
    ctx: DigestContext,
}

impl DigestVariant {
    /// Build a variant hashing with `algorithm`.
    #[must_use]
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self { ctx: DigestContext::new(algorithm) }
    }

    /// Block size in bytes
    #[must_use]
    pub fn size(&self) -> usize {
        self.ctx.output_len()
    }

    /// Write `H(counter || secret || info)` to `out[..size()]`.
    ///
    /// # Errors
    /// `KdfError::InvalidArgument` on an empty secret or a short `out`.
    pub fn compute(
        &mut self,
        out: &mut [u8],
        counter: &[u8; COUNTER_LEN],
        secret: &[u8],
        info: &[u8],
    ) -> Result<()> {
        require_secret(secret)?;
        self.ctx.reset();
        self.ctx.update(counter);
        self.ctx.update(secret);
        self.ctx.update(info);
        self.ctx.finalize_into(out)
    }
}

/// HMAC auxiliary function keyed with the salt
#[derive(Debug)]
pub struct HmacVariant {
    ctx: HmacContext,
}

impl HmacVariant {
    /// Key an HMAC with `salt`. An empty salt is a valid zero-length key.
    ///
    /// # Errors
    /// `KdfError::ContextFailure` if the HMAC cannot be keyed.
    pub fn new(algorithm: DigestAlgorithm, salt: &[u8]) -> Result<Self> {
        Ok(Self { ctx: HmacContext::new(algorithm, salt)? })
    }

    /// Block size in bytes
    #[must_use]
    pub fn size(&self) -> usize {
        self.ctx.output_len()
    }

    /// Write `HMAC_salt(counter || secret || info)` to `out[..size()]`.
    ///
    /// # Errors
    /// `KdfError::InvalidArgument` on an empty secret or a short `out`.
    pub fn compute(
        &mut self,
        out: &mut [u8],
        counter: &[u8; COUNTER_LEN],
        secret: &[u8],
        info: &[u8],
    ) -> Result<()> {
        require_secret(secret)?;
        self.ctx.reinit();
        self.ctx.update(counter);
        self.ctx.update(secret);
        self.ctx.update(info);
        self.ctx.finalize_into(out)
    }
}

/// Runtime-selected SSKDF auxiliary function
#[derive(Debug)]
pub enum SskdfVariant {
    /// `H(counter || secret || info)`
    Digest(DigestVariant),
    /// `HMAC_salt(counter || secret || info)`
    Hmac(HmacVariant),
}

impl SskdfVariant {
    /// Plain-hash variant over `algorithm`.
    #[must_use]
    pub fn digest(algorithm: DigestAlgorithm) -> Self {
        Self::Digest(DigestVariant::new(algorithm))
    }

    /// Keyed-hash variant over `algorithm`, keyed with `salt`.
    ///
    /// # Errors
    /// `KdfError::ContextFailure` if the HMAC cannot be keyed.
    pub fn hmac(algorithm: DigestAlgorithm, salt: &[u8]) -> Result<Self> {
        Ok(Self::Hmac(HmacVariant::new(algorithm, salt)?))
    }

    /// Fixed output size of the underlying primitive
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Digest(v) => v.size(),
            Self::Hmac(v) => v.size(),
        }
    }

    /// Compute one block into `out[..size()]`.
    ///
    /// `out` is only meaningful after `Ok`.
    ///
    /// # Errors
    /// `KdfError::InvalidArgument` on an empty secret or a short `out`.
    pub fn compute(
        &mut self,
        out: &mut [u8],
        counter: &[u8; COUNTER_LEN],
        secret: &[u8],
        info: &[u8],
    ) -> Result<()> {
        match self {
            Self::Digest(v) => v.compute(out, counter, secret, info),
            Self::Hmac(v) => v.compute(out, counter, secret, info),
        }
    }

    /// Short label for logs, e.g. `hash(SHA-256)` or `hmac(SHA3-512)`
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Digest(v) => format!("hash({})", v.ctx.algorithm()),
            Self::Hmac(v) => format!("hmac({})", v.ctx.algorithm()),
        }
    }
}
