#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Owned derivation output that wipes itself on drop.

use std::fmt;

use kdf_prelude::{KdfError, Result};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use super::length;

/// Derived key material returned by the allocating entry points
#[derive(Clone)]
pub struct DerivedKey {
    key: Vec<u8>,
}

impl Zeroize for DerivedKey {
    fn zeroize(&mut self) {
        self.key.zeroize();
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl DerivedKey {
    /// Allocate `out_len` bytes and let `fill` derive into them.
    ///
    /// The length is checked against the counter space for `h_len` before
    /// anything is allocated, and the allocation itself is fallible. If
    /// `fill` fails the buffer is wiped on drop.
    ///
    /// # Errors
    /// `KdfError::LengthOverflow` if the counter space is exceeded or the
    /// buffer cannot be allocated.
    pub(crate) fn derive<F>(h_len: usize, out_len: usize, fill: F) -> Result<Self>
    where
        F: FnOnce(&mut [u8]) -> Result<()>,
    {
        if out_len == 0 {
            return Err(KdfError::InvalidArgument("output length must be non-zero".to_string()));
        }
        length::iteration_count(out_len, h_len)?;

        let mut key = Vec::new();
        key.try_reserve_exact(out_len).map_err(|e| {
            KdfError::LengthOverflow(format!("cannot allocate {out_len} output bytes: {e}"))
        })?;
        key.resize(out_len, 0);

        let mut derived = Self { key };
        fill(&mut derived.key)?;
        Ok(derived)
    }

    /// Get the derived key
    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Always `false` for a successfully derived key
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl AsRef<[u8]> for DerivedKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.key.ct_eq(&other.key).into()
    }
}

impl Eq for DerivedKey {}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKey([{} bytes])", self.key.len())
    }
}
