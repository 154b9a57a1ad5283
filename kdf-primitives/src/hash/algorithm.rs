#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Digest Algorithm Selector
//!
//! Runtime choice of the one-way hash under a derivation. The same selector
//! picks the HMAC hash for KBKDF and keyed-hash SSKDF.

use std::fmt;
use std::str::FromStr;

use kdf_prelude::{KdfError, MAX_DIGEST_LEN};
use serde::{Deserialize, Serialize};

/// Hash function used as (or inside) the pseudorandom function
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    /// SHA-1 (FIPS 180-4), 20-byte output
    Sha1,
    /// SHA-224 (FIPS 180-4), 28-byte output
    Sha224,
    /// SHA-256 (FIPS 180-4), 32-byte output
    #[default]
    Sha256,
    /// SHA-384 (FIPS 180-4), 48-byte output
    Sha384,
    /// SHA-512 (FIPS 180-4), 64-byte output
    Sha512,
    /// SHA-512/224 (FIPS 180-4), 28-byte output
    Sha512_224,
    /// SHA-512/256 (FIPS 180-4), 32-byte output
    Sha512_256,
    /// SHA3-224 (FIPS 202), 28-byte output
    Sha3_224,
    /// SHA3-256 (FIPS 202), 32-byte output
    Sha3_256,
    /// SHA3-384 (FIPS 202), 48-byte output
    Sha3_384,
    /// SHA3-512 (FIPS 202), 64-byte output
    Sha3_512,
}

impl DigestAlgorithm {
    /// Every selectable algorithm, in declaration order.
    pub const ALL: [DigestAlgorithm; 11] = [
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha512_224,
        Self::Sha512_256,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
    ];

    /// Output size in bytes; this is `h_len` for every construction.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha224 | Self::Sha512_224 | Self::Sha3_224 => 28,
            Self::Sha256 | Self::Sha512_256 | Self::Sha3_256 => 32,
            Self::Sha384 | Self::Sha3_384 => 48,
            Self::Sha512 | Self::Sha3_512 => 64,
        }
    }

    /// Canonical FIPS name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Sha512_224 => "SHA-512/224",
            Self::Sha512_256 => "SHA-512/256",
            Self::Sha3_224 => "SHA3-224",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
        }
    }
}

// Compile-time check: every block fits the shared scratch buffer.
const _: () = {
    let mut i = 0;
    while i < DigestAlgorithm::ALL.len() {
        assert!(DigestAlgorithm::ALL[i].output_len() <= MAX_DIGEST_LEN);
        i += 1;
    }
};

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = KdfError;

    /// Accepts the FIPS names (`SHA-512/256`, `SHA3-256`) and the usual
    /// compact spellings (`sha512_256`, `sha3256`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | '/' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let algorithm = match normalized.as_str() {
            "sha1" => Self::Sha1,
            "sha224" => Self::Sha224,
            "sha256" => Self::Sha256,
            "sha384" => Self::Sha384,
            "sha512" => Self::Sha512,
            "sha512224" => Self::Sha512_224,
            "sha512256" => Self::Sha512_256,
            "sha3224" => Self::Sha3_224,
            "sha3256" => Self::Sha3_256,
            "sha3384" => Self::Sha3_384,
            "sha3512" => Self::Sha3_512,
            _ => return Err(KdfError::UnsupportedAlgorithm(s.to_string())),
        };
        Ok(algorithm)
    }
}
