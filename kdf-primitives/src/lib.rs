#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # KDF Primitives
//!
//! Counter-mode key derivation as used inside a FIPS cryptographic module
//! boundary.
//!
//! ## Constructions
//!
//! - **kdf::kbkdf**: SP 800-108 counter mode with HMAC as the PRF.
//!   `K(i) = HMAC_secret([i]_32 || info)`
//! - **kdf::sskdf**: SP 800-56C single-step KDF over a plain hash or HMAC.
//!   `K(i) = H([i]_32 || secret || info)` or `K(i) = HMAC_salt([i]_32 || secret || info)`
//!
//! Both emit `ceil(out_len / h_len)` blocks with a 32-bit big-endian counter
//! starting at 1 and truncate the last block to fit the caller's buffer.
//!
//! ## Primitives
//!
//! Hashing and HMAC are delegated to the RustCrypto `sha1`, `sha2`, `sha3` and
//! `hmac` crates. The algorithm is picked at runtime through
//! [`DigestAlgorithm`](hash::DigestAlgorithm).
//!
//! | Family | Algorithms | Block size |
//! |--------|------------|------------|
//! | SHA-1 | SHA-1 | 20 |
//! | SHA-2 | SHA-224, SHA-256, SHA-384, SHA-512, SHA-512/224, SHA-512/256 | 28 to 64 |
//! | SHA-3 | SHA3-224, SHA3-256, SHA3-384, SHA3-512 | 28 to 64 |
//!
//! ## Feature Flags
//!
//! - **`fips-self-test`** - Power-up known-answer tests and module error state
//!
//! ## Example
//!
//! ```rust
//! use kdf_primitives::hash::DigestAlgorithm;
//! use kdf_primitives::kdf::{kbkdf_ctr_into, sskdf_hmac_into};
//!
//! # fn main() -> kdf_prelude::Result<()> {
//! let secret = [0x0bu8; 32];
//! let mut enc_key = [0u8; 32];
//! kbkdf_ctr_into(DigestAlgorithm::Sha256, &secret, b"enc", &mut enc_key)?;
//!
//! let mut mac_key = [0u8; 48];
//! sskdf_hmac_into(DigestAlgorithm::Sha384, &secret, b"mac", b"salt", &mut mac_key)?;
//! assert_ne!(enc_key[..], mac_key[..32]);
//! # Ok(())
//! # }
//! ```

pub mod hash;
pub mod kdf;
pub mod mac;


pub use hash::DigestAlgorithm;
pub use kdf::{
    DerivedKey, KbkdfFixedInfo, SskdfVariant, kbkdf_ctr, kbkdf_ctr_into, sskdf_digest,
    sskdf_digest_into, sskdf_hmac, sskdf_hmac_into,
};
pub use kdf_prelude::{KdfError, Result};
