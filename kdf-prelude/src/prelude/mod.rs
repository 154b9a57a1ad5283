//! KDF Prelude Module
//!
//! Error handling and shared constants for the SP 800-108 / SP 800-56C
//! derivation crates.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Error taxonomy and classification helpers.
pub mod error;

// Re-export common error types
pub use error::{KdfError, Result};

/// Property-based testing using proptest framework.
pub mod property_based_testing;

/// Largest block produced by any supported primitive, in bytes.
///
/// Every digest selectable by callers (SHA-1 through SHA-512 and SHA3-512)
/// fits in this bound; block scratch buffers are sized from it.
pub const MAX_DIGEST_LEN: usize = 64;

/// Width of the big-endian block counter, in bytes.
pub const COUNTER_LEN: usize = 4;
