#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Key Derivation Functions
//!
//! Counter-mode KDFs for deriving keys from secrets following NIST standards.
//!
//! ## Supported Algorithms
//!
//! - **SP 800-108 Counter KDF**: HMAC PRF keyed with the secret
//! - **SP 800-56C Single-Step KDF**: plain hash or HMAC keyed with a salt
//!
//! Every entry point comes in two forms: `*_into` fills a caller buffer, the
//! plain form allocates and returns a [`DerivedKey`].

mod driver;

pub mod derived_key;
pub mod kbkdf;
pub mod length;
pub mod sskdf;
pub mod variant;

pub use derived_key::DerivedKey;
pub use kbkdf::*;
pub use length::{MAX_INPUT_LEN, check_input_len, iteration_count};
pub use sskdf::*;
pub use variant::*;
