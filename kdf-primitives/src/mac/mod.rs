#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Message Authentication Codes
//!
//! HMAC (FIPS 198-1) over any [`DigestAlgorithm`](crate::hash::DigestAlgorithm).

pub mod hmac;

pub use self::hmac::*;
