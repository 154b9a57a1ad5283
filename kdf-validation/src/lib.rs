#![deny(unsafe_code)]
#![allow(missing_docs)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! KDF Validation
//!
//! Known-answer and property checks for the SP 800-108 and SP 800-56C
//! derivations in `kdf-primitives`.
//!
//! ## Modules
//!
//! - **nist_kat**: embedded vectors, per-construction runners and a summary
//!   runner for all of them
//! - **proptest_kdf**: property-based tests of the derivation invariants

pub mod nist_kat;
pub mod proptest_kdf;

pub use nist_kat::{KatRunner, KatSummary, NistKatError, run_all_kdf_kats};
