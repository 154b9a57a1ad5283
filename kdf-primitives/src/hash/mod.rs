#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Hash Functions
//!
//! Runtime-selected one-way hashes (SHA-1, SHA-2, SHA-3) behind a single
//! reusable context.

pub mod algorithm;
pub mod context;

pub use algorithm::*;
pub use context::*;
