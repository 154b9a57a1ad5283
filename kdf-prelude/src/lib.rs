//! KDF Prelude Crate
//!
//! Common types shared by every crate of the key-derivation workspace.
//!
//! # Key Components
//!
//! - **Error Handling**: the [`KdfError`](prelude::error::KdfError) taxonomy used by
//!   both derivation engines, with severity and recovery classification
//! - **Testing Infrastructure**: property-based checks of the error layer
//!
//! # Example
//!
//! ```rust
//! use kdf_prelude::prelude::{KdfError, Result};
//!
//! fn example_operation(out_len: usize) -> Result<()> {
//!     if out_len == 0 {
//!         return Err(KdfError::InvalidArgument("output length must be non-zero".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(example_operation(0).is_err());
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Prelude module containing all commonly used types and utilities.
pub mod prelude;

pub use prelude::*;
