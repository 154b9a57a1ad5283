#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # KDF Core
//!
//! Service layer over the counter-mode key derivation functions.
//!
//! - [`config`]: [`KdfConfig`] with development and production presets
//! - [`service`]: [`KdfService`], gating derivations on the module's
//!   power-up self-tests and an optional output cap
//! - [`logging`]: tracing subscriber setup and byte-count-only rendering of
//!   secrets
//!
//! ## Quick Start
//!
//! ```rust
//! use kdf_core::{KdfConfig, KdfService};
//! use kdf_primitives::hash::DigestAlgorithm;
//!
//! # fn main() -> kdf_prelude::Result<()> {
//! let service = KdfService::new(KdfConfig::for_production())?;
//!
//! let session_key = service.kbkdf_ctr(b"master key", b"session 1", 32)?;
//! assert_eq!(session_key.len(), 32);
//!
//! let mut mac_key = [0u8; 48];
//! service.sskdf_hmac_into_with(DigestAlgorithm::Sha384, b"Z", b"OtherInfo", b"salt", &mut mac_key)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logging;
pub mod service;

pub use config::KdfConfig;
pub use kdf_prelude::{KdfError, Result};
pub use kdf_primitives::{DerivedKey, DigestAlgorithm};
pub use service::KdfService;
