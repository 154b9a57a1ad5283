//! # Logging Utilities
//!
//! Structured logging for the key-derivation service, built on `tracing`.
//! Secrets, salts and derived keys are never formatted; only their lengths.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kdf_core::logging::{init_tracing, sanitize_data};
//!
//! // Installs the global subscriber; call once per process
//! init_tracing().expect("Failed to init tracing");
//!
//! let secret = b"shared secret";
//! tracing::info!("derivation input: {}", sanitize_data(secret));
//! ```

use std::fmt;

use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "kdf=info";

/// Failure to install the global subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A global subscriber is already installed
    #[error("failed to install tracing subscriber: {0}")]
    SubscriberInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Initialize tracing with an `EnvFilter` and a compact formatter.
///
/// # Errors
/// Returns `LoggingError::SubscriberInit` if a global subscriber has already
/// been set.
pub fn init_tracing() -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init()?;

    info!("KDF logging initialized");
    Ok(())
}

/// Wrap bytes so that formatting prints their length only.
#[must_use]
pub fn sanitize_data(data: &[u8]) -> SanitizedData<'_> {
    SanitizedData(data)
}

/// Display wrapper returned by [`sanitize_data`]
pub struct SanitizedData<'a>(&'a [u8]);

impl fmt::Display for SanitizedData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} bytes]", self.0.len())
    }
}

impl fmt::Debug for SanitizedData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
