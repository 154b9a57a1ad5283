//! Configuration for the key-derivation service.
//!
//! [`KdfConfig`] decides whether derivations are gated on the power-up
//! self-tests, which digest the shorthand service methods use, and an
//! optional cap on the output length a caller may request.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use kdf_prelude::{KdfError, Result};
use kdf_primitives::hash::DigestAlgorithm;
use serde::{Deserialize, Serialize};

/// Service-level derivation settings.
///
/// # Examples
/// ```rust
/// use kdf_core::config::KdfConfig;
/// use kdf_primitives::hash::DigestAlgorithm;
///
/// let config = KdfConfig::new()
///     .with_default_algorithm(DigestAlgorithm::Sha384)
///     .with_max_output_len(Some(1024))
///     .build()
///     .expect("valid config");
/// assert!(config.require_self_test);
///
/// let dev_config = KdfConfig::for_development();
/// assert!(!dev_config.require_self_test);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdfConfig {
    /// Refuse service unless the module is operational.
    ///
    /// Default: `true`
    pub require_self_test: bool,

    /// Run the power-up known-answer tests when a service is created.
    ///
    /// Default: `true`
    pub run_self_test_on_init: bool,

    /// Digest used by the service methods that take no explicit algorithm.
    ///
    /// Default: `DigestAlgorithm::Sha256`
    pub default_algorithm: DigestAlgorithm,

    /// Largest output a single call may request, or `None` for no cap
    /// beyond the counter space of the chosen digest.
    ///
    /// Default: `None`
    pub max_output_len: Option<usize>,
}

impl Default for KdfConfig {
    fn default() -> Self {
        Self {
            require_self_test: true,
            run_self_test_on_init: true,
            default_algorithm: DigestAlgorithm::Sha256,
            max_output_len: None,
        }
    }
}

impl KdfConfig {
    /// Create a configuration with the defaults listed on each field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for development: derivations are not gated on the
    /// self-tests.
    #[must_use]
    pub fn for_development() -> Self {
        Self::default().with_self_test_required(false)
    }

    /// Configuration for production: self-tests run at start-up and gate
    /// every derivation.
    #[must_use]
    pub fn for_production() -> Self {
        Self::default().with_self_test_required(true).with_self_test_on_init(true)
    }

    /// Set whether derivations require an operational module.
    #[must_use]
    pub fn with_self_test_required(mut self, required: bool) -> Self {
        self.require_self_test = required;
        self
    }

    /// Set whether the service runs the power-up tests on creation.
    #[must_use]
    pub fn with_self_test_on_init(mut self, enabled: bool) -> Self {
        self.run_self_test_on_init = enabled;
        self
    }

    /// Set the digest for the shorthand service methods.
    #[must_use]
    pub fn with_default_algorithm(mut self, algorithm: DigestAlgorithm) -> Self {
        self.default_algorithm = algorithm;
        self
    }

    /// Set or remove the per-call output cap.
    #[must_use]
    pub fn with_max_output_len(mut self, max_output_len: Option<usize>) -> Self {
        self.max_output_len = max_output_len;
        self
    }

    /// Validate and return the configuration.
    ///
    /// # Errors
    ///
    /// See [`KdfConfig::validate`].
    pub fn build(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `KdfError::InvalidConfiguration` if `max_output_len` is
    /// `Some(0)`, which would reject every request.
    pub fn validate(&self) -> Result<()> {
        if self.max_output_len == Some(0) {
            return Err(KdfError::InvalidConfiguration(
                "max_output_len must be non-zero when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Check a requested output length against the configured cap.
    ///
    /// # Errors
    ///
    /// Returns `KdfError::InvalidArgument` if `out_len` exceeds the cap.
    pub fn check_output_len(&self, out_len: usize) -> Result<()> {
        match self.max_output_len {
            Some(max) if out_len > max => Err(KdfError::InvalidArgument(format!(
                "requested {out_len} bytes exceeds configured maximum of {max}"
            ))),
            _ => Ok(()),
        }
    }
}
