//! Configured derivation service.
//!
//! [`KdfService`] puts the module-state gate and the output cap of a
//! [`KdfConfig`] in front of the counter-mode KDFs of `kdf-primitives`.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use kdf_prelude::error::requires_security_response;
use kdf_prelude::{KdfError, Result};
use kdf_primitives::hash::DigestAlgorithm;
use kdf_primitives::kdf::{self, DerivedKey};
use kdf_primitives::self_test;
use tracing::{debug, error, info, warn};

use crate::config::KdfConfig;
use crate::logging::sanitize_data;

/// Put the module into an error state when a derivation fails in a way that
/// questions the primitives themselves rather than the caller's arguments.
fn escalate(error: &KdfError) {
    if requires_security_response(error) {
        error!(kind = error.kind(), error = %error, "derivation fault, disabling module");
        self_test::set_module_error(self_test::ModuleErrorCode::CriticalCryptoError);
    }
}

/// Key-derivation entry point holding a validated [`KdfConfig`].
///
/// The methods without an algorithm argument use
/// [`KdfConfig::default_algorithm`]; the `*_with` forms take one explicitly.
#[derive(Debug, Clone)]
pub struct KdfService {
    config: KdfConfig,
}

impl KdfService {
    /// Validate `config` and, if enabled, run the power-up self-tests.
    ///
    /// # Errors
    ///
    /// - `KdfError::InvalidConfiguration` if the configuration is invalid
    /// - `KdfError::NotOperational` if the self-tests fail while
    ///   `require_self_test` is set
    pub fn new(config: KdfConfig) -> Result<Self> {
        config.validate()?;

        if config.run_self_test_on_init {
            let result = self_test::initialize_and_test();
            if let self_test::SelfTestResult::Fail(reason) = result {
                error!(%reason, "power-up self-tests failed");
                if config.require_self_test {
                    return Err(KdfError::NotOperational(format!(
                        "power-up self-tests failed: {reason}"
                    )));
                }
            } else {
                info!("power-up self-tests passed");
            }
        }

        Ok(Self { config })
    }

    /// Service built from [`KdfConfig::default`].
    ///
    /// # Errors
    /// See [`KdfService::new`].
    pub fn with_defaults() -> Result<Self> {
        Self::new(KdfConfig::default())
    }

    /// The configuration in use
    #[must_use]
    pub fn config(&self) -> &KdfConfig {
        &self.config
    }

    fn admit(&self, operation: &'static str, out_len: usize) -> Result<()> {
        if self.config.require_self_test {
            self_test::verify_operational().inspect_err(|e| {
                warn!(operation, error = %e, "derivation refused");
            })?;
        }
        self.config.check_output_len(out_len).inspect_err(|e| {
            debug!(operation, out_len, error = %e, "derivation refused");
        })
    }

    /// KBKDF in counter mode with the default digest.
    ///
    /// # Errors
    /// See [`KdfService::kbkdf_ctr_with`].
    pub fn kbkdf_ctr(&self, secret: &[u8], info: &[u8], out_len: usize) -> Result<DerivedKey> {
        self.kbkdf_ctr_with(self.config.default_algorithm, secret, info, out_len)
    }

    /// KBKDF in counter mode with an explicit digest.
    ///
    /// # Errors
    /// `KdfError::NotOperational` when gated on the self-tests and the module
    /// is not operational, `KdfError::InvalidArgument` above the output cap,
    /// otherwise whatever [`kdf::kbkdf_ctr`] returns. A primitive or context
    /// failure also puts the module into an error state.
    pub fn kbkdf_ctr_with(
        &self,
        algorithm: DigestAlgorithm,
        secret: &[u8],
        info: &[u8],
        out_len: usize,
    ) -> Result<DerivedKey> {
        self.admit("kbkdf_ctr", out_len)?;
        debug!(%algorithm, secret = %sanitize_data(secret), out_len, "KBKDF");
        kdf::kbkdf_ctr(algorithm, secret, info, out_len).inspect_err(escalate)
    }

    /// KBKDF into a caller buffer with the default digest.
    ///
    /// # Errors
    /// See [`KdfService::kbkdf_ctr_with`].
    pub fn kbkdf_ctr_into(&self, secret: &[u8], info: &[u8], out: &mut [u8]) -> Result<()> {
        self.kbkdf_ctr_into_with(self.config.default_algorithm, secret, info, out)
    }

    /// KBKDF into a caller buffer with an explicit digest.
    ///
    /// # Errors
    /// See [`KdfService::kbkdf_ctr_with`].
    pub fn kbkdf_ctr_into_with(
        &self,
        algorithm: DigestAlgorithm,
        secret: &[u8],
        info: &[u8],
        out: &mut [u8],
    ) -> Result<()> {
        self.admit("kbkdf_ctr", out.len())?;
        debug!(%algorithm, secret = %sanitize_data(secret), out_len = out.len(), "KBKDF");
        kdf::kbkdf_ctr_into(algorithm, secret, info, out).inspect_err(escalate)
    }

    /// One-step KDF over a plain hash with the default digest.
    ///
    /// # Errors
    /// See [`KdfService::sskdf_digest_with`].
    pub fn sskdf_digest(&self, secret: &[u8], info: &[u8], out_len: usize) -> Result<DerivedKey> {
        self.sskdf_digest_with(self.config.default_algorithm, secret, info, out_len)
    }

    /// One-step KDF over a plain hash with an explicit digest.
    ///
    /// # Errors
    /// Service gate errors as for [`KdfService::kbkdf_ctr_with`], otherwise
    /// whatever [`kdf::sskdf_digest`] returns.
    pub fn sskdf_digest_with(
        &self,
        algorithm: DigestAlgorithm,
        secret: &[u8],
        info: &[u8],
        out_len: usize,
    ) -> Result<DerivedKey> {
        self.admit("sskdf_digest", out_len)?;
        debug!(%algorithm, secret = %sanitize_data(secret), out_len, "SSKDF hash");
        kdf::sskdf_digest(algorithm, secret, info, out_len).inspect_err(escalate)
    }

    /// One-step hash KDF into a caller buffer with the default digest.
    ///
    /// # Errors
    /// See [`KdfService::sskdf_digest_with`].
    pub fn sskdf_digest_into(&self, secret: &[u8], info: &[u8], out: &mut [u8]) -> Result<()> {
        self.sskdf_digest_into_with(self.config.default_algorithm, secret, info, out)
    }

    /// One-step hash KDF into a caller buffer with an explicit digest.
    ///
    /// # Errors
    /// See [`KdfService::sskdf_digest_with`].
    pub fn sskdf_digest_into_with(
        &self,
        algorithm: DigestAlgorithm,
        secret: &[u8],
        info: &[u8],
        out: &mut [u8],
    ) -> Result<()> {
        self.admit("sskdf_digest", out.len())?;
        debug!(%algorithm, secret = %sanitize_data(secret), out_len = out.len(), "SSKDF hash");
        kdf::sskdf_digest_into(algorithm, secret, info, out).inspect_err(escalate)
    }

    /// One-step KDF over HMAC keyed by `salt` with the default digest.
    ///
    /// # Errors
    /// See [`KdfService::sskdf_hmac_with`].
    pub fn sskdf_hmac(
        &self,
        secret: &[u8],
        info: &[u8],
        salt: &[u8],
        out_len: usize,
    ) -> Result<DerivedKey> {
        self.sskdf_hmac_with(self.config.default_algorithm, secret, info, salt, out_len)
    }

    /// One-step KDF over HMAC keyed by `salt` with an explicit digest.
    ///
    /// # Errors
    /// Service gate errors as for [`KdfService::kbkdf_ctr_with`], otherwise
    /// whatever [`kdf::sskdf_hmac`] returns.
    pub fn sskdf_hmac_with(
        &self,
        algorithm: DigestAlgorithm,
        secret: &[u8],
        info: &[u8],
        salt: &[u8],
        out_len: usize,
    ) -> Result<DerivedKey> {
        self.admit("sskdf_hmac", out_len)?;
        debug!(
            %algorithm,
            secret = %sanitize_data(secret),
            salt = %sanitize_data(salt),
            out_len,
            "SSKDF HMAC"
        );
        kdf::sskdf_hmac(algorithm, secret, info, salt, out_len).inspect_err(escalate)
    }

    /// One-step HMAC KDF into a caller buffer with the default digest.
    ///
    /// # Errors
    /// See [`KdfService::sskdf_hmac_with`].
    pub fn sskdf_hmac_into(
        &self,
        secret: &[u8],
        info: &[u8],
        salt: &[u8],
        out: &mut [u8],
    ) -> Result<()> {
        self.sskdf_hmac_into_with(self.config.default_algorithm, secret, info, salt, out)
    }

    /// One-step HMAC KDF into a caller buffer with an explicit digest.
    ///
    /// # Errors
    /// See [`KdfService::sskdf_hmac_with`].
    pub fn sskdf_hmac_into_with(
        &self,
        algorithm: DigestAlgorithm,
        secret: &[u8],
        info: &[u8],
        salt: &[u8],
        out: &mut [u8],
    ) -> Result<()> {
        self.admit("sskdf_hmac", out.len())?;
        debug!(
            %algorithm,
            secret = %sanitize_data(secret),
            salt = %sanitize_data(salt),
            out_len = out.len(),
            "SSKDF HMAC"
        );
        kdf::sskdf_hmac_into(algorithm, secret, info, salt, out).inspect_err(escalate)
    }
}
