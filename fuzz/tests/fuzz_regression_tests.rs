//! Fuzz Regression Tests
//!
//! Edge cases of the fuzz input layouts, kept as ordinary tests so they run
//! without libFuzzer.
//!
//! # Running Regression Tests
//!
//! ```bash
//! cargo test --test fuzz_regression_tests
//! ```

#![allow(clippy::unwrap_used)]

use kdf_prelude::KdfError;
use kdf_primitives::hash::DigestAlgorithm;
use kdf_primitives::kdf::{SskdfVariant, kbkdf_ctr_into, sskdf, sskdf_digest_into, sskdf_hmac_into};

mod kbkdf_regression {
    use super::*;

    /// Secret split at zero leaves everything in info
    #[test]
    fn test_all_bytes_in_info() {
        let mut out = [0u8; 32];
        let err = kbkdf_ctr_into(DigestAlgorithm::Sha256, &[], b"whole input", &mut out).unwrap_err();
        assert!(matches!(err, KdfError::InvalidArgument(_)));
        assert_eq!(out, [0u8; 32]);
    }

    /// Largest length the target asks for, on the shortest digest
    #[test]
    fn test_max_target_length_sha1() {
        let mut out = vec![0u8; 4095];
        kbkdf_ctr_into(DigestAlgorithm::Sha1, &[0xFF], &[], &mut out).unwrap();
        assert!(out.iter().any(|&b| b != 0));
    }

    /// Secret longer than the HMAC block size is hashed down, not rejected
    #[test]
    fn test_secret_longer_than_block() {
        let secret = [0x42u8; 255];
        for alg in DigestAlgorithm::ALL {
            let mut out = [0u8; 7];
            kbkdf_ctr_into(alg, &secret, b"", &mut out).unwrap();
        }
    }
}

mod sskdf_regression {
    use super::*;

    /// One-byte output on every digest
    #[test]
    fn test_single_byte_output() {
        for alg in DigestAlgorithm::ALL {
            let mut buf = [0xA5u8; 2];
            sskdf_digest_into(alg, b"s", b"", &mut buf[..1]).unwrap();
            assert_eq!(buf[1], 0xA5, "{alg} wrote past the requested length");
        }
    }

    /// Empty salt keys HMAC with a zero-length key
    #[test]
    fn test_empty_salt() {
        let mut with_empty = [0u8; 48];
        sskdf_hmac_into(DigestAlgorithm::Sha384, b"secret", b"info", b"", &mut with_empty).unwrap();

        // HMAC pads keys with zeros, so an all-zero salt of any length up to
        // the block size gives the same key.
        let mut with_zeros = [0u8; 48];
        sskdf_hmac_into(DigestAlgorithm::Sha384, b"secret", b"info", &[0u8; 16], &mut with_zeros)
            .unwrap();
        assert_eq!(with_empty, with_zeros);
    }

    /// Variant reuse after a rejected call
    #[test]
    fn test_variant_reuse_after_error() {
        let mut variant = SskdfVariant::hmac(DigestAlgorithm::Sha256, b"salt").unwrap();
        let mut out = [0u8; 40];
        assert!(sskdf(&mut variant, &[], b"info", &mut out).is_err());

        sskdf(&mut variant, b"secret", b"info", &mut out).unwrap();
        let mut fresh = [0u8; 40];
        sskdf_hmac_into(DigestAlgorithm::Sha256, b"secret", b"info", b"salt", &mut fresh).unwrap();
        assert_eq!(out, fresh);
    }
}
