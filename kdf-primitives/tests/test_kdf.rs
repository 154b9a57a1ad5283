#![deny(unsafe_code)]
// Test files use unwrap() for simplicity - test failures will show clear panics
#![allow(clippy::unwrap_used)]
// Test files use indexing for test vector access
#![allow(clippy::indexing_slicing)]

//! Tests for the counter-mode key derivation functions
//!
//! - SP 800-56C single-step KDF (plain hash and HMAC)
//! - SP 800-108 counter-mode KDF (HMAC PRF)
//!
//! Expected values are either fixed vectors or recomputed here from the raw
//! `sha2` / `hmac` primitives, block by block.

use hex_literal::hex;
use hmac::{Hmac, Mac};
use kdf_primitives::hash::DigestAlgorithm;
use kdf_primitives::kdf::*;
use kdf_primitives::KdfError;
use sha2::{Digest, Sha256};

fn hmac_sha256(key: &[u8], parts: &[&[u8]]) -> Vec<u8> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).unwrap();
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().to_vec()
}

mod scenarios {
    use super::*;

    #[test]
    fn test_scenario_a_sha256_single_block() {
        let secret = [0x01u8; 32];
        let mut out = [0u8; 32];
        sskdf_digest_into(DigestAlgorithm::Sha256, &secret, b"", &mut out).unwrap();

        let mut hasher = Sha256::new();
        hasher.update([0x00, 0x00, 0x00, 0x01]);
        hasher.update(secret);
        let expected: [u8; 32] = hasher.finalize().into();

        assert_eq!(out, expected);
        assert_eq!(out, hex!("f03fb92fb76fce8fd8b2d7e4d48c466f3ba15408db67b40992c22d0a74e73927"));
    }

    #[test]
    fn test_scenario_b_hmac_sha256_two_blocks() {
        let secret = b"shared secret Z for scenario B!!";
        let info = b"party-U||party-V";
        let salt = [0u8; 16];
        let mut out = [0u8; 64];
        sskdf_hmac_into(DigestAlgorithm::Sha256, secret, info, &salt, &mut out).unwrap();

        let block1 = hmac_sha256(&salt, &[&[0, 0, 0, 1], secret, info]);
        let block2 = hmac_sha256(&salt, &[&[0, 0, 0, 2], secret, info]);
        assert_eq!(&out[..32], block1.as_slice());
        assert_eq!(&out[32..], block2.as_slice());
        assert_eq!(
            out,
            hex!(
                "4413b4c5e802b698d6c52ba07fb4f0a49d8127b145a2b0650112da9de27fe7b0"
                "f45a8c879488745bcf39995e9c4714cc925a159638be3bdf40a3fe0e665fc077"
            )
        );
    }

    #[test]
    fn test_scenario_c_kbkdf_sha1_exact_block() {
        let key: Vec<u8> = (0u8..20).collect();
        let label = b"label L";
        let mut out = [0u8; 20];
        kbkdf_ctr_into(DigestAlgorithm::Sha1, &key, label, &mut out).unwrap();

        let mut mac = Hmac::<sha1::Sha1>::new_from_slice(&key).unwrap();
        mac.update(&[0, 0, 0, 1]);
        mac.update(label);
        assert_eq!(out.as_slice(), mac.finalize().into_bytes().as_slice());
        assert_eq!(out, hex!("e7a5bb5026a85c9927a45bb44fadc60fbefe0f0f"));
    }
}

mod properties {
    use super::*;

    #[test]
    fn test_deterministic() {
        for alg in DigestAlgorithm::ALL {
            let a = kbkdf_ctr(alg, b"secret", b"info", 77).unwrap();
            let b = kbkdf_ctr(alg, b"secret", b"info", 77).unwrap();
            assert_eq!(a, b, "{alg} KBKDF not deterministic");

            let a = sskdf_digest(alg, b"secret", b"info", 77).unwrap();
            let b = sskdf_digest(alg, b"secret", b"info", 77).unwrap();
            assert_eq!(a, b, "{alg} SSKDF not deterministic");

            let a = sskdf_hmac(alg, b"secret", b"info", b"salt", 77).unwrap();
            let b = sskdf_hmac(alg, b"secret", b"info", b"salt", 77).unwrap();
            assert_eq!(a, b, "{alg} SSKDF-HMAC not deterministic");
        }
    }

    #[test]
    fn test_bytes_past_out_len_untouched() {
        let mut buf = [0xEEu8; 100];
        sskdf_digest_into(DigestAlgorithm::Sha384, b"secret", b"info", &mut buf[..61]).unwrap();
        assert!(buf[61..].iter().all(|&b| b == 0xEE));

        let mut buf = [0xEEu8; 100];
        kbkdf_ctr_into(DigestAlgorithm::Sha1, b"secret", b"info", &mut buf[..41]).unwrap();
        assert!(buf[41..].iter().all(|&b| b == 0xEE));

        let mut buf = [0xEEu8; 100];
        sskdf_hmac_into(DigestAlgorithm::Sha3_224, b"secret", b"info", b"", &mut buf[..29])
            .unwrap();
        assert!(buf[29..].iter().all(|&b| b == 0xEE));
    }

    #[test]
    fn test_short_output_is_prefix_of_first_block() {
        for alg in DigestAlgorithm::ALL {
            let h_len = alg.output_len();
            let full = sskdf_digest(alg, b"secret", b"info", h_len).unwrap();
            for out_len in [1, h_len / 2, h_len - 1] {
                let short = sskdf_digest(alg, b"secret", b"info", out_len).unwrap();
                assert_eq!(short.key(), &full.key()[..out_len], "{alg} out_len {out_len}");
            }
        }
    }

    #[test]
    fn test_longer_output_extends_shorter() {
        // prefix consistency across lengths, including mid-block cut points
        let long = kbkdf_ctr(DigestAlgorithm::Sha512, b"secret", b"info", 300).unwrap();
        for out_len in [1, 63, 64, 65, 128, 200, 299] {
            let short = kbkdf_ctr(DigestAlgorithm::Sha512, b"secret", b"info", out_len).unwrap();
            assert_eq!(short.key(), &long.key()[..out_len]);
        }
    }

    #[test]
    fn test_multi_block_concatenation_with_truncation() {
        let secret = b"multi-block secret";
        let info = b"ctx";
        let key = sskdf_hmac(DigestAlgorithm::Sha256, secret, info, b"salt", 70).unwrap();

        let mut expected = Vec::new();
        for counter in 1u32..=3 {
            expected.extend(hmac_sha256(b"salt", &[&counter.to_be_bytes(), secret, info]));
        }
        expected.truncate(70);
        assert_eq!(key.key(), expected.as_slice());
    }

    #[test]
    fn test_info_and_salt_change_output() {
        let base = sskdf_hmac(DigestAlgorithm::Sha256, b"secret", b"info", b"salt", 32).unwrap();
        let other_info =
            sskdf_hmac(DigestAlgorithm::Sha256, b"secret", b"info2", b"salt", 32).unwrap();
        let other_salt =
            sskdf_hmac(DigestAlgorithm::Sha256, b"secret", b"info", b"salt2", 32).unwrap();
        assert_ne!(base, other_info);
        assert_ne!(base, other_salt);
    }

    #[test]
    fn test_empty_info_accepted() {
        assert!(kbkdf_ctr(DigestAlgorithm::Sha256, b"secret", b"", 32).is_ok());
        assert!(sskdf_digest(DigestAlgorithm::Sha256, b"secret", b"", 32).is_ok());
        assert!(sskdf_hmac(DigestAlgorithm::Sha256, b"secret", b"", b"", 32).is_ok());
    }
}

mod construction_shapes {
    use super::*;

    // KBKDF keys with the secret and hashes counter || info; SSKDF-HMAC keys
    // with the salt and hashes counter || secret || info. Same bytes in both
    // roles must still give different output.
    #[test]
    fn test_kbkdf_differs_from_sskdf_hmac_with_salt_equal_to_secret() {
        let secret = b"the same bytes everywhere";
        let info = b"info";
        let kb = kbkdf_ctr(DigestAlgorithm::Sha256, secret, info, 32).unwrap();
        let ss = sskdf_hmac(DigestAlgorithm::Sha256, secret, info, secret, 32).unwrap();
        assert_ne!(kb, ss);

        assert_eq!(kb.key(), hmac_sha256(secret, &[&[0, 0, 0, 1], info]).as_slice());
        assert_eq!(ss.key(), hmac_sha256(secret, &[&[0, 0, 0, 1], secret, info]).as_slice());
    }

    #[test]
    fn test_digest_and_hmac_variants_differ() {
        let digest = sskdf_digest(DigestAlgorithm::Sha256, b"secret", b"info", 32).unwrap();
        let keyed = sskdf_hmac(DigestAlgorithm::Sha256, b"secret", b"info", b"", 32).unwrap();
        assert_ne!(digest, keyed);
    }

    #[test]
    fn test_variant_single_block_matches_engine() {
        let mut variant = SskdfVariant::hmac(DigestAlgorithm::Sha384, b"salt").unwrap();
        let mut block = [0u8; 48];
        variant.compute(&mut block, &[0, 0, 0, 1], b"secret", b"info").unwrap();

        let mut out = [0u8; 20];
        sskdf_hmac_into(DigestAlgorithm::Sha384, b"secret", b"info", b"salt", &mut out).unwrap();
        assert_eq!(out, block[..20]);
    }
}

mod rejections {
    use super::*;

    #[test]
    fn test_empty_secret_rejected_everywhere() {
        let mut out = [0u8; 32];
        for result in [
            kbkdf_ctr_into(DigestAlgorithm::Sha256, b"", b"info", &mut out),
            sskdf_digest_into(DigestAlgorithm::Sha256, b"", b"info", &mut out),
            sskdf_hmac_into(DigestAlgorithm::Sha256, b"", b"info", b"salt", &mut out),
        ] {
            assert!(matches!(result, Err(KdfError::InvalidArgument(_))), "{result:?}");
        }
    }

    #[test]
    fn test_empty_output_rejected_everywhere() {
        for result in [
            kbkdf_ctr_into(DigestAlgorithm::Sha256, b"secret", b"info", &mut []),
            sskdf_digest_into(DigestAlgorithm::Sha256, b"secret", b"info", &mut []),
            sskdf_hmac_into(DigestAlgorithm::Sha256, b"secret", b"info", b"salt", &mut []),
        ] {
            assert!(matches!(result, Err(KdfError::InvalidArgument(_))), "{result:?}");
        }
        assert!(kbkdf_ctr(DigestAlgorithm::Sha256, b"secret", b"info", 0).is_err());
        assert!(sskdf_digest(DigestAlgorithm::Sha256, b"secret", b"info", 0).is_err());
        assert!(sskdf_hmac(DigestAlgorithm::Sha256, b"secret", b"info", b"salt", 0).is_err());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_counter_space_exhaustion_rejected_before_allocation() {
        for alg in [DigestAlgorithm::Sha1, DigestAlgorithm::Sha256, DigestAlgorithm::Sha3_512] {
            let too_long = u32::MAX as usize * alg.output_len() + 1;
            assert!(matches!(
                kbkdf_ctr(alg, b"secret", b"info", too_long),
                Err(KdfError::LengthOverflow(_))
            ));
            assert!(matches!(
                sskdf_digest(alg, b"secret", b"info", too_long),
                Err(KdfError::LengthOverflow(_))
            ));
            assert!(matches!(
                sskdf_hmac(alg, b"secret", b"info", b"salt", too_long),
                Err(KdfError::LengthOverflow(_))
            ));
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_oversized_allocation_returns_error() {
        let huge = u32::MAX as usize * 64;
        assert!(kbkdf_ctr(DigestAlgorithm::Sha512, b"secret", b"info", huge).is_err());
        assert!(sskdf_digest(DigestAlgorithm::Sha3_512, b"secret", b"info", huge).is_err());
        assert!(sskdf_hmac(DigestAlgorithm::Sha512, b"secret", b"info", b"salt", huge).is_err());
    }

    #[test]
    fn test_errors_do_not_leak_secret() {
        let err = kbkdf_ctr(DigestAlgorithm::Sha256, b"", b"TOP-SECRET-INFO", 0).unwrap_err();
        assert!(!err.to_string().contains("TOP-SECRET"));
        assert!(!err.is_retryable());
    }
}
