//! Property-Based KDF Tests
//!
//! proptest checks of the derivation invariants over random secrets, info,
//! salts, output lengths and algorithms.
//!
//! ## Properties Tested
//!
//! - **Determinism**: same inputs, same output
//! - **Length Exactness**: exactly `out_len` bytes written, the rest untouched
//! - **Prefix Consistency**: a shorter request is a prefix of a longer one
//! - **Single-Block Reduction**: `out_len <= h_len` gives a prefix of block 1
//! - **Shape Distinction**: KBKDF and SSKDF-HMAC differ with `salt == secret`

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

#[cfg(test)]
mod tests {
    use kdf_primitives::hash::DigestAlgorithm;
    use kdf_primitives::kdf::*;
    use proptest::prelude::*;

    fn any_algorithm() -> impl Strategy<Value = DigestAlgorithm> {
        prop::sample::select(DigestAlgorithm::ALL.to_vec())
    }

    fn secret() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(any::<u8>(), 1..96)
    }

    fn info() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(any::<u8>(), 0..64)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn kbkdf_deterministic(
            alg in any_algorithm(),
            secret in secret(),
            info in info(),
            out_len in 1usize..300
        ) {
            let a = kbkdf_ctr(alg, &secret, &info, out_len).unwrap();
            let b = kbkdf_ctr(alg, &secret, &info, out_len).unwrap();
            prop_assert_eq!(a.key(), b.key());
        }

        #[test]
        fn sskdf_writes_exactly_out_len(
            alg in any_algorithm(),
            secret in secret(),
            info in info(),
            salt in info(),
            out_len in 1usize..200
        ) {
            let mut buf = vec![0xA5u8; out_len + 32];
            sskdf_hmac_into(alg, &secret, &info, &salt, &mut buf[..out_len]).unwrap();
            prop_assert!(buf[out_len..].iter().all(|&b| b == 0xA5));

            let mut buf = vec![0xA5u8; out_len + 32];
            sskdf_digest_into(alg, &secret, &info, &mut buf[..out_len]).unwrap();
            prop_assert!(buf[out_len..].iter().all(|&b| b == 0xA5));
        }

        #[test]
        fn shorter_output_is_prefix(
            alg in any_algorithm(),
            secret in secret(),
            info in info(),
            short in 1usize..150,
            extra in 0usize..150
        ) {
            let long_len = short + extra;
            let long = sskdf_digest(alg, &secret, &info, long_len).unwrap();
            let short_key = sskdf_digest(alg, &secret, &info, short).unwrap();
            prop_assert_eq!(short_key.key(), &long.key()[..short]);

            let long = kbkdf_ctr(alg, &secret, &info, long_len).unwrap();
            let short_key = kbkdf_ctr(alg, &secret, &info, short).unwrap();
            prop_assert_eq!(short_key.key(), &long.key()[..short]);
        }

        #[test]
        fn single_block_reduction(
            alg in any_algorithm(),
            secret in secret(),
            info in info(),
            salt in info(),
            cut in 1usize..=64
        ) {
            let out_len = cut.min(alg.output_len());
            let mut variant = SskdfVariant::hmac(alg, &salt).unwrap();
            let mut block = [0u8; 64];
            variant.compute(&mut block, &[0, 0, 0, 1], &secret, &info).unwrap();

            let key = sskdf_hmac(alg, &secret, &info, &salt, out_len).unwrap();
            prop_assert_eq!(key.key(), &block[..out_len]);
        }

        #[test]
        fn kbkdf_differs_from_sskdf_hmac(
            alg in any_algorithm(),
            secret in secret(),
            info in info()
        ) {
            let kb = kbkdf_ctr(alg, &secret, &info, 32).unwrap();
            let ss = sskdf_hmac(alg, &secret, &info, &secret, 32).unwrap();
            prop_assert_ne!(kb.key(), ss.key());
        }

        #[test]
        fn empty_secret_always_rejected(
            alg in any_algorithm(),
            info in info(),
            out_len in 1usize..100
        ) {
            prop_assert!(kbkdf_ctr(alg, &[], &info, out_len).is_err());
            prop_assert!(sskdf_digest(alg, &[], &info, out_len).is_err());
            prop_assert!(sskdf_hmac(alg, &[], &info, b"salt", out_len).is_err());
        }
    }
}
