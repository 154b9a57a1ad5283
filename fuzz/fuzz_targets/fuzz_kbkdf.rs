#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for SP 800-108 counter-mode KBKDF
//!
//! Arbitrary secrets, fixed info and output lengths must either derive
//! deterministically or fail only on an empty secret or a zero length.

use kdf_primitives::hash::DigestAlgorithm;
use kdf_primitives::kdf::kbkdf_ctr_into;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Layout: [alg][len_hi][len_lo][split][secret || info]
    if data.len() < 4 {
        return;
    }

    let algorithm = DigestAlgorithm::ALL[usize::from(data[0]) % DigestAlgorithm::ALL.len()];
    let out_len = usize::from(u16::from_be_bytes([data[1], data[2]])) % 4096;
    let rest = &data[4..];
    let split = usize::from(data[3]).min(rest.len());
    let (secret, info) = rest.split_at(split);

    let mut out = vec![0u8; out_len];
    let result = kbkdf_ctr_into(algorithm, secret, info, &mut out);

    if secret.is_empty() || out_len == 0 {
        assert!(result.is_err(), "empty secret or zero length must be rejected");
        return;
    }
    assert!(result.is_ok(), "valid KBKDF input must derive");

    let mut again = vec![0u8; out_len];
    assert!(kbkdf_ctr_into(algorithm, secret, info, &mut again).is_ok());
    assert_eq!(out, again, "KBKDF must be deterministic");

    let short_len = out_len / 2;
    if short_len > 0 {
        let mut short = vec![0u8; short_len];
        assert!(kbkdf_ctr_into(algorithm, secret, info, &mut short).is_ok());
        assert_eq!(short[..], out[..short_len], "shorter output must be a prefix");
    }
});
