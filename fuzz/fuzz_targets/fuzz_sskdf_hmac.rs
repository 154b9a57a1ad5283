#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for the SP 800-56C one-step KDF over HMAC
//!
//! Salts of any length, including empty and longer than the hash block,
//! must key the HMAC without error.

use kdf_primitives::hash::DigestAlgorithm;
use kdf_primitives::kdf::{SskdfVariant, sskdf, sskdf_hmac_into};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Layout: [alg][len][salt_len][secret_len][salt || secret || info]
    if data.len() < 4 {
        return;
    }

    let algorithm = DigestAlgorithm::ALL[usize::from(data[0]) % DigestAlgorithm::ALL.len()];
    let out_len = usize::from(data[1]) * 3;
    let rest = &data[4..];
    let (salt, rest) = rest.split_at(usize::from(data[2]).min(rest.len()));
    let (secret, info) = rest.split_at(usize::from(data[3]).min(rest.len()));

    let variant = SskdfVariant::hmac(algorithm, salt);
    assert!(variant.is_ok(), "HMAC must accept any salt length");

    let mut out = vec![0u8; out_len];
    let result = sskdf_hmac_into(algorithm, secret, info, salt, &mut out);
    if secret.is_empty() || out_len == 0 {
        assert!(result.is_err());
        return;
    }
    assert!(result.is_ok(), "valid SSKDF-HMAC input must derive");

    // A reused variant must give the same result as a fresh one.
    if let Ok(mut variant) = variant {
        let mut first = vec![0u8; out_len];
        let mut second = vec![0u8; out_len];
        assert!(sskdf(&mut variant, secret, info, &mut first).is_ok());
        assert!(sskdf(&mut variant, secret, info, &mut second).is_ok());
        assert_eq!(first, out);
        assert_eq!(second, out);
    }
});
