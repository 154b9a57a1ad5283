#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for the SP 800-56C one-step KDF over a plain hash
//!
//! Checks that derivation never panics, writes only the requested bytes and
//! agrees with a hand-rolled first block.

use kdf_primitives::hash::{DigestAlgorithm, DigestContext};
use kdf_primitives::kdf::sskdf_digest_into;
use libfuzzer_sys::fuzz_target;

const GUARD: u8 = 0xA5;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let algorithm = DigestAlgorithm::ALL[usize::from(data[0]) % DigestAlgorithm::ALL.len()];
    let out_len = usize::from(u16::from_be_bytes([data[1], data[2]])) % 4096;
    let rest = &data[4..];
    let split = usize::from(data[3]).min(rest.len());
    let (secret, info) = rest.split_at(split);

    let mut buf = vec![GUARD; out_len + 16];
    let result = sskdf_digest_into(algorithm, secret, info, &mut buf[..out_len]);
    assert!(buf[out_len..].iter().all(|&b| b == GUARD), "bytes past out_len must be untouched");

    if secret.is_empty() || out_len == 0 {
        assert!(result.is_err());
        return;
    }
    assert!(result.is_ok(), "valid SSKDF input must derive");

    let mut ctx = DigestContext::new(algorithm);
    ctx.update(&1u32.to_be_bytes());
    ctx.update(secret);
    ctx.update(info);
    let mut block = [0u8; 64];
    assert!(ctx.finalize_into(&mut block).is_ok());

    let first = out_len.min(algorithm.output_len());
    assert_eq!(buf[..first], block[..first], "first block must be H(1 || secret || info)");
});
