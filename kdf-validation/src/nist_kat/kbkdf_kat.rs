#![deny(unsafe_code)]
#![allow(missing_docs)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! KBKDF Known Answer Tests
//!
//! SP 800-108 counter mode with an HMAC PRF, `r = 32` counter bits placed
//! before the fixed input data.
//!
//! ## Test Coverage
//! - Every HMAC hash family (SHA-1, SHA-2, SHA-512/t, SHA-3)
//! - Output lengths below, at and above one block, with a truncated last block
//! - Empty fixed input data
//!
//! Expected values are generated, not CAVP data; see the module docs of
//! [`super`] for their provenance.

use kdf_primitives::hash::DigestAlgorithm;
use kdf_primitives::kdf::{kbkdf_ctr, kbkdf_ctr_into};

use super::{NistKatError, decode_hex};

/// Test vector for KBKDF counter mode
pub struct KbkdfTestVector {
    pub test_name: &'static str,
    pub algorithm: DigestAlgorithm,
    pub key: &'static str,
    pub info: &'static str,
    pub expected: &'static str,
}

/// KBKDF-CTR test vectors, one or more per HMAC hash
pub const KBKDF_CTR_HMAC_VECTORS: &[KbkdfTestVector] = &[
    KbkdfTestVector {
        test_name: "KBKDF-CTR-HMAC-SHA256-L128",
        algorithm: DigestAlgorithm::Sha256,
        key: "0185fb7661f6dd408d982f810fcd5004",
        info: "c3f1712a82613643e0f763a7a0a31588b6aed95056dfc512550cf2d00d68a32d",
        expected: "c63f747b67be71f57ba4562117dd2904",
    },
    KbkdfTestVector {
        test_name: "KBKDF-CTR-HMAC-SHA1-L320",
        algorithm: DigestAlgorithm::Sha1,
        key: "ad1f9f9f23f1f583b2dfbfca8e5e3e82",
        info: "a408f706cedca5696cd9fda2d49eb54f8e38e67253fa3a5d",
        expected: "71f14d6a4a64e7fd29b38a4c23a46b107a65caeb8f6e1a7c36adc65c8d86abe9ced38996b2b7d941",
    },
    KbkdfTestVector {
        test_name: "KBKDF-CTR-HMAC-SHA224-L224",
        algorithm: DigestAlgorithm::Sha224,
        key: "7ec76a184394cacb44a2eacb0f1c75ccaf74ac19ff378750c4ff9d0a139472a8",
        info: "59c92cbd6c044276c5fd6ed51e965ecb",
        expected: "c4075ad04e080e437ee93aafa353fbd31a93d7a0bad1893f82557f59",
    },
    KbkdfTestVector {
        test_name: "KBKDF-CTR-HMAC-SHA256-L512",
        algorithm: DigestAlgorithm::Sha256,
        key: "382e8aa98029b1a666fa688e589806f29cf9ca218b14635a65e3be2153b3b44e",
        info: "93df879f4ae543b1011e9e941f4bf8909e195c568f5817906b9815982c0e453e",
        expected: "815e9f30478744b76e95682a01e96d1b779ea7056ad3e59bf1d86ef68368ab6cb3b879be003d61adaef207522bdaa8d88b19f6d000a13de83fa6875cc0bfe3d2",
    },
    KbkdfTestVector {
        test_name: "KBKDF-CTR-HMAC-SHA384-L800",
        algorithm: DigestAlgorithm::Sha384,
        key: "65f773a06ab3644f42f962e824d0cce9b5cff67dfb475148d7883db3155ce42b0da314528af71f9f8d7fcb3b24cb6ffc",
        info: "f5067e63858fb071ed84c6ed3e8f255297f1f874",
        expected: "464826181a5dbb1cea157f5ad48e50d2688da90142d5dd533d5a75d41fd8130c991dc5a2846f68299418e3d2fd43b5bd40c78dc6c929352fc4492d48cf1964c24ae4f1b4e432e33c96213ed9a0bbdff58a572dc1fcaecfd78c9a08a69a9cdef30be37c8b",
    },
    KbkdfTestVector {
        test_name: "KBKDF-CTR-HMAC-SHA512-L512",
        algorithm: DigestAlgorithm::Sha512,
        key: "42ffffeaedf95e60055c4d144e9679eda7c8878404f6963afe6d775023695d50d6b2f25a702ef000f9e18de66db2ee36d317c0624a76eebbe49d7fb09015dc47",
        info: "",
        expected: "79beef0a1c8019ca38406732a92a1d49a967ddab42b61adc9411462e09c8602657ec874cb0242855534552857612445c11c1e87f84f138bbd77c9ea4273bc398",
    },
    KbkdfTestVector {
        test_name: "KBKDF-CTR-HMAC-SHA512-256-L264",
        algorithm: DigestAlgorithm::Sha512_256,
        key: "d1c854a0eeac2494e649463f5d77a1db6716286145694ca67cff8a81ea123ed3",
        info: "c8807c4478d80f6660f6a052",
        expected: "f0ab322a680cab0c13053d2c4dc6980ba9970bdc13beb70353166b269b5515f45e",
    },
    KbkdfTestVector {
        test_name: "KBKDF-CTR-HMAC-SHA3-256-L256",
        algorithm: DigestAlgorithm::Sha3_256,
        key: "180e96e9194b79e5293c85d5a927d6e4c826999d1aada834419797a6d4abd10c",
        info: "38462ef6cbe841312c86dce0d582d7ac514604d8af3310917156e14250eecf72",
        expected: "0b4a755669a293e3e71816754e99f38aac6576c549d4f27319c046c870102c2e",
    },
    KbkdfTestVector {
        test_name: "KBKDF-CTR-HMAC-SHA3-512-L1040",
        algorithm: DigestAlgorithm::Sha3_512,
        key: "c42412b103db68f92a79aa4d9c7eb8f7051940e446005741ae5dc618a8cfae0e142a8423394f038f8ccebd012b75ab34f163ef0fafd81511036429890c65f30b",
        info: "611abce283939e4746f6d0ac4156ad0286664bc38730892e8612764c97e7524f9e77924c97a7f65c",
        expected: "014df93c5a663967add643a74a7502ff990e5e1c532b5300c44413b09342f65f9e3d137c889f5692ceedf64e7191bb657654cf93329d81d1d246cfdfe1e3a94ab9838f611a92eabea60931cee78e80cc2280a5fe0bd5644e72a370af757c52f47035f3f4fb5d02ff554ac5a0c2593e64b355c5e9d28b6993b9134c0bb3ed6caf745b",
    },
];

/// Run every KBKDF-CTR vector.
///
/// # Errors
///
/// Returns `NistKatError` for the first vector that fails.
pub fn run_kbkdf_kat() -> Result<(), NistKatError> {
    for vector in KBKDF_CTR_HMAC_VECTORS {
        run_kbkdf_test(vector)?;
    }
    Ok(())
}

/// Run one KBKDF-CTR vector through both the buffer and allocating forms.
///
/// # Errors
///
/// Returns `NistKatError::TestFailed` on a mismatch and
/// `NistKatError::ImplementationError` if derivation itself fails.
pub fn run_kbkdf_test(vector: &KbkdfTestVector) -> Result<(), NistKatError> {
    let key = decode_hex(vector.key)?;
    let info = decode_hex(vector.info)?;
    let expected = decode_hex(vector.expected)?;
    let algorithm = format!("KBKDF-CTR-HMAC-{}", vector.algorithm);

    let mut okm = vec![0u8; expected.len()];
    kbkdf_ctr_into(vector.algorithm, &key, &info, &mut okm)
        .map_err(|e| NistKatError::ImplementationError(format!("{algorithm}: {e}")))?;

    if okm != expected {
        return Err(NistKatError::TestFailed {
            algorithm,
            test_name: vector.test_name.to_string(),
            message: format!(
                "OKM mismatch: got {}, expected {}",
                hex::encode(&okm),
                hex::encode(&expected)
            ),
        });
    }

    let derived = kbkdf_ctr(vector.algorithm, &key, &info, expected.len())?;
    if derived.key() != expected.as_slice() {
        return Err(NistKatError::TestFailed {
            algorithm,
            test_name: vector.test_name.to_string(),
            message: "allocating form disagrees with buffer form".to_string(),
        });
    }

    Ok(())
}
