#![deny(unsafe_code)]
#![allow(missing_docs)]
#![warn(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! SSKDF Known Answer Tests
//!
//! SP 800-56C single-step key derivation, both auxiliary functions:
//! option 1 (`H`) and option 2 (`HMAC` keyed with a salt).
//!
//! ## Test Coverage
//! - Every hash family under both options
//! - Secrets longer than one hash block
//! - Empty `FixedInfo` and empty salt
//! - Truncated final blocks
//!
//! Expected values are generated, not CAVP data; see the module docs of
//! [`super`] for their provenance.

use kdf_primitives::hash::DigestAlgorithm;
use kdf_primitives::kdf::{sskdf_digest_into, sskdf_hmac_into};

use super::{NistKatError, decode_hex};

/// Test vector for SSKDF with a plain hash
pub struct SskdfDigestTestVector {
    pub test_name: &'static str,
    pub algorithm: DigestAlgorithm,
    pub secret: &'static str,
    pub info: &'static str,
    pub expected: &'static str,
}

/// Test vector for SSKDF with HMAC
pub struct SskdfHmacTestVector {
    pub test_name: &'static str,
    pub algorithm: DigestAlgorithm,
    pub secret: &'static str,
    pub info: &'static str,
    pub salt: &'static str,
    pub expected: &'static str,
}

/// SSKDF option 1 vectors
pub const SSKDF_DIGEST_VECTORS: &[SskdfDigestTestVector] = &[
    SskdfDigestTestVector {
        test_name: "SSKDF-SHA256-L128",
        algorithm: DigestAlgorithm::Sha256,
        secret: "59096b7bb72b94c5555c36c9768fd8e4ed8f395e78485eb9f9dd43655500ed7a",
        info: "9bcad7e8eef7b21a98ff18605c6816bd",
        expected: "2179356cdc3001e63f91b3c81007ba31",
    },
    SskdfDigestTestVector {
        test_name: "SSKDF-SHA1-L160",
        algorithm: DigestAlgorithm::Sha1,
        secret: "2339f841474402b4bdbdaba6186083af7ce3abaf",
        info: "4cc668695537f3c0ca45c704ea15577c",
        expected: "bc93de0ca6c6b573c7497b5e6c66528f4afbad6a",
    },
    SskdfDigestTestVector {
        test_name: "SSKDF-SHA224-L448",
        algorithm: DigestAlgorithm::Sha224,
        secret: "f91736369bedccc11df69b2a257bdeb8741513e4c3a262cf",
        info: "b282261574e368ba8b7cee3b17d6f553",
        expected: "0c9da34dca76623fe717281b282e7bad5faeae5245ff39bc56c17bcf35f8a0d8b260f2f9786d0be279ada5fd899b2b3fe6979c256ac2f76f",
    },
    SskdfDigestTestVector {
        test_name: "SSKDF-SHA256-L128-2",
        algorithm: DigestAlgorithm::Sha256,
        secret: "2b09b5f88be6152bf2b8bad4728c2b2c78f6c34936e773fbcecf529cb7076b3a",
        info: "e2945e075125035b7a67f08d50fb14b4",
        expected: "c2021332bee2c040fcc6ba3bf856424f",
    },
    SskdfDigestTestVector {
        test_name: "SSKDF-SHA384-L384",
        algorithm: DigestAlgorithm::Sha384,
        secret: "7aada724e28e498388bc3a0affebb745b4deb0daae3b2315be87fe9dd1b64dab6460aad16d811e4d05f2e8ce96b52619",
        info: "02f85882dc8225511c15b46a72800a55d407d6cf8bf1e860e90a9aee47df42fb",
        expected: "36eb6969654bf446b0c6bd2f06a03d9c257d4dcf51fc56bf055fc588068bcf8455856b4597f2c2a258755205608185d5",
    },
    SskdfDigestTestVector {
        test_name: "SSKDF-SHA512-L576",
        algorithm: DigestAlgorithm::Sha512,
        secret: "b7b17eddb3cfc1442c098dec62775ed3c3f4972958308330a552cea84a11c97991fcc5b5374601002aeff7510f19622e2f2a3a53fbd698f88f3b3bfb6b9d276d148b",
        info: "aef0a604a6e935363271eeff43caa59c6fb8d0cc0dfd70ab",
        expected: "73dab07eb6b9d4f05d059d74032080f2f68c40ca0a9e03ce9b73fa1499f93fcac0aeb3cb3f943806846df7ca423a855f4bf76300e9c578bb7a1629fd1fd44e7597a26b0ce224856f",
    },
    SskdfDigestTestVector {
        test_name: "SSKDF-SHA512-224-L224",
        algorithm: DigestAlgorithm::Sha512_224,
        secret: "73fc0e69e2689239252353ee716bccf2cc9791463d338f1f8a254ca9",
        info: "",
        expected: "7e5341be0fe79e5230491ce01c0dc6aa9bdb8982401d46ed84a640c9",
    },
    SskdfDigestTestVector {
        test_name: "SSKDF-SHA3-224-L480",
        algorithm: DigestAlgorithm::Sha3_224,
        secret: "fb40d0fcfdaf37c6bceb1af9703e08f3e16399a1829983846f1079e6",
        info: "b06fcf8c6db3a46589dfc747",
        expected: "5fd51d71b4cb7d7011538831cb5091f6bc28adcafe0cb67f43c245ed41b45a8912baa67cf710b6f74dcfc05291cf5d9dfd4e9bde63b7ae20e5e95f3b",
    },
    SskdfDigestTestVector {
        test_name: "SSKDF-SHA3-384-L776",
        algorithm: DigestAlgorithm::Sha3_384,
        secret: "8176d1b08899c1b00d4c85b1475a3b591bd84d1cfe3c41b0ac50ab8b922492404abc9834f3ad78d19e22459b0e44ec09",
        info: "",
        expected: "704e22c68b80b2a526767da8bdd320730d4f85d7b54c015c220b7b109863239e52091fd1c2ebf5009692140d9791a66be3ea24e51e12a3d05bb19bb844fff75aa8820f530f28548b8c07b42ab916182c722898f69295bbf74715b0d4aa4f2c9250",
    },
];

/// SSKDF option 2 vectors
pub const SSKDF_HMAC_VECTORS: &[SskdfHmacTestVector] = &[
    SskdfHmacTestVector {
        test_name: "SSKDF-HMAC-SHA256-L128",
        algorithm: DigestAlgorithm::Sha256,
        secret: "59096b7bb72b94c5555c36c9768fd8e4ed8f395e78485eb9f9dd43655500ed7a",
        info: "9bcad7e8eef7b21a98ff18605c6816bd",
        salt: "2bc5f16c483472d8da53f6c30f0af402",
        expected: "4c36802df5d8d61bd5c2047e055a6dcb",
    },
    SskdfHmacTestVector {
        test_name: "SSKDF-HMAC-SHA1-L320",
        algorithm: DigestAlgorithm::Sha1,
        secret: "856ad3a5c68158345de2757608968cbabd174602",
        info: "37d44a92121bb8866dde16765982861f",
        salt: "556d28b67a9813e0",
        expected: "f2e697fd8efa050d53c49866a0715e6be006aa38aa0b9dbbec1b8cb07b50935c79a6798215d65b22",
    },
    SskdfHmacTestVector {
        test_name: "SSKDF-HMAC-SHA256-L256-empty-salt",
        algorithm: DigestAlgorithm::Sha256,
        secret: "a4d9e6a165e9a871febfdca2817266447ef4f9aa0131077996c66e371bad98a9",
        info: "5facd18228d8fe89f56a931cd3d22327",
        salt: "",
        expected: "57057de874c1a8195bb01f7667a49411fa757fd969f8edc2ecf1063bae5d2622",
    },
    SskdfHmacTestVector {
        test_name: "SSKDF-HMAC-SHA256-L640",
        algorithm: DigestAlgorithm::Sha256,
        secret: "bcbaabb73ede0beafccac2963ec4bb0dfad9a9d8915cdf053acf81123b7efaa1",
        info: "9f525559bceb12378b12d6b618705a3b",
        salt: "adc2b128b194edb9033efa99d22ebaf7e41e30671708a56b0752c408f0e6a14ad721ed9be7aa646eca4e626eeef9e82e34ba9cce2dd5db6ed75f53ee7110306e",
        expected: "55eb160efa0a73e7f590fdb7b7979350cfcbec625e823e36a55926d5aee89660ccdc84889964900f34db3ef9bf08596c060148d35d457b5a4d5c98af85efaedc0288a903e72d114241bfa893c4560e11",
    },
    SskdfHmacTestVector {
        test_name: "SSKDF-HMAC-SHA384-L384",
        algorithm: DigestAlgorithm::Sha384,
        secret: "e9229159baccb58dcb0602e0b7d3e32e617c9bedcf7b88a2da638a2655feebbd12cf8d3feb9ca31ebec271d1e8acb64c",
        info: "97cf01fa33a44f8b611451035392d0d574e508af96c94d3e",
        salt: "72c735d8aebdb705f8b93647096b6bde",
        expected: "c38c70d677ab76f58fd0f9391ff9147f12008e305abf1fd8b615ea274c38228c5a52430bee23caa708daf7850ff9b43d",
    },
    SskdfHmacTestVector {
        test_name: "SSKDF-HMAC-SHA512-L512",
        algorithm: DigestAlgorithm::Sha512,
        secret: "2cf4d4f825ccee071d35f163fa885ef86fe4864592687af51c9429c1404bdcb9f75dc72173a4477d82ee55822a209cd1f40b8e600968959c734b0123c2188582",
        info: "3f02dd6e2a352b821aacda6b858db2aba0471c4ad5b467391108485d94f50e16",
        salt: "1adbcef1a97e2ded3e3b11abc29af41ceb6213f116d8eb3542c58c46de793e22c158c21dab46e66147bc6e14a3378bbc01a7a24aa9a330d5eb0a45e9594847b4840d1f4ff708b03369c306c7df4881d88235b900a78b388cacfe9c15851da1a7f9ea6e8813e41150c1c8644c693980ede1859de10630b094fec08bd82578faba",
        expected: "efef545838ced3b6b7430f64ad5396ca7e52d2be091fa4619392e59d5ca66ac809964683c15579a079cfedd505c3c26662af15b34ae85b3d6b225845f2964a2d",
    },
    SskdfHmacTestVector {
        test_name: "SSKDF-HMAC-SHA512-256-L400",
        algorithm: DigestAlgorithm::Sha512_256,
        secret: "571fcf796c54d8c4d7c8c61484ec9cb41369a21b647da57659115d015ae573aa",
        info: "6161e34890acc380",
        salt: "0051ca267506530302770effc6aab37032dcd7415f787f26acafc38f9685675b",
        expected: "99f892f96131bbac490fdda70f1b196398acb16e0d133f8e6dbe33b6d32b533788c91da61e87b4bcb40cd1b9c60030c27eeb",
    },
    SskdfHmacTestVector {
        test_name: "SSKDF-HMAC-SHA3-256-L256",
        algorithm: DigestAlgorithm::Sha3_256,
        secret: "e254e01e5d78c5005794af73889d0c6b3e64daaed4c211588ee67854cb25140f",
        info: "56b8dee3676f79c619028c9db14a35ee",
        salt: "df6f8b63d98f21f422340b090ef9aa61",
        expected: "122b7daa21a83d60ac09f919e67f38f1298ac8dfb8611b745d16dfe7be40a975",
    },
    SskdfHmacTestVector {
        test_name: "SSKDF-HMAC-SHA3-512-L800-empty-salt",
        algorithm: DigestAlgorithm::Sha3_512,
        secret: "792b0a88f81a4661dc50aa2016c2c826c02962f419aa1fa53a3c0f12f60fda93bd15a3c5ae2179c985aed9b98c44a2e990b3e5ba7d84d50ae14e82237d63b12c",
        info: "c374a84dbaec4353e50baaa7478a764e",
        salt: "",
        expected: "b54367025847f14ee1dfb4b81cf9b20b3070f336eade980ea050e9f4d73f72360854ff049d9de5713cde9a9e839e95363e9fc7562e5e272b70a8f99edf48b45553a5ee84429846fbd8811d13d2b9b17c9c0b25fb1d1d13da24ca4bd43b9b4f616442d530",
    },
];

fn mismatch(algorithm: String, test_name: &str, okm: &[u8], expected: &[u8]) -> NistKatError {
    NistKatError::TestFailed {
        algorithm,
        test_name: test_name.to_string(),
        message: format!(
            "OKM mismatch: got {}, expected {}",
            hex::encode(okm),
            hex::encode(expected)
        ),
    }
}

/// Run every SSKDF option 1 vector.
///
/// # Errors
///
/// Returns `NistKatError` for the first vector that fails.
pub fn run_sskdf_digest_kat() -> Result<(), NistKatError> {
    for vector in SSKDF_DIGEST_VECTORS {
        run_sskdf_digest_test(vector)?;
    }
    Ok(())
}

/// Run one SSKDF option 1 vector.
///
/// # Errors
///
/// Returns `NistKatError::TestFailed` on a mismatch and
/// `NistKatError::ImplementationError` if derivation itself fails.
pub fn run_sskdf_digest_test(vector: &SskdfDigestTestVector) -> Result<(), NistKatError> {
    let secret = decode_hex(vector.secret)?;
    let info = decode_hex(vector.info)?;
    let expected = decode_hex(vector.expected)?;
    let algorithm = format!("SSKDF-{}", vector.algorithm);

    let mut okm = vec![0u8; expected.len()];
    sskdf_digest_into(vector.algorithm, &secret, &info, &mut okm)
        .map_err(|e| NistKatError::ImplementationError(format!("{algorithm}: {e}")))?;

    if okm != expected {
        return Err(mismatch(algorithm, vector.test_name, &okm, &expected));
    }
    Ok(())
}

/// Run every SSKDF option 2 vector.
///
/// # Errors
///
/// Returns `NistKatError` for the first vector that fails.
pub fn run_sskdf_hmac_kat() -> Result<(), NistKatError> {
    for vector in SSKDF_HMAC_VECTORS {
        run_sskdf_hmac_test(vector)?;
    }
    Ok(())
}

/// Run one SSKDF option 2 vector.
///
/// # Errors
///
/// Returns `NistKatError::TestFailed` on a mismatch and
/// `NistKatError::ImplementationError` if derivation itself fails.
pub fn run_sskdf_hmac_test(vector: &SskdfHmacTestVector) -> Result<(), NistKatError> {
    let secret = decode_hex(vector.secret)?;
    let info = decode_hex(vector.info)?;
    let salt = decode_hex(vector.salt)?;
    let expected = decode_hex(vector.expected)?;
    let algorithm = format!("SSKDF-HMAC-{}", vector.algorithm);

    let mut okm = vec![0u8; expected.len()];
    sskdf_hmac_into(vector.algorithm, &secret, &info, &salt, &mut okm)
        .map_err(|e| NistKatError::ImplementationError(format!("{algorithm}: {e}")))?;

    if okm != expected {
        return Err(mismatch(algorithm, vector.test_name, &okm, &expected));
    }
    Ok(())
}
