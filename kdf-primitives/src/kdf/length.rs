#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Checked Length Arithmetic
//!
//! Block counts and input-size bounds for the counter-mode constructions.
//! Every operation here reports overflow instead of wrapping or saturating.

use kdf_prelude::{COUNTER_LEN, KdfError, Result};

/// Upper bound on `counter || secret || info` for SSKDF, in bytes (2^32 - 1).
pub const MAX_INPUT_LEN: u64 = u32::MAX as u64;

/// Number of blocks needed to fill `out_len` bytes with `h_len`-byte blocks.
///
/// Returns `ceil(out_len / h_len)`, which is also the last counter value used.
/// A zero `out_len` yields zero blocks; callers reject it before getting here.
///
/// # Errors
/// - `KdfError::InvalidArgument` if `h_len` is zero
/// - `KdfError::LengthOverflow` if `out_len + h_len` overflows `usize` or the
///   block count does not fit the 32-bit counter
pub fn iteration_count(out_len: usize, h_len: usize) -> Result<u32> {
    if h_len == 0 {
        return Err(KdfError::InvalidArgument("block size must be non-zero".to_string()));
    }

    out_len.checked_add(h_len).ok_or_else(|| {
        KdfError::LengthOverflow(format!(
            "output length {out_len} plus block size {h_len} overflows usize"
        ))
    })?;

    let blocks = out_len.div_ceil(h_len);
    u32::try_from(blocks).map_err(|_e| {
        KdfError::LengthOverflow(format!(
            "{blocks} blocks of {h_len} bytes exceed the 32-bit counter space"
        ))
    })
}

/// Check that `counter || secret || info` stays within [`MAX_INPUT_LEN`].
///
/// # Errors
/// Returns `KdfError::LengthOverflow` if the sum overflows `usize` or exceeds
/// the bound.
pub fn check_input_len(secret_len: usize, info_len: usize) -> Result<()> {
    let total = COUNTER_LEN
        .checked_add(secret_len)
        .and_then(|n| n.checked_add(info_len))
        .ok_or_else(|| {
            KdfError::LengthOverflow(format!(
                "counter, secret ({secret_len} bytes) and info ({info_len} bytes) overflow usize"
            ))
        })?;

    let within_bound = u64::try_from(total).is_ok_and(|total| total <= MAX_INPUT_LEN);
    if !within_bound {
        return Err(KdfError::LengthOverflow(format!(
            "hash input of {total} bytes exceeds {MAX_INPUT_LEN}"
        )));
    }
    Ok(())
}
