#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Counter-Block Driver
//!
//! Shared loop of both constructions: call a block function with counter
//! `1, 2, ..., n` and lay its output into the caller's buffer, truncating the
//! final block.

use kdf_prelude::{COUNTER_LEN, KdfError, MAX_DIGEST_LEN, Result};
use zeroize::Zeroizing;

use super::length;

/// Fill `out` with consecutive `h_len`-byte blocks from `block_fn`.
///
/// `block_fn` receives the big-endian counter and a scratch slice of exactly
/// `h_len` bytes to fill. The first error aborts the loop; `out` is then in an
/// unspecified state and must not be used.
///
/// # Errors
/// - `KdfError::InvalidArgument` if `out` is empty
/// - `KdfError::PrimitiveFailure` if `h_len` is outside `1..=MAX_DIGEST_LEN`
/// - `KdfError::LengthOverflow` if the block count exceeds the counter space
/// - whatever `block_fn` returns
pub(crate) fn fill_counter_blocks<F>(out: &mut [u8], h_len: usize, mut block_fn: F) -> Result<()>
where
    F: FnMut(&[u8; COUNTER_LEN], &mut [u8]) -> Result<()>,
{
    if out.is_empty() {
        return Err(KdfError::InvalidArgument("output length must be non-zero".to_string()));
    }
    if h_len == 0 || h_len > MAX_DIGEST_LEN {
        return Err(KdfError::PrimitiveFailure(format!(
            "block size {h_len} outside 1..={MAX_DIGEST_LEN}"
        )));
    }

    let blocks = length::iteration_count(out.len(), h_len)?;
    tracing::trace!(blocks, h_len, "filling counter blocks");

    let mut scratch = Zeroizing::new([0u8; MAX_DIGEST_LEN]);
    let block = scratch.get_mut(..h_len).ok_or_else(|| {
        KdfError::PrimitiveFailure(format!("block size {h_len} exceeds scratch buffer"))
    })?;

    let mut written = 0usize;
    for (counter, chunk) in (1..=blocks).zip(out.chunks_mut(h_len)) {
        block_fn(&counter.to_be_bytes(), &mut *block)?;

        let src = block.get(..chunk.len()).ok_or_else(|| {
            KdfError::PrimitiveFailure("output chunk longer than block".to_string())
        })?;
        chunk.copy_from_slice(src);
        written = written.checked_add(chunk.len()).ok_or_else(|| {
            KdfError::LengthOverflow("written byte count overflows usize".to_string())
        })?;
    }

    if written != out.len() {
        return Err(KdfError::PrimitiveFailure(format!(
            "wrote {written} of {} requested bytes",
            out.len()
        )));
    }
    Ok(())
}
