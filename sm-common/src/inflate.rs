//! Bounded zlib decompression

use std::io::Read;

use flate2::read::ZlibDecoder;

use crate::error::{DecodeError, DecodeResult};

/// Default ceiling for a single decompressed stream (16 MiB)
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: usize = 16 * 1024 * 1024;

/// Inflate a zlib stream into a growable buffer of at most `limit` bytes.
///
/// `stream` names the payload in errors ("indices", "packed vertices").
pub fn inflate(compressed: &[u8], limit: usize, stream: &'static str) -> DecodeResult<Vec<u8>> {
    let decoder = ZlibDecoder::new(compressed);
    let mut out = Vec::with_capacity(compressed.len().saturating_mul(4).min(limit));

    // Read one byte past the limit so an exact fit is not mistaken for overflow
    decoder
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut out)
        .map_err(|source| DecodeError::DecompressionFailed { stream, source })?;

    if out.len() > limit {
        return Err(DecodeError::DecompressedTooLarge { stream, limit });
    }

    Ok(out)
}
