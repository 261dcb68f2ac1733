//! Byte-layout helpers shared by the engines.
use crate::interface::{CryptoError, CryptoResult};
use std::borrow::Cow;

/// Left-pads the given slice with zeroes until `len`.
///
/// Returns the first `len` bytes if it does not need padding.
#[inline]
pub fn left_pad_vec(data: &[u8], len: usize) -> Cow<'_, [u8]> {
    if let Some(data) = data.get(..len) {
        Cow::Borrowed(data)
    } else {
        let mut padded = vec![0; len];
        padded[len - data.len()..].copy_from_slice(data);
        Cow::Owned(padded)
    }
}

/// Serializes `data` into exactly `len` bytes, keeping big-endian significance.
///
/// Shorter inputs are left-padded with zeroes; longer inputs keep their low-order `len` bytes.
#[inline]
pub fn fit_be(data: &[u8], len: usize) -> Cow<'_, [u8]> {
    match data.len().checked_sub(len) {
        Some(excess) => Cow::Borrowed(&data[excess..]),
        None => left_pad_vec(data, len),
    }
}

/// Views `data` as a fixed-size array, rejecting any other length.
#[inline]
pub fn fixed<const LEN: usize>(data: &[u8]) -> CryptoResult<&[u8; LEN]> {
    data.try_into()
        .map_err(|_| CryptoError::invalid_encoding(LEN, data.len()))
}

/// Reads little-endian 64-bit words from `data`, which must be exactly `8 * N` bytes long.
pub fn le_words<const N: usize>(data: &[u8]) -> Option<[u64; N]> {
    if data.len() != N * 8 {
        return None;
    }
    let mut words = [0u64; N];
    for (word, chunk) in words.iter_mut().zip(data.chunks_exact(8)) {
        let mut lane = [0u8; 8];
        lane.copy_from_slice(chunk);
        *word = u64::from_le_bytes(lane);
    }
    Some(words)
}
