//! BLAKE2b `F` compression function. More details in [`run`] and [`compress_bytes`].
use crate::{
    interface::{CryptoError, CryptoResult},
    utilities::le_words,
};

/// Length of the packed input accepted by [`run`].
pub const INPUT_LENGTH: usize = 213;

/// Length of the chaining state in bytes.
pub const STATE_LENGTH: usize = 64;

/// Length of the message block in bytes.
pub const MESSAGE_LENGTH: usize = 128;

/// Length of each offset counter in bytes.
pub const OFFSET_LENGTH: usize = 8;

/// Packed entry point.
///
/// reference: <https://eips.ethereum.org/EIPS/eip-152>
/// input format:
/// [4 bytes for rounds][64 bytes for h][128 bytes for m][8 bytes for t_0][8 bytes for t_1][1 byte for f]
pub fn run(input: &[u8]) -> CryptoResult<[u8; STATE_LENGTH]> {
    if input.len() != INPUT_LENGTH {
        tracing::debug!(len = input.len(), "blake2 input has wrong length");
        return Err(CryptoError::invalid_encoding(INPUT_LENGTH, input.len()));
    }

    let f = match input[212] {
        1 => true,
        0 => false,
        flag => {
            tracing::debug!(flag, "blake2 final block flag is not boolean");
            return Err(CryptoError::MalformedBlockInput);
        }
    };

    let mut rounds = [0u8; 4];
    rounds.copy_from_slice(&input[..4]);

    compress_bytes(
        u32::from_be_bytes(rounds),
        &input[4..68],
        &input[68..196],
        &input[196..204],
        &input[204..212],
        f,
    )
}

/// Runs `rounds` rounds of the compression over byte buffers.
///
/// Buffers are checked by [`parse_block`] before any mixing. The updated state is returned as
/// 64 little-endian bytes.
pub fn compress_bytes(
    rounds: u32,
    state: &[u8],
    message: &[u8],
    offset_low: &[u8],
    offset_high: &[u8],
    f: bool,
) -> CryptoResult<[u8; STATE_LENGTH]> {
    let (mut h, m, t) = parse_block(state, message, offset_low, offset_high)?;
    algo::compress(rounds, &mut h, &m, t, f);
    Ok(state_to_bytes(&h))
}

/// Reads the state words, message words and offset counter from byte buffers.
///
/// `state` must be 64 bytes (8 little-endian words), `message` 128 bytes (16 words) and each
/// offset 8 bytes; otherwise [`CryptoError::MalformedBlockInput`] is returned.
pub fn parse_block(
    state: &[u8],
    message: &[u8],
    offset_low: &[u8],
    offset_high: &[u8],
) -> CryptoResult<([u64; 8], [u64; 16], [u64; 2])> {
    let parsed = (
        le_words::<8>(state),
        le_words::<16>(message),
        le_words::<1>(offset_low),
        le_words::<1>(offset_high),
    );
    let (Some(h), Some(m), Some([t0]), Some([t1])) = parsed else {
        tracing::debug!(
            state = state.len(),
            message = message.len(),
            offset_low = offset_low.len(),
            offset_high = offset_high.len(),
            "malformed blake2 block buffers"
        );
        return Err(CryptoError::MalformedBlockInput);
    };
    Ok((h, m, [t0, t1]))
}

/// Serializes the chaining state as 64 little-endian bytes.
pub fn state_to_bytes(h: &[u64; 8]) -> [u8; STATE_LENGTH] {
    let mut out = [0u8; STATE_LENGTH];
    for (chunk, word) in out.chunks_exact_mut(8).zip(h.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

/// Blake2 algorithm
pub mod algo {
    /// SIGMA from RFC 7693: <https://datatracker.ietf.org/doc/html/rfc7693#section-2.7>
    pub const SIGMA: [[usize; 16]; 10] = [
        [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
        [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
        [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
        [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
        [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
        [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
        [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
        [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
        [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
        [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
    ];

    /// IV, the SHA-512 initial hash values: <https://datatracker.ietf.org/doc/html/rfc7693#section-2.6>
    pub const IV: [u64; 8] = [
        0x6a09e667f3bcc908,
        0xbb67ae8584caa73b,
        0x3c6ef372fe94f82b,
        0xa54ff53a5f1d36f1,
        0x510e527fade682d1,
        0x9b05688c2b3e6c1f,
        0x1f83d9abfb41bd6b,
        0x5be0cd19137e2179,
    ];

    #[inline(always)]
    #[allow(clippy::many_single_char_names)]
    /// G function: <https://tools.ietf.org/html/rfc7693#section-3.1>
    pub fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
        v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
        v[d] = (v[d] ^ v[a]).rotate_right(32);
        v[c] = v[c].wrapping_add(v[d]);
        v[b] = (v[b] ^ v[c]).rotate_right(24);

        v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
        v[d] = (v[d] ^ v[a]).rotate_right(16);
        v[c] = v[c].wrapping_add(v[d]);
        v[b] = (v[b] ^ v[c]).rotate_right(63);
    }

    /// Compression function F takes as an argument the state vector "h",
    /// message block vector "m" (last block is padded with zeros to full
    /// block size, if required), 2w-bit offset counter "t", and final block
    /// indicator flag "f". Local vector v[0..15] is used in processing.
    ///
    /// Runs exactly `rounds` rounds; the message schedule wraps every 10 rounds.
    #[allow(clippy::many_single_char_names)]
    pub fn compress(rounds: u32, h: &mut [u64; 8], m: &[u64; 16], t: [u64; 2], f: bool) {
        let mut v = [0u64; 16];
        v[..8].copy_from_slice(h); // First half from state.
        v[8..].copy_from_slice(&IV); // Second half from IV.

        v[12] ^= t[0];
        v[13] ^= t[1];

        if f {
            v[14] = !v[14] // Invert all bits if the last-block-flag is set.
        }
        for i in 0..rounds as usize {
            round(&mut v, m, i);
        }

        for i in 0..8 {
            h[i] ^= v[i] ^ v[i + 8];
        }
    }

    #[inline(always)]
    fn round(v: &mut [u64; 16], m: &[u64; 16], r: usize) {
        // Message word selection permutation for this round.
        let s = &SIGMA[r % 10];
        // columns
        g(v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
        g(v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
        g(v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
        g(v, 3, 7, 11, 15, m[s[6]], m[s[7]]);

        // diagonals
        g(v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
        g(v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
        g(v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
        g(v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
    }
}
