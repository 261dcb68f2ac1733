//! Keccak-f\[1600\] and the sponge producing Keccak-256 and SHA3-256 digests.
use crate::interface::{CryptoError, CryptoResult};

/// Sponge rate in bytes for 256-bit digests (capacity 64 bytes).
pub const RATE: usize = 136;

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 32;

const RC: [u64; 24] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Keccak-f\[1600\] permutation, 24 rounds over 25 lanes indexed `x + 5 * y`.
pub fn keccak_f1600(state: &mut [u64; 25]) {
    for rc in RC {
        // theta
        let mut c = [0u64; 5];
        for (x, column) in c.iter_mut().enumerate() {
            *column = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[5 * y + x] ^= d;
            }
        }

        // rho and pi
        let mut current = state[1];
        for (&lane, &offset) in PI.iter().zip(RHO.iter()) {
            let next = state[lane];
            state[lane] = current.rotate_left(offset);
            current = next;
        }

        // chi
        for row in state.chunks_exact_mut(5) {
            let t = [row[0], row[1], row[2], row[3], row[4]];
            for x in 0..5 {
                row[x] = t[x] ^ (!t[(x + 1) % 5] & t[(x + 2) % 5]);
            }
        }

        // iota
        state[0] ^= rc;
    }
}

/// Digest flavour. The discriminant is the domain-separation byte appended before padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HashVariant {
    /// Legacy Keccak-256 padding.
    Keccak256 = 0x01,
    /// FIPS 202 SHA3-256 padding.
    Sha3_256 = 0x06,
}

impl HashVariant {
    /// Domain-separation byte.
    #[inline]
    pub const fn domain(self) -> u8 {
        self as u8
    }
}

/// Incremental sponge with a 136-byte rate and 32-byte output.
#[derive(Clone, Debug)]
pub struct Keccak {
    state: [u64; 25],
    buffer: [u8; RATE],
    pos: usize,
    variant: HashVariant,
}

impl Keccak {
    /// Creates an empty sponge for the given variant.
    pub const fn new(variant: HashVariant) -> Self {
        Self {
            state: [0; 25],
            buffer: [0; RATE],
            pos: 0,
            variant,
        }
    }

    /// Creates a Keccak-256 sponge.
    pub const fn v256() -> Self {
        Self::new(HashVariant::Keccak256)
    }

    /// Creates a SHA3-256 sponge.
    pub const fn sha3_256() -> Self {
        Self::new(HashVariant::Sha3_256)
    }

    /// Absorbs `data`.
    pub fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = (RATE - self.pos).min(data.len());
            self.buffer[self.pos..self.pos + take].copy_from_slice(&data[..take]);
            self.pos += take;
            data = &data[take..];
            if self.pos == RATE {
                self.absorb_block();
            }
        }
    }

    fn absorb_block(&mut self) {
        for (lane, chunk) in self.state.iter_mut().zip(self.buffer.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *lane ^= u64::from_le_bytes(word);
        }
        keccak_f1600(&mut self.state);
        self.pos = 0;
    }

    /// Pads, permutes and squeezes the 32-byte digest.
    pub fn finalize(mut self) -> [u8; DIGEST_LEN] {
        self.buffer[self.pos..].fill(0);
        self.buffer[self.pos] ^= self.variant.domain();
        self.buffer[RATE - 1] ^= 0x80;
        self.absorb_block();

        let mut out = [0u8; DIGEST_LEN];
        for (chunk, lane) in out.chunks_exact_mut(8).zip(self.state.iter()) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        out
    }
}

/// Computes the digest of `message` for the given variant.
pub fn digest(message: &[u8], variant: HashVariant) -> [u8; DIGEST_LEN] {
    let mut sponge = Keccak::new(variant);
    sponge.update(message);
    sponge.finalize()
}

/// Keccak-256 digest.
#[inline]
pub fn keccak256(message: &[u8]) -> [u8; DIGEST_LEN] {
    digest(message, HashVariant::Keccak256)
}

/// SHA3-256 digest.
#[inline]
pub fn sha3_256(message: &[u8]) -> [u8; DIGEST_LEN] {
    digest(message, HashVariant::Sha3_256)
}

/// Checks that the digest of `message` equals `expected`.
///
/// `expected` must be exactly 32 bytes ([`CryptoError::InvalidEncoding`]); any difference is
/// [`CryptoError::DigestMismatch`].
pub fn assert_digest(message: &[u8], expected: &[u8], variant: HashVariant) -> CryptoResult<()> {
    let expected = crate::utilities::fixed::<DIGEST_LEN>(expected)?;
    if digest(message, variant) != *expected {
        tracing::debug!(?variant, len = message.len(), "digest mismatch");
        return Err(CryptoError::DigestMismatch);
    }
    Ok(())
}

/// [`assert_digest`] for Keccak-256.
pub fn assert_keccak256(message: &[u8], expected: &[u8]) -> CryptoResult<()> {
    assert_digest(message, expected, HashVariant::Keccak256)
}

/// [`assert_digest`] for SHA3-256.
pub fn assert_sha3_256(message: &[u8], expected: &[u8]) -> CryptoResult<()> {
    assert_digest(message, expected, HashVariant::Sha3_256)
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::hex;

    #[test]
    fn empty_message() {
        assert_eq!(
            keccak256(b""),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
        assert_eq!(
            sha3_256(b""),
            hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a")
        );
    }

    #[test]
    fn abc() {
        assert_eq!(
            keccak256(b"abc"),
            hex!("4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45")
        );
    }

    #[test]
    fn multi_block_message() {
        let message: Vec<u8> = (0..200u8).collect();
        assert_eq!(
            keccak256(&message),
            hex!("bfb0aa97863e797943cf7c33bb7e880bb4543f3d2703c0923c6901c2af57b890")
        );
        assert_eq!(
            sha3_256(&message),
            hex!("5f728f63bf5ee48c77f453c0490398fa645b8d4c4e56be9a41cfec344d6ca899")
        );
    }

    #[test]
    fn incremental_matches_one_shot() {
        let message: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        for split in [0, 1, 135, 136, 137, 272, 999, 1000] {
            let mut sponge = Keccak::v256();
            sponge.update(&message[..split]);
            sponge.update(&message[split..]);
            assert_eq!(sponge.finalize(), keccak256(&message), "split {split}");
        }
    }

    #[test]
    fn padding_on_last_rate_byte() {
        // domain byte and the final 0x80 land in the same byte
        let message = [0x5au8; RATE - 1];
        assert_eq!(
            sha3_256(&message),
            hex!("12fa8b3d366f54305d82b8eff1dae1df85046ee32ec82d6f6e290f8e9cae2f90")
        );
        assert_ne!(keccak256(&message), sha3_256(&message));
    }

    #[test]
    fn assertions() {
        let expected = keccak256(b"hello");
        assert_eq!(assert_keccak256(b"hello", &expected), Ok(()));
        assert_eq!(
            assert_keccak256(b"hellO", &expected),
            Err(CryptoError::DigestMismatch)
        );
        assert_eq!(
            assert_sha3_256(b"hello", &expected),
            Err(CryptoError::DigestMismatch)
        );
        assert_eq!(
            assert_keccak256(b"hello", &expected[..31]),
            Err(CryptoError::invalid_encoding(32, 31))
        );
    }
}
