//! Arbitrary-precision unsigned integers stored as big-endian bytes.
use crate::utilities::fit_be;
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};
use num::BigUint;
use std::vec::Vec;

/// Unsigned integer of arbitrary width backed by its big-endian byte encoding.
///
/// The supplied width is preserved, leading zero bytes included, because it determines the
/// iteration count of exponentiation and scalar multiplication. Equality, ordering and hashing
/// are canonical and ignore leading zeros.
#[derive(Clone, Default)]
pub struct BigInteger {
    bytes: Vec<u8>,
}

impl BigInteger {
    /// Creates an integer from its big-endian encoding.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Creates an integer by copying a big-endian slice.
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }

    /// Returns the big-endian encoding exactly as supplied.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the integer, returning its encoding.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Supplied width in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the encoding has no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Encoding with leading zero bytes removed.
    #[inline]
    pub fn trimmed(&self) -> &[u8] {
        let start = self
            .bytes
            .iter()
            .position(|b| *b != 0)
            .unwrap_or(self.bytes.len());
        &self.bytes[start..]
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Returns `true` if the value is one.
    pub fn is_one(&self) -> bool {
        self.trimmed() == [1]
    }

    /// Number of significant bits.
    pub fn bit_len(&self) -> usize {
        match self.trimmed().split_first() {
            Some((first, rest)) => rest.len() * 8 + (8 - first.leading_zeros() as usize),
            None => 0,
        }
    }

    /// Iterates over every bit of the supplied width, most significant first.
    ///
    /// Leading zero bytes contribute zero bits, so the iteration count is `8 * len()`.
    pub fn bits(&self) -> impl DoubleEndedIterator<Item = bool> + '_ {
        self.bytes
            .iter()
            .flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
    }

    /// Serializes to exactly `len` bytes: left-padded when shorter, keeping the low-order
    /// bytes when longer.
    pub fn to_be_bytes_padded(&self, len: usize) -> Vec<u8> {
        fit_be(&self.bytes, len).into_owned()
    }

    /// Converts to a [`BigUint`].
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// Converts from a [`BigUint`] using its minimal encoding.
    pub fn from_biguint(value: &BigUint) -> Self {
        if value.bits() == 0 {
            return Self::default();
        }
        Self::new(value.to_bytes_be())
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        let skip = (value.leading_zeros() / 8) as usize;
        Self::from_be_slice(&value.to_be_bytes()[skip..])
    }
}

impl From<&[u8]> for BigInteger {
    fn from(bytes: &[u8]) -> Self {
        Self::from_be_slice(bytes)
    }
}

impl From<Vec<u8>> for BigInteger {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<BigUint> for BigInteger {
    fn from(value: BigUint) -> Self {
        Self::from_biguint(&value)
    }
}

impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.trimmed() == other.trimmed()
    }
}

impl Eq for BigInteger {}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.trimmed(), other.trimmed());
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

impl Hash for BigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.trimmed().hash(state);
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BigInteger(0x")?;
        for byte in &self.bytes {
            write!(f, "{byte:02x}")?;
        }
        f.write_str(")")
    }
}
