//! Interface shared by every engine: the error type, the three-way status convention and the
//! [`Crypto`] backend trait.
use crate::{
    bigint::BigInteger,
    bn128::{G1Coordinates, G1Point, G2Coordinates},
};
use core::fmt::{self, Debug};
use std::{boxed::Box, vec::Vec};

/// Result of a fallible cryptographic operation.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors raised by the primitives.
///
/// An `Err` returned from a host function aborts the calling operation. Outcomes that callers
/// are expected to branch on are reported through [`Status`] instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CryptoError {
    /// A fixed-size field received the wrong number of bytes.
    InvalidEncoding {
        /// Number of bytes the layout requires.
        expected: usize,
        /// Number of bytes supplied.
        actual: usize,
    },
    /// A coordinate is not below the field modulus, or the point is not on the curve
    /// (or, for G2, not in the prime-order subgroup).
    InvalidPoint,
    /// Degenerate modulus (zero or one) in modular exponentiation.
    ArithmeticDomainError,
    /// State, message or offset buffers of the BLAKE2b compression have the wrong length,
    /// or the final-block flag is not a boolean.
    MalformedBlockInput,
    /// A digest assertion failed.
    DigestMismatch,
}

impl CryptoError {
    /// Returns an [`CryptoError::InvalidEncoding`] error.
    pub const fn invalid_encoding(expected: usize, actual: usize) -> Self {
        Self::InvalidEncoding { expected, actual }
    }

    /// Returns the [`Status`] a status-returning host function reports for this error.
    ///
    /// Input that could not be checked is [`Status::Malformed`]. A digest mismatch is a check
    /// that ran and does not hold, so it is [`Status::Failure`].
    pub const fn status(&self) -> Status {
        match self {
            Self::InvalidEncoding { .. }
            | Self::InvalidPoint
            | Self::ArithmeticDomainError
            | Self::MalformedBlockInput => Status::Malformed,
            Self::DigestMismatch => Status::Failure,
        }
    }
}

impl core::error::Error for CryptoError {}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEncoding { expected, actual } => {
                write!(f, "invalid encoding: expected {expected} bytes, got {actual}")
            }
            Self::InvalidPoint => f.write_str("point is not a valid alt_bn128 group element"),
            Self::ArithmeticDomainError => f.write_str("modulus must be greater than one"),
            Self::MalformedBlockInput => f.write_str("malformed blake2 compression input"),
            Self::DigestMismatch => f.write_str("digest does not match expected value"),
        }
    }
}

/// Three-way outcome of an operation that reports a status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// The operation completed and its check, if any, holds.
    Success,
    /// The operation completed but the check does not hold.
    Failure,
    /// The inputs could not be processed.
    Malformed,
}

impl From<bool> for Status {
    fn from(value: bool) -> Self {
        if value {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

/// Numeric values reported for each [`Status`].
///
/// Only the distinction between the three values is significant, so the exact codes are
/// configurable per host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusCodes {
    /// Code for [`Status::Success`].
    pub success: i32,
    /// Code for [`Status::Failure`].
    pub failure: i32,
    /// Code for [`Status::Malformed`].
    pub malformed: i32,
}

impl StatusCodes {
    /// Default host convention: `0` success, `1` checked-false, `-1` malformed.
    pub const DEFAULT: Self = Self {
        success: 0,
        failure: 1,
        malformed: -1,
    };

    /// Returns the code for the given status.
    #[inline]
    pub const fn code(&self, status: Status) -> i32 {
        match status {
            Status::Success => self.success,
            Status::Failure => self.failure,
            Status::Malformed => self.malformed,
        }
    }

    /// Returns `true` if no two statuses share a code.
    pub const fn is_distinct(&self) -> bool {
        self.success != self.failure
            && self.success != self.malformed
            && self.failure != self.malformed
    }
}

impl Default for StatusCodes {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Status code together with the fixed-size output buffer of the operation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StatusOutput {
    /// Status code, see [`StatusCodes`].
    pub status: i32,
    /// Output bytes. Zero filled when the status is not success.
    pub bytes: Vec<u8>,
}

impl StatusOutput {
    /// Returns new output with the given status code and bytes.
    pub fn new(status: i32, bytes: Vec<u8>) -> Self {
        Self { status, bytes }
    }
}

/// Crypto operations backing the host functions.
pub trait Crypto: Send + Sync + Debug {
    /// Clone box type
    fn clone_box(&self) -> Box<dyn Crypto>;

    /// Compute Keccak-256 hash
    fn keccak256(&self, input: &[u8]) -> [u8; 32];

    /// Compute SHA3-256 hash
    fn sha3_256(&self, input: &[u8]) -> [u8; 32];

    /// alt_bn128 G1 addition.
    fn bn128_g1_add(
        &self,
        p1: &dyn G1Coordinates,
        p2: &dyn G1Coordinates,
    ) -> CryptoResult<G1Point>;

    /// alt_bn128 G1 scalar multiplication.
    fn bn128_g1_mul(&self, point: &dyn G1Coordinates, scalar: &BigInteger)
        -> CryptoResult<G1Point>;

    /// alt_bn128 pairing check.
    fn bn128_pairing_check(
        &self,
        pairs: &[(&dyn G1Coordinates, &dyn G2Coordinates)],
    ) -> CryptoResult<bool>;

    /// Modular exponentiation.
    fn modexp(
        &self,
        base: &BigInteger,
        exp: &BigInteger,
        modulus: &BigInteger,
    ) -> CryptoResult<BigInteger>;

    /// Blake2 compression function.
    fn blake2_compress(&self, rounds: u32, h: &mut [u64; 8], m: &[u64; 16], t: [u64; 2], f: bool);
}

impl Clone for Box<dyn Crypto> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Default implementation of the [`Crypto`] trait using the engines of this crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCrypto;

impl Crypto for DefaultCrypto {
    fn clone_box(&self) -> Box<dyn Crypto> {
        Box::new(*self)
    }

    fn keccak256(&self, input: &[u8]) -> [u8; 32] {
        crate::hash::keccak256(input)
    }

    fn sha3_256(&self, input: &[u8]) -> [u8; 32] {
        crate::hash::sha3_256(input)
    }

    fn bn128_g1_add(
        &self,
        p1: &dyn G1Coordinates,
        p2: &dyn G1Coordinates,
    ) -> CryptoResult<G1Point> {
        crate::bn128::g1_point_add(p1, p2)
    }

    fn bn128_g1_mul(
        &self,
        point: &dyn G1Coordinates,
        scalar: &BigInteger,
    ) -> CryptoResult<G1Point> {
        crate::bn128::g1_point_mul(point, scalar)
    }

    fn bn128_pairing_check(
        &self,
        pairs: &[(&dyn G1Coordinates, &dyn G2Coordinates)],
    ) -> CryptoResult<bool> {
        crate::bn128::pairing_check(pairs)
    }

    fn modexp(
        &self,
        base: &BigInteger,
        exp: &BigInteger,
        modulus: &BigInteger,
    ) -> CryptoResult<BigInteger> {
        crate::modexp::modexp(base, exp, modulus)
    }

    fn blake2_compress(&self, rounds: u32, h: &mut [u64; 8], m: &[u64; 16], t: [u64; 2], f: bool) {
        crate::blake2::algo::compress(rounds, h, m, t, f);
    }
}
