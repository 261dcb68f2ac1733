//! Base field `Fp` of alt_bn128 and the [`Field`] abstraction shared by the tower.
use super::constants::{FQ_LEN, P};
use core::{
    fmt::Debug,
    ops::{Add, Mul, Neg, Sub},
};
use primitives::U256;

/// Operations the group law and the pairing need from a field.
pub trait Field:
    Copy
    + Debug
    + Eq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Returns `true` for the additive identity.
    fn is_zero(&self) -> bool;

    /// Multiplicative inverse, `None` for zero.
    fn inverse(&self) -> Option<Self>;

    /// `self * self`.
    fn square(&self) -> Self {
        *self * *self
    }

    /// `self + self`.
    fn double(&self) -> Self {
        *self + *self
    }

    /// Raises to the exponent given as bits, most significant first.
    fn pow_bits(&self, bits: impl IntoIterator<Item = bool>) -> Self {
        let mut acc = Self::ONE;
        for bit in bits {
            acc = acc.square();
            if bit {
                acc = acc * *self;
            }
        }
        acc
    }
}

/// Element of the base field, always reduced below `p`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp(U256);

impl Fp {
    /// Wraps a value known to be below `p`.
    pub(crate) const fn from_raw_unchecked(value: U256) -> Self {
        Self(value)
    }

    /// Returns the element if `value < p`.
    #[inline]
    pub fn new(value: U256) -> Option<Self> {
        (value < P).then_some(Self(value))
    }

    /// Small constant.
    pub fn from_u64(value: u64) -> Self {
        Self(U256::from(value))
    }

    /// Decodes a big-endian coordinate, rejecting values `>= p`.
    #[inline]
    pub fn from_be_bytes(bytes: &[u8; FQ_LEN]) -> Option<Self> {
        Self::new(U256::from_be_bytes(*bytes))
    }

    /// Big-endian encoding.
    #[inline]
    pub fn to_be_bytes(&self) -> [u8; FQ_LEN] {
        self.0.to_be_bytes::<FQ_LEN>()
    }

    /// Canonical integer representative.
    #[inline]
    pub const fn into_u256(self) -> U256 {
        self.0
    }
}

impl Field for Fp {
    const ZERO: Self = Self(U256::ZERO);
    const ONE: Self = Self(U256::from_limbs([1, 0, 0, 0]));

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn inverse(&self) -> Option<Self> {
        self.0.inv_mod(P).map(Self)
    }
}

impl Add for Fp {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add_mod(rhs.0, P))
    }
}

impl Sub for Fp {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Neg for Fp {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.0.is_zero() {
            self
        } else {
            Self(P - self.0)
        }
    }
}

impl Mul for Fp {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul_mod(rhs.0, P))
    }
}
