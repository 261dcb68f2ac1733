//! Quadratic extension `Fp2 = Fp[u] / (u^2 + 1)`.
use super::{
    constants::{FQ2_LEN, FQ_LEN},
    fp::{Field, Fp},
};
use core::ops::{Add, Mul, Neg, Sub};

/// `c0 + c1 * u`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp2 {
    /// Real component.
    pub c0: Fp,
    /// Imaginary component.
    pub c1: Fp,
}

impl Fp2 {
    /// Creates `c0 + c1 * u`.
    #[inline]
    pub const fn new(c0: Fp, c1: Fp) -> Self {
        Self { c0, c1 }
    }

    /// Decodes an element serialized imaginary part first (`c1 || c0`).
    ///
    /// Returns `None` if either component is not below `p`.
    pub fn from_be_bytes(bytes: &[u8; FQ2_LEN]) -> Option<Self> {
        let (c1, c0) = bytes.split_at(FQ_LEN);
        let c1 = Fp::from_be_bytes(c1.try_into().ok()?)?;
        let c0 = Fp::from_be_bytes(c0.try_into().ok()?)?;
        Some(Self::new(c0, c1))
    }

    /// Serializes imaginary part first (`c1 || c0`).
    pub fn to_be_bytes(&self) -> [u8; FQ2_LEN] {
        let mut out = [0u8; FQ2_LEN];
        out[..FQ_LEN].copy_from_slice(&self.c1.to_be_bytes());
        out[FQ_LEN..].copy_from_slice(&self.c0.to_be_bytes());
        out
    }

    /// `c0 - c1 * u`, which is also the `p`-power Frobenius.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// Multiplies by a base field element.
    #[inline]
    pub fn scale(&self, k: Fp) -> Self {
        Self::new(self.c0 * k, self.c1 * k)
    }

    /// Multiplies by the sextic non-residue `xi = 9 + u`.
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Self {
        let nine = |a: Fp| a.double().double().double() + a;
        Self::new(nine(self.c0) - self.c1, self.c0 + nine(self.c1))
    }
}

impl Field for Fp2 {
    const ZERO: Self = Self::new(Fp::ZERO, Fp::ZERO);
    const ONE: Self = Self::new(Fp::ONE, Fp::ZERO);

    #[inline]
    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    fn inverse(&self) -> Option<Self> {
        let norm = self.c0.square() + self.c1.square();
        let inv = norm.inverse()?;
        Some(Self::new(self.c0 * inv, -(self.c1 * inv)))
    }

    fn square(&self) -> Self {
        let a = self.c0 + self.c1;
        let b = self.c0 - self.c1;
        Self::new(a * b, (self.c0 * self.c1).double())
    }
}

impl Add for Fp2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl Sub for Fp2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl Neg for Fp2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}

impl Mul for Fp2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - v0 - v1;
        Self::new(v0 - v1, c1)
    }
}
