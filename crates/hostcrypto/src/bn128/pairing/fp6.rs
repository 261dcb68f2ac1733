//! Cubic extension `Fp6 = Fp2[v] / (v^3 - xi)` with `xi = 9 + u`.
use crate::bn128::{fp::Field, fp2::Fp2};
use core::ops::{Add, Mul, Neg, Sub};

/// `c0 + c1 * v + c2 * v^2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fp6 {
    /// Constant coefficient.
    pub c0: Fp2,
    /// Coefficient of `v`.
    pub c1: Fp2,
    /// Coefficient of `v^2`.
    pub c2: Fp2,
}

impl Fp6 {
    /// Creates `c0 + c1 * v + c2 * v^2`.
    pub const fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Self {
        Self { c0, c1, c2 }
    }

    /// Multiplies by `v`.
    #[inline]
    pub fn mul_by_v(&self) -> Self {
        Self::new(self.c2.mul_by_nonresidue(), self.c0, self.c1)
    }
}

impl Field for Fp6 {
    const ZERO: Self = Self::new(Fp2::ZERO, Fp2::ZERO, Fp2::ZERO);
    const ONE: Self = Self::new(Fp2::ONE, Fp2::ZERO, Fp2::ZERO);

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    fn inverse(&self) -> Option<Self> {
        let (a0, a1, a2) = (self.c0, self.c1, self.c2);
        let t0 = a0.square() - (a1 * a2).mul_by_nonresidue();
        let t1 = a2.square().mul_by_nonresidue() - a0 * a1;
        let t2 = a1.square() - a0 * a2;
        let det = a0 * t0 + (a2 * t1 + a1 * t2).mul_by_nonresidue();
        let inv = det.inverse()?;
        Some(Self::new(t0 * inv, t1 * inv, t2 * inv))
    }
}

impl Add for Fp6 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}

impl Sub for Fp6 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }
}

impl Neg for Fp6 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1, -self.c2)
    }
}

impl Mul for Fp6 {
    type Output = Self;

    // Karatsuba over three coefficients
    fn mul(self, rhs: Self) -> Self {
        let (a0, a1, a2) = (self.c0, self.c1, self.c2);
        let (b0, b1, b2) = (rhs.c0, rhs.c1, rhs.c2);
        let t0 = a0 * b0;
        let t1 = a1 * b1;
        let t2 = a2 * b2;
        let c0 = ((a1 + a2) * (b1 + b2) - t1 - t2).mul_by_nonresidue() + t0;
        let c1 = (a0 + a1) * (b0 + b1) - t0 - t1 + t2.mul_by_nonresidue();
        let c2 = (a0 + a2) * (b0 + b2) - t0 - t2 + t1;
        Self::new(c0, c1, c2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bn128::fp::Fp;

    fn el(seed: u64) -> Fp6 {
        let f = |k: u64| Fp2::new(Fp::from_u64(seed * 7 + k), Fp::from_u64(seed * 13 + k * 3));
        Fp6::new(f(1), f(2), f(3))
    }

    #[test]
    fn v_cubed_is_xi() {
        let v = Fp6::new(Fp2::ZERO, Fp2::ONE, Fp2::ZERO);
        let xi = Fp2::new(Fp::from_u64(9), Fp::ONE);
        assert_eq!(v * v * v, Fp6::new(xi, Fp2::ZERO, Fp2::ZERO));
        assert_eq!(el(4).mul_by_v(), el(4) * v);
    }

    #[test]
    fn inverse_and_distributivity() {
        let (a, b, c) = (el(1), el(2), el(3));
        assert_eq!(a * a.inverse().unwrap(), Fp6::ONE);
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a * b, b * a);
        assert_eq!(Fp6::ZERO.inverse(), None);
    }
}
