//! Pairing target field `Fp12 = Fp6[w] / (w^2 - v)`.
use super::fp6::Fp6;
use crate::bn128::{
    constants::{
        FROBENIUS_GAMMA_1, FROBENIUS_GAMMA_2, FROBENIUS_GAMMA_3, FROBENIUS_GAMMA_4,
        FROBENIUS_GAMMA_5,
    },
    fp::Field,
    fp2::Fp2,
};
use core::ops::{Add, Mul, Neg, Sub};

/// `c0 + c1 * w`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fp12 {
    /// Constant coefficient.
    pub c0: Fp6,
    /// Coefficient of `w`.
    pub c1: Fp6,
}

impl Fp12 {
    /// Creates `c0 + c1 * w`.
    pub const fn new(c0: Fp6, c1: Fp6) -> Self {
        Self { c0, c1 }
    }

    /// Sparse element `a + b * w + c * w^3`, the shape of a Miller loop line.
    pub fn from_line(a: Fp2, b: Fp2, c: Fp2) -> Self {
        Self::new(
            Fp6::new(a, Fp2::ZERO, Fp2::ZERO),
            Fp6::new(b, c, Fp2::ZERO),
        )
    }

    /// `c0 - c1 * w`, the `p^6`-power Frobenius.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// `p`-power Frobenius.
    ///
    /// Each `Fp2` coefficient of `w^i` is conjugated and multiplied by `(9 + u)^(i(p - 1)/6)`.
    pub fn frobenius_map(&self) -> Self {
        let (a, b) = (self.c0, self.c1);
        Self::new(
            Fp6::new(
                a.c0.conjugate(),
                a.c1.conjugate() * FROBENIUS_GAMMA_2,
                a.c2.conjugate() * FROBENIUS_GAMMA_4,
            ),
            Fp6::new(
                b.c0.conjugate() * FROBENIUS_GAMMA_1,
                b.c1.conjugate() * FROBENIUS_GAMMA_3,
                b.c2.conjugate() * FROBENIUS_GAMMA_5,
            ),
        )
    }

    /// Raises to an exponent given as little-endian 64-bit limbs.
    pub fn pow_limbs(&self, limbs: &[u64]) -> Self {
        self.pow_bits(
            limbs
                .iter()
                .rev()
                .flat_map(|limb| (0..64).rev().map(move |i| (limb >> i) & 1 == 1)),
        )
    }
}

impl Field for Fp12 {
    const ZERO: Self = Self::new(Fp6::ZERO, Fp6::ZERO);
    const ONE: Self = Self::new(Fp6::ONE, Fp6::ZERO);

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    fn inverse(&self) -> Option<Self> {
        let det = self.c0.square() - self.c1.square().mul_by_v();
        let inv = det.inverse()?;
        Some(Self::new(self.c0 * inv, -(self.c1 * inv)))
    }

    fn square(&self) -> Self {
        let t = self.c0 * self.c1;
        let c0 = (self.c0 + self.c1) * (self.c0 + self.c1.mul_by_v()) - t - t.mul_by_v();
        Self::new(c0, t.double())
    }
}

impl Add for Fp12 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }
}

impl Sub for Fp12 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }
}

impl Neg for Fp12 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}

impl Mul for Fp12 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - t0 - t1;
        Self::new(t0 + t1.mul_by_v(), c1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bn128::{constants::P, fp::Fp};

    fn el(seed: u64) -> Fp12 {
        let f2 = |k: u64| Fp2::new(Fp::from_u64(seed * 31 + k), Fp::from_u64(seed * 17 + 5 * k));
        Fp12::new(Fp6::new(f2(1), f2(2), f2(3)), Fp6::new(f2(4), f2(5), f2(6)))
    }

    #[test]
    fn w_squared_is_v() {
        let w = Fp12::new(Fp6::ZERO, Fp6::ONE);
        let v = Fp12::new(Fp6::new(Fp2::ZERO, Fp2::ONE, Fp2::ZERO), Fp6::ZERO);
        assert_eq!(w * w, v);
    }

    #[test]
    fn square_and_inverse() {
        let a = el(3);
        assert_eq!(a.square(), a * a);
        assert_eq!(a * a.inverse().unwrap(), Fp12::ONE);
        assert_eq!(Fp12::ZERO.inverse(), None);
    }

    #[test]
    fn frobenius_is_p_power() {
        let a = el(7);
        assert_eq!(a.frobenius_map(), a.pow_limbs(P.as_limbs()));
        let mut twelfth = a;
        for _ in 0..12 {
            twelfth = twelfth.frobenius_map();
        }
        assert_eq!(twelfth, a);
    }

    #[test]
    fn conjugate_is_sixth_frobenius() {
        let a = el(9);
        let mut sixth = a;
        for _ in 0..6 {
            sixth = sixth.frobenius_map();
        }
        assert_eq!(sixth, a.conjugate());
    }

    #[test]
    fn line_shape() {
        let a = Fp2::new(Fp::from_u64(1), Fp::from_u64(2));
        let b = Fp2::new(Fp::from_u64(3), Fp::from_u64(4));
        let c = Fp2::new(Fp::from_u64(5), Fp::from_u64(6));
        let w = Fp12::new(Fp6::ZERO, Fp6::ONE);
        let scalar = |x: Fp2| Fp12::new(Fp6::new(x, Fp2::ZERO, Fp2::ZERO), Fp6::ZERO);
        assert_eq!(
            Fp12::from_line(a, b, c),
            scalar(a) + scalar(b) * w + scalar(c) * w * w * w
        );
    }
}
