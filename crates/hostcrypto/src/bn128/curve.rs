//! Short Weierstrass group law in affine coordinates, shared by G1 and G2.
use super::{
    constants::{G1_B, G1_GENERATOR, G2_B, G2_GENERATOR, R},
    fp::{Field, Fp},
    fp2::Fp2,
};
use crate::bigint::BigInteger;
use core::fmt::Debug;

/// Curve `y^2 = x^3 + b` over a base field.
pub trait SwCurve: Copy + Debug + Default + Eq {
    /// Coordinate field.
    type Base: Field;

    /// Constant term `b`.
    const B: Self::Base;

    /// Fixed generator.
    const GENERATOR: (Self::Base, Self::Base);
}

/// alt_bn128 G1, `y^2 = x^3 + 3` over `Fp`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct G1Curve;

impl SwCurve for G1Curve {
    type Base = Fp;
    const B: Fp = G1_B;
    const GENERATOR: (Fp, Fp) = G1_GENERATOR;
}

/// alt_bn128 G2, the D-type sextic twist `y^2 = x^3 + 3 / (9 + u)` over `Fp2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct G2Curve;

impl SwCurve for G2Curve {
    type Base = Fp2;
    const B: Fp2 = G2_B;
    const GENERATOR: (Fp2, Fp2) = G2_GENERATOR;
}

/// Affine point. The identity is encoded as `(0, 0)`, which is never on a curve with `b != 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffinePoint<C: SwCurve> {
    x: C::Base,
    y: C::Base,
}

/// Affine G1 point.
pub type G1Affine = AffinePoint<G1Curve>;

/// Affine G2 point.
pub type G2Affine = AffinePoint<G2Curve>;

impl<C: SwCurve> AffinePoint<C> {
    /// Point at infinity.
    pub const IDENTITY: Self = Self {
        x: C::Base::ZERO,
        y: C::Base::ZERO,
    };

    /// Builds a point from coordinates without checking the curve equation.
    #[inline]
    pub const fn new_unchecked(x: C::Base, y: C::Base) -> Self {
        Self { x, y }
    }

    /// Builds a point, returning `None` if it is neither the identity nor on the curve.
    pub fn new(x: C::Base, y: C::Base) -> Option<Self> {
        let point = Self::new_unchecked(x, y);
        point.is_on_curve().then_some(point)
    }

    /// Curve generator.
    pub const fn generator() -> Self {
        Self::new_unchecked(C::GENERATOR.0, C::GENERATOR.1)
    }

    /// Affine x coordinate.
    #[inline]
    pub fn x(&self) -> C::Base {
        self.x
    }

    /// Affine y coordinate.
    #[inline]
    pub fn y(&self) -> C::Base {
        self.y
    }

    /// Returns `true` for the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Returns `true` for the identity or a point satisfying `y^2 = x^3 + b`.
    pub fn is_on_curve(&self) -> bool {
        self.is_identity() || self.y.square() == self.x.square() * self.x + C::B
    }

    /// Returns `true` if `[r]P` is the identity.
    pub fn is_in_subgroup(&self) -> bool {
        self.mul_bits((0..256).rev().map(|i| R.bit(i))).is_identity()
    }

    /// `-P`.
    pub fn neg(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        Self::new_unchecked(self.x, -self.y)
    }

    /// `2P` by the tangent rule.
    pub fn double(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        // a point with y = 0 has order two
        let Some(inv) = self.y.double().inverse() else {
            return Self::IDENTITY;
        };
        let x2 = self.x.square();
        let lambda = (x2.double() + x2) * inv;
        self.complete(lambda, self.x)
    }

    /// `P + Q` by the chord rule, falling back to doubling when `P == Q`.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return *other;
        }
        if other.is_identity() {
            return *self;
        }
        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            }
            return Self::IDENTITY;
        }
        let Some(inv) = (other.x - self.x).inverse() else {
            return Self::IDENTITY;
        };
        let lambda = (other.y - self.y) * inv;
        self.complete(lambda, other.x)
    }

    /// Third intersection of the line with slope `lambda` through `self` and a point with
    /// abscissa `other_x`, reflected over the x axis.
    #[inline]
    fn complete(&self, lambda: C::Base, other_x: C::Base) -> Self {
        let x3 = lambda.square() - self.x - other_x;
        let y3 = lambda * (self.x - x3) - self.y;
        Self::new_unchecked(x3, y3)
    }

    /// Double-and-add over the scalar bits, most significant first.
    pub fn mul_bits(&self, bits: impl IntoIterator<Item = bool>) -> Self {
        let mut acc = Self::IDENTITY;
        for bit in bits {
            acc = acc.double();
            if bit {
                acc = acc.add(self);
            }
        }
        acc
    }

    /// `[k]P` over every bit of the supplied scalar width. The scalar is not reduced modulo
    /// the group order.
    pub fn mul(&self, k: &BigInteger) -> Self {
        self.mul_bits(k.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::U256;

    fn r_bytes() -> BigInteger {
        BigInteger::new(R.to_be_bytes::<32>().to_vec())
    }

    #[test]
    fn generators_are_on_curve() {
        assert!(G1Affine::generator().is_on_curve());
        assert!(G2Affine::generator().is_on_curve());
        assert!(G1Affine::IDENTITY.is_on_curve());
        assert!(!G1Affine::new_unchecked(Fp::ONE, Fp::ONE).is_on_curve());
    }

    #[test]
    fn identity_is_neutral() {
        let g = G1Affine::generator();
        assert_eq!(g.add(&G1Affine::IDENTITY), g);
        assert_eq!(G1Affine::IDENTITY.add(&g), g);
        assert_eq!(g.add(&g.neg()), G1Affine::IDENTITY);
        assert_eq!(G1Affine::IDENTITY.double(), G1Affine::IDENTITY);
    }

    #[test]
    fn doubling_matches_addition() {
        let g = G2Affine::generator();
        assert_eq!(g.add(&g), g.double());
        let g3 = g.double().add(&g);
        assert_eq!(g3, g.add(&g.double()));
        assert!(g3.is_on_curve());
        assert_eq!(g.mul(&BigInteger::from(3)), g3);
    }

    #[test]
    fn associativity() {
        let g = G1Affine::generator();
        let a = g.mul(&BigInteger::from(5));
        let b = g.mul(&BigInteger::from(11));
        let c = g.mul(&BigInteger::from(17));
        assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        assert_eq!(a.add(&b), b.add(&a));
        assert_eq!(a.add(&b).add(&c), g.mul(&BigInteger::from(33)));
    }

    #[test]
    fn order_annihilates() {
        assert_eq!(G1Affine::generator().mul(&r_bytes()), G1Affine::IDENTITY);
        assert!(G1Affine::generator().is_in_subgroup());
        assert!(G2Affine::generator().is_in_subgroup());
    }

    #[test]
    fn scalar_is_not_reduced() {
        let g = G1Affine::generator();
        let r_plus_five = BigInteger::new((R + U256::from(5)).to_be_bytes::<32>().to_vec());
        assert_eq!(g.mul(&r_plus_five), g.mul(&BigInteger::from(5)));
        assert_eq!(g.mul(&BigInteger::default()), G1Affine::IDENTITY);
        assert_eq!(
            G1Affine::IDENTITY.mul(&BigInteger::from(12345)),
            G1Affine::IDENTITY
        );
    }
}
