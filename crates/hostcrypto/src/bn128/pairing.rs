//! Optimal ate pairing on alt_bn128.
//!
//! Affine Miller loop over `6x + 2` followed by the two Frobenius-twisted line steps, and a
//! single final exponentiation over the product of all Miller loop values.
use super::{
    constants::{ATE_LOOP_COUNT, FINAL_EXP_HARD, FROBENIUS_GAMMA_2, FROBENIUS_GAMMA_3},
    curve::{G1Affine, G2Affine},
    fp::{Field, Fp},
    fp2::Fp2,
};

pub mod fp12;
pub mod fp6;

pub use fp12::Fp12;
pub use fp6::Fp6;

/// Bit length of [`ATE_LOOP_COUNT`].
const ATE_LOOP_BITS: u32 = u128::BITS - ATE_LOOP_COUNT.leading_zeros();

/// Adds `q` to `t` and evaluates the line through them at `p`.
///
/// The tangent is used when `t == q`. A vertical line (`t == -q`) evaluates to one in the
/// target group after the final exponentiation, so it is skipped.
fn line_step(t: &G2Affine, q: &G2Affine, p: &G1Affine) -> (G2Affine, Fp12) {
    if t.is_identity() {
        return (*q, Fp12::ONE);
    }
    let lambda = if t.x() == q.x() {
        if t.y() != q.y() {
            return (G2Affine::IDENTITY, Fp12::ONE);
        }
        let Some(inv) = t.y().double().inverse() else {
            return (G2Affine::IDENTITY, Fp12::ONE);
        };
        let x2 = t.x().square();
        (x2.double() + x2) * inv
    } else {
        let Some(inv) = (q.x() - t.x()).inverse() else {
            return (G2Affine::IDENTITY, Fp12::ONE);
        };
        (q.y() - t.y()) * inv
    };

    let x3 = lambda.square() - t.x() - q.x();
    let y3 = lambda * (t.x() - x3) - t.y();

    // y_P - lambda * x_P * w + (lambda * x_T - y_T) * w^3
    let line = Fp12::from_line(
        Fp2::new(p.y(), Fp::ZERO),
        -lambda.scale(p.x()),
        lambda * t.x() - t.y(),
    );
    (G2Affine::new_unchecked(x3, y3), line)
}

/// `p`-power Frobenius endomorphism on the twist.
fn frobenius(q: &G2Affine) -> G2Affine {
    G2Affine::new_unchecked(
        q.x().conjugate() * FROBENIUS_GAMMA_2,
        q.y().conjugate() * FROBENIUS_GAMMA_3,
    )
}

/// Miller loop of the optimal ate pairing. Either point being the identity yields one.
pub fn miller_loop(p: &G1Affine, q: &G2Affine) -> Fp12 {
    if p.is_identity() || q.is_identity() {
        return Fp12::ONE;
    }

    let mut f = Fp12::ONE;
    let mut t = *q;
    for i in (0..ATE_LOOP_BITS - 1).rev() {
        let (doubled, line) = line_step(&t, &t, p);
        f = f.square() * line;
        t = doubled;

        if (ATE_LOOP_COUNT >> i) & 1 == 1 {
            let (added, line) = line_step(&t, q, p);
            f = f * line;
            t = added;
        }
    }

    let q1 = frobenius(q);
    let q2 = frobenius(&q1).neg();

    let (added, line) = line_step(&t, &q1, p);
    f = f * line;
    let (_, line) = line_step(&added, &q2, p);
    f * line
}

/// Raises a Miller loop value to `(p^12 - 1) / r`.
pub fn final_exponentiation(f: &Fp12) -> Fp12 {
    let Some(inv) = f.inverse() else {
        return Fp12::ZERO;
    };
    // easy part: (p^6 - 1)(p^2 + 1)
    let f1 = f.conjugate() * inv;
    let f2 = f1.frobenius_map().frobenius_map() * f1;
    // hard part: (p^4 - p^2 + 1) / r
    f2.pow_limbs(&FINAL_EXP_HARD)
}

/// Reduced pairing `e(P, Q)`.
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Fp12 {
    final_exponentiation(&miller_loop(p, q))
}

/// Returns `true` if the product of `e(P_i, Q_i)` is one.
///
/// Pairs with an identity component contribute one. The empty product is one.
#[tracing::instrument(level = "trace", skip_all, fields(pairs = pairs.len()))]
pub fn multi_pairing_is_one(pairs: &[(G1Affine, G2Affine)]) -> bool {
    let f = pairs
        .iter()
        .filter(|(p, q)| !p.is_identity() && !q.is_identity())
        .fold(Fp12::ONE, |acc, (p, q)| acc * miller_loop(p, q));
    final_exponentiation(&f) == Fp12::ONE
}
