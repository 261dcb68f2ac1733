//! alt_bn128 (BN254) group operations and pairing check.
//!
//! The typed entry points take any [`G1Coordinates`]/[`G2Coordinates`] implementation, so owning
//! points and views over caller buffers go through the same code. The `run_*` functions accept
//! the packed precompile byte layouts.
use crate::{
    bigint::BigInteger,
    interface::{CryptoError, CryptoResult},
    utilities::fixed,
};
use std::vec::Vec;

pub mod constants;
pub mod curve;
pub mod fp;
pub mod fp2;
pub mod pairing;
mod point;

pub use constants::{ADD_INPUT_LEN, FQ2_LEN, FQ_LEN, G1_LEN, G2_LEN, PAIR_ELEMENT_LEN};
pub use point::*;

/// Adds two G1 points.
pub fn g1_point_add(p1: &dyn G1Coordinates, p2: &dyn G1Coordinates) -> CryptoResult<G1Point> {
    let p1 = p1.to_affine()?;
    let p2 = p2.to_affine()?;
    Ok(G1Point::from(p1.add(&p2)))
}

/// Multiplies a G1 point by a big-endian scalar of any width.
///
/// The scalar is used as supplied, without reduction modulo the group order.
pub fn g1_point_mul(point: &dyn G1Coordinates, scalar: &BigInteger) -> CryptoResult<G1Point> {
    let point = point.to_affine()?;
    Ok(G1Point::from(point.mul(scalar)))
}

/// Returns `true` if the product of the pairings of all pairs is one.
///
/// Every pair is decoded and validated before any Miller loop runs. An empty slice succeeds.
pub fn pairing_check(pairs: &[(&dyn G1Coordinates, &dyn G2Coordinates)]) -> CryptoResult<bool> {
    let decoded = pairs
        .iter()
        .map(|(p, q)| -> CryptoResult<_> { Ok((p.to_affine()?, q.to_affine()?)) })
        .collect::<CryptoResult<Vec<_>>>()?;
    Ok(pairing::multi_pairing_is_one(&decoded))
}

/// Packed addition: two 64-byte points in, one 64-byte point out.
pub fn run_add(input: &[u8]) -> CryptoResult<[u8; G1_LEN]> {
    let input = fixed::<ADD_INPUT_LEN>(input)?;
    let (p1, p2) = input.split_at(G1_LEN);
    let sum = g1_point_add(&G1PointView::from_slice(p1)?, &G1PointView::from_slice(p2)?)?;
    Ok(sum.to_bytes())
}

/// Packed scalar multiplication: a 64-byte point followed by a big-endian scalar of any length.
pub fn run_mul(input: &[u8]) -> CryptoResult<[u8; G1_LEN]> {
    let Some((point, scalar)) = input.split_first_chunk::<G1_LEN>() else {
        return Err(CryptoError::invalid_encoding(G1_LEN, input.len()));
    };
    let product = g1_point_mul(&G1PointView::from_slice(point)?, &BigInteger::from(scalar))?;
    Ok(product.to_bytes())
}

/// Packed pairing check over concatenated 192-byte `(G1, G2)` elements.
pub fn run_pair(input: &[u8]) -> CryptoResult<bool> {
    if input.len() % PAIR_ELEMENT_LEN != 0 {
        let expected = input.len().next_multiple_of(PAIR_ELEMENT_LEN);
        return Err(CryptoError::invalid_encoding(expected, input.len()));
    }

    let views = input
        .chunks_exact(PAIR_ELEMENT_LEN)
        .map(|chunk| -> CryptoResult<_> {
            let (g1, g2) = chunk.split_at(G1_LEN);
            Ok((G1PointView::from_slice(g1)?, G2PointView::from_slice(g2)?))
        })
        .collect::<CryptoResult<Vec<_>>>()?;
    let pairs = views
        .iter()
        .map(|(p, q)| (p as &dyn G1Coordinates, q as &dyn G2Coordinates))
        .collect::<Vec<_>>();
    pairing_check(&pairs)
}
