#![allow(dead_code)]

use bn::{AffineG1, AffineG2, Fq, Fq2, Fr, Group, G1, G2};
use hostcrypto::bn128::{FQ2_LEN, FQ_LEN, G1_LEN, G2_LEN};
use primitives::hex;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use serde::{de::DeserializeOwned, Deserialize};
use std::{fs, path::PathBuf};

// Constant for fixtures directory path
pub(crate) const TESTS_FIXTURES: &str = "tests/fixtures";

/// Loads a JSON fixture from `tests/fixtures/`.
pub(crate) fn load<T: DeserializeOwned>(filename: &str) -> Vec<T> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(TESTS_FIXTURES)
        .join(filename);
    let json = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    serde_json::from_str(&json)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}

/// Decodes a hex fixture field.
pub(crate) fn bytes(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

/// Deterministic generator so failures can be reproduced.
pub(crate) fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random scalar below `2^253`, so the reference implementation does not reduce it.
pub(crate) fn random_scalar(rng: &mut StdRng) -> [u8; 32] {
    let mut scalar = [0u8; 32];
    rng.fill_bytes(&mut scalar);
    scalar[0] &= 0x1f;
    scalar
}

#[derive(Debug, Deserialize)]
pub(crate) struct DigestCase {
    pub(crate) name: String,
    pub(crate) input: String,
    pub(crate) keccak256: String,
    pub(crate) sha3_256: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddCase {
    pub(crate) name: String,
    pub(crate) p1: String,
    pub(crate) p2: String,
    pub(crate) expected: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MulCase {
    pub(crate) name: String,
    pub(crate) point: String,
    pub(crate) scalar: String,
    pub(crate) expected: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ExpectedStatus {
    Success,
    Failure,
    Malformed,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PairCase {
    pub(crate) name: String,
    pub(crate) input: String,
    pub(crate) status: ExpectedStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModExpCase {
    pub(crate) name: String,
    pub(crate) base: String,
    pub(crate) exponent: String,
    pub(crate) modulus: String,
    pub(crate) status: ExpectedStatus,
    pub(crate) expected: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Blake2Case {
    pub(crate) name: String,
    pub(crate) input: String,
    pub(crate) expected: Option<String>,
}

/// `[k]G1` computed by the reference implementation, encoded as `x || y`.
pub(crate) fn reference_g1_mul(scalar: &[u8; 32]) -> [u8; G1_LEN] {
    encode_reference_g1(G1::one() * Fr::from_slice(scalar).unwrap())
}

/// `[k]G2` computed by the reference implementation, encoded in EIP-197 order.
pub(crate) fn reference_g2_mul(scalar: &[u8; 32]) -> [u8; G2_LEN] {
    encode_reference_g2(G2::one() * Fr::from_slice(scalar).unwrap())
}

/// Encodes a reference G1 point, all zeroes for the identity.
pub(crate) fn encode_reference_g1(point: G1) -> [u8; G1_LEN] {
    let mut out = [0u8; G1_LEN];
    if let Some(affine) = AffineG1::from_jacobian(point) {
        affine.x().to_big_endian(&mut out[..FQ_LEN]).unwrap();
        affine.y().to_big_endian(&mut out[FQ_LEN..]).unwrap();
    }
    out
}

/// Encodes a reference G2 point, all zeroes for the identity.
pub(crate) fn encode_reference_g2(point: G2) -> [u8; G2_LEN] {
    let mut out = [0u8; G2_LEN];
    if let Some(affine) = AffineG2::from_jacobian(point) {
        write_fq2(affine.x(), &mut out[..FQ2_LEN]);
        write_fq2(affine.y(), &mut out[FQ2_LEN..]);
    }
    out
}

fn write_fq2(value: Fq2, out: &mut [u8]) {
    value.imaginary().to_big_endian(&mut out[..FQ_LEN]).unwrap();
    value.real().to_big_endian(&mut out[FQ_LEN..]).unwrap();
}

/// Decodes a G1 encoding into a reference point.
pub(crate) fn decode_reference_g1(bytes: &[u8]) -> G1 {
    let x = Fq::from_slice(&bytes[..FQ_LEN]).unwrap();
    let y = Fq::from_slice(&bytes[FQ_LEN..G1_LEN]).unwrap();
    if x == Fq::zero() && y == Fq::zero() {
        return G1::zero();
    }
    AffineG1::new(x, y).unwrap().into()
}
