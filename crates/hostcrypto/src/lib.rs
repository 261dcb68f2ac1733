//! # hostcrypto
//!
//! Deterministic cryptographic primitives for execution hosts: Keccak-256/SHA3-256 digests,
//! alt_bn128 (BN254) group arithmetic and pairing checks, arbitrary-precision modular
//! exponentiation and the BLAKE2b `F` compression function.
//!
//! Every operation is a pure function of its byte inputs. Nothing is cached between calls and
//! cost is bounded by the size of the inputs.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod bigint;
pub mod blake2;
pub mod bn128;
pub mod hash;
pub mod host;
pub mod interface;
pub mod modexp;
pub mod utilities;

pub use bigint::BigInteger;
pub use bn128::{
    G1Coordinates, G1Point, G1PointView, G2Coordinates, G2Point, G2PointView,
};
pub use hash::HashVariant;
pub use host::HostFunctions;
pub use interface::*;
