//! Modular exponentiation over [`BigInteger`].
use crate::{
    bigint::BigInteger,
    interface::{CryptoError, CryptoResult},
};
use num::{BigUint, One};

/// Computes `base^exp mod modulus` by left-to-right square-and-multiply.
///
/// Every bit of the supplied exponent width is processed, one modular squaring per bit and one
/// extra multiplication for each set bit. The result is serialized to exactly `modulus.len()`
/// bytes.
///
/// A modulus of zero or one is rejected with [`CryptoError::ArithmeticDomainError`] before any
/// multiplication runs.
#[tracing::instrument(level = "trace", skip_all, fields(base_len = base.len(), exp_len = exp.len(), mod_len = modulus.len()))]
pub fn modexp(
    base: &BigInteger,
    exp: &BigInteger,
    modulus: &BigInteger,
) -> CryptoResult<BigInteger> {
    if modulus.is_zero() || modulus.is_one() {
        tracing::debug!(mod_len = modulus.len(), "degenerate modexp modulus");
        return Err(CryptoError::ArithmeticDomainError);
    }
    let m = modulus.to_biguint();
    let b = base.to_biguint() % &m;

    let mut acc = BigUint::one();
    for bit in exp.bits() {
        acc = &acc * &acc % &m;
        if bit {
            acc = acc * &b % &m;
        }
    }

    Ok(BigInteger::new(
        BigInteger::from_biguint(&acc).to_be_bytes_padded(modulus.len()),
    ))
}
