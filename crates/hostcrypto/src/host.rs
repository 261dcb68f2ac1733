//! Host-function surface.
//!
//! [`HostFunctions`] exposes every primitive with the calling conventions an execution host
//! expects: digests return fixed arrays, fixed-layout violations abort with an `Err`, and
//! operations with a data-dependent outcome report an `i32` status code taken from
//! [`StatusCodes`].
use crate::{
    bigint::BigInteger,
    blake2::{self, state_to_bytes, STATE_LENGTH},
    bn128::{G1Coordinates, G1Point, G2Coordinates},
    hash::{HashVariant, DIGEST_LEN},
    interface::{
        Crypto, CryptoError, CryptoResult, DefaultCrypto, Status, StatusCodes, StatusOutput,
    },
    utilities::fixed,
};

/// Cryptographic host functions over a [`Crypto`] backend.
#[derive(Clone, Debug, Default)]
pub struct HostFunctions<C: Crypto = DefaultCrypto> {
    codes: StatusCodes,
    backend: C,
}

impl HostFunctions {
    /// Host functions over [`DefaultCrypto`] with the default status codes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Host functions over [`DefaultCrypto`] reporting the given status codes.
    pub fn with_codes(codes: StatusCodes) -> Self {
        Self {
            codes,
            backend: DefaultCrypto,
        }
    }
}

impl<C: Crypto> HostFunctions<C> {
    /// Host functions over a custom backend.
    pub fn with_backend(backend: C, codes: StatusCodes) -> Self {
        Self { codes, backend }
    }

    /// Status codes in use.
    pub fn codes(&self) -> &StatusCodes {
        &self.codes
    }

    /// Backend in use.
    pub fn backend(&self) -> &C {
        &self.backend
    }

    #[inline]
    fn code(&self, status: Status) -> i32 {
        self.codes.code(status)
    }

    /// Keccak-256 digest of `message`.
    pub fn keccak256(&self, message: &[u8]) -> [u8; DIGEST_LEN] {
        self.backend.keccak256(message)
    }

    /// SHA3-256 digest of `message`.
    pub fn sha3_256(&self, message: &[u8]) -> [u8; DIGEST_LEN] {
        self.backend.sha3_256(message)
    }

    /// Digest of `message` for the given variant.
    pub fn digest(&self, message: &[u8], variant: HashVariant) -> [u8; DIGEST_LEN] {
        match variant {
            HashVariant::Keccak256 => self.keccak256(message),
            HashVariant::Sha3_256 => self.sha3_256(message),
        }
    }

    /// Aborts with [`CryptoError::DigestMismatch`] unless `expected` is the Keccak-256 digest
    /// of `message`.
    pub fn assert_keccak256(&self, message: &[u8], expected: &[u8]) -> CryptoResult<()> {
        self.assert_digest(message, expected, HashVariant::Keccak256)
    }

    /// Aborts with [`CryptoError::DigestMismatch`] unless `expected` is the SHA3-256 digest
    /// of `message`.
    pub fn assert_sha3_256(&self, message: &[u8], expected: &[u8]) -> CryptoResult<()> {
        self.assert_digest(message, expected, HashVariant::Sha3_256)
    }

    fn assert_digest(
        &self,
        message: &[u8],
        expected: &[u8],
        variant: HashVariant,
    ) -> CryptoResult<()> {
        let expected = fixed::<DIGEST_LEN>(expected)?;
        if self.digest(message, variant) != *expected {
            tracing::debug!(?variant, len = message.len(), "digest assertion failed");
            return Err(CryptoError::DigestMismatch);
        }
        Ok(())
    }

    /// Adds two G1 points. Invalid points abort.
    pub fn alt_bn128_add(
        &self,
        p1: &dyn G1Coordinates,
        p2: &dyn G1Coordinates,
    ) -> CryptoResult<G1Point> {
        self.backend.bn128_g1_add(p1, p2)
    }

    /// Multiplies a G1 point by an unreduced scalar. Invalid points abort.
    pub fn alt_bn128_mul(
        &self,
        point: &dyn G1Coordinates,
        scalar: &BigInteger,
    ) -> CryptoResult<G1Point> {
        self.backend.bn128_g1_mul(point, scalar)
    }

    /// Pairing check returning a status code.
    ///
    /// Success if the pairing product is one (including the empty product), failure if it is
    /// not, malformed if any point does not decode. Only encoding errors abort.
    pub fn alt_bn128_pair(
        &self,
        pairs: &[(&dyn G1Coordinates, &dyn G2Coordinates)],
    ) -> CryptoResult<i32> {
        match self.backend.bn128_pairing_check(pairs) {
            Ok(holds) => Ok(self.code(Status::from(holds))),
            Err(err @ CryptoError::InvalidEncoding { .. }) => Err(err),
            Err(err) => Ok(self.code(err.status())),
        }
    }

    /// `base^exp mod modulus`, serialized to the modulus length.
    ///
    /// A modulus of zero or one reports the malformed code with a zero-filled result.
    pub fn mod_exp(
        &self,
        base: &BigInteger,
        exp: &BigInteger,
        modulus: &BigInteger,
    ) -> StatusOutput {
        match self.backend.modexp(base, exp, modulus) {
            Ok(result) => StatusOutput::new(
                self.code(Status::Success),
                result.to_be_bytes_padded(modulus.len()),
            ),
            Err(err) => StatusOutput::new(self.code(err.status()), vec![0; modulus.len()]),
        }
    }

    /// BLAKE2b `F` compression over byte buffers.
    ///
    /// Buffers of the wrong length report the malformed code with 64 zero bytes and no rounds
    /// are run.
    pub fn blake2_f(
        &self,
        rounds: u32,
        state: &[u8],
        message: &[u8],
        offset_low: &[u8],
        offset_high: &[u8],
        final_block: bool,
    ) -> StatusOutput {
        match blake2::parse_block(state, message, offset_low, offset_high) {
            Ok((mut h, m, t)) => {
                self.backend.blake2_compress(rounds, &mut h, &m, t, final_block);
                StatusOutput::new(self.code(Status::Success), state_to_bytes(&h).to_vec())
            }
            Err(err) => StatusOutput::new(self.code(err.status()), vec![0; STATE_LENGTH]),
        }
    }
}
