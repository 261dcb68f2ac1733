//! Constants for alt_bn128 (BN254) arithmetic.
use super::{fp::Fp, fp2::Fp2};
use primitives::U256;

/// Field element length
pub const FQ_LEN: usize = 32;

/// Quadratic extension field element length (Fq2)
pub const FQ2_LEN: usize = 2 * FQ_LEN;

/// G1 point length (x, y coordinates)
pub const G1_LEN: usize = 2 * FQ_LEN;

/// G2 point length (x, y coordinates, each an Fq2)
pub const G2_LEN: usize = 2 * FQ2_LEN;

/// Input length of the packed addition.
pub const ADD_INPUT_LEN: usize = 2 * G1_LEN;

/// Length of one (G1, G2) pair in the packed pairing input.
pub const PAIR_ELEMENT_LEN: usize = G1_LEN + G2_LEN;

const fn fp(limbs: [u64; 4]) -> Fp {
    Fp::from_raw_unchecked(U256::from_limbs(limbs))
}

/// Base field modulus `p`.
pub(crate) const P: U256 = U256::from_limbs([
    0x3c208c16d87cfd47,
    0x97816a916871ca8d,
    0xb85045b68181585d,
    0x30644e72e131a029,
]);

/// Prime order `r` of G1 and of the G2 subgroup.
pub(crate) const R: U256 = U256::from_limbs([
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
]);

/// G1 curve constant, `y^2 = x^3 + 3`.
pub(crate) const G1_B: Fp = fp([3, 0, 0, 0]);

/// Twist curve constant `3 / (9 + u)`.
pub(crate) const G2_B: Fp2 = Fp2::new(
    fp([
        0x3267e6dc24a138e5,
        0xb5b4c5e559dbefa3,
        0x81be18991be06ac3,
        0x2b149d40ceb8aaae,
    ]),
    fp([
        0xe4a2bd0685c315d2,
        0xa74fa084e52d1852,
        0xcd2cafadeed8fdf4,
        0x009713b03af0fed4,
    ]),
);

/// G1 generator `(1, 2)`.
pub(crate) const G1_GENERATOR: (Fp, Fp) = (fp([1, 0, 0, 0]), fp([2, 0, 0, 0]));

/// G2 generator.
pub(crate) const G2_GENERATOR: (Fp2, Fp2) = (
    Fp2::new(
        fp([
            0x46debd5cd992f6ed,
            0x674322d4f75edadd,
            0x426a00665e5c4479,
            0x1800deef121f1e76,
        ]),
        fp([
            0x97e485b7aef312c2,
            0xf1aa493335a9e712,
            0x7260bfb731fb5d25,
            0x198e9393920d483a,
        ]),
    ),
    Fp2::new(
        fp([
            0x4ce6cc0166fa7daa,
            0xe3d1e7690c43d37b,
            0x4aab71808dcb408f,
            0x12c85ea5db8c6deb,
        ]),
        fp([
            0x55acdadcd122975b,
            0xbc4b313370b38ef3,
            0xec9e99ad690c3395,
            0x090689d0585ff075,
        ]),
    ),
);

/// `(9 + u)^(1(p - 1)/6)`, Frobenius coefficient of `w^1`.
pub(crate) const FROBENIUS_GAMMA_1: Fp2 = Fp2::new(
    fp([
        0xd60b35dadcc9e470,
        0x5c521e08292f2176,
        0xe8b99fdd76e68b60,
        0x1284b71c2865a7df,
    ]),
    fp([
        0xca5cf05f80f362ac,
        0x747992778eeec7e5,
        0xa6327cfe12150b8e,
        0x246996f3b4fae7e6,
    ]),
);

/// `(9 + u)^(2(p - 1)/6)`, Frobenius coefficient of `w^2`.
pub(crate) const FROBENIUS_GAMMA_2: Fp2 = Fp2::new(
    fp([
        0x99e39557176f553d,
        0xb78cc310c2c3330c,
        0x4c0bec3cf559b143,
        0x2fb347984f7911f7,
    ]),
    fp([
        0x1665d51c640fcba2,
        0x32ae2a1d0b7c9dce,
        0x4ba4cc8bd75a0794,
        0x16c9e55061ebae20,
    ]),
);

/// `(9 + u)^(3(p - 1)/6)`, Frobenius coefficient of `w^3`.
pub(crate) const FROBENIUS_GAMMA_3: Fp2 = Fp2::new(
    fp([
        0xdc54014671a0135a,
        0xdbaae0eda9c95998,
        0xdc5ec698b6e2f9b9,
        0x063cf305489af5dc,
    ]),
    fp([
        0x82d37f632623b0e3,
        0x21807dc98fa25bd2,
        0x0704b5a7ec796f2b,
        0x07c03cbcac41049a,
    ]),
);

/// `(9 + u)^(4(p - 1)/6)`, Frobenius coefficient of `w^4`.
pub(crate) const FROBENIUS_GAMMA_4: Fp2 = Fp2::new(
    fp([
        0x848a1f55921ea762,
        0xd33365f7be94ec72,
        0x80f3c0b75a181e84,
        0x05b54f5e64eea801,
    ]),
    fp([
        0xc13b4711cd2b8126,
        0x3685d2ea1bdec763,
        0x9f3a80b03b0b1c92,
        0x2c145edbe7fd8aee,
    ]),
);

/// `(9 + u)^(5(p - 1)/6)`, Frobenius coefficient of `w^5`.
pub(crate) const FROBENIUS_GAMMA_5: Fp2 = Fp2::new(
    fp([
        0x2ea2c810eab7692f,
        0x425c459b55aa1bd3,
        0xe93a3661a4353ff4,
        0x0183c1e74f798649,
    ]),
    fp([
        0x24c6b8ee6e0c2c4b,
        0xb080cb99678e2ac0,
        0xa27fb246c7729f7d,
        0x12acf2ca76fd0675,
    ]),
);

/// Optimal ate loop count `6x + 2` with `x = 4965661367192848881`.
pub(crate) const ATE_LOOP_COUNT: u128 = 0x19d797039be763ba8;

/// Hard part of the final exponentiation `(p^4 - p^2 + 1) / r`, little-endian limbs.
pub(crate) const FINAL_EXP_HARD: [u64; 12] = [
    0xe81bb482ccdf42b1,
    0x5abf5cc4f49c36d4,
    0xf1154e7e1da014fd,
    0xdcc7b44c87cdbacf,
    0xaaa441e3954bcf8a,
    0x6b887d56d5095f23,
    0x79581e16f3fd90c6,
    0x3b1b1355d189227d,
    0x4e529a5861876f6b,
    0x6c0eb522d5b12278,
    0x331ec15183177faf,
    0x01baaa710b0759ad,
];
