mod common;

use common::{bytes, load, random_scalar, reference_g1_mul, rng, MulCase};
use hostcrypto::{
    bn128::{self, curve::G1Affine},
    BigInteger, CryptoError, G1Coordinates, G1Point, G1PointView, HostFunctions,
};
use rstest::rstest;

/// Runs the multiplication with owning points, raw coordinate views and views over owning
/// points.
fn mul_all_ways(point: &[u8], scalar: &[u8]) -> Result<[u8; 64], CryptoError> {
    let host = HostFunctions::new();
    let scalar_int = BigInteger::from(scalar);

    let owned = G1Point::new(&point[..32], &point[32..])?;
    let from_owned = host
        .alt_bn128_mul(&owned, &scalar_int)
        .map(|p| p.to_bytes());

    let raw = G1PointView::from_slice(point)?;
    let from_raw = host.alt_bn128_mul(&raw, &scalar_int).map(|p| p.to_bytes());

    let from_view = host
        .alt_bn128_mul(&owned.as_view(), &scalar_int)
        .map(|p| p.to_bytes());

    let packed = bn128::run_mul(&[point, scalar].concat());

    assert_eq!(from_owned, from_raw);
    assert_eq!(from_owned, from_view);
    assert_eq!(from_owned, packed);
    from_owned
}

#[test]
fn fixtures() {
    for case in load::<MulCase>("bn128_mul.json") {
        let result = mul_all_ways(&bytes(&case.point), &bytes(&case.scalar));
        match case.expected {
            Some(expected) => {
                assert_eq!(result.map(|p| p.to_vec()), Ok(bytes(&expected)), "{}", case.name)
            }
            None => assert_eq!(result, Err(CryptoError::InvalidPoint), "{}", case.name),
        }
    }
}

#[rstest]
#[case::zero(&[])]
#[case::zero_byte(&[0])]
#[case::zero_word(&[0; 32])]
#[case::zero_wide(&[0; 65])]
fn zero_scalar_gives_identity(#[case] scalar: &[u8]) {
    let g = G1Point::from(G1Affine::generator()).to_bytes();
    assert_eq!(mul_all_ways(&g, scalar), Ok([0; 64]));
}

#[rstest]
#[case::one(&[1])]
#[case::large(&[0xff; 40])]
fn identity_absorbs_scalar(#[case] scalar: &[u8]) {
    assert_eq!(mul_all_ways(&[0; 64], scalar), Ok([0; 64]));
}

#[test]
fn leading_zeroes_do_not_change_result() {
    let g = G1Point::from(G1Affine::generator()).to_bytes();
    let short = mul_all_ways(&g, &[0x2a]);
    assert_eq!(short, mul_all_ways(&g, &[0, 0, 0, 0x2a]));
    assert_eq!(short, mul_all_ways(&g, &[vec![0u8; 64], vec![0x2a]].concat()));
}

#[test]
fn matches_reference_implementation() {
    let mut rng = rng(0x6d756c);
    let g = G1Point::from(G1Affine::generator()).to_bytes();
    for _ in 0..16 {
        let k = random_scalar(&mut rng);
        assert_eq!(mul_all_ways(&g, &k), Ok(reference_g1_mul(&k)));
    }
}
