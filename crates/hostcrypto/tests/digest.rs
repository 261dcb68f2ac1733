mod common;

use common::{bytes, load, rng, DigestCase};
use hostcrypto::{
    hash::{self, Keccak},
    CryptoError, HashVariant, HostFunctions,
};
use primitives::hex;
use rand::{Rng, RngCore};
use rstest::rstest;
use sha3::Digest;

#[test]
fn fixtures() {
    let host = HostFunctions::new();
    for case in load::<DigestCase>("digest.json") {
        let input = bytes(&case.input);
        let keccak = bytes(&case.keccak256);
        let sha3 = bytes(&case.sha3_256);

        assert_eq!(host.keccak256(&input)[..], keccak[..], "{}", case.name);
        assert_eq!(host.sha3_256(&input)[..], sha3[..], "{}", case.name);
        assert_eq!(host.assert_keccak256(&input, &keccak), Ok(()), "{}", case.name);
        assert_eq!(host.assert_sha3_256(&input, &sha3), Ok(()), "{}", case.name);
        assert_eq!(
            host.assert_keccak256(&input, &sha3),
            Err(CryptoError::DigestMismatch),
            "{}",
            case.name
        );
    }
}

#[rstest]
#[case::empty_keccak(
    HashVariant::Keccak256,
    "",
    hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
)]
#[case::empty_sha3(
    HashVariant::Sha3_256,
    "",
    hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a")
)]
#[case::abc_keccak(
    HashVariant::Keccak256,
    "abc",
    hex!("4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45")
)]
#[case::abc_sha3(
    HashVariant::Sha3_256,
    "abc",
    hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532")
)]
fn known_vectors(#[case] variant: HashVariant, #[case] input: &str, #[case] expected: [u8; 32]) {
    assert_eq!(hash::digest(input.as_bytes(), variant), expected);
    assert_eq!(
        HostFunctions::new().digest(input.as_bytes(), variant),
        expected
    );
    assert_eq!(hash::assert_digest(input.as_bytes(), &expected, variant), Ok(()));
}

#[test]
fn assertion_requires_full_digest() {
    let host = HostFunctions::new();
    let digest = host.keccak256(b"abc");
    assert_eq!(
        host.assert_keccak256(b"abc", &digest[..16]),
        Err(CryptoError::invalid_encoding(32, 16))
    );
    assert_eq!(
        host.assert_keccak256(b"abd", &digest),
        Err(CryptoError::DigestMismatch)
    );
}

#[test]
fn matches_reference_implementations() {
    let mut rng = rng(0x5eed);
    for _ in 0..64 {
        let mut input = vec![0u8; rng.random_range(0..600)];
        rng.fill_bytes(&mut input);

        let keccak = hash::keccak256(&input);
        assert_eq!(keccak[..], sha3::Keccak256::digest(&input)[..]);
        assert_eq!(keccak, primitives::keccak256(&input).0);
        assert_eq!(hash::sha3_256(&input)[..], sha3::Sha3_256::digest(&input)[..]);
    }
}

#[test]
fn incremental_absorption_matches_one_shot() {
    let mut rng = rng(17);
    let mut input = vec![0u8; 1000];
    rng.fill_bytes(&mut input);

    for variant in [HashVariant::Keccak256, HashVariant::Sha3_256] {
        let expected = hash::digest(&input, variant);
        for _ in 0..16 {
            let mut sponge = Keccak::new(variant);
            let mut rest = &input[..];
            while !rest.is_empty() {
                let take = rng.random_range(0..=rest.len().min(300));
                let (chunk, tail) = rest.split_at(take);
                sponge.update(chunk);
                rest = tail;
            }
            assert_eq!(sponge.finalize(), expected);
        }
    }
}
