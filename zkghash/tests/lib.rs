use hex_literal::hex;
use zkghash::{
    BLOCK_SIZE, GHash, LaneWidth, Multiplier, Multiply, Reduction,
    universal_hash::{KeyInit, UniversalHash},
};

//
// GCM test case 4, McGrew & Viega, "The Galois/Counter Mode of Operation"
//

const H: [u8; BLOCK_SIZE] = hex!("b83b533708bf535d0aa6e52980d53b78");
const C: [u8; 64] = hex!(
    "42831ec2217774244b7221b784d0d49c"
    "e3aa212f2c02a4e035c17e2329aca12e"
    "21d514b25466931c7d8f6a5aac84aa05"
    "1ba30b396a0aac973d58e091473f5985"
);
const LEN: [u8; BLOCK_SIZE] = hex!("00000000000000000000000000000200");

/// GHASH(H, {}, C)
const GHASH_RESULT: [u8; BLOCK_SIZE] = hex!("7f1b32b81b820d02614f8895ac1d4eac");

#[test]
fn ghash_test_vector() {
    let mut ghash = GHash::new(&H.into());
    ghash.update_padded(&C);
    ghash.update(&[LEN.into()]);

    let result = ghash.finalize();
    assert_eq!(&GHASH_RESULT[..], result.as_slice());
}

#[test]
fn every_multiplier_matches() {
    for m in Multiplier::ALL {
        let mut ghash = GHash::new_with_multiplier(&H.into(), m);
        assert_eq!(ghash.multiplier(), m);
        ghash.update_padded(&C);
        ghash.update(&[LEN.into()]);
        assert_eq!(&GHASH_RESULT[..], ghash.finalize().as_slice(), "{m:?}");
    }
}

#[test]
fn default_is_karatsuba_shift() {
    let m = Multiplier::default();
    assert_eq!(m.multiply, Multiply::Karatsuba);
    assert_eq!(m.reduction, Reduction::Shift);
    assert_eq!(m.lanes, LaneWidth::default());
}

#[test]
fn verify_tag() {
    let mut ghash = GHash::new(&H.into());
    ghash.update_padded(&C);
    ghash.update(&[LEN.into()]);
    assert!(ghash.clone().verify(&GHASH_RESULT.into()).is_ok());

    let mut bad = GHASH_RESULT;
    bad[0] ^= 1;
    assert!(ghash.verify(&bad.into()).is_err());
}
