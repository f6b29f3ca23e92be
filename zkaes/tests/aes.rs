//! FIPS-197 Appendix C and SP 800-38A F.1 ECB known answers, through every engine.

use hex_literal::hex;
use zkaes::{Aes, AesEnc, AesKey, Block, Engine, expand_reference};

struct Vector<K> {
    key: K,
    pt: Block,
    ct: Block,
}

const AES128: &[Vector<[u8; 16]>] = &[
    Vector {
        key: hex!("000102030405060708090a0b0c0d0e0f"),
        pt: hex!("00112233445566778899aabbccddeeff"),
        ct: hex!("69c4e0d86a7b0430d8cdb78070b4c55a"),
    },
    Vector {
        key: hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        pt: hex!("6bc1bee22e409f96e93d7e117393172a"),
        ct: hex!("3ad77bb40d7a3660a89ecaf32466ef97"),
    },
];

const AES192: &[Vector<[u8; 24]>] = &[
    Vector {
        key: hex!("000102030405060708090a0b0c0d0e0f1011121314151617"),
        pt: hex!("00112233445566778899aabbccddeeff"),
        ct: hex!("dda97ca4864cdfe06eaf70a0ec0d7191"),
    },
    Vector {
        key: hex!("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b"),
        pt: hex!("6bc1bee22e409f96e93d7e117393172a"),
        ct: hex!("bd334f1d6e45f25ff712a214571fa5cc"),
    },
];

const AES256: &[Vector<[u8; 32]>] = &[
    Vector {
        key: hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"),
        pt: hex!("00112233445566778899aabbccddeeff"),
        ct: hex!("8ea2b7ca516745bfeafc49904b496089"),
    },
    Vector {
        key: hex!("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4"),
        pt: hex!("6bc1bee22e409f96e93d7e117393172a"),
        ct: hex!("f3eed1bdb5d2a03c064b5a7e3db181f8"),
    },
];

fn check<K: AesKey>(vectors: &[Vector<K>]) {
    for (i, v) in vectors.iter().enumerate() {
        for engine in Engine::ALL {
            let aes = Aes::with_engine(&v.key, engine);
            assert_eq!(aes.encrypt_block(&v.pt), v.ct, "vector {i}, {engine:?}");
            assert_eq!(aes.decrypt_block(&v.ct), v.pt, "vector {i}, {engine:?}");

            let enc = AesEnc::with_engine(&v.key, engine);
            assert_eq!(enc.encrypt_block(&v.pt), v.ct, "vector {i}, {engine:?}");
            assert_eq!(AesEnc::from(aes).encrypt_block(&v.pt), v.ct, "vector {i}, {engine:?}");
        }
    }
}

#[test]
fn aes128_known_answers() {
    check(AES128);
}

#[test]
fn aes192_known_answers() {
    check(AES192);
}

#[test]
fn aes256_known_answers() {
    check(AES256);
}

#[test]
fn stored_schedules_match_reference() {
    for engine in [Engine::Rv32, Engine::Rv64] {
        assert_eq!(engine.encrypt_key(&AES128[1].key), expand_reference(&AES128[1].key));
        assert_eq!(engine.encrypt_key(&AES192[1].key), expand_reference(&AES192[1].key));
        assert_eq!(engine.encrypt_key(&AES256[1].key), expand_reference(&AES256[1].key));
    }
}

#[test]
fn schedule_lengths() {
    let rk = expand_reference(&AES192[0].key);
    assert_eq!(rk.rounds(), 12);
    assert_eq!(rk.words().len(), 52);

    let rk = Engine::Rv64OnTheFly.encrypt_key(&AES256[0].key);
    assert_eq!(rk.rounds(), 14);
    assert_eq!(rk.words().len(), 8);
}
