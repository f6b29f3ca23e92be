//! Property-based tests.

#![cfg(any(unix, windows))]

use proptest::prelude::*;
use zkaes::{Aes, Aes128Gcm, AesEnc, Engine, Error, zkghash::Multiplier};

fn engine() -> impl Strategy<Value = Engine> {
    prop::sample::select(Engine::ALL.to_vec())
}

proptest! {
    #[test]
    fn aes128_round_trip(key in any::<[u8; 16]>(), pt in any::<[u8; 16]>(), engine in engine()) {
        let aes = Aes::with_engine(&key, engine);
        prop_assert_eq!(aes.decrypt_block(&aes.encrypt_block(&pt)), pt);
    }

    #[test]
    fn aes192_round_trip(key in any::<[u8; 24]>(), pt in any::<[u8; 16]>(), engine in engine()) {
        let aes = Aes::with_engine(&key, engine);
        prop_assert_eq!(aes.decrypt_block(&aes.encrypt_block(&pt)), pt);
    }

    #[test]
    fn aes256_round_trip(key in any::<[u8; 32]>(), pt in any::<[u8; 16]>(), engine in engine()) {
        let aes = Aes::with_engine(&key, engine);
        prop_assert_eq!(aes.decrypt_block(&aes.encrypt_block(&pt)), pt);
    }

    #[test]
    fn engines_agree(key in any::<[u8; 32]>(), pt in any::<[u8; 16]>()) {
        let expected = Aes::with_engine(&key, Engine::Rv32).encrypt_block(&pt);
        for engine in [Engine::Rv64, Engine::Rv64OnTheFly] {
            prop_assert_eq!(Aes::with_engine(&key, engine).encrypt_block(&pt), expected);
        }
    }

    #[test]
    fn gcm_round_trip(
        key in any::<[u8; 16]>(),
        nonce in any::<[u8; 12]>(),
        pt in prop::collection::vec(any::<u8>(), 0..80),
    ) {
        let gcm = Aes128Gcm::new(AesEnc::new(&key));
        let mut sealed = vec![0u8; pt.len() + 16];
        gcm.encrypt(&nonce, &pt, &mut sealed).unwrap();
        let mut opened = vec![0u8; pt.len()];
        prop_assert_eq!(gcm.decrypt(&nonce, &sealed, &mut opened), Ok(pt.len()));
        prop_assert_eq!(opened, pt);
    }

    #[test]
    fn gcm_detects_any_bit_flip(
        key in any::<[u8; 16]>(),
        pt in prop::collection::vec(any::<u8>(), 0..48),
        bit in any::<prop::sample::Index>(),
    ) {
        let gcm = Aes128Gcm::new(AesEnc::new(&key));
        let mut sealed = vec![0u8; pt.len() + 16];
        gcm.encrypt(&[0; 12], &pt, &mut sealed).unwrap();

        let bit = bit.index(sealed.len() * 8);
        sealed[bit / 8] ^= 1 << (bit % 8);
        let mut out = vec![0u8; pt.len()];
        prop_assert_eq!(gcm.decrypt(&[0; 12], &sealed, &mut out), Err(Error::VerificationFailed));
    }

    #[test]
    fn multipliers_agree(key in any::<[u8; 16]>(), pt in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut expected = vec![0u8; pt.len() + 16];
        Aes128Gcm::new(AesEnc::new(&key)).encrypt(&[5; 12], &pt, &mut expected).unwrap();
        for m in Multiplier::ALL {
            let mut sealed = vec![0u8; pt.len() + 16];
            Aes128Gcm::with_multiplier(AesEnc::new(&key), m).encrypt(&[5; 12], &pt, &mut sealed).unwrap();
            prop_assert_eq!(&sealed, &expected);
        }
    }
}
