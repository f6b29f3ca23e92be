//! PRESENT known-answer tests (CHES 2007 for PRESENT-80, Poschmann 2009 for PRESENT-128).

use hex_literal::hex;
use zkblock::present::{
    Present, PresentImpl, ROUNDS, present80_key, present80_key_table, present128_key,
};

const PRESENT80: &[([u8; 10], [u8; 8], [u8; 8])] = &[
    ([0x00; 10], [0x00; 8], hex!("5579c1387b228445")),
    ([0xff; 10], [0x00; 8], hex!("e72c46c0f5945049")),
    ([0x00; 10], [0xff; 8], hex!("a112ffc72f68417b")),
    ([0xff; 10], [0xff; 8], hex!("3333dcd3213210d2")),
];

const PRESENT128: &[([u8; 16], [u8; 8], [u8; 8])] = &[
    ([0x00; 16], [0x00; 8], hex!("96db702a2e6900af")),
    ([0xff; 16], [0x00; 8], hex!("13238c710272a5d8")),
    ([0x00; 16], [0xff; 8], hex!("3c6019e5e5edd563")),
    ([0xff; 16], [0xff; 8], hex!("628d9fbd4218e5b4")),
];

#[test]
fn present80_all_round_functions() {
    for imp in PresentImpl::ALL {
        for (key, pt, ct) in PRESENT80 {
            let cipher = Present::new80(key).with_impl(imp);
            assert_eq!(&cipher.encrypt_block(pt), ct, "{imp:?} encrypt");
            assert_eq!(&cipher.decrypt_block(ct), pt, "{imp:?} decrypt");
        }
    }
}

#[test]
fn present128_all_round_functions() {
    for imp in PresentImpl::ALL {
        for (key, pt, ct) in PRESENT128 {
            let cipher = Present::new128(key).with_impl(imp);
            assert_eq!(&cipher.encrypt_block(pt), ct, "{imp:?} encrypt");
            assert_eq!(&cipher.decrypt_block(ct), pt, "{imp:?} decrypt");
        }
    }
}

#[test]
fn present80_key_schedules_agree() {
    for (key, _, _) in PRESENT80 {
        assert_eq!(present80_key(key), present80_key_table(key));
    }
    let key = hex!("0f1e2d3c4b5a69788796");
    assert_eq!(present80_key(&key), present80_key_table(&key));
}

#[test]
fn first_round_key_is_the_key_prefix() {
    let key = hex!("0f1e2d3c4b5a69788796a5b4c3d2e1f0");
    assert_eq!(present128_key(&key)[0], 0x0f1e_2d3c_4b5a_6978);
    assert_eq!(present80_key(&key[..10].try_into().unwrap())[0], 0x0f1e_2d3c_4b5a_6978);
    assert_eq!(present128_key(&key).len(), ROUNDS + 1);
}

#[test]
fn default_follows_lane_width() {
    let imp = Present::new80(&[0; 10]).imp();
    assert_ne!(imp, PresentImpl::Reference);
    assert_eq!(imp, PresentImpl::default());
}
