//! Property-based tests.

#![cfg(any(unix, windows))]

use proptest::prelude::*;
use zkemu::{Lane, rv32, rv64};

fn clmul_reference(a: u64, b: u64) -> u128 {
    let mut x = 0u128;
    for i in 0..64 {
        if (b >> i) & 1 != 0 {
            x ^= u128::from(a) << i;
        }
    }
    x
}

proptest! {
    #[test]
    fn grev_is_an_involution(x in any::<u64>(), ctrl in any::<u32>()) {
        prop_assert_eq!(x.grev(ctrl).grev(ctrl), x);
        let y = x as u32;
        prop_assert_eq!(y.grev(ctrl).grev(ctrl), y);
    }

    #[test]
    fn brev8_is_per_byte(x in any::<u64>()) {
        let lo = rv32::brev8(x as u32);
        let hi = rv32::brev8((x >> 32) as u32);
        prop_assert_eq!(rv64::brev8(x), u64::from(lo) | (u64::from(hi) << 32));
        prop_assert_eq!(rv64::rev8(x), x.swap_bytes());
    }

    #[test]
    fn clmul_is_linear(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
        prop_assert_eq!(rv64::clmul(a ^ b, c), rv64::clmul(a, c) ^ rv64::clmul(b, c));
        prop_assert_eq!(rv64::clmulh(a ^ b, c), rv64::clmulh(a, c) ^ rv64::clmulh(b, c));
        let (a, b, c) = (a as u32, b as u32, c as u32);
        prop_assert_eq!(rv32::clmul(a ^ b, c), rv32::clmul(a, c) ^ rv32::clmul(b, c));
    }

    #[test]
    fn clmul_halves_form_full_product(a in any::<u64>(), b in any::<u64>()) {
        let full = clmul_reference(a, b);
        prop_assert_eq!(rv64::clmul(a, b), full as u64);
        prop_assert_eq!(rv64::clmulh(a, b), (full >> 64) as u64);

        let (a, b) = (a as u32, b as u32);
        let full = clmul_reference(u64::from(a), u64::from(b));
        prop_assert_eq!(rv32::clmul(a, b), full as u32);
        prop_assert_eq!(rv32::clmulh(a, b), (full >> 32) as u32);
    }

    #[test]
    fn clmul_commutes(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(rv32::clmul(a, b), rv32::clmul(b, a));
        prop_assert_eq!(rv32::clmulh(a, b), rv32::clmulh(b, a));
    }

    #[test]
    fn unshfl_inverts_shfl(x in any::<u32>(), ctrl in 0u32..16) {
        prop_assert_eq!(rv32::unshfl(rv32::shfl(x, ctrl), ctrl), x);
        prop_assert_eq!(rv32::unzip(rv32::zip(x)), x);
    }

    #[test]
    fn zip_interleaves_halves(x in any::<u32>()) {
        let z = rv32::zip(x);
        for i in 0..16 {
            prop_assert_eq!((z >> (2 * i)) & 1, (x >> i) & 1);
            prop_assert_eq!((z >> (2 * i + 1)) & 1, (x >> (16 + i)) & 1);
        }
    }

    #[test]
    fn xperm8_with_identity_index(table in any::<u64>()) {
        prop_assert_eq!(rv64::xperm8(table, 0x0706_0504_0302_0100), table);
        prop_assert_eq!(rv32::xperm4(table as u32, 0x7654_3210), table as u32);
    }

    #[test]
    fn rotates_agree_with_core(x in any::<u32>(), n in any::<u32>()) {
        prop_assert_eq!(rv32::rol(x, n), x.rotate_left(n % 32));
        prop_assert_eq!(rv32::ror(rv32::rol(x, n), n), x);
    }
}
