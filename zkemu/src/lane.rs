//! Lane-width generic definitions of the bit-manipulation instructions.
//!
//! Every instruction in Zbkb/Zbkc/Zbkx has the same definition on RV32 and RV64 apart from the
//! register width. They are written once here against [`Lane`] and instantiated for `u32` and
//! `u64`; the [`rv32`](crate::rv32) and [`rv64`](crate::rv64) modules expose them under their
//! instruction names.

use core::{
    fmt::Debug,
    ops::{BitAnd, BitOr, BitXor, Not},
};

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// A general-purpose register of an RV32 (`u32`) or RV64 (`u64`) hart.
pub trait Lane:
    sealed::Sealed
    + Copy
    + Debug
    + Default
    + Eq
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Register width in bits (`XLEN`).
    const BITS: u32;

    /// Shift left logical; the shift amount is taken modulo `XLEN`.
    fn sll(self, shamt: u32) -> Self;

    /// Shift right logical; the shift amount is taken modulo `XLEN`.
    fn srl(self, shamt: u32) -> Self;

    /// Rotate left; the shift amount is taken modulo `XLEN`.
    fn rol(self, shamt: u32) -> Self;

    /// Rotate right; the shift amount is taken modulo `XLEN`.
    fn ror(self, shamt: u32) -> Self;

    /// Generalized reverse.
    ///
    /// Bit `k` of `ctrl` enables the butterfly stage which swaps adjacent groups of `2^k` bits.
    /// Only the low `log2(XLEN)` bits of `ctrl` are used.
    fn grev(self, ctrl: u32) -> Self;

    /// Carry-less multiply, low half of the `2 * XLEN` bit product.
    fn clmul(self, rhs: Self) -> Self;

    /// Carry-less multiply, high half of the `2 * XLEN` bit product.
    fn clmulh(self, rhs: Self) -> Self;

    /// Crossbar permutation with `2^sz_log2` bit elements.
    ///
    /// `self` is the lookup table, `idx` holds one index per element. Out of range indices
    /// select zero.
    fn xperm(self, idx: Self, sz_log2: u32) -> Self;

    /// Reverse the bits within each byte.
    #[inline]
    fn brev8(self) -> Self {
        self.grev(0b111)
    }

    /// Reverse the byte order.
    #[inline]
    fn rev8(self) -> Self {
        self.grev(Self::BITS - 8)
    }

    /// Nibble crossbar permutation.
    #[inline]
    fn xperm4(self, idx: Self) -> Self {
        self.xperm(idx, 2)
    }

    /// Byte crossbar permutation.
    #[inline]
    fn xperm8(self, idx: Self) -> Self {
        self.xperm(idx, 3)
    }

    /// `self & !rhs`
    #[inline]
    fn andn(self, rhs: Self) -> Self {
        self & !rhs
    }

    /// `self | !rhs`
    #[inline]
    fn orn(self, rhs: Self) -> Self {
        self | !rhs
    }

    /// `!(self ^ rhs)`
    #[inline]
    fn xnor(self, rhs: Self) -> Self {
        !(self ^ rhs)
    }
}

macro_rules! impl_lane {
    ($lane:ty) => {
        impl Lane for $lane {
            const BITS: u32 = <$lane>::BITS;

            #[inline]
            fn sll(self, shamt: u32) -> Self {
                self << (shamt & (Self::BITS - 1))
            }

            #[inline]
            fn srl(self, shamt: u32) -> Self {
                self >> (shamt & (Self::BITS - 1))
            }

            #[inline]
            fn rol(self, shamt: u32) -> Self {
                self.rotate_left(shamt & (Self::BITS - 1))
            }

            #[inline]
            fn ror(self, shamt: u32) -> Self {
                self.rotate_right(shamt & (Self::BITS - 1))
            }

            fn grev(self, ctrl: u32) -> Self {
                let ctrl = ctrl & (Self::BITS - 1);
                let one: $lane = 1;
                let mut x = self;
                let mut shamt = 1;
                while shamt < Self::BITS {
                    if ctrl & shamt != 0 {
                        // 0x55.., 0x33.., 0x0f.., 0x00ff.. and so on
                        let mask = <$lane>::MAX / ((one << shamt) + 1);
                        x = ((x & mask) << shamt) | ((x >> shamt) & mask);
                    }
                    shamt <<= 1;
                }
                x
            }

            fn clmul(self, rhs: Self) -> Self {
                let mut x = 0;
                for i in 0..Self::BITS {
                    if (rhs >> i) & 1 != 0 {
                        x ^= self << i;
                    }
                }
                x
            }

            fn clmulh(self, rhs: Self) -> Self {
                let mut x = 0;
                for i in 1..Self::BITS {
                    if (rhs >> i) & 1 != 0 {
                        x ^= self >> (Self::BITS - i);
                    }
                }
                x
            }

            fn xperm(self, idx: Self, sz_log2: u32) -> Self {
                let sz = 1 << sz_log2;
                let mask: $lane = (1 << sz) - 1;
                let mut r = 0;
                let mut i = 0;
                while i < Self::BITS {
                    let pos = ((idx >> i) & mask) << sz_log2;
                    if pos < <$lane>::from(Self::BITS) {
                        r |= ((self >> pos) & mask) << i;
                    }
                    i += sz;
                }
                r
            }
        }
    };
}

impl_lane!(u32);
impl_lane!(u64);
