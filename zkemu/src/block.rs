//! 128-bit block with byte, 32-bit lane and 64-bit lane views.

use core::{
    fmt::{self, Debug},
    ops::{BitXor, BitXorAssign},
};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Size of a block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// A 16-byte block which can be read and written as bytes, as four `u32` lanes or as two `u64`
/// lanes.
///
/// # Representation
///
/// The backing store is always the byte array. Lane views are little-endian: lane `i` of the
/// `u32` view is `bytes[4 * i..4 * i + 4]` and lane `i` of the `u64` view is
/// `bytes[8 * i..8 * i + 8]`, which is what a little-endian RISC-V hart sees after `lw`/`ld`.
/// Big-endian access (counter blocks, length blocks) goes through the `_be` accessors.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
#[repr(C, align(16))]
pub struct Block128([u8; BLOCK_SIZE]);

impl Block128 {
    /// Block with every bit clear.
    pub const ZERO: Self = Self([0; BLOCK_SIZE]);

    /// Wrap a byte array.
    #[inline]
    pub const fn new(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    /// Borrow the byte view.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    /// Mutably borrow the byte view.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8; BLOCK_SIZE] {
        &mut self.0
    }

    /// Copy out the byte view.
    #[inline]
    pub const fn to_bytes(self) -> [u8; BLOCK_SIZE] {
        self.0
    }

    /// Build a block from a short slice, zero-padding the tail.
    ///
    /// At most [`BLOCK_SIZE`] bytes of `bytes` are used.
    #[inline]
    pub fn from_partial(bytes: &[u8]) -> Self {
        let mut block = Self::ZERO;
        let n = bytes.len().min(BLOCK_SIZE);
        block.0[..n].copy_from_slice(&bytes[..n]);
        block
    }

    /// Little-endian `u32` lane view.
    #[inline]
    pub fn to_u32x4(self) -> [u32; 4] {
        let mut lanes = [0u32; 4];
        for (lane, chunk) in lanes.iter_mut().zip(self.0.chunks_exact(4)) {
            *lane = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        lanes
    }

    /// Build a block from little-endian `u32` lanes.
    #[inline]
    pub fn from_u32x4(lanes: [u32; 4]) -> Self {
        let mut block = Self::ZERO;
        for (chunk, lane) in block.0.chunks_exact_mut(4).zip(lanes) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        block
    }

    /// Little-endian `u64` lane view.
    #[inline]
    pub fn to_u64x2(self) -> [u64; 2] {
        let (lo, hi) = self.0.split_at(8);
        let mut l = [0u8; 8];
        let mut h = [0u8; 8];
        l.copy_from_slice(lo);
        h.copy_from_slice(hi);
        [u64::from_le_bytes(l), u64::from_le_bytes(h)]
    }

    /// Build a block from little-endian `u64` lanes.
    #[inline]
    pub fn from_u64x2(lanes: [u64; 2]) -> Self {
        let mut block = Self::ZERO;
        let (lo, hi) = block.0.split_at_mut(8);
        lo.copy_from_slice(&lanes[0].to_le_bytes());
        hi.copy_from_slice(&lanes[1].to_le_bytes());
        block
    }

    /// Read bytes `4 * i..4 * i + 4` as a big-endian word.
    ///
    /// # Panics
    /// If `i >= 4`.
    #[inline]
    pub fn be_u32(&self, i: usize) -> u32 {
        let b = &self.0[4 * i..4 * i + 4];
        u32::from_be_bytes([b[0], b[1], b[2], b[3]])
    }

    /// Write bytes `4 * i..4 * i + 4` as a big-endian word.
    ///
    /// # Panics
    /// If `i >= 4`.
    #[inline]
    pub fn set_be_u32(&mut self, i: usize, word: u32) {
        self.0[4 * i..4 * i + 4].copy_from_slice(&word.to_be_bytes());
    }
}

impl Debug for Block128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block128(")?;
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl From<[u8; BLOCK_SIZE]> for Block128 {
    #[inline]
    fn from(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Block128> for [u8; BLOCK_SIZE] {
    #[inline]
    fn from(block: Block128) -> Self {
        block.0
    }
}

impl AsRef<[u8]> for Block128 {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl BitXor for Block128 {
    type Output = Self;

    #[inline]
    fn bitxor(mut self, rhs: Self) -> Self {
        self ^= rhs;
        self
    }
}

impl BitXorAssign for Block128 {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a ^= b;
        }
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Block128 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
