//! SHA-384 and SHA-512 (FIPS 180-4).
//!
//! Two compression functions are provided. [`compress_rv64`] uses the native 64-bit
//! `sha512sig*`/`sha512sum*` instructions. [`compress_rv32`] keeps every word as a pair of
//! 32-bit halves, uses the split RV32 instructions and propagates carries by hand.

use crate::buffer::BlockBuffer;
use zkemu::{
    LaneWidth,
    rv32::{
        sha512sig0h, sha512sig0l, sha512sig1h, sha512sig1l, sha512sum0r, sha512sum1r,
    },
    rv64::{andn, sha512sig0, sha512sig1, sha512sum0, sha512sum1},
};

/// SHA-512 block size in bytes.
pub const BLOCK_SIZE: usize = 128;

/// Round constants.
#[rustfmt::skip]
const K: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd,
    0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019,
    0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe,
    0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1,
    0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3,
    0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483,
    0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210,
    0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725,
    0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926,
    0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8,
    0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001,
    0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910,
    0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53,
    0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb,
    0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60,
    0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9,
    0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207,
    0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6,
    0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493,
    0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a,
    0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

const H384: [u64; 8] = [
    0xcbbb9d5dc1059ed8, 0x629a292a367cd507, 0x9159015a3070dd17, 0x152fecd8f70e5939,
    0x67332667ffc00b31, 0x8eb44a8768581511, 0xdb0c2e0d64f98fa7, 0x47b5481dbefa4fa4,
];

const H512: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

/// SHA-512 compression on 64-bit lanes.
pub fn compress_rv64(state: &mut [u64; 8], block: &[u8; BLOCK_SIZE]) {
    let mut w = [0u64; 80];
    for (w, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *w = u64::from_be_bytes(bytes);
    }
    for i in 16..80 {
        w[i] = sha512sig1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(sha512sig0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for i in 0..80 {
        let ch = (e & f) ^ andn(g, e);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let t1 = h
            .wrapping_add(sha512sum1(e))
            .wrapping_add(ch)
            .wrapping_add(K[i])
            .wrapping_add(w[i]);
        let t2 = sha512sum0(a).wrapping_add(maj);
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(v);
    }
}

/// A 64-bit word held in two 32-bit registers.
#[derive(Clone, Copy, Default)]
struct Split {
    lo: u32,
    hi: u32,
}

impl Split {
    #[inline]
    fn new(x: u64) -> Self {
        Self {
            lo: x as u32,
            hi: (x >> 32) as u32,
        }
    }

    #[inline]
    fn get(self) -> u64 {
        u64::from(self.lo) | (u64::from(self.hi) << 32)
    }

    /// Addition modulo 2^64: the carry out of the low word is recovered with an unsigned
    /// compare (`sltu`).
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let lo = self.lo.wrapping_add(rhs.lo);
        let carry = u32::from(lo < self.lo);
        Self {
            lo,
            hi: self.hi.wrapping_add(rhs.hi).wrapping_add(carry),
        }
    }

    #[inline]
    fn sig0(self) -> Self {
        Self {
            lo: sha512sig0l(self.lo, self.hi),
            hi: sha512sig0h(self.hi, self.lo),
        }
    }

    #[inline]
    fn sig1(self) -> Self {
        Self {
            lo: sha512sig1l(self.lo, self.hi),
            hi: sha512sig1h(self.hi, self.lo),
        }
    }

    #[inline]
    fn sum0(self) -> Self {
        Self {
            lo: sha512sum0r(self.lo, self.hi),
            hi: sha512sum0r(self.hi, self.lo),
        }
    }

    #[inline]
    fn sum1(self) -> Self {
        Self {
            lo: sha512sum1r(self.lo, self.hi),
            hi: sha512sum1r(self.hi, self.lo),
        }
    }

    #[inline]
    fn ch(e: Self, f: Self, g: Self) -> Self {
        Self {
            lo: (e.lo & f.lo) ^ zkemu::rv32::andn(g.lo, e.lo),
            hi: (e.hi & f.hi) ^ zkemu::rv32::andn(g.hi, e.hi),
        }
    }

    #[inline]
    fn maj(a: Self, b: Self, c: Self) -> Self {
        Self {
            lo: (a.lo & b.lo) ^ (a.lo & c.lo) ^ (b.lo & c.lo),
            hi: (a.hi & b.hi) ^ (a.hi & c.hi) ^ (b.hi & c.hi),
        }
    }
}

/// SHA-512 compression on 32-bit lanes.
pub fn compress_rv32(state: &mut [u64; 8], block: &[u8; BLOCK_SIZE]) {
    let mut w = [Split::default(); 80];
    for (w, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        *w = Split {
            hi: u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]),
            lo: u32::from_be_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]),
        };
    }
    for i in 16..80 {
        w[i] = w[i - 2]
            .sig1()
            .add(w[i - 7])
            .add(w[i - 15].sig0())
            .add(w[i - 16]);
    }

    let mut v = state.map(Split::new);
    for i in 0..80 {
        let [a, b, c, d, e, f, g, h] = v;
        let t1 = h
            .add(e.sum1())
            .add(Split::ch(e, f, g))
            .add(Split::new(K[i]))
            .add(w[i]);
        let t2 = a.sum0().add(Split::maj(a, b, c));
        v = [t1.add(t2), a, b, c, d.add(t1), e, f, g];
    }

    for (s, x) in state.iter_mut().zip(v) {
        *s = Split::new(*s).add(x).get();
    }
}

/// SHA-512 compression function variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Sha512Impl {
    /// [`compress_rv32`].
    Rv32,
    /// [`compress_rv64`].
    Rv64,
}

impl Sha512Impl {
    /// Every variant.
    pub const ALL: [Sha512Impl; 2] = [Sha512Impl::Rv32, Sha512Impl::Rv64];

    /// Run the selected compression function.
    #[inline]
    pub fn compress(self, state: &mut [u64; 8], block: &[u8; BLOCK_SIZE]) {
        match self {
            Sha512Impl::Rv32 => compress_rv32(state, block),
            Sha512Impl::Rv64 => compress_rv64(state, block),
        }
    }
}

impl Default for Sha512Impl {
    fn default() -> Self {
        match LaneWidth::default() {
            LaneWidth::W32 => Sha512Impl::Rv32,
            LaneWidth::W64 => Sha512Impl::Rv64,
        }
    }
}

/// Incremental SHA-512 family hash with an `OUT` byte digest.
///
/// Use the [`Sha384`] and [`Sha512`] aliases.
#[derive(Clone)]
pub struct Sha512Core<const OUT: usize> {
    state: [u64; 8],
    buffer: BlockBuffer<BLOCK_SIZE>,
    len: u128,
    imp: Sha512Impl,
}

/// SHA-384.
pub type Sha384 = Sha512Core<48>;

/// SHA-512.
pub type Sha512 = Sha512Core<64>;

impl<const OUT: usize> Sha512Core<OUT> {
    const IV: [u64; 8] = {
        assert!(OUT == 48 || OUT == 64, "SHA-512 family digests are 48 or 64 bytes");
        if OUT == 48 { H384 } else { H512 }
    };

    /// Fresh hash state using the default compression function.
    #[must_use]
    pub fn new() -> Self {
        Self::with_impl(Sha512Impl::default())
    }

    /// Fresh hash state using the given compression function.
    #[must_use]
    pub fn with_impl(imp: Sha512Impl) -> Self {
        Self {
            state: Self::IV,
            buffer: BlockBuffer::new(),
            len: 0,
            imp,
        }
    }

    /// Absorb `data`.
    pub fn update(&mut self, data: &[u8]) {
        self.len = self.len.wrapping_add(data.len() as u128);
        let (state, imp) = (&mut self.state, self.imp);
        self.buffer.update(data, |block| imp.compress(state, block));
    }

    /// Pad and return the digest.
    #[must_use]
    pub fn finalize(mut self) -> [u8; OUT] {
        let bits = self.len.wrapping_mul(8).to_be_bytes();
        let (state, imp) = (&mut self.state, self.imp);
        self.buffer.pad(&bits, |block| imp.compress(state, block));

        let mut full = [0u8; 64];
        for (chunk, s) in full.chunks_exact_mut(8).zip(self.state) {
            chunk.copy_from_slice(&s.to_be_bytes());
        }
        let mut out = [0u8; OUT];
        out.copy_from_slice(&full[..OUT]);
        out
    }
}

impl<const OUT: usize> Default for Sha512Core<OUT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const OUT: usize> core::fmt::Debug for Sha512Core<OUT> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sha512Core")
            .field("imp", &self.imp)
            .finish_non_exhaustive()
    }
}

/// SHA-384 of `msg`.
#[must_use]
pub fn sha384(msg: &[u8]) -> [u8; 48] {
    let mut h = Sha384::new();
    h.update(msg);
    h.finalize()
}

/// SHA-512 of `msg`.
#[must_use]
pub fn sha512(msg: &[u8]) -> [u8; 64] {
    let mut h = Sha512::new();
    h.update(msg);
    h.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const ABC_512: [u8; 64] = hex!(
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
        "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );

    #[test]
    fn abc_both_compressions() {
        for imp in Sha512Impl::ALL {
            let mut h = Sha512::with_impl(imp);
            h.update(b"abc");
            assert_eq!(h.finalize(), ABC_512, "{imp:?}");
        }
    }

    #[test]
    fn abc_384() {
        assert_eq!(
            sha384(b"abc"),
            hex!(
                "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed"
                "8086072ba1e7cc2358baeca134c825a7"
            )
        );
    }

    #[test]
    fn split_add_carries() {
        let x = Split::new(0x0000_0001_ffff_ffff);
        let y = Split::new(0x0000_0000_0000_0001);
        assert_eq!(x.add(y).get(), 0x0000_0002_0000_0000);
        assert_eq!(Split::new(u64::MAX).add(y).get(), 0);
    }

    #[test]
    fn compressions_agree_on_one_block() {
        let block = [0xa5u8; BLOCK_SIZE];
        let mut s32 = H512;
        let mut s64 = H512;
        compress_rv32(&mut s32, &block);
        compress_rv64(&mut s64, &block);
        assert_eq!(s32, s64);
    }
}
