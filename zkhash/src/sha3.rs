//! SHA-3 and SHAKE (FIPS 202).
//!
//! Keccak-p\[1600, 24\] has two implementations. [`keccak_p_rv64`] works on 64-bit lanes.
//! [`keccak_p_rv32`] works on a bit-interleaved state: every lane is held as its even bits and
//! its odd bits in two 32-bit words, so each 64-bit rotation becomes two 32-bit rotations.

use zkemu::{LaneWidth, rv32, rv64};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Round constants.
#[rustfmt::skip]
const RC: [u64; 24] = [
    0x0000000000000001, 0x0000000000008082,
    0x800000000000808a, 0x8000000080008000,
    0x000000000000808b, 0x0000000080000001,
    0x8000000080008081, 0x8000000000008009,
    0x000000000000008a, 0x0000000000000088,
    0x0000000080008009, 0x000000008000000a,
    0x000000008000808b, 0x800000000000008b,
    0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080,
    0x000000000000800a, 0x800000008000000a,
    0x8000000080008081, 0x8000000000008080,
    0x0000000080000001, 0x8000000080008008,
];

/// Round constants as (even, odd) bit-interleaved words.
#[rustfmt::skip]
const RC_INTERLEAVED: [[u32; 2]; 24] = [
    [0x00000001, 0x00000000],
    [0x00000000, 0x00000089],
    [0x00000000, 0x8000008b],
    [0x00000000, 0x80008080],
    [0x00000001, 0x0000008b],
    [0x00000001, 0x00008000],
    [0x00000001, 0x80008088],
    [0x00000001, 0x80000082],
    [0x00000000, 0x0000000b],
    [0x00000000, 0x0000000a],
    [0x00000001, 0x00008082],
    [0x00000000, 0x00008003],
    [0x00000001, 0x0000808b],
    [0x00000001, 0x8000000b],
    [0x00000001, 0x8000008a],
    [0x00000001, 0x80000081],
    [0x00000000, 0x80000081],
    [0x00000000, 0x80000008],
    [0x00000000, 0x00000083],
    [0x00000000, 0x80008003],
    [0x00000001, 0x80008088],
    [0x00000000, 0x80000088],
    [0x00000001, 0x00008000],
    [0x00000000, 0x80008082],
];

/// Rotation offsets, indexed by `x + 5 * y`.
const RHO: [u32; 25] = [
    0, 1, 62, 28, 27, 36, 44, 6, 55, 20, 3, 10, 43, 25, 39, 41, 45, 15, 21, 8, 18, 2, 61, 56, 14,
];

/// Destination of lane `x + 5 * y` under the pi step: `y + 5 * ((2 * x + 3 * y) % 5)`.
const PI: [usize; 25] = {
    let mut pi = [0; 25];
    let mut i = 0;
    while i < 25 {
        let (x, y) = (i % 5, i / 5);
        pi[i] = y + 5 * ((2 * x + 3 * y) % 5);
        i += 1;
    }
    pi
};

/// Keccak-p\[1600, 24\] on 64-bit lanes.
pub fn keccak_p_rv64(a: &mut [u64; 25]) {
    for rc in RC {
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ rv64::rol(c[(x + 1) % 5], 1);
            for y in (0..25).step_by(5) {
                a[y + x] ^= d;
            }
        }

        let mut b = [0u64; 25];
        for i in 0..25 {
            b[PI[i]] = rv64::rol(a[i], u64::from(RHO[i]));
        }

        for y in (0..25).step_by(5) {
            for x in 0..5 {
                a[y + x] = b[y + x] ^ rv64::andn(b[y + (x + 2) % 5], b[y + (x + 1) % 5]);
            }
        }

        a[0] ^= rc;
    }
}

/// A lane as its even and odd bits.
#[derive(Clone, Copy, Default)]
struct Interleaved {
    even: u32,
    odd: u32,
}

impl Interleaved {
    /// Separate even and odd bits with `unzip` on both halves.
    #[inline]
    fn split(lane: u64) -> Self {
        let t0 = rv32::unzip(lane as u32);
        let t1 = rv32::unzip((lane >> 32) as u32);
        Self {
            even: (t0 & 0x0000_ffff) | (t1 << 16),
            odd: (t0 >> 16) | (t1 & 0xffff_0000),
        }
    }

    /// Inverse of [`Interleaved::split`] with `zip`.
    #[inline]
    fn join(self) -> u64 {
        let t0 = (self.even & 0x0000_ffff) | (self.odd << 16);
        let t1 = (self.even >> 16) | (self.odd & 0xffff_0000);
        u64::from(rv32::zip(t0)) | (u64::from(rv32::zip(t1)) << 32)
    }

    /// 64-bit rotate left by `r`.
    #[inline]
    fn rol(self, r: u32) -> Self {
        if r % 2 == 0 {
            Self {
                even: rv32::rol(self.even, r / 2),
                odd: rv32::rol(self.odd, r / 2),
            }
        } else {
            // odd bits move to even positions and vice versa
            Self {
                even: rv32::rol(self.odd, r.div_ceil(2)),
                odd: rv32::rol(self.even, r / 2),
            }
        }
    }

    #[inline]
    fn xor(self, rhs: Self) -> Self {
        Self {
            even: self.even ^ rhs.even,
            odd: self.odd ^ rhs.odd,
        }
    }

    #[inline]
    fn andn(self, rhs: Self) -> Self {
        Self {
            even: rv32::andn(self.even, rhs.even),
            odd: rv32::andn(self.odd, rhs.odd),
        }
    }
}

/// Keccak-p\[1600, 24\] on 32-bit lanes with a bit-interleaved state.
///
/// The state is converted on entry and exit, so the contract is the same as
/// [`keccak_p_rv64`].
pub fn keccak_p_rv32(state: &mut [u64; 25]) {
    let mut a = state.map(Interleaved::split);

    for [even, odd] in RC_INTERLEAVED {
        let mut c = [Interleaved::default(); 5];
        for x in 0..5 {
            c[x] = a[x].xor(a[x + 5]).xor(a[x + 10]).xor(a[x + 15]).xor(a[x + 20]);
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5].xor(c[(x + 1) % 5].rol(1));
            for y in (0..25).step_by(5) {
                a[y + x] = a[y + x].xor(d);
            }
        }

        let mut b = [Interleaved::default(); 25];
        for i in 0..25 {
            b[PI[i]] = a[i].rol(RHO[i]);
        }

        for y in (0..25).step_by(5) {
            for x in 0..5 {
                a[y + x] = b[y + x].xor(b[y + (x + 2) % 5].andn(b[y + (x + 1) % 5]));
            }
        }

        a[0] = a[0].xor(Interleaved { even, odd });
    }

    *state = a.map(Interleaved::join);
}

/// Keccak permutation variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum KeccakImpl {
    /// [`keccak_p_rv32`].
    Rv32,
    /// [`keccak_p_rv64`].
    Rv64,
}

impl KeccakImpl {
    /// Every variant.
    pub const ALL: [KeccakImpl; 2] = [KeccakImpl::Rv32, KeccakImpl::Rv64];

    /// Apply the selected permutation.
    #[inline]
    pub fn permute(self, state: &mut [u64; 25]) {
        match self {
            KeccakImpl::Rv32 => keccak_p_rv32(state),
            KeccakImpl::Rv64 => keccak_p_rv64(state),
        }
    }
}

impl Default for KeccakImpl {
    fn default() -> Self {
        match LaneWidth::default() {
            LaneWidth::W32 => KeccakImpl::Rv32,
            LaneWidth::W64 => KeccakImpl::Rv64,
        }
    }
}

/// Byte-oriented sponge over the little-endian lane bytes.
#[derive(Clone)]
struct Sponge {
    state: [u64; 25],
    rate: usize,
    pos: usize,
    imp: KeccakImpl,
}

impl Sponge {
    fn new(rate: usize, imp: KeccakImpl) -> Self {
        Self {
            state: [0; 25],
            rate,
            pos: 0,
            imp,
        }
    }

    #[inline]
    fn xor_byte(&mut self, i: usize, b: u8) {
        self.state[i / 8] ^= u64::from(b) << (8 * (i % 8));
    }

    #[inline]
    fn byte(&self, i: usize) -> u8 {
        (self.state[i / 8] >> (8 * (i % 8))) as u8
    }

    fn absorb(&mut self, data: &[u8]) {
        for &b in data {
            self.xor_byte(self.pos, b);
            self.pos += 1;
            if self.pos == self.rate {
                self.imp.permute(&mut self.state);
                self.pos = 0;
            }
        }
    }

    /// Domain separation bits `ds` followed by the final `1` bit of pad10*1.
    fn pad(&mut self, ds: u8) {
        self.xor_byte(self.pos, ds);
        self.xor_byte(self.rate - 1, 0x80);
        self.imp.permute(&mut self.state);
        self.pos = 0;
    }

    fn squeeze(&mut self, out: &mut [u8]) {
        for o in out {
            if self.pos == self.rate {
                self.imp.permute(&mut self.state);
                self.pos = 0;
            }
            *o = self.byte(self.pos);
            self.pos += 1;
        }
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Sponge {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

/// Incremental SHA-3 hash with an `OUT` byte digest.
///
/// Use the [`Sha3_224`], [`Sha3_256`], [`Sha3_384`] and [`Sha3_512`] aliases.
#[derive(Clone)]
pub struct Sha3<const OUT: usize> {
    sponge: Sponge,
}

/// SHA3-224.
pub type Sha3_224 = Sha3<28>;

/// SHA3-256.
pub type Sha3_256 = Sha3<32>;

/// SHA3-384.
pub type Sha3_384 = Sha3<48>;

/// SHA3-512.
pub type Sha3_512 = Sha3<64>;

impl<const OUT: usize> Sha3<OUT> {
    const RATE: usize = {
        assert!(
            OUT == 28 || OUT == 32 || OUT == 48 || OUT == 64,
            "SHA-3 digests are 28, 32, 48 or 64 bytes"
        );
        200 - 2 * OUT
    };

    /// Fresh hash state using the default permutation.
    #[must_use]
    pub fn new() -> Self {
        Self::with_impl(KeccakImpl::default())
    }

    /// Fresh hash state using the given permutation.
    #[must_use]
    pub fn with_impl(imp: KeccakImpl) -> Self {
        Self {
            sponge: Sponge::new(Self::RATE, imp),
        }
    }

    /// Absorb `data`.
    pub fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }

    /// Pad and return the digest.
    #[must_use]
    pub fn finalize(mut self) -> [u8; OUT] {
        self.sponge.pad(0x06);
        let mut out = [0u8; OUT];
        self.sponge.squeeze(&mut out);
        out
    }
}

impl<const OUT: usize> Default for Sha3<OUT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const OUT: usize> core::fmt::Debug for Sha3<OUT> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sha3")
            .field("imp", &self.sponge.imp)
            .finish_non_exhaustive()
    }
}

/// SHAKE extendable-output function absorbing input at `RATE` bytes per block.
///
/// Use the [`Shake128`] and [`Shake256`] aliases.
#[derive(Clone)]
pub struct Shake<const RATE: usize> {
    sponge: Sponge,
}

/// SHAKE128.
pub type Shake128 = Shake<168>;

/// SHAKE256.
pub type Shake256 = Shake<136>;

impl<const RATE: usize> Shake<RATE> {
    /// Fresh state using the default permutation.
    #[must_use]
    pub fn new() -> Self {
        Self::with_impl(KeccakImpl::default())
    }

    /// Fresh state using the given permutation.
    #[must_use]
    pub fn with_impl(imp: KeccakImpl) -> Self {
        Self {
            sponge: Sponge::new(RATE, imp),
        }
    }

    /// Absorb `data`.
    pub fn absorb(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }

    /// Pad and switch to output.
    #[must_use]
    pub fn finalize_xof(mut self) -> ShakeReader {
        self.sponge.pad(0x1f);
        ShakeReader {
            sponge: self.sponge,
        }
    }
}

impl<const RATE: usize> Default for Shake<RATE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const RATE: usize> core::fmt::Debug for Shake<RATE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shake")
            .field("rate", &RATE)
            .field("imp", &self.sponge.imp)
            .finish_non_exhaustive()
    }
}

/// Output side of a SHAKE instance.
#[derive(Clone)]
pub struct ShakeReader {
    sponge: Sponge,
}

impl ShakeReader {
    /// Fill `out` with the next output bytes.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        self.sponge.squeeze(out);
    }
}

impl core::fmt::Debug for ShakeReader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ShakeReader").finish_non_exhaustive()
    }
}

macro_rules! sha3_fn {
    ($name:ident, $ty:ty, $len:expr, $doc:expr) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name(msg: &[u8]) -> [u8; $len] {
            let mut h = <$ty>::new();
            h.update(msg);
            h.finalize()
        }
    };
}

sha3_fn!(sha3_224, Sha3_224, 28, "SHA3-224 of `msg`.");
sha3_fn!(sha3_256, Sha3_256, 32, "SHA3-256 of `msg`.");
sha3_fn!(sha3_384, Sha3_384, 48, "SHA3-384 of `msg`.");
sha3_fn!(sha3_512, Sha3_512, 64, "SHA3-512 of `msg`.");
