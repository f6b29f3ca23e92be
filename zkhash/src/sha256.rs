//! SHA-224 and SHA-256 (FIPS 180-4) with the `sha256sig*`/`sha256sum*` instructions.

use crate::buffer::BlockBuffer;
use zkemu::rv32::{andn, sha256sig0, sha256sig1, sha256sum0, sha256sum1};

/// SHA-256 block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Round constants.
#[rustfmt::skip]
const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5,
    0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3,
    0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc,
    0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7,
    0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
    0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3,
    0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5,
    0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208,
    0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

const H224: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

const H256: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// SHA-256 compression function.
pub fn compress(state: &mut [u32; 8], block: &[u8; BLOCK_SIZE]) {
    let mut w = [0u32; 64];
    for (w, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *w = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for i in 16..64 {
        w[i] = sha256sig1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(sha256sig0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for i in 0..64 {
        let ch = (e & f) ^ andn(g, e);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let t1 = h
            .wrapping_add(sha256sum1(e))
            .wrapping_add(ch)
            .wrapping_add(K[i])
            .wrapping_add(w[i]);
        let t2 = sha256sum0(a).wrapping_add(maj);
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

/// Incremental SHA-256 family hash with an `OUT` byte digest.
///
/// Use the [`Sha224`] and [`Sha256`] aliases.
#[derive(Clone)]
pub struct Sha256Core<const OUT: usize> {
    state: [u32; 8],
    buffer: BlockBuffer<BLOCK_SIZE>,
    len: u64,
}

/// SHA-224.
pub type Sha224 = Sha256Core<28>;

/// SHA-256.
pub type Sha256 = Sha256Core<32>;

impl<const OUT: usize> Sha256Core<OUT> {
    const IV: [u32; 8] = {
        assert!(OUT == 28 || OUT == 32, "SHA-256 family digests are 28 or 32 bytes");
        if OUT == 28 { H224 } else { H256 }
    };

    /// Fresh hash state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Self::IV,
            buffer: BlockBuffer::new(),
            len: 0,
        }
    }

    /// Absorb `data`.
    pub fn update(&mut self, data: &[u8]) {
        self.len = self.len.wrapping_add(data.len() as u64);
        let state = &mut self.state;
        self.buffer.update(data, |block| compress(state, block));
    }

    /// Pad and return the digest.
    #[must_use]
    pub fn finalize(mut self) -> [u8; OUT] {
        let bits = self.len.wrapping_mul(8).to_be_bytes();
        let state = &mut self.state;
        self.buffer.pad(&bits, |block| compress(state, block));

        let mut full = [0u8; 32];
        for (chunk, s) in full.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&s.to_be_bytes());
        }
        let mut out = [0u8; OUT];
        out.copy_from_slice(&full[..OUT]);
        out
    }
}

impl<const OUT: usize> Default for Sha256Core<OUT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const OUT: usize> core::fmt::Debug for Sha256Core<OUT> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Sha256Core<{OUT}> {{ ... }}")
    }
}

/// SHA-224 of `msg`.
#[must_use]
pub fn sha224(msg: &[u8]) -> [u8; 28] {
    let mut h = Sha224::new();
    h.update(msg);
    h.finalize()
}

/// SHA-256 of `msg`.
#[must_use]
pub fn sha256(msg: &[u8]) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update(msg);
    h.finalize()
}
