//! SM3 (GB/T 32905-2016) with the `sm3p0`/`sm3p1` instructions.

use crate::buffer::BlockBuffer;
use zkemu::rv32::{andn, rol, sm3p0, sm3p1};

/// SM3 block size in bytes.
pub const BLOCK_SIZE: usize = 64;

const IV: [u32; 8] = [
    0x7380166f, 0x4914b2b9, 0x172442d7, 0xda8a0600, 0xa96f30bc, 0x163138aa, 0xe38dee4d, 0xb0fb0e4e,
];

const T0: u32 = 0x79cc4519;
const T1: u32 = 0x7a879d8a;

/// SM3 compression function. The new state is the XOR of the old state and the round output.
pub fn compress(state: &mut [u32; 8], block: &[u8; BLOCK_SIZE]) {
    let mut w = [0u32; 68];
    for (w, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *w = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for j in 16..68 {
        w[j] = sm3p1(w[j - 16] ^ w[j - 9] ^ rol(w[j - 3], 15)) ^ rol(w[j - 13], 7) ^ w[j - 6];
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for j in 0..64 {
        let (t, ff, gg) = if j < 16 {
            (T0, a ^ b ^ c, e ^ f ^ g)
        } else {
            (T1, (a & b) | (a & c) | (b & c), (e & f) | andn(g, e))
        };

        let a12 = rol(a, 12);
        let ss1 = rol(a12.wrapping_add(e).wrapping_add(rol(t, j as u32)), 7);
        let ss2 = ss1 ^ a12;
        let tt1 = ff
            .wrapping_add(d)
            .wrapping_add(ss2)
            .wrapping_add(w[j] ^ w[j + 4]);
        let tt2 = gg.wrapping_add(h).wrapping_add(ss1).wrapping_add(w[j]);

        d = c;
        c = rol(b, 9);
        b = a;
        a = tt1;
        h = g;
        g = rol(f, 19);
        f = e;
        e = sm3p0(tt2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s ^= v;
    }
}

/// Incremental SM3 hash.
#[derive(Clone)]
pub struct Sm3 {
    state: [u32; 8],
    buffer: BlockBuffer<BLOCK_SIZE>,
    len: u64,
}

impl Sm3 {
    /// Fresh hash state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: IV,
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

    /// Pad and return the 256-bit digest.
    #[must_use]
    pub fn finalize(mut self) -> [u8; 32] {
        let bits = self.len.wrapping_mul(8).to_be_bytes();
        let state = &mut self.state;
        self.buffer.pad(&bits, |block| compress(state, block));

        let mut out = [0u8; 32];
        for (chunk, s) in out.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&s.to_be_bytes());
        }
        out
    }
}

impl Default for Sm3 {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Sm3 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sm3").finish_non_exhaustive()
    }
}

/// SM3 of `msg`.
#[must_use]
pub fn sm3(msg: &[u8]) -> [u8; 32] {
    let mut h = Sm3::new();
    h.update(msg);
    h.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn gbt32905_example_1() {
        assert_eq!(
            sm3(b"abc"),
            hex!("66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0")
        );
    }

    #[test]
    fn gbt32905_example_2() {
        let mut msg = [0u8; 64];
        for (i, b) in msg.iter_mut().enumerate() {
            *b = b"abcd"[i % 4];
        }
        assert_eq!(
            sm3(&msg),
            hex!("debe9ff92275b8a138604889c18e5a4d6fdb70e5387e5765293dcba39c0c5732")
        );
    }
}
