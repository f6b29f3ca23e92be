//! Block buffering and Merkle-Damgård strengthening shared by SHA-2 and SM3.

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Partial block awaiting compression.
#[derive(Clone)]
pub(crate) struct BlockBuffer<const N: usize> {
    buf: [u8; N],
    pos: usize,
}

impl<const N: usize> BlockBuffer<N> {
    pub(crate) const fn new() -> Self {
        Self {
            buf: [0; N],
            pos: 0,
        }
    }

    /// Append `data`, handing every completed block to `compress`.
    pub(crate) fn update(&mut self, mut data: &[u8], mut compress: impl FnMut(&[u8; N])) {
        if self.pos > 0 {
            let n = (N - self.pos).min(data.len());
            self.buf[self.pos..self.pos + n].copy_from_slice(&data[..n]);
            self.pos += n;
            data = &data[n..];
            if self.pos < N {
                return;
            }
            compress(&self.buf);
            self.pos = 0;
        }

        let mut blocks = data.chunks_exact(N);
        for block in &mut blocks {
            self.buf.copy_from_slice(block);
            compress(&self.buf);
        }

        let rest = blocks.remainder();
        self.buf[..rest.len()].copy_from_slice(rest);
        self.pos = rest.len();
    }

    /// Append `0x80`, zero fill, and the big-endian message length `len_be` at the very end,
    /// compressing one or two final blocks.
    pub(crate) fn pad(&mut self, len_be: &[u8], mut compress: impl FnMut(&[u8; N])) {
        let tail = N - len_be.len();
        self.buf[self.pos] = 0x80;
        self.pos += 1;

        if self.pos > tail {
            self.buf[self.pos..].fill(0);
            compress(&self.buf);
            self.pos = 0;
        }

        self.buf[self.pos..tail].fill(0);
        self.buf[tail..].copy_from_slice(len_be);
        compress(&self.buf);
        self.pos = 0;
    }
}

#[cfg(feature = "zeroize")]
impl<const N: usize> Drop for BlockBuffer<N> {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}
