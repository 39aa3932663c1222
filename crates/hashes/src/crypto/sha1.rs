//! SHA-1 (FIPS 180-4).
//!
//! Collision attacks against SHA-1 are practical; use it only where a
//! protocol or file format requires it.

#![allow(clippy::indexing_slicing)] // 16-word ring schedule, indices masked with `& 15`

use traits::Digest;

use crate::{block::BlockBuffer, util::store_be32};

const BLOCK_LEN: usize = 64;

const H0: [u32; 5] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

/// SHA-1 streaming hasher.
#[derive(Clone)]
pub struct Sha1 {
  state: [u32; 5],
  buffer: BlockBuffer<BLOCK_LEN>,
  total_len: u64,
}

impl Default for Sha1 {
  #[inline]
  fn default() -> Self {
    Self {
      state: H0,
      buffer: BlockBuffer::new(),
      total_len: 0,
    }
  }
}

impl Sha1 {
  #[inline(always)]
  fn compress_block(state: &mut [u32; 5], block: &[u8; BLOCK_LEN]) {
    let mut w = [0u32; 16];
    let (chunks, _) = block.as_chunks::<4>();
    for (wi, c) in w.iter_mut().zip(chunks) {
      *wi = u32::from_be_bytes(*c);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    // W[t] = ROTL1(W[t-3] ^ W[t-8] ^ W[t-14] ^ W[t-16]), kept in a 16-word ring.
    macro_rules! schedule {
      ($t:expr) => {{
        let t = $t;
        if t < 16 {
          w[t]
        } else {
          let x = (w[(t + 13) & 15] ^ w[(t + 8) & 15] ^ w[(t + 2) & 15] ^ w[t & 15]).rotate_left(1);
          w[t & 15] = x;
          x
        }
      }};
    }

    macro_rules! rounds {
      ($range:expr, $k:expr, |$x:ident, $y:ident, $z:ident| $f:expr) => {{
        for t in $range {
          let wt = schedule!(t);
          let ($x, $y, $z) = (b, c, d);
          let temp = a
            .rotate_left(5)
            .wrapping_add($f)
            .wrapping_add(e)
            .wrapping_add($k)
            .wrapping_add(wt);
          e = d;
          d = c;
          c = b.rotate_left(30);
          b = a;
          a = temp;
        }
      }};
    }

    rounds!(0..20, 0x5a82_7999, |x, y, z| z ^ (x & (y ^ z)));
    rounds!(20..40, 0x6ed9_eba1, |x, y, z| x ^ y ^ z);
    rounds!(40..60, 0x8f1b_bcdc, |x, y, z| (x & y) | (x & z) | (y & z));
    rounds!(60..80, 0xca62_c1d6, |x, y, z| x ^ y ^ z);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
  }
}

impl Digest for Sha1 {
  const OUTPUT_SIZE: usize = 20;
  const BLOCK_LEN: usize = BLOCK_LEN;
  type Output = [u8; 20];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.total_len = self.total_len.wrapping_add(data.len() as u64);
    let state = &mut self.state;
    self.buffer.feed(data, |block| Self::compress_block(state, block));
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    let mut state = self.state;
    let bit_len = self.total_len.wrapping_mul(8);
    self
      .buffer
      .pad_md(bit_len.to_be_bytes(), |block| Self::compress_block(&mut state, block));

    let mut out = [0u8; 20];
    store_be32(&state, &mut out);
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}
