//! MD5 (RFC 1321).
//!
//! Provided for interoperability with legacy checksums only; MD5 is broken
//! as a cryptographic hash.

#![allow(clippy::indexing_slicing)] // Fixed-size arrays + message index table

use traits::Digest;

use crate::{block::BlockBuffer, util::store_le32};

const BLOCK_LEN: usize = 64;

const H0: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

// K[i] = floor(2^32 * |sin(i + 1)|).
const K: [u32; 64] = [
  0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501, 0x698098d8,
  0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821, 0xf61e2562, 0xc040b340,
  0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8, 0x21e1cde6, 0xc33707d6, 0xf4d50d87,
  0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a, 0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
  0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70, 0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039,
  0xe6db99e5, 0x1fa27cf8, 0xc4ac5665, 0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92,
  0xffeff47d, 0x85845dd1, 0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb,
  0xeb86d391,
];

// Message word consumed by each step: i, (5i + 1), (3i + 5), 7i (mod 16) per round.
const M: [usize; 64] = [
  0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, //
  1, 6, 11, 0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, //
  5, 8, 11, 14, 1, 4, 7, 10, 13, 0, 3, 6, 9, 12, 15, 2, //
  0, 7, 14, 5, 12, 3, 10, 1, 8, 15, 6, 13, 4, 11, 2, 9,
];

#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
  (x & y) | (!x & z)
}

#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
  (x & z) | (y & !z)
}

#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
  x ^ y ^ z
}

#[inline(always)]
fn i(x: u32, y: u32, z: u32) -> u32 {
  y ^ (x | !z)
}

/// MD5 streaming hasher.
#[derive(Clone)]
pub struct Md5 {
  state: [u32; 4],
  buffer: BlockBuffer<BLOCK_LEN>,
  total_len: u64,
}

impl Default for Md5 {
  #[inline]
  fn default() -> Self {
    Self {
      state: H0,
      buffer: BlockBuffer::new(),
      total_len: 0,
    }
  }
}

impl Md5 {
  #[inline(always)]
  fn compress_block(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    let mut w = [0u32; 16];
    let (chunks, _) = block.as_chunks::<4>();
    for (wi, c) in w.iter_mut().zip(chunks) {
      *wi = u32::from_le_bytes(*c);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    macro_rules! step {
      ($fn:ident, $a:ident, $b:ident, $c:ident, $d:ident, $i:expr, $s:expr) => {{
        $a = $b.wrapping_add(
          $a.wrapping_add($fn($b, $c, $d))
            .wrapping_add(w[M[$i]])
            .wrapping_add(K[$i])
            .rotate_left($s),
        );
      }};
    }

    // Four steps rotate the register roles once; `$r` holds that round's shifts.
    macro_rules! quad {
      ($fn:ident, $i:expr, $r:expr) => {{
        step!($fn, a, b, c, d, $i, $r[0]);
        step!($fn, d, a, b, c, $i + 1, $r[1]);
        step!($fn, c, d, a, b, $i + 2, $r[2]);
        step!($fn, b, c, d, a, $i + 3, $r[3]);
      }};
    }

    const R1: [u32; 4] = [7, 12, 17, 22];
    const R2: [u32; 4] = [5, 9, 14, 20];
    const R3: [u32; 4] = [4, 11, 16, 23];
    const R4: [u32; 4] = [6, 10, 15, 21];

    quad!(f, 0, R1);
    quad!(f, 4, R1);
    quad!(f, 8, R1);
    quad!(f, 12, R1);

    quad!(g, 16, R2);
    quad!(g, 20, R2);
    quad!(g, 24, R2);
    quad!(g, 28, R2);

    quad!(h, 32, R3);
    quad!(h, 36, R3);
    quad!(h, 40, R3);
    quad!(h, 44, R3);

    quad!(i, 48, R4);
    quad!(i, 52, R4);
    quad!(i, 56, R4);
    quad!(i, 60, R4);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
  }
}

impl Digest for Md5 {
  const OUTPUT_SIZE: usize = 16;
  const BLOCK_LEN: usize = BLOCK_LEN;
  type Output = [u8; 16];

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
      .pad_md(bit_len.to_le_bytes(), |block| Self::compress_block(&mut state, block));

    let mut out = [0u8; 16];
    store_le32(&state, &mut out);
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

#[cfg(test)]
mod tests {
  use traits::Digest;

  use super::Md5;

  fn md5_hex(data: &[u8]) -> alloc::string::String {
    hex::encode(Md5::digest(data))
  }

  extern crate alloc;

  #[test]
  fn rfc1321_vectors() {
    assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(md5_hex(b"a"), "0cc175b9c0f1b6a831c399e269772661");
    assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(md5_hex(b"message digest"), "f96b697d7cb7938d525a2f31aaf161d0");
    assert_eq!(md5_hex(b"abcdefghijklmnopqrstuvwxyz"), "c3fcd3d76192e4007dfb496cca67e13b");
    assert_eq!(
      md5_hex(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"),
      "d174ab98d277d9f5a5611c2c9f419d9f"
    );
    assert_eq!(
      md5_hex(b"12345678901234567890123456789012345678901234567890123456789012345678901234567890"),
      "57edf4a22be3c955ac49da2e2107b67a"
    );
  }

  #[test]
  fn text_and_binary_inputs() {
    assert_eq!(md5_hex(b"hello world"), "5eb63bbbe01eeed093cb22bb8f5acdc3");
    assert_eq!(
      md5_hex(&[0x11, 0xff, 0x1a, 0x55, 0x1a, 0x12, 0x34, 0x1f, 0x56, 0x78]),
      "5866dd029297014ce2ac5bb21825255a"
    );
    assert_eq!(
      md5_hex(b"The quick brown fox jumps over the lazy dog"),
      "9e107d9d372bb6826bd81d3542a419d6"
    );
  }
}
