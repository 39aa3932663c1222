//! Partial-block buffering shared by every hasher in the crate.
//!
//! [`BlockBuffer`] turns an arbitrarily chunked byte stream into whole
//! blocks for a compression (or absorb) function, and builds the final
//! padded block(s) for both padding schemes the crate needs:
//!
//! - Merkle–Damgård: `0x80`, zeros, then a fixed-width length field.
//! - Keccak pad10*1: a domain separator byte, zeros, then `0x80` in the last
//!   byte of the rate.
//!
//! Finalization works on a copy of the pending bytes, so the live buffer is
//! never disturbed and callers can keep streaming afterwards.

#![allow(clippy::indexing_slicing)] // `len < BLOCK` is maintained by every mutation below

#[derive(Clone)]
pub(crate) struct BlockBuffer<const BLOCK: usize> {
  buf: [u8; BLOCK],
  len: usize,
}

impl<const BLOCK: usize> Default for BlockBuffer<BLOCK> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<const BLOCK: usize> BlockBuffer<BLOCK> {
  #[inline]
  pub(crate) const fn new() -> Self {
    Self {
      buf: [0u8; BLOCK],
      len: 0,
    }
  }

  /// Number of pending bytes; always `< BLOCK`.
  #[cfg(test)]
  #[must_use]
  pub(crate) const fn len(&self) -> usize {
    self.len
  }

  /// Append `data` to the stream, calling `compress` once per completed block.
  ///
  /// Whole blocks are passed straight from `data` without copying; only the
  /// head (completing a pending block) and the tail go through the buffer.
  #[inline]
  pub(crate) fn feed(&mut self, mut data: &[u8], mut compress: impl FnMut(&[u8; BLOCK])) {
    if data.is_empty() {
      return;
    }

    if self.len != 0 {
      let take = core::cmp::min(BLOCK - self.len, data.len());
      self.buf[self.len..self.len + take].copy_from_slice(&data[..take]);
      self.len += take;
      data = &data[take..];

      if self.len < BLOCK {
        return;
      }
      compress(&self.buf);
      self.len = 0;
    }

    let (blocks, rest) = data.as_chunks::<BLOCK>();
    for block in blocks {
      compress(block);
    }

    if !rest.is_empty() {
      self.buf[..rest.len()].copy_from_slice(rest);
      self.len = rest.len();
    }
  }

  /// Merkle–Damgård padding with a `FIELD`-byte length suffix.
  ///
  /// Emits one final block, or two when fewer than `FIELD + 1` bytes of room
  /// remain after the pending data.
  #[inline]
  pub(crate) fn pad_md<const FIELD: usize>(&self, length: [u8; FIELD], mut compress: impl FnMut(&[u8; BLOCK])) {
    debug_assert!(FIELD < BLOCK);
    let mut block = self.buf;
    let mut len = self.len;

    block[len] = 0x80;
    len += 1;

    if len > BLOCK - FIELD {
      block[len..].fill(0);
      compress(&block);
      block = [0u8; BLOCK];
      len = 0;
    }

    block[len..BLOCK - FIELD].fill(0);
    block[BLOCK - FIELD..].copy_from_slice(&length);
    compress(&block);
  }

  /// Keccak pad10*1 with domain separator `domain`.
  ///
  /// With exactly one byte of room left, the separator and the final bit
  /// share that byte (`0x06 | 0x80 == 0x86` for SHA-3).
  #[inline]
  pub(crate) fn pad_sponge(&self, domain: u8, absorb: impl FnOnce(&[u8; BLOCK])) {
    let mut block = self.buf;
    block[self.len..].fill(0);
    block[self.len] ^= domain;
    block[BLOCK - 1] ^= 0x80;
    absorb(&block);
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use super::BlockBuffer;

  fn collect<const B: usize>(parts: &[&[u8]]) -> (Vec<[u8; B]>, BlockBuffer<B>) {
    let mut buf = BlockBuffer::<B>::new();
    let mut seen = Vec::new();
    for part in parts {
      buf.feed(part, |b| seen.push(*b));
    }
    (seen, buf)
  }

  #[test]
  fn feed_keeps_remainder_below_one_block() {
    let data: Vec<u8> = (0u8..=40).collect();
    for split in 0..=data.len() {
      let (a, b) = data.split_at(split);
      let (blocks, buf) = collect::<8>(&[a, b]);
      assert_eq!(blocks.len(), data.len() / 8);
      assert_eq!(buf.len(), data.len() % 8);
      let flat: Vec<u8> = blocks.iter().flatten().copied().collect();
      assert_eq!(flat, data[..blocks.len() * 8]);
    }
  }

  #[test]
  fn exact_block_leaves_buffer_empty() {
    let (blocks, buf) = collect::<4>(&[b"ab", b"cd"]);
    assert_eq!(blocks, [*b"abcd"]);
    assert_eq!(buf.len(), 0);
  }

  #[test]
  fn md_padding_spills_when_length_does_not_fit() {
    // 8-byte block, 2-byte length field: room for 5 pending bytes at most.
    let (_, fits) = collect::<8>(&[b"abcde"]);
    let mut out = Vec::new();
    fits.pad_md([0xAA, 0xBB], |b| out.push(*b));
    assert_eq!(out, [[b'a', b'b', b'c', b'd', b'e', 0x80, 0xAA, 0xBB]]);

    let (_, spills) = collect::<8>(&[b"abcdef"]);
    let mut out = Vec::new();
    spills.pad_md([0xAA, 0xBB], |b| out.push(*b));
    assert_eq!(out, [[b'a', b'b', b'c', b'd', b'e', b'f', 0x80, 0], [0, 0, 0, 0, 0, 0, 0xAA, 0xBB]]);
  }

  #[test]
  fn sponge_padding_merges_on_last_byte() {
    let (_, one_left) = collect::<4>(&[b"abc"]);
    let mut out = [0u8; 4];
    one_left.pad_sponge(0x06, |b| out = *b);
    assert_eq!(out, [b'a', b'b', b'c', 0x86]);

    let (_, empty) = collect::<4>(&[b"abcd"]);
    empty.pad_sponge(0x06, |b| out = *b);
    assert_eq!(out, [0x06, 0, 0, 0x80]);
  }
}
