//! Word/byte conversions for digest output.
//!
//! Each helper fills `out` from the front and stops at whichever runs out
//! first, so truncated variants (SHA-224, SHA-384, SHA3-224) fall out of the
//! same code path as their full-width parents.

#[inline(always)]
pub(crate) fn store_be32(words: &[u32], out: &mut [u8]) {
  for (chunk, word) in out.chunks_mut(4).zip(words) {
    for (dst, src) in chunk.iter_mut().zip(word.to_be_bytes()) {
      *dst = src;
    }
  }
}

#[inline(always)]
pub(crate) fn store_le32(words: &[u32], out: &mut [u8]) {
  for (chunk, word) in out.chunks_mut(4).zip(words) {
    for (dst, src) in chunk.iter_mut().zip(word.to_le_bytes()) {
      *dst = src;
    }
  }
}

#[inline(always)]
pub(crate) fn store_be64(words: &[u64], out: &mut [u8]) {
  for (chunk, word) in out.chunks_mut(8).zip(words) {
    for (dst, src) in chunk.iter_mut().zip(word.to_be_bytes()) {
      *dst = src;
    }
  }
}

#[inline(always)]
pub(crate) fn store_le64(words: &[u64], out: &mut [u8]) {
  for (chunk, word) in out.chunks_mut(8).zip(words) {
    for (dst, src) in chunk.iter_mut().zip(word.to_le_bytes()) {
      *dst = src;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn partial_trailing_word_is_truncated() {
    let mut out = [0u8; 6];
    store_le64(&[0x0706_0504_0302_0100, u64::MAX], &mut out);
    assert_eq!(out, [0, 1, 2, 3, 4, 5]);

    let mut out = [0u8; 6];
    store_be32(&[0x0102_0304, 0x0506_0708], &mut out);
    assert_eq!(out, [1, 2, 3, 4, 5, 6]);
  }
}
