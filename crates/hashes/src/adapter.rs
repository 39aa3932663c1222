//! Byte-source adapters: iterators of byte-like items and `std::io::Read`.
//!
//! Hashers only accept contiguous slices. These adapters gather other sources
//! into slices (through a stack scratch buffer or a heap read buffer sized by
//! [`AdapterConfig`]) and forward them in order, so chunking never shows up
//! in the digest.

use traits::Digest;

use crate::config::{AdapterConfig, SCRATCH_CAPACITY};

/// An element that can be fed to a hasher as one byte.
///
/// Signed bytes are reinterpreted bit-for-bit, so `-1i8` hashes as `0xff`.
pub trait ByteLike: Copy {
  /// The byte this element represents.
  fn to_byte(self) -> u8;
}

impl ByteLike for u8 {
  #[inline(always)]
  fn to_byte(self) -> u8 {
    self
  }
}

impl ByteLike for i8 {
  #[inline(always)]
  fn to_byte(self) -> u8 {
    self.cast_unsigned()
  }
}

impl ByteLike for &u8 {
  #[inline(always)]
  fn to_byte(self) -> u8 {
    *self
  }
}

impl ByteLike for &i8 {
  #[inline(always)]
  fn to_byte(self) -> u8 {
    self.cast_unsigned()
  }
}

/// Copy `iter` through the scratch buffer, handing each filled window to
/// `sink`. Returns the number of bytes forwarded.
pub(crate) fn feed_iter<I>(iter: I, mut sink: impl FnMut(&[u8])) -> u64
where
  I: IntoIterator,
  I::Item: ByteLike,
{
  let scratch_len = AdapterConfig::get().scratch_len.clamp(1, SCRATCH_CAPACITY);
  let mut scratch = [0u8; SCRATCH_CAPACITY];
  let (window, _) = scratch.split_at_mut(scratch_len);

  let mut total = 0u64;
  let mut filled = 0usize;
  let mut flushes = 0usize;
  for item in iter {
    if let Some(slot) = window.get_mut(filled) {
      *slot = item.to_byte();
      filled += 1;
    }
    if filled == window.len() {
      sink(&*window);
      total += filled as u64;
      filled = 0;
      flushes += 1;
    }
  }

  if let Some(rest) = window.get(..filled).filter(|rest| !rest.is_empty()) {
    sink(rest);
    total += filled as u64;
    flushes += 1;
  }

  log::trace!("iterator adapter: {total} bytes in {flushes} chunks (scratch {scratch_len})");
  total
}

/// Read `reader` to EOF, handing each successful read to `sink`.
///
/// `Interrupted` is retried; any other error is returned as-is, after every
/// byte read before it has already been forwarded.
#[cfg(feature = "std")]
pub(crate) fn feed_reader<R: std::io::Read>(mut reader: R, mut sink: impl FnMut(&[u8])) -> std::io::Result<u64> {
  use std::io::ErrorKind;

  let buf_len = AdapterConfig::get().read_buf_len;
  let mut buf = std::vec![0u8; buf_len];
  let mut total = 0u64;

  loop {
    match reader.read(&mut buf) {
      Ok(0) => break,
      Ok(n) => {
        if let Some(data) = buf.get(..n) {
          sink(data);
        }
        total += n as u64;
      }
      Err(e) if e.kind() == ErrorKind::Interrupted => continue,
      Err(e) => {
        log::trace!("reader adapter: error after {total} bytes: {e}");
        return Err(e);
      }
    }
  }

  log::trace!("reader adapter: {total} bytes (buffer {buf_len})");
  Ok(total)
}

/// Extra input methods available on every [`Digest`].
pub trait UpdateExt: Digest {
  /// Feed every element of `iter`, in order. Returns the number of bytes hashed.
  ///
  /// ```rust
  /// use hashes::{Digest, Md5, UpdateExt};
  ///
  /// let mut h = Md5::new();
  /// h.update_iter("hello world".bytes());
  /// assert_eq!(h.finalize(), Md5::digest(b"hello world"));
  /// ```
  #[inline]
  fn update_iter<I>(&mut self, iter: I) -> u64
  where
    I: IntoIterator,
    I::Item: ByteLike,
  {
    feed_iter(iter, |chunk| self.update(chunk))
  }

  /// Read `reader` to EOF, hashing everything read. Returns the number of
  /// bytes hashed.
  #[cfg(feature = "std")]
  #[inline]
  fn update_reader<R: std::io::Read>(&mut self, reader: R) -> std::io::Result<u64> {
    feed_reader(reader, |chunk| self.update(chunk))
  }
}

impl<D: Digest> UpdateExt for D {}
