//! I/O wrappers that hash the bytes flowing through a reader or writer.
//!
//! Only bytes actually transferred are hashed: short reads, short writes,
//! and failed calls never feed the digest anything the caller did not see
//! move.
//!
//! # Example
//!
//! ```rust
//! # use traits::Digest;
//! # #[derive(Clone, Default)]
//! # struct Count(u32);
//! # impl Digest for Count {
//! #   const OUTPUT_SIZE: usize = 4;
//! #   const BLOCK_LEN: usize = 1;
//! #   type Output = [u8; 4];
//! #   fn new() -> Self { Self(0) }
//! #   fn update(&mut self, data: &[u8]) { self.0 += data.len() as u32; }
//! #   fn finalize(&self) -> Self::Output { self.0.to_be_bytes() }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Count::reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.digest(), 3u32.to_be_bytes());
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{IoSlice, IoSliceMut, Read, Result, Write};

use crate::Digest;

#[inline]
fn read_and_update<R: Read>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> Result<usize> {
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

/// Feed the first `n` bytes spread across `bufs` to `on_data`.
#[inline]
fn update_prefix<'a>(bufs: impl IntoIterator<Item = &'a [u8]>, n: usize, mut on_data: impl FnMut(&[u8])) {
  let mut remaining = n;
  for buf in bufs {
    if remaining == 0 {
      break;
    }
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      continue;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
}

#[inline]
fn write_and_update<W: Write>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> Result<usize> {
  let n = inner.write(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

// ─────────────────────────────────────────────────────────────────────────────
// Reader
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Read`] and computes a digest transparently.
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `D`: The digest algorithm type (e.g., `Sha256`)
#[derive(Clone)]
pub struct DigestReader<R, D: Digest> {
  inner: R,
  hasher: D,
}

impl<R, D: Digest> DigestReader<R, D> {
  /// Create a new reader wrapper with a fresh hasher.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self {
      inner,
      hasher: D::new(),
    }
  }

  /// Get the current digest value.
  ///
  /// This does not consume the reader or finalize the hasher -
  /// further reads will continue updating the digest.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut D {
    &mut self.hasher
  }

  /// Unwrap this `DigestReader`, returning the inner reader and the final digest.
  #[inline]
  pub fn into_parts(self) -> (R, D::Output) {
    let digest = self.hasher.finalize();
    (self.inner, digest)
  }

  /// Unwrap this `DigestReader`, returning the inner reader and discarding the digest.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }
}

impl<R: Read, D: Digest> Read for DigestReader<R, D> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    let hasher = &mut self.hasher;
    update_prefix(bufs.iter().map(|b| &**b), n, |data| hasher.update(data));
    Ok(n)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Writer
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Write`] and computes a digest transparently.
///
/// The digest is updated **after** the inner write returns, with exactly
/// the prefix the inner writer accepted. A failed write hashes nothing.
#[derive(Clone)]
pub struct DigestWriter<W, D: Digest> {
  inner: W,
  hasher: D,
}

impl<W, D: Digest> DigestWriter<W, D> {
  /// Create a new writer wrapper with a fresh hasher.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self {
      inner,
      hasher: D::new(),
    }
  }

  /// Get the current digest value.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut D {
    &mut self.hasher
  }

  /// Unwrap this `DigestWriter`, returning the inner writer and the final digest.
  #[inline]
  pub fn into_parts(self) -> (W, D::Output) {
    let digest = self.hasher.finalize();
    (self.inner, digest)
  }

  /// Unwrap this `DigestWriter`, returning the inner writer and discarding the digest.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }
}

impl<W: Write, D: Digest> Write for DigestWriter<W, D> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> Result<usize> {
    let n = self.inner.write_vectored(bufs)?;
    let hasher = &mut self.hasher;
    update_prefix(bufs.iter().map(|b| &**b), n, |data| hasher.update(data));
    Ok(n)
  }
}

#[cfg(test)]
mod tests {
  use std::vec::Vec;

  use super::*;

  #[derive(Clone, Default)]
  struct Bytes(Vec<u8>);

  impl Digest for Bytes {
    const OUTPUT_SIZE: usize = 8;
    const BLOCK_LEN: usize = 1;
    type Output = [u8; 8];

    fn new() -> Self {
      Self::default()
    }

    fn update(&mut self, data: &[u8]) {
      self.0.extend_from_slice(data);
    }

    fn finalize(&self) -> Self::Output {
      let mut out = [0u8; 8];
      for (dst, src) in out.iter_mut().zip(self.0.iter()) {
        *dst = *src;
      }
      out
    }

    fn reset(&mut self) {
      self.0.clear();
    }
  }

  /// Accepts at most three bytes per call.
  struct Trickle(Vec<u8>);

  impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
      let n = buf.len().min(3);
      self.0.extend_from_slice(&buf[..n]);
      Ok(n)
    }

    fn flush(&mut self) -> Result<()> {
      Ok(())
    }
  }

  #[test]
  fn short_writes_hash_only_accepted_bytes() {
    let mut w: DigestWriter<_, Bytes> = DigestWriter::new(Trickle(Vec::new()));
    let n = w.write(b"abcdef").unwrap();
    assert_eq!(n, 3);
    assert_eq!(&w.digest()[..3], b"abc");
    assert_eq!(w.digest()[3], 0);
  }

  #[test]
  fn vectored_reads_hash_filled_prefix() {
    let mut r: DigestReader<_, Bytes> = DigestReader::new(&b"hello"[..]);
    let mut a = [0u8; 2];
    let mut b = [0u8; 8];
    let n = {
      let mut bufs = [IoSliceMut::new(&mut a), IoSliceMut::new(&mut b)];
      r.read_vectored(&mut bufs).unwrap()
    };
    assert_eq!(n, 5);
    assert_eq!(&r.digest()[..5], b"hello");
  }

  #[test]
  fn vectored_reads_skip_empty_buffers() {
    let mut r: DigestReader<_, Bytes> = DigestReader::new(&b"hello"[..]);
    let mut empty = [0u8; 0];
    let mut a = [0u8; 3];
    let mut b = [0u8; 0];
    let mut c = [0u8; 8];
    let n = {
      let mut bufs = [
        IoSliceMut::new(&mut empty),
        IoSliceMut::new(&mut a),
        IoSliceMut::new(&mut b),
        IoSliceMut::new(&mut c),
      ];
      r.read_vectored(&mut bufs).unwrap()
    };
    assert_eq!(n, 5);
    assert_eq!(&r.digest()[..5], b"hello");
  }

  #[test]
  fn vectored_writes_skip_empty_buffers() {
    let mut w: DigestWriter<_, Bytes> = DigestWriter::new(Vec::new());
    let bufs = [IoSlice::new(b""), IoSlice::new(b"abc"), IoSlice::new(b""), IoSlice::new(b"de")];
    let n = w.write_vectored(&bufs).unwrap();
    assert_eq!(n, 5);
    let (inner, digest) = w.into_parts();
    assert_eq!(inner, b"abcde");
    assert_eq!(&digest[..5], b"abcde");
  }
}
