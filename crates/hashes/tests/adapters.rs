use std::io::{self, IoSlice, IoSliceMut, Read, Write};

use hashes::{Algorithm, Digest, Hasher, Md5, Sha1, Sha3_256, Sha256, Sha512, UpdateExt};

/// Hands out at most `max` bytes per read and fails with `Interrupted` every
/// other call.
struct Stuttering<'a> {
  data: &'a [u8],
  max: usize,
  interrupt_next: bool,
}

impl Read for Stuttering<'_> {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    if self.interrupt_next {
      self.interrupt_next = false;
      return Err(io::ErrorKind::Interrupted.into());
    }
    self.interrupt_next = true;
    let n = self.max.min(buf.len()).min(self.data.len());
    buf[..n].copy_from_slice(&self.data[..n]);
    self.data = &self.data[n..];
    Ok(n)
  }
}

/// Yields `good` bytes, then fails.
struct FailsAfter<'a> {
  good: &'a [u8],
}

impl Read for FailsAfter<'_> {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    if self.good.is_empty() {
      return Err(io::Error::other("disk on fire"));
    }
    let n = buf.len().min(self.good.len());
    buf[..n].copy_from_slice(&self.good[..n]);
    self.good = &self.good[n..];
    Ok(n)
  }
}

#[test]
fn reader_retries_interrupts_and_short_reads() {
  let data: Vec<u8> = (0..5000u32).map(|i| (i * 7) as u8).collect();
  let mut h = Sha512::new();
  let n = h
    .update_reader(Stuttering {
      data: &data,
      max: 333,
      interrupt_next: true,
    })
    .unwrap();
  assert_eq!(n, data.len() as u64);
  assert_eq!(h.finalize(), Sha512::digest(&data));
}

#[test]
fn reader_error_is_surfaced_after_hashing_what_was_read() {
  let mut h = Sha1::new();
  let err = h.update_reader(FailsAfter { good: b"partial" }).unwrap_err();
  assert_eq!(err.to_string(), "disk on fire");
  assert_eq!(h.finalize(), Sha1::digest(b"partial"));
}

#[test]
fn iterator_of_references_matches_slice() {
  let text = "The quick brown fox jumps over the lazy dog";
  let mut h = Md5::new();
  h.update_iter(text.as_bytes().iter());
  assert_eq!(hex::encode(h.finalize()), "9e107d9d372bb6826bd81d3542a419d6");
}

#[test]
fn signed_bytes_hash_like_their_bit_patterns() {
  let signed: Vec<i8> = vec![0x11, -1, 0x1a, 0x55, 0x1a, 0x12, 0x34, 0x1f, 0x56, 0x78];
  let mut h = Md5::new();
  h.update_iter(&signed);
  assert_eq!(h.finalize_hex(), "5866dd029297014ce2ac5bb21825255a");
}

#[test]
fn runtime_hasher_uses_the_same_adapters() {
  let data = vec![0x42u8; 3000];
  let mut h = Hasher::new(Algorithm::Sha3_256);
  assert_eq!(h.update_reader(&data[..]).unwrap(), 3000);
  assert_eq!(h.finalize().as_bytes(), Sha3_256::digest(&data));

  let mut h = Hasher::new(Algorithm::Sha3_256);
  h.update_iter(data.iter().copied());
  assert_eq!(h.finalize().as_bytes(), Sha3_256::digest(&data));
}

#[test]
fn digest_writer_tees_and_hashes() {
  let mut writer = Sha3_256::writer(Vec::new());
  writer.write_all(b"hello ").unwrap();
  writer.write_all(b"world").unwrap();
  writer.flush().unwrap();
  let (inner, digest) = writer.into_parts();
  assert_eq!(inner, b"hello world");
  assert_eq!(digest, Sha3_256::digest(b"hello world"));
}

#[test]
fn digest_reader_hashes_what_the_caller_reads() {
  let mut reader = Sha1::reader(&b"hello world"[..]);
  let mut first = [0u8; 5];
  reader.read_exact(&mut first).unwrap();
  assert_eq!(reader.digest(), Sha1::digest(b"hello"));

  io::copy(&mut reader, &mut io::sink()).unwrap();
  assert_eq!(
    hex::encode(reader.digest()),
    "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"
  );
}

#[test]
fn vectored_updates_match_contiguous() {
  let parts: [&[u8]; 4] = [b"hel", b"", b"lo wor", b"ld"];
  assert_eq!(Sha512::digest_vectored(&parts), Sha512::digest(b"hello world"));

  let mut h = Sha512::new();
  h.update_vectored(&parts);
  assert_eq!(h.finalize(), Sha512::digest(b"hello world"));
}

#[test]
fn vectored_io_with_leading_empty_buffer_hashes_every_byte() {
  let mut writer = Sha256::writer(Vec::new());
  let n = writer.write_vectored(&[IoSlice::new(b""), IoSlice::new(b"abc")]).unwrap();
  assert_eq!(n, 3);
  let (inner, digest) = writer.into_parts();
  assert_eq!(inner, b"abc");
  assert_eq!(digest, Sha256::digest(b"abc"));

  let mut reader = Sha256::reader(&b"abc"[..]);
  let mut empty = [0u8; 0];
  let mut buf = [0u8; 8];
  let n = reader
    .read_vectored(&mut [IoSliceMut::new(&mut empty), IoSliceMut::new(&mut buf)])
    .unwrap();
  assert_eq!(n, 3);
  assert_eq!(reader.digest(), Sha256::digest(b"abc"));
}
