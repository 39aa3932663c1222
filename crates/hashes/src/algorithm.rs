//! Run-time algorithm selection.
//!
//! [`Algorithm`] names every hasher in the crate; [`Hasher`] is an enum over
//! the concrete hashers so a choice made at run time (a CLI flag, a config
//! value) still dispatches statically per variant.

use core::{fmt, str::FromStr};

use traits::Digest;

use crate::{
  crypto::{Md5, Sha1, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Sha224, Sha256, Sha384, Sha512},
  error::{HashError, Result},
};

/// Largest digest produced by any supported algorithm.
pub const MAX_OUTPUT_SIZE: usize = 64;

/// A supported hash algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
  /// MD5 (RFC 1321), 128-bit digest.
  Md5,
  /// SHA-1 (FIPS 180-4), 160-bit digest.
  Sha1,
  /// SHA-224, truncated SHA-256 with its own IV.
  Sha224,
  /// SHA-256.
  Sha256,
  /// SHA-384, truncated SHA-512 with its own IV.
  Sha384,
  /// SHA-512.
  Sha512,
  /// SHA3-224 (FIPS 202), rate 144 bytes.
  Sha3_224,
  /// SHA3-256, rate 136 bytes.
  Sha3_256,
  /// SHA3-384, rate 104 bytes.
  Sha3_384,
  /// SHA3-512, rate 72 bytes.
  Sha3_512,
}

impl Algorithm {
  /// Every supported algorithm, in display order.
  pub const ALL: [Self; 10] = [
    Self::Md5,
    Self::Sha1,
    Self::Sha224,
    Self::Sha256,
    Self::Sha384,
    Self::Sha512,
    Self::Sha3_224,
    Self::Sha3_256,
    Self::Sha3_384,
    Self::Sha3_512,
  ];

  /// Canonical lowercase name (`"sha256"`, `"sha3-256"`, ...).
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Md5 => "md5",
      Self::Sha1 => "sha1",
      Self::Sha224 => "sha224",
      Self::Sha256 => "sha256",
      Self::Sha384 => "sha384",
      Self::Sha512 => "sha512",
      Self::Sha3_224 => "sha3-224",
      Self::Sha3_256 => "sha3-256",
      Self::Sha3_384 => "sha3-384",
      Self::Sha3_512 => "sha3-512",
    }
  }

  /// Digest size in bytes.
  #[must_use]
  pub const fn output_size(self) -> usize {
    match self {
      Self::Md5 => Md5::OUTPUT_SIZE,
      Self::Sha1 => Sha1::OUTPUT_SIZE,
      Self::Sha224 => Sha224::OUTPUT_SIZE,
      Self::Sha256 => Sha256::OUTPUT_SIZE,
      Self::Sha384 => Sha384::OUTPUT_SIZE,
      Self::Sha512 => Sha512::OUTPUT_SIZE,
      Self::Sha3_224 => Sha3_224::OUTPUT_SIZE,
      Self::Sha3_256 => Sha3_256::OUTPUT_SIZE,
      Self::Sha3_384 => Sha3_384::OUTPUT_SIZE,
      Self::Sha3_512 => Sha3_512::OUTPUT_SIZE,
    }
  }

  /// Bytes per compression call (the sponge rate for SHA-3).
  #[must_use]
  pub const fn block_len(self) -> usize {
    match self {
      Self::Md5 => Md5::BLOCK_LEN,
      Self::Sha1 => Sha1::BLOCK_LEN,
      Self::Sha224 => Sha224::BLOCK_LEN,
      Self::Sha256 => Sha256::BLOCK_LEN,
      Self::Sha384 => Sha384::BLOCK_LEN,
      Self::Sha512 => Sha512::BLOCK_LEN,
      Self::Sha3_224 => Sha3_224::BLOCK_LEN,
      Self::Sha3_256 => Sha3_256::BLOCK_LEN,
      Self::Sha3_384 => Sha3_384::BLOCK_LEN,
      Self::Sha3_512 => Sha3_512::BLOCK_LEN,
    }
  }

  /// SHA-2 variant with a `bits`-bit output.
  pub fn sha2(bits: usize) -> Result<Self> {
    match bits {
      224 => Ok(Self::Sha224),
      256 => Ok(Self::Sha256),
      384 => Ok(Self::Sha384),
      512 => Ok(Self::Sha512),
      _ => Err(HashError::UnsupportedOutputBits { family: "SHA-2", bits }),
    }
  }

  /// SHA-3 variant with a `bits`-bit output.
  pub fn sha3(bits: usize) -> Result<Self> {
    match bits {
      224 => Ok(Self::Sha3_224),
      256 => Ok(Self::Sha3_256),
      384 => Ok(Self::Sha3_384),
      512 => Ok(Self::Sha3_512),
      _ => Err(HashError::UnsupportedOutputBits { family: "SHA-3", bits }),
    }
  }

  /// Case-insensitive name match ignoring `-` and `_` separators.
  #[cfg(feature = "alloc")]
  fn matches(self, input: &str) -> bool {
    let wanted = self.name().bytes().filter(|b| *b != b'-');
    let given = input
      .trim()
      .bytes()
      .filter(|b| *b != b'-' && *b != b'_')
      .map(|b| b.to_ascii_lowercase());
    wanted.eq(given)
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[cfg(feature = "alloc")]
impl FromStr for Algorithm {
  type Err = HashError;

  /// Accepts `sha256`, `SHA-256`, `sha3-256`, `sha3_256`, `Md5`, ...
  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|alg| alg.matches(s))
      .ok_or_else(|| HashError::UnknownAlgorithm(s.into()))
  }
}

/// A finished digest from a [`Hasher`]: up to [`MAX_OUTPUT_SIZE`] bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Output {
  bytes: [u8; MAX_OUTPUT_SIZE],
  len: usize,
}

impl Output {
  fn from_digest(digest: &[u8]) -> Self {
    let mut bytes = [0u8; MAX_OUTPUT_SIZE];
    let len = digest.len().min(MAX_OUTPUT_SIZE);
    for (dst, src) in bytes.iter_mut().zip(digest) {
      *dst = *src;
    }
    Self { bytes, len }
  }

  /// The digest bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    self.bytes.get(..self.len).unwrap_or(&[])
  }

  /// Digest length in bytes.
  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// `true` only for an empty output, which no algorithm produces.
  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }
}

impl AsRef<[u8]> for Output {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl fmt::Display for Output {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut buf = [0u8; MAX_OUTPUT_SIZE * 2];
    let (hex_buf, _) = buf.split_at_mut(self.len * 2);
    hex::encode_to_slice(self.as_bytes(), hex_buf).map_err(|_| fmt::Error)?;
    f.write_str(core::str::from_utf8(hex_buf).map_err(|_| fmt::Error)?)
  }
}

impl fmt::Debug for Output {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Output({self})")
  }
}

/// A hasher for an algorithm chosen at run time.
///
/// ```rust
/// use hashes::{Algorithm, Hasher};
///
/// let alg: Algorithm = "sha-256".parse()?;
/// let mut h = Hasher::new(alg);
/// h.update(b"hello world");
/// assert_eq!(
///   h.finalize().to_string(),
///   "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
/// );
/// # Ok::<(), hashes::HashError>(())
/// ```
#[derive(Clone)]
#[allow(clippy::large_enum_variant)] // sponge state is inline; no boxing
pub enum Hasher {
  /// [`Algorithm::Md5`].
  Md5(Md5),
  /// [`Algorithm::Sha1`].
  Sha1(Sha1),
  /// [`Algorithm::Sha224`].
  Sha224(Sha224),
  /// [`Algorithm::Sha256`].
  Sha256(Sha256),
  /// [`Algorithm::Sha384`].
  Sha384(Sha384),
  /// [`Algorithm::Sha512`].
  Sha512(Sha512),
  /// [`Algorithm::Sha3_224`].
  Sha3_224(Sha3_224),
  /// [`Algorithm::Sha3_256`].
  Sha3_256(Sha3_256),
  /// [`Algorithm::Sha3_384`].
  Sha3_384(Sha3_384),
  /// [`Algorithm::Sha3_512`].
  Sha3_512(Sha3_512),
}

macro_rules! dispatch {
  ($self:expr, $h:ident => $body:expr) => {
    match $self {
      Hasher::Md5($h) => $body,
      Hasher::Sha1($h) => $body,
      Hasher::Sha224($h) => $body,
      Hasher::Sha256($h) => $body,
      Hasher::Sha384($h) => $body,
      Hasher::Sha512($h) => $body,
      Hasher::Sha3_224($h) => $body,
      Hasher::Sha3_256($h) => $body,
      Hasher::Sha3_384($h) => $body,
      Hasher::Sha3_512($h) => $body,
    }
  };
}

impl Hasher {
  /// Fresh hasher for `algorithm`.
  #[must_use]
  pub fn new(algorithm: Algorithm) -> Self {
    match algorithm {
      Algorithm::Md5 => Self::Md5(Md5::new()),
      Algorithm::Sha1 => Self::Sha1(Sha1::new()),
      Algorithm::Sha224 => Self::Sha224(Sha224::new()),
      Algorithm::Sha256 => Self::Sha256(Sha256::new()),
      Algorithm::Sha384 => Self::Sha384(Sha384::new()),
      Algorithm::Sha512 => Self::Sha512(Sha512::new()),
      Algorithm::Sha3_224 => Self::Sha3_224(Sha3_224::new()),
      Algorithm::Sha3_256 => Self::Sha3_256(Sha3_256::new()),
      Algorithm::Sha3_384 => Self::Sha3_384(Sha3_384::new()),
      Algorithm::Sha3_512 => Self::Sha3_512(Sha3_512::new()),
    }
  }

  /// The algorithm this hasher runs.
  #[must_use]
  pub const fn algorithm(&self) -> Algorithm {
    match self {
      Self::Md5(_) => Algorithm::Md5,
      Self::Sha1(_) => Algorithm::Sha1,
      Self::Sha224(_) => Algorithm::Sha224,
      Self::Sha256(_) => Algorithm::Sha256,
      Self::Sha384(_) => Algorithm::Sha384,
      Self::Sha512(_) => Algorithm::Sha512,
      Self::Sha3_224(_) => Algorithm::Sha3_224,
      Self::Sha3_256(_) => Algorithm::Sha3_256,
      Self::Sha3_384(_) => Algorithm::Sha3_384,
      Self::Sha3_512(_) => Algorithm::Sha3_512,
    }
  }

  /// Absorb `data`.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    dispatch!(self, h => h.update(data));
  }

  /// Digest of everything absorbed so far; the hasher keeps streaming.
  #[must_use]
  pub fn finalize(&self) -> Output {
    dispatch!(self, h => Output::from_digest(h.finalize().as_ref()))
  }

  /// Return to the freshly constructed state for the same algorithm.
  pub fn reset(&mut self) {
    dispatch!(self, h => h.reset());
  }

  /// Feed every element of `iter`, in order. Returns the number of bytes hashed.
  pub fn update_iter<I>(&mut self, iter: I) -> u64
  where
    I: IntoIterator,
    I::Item: crate::ByteLike,
  {
    crate::adapter::feed_iter(iter, |chunk| self.update(chunk))
  }

  /// Read `reader` to EOF, hashing everything read. Returns the number of
  /// bytes hashed.
  #[cfg(feature = "std")]
  pub fn update_reader<R: std::io::Read>(&mut self, reader: R) -> std::io::Result<u64> {
    crate::adapter::feed_reader(reader, |chunk| self.update(chunk))
  }

  /// One-shot digest of `data` with `algorithm`.
  #[must_use]
  pub fn digest(algorithm: Algorithm, data: &[u8]) -> Output {
    let mut h = Self::new(algorithm);
    h.update(data);
    h.finalize()
  }
}

impl fmt::Debug for Hasher {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Hasher").field(&self.algorithm()).finish()
  }
}
