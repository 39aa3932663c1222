//! I/O adapters for digests.
//!
//! [`DigestReader`] and [`DigestWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] and hash exactly the bytes that were transferred, so
//! short reads and short writes never skew the digest.
//!
//! # Example
//!
//! ```rust
//! use std::io::{Read, Write};
//!
//! use hashes::{Digest, Sha256};
//!
//! let mut reader = Sha256::reader(&b"hello world"[..]);
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(reader.digest(), Sha256::digest(b"hello world"));
//!
//! let mut writer = Sha256::writer(Vec::new());
//! writer.write_all(&contents)?;
//! let (copy, digest) = writer.into_parts();
//! assert_eq!(copy, contents);
//! assert_eq!(digest, reader.digest());
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{DigestReader, DigestWriter};
