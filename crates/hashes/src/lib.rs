//! Streaming message digests: MD5, SHA-1, SHA-2, and SHA-3.
//!
//! Every hasher implements [`Digest`]: feed bytes in any chunking with
//! `update`, read the digest with `finalize` (which leaves the hasher usable),
//! and start over with `reset`. The crate is `no_std` compatible; the `alloc`
//! and `std` features (on by default) add hex rendering, name parsing, and
//! `std::io` adapters.
//!
//! ```rust
//! use hashes::{Digest, Sha256};
//!
//! let mut h = Sha256::new();
//! h.update(b"hello ");
//! h.update(b"world");
//! assert_eq!(
//!   h.finalize_hex(),
//!   "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
//! );
//! ```
//!
//! # Modules
//!
//! - [`crypto`] - The hash functions themselves.
//! - [`config`] - Buffer sizes used by the byte-source adapters.
//! - [`io`] - Reader/writer wrappers that hash what flows through them (`std`).
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod adapter;
mod algorithm;
mod block;
pub mod config;
pub mod crypto;
mod error;
#[cfg(feature = "std")]
pub mod io;
mod util;

pub use adapter::{ByteLike, UpdateExt};
pub use algorithm::{Algorithm, Hasher, MAX_OUTPUT_SIZE, Output};
pub use crypto::{Md5, Sha1, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Sha224, Sha256, Sha384, Sha512};
pub use error::{HashError, Result};
pub use traits::Digest;
