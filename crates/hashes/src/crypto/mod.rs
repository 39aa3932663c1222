//! Streaming hash functions.
//!
//! MD5 and SHA-1 are kept for interoperability with existing checksums and
//! formats; prefer SHA-2 or SHA-3 for anything security-relevant.

mod keccak;
pub mod md5;
pub mod sha1;
mod sha2;
pub mod sha256;
pub mod sha3;
pub mod sha512;

pub use md5::Md5;
pub use sha1::Sha1;
pub use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};
pub use sha256::{Sha224, Sha256};
pub use sha512::{Sha384, Sha512};
