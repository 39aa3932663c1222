//! SHA-3 (FIPS 202): SHA3-224, SHA3-256, SHA3-384, SHA3-512.
//!
//! Portable, `no_std`, pure Rust Keccak-f[1600] sponge with the `0x06`
//! domain separator. Extendable-output functions are out of scope.

use traits::Digest;

use super::keccak::KeccakCore;

/// SHA-3 domain separation suffix (`01` plus the first pad bit).
const DOMAIN: u8 = 0x06;

/// Sponge rate in bytes for a SHA-3 digest of `bits` output bits.
///
/// The capacity is twice the output size, so the rate is
/// `(1600 - 2 * bits) / 8`: 144, 136, 104, or 72 bytes. Evaluated at compile
/// time; any other width fails the build.
#[must_use]
pub const fn rate_bytes(bits: usize) -> usize {
  match bits {
    224 | 256 | 384 | 512 => (1600 - 2 * bits) / 8,
    _ => panic!("SHA-3 output size must be 224, 256, 384, or 512 bits"),
  }
}

macro_rules! sha3_digest {
  ($(#[$meta:meta])* $name:ident, $bits:expr) => {
    $(#[$meta])*
    #[derive(Clone, Default)]
    pub struct $name {
      core: KeccakCore<{ rate_bytes($bits) }>,
    }

    impl Digest for $name {
      const OUTPUT_SIZE: usize = $bits / 8;
      const BLOCK_LEN: usize = rate_bytes($bits);
      type Output = [u8; $bits / 8];

      #[inline]
      fn new() -> Self {
        Self::default()
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.core.update(data);
      }

      #[inline]
      fn finalize(&self) -> Self::Output {
        let mut out = [0u8; $bits / 8];
        self.core.finalize_into(DOMAIN, &mut out);
        out
      }

      #[inline]
      fn reset(&mut self) {
        *self = Self::default();
      }
    }
  };
}

sha3_digest!(
  /// SHA3-224 (rate 144 bytes).
  Sha3_224,
  224
);
sha3_digest!(
  /// SHA3-256 (rate 136 bytes).
  Sha3_256,
  256
);
sha3_digest!(
  /// SHA3-384 (rate 104 bytes).
  Sha3_384,
  384
);
sha3_digest!(
  /// SHA3-512 (rate 72 bytes).
  Sha3_512,
  512
);
