//! Errors for run-time algorithm selection.
//!
//! Streaming itself never fails; these only arise when an algorithm is chosen
//! from a width or a name that is not known until run time.

/// Error returned when an algorithm cannot be selected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum HashError {
  /// The family has no variant with this output width.
  #[error("{family} does not support a {bits}-bit output (expected 224, 256, 384, or 512)")]
  UnsupportedOutputBits {
    /// Family name, e.g. `"SHA-3"`.
    family: &'static str,
    /// Requested output width in bits.
    bits: usize,
  },

  /// The name does not match any supported algorithm.
  #[cfg(feature = "alloc")]
  #[error("unknown algorithm `{0}` (see `Algorithm::ALL` for supported names)")]
  UnknownAlgorithm(alloc::string::String),
}

/// Result alias for algorithm selection.
pub type Result<T> = core::result::Result<T, HashError>;
