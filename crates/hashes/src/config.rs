//! Adapter runtime configuration (buffer sizes + overrides).
//!
//! The compression cores have no knobs. The only tunables are the buffers
//! the byte adapters use to turn non-contiguous input into slices:
//! - the scratch buffer for iterators of byte-like items
//! - the read buffer for `std::io::Read` sources
//!
//! With `std`, environment overrides are read once and cached; values are
//! clamped to the supported range. `no_std` builds always use the defaults.

/// Capacity of the stack scratch array; `scratch_len` selects a prefix of it.
pub const SCRATCH_CAPACITY: usize = 1024;

const DEFAULT_SCRATCH_LEN: usize = 256;
const DEFAULT_READ_BUF_LEN: usize = 64 * 1024;

const MIN_READ_BUF_LEN: usize = 64;
const MAX_READ_BUF_LEN: usize = 1024 * 1024;

/// Effective adapter configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdapterConfig {
  /// Bytes gathered from an iterator before each `update` call.
  pub scratch_len: usize,
  /// Buffer size for reader adapters.
  pub read_buf_len: usize,
}

impl Default for AdapterConfig {
  #[inline]
  fn default() -> Self {
    Self {
      scratch_len: DEFAULT_SCRATCH_LEN,
      read_buf_len: DEFAULT_READ_BUF_LEN,
    }
  }
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  scratch_len: Option<usize>,
  read_buf_len: Option<usize>,
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn parse_usize(name: &str) -> Option<usize> {
    let value = std::env::var(name).ok()?;
    let value = value.trim();
    if value.is_empty() {
      return None;
    }
    match value.parse::<usize>() {
      Ok(v) => Some(v),
      Err(_) => {
        log::warn!("ignoring {name}={value:?}: not a byte count");
        None
      }
    }
  }

  let overrides = Overrides {
    scratch_len: parse_usize("HASHES_SCRATCH_LEN"),
    read_buf_len: parse_usize("HASHES_READ_BUF_LEN"),
  };
  log::debug!("adapter overrides from environment: {overrides:?}");
  overrides
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

impl AdapterConfig {
  /// Configuration after applying (cached) overrides.
  #[must_use]
  pub fn get() -> Self {
    Self::default().with_overrides(overrides())
  }

  #[must_use]
  fn with_overrides(self, o: Overrides) -> Self {
    Self {
      scratch_len: o.scratch_len.unwrap_or(self.scratch_len),
      read_buf_len: o.read_buf_len.unwrap_or(self.read_buf_len),
    }
    .clamped()
  }

  /// Clamp both sizes to the supported ranges.
  #[inline]
  #[must_use]
  pub fn clamped(self) -> Self {
    Self {
      scratch_len: self.scratch_len.clamp(1, SCRATCH_CAPACITY),
      read_buf_len: self.read_buf_len.clamp(MIN_READ_BUF_LEN, MAX_READ_BUF_LEN),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_are_within_bounds() {
    let cfg = AdapterConfig::default();
    assert_eq!(cfg, cfg.clamped());
    assert_eq!(cfg.scratch_len, 256);
    assert_eq!(cfg.read_buf_len, 64 * 1024);
  }

  #[test]
  fn overrides_are_clamped() {
    let cfg = AdapterConfig::default().with_overrides(Overrides {
      scratch_len: Some(0),
      read_buf_len: Some(usize::MAX),
    });
    assert_eq!(cfg.scratch_len, 1);
    assert_eq!(cfg.read_buf_len, MAX_READ_BUF_LEN);

    let cfg = AdapterConfig::default().with_overrides(Overrides {
      scratch_len: Some(4096),
      read_buf_len: Some(1),
    });
    assert_eq!(cfg.scratch_len, SCRATCH_CAPACITY);
    assert_eq!(cfg.read_buf_len, MIN_READ_BUF_LEN);
  }

  #[test]
  fn missing_overrides_keep_defaults() {
    let cfg = AdapterConfig::default().with_overrides(Overrides::default());
    assert_eq!(cfg, AdapterConfig::default());
  }
}
