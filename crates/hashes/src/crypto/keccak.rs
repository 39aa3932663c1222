//! Keccak-f[1600] sponge core (internal).
//!
//! Only the fixed-output absorb/pad/squeeze path used by the SHA-3 digests
//! lives here; the rate is a const generic so each variant gets its own
//! monomorphic block buffer.

#![allow(clippy::indexing_slicing)] // Keccak state is fixed-size; table indices are < 25

use crate::{block::BlockBuffer, util::store_le64};

const KECCAKF_ROUNDS: usize = 24;

// Round constants.
const RC: [u64; KECCAKF_ROUNDS] = [
  0x0000_0000_0000_0001,
  0x0000_0000_0000_8082,
  0x8000_0000_0000_808a,
  0x8000_0000_8000_8000,
  0x0000_0000_0000_808b,
  0x0000_0000_8000_0001,
  0x8000_0000_8000_8081,
  0x8000_0000_0000_8009,
  0x0000_0000_0000_008a,
  0x0000_0000_0000_0088,
  0x0000_0000_8000_8009,
  0x0000_0000_8000_000a,
  0x0000_0000_8000_808b,
  0x8000_0000_0000_008b,
  0x8000_0000_0000_8089,
  0x8000_0000_0000_8003,
  0x8000_0000_0000_8002,
  0x8000_0000_0000_0080,
  0x0000_0000_0000_800a,
  0x8000_0000_8000_000a,
  0x8000_0000_8000_8081,
  0x8000_0000_0000_8080,
  0x0000_0000_8000_0001,
  0x8000_0000_8000_8008,
];

// ρ offsets, in the order lanes are visited by the π walk below.
const ROTC: [u32; 24] = [
  1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

// π walk: lane 1 moves to PILN[0], whose previous value moves to PILN[1], and so on.
const PILN: [usize; 24] = [
  10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// The Keccak-f[1600] permutation: 24 rounds of θ, ρ+π, χ, ι.
#[inline]
pub(crate) fn keccakf(st: &mut [u64; 25]) {
  for &rc in &RC {
    // θ
    let mut bc = [0u64; 5];
    for (x, c) in bc.iter_mut().enumerate() {
      *c = st[x] ^ st[x + 5] ^ st[x + 10] ^ st[x + 15] ^ st[x + 20];
    }
    for x in 0..5 {
      let d = bc[(x + 4) % 5] ^ bc[(x + 1) % 5].rotate_left(1);
      for y in (0..25).step_by(5) {
        st[y + x] ^= d;
      }
    }

    // ρ + π in a single traversal of the lane cycle.
    let mut carry = st[1];
    for (&dst, &rot) in PILN.iter().zip(&ROTC) {
      let next = st[dst];
      st[dst] = carry.rotate_left(rot);
      carry = next;
    }

    // χ
    for y in (0..25).step_by(5) {
      let row = [st[y], st[y + 1], st[y + 2], st[y + 3], st[y + 4]];
      for x in 0..5 {
        st[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
      }
    }

    // ι
    st[0] ^= rc;
  }
}

/// Sponge over Keccak-f[1600] with a `RATE`-byte rate.
#[derive(Clone)]
pub(crate) struct KeccakCore<const RATE: usize> {
  state: [u64; 25],
  buffer: BlockBuffer<RATE>,
}

impl<const RATE: usize> Default for KeccakCore<RATE> {
  #[inline]
  fn default() -> Self {
    Self {
      state: [0u64; 25],
      buffer: BlockBuffer::new(),
    }
  }
}

impl<const RATE: usize> KeccakCore<RATE> {
  #[inline(always)]
  fn absorb_block(state: &mut [u64; 25], block: &[u8; RATE]) {
    debug_assert_eq!(RATE % 8, 0);
    let (lanes, _) = block.as_chunks::<8>();
    for (lane, bytes) in state.iter_mut().zip(lanes) {
      *lane ^= u64::from_le_bytes(*bytes);
    }
    keccakf(state);
  }

  #[inline]
  pub(crate) fn update(&mut self, data: &[u8]) {
    let state = &mut self.state;
    self.buffer.feed(data, |block| Self::absorb_block(state, block));
  }

  /// Pad a copy of the sponge with domain byte `ds` and squeeze `out.len()`
  /// bytes. Fixed-size digests never exceed the rate, so one squeeze suffices.
  #[inline]
  pub(crate) fn finalize_into(&self, ds: u8, out: &mut [u8]) {
    debug_assert!(out.len() <= RATE);
    let mut state = self.state;
    self.buffer.pad_sponge(ds, |block| Self::absorb_block(&mut state, block));
    store_le64(&state, out);
  }
}
