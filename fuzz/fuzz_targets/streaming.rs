//! Arbitrary update sequences, interleaved finalize calls, and resets must
//! never change a digest.

#![no_main]

use arbitrary::Arbitrary;
use hashes::{Algorithm, Hasher};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  algorithm: u8,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<u16>,
  /// Finalize after every chunk instead of only at the end
  peek: bool,
  /// Feed junk, reset, then the real data
  reset_first: bool,
}

fuzz_target!(|input: Input| {
  let alg = Algorithm::ALL[input.algorithm as usize % Algorithm::ALL.len()];
  let data = &input.data;
  let expected = Hasher::digest(alg, data);

  let mut hasher = Hasher::new(alg);
  if input.reset_first {
    hasher.update(b"discarded prefix");
    hasher.reset();
  }

  let mut offset = 0;
  let mut chunk_idx = 0;
  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] as usize % 512).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    if input.peek {
      assert_eq!(hasher.finalize(), Hasher::digest(alg, &data[..end]), "{alg} snapshot mismatch");
    }
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "{alg} streaming mismatch");
});
