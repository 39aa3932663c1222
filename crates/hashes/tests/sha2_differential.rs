use hashes::{Digest, Sha224, Sha256, Sha384, Sha512};
use proptest::prelude::*;

fn sha224_ref(data: &[u8]) -> [u8; 28] {
  use sha2::Digest as _;
  let out = sha2::Sha224::digest(data);
  let mut bytes = [0u8; 28];
  bytes.copy_from_slice(&out);
  bytes
}

fn sha256_ref(data: &[u8]) -> [u8; 32] {
  use sha2::Digest as _;
  let out = sha2::Sha256::digest(data);
  let mut bytes = [0u8; 32];
  bytes.copy_from_slice(&out);
  bytes
}

fn sha384_ref(data: &[u8]) -> [u8; 48] {
  use sha2::Digest as _;
  let out = sha2::Sha384::digest(data);
  let mut bytes = [0u8; 48];
  bytes.copy_from_slice(&out);
  bytes
}

fn sha512_ref(data: &[u8]) -> [u8; 64] {
  use sha2::Digest as _;
  let out = sha2::Sha512::digest(data);
  let mut bytes = [0u8; 64];
  bytes.copy_from_slice(&out);
  bytes
}

fn split_at_cuts<D: Digest>(data: &[u8], cuts: &[usize]) -> D::Output {
  let mut h = D::new();
  let mut start = 0usize;
  for &cut in cuts {
    let end = cut.clamp(start, data.len());
    h.update(&data[start..end]);
    start = end;
  }
  h.update(&data[start..]);
  h.finalize()
}

proptest! {
  #[test]
  fn sha256_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Sha256::digest(&data), sha256_ref(&data));
  }

  #[test]
  fn sha224_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Sha224::digest(&data), sha224_ref(&data));
  }

  #[test]
  fn sha512_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Sha512::digest(&data), sha512_ref(&data));
  }

  #[test]
  fn sha384_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Sha384::digest(&data), sha384_ref(&data));
  }

  #[test]
  fn sha256_random_cuts_match_sha2(
    data in proptest::collection::vec(any::<u8>(), 0..4096),
    mut cuts in proptest::collection::vec(0usize..4096, 0..16),
  ) {
    cuts.sort_unstable();
    prop_assert_eq!(split_at_cuts::<Sha256>(&data, &cuts), sha256_ref(&data));
    prop_assert_eq!(split_at_cuts::<Sha224>(&data, &cuts), sha224_ref(&data));
  }

  #[test]
  fn sha512_random_cuts_match_sha2(
    data in proptest::collection::vec(any::<u8>(), 0..4096),
    mut cuts in proptest::collection::vec(0usize..4096, 0..16),
  ) {
    cuts.sort_unstable();
    prop_assert_eq!(split_at_cuts::<Sha512>(&data, &cuts), sha512_ref(&data));
    prop_assert_eq!(split_at_cuts::<Sha384>(&data, &cuts), sha384_ref(&data));
  }
}

#[test]
fn padding_boundaries_match_sha2() {
  for len in 0..=300usize {
    let data: Vec<u8> = (0..len).map(|i| (i * 31 + 7) as u8).collect();
    assert_eq!(Sha256::digest(&data), sha256_ref(&data), "sha256 len={len}");
    assert_eq!(Sha512::digest(&data), sha512_ref(&data), "sha512 len={len}");
  }
}
