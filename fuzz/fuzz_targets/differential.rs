#![no_main]

use hashes::Digest as _;
use libfuzzer_sys::fuzz_target;

macro_rules! check {
  ($input:expr, $a:expr, $b:expr, $ours:ty, $oracle:ident :: $oracle_ty:ident, $n:literal) => {{
    let ours = <$ours>::digest($input);
    let mut h = <$ours>::new();
    h.update($a);
    h.update($b);
    assert_eq!(ours, h.finalize());

    use $oracle::Digest as _;
    let ref_out = $oracle::$oracle_ty::digest($input);
    let mut expected = [0u8; $n];
    expected.copy_from_slice(&ref_out);
    assert_eq!(ours, expected, stringify!($ours));
  }};
}

fn split_point(input: &[u8]) -> usize {
  if input.is_empty() {
    return 0;
  }
  (input[0] as usize) % (input.len() + 1)
}

fuzz_target!(|input: &[u8]| {
  let (a, b) = input.split_at(split_point(input));

  check!(input, a, b, hashes::Md5, md5::Md5, 16);
  check!(input, a, b, hashes::Sha1, sha1::Sha1, 20);
  check!(input, a, b, hashes::Sha224, sha2::Sha224, 28);
  check!(input, a, b, hashes::Sha256, sha2::Sha256, 32);
  check!(input, a, b, hashes::Sha384, sha2::Sha384, 48);
  check!(input, a, b, hashes::Sha512, sha2::Sha512, 64);
  check!(input, a, b, hashes::Sha3_224, sha3::Sha3_224, 28);
  check!(input, a, b, hashes::Sha3_256, sha3::Sha3_256, 32);
  check!(input, a, b, hashes::Sha3_384, sha3::Sha3_384, 48);
  check!(input, a, b, hashes::Sha3_512, sha3::Sha3_512, 64);
});
