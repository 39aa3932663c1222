use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hashes::{
  Algorithm, Digest as _, Hasher, Md5, Sha1, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Sha224, Sha256, Sha384, Sha512,
};

mod common;

/// One-shot digest of each input, ours against the RustCrypto crate.
macro_rules! bench_pair {
  ($group:expr, $len:expr, $data:expr, $name:literal, $ours:ty, $oracle:ident :: $oracle_ty:ident) => {{
    $group.bench_with_input(BenchmarkId::new(concat!($name, "/hashes"), $len), $data, |b, d| {
      b.iter(|| black_box(<$ours>::digest(black_box(d))))
    });
    $group.bench_with_input(BenchmarkId::new(concat!($name, "/", stringify!($oracle)), $len), $data, |b, d| {
      b.iter(|| {
        use $oracle::Digest as _;
        let out = $oracle::$oracle_ty::digest(black_box(d));
        black_box(out)
      })
    });
  }};
}

fn comp(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("hashes/comp");

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    bench_pair!(group, len, data, "md5", Md5, md5::Md5);
    bench_pair!(group, len, data, "sha1", Sha1, sha1::Sha1);
    bench_pair!(group, len, data, "sha224", Sha224, sha2::Sha224);
    bench_pair!(group, len, data, "sha256", Sha256, sha2::Sha256);
    bench_pair!(group, len, data, "sha384", Sha384, sha2::Sha384);
    bench_pair!(group, len, data, "sha512", Sha512, sha2::Sha512);
    bench_pair!(group, len, data, "sha3_224", Sha3_224, sha3::Sha3_224);
    bench_pair!(group, len, data, "sha3_256", Sha3_256, sha3::Sha3_256);
    bench_pair!(group, len, data, "sha3_384", Sha3_384, sha3::Sha3_384);
    bench_pair!(group, len, data, "sha3_512", Sha3_512, sha3::Sha3_512);
  }

  group.finish();
}

/// Cost of small `update` calls and of run-time dispatch through `Hasher`.
fn streaming(c: &mut Criterion) {
  let data = common::pseudo_random_bytes(64 * 1024, 0x5EED);
  let mut group = c.benchmark_group("hashes/streaming");
  common::set_throughput(&mut group, data.len());

  for chunk in [1usize, 13, 64, 4096] {
    group.bench_with_input(BenchmarkId::new("sha256/chunked", chunk), &chunk, |b, &chunk| {
      b.iter(|| {
        let mut h = Sha256::new();
        for piece in data.chunks(chunk) {
          h.update(black_box(piece));
        }
        black_box(h.finalize())
      })
    });
  }

  for alg in [Algorithm::Sha256, Algorithm::Sha3_256] {
    group.bench_with_input(BenchmarkId::new("dispatch", alg), &alg, |b, &alg| {
      b.iter(|| black_box(Hasher::digest(alg, black_box(&data))))
    });
  }

  group.finish();
}

criterion_group!(benches, comp, streaming);
criterion_main!(benches);
