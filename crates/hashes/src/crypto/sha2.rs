//! Machinery shared by the SHA-2 family (FIPS 180-4).
//!
//! SHA-256 and SHA-512 run the same 8-register compression with different
//! word widths, round counts, constants, and rotation amounts. The truncated
//! variants (SHA-224, SHA-384) reuse their parent's engine with a different
//! IV and a shorter output.
//!
//! Everything here is `macro_rules!` so each width is monomorphic and the
//! word operations compile down to native rotates.

/// Defines a SHA-2 engine: state words, block buffer, length counter, and
/// the compression function for one word width.
macro_rules! sha2_engine {
  (
    $engine:ident {
      word: $word:ty,
      counter: $counter:ty,
      block: $block:expr,
      k: $k:expr,
      big_sigma0: ($a0:expr, $a1:expr, $a2:expr),
      big_sigma1: ($b0:expr, $b1:expr, $b2:expr),
      small_sigma0: ($c0:expr, $c1:expr, >> $c2:expr),
      small_sigma1: ($d0:expr, $d1:expr, >> $d2:expr),
      store: $store:ident $(,)?
    }
  ) => {
    #[derive(Clone)]
    pub(crate) struct $engine {
      state: [$word; 8],
      buffer: $crate::block::BlockBuffer<{ $block }>,
      total_len: $counter,
    }

    impl $engine {
      pub(crate) const BLOCK_LEN: usize = $block;

      #[inline]
      pub(crate) const fn new(iv: [$word; 8]) -> Self {
        Self {
          state: iv,
          buffer: $crate::block::BlockBuffer::new(),
          total_len: 0,
        }
      }

      #[inline(always)]
      fn compress_block(state: &mut [$word; 8], block: &[u8; $block]) {
        const WORD: usize = core::mem::size_of::<$word>();

        let mut w = [0 as $word; 16];
        let (chunks, _) = block.as_chunks::<WORD>();
        for (wi, c) in w.iter_mut().zip(chunks) {
          *wi = <$word>::from_be_bytes(*c);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

        for (t, &k) in $k.iter().enumerate() {
          // 16-word ring: W[t-2], W[t-7], W[t-15], W[t-16] sit at t+14, t+9, t+1, t (mod 16).
          let wt = if t < 16 {
            w[t]
          } else {
            let x = w[(t + 1) & 15];
            let s0 = x.rotate_right($c0) ^ x.rotate_right($c1) ^ (x >> $c2);
            let y = w[(t + 14) & 15];
            let s1 = y.rotate_right($d0) ^ y.rotate_right($d1) ^ (y >> $d2);
            let next = w[t & 15].wrapping_add(s0).wrapping_add(w[(t + 9) & 15]).wrapping_add(s1);
            w[t & 15] = next;
            next
          };

          let sigma1 = e.rotate_right($b0) ^ e.rotate_right($b1) ^ e.rotate_right($b2);
          let ch = (e & f) ^ (!e & g);
          let t1 = h
            .wrapping_add(sigma1)
            .wrapping_add(ch)
            .wrapping_add(k)
            .wrapping_add(wt);
          let sigma0 = a.rotate_right($a0) ^ a.rotate_right($a1) ^ a.rotate_right($a2);
          let maj = (a & b) ^ (a & c) ^ (b & c);
          let t2 = sigma0.wrapping_add(maj);

          h = g;
          g = f;
          f = e;
          e = d.wrapping_add(t1);
          d = c;
          c = b;
          b = a;
          a = t1.wrapping_add(t2);
        }

        for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
          *s = s.wrapping_add(v);
        }
      }

      #[inline]
      pub(crate) fn update(&mut self, data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as $counter);
        let state = &mut self.state;
        self.buffer.feed(data, |block| Self::compress_block(state, block));
      }

      /// Pad a copy of the current state and write the leading `out.len()`
      /// bytes of the big-endian digest.
      #[inline]
      pub(crate) fn finalize_into(&self, out: &mut [u8]) {
        let mut state = self.state;
        let bit_len = self.total_len.wrapping_mul(8);
        self
          .buffer
          .pad_md(bit_len.to_be_bytes(), |block| Self::compress_block(&mut state, block));
        $store(&state, out);
      }
    }
  };
}

/// Defines a public SHA-2 hasher on top of an engine from [`sha2_engine!`].
macro_rules! sha2_digest {
  ($(#[$meta:meta])* $name:ident, $engine:ident, $iv:expr, $out:expr) => {
    $(#[$meta])*
    #[derive(Clone)]
    pub struct $name {
      engine: $engine,
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self {
          engine: $engine::new($iv),
        }
      }
    }

    impl traits::Digest for $name {
      const OUTPUT_SIZE: usize = $out;
      const BLOCK_LEN: usize = $engine::BLOCK_LEN;
      type Output = [u8; $out];

      #[inline]
      fn new() -> Self {
        Self::default()
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.engine.update(data);
      }

      #[inline]
      fn finalize(&self) -> Self::Output {
        let mut out = [0u8; $out];
        self.engine.finalize_into(&mut out);
        out
      }

      #[inline]
      fn reset(&mut self) {
        *self = Self::default();
      }
    }
  };
}

pub(crate) use {sha2_digest, sha2_engine};
