//! x86_64 SSE2 kernels.
//!
//! Buffers are walked from the end, addressing relative to the remaining
//! count: 64-byte steps (four 128-bit lanes), then 16-byte steps, then single
//! bytes. All loads and stores are unaligned.
//!
//! `pandn` computes `!first & second`, so AND-NOT issues it with the operands
//! swapped. NAND, NOR and NOT are built from `pandn` against all-ones.

#![allow(unsafe_code)]

use core::arch::x86_64::*;

use super::{BIG, HUGE};

#[inline(always)]
unsafe fn loadu(src: *const u8) -> __m128i {
  unsafe { _mm_loadu_si128(src.cast()) }
}

#[inline(always)]
unsafe fn storeu(src: __m128i, dest: *mut u8) {
  unsafe { _mm_storeu_si128(dest.cast(), src) }
}

#[inline(always)]
unsafe fn ones() -> __m128i {
  unsafe { _mm_set1_epi8(-1) }
}

#[inline(always)]
unsafe fn xor_lane(a: __m128i, b: __m128i) -> __m128i {
  unsafe { _mm_xor_si128(a, b) }
}

#[inline(always)]
unsafe fn and_lane(a: __m128i, b: __m128i) -> __m128i {
  unsafe { _mm_and_si128(a, b) }
}

#[inline(always)]
unsafe fn and_not_lane(a: __m128i, b: __m128i) -> __m128i {
  unsafe { _mm_andnot_si128(b, a) }
}

#[inline(always)]
unsafe fn nand_lane(a: __m128i, b: __m128i) -> __m128i {
  unsafe { _mm_andnot_si128(_mm_and_si128(a, b), ones()) }
}

#[inline(always)]
unsafe fn or_lane(a: __m128i, b: __m128i) -> __m128i {
  unsafe { _mm_or_si128(a, b) }
}

#[inline(always)]
unsafe fn nor_lane(a: __m128i, b: __m128i) -> __m128i {
  unsafe { _mm_andnot_si128(_mm_or_si128(a, b), ones()) }
}

#[inline(always)]
unsafe fn not_lane(a: __m128i) -> __m128i {
  unsafe { _mm_andnot_si128(a, ones()) }
}

macro_rules! binary_kernels {
  ($($(#[$attr:meta])* $name:ident => $lane:ident, |$x:ident, $y:ident| $byte:expr;)+) => {$(
    $(#[$attr])*
    ///
    /// # Safety
    ///
    /// `a` and `b` must be readable and `dst` writable for `n` bytes. `dst`
    /// may alias an input only at the same address.
    #[target_feature(enable = "sse2")]
    pub unsafe fn $name(dst: *mut u8, a: *const u8, b: *const u8, n: usize) {
      let mut rem = n;
      // SAFETY: every offset below is < rem <= n.
      unsafe {
        while rem >= HUGE {
          let a0 = loadu(a.add(rem - 16));
          let b0 = loadu(b.add(rem - 16));
          let a1 = loadu(a.add(rem - 32));
          let b1 = loadu(b.add(rem - 32));
          let a2 = loadu(a.add(rem - 48));
          let b2 = loadu(b.add(rem - 48));
          let a3 = loadu(a.add(rem - 64));
          let b3 = loadu(b.add(rem - 64));
          storeu($lane(a0, b0), dst.add(rem - 16));
          storeu($lane(a1, b1), dst.add(rem - 32));
          storeu($lane(a2, b2), dst.add(rem - 48));
          storeu($lane(a3, b3), dst.add(rem - 64));
          rem -= HUGE;
        }
        while rem >= BIG {
          rem -= BIG;
          storeu($lane(loadu(a.add(rem)), loadu(b.add(rem))), dst.add(rem));
        }
        while rem > 0 {
          rem -= 1;
          let $x = a.add(rem).read();
          let $y = b.add(rem).read();
          dst.add(rem).write($byte);
        }
      }
    }
  )+};
}

binary_kernels! {
  /// SSE2 `a ^ b`.
  xor => xor_lane, |x, y| x ^ y;
  /// SSE2 `a & b`.
  and => and_lane, |x, y| x & y;
  /// SSE2 `a & !b`.
  and_not => and_not_lane, |x, y| x & !y;
  /// SSE2 `!(a & b)`.
  nand => nand_lane, |x, y| !(x & y);
  /// SSE2 `a | b`.
  or => or_lane, |x, y| x | y;
  /// SSE2 `!(a | b)`.
  nor => nor_lane, |x, y| !(x | y);
}

/// SSE2 `!src`.
///
/// # Safety
///
/// `src` must be readable and `dst` writable for `n` bytes. `dst` may alias
/// `src` only at the same address.
#[target_feature(enable = "sse2")]
pub unsafe fn not(dst: *mut u8, src: *const u8, n: usize) {
  let mut rem = n;
  // SAFETY: every offset below is < rem <= n.
  unsafe {
    while rem >= HUGE {
      let s0 = loadu(src.add(rem - 16));
      let s1 = loadu(src.add(rem - 32));
      let s2 = loadu(src.add(rem - 48));
      let s3 = loadu(src.add(rem - 64));
      storeu(not_lane(s0), dst.add(rem - 16));
      storeu(not_lane(s1), dst.add(rem - 32));
      storeu(not_lane(s2), dst.add(rem - 48));
      storeu(not_lane(s3), dst.add(rem - 64));
      rem -= HUGE;
    }
    while rem >= BIG {
      rem -= BIG;
      storeu(not_lane(loadu(src.add(rem))), dst.add(rem));
    }
    while rem > 0 {
      rem -= 1;
      dst.add(rem).write(!src.add(rem).read());
    }
  }
}
