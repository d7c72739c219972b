//! aarch64 NEON kernels.
//!
//! Same 64/16/1 tier walk as the x86_64 kernels. `vbicq_u8(a, b)` already
//! computes `a & !b`, so AND-NOT needs no operand swap.

#![allow(unsafe_code)]

use core::arch::aarch64::*;

use super::{BIG, HUGE};

#[inline(always)]
unsafe fn loadu(src: *const u8) -> uint8x16_t {
  unsafe { vld1q_u8(src) }
}

#[inline(always)]
unsafe fn storeu(src: uint8x16_t, dest: *mut u8) {
  unsafe { vst1q_u8(dest, src) }
}

#[inline(always)]
unsafe fn xor_lane(a: uint8x16_t, b: uint8x16_t) -> uint8x16_t {
  unsafe { veorq_u8(a, b) }
}

#[inline(always)]
unsafe fn and_lane(a: uint8x16_t, b: uint8x16_t) -> uint8x16_t {
  unsafe { vandq_u8(a, b) }
}

#[inline(always)]
unsafe fn and_not_lane(a: uint8x16_t, b: uint8x16_t) -> uint8x16_t {
  unsafe { vbicq_u8(a, b) }
}

#[inline(always)]
unsafe fn nand_lane(a: uint8x16_t, b: uint8x16_t) -> uint8x16_t {
  unsafe { vmvnq_u8(vandq_u8(a, b)) }
}

#[inline(always)]
unsafe fn or_lane(a: uint8x16_t, b: uint8x16_t) -> uint8x16_t {
  unsafe { vorrq_u8(a, b) }
}

#[inline(always)]
unsafe fn nor_lane(a: uint8x16_t, b: uint8x16_t) -> uint8x16_t {
  unsafe { vmvnq_u8(vorrq_u8(a, b)) }
}

#[inline(always)]
unsafe fn not_lane(a: uint8x16_t) -> uint8x16_t {
  unsafe { vmvnq_u8(a) }
}

macro_rules! binary_kernels {
  ($($(#[$attr:meta])* $name:ident => $lane:ident, |$x:ident, $y:ident| $byte:expr;)+) => {$(
    $(#[$attr])*
    ///
    /// # Safety
    ///
    /// `a` and `b` must be readable and `dst` writable for `n` bytes. `dst`
    /// may alias an input only at the same address.
    #[target_feature(enable = "neon")]
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
  /// NEON `a ^ b`.
  xor => xor_lane, |x, y| x ^ y;
  /// NEON `a & b`.
  and => and_lane, |x, y| x & y;
  /// NEON `a & !b`.
  and_not => and_not_lane, |x, y| x & !y;
  /// NEON `!(a & b)`.
  nand => nand_lane, |x, y| !(x & y);
  /// NEON `a | b`.
  or => or_lane, |x, y| x | y;
  /// NEON `!(a | b)`.
  nor => nor_lane, |x, y| !(x | y);
}

/// NEON `!src`.
///
/// # Safety
///
/// `src` must be readable and `dst` writable for `n` bytes. `dst` may alias
/// `src` only at the same address.
#[target_feature(enable = "neon")]
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
