//! Portable byte-at-a-time kernels.
//!
//! Always available and the baseline every other tier is checked against.
//! Each output byte depends only on the input bytes at the same index, so
//! `dst == a` (or `dst == b`, or `dst == src`) is fine.

#![allow(unsafe_code)]

macro_rules! binary_kernels {
  ($($(#[$attr:meta])* $name:ident => |$x:ident, $y:ident| $body:expr;)+) => {$(
    $(#[$attr])*
    ///
    /// # Safety
    ///
    /// `a` and `b` must be readable and `dst` writable for `n` bytes. `dst`
    /// may alias an input only at the same address.
    pub unsafe fn $name(dst: *mut u8, a: *const u8, b: *const u8, n: usize) {
      for i in 0..n {
        // SAFETY: i < n, and the caller guarantees [0, n) is valid for every pointer.
        unsafe {
          let $x = a.add(i).read();
          let $y = b.add(i).read();
          dst.add(i).write($body);
        }
      }
    }
  )+};
}

binary_kernels! {
  /// `dst[i] = a[i] ^ b[i]`
  xor => |x, y| x ^ y;
  /// `dst[i] = a[i] & b[i]`
  and => |x, y| x & y;
  /// `dst[i] = a[i] & !b[i]`
  and_not => |x, y| x & !y;
  /// `dst[i] = !(a[i] & b[i])`
  nand => |x, y| !(x & y);
  /// `dst[i] = a[i] | b[i]`
  or => |x, y| x | y;
  /// `dst[i] = !(a[i] | b[i])`
  nor => |x, y| !(x | y);
}

/// `dst[i] = !src[i]`
///
/// # Safety
///
/// `src` must be readable and `dst` writable for `n` bytes. `dst` may alias
/// `src` only at the same address.
pub unsafe fn not(dst: *mut u8, src: *const u8, n: usize) {
  for i in 0..n {
    // SAFETY: i < n, and the caller guarantees [0, n) is valid for both pointers.
    unsafe { dst.add(i).write(!src.add(i).read()) };
  }
}
