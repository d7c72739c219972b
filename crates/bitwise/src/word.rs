//! Native-word kernels.
//!
//! The bulk of the buffer is processed `size_of::<usize>()` bytes at a time,
//! the remainder byte-by-byte through the portable kernels. Dispatch only
//! selects this tier when the target tolerates unaligned word access
//! ([`platform::caps::mem::UNALIGNED`]); the code itself is correct anywhere.

#![allow(unsafe_code)]

use crate::portable;

/// Bytes per native word.
pub const WORD: usize = core::mem::size_of::<usize>();

// ─────────────────────────────────────────────────────────────────────────────
// Unaligned access
// ─────────────────────────────────────────────────────────────────────────────
//
// The only place raw bytes are reinterpreted as words. Native byte order, no
// transform: elementwise bit operations do not care about endianness.

/// Load one native word from an arbitrarily aligned address.
///
/// # Safety
///
/// `src` must be valid for reads of [`WORD`] bytes.
#[inline(always)]
unsafe fn load(src: *const u8) -> usize {
  // SAFETY: caller guarantees WORD readable bytes; read_unaligned has no alignment requirement.
  unsafe { src.cast::<usize>().read_unaligned() }
}

/// Store one native word to an arbitrarily aligned address.
///
/// # Safety
///
/// `dst` must be valid for writes of [`WORD`] bytes.
#[inline(always)]
unsafe fn store(dst: *mut u8, value: usize) {
  // SAFETY: caller guarantees WORD writable bytes; write_unaligned has no alignment requirement.
  unsafe { dst.cast::<usize>().write_unaligned(value) }
}

// ─────────────────────────────────────────────────────────────────────────────
// Kernels
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! binary_kernels {
  ($($(#[$attr:meta])* $name:ident => |$x:ident, $y:ident| $body:expr;)+) => {$(
    $(#[$attr])*
    ///
    /// # Safety
    ///
    /// `a` and `b` must be readable and `dst` writable for `n` bytes. `dst`
    /// may alias an input only at the same address.
    pub unsafe fn $name(dst: *mut u8, a: *const u8, b: *const u8, n: usize) {
      let words = n / WORD;
      let tail = words * WORD;
      for i in 0..words {
        let off = i * WORD;
        // SAFETY: off + WORD <= tail <= n, within the caller's valid range.
        unsafe {
          let $x = load(a.add(off));
          let $y = load(b.add(off));
          store(dst.add(off), $body);
        }
      }
      // SAFETY: [tail, n) lies inside [0, n).
      unsafe { portable::$name(dst.add(tail), a.add(tail), b.add(tail), n - tail) };
    }
  )+};
}

binary_kernels! {
  /// Word-at-a-time `a ^ b`.
  xor => |x, y| x ^ y;
  /// Word-at-a-time `a & b`.
  and => |x, y| x & y;
  /// Word-at-a-time `a & !b`.
  and_not => |x, y| x & !y;
  /// Word-at-a-time `!(a & b)`.
  nand => |x, y| !(x & y);
  /// Word-at-a-time `a | b`.
  or => |x, y| x | y;
  /// Word-at-a-time `!(a | b)`.
  nor => |x, y| !(x | y);
}

/// Word-at-a-time `!src`.
///
/// # Safety
///
/// `src` must be readable and `dst` writable for `n` bytes. `dst` may alias
/// `src` only at the same address.
pub unsafe fn not(dst: *mut u8, src: *const u8, n: usize) {
  let words = n / WORD;
  let tail = words * WORD;
  for i in 0..words {
    let off = i * WORD;
    // SAFETY: off + WORD <= tail <= n.
    unsafe { store(dst.add(off), !load(src.add(off))) };
  }
  // SAFETY: [tail, n) lies inside [0, n).
  unsafe { portable::not(dst.add(tail), src.add(tail), n - tail) };
}
