//! Elementwise bitwise operations over byte buffers.
//!
//! XOR, AND, AND-NOT, NAND, OR, NOR and NOT, writing into a caller-supplied
//! destination. Every operation works on the common prefix of its buffers
//! (the *operative length*) and returns how many bytes it wrote. Bytes of the
//! destination past that point are never touched.
//!
//! # Quick Start
//!
//! ```
//! let a = [0xFFu8; 20];
//! let b = [0x55u8, 0xAA, 0xA5, 0x5A].repeat(5);
//! let mut dst = [0u8; 20];
//!
//! assert_eq!(bitwise::xor(&mut dst, &a, &b), 20);
//! assert_eq!(&dst[..4], &[0xAA, 0x55, 0x5A, 0xA5]);
//!
//! // In place: dst doubles as the first operand.
//! assert_eq!(bitwise::xor_assign(&mut dst, &b), 20);
//! assert_eq!(dst, a);
//! ```
//!
//! # Kernels
//!
//! Three engines implement every operation and produce bit-identical output:
//!
//! | Engine | Unit | Selected when |
//! |--------|------|---------------|
//! | vector | 64 / 16 / 1 bytes | SSE2 (x86_64) or NEON (aarch64) |
//! | word | `usize` + byte tail | target tolerates unaligned word access |
//! | portable | 1 byte | always |
//!
//! The engine is chosen once per process and cached. Set `BITWISE_FORCE` to
//! `portable`, `word` or `vector` to cap it (see [`config`]).
//!
//! # Introspection
//!
//! ```
//! println!("bitwise kernels: {}", bitwise::backend_name());
//! println!("{}", bitwise::DispatchInfo::current());
//! ```
//!
//! # Feature Flags
//!
//! - `std` (default): runtime CPU detection and environment configuration
//! - `alloc`: [`bench`] lookup API
//! - `log`: a debug record when the kernel set is resolved

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod config;
mod dispatch;
mod introspect;
pub mod kernels;
mod len;
mod op;
mod portable;
pub mod reference;
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
mod simd;
mod word;

#[cfg(feature = "alloc")]
pub mod bench;

pub use backend::{ForceMode, KernelTier};
pub use config::BitwiseConfig;
pub use dispatch::{active_tier, backend_name, kernel_set_for};
pub use introspect::DispatchInfo;
pub use kernels::KernelSet;
pub use len::{operative_len, operative_len_unary};
pub use op::BitOp;

use crate::kernels::{run_binary, run_binary_assign, run_not, run_not_assign};

// ─────────────────────────────────────────────────────────────────────────────
// Binary operations
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! binary_ops {
  ($($(#[$attr:meta])* $name:ident, $assign:ident => $op:expr;)+) => {$(
    $(#[$attr])*
    ///
    /// Returns the operative length `min(dst.len(), a.len(), b.len())`.
    #[inline]
    pub fn $name(dst: &mut [u8], a: &[u8], b: &[u8]) -> usize {
      run_binary(|| dispatch::active().binary_fn($op), dst, a, b)
    }

    $(#[$attr])*
    ///
    /// In place: `dst` is also the first operand. Returns
    /// `min(dst.len(), b.len())`.
    #[inline]
    pub fn $assign(dst: &mut [u8], b: &[u8]) -> usize {
      run_binary_assign(|| dispatch::active().binary_fn($op), dst, b)
    }
  )+};
}

binary_ops! {
  /// `dst[i] = a[i] ^ b[i]`.
  xor, xor_assign => BitOp::Xor;
  /// `dst[i] = a[i] & b[i]`.
  and, and_assign => BitOp::And;
  /// `dst[i] = a[i] & !b[i]`.
  and_not, and_not_assign => BitOp::AndNot;
  /// `dst[i] = !(a[i] & b[i])`.
  nand, nand_assign => BitOp::Nand;
  /// `dst[i] = a[i] | b[i]`.
  or, or_assign => BitOp::Or;
  /// `dst[i] = !(a[i] | b[i])`.
  nor, nor_assign => BitOp::Nor;
}

/// Apply any binary operation through the dispatched kernels.
///
/// ```
/// use bitwise::BitOp;
///
/// let mut dst = [0u8; 2];
/// assert_eq!(bitwise::apply(BitOp::Nand, &mut dst, &[0xFF, 0x0F], &[0xFF, 0xFF]), 2);
/// assert_eq!(dst, [0x00, 0xF0]);
/// ```
#[inline]
pub fn apply(op: BitOp, dst: &mut [u8], a: &[u8], b: &[u8]) -> usize {
  run_binary(|| dispatch::active().binary_fn(op), dst, a, b)
}

// ─────────────────────────────────────────────────────────────────────────────
// NOT
// ─────────────────────────────────────────────────────────────────────────────

/// `dst[i] = !src[i]`.
///
/// Returns the operative length `min(dst.len(), src.len())`.
#[inline]
pub fn not(dst: &mut [u8], src: &[u8]) -> usize {
  run_not(|| dispatch::active().not_fn(), dst, src)
}

/// `buf[i] = !buf[i]` for every byte. Returns `buf.len()`.
#[inline]
pub fn not_assign(buf: &mut [u8]) -> usize {
  run_not_assign(|| dispatch::active().not_fn(), buf)
}
