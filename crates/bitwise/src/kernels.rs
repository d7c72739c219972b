//! Kernel sets: one function table per engine.
//!
//! A [`KernelSet`] bundles the seven kernels of one engine together with the
//! capabilities it requires. Dispatch picks a whole set at once, so every
//! operation in a process runs on the same engine.
//!
//! # Kernel Sets
//!
//! | Name | Tier | Requires |
//! |------|------|----------|
//! | `x86_64/sse2` | vector | SSE2 |
//! | `aarch64/neon` | vector | NEON |
//! | `word` | word | unaligned word access |
//! | `portable` | portable | nothing |

#![allow(unsafe_code)]

use backend::{KernelTier, dispatch::Candidate};
use platform::caps::{Caps, mem};

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
use crate::simd;
use crate::{
  len::{operative_len, operative_len_unary},
  op::BitOp,
  portable, word,
};

/// Raw binary kernel: `dst[i] = op(a[i], b[i])` for `i in 0..n`.
///
/// # Safety
///
/// `a` and `b` must be readable and `dst` writable for `n` bytes. `dst` may
/// alias `a` or `b` only at the same starting address.
pub type BinaryFn = unsafe fn(dst: *mut u8, a: *const u8, b: *const u8, n: usize);

/// Raw unary kernel: `dst[i] = !src[i]` for `i in 0..n`.
///
/// # Safety
///
/// `src` must be readable and `dst` writable for `n` bytes. `dst` may alias
/// `src` only at the same starting address.
pub type UnaryFn = unsafe fn(dst: *mut u8, src: *const u8, n: usize);

// ─────────────────────────────────────────────────────────────────────────────
// KernelSet
// ─────────────────────────────────────────────────────────────────────────────

/// The seven kernels of one engine.
///
/// Sets are only constructed inside this crate, and every kernel in a set that
/// is compiled for the current architecture can run on any CPU of that
/// architecture. The safe methods below rely on that.
#[derive(Clone, Copy, Debug)]
pub struct KernelSet {
  name: &'static str,
  tier: KernelTier,
  requires: Caps,
  xor: BinaryFn,
  and: BinaryFn,
  and_not: BinaryFn,
  nand: BinaryFn,
  or: BinaryFn,
  nor: BinaryFn,
  not: UnaryFn,
}

impl KernelSet {
  /// Kernel set name, e.g. `"x86_64/sse2"`.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Acceleration tier of this set.
  #[inline]
  #[must_use]
  pub const fn tier(&self) -> KernelTier {
    self.tier
  }

  /// Capabilities dispatch requires before selecting this set.
  #[inline]
  #[must_use]
  pub const fn requires(&self) -> Caps {
    self.requires
  }

  /// The raw kernel for `op`.
  #[inline]
  #[must_use]
  pub const fn binary_fn(&self, op: BitOp) -> BinaryFn {
    match op {
      BitOp::Xor => self.xor,
      BitOp::And => self.and,
      BitOp::AndNot => self.and_not,
      BitOp::Nand => self.nand,
      BitOp::Or => self.or,
      BitOp::Nor => self.nor,
    }
  }

  /// The raw NOT kernel.
  #[inline]
  #[must_use]
  pub const fn not_fn(&self) -> UnaryFn {
    self.not
  }

  /// `dst[i] = op(a[i], b[i])` over the operative length; returns it.
  #[inline]
  pub fn apply(&self, op: BitOp, dst: &mut [u8], a: &[u8], b: &[u8]) -> usize {
    run_binary(|| self.binary_fn(op), dst, a, b)
  }

  /// `dst[i] = op(dst[i], b[i])` over the operative length; returns it.
  #[inline]
  pub fn apply_assign(&self, op: BitOp, dst: &mut [u8], b: &[u8]) -> usize {
    run_binary_assign(|| self.binary_fn(op), dst, b)
  }

  /// `dst[i] = !src[i]` over the operative length; returns it.
  #[inline]
  pub fn not(&self, dst: &mut [u8], src: &[u8]) -> usize {
    run_not(|| self.not, dst, src)
  }

  /// `buf[i] = !buf[i]` for every byte; returns `buf.len()`.
  #[inline]
  pub fn not_assign(&self, buf: &mut [u8]) -> usize {
    run_not_assign(|| self.not, buf)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Safe entry points
// ─────────────────────────────────────────────────────────────────────────────
//
// `&mut [u8]` cannot overlap `&[u8]`, so the only aliasing that reaches a
// kernel is the same-address case built from a single `as_mut_ptr`.
//
// The kernel is fetched only once the operative length is known to be
// non-zero, so an empty call never resolves dispatch.

#[inline(always)]
pub(crate) fn run_binary(kernel: impl FnOnce() -> BinaryFn, dst: &mut [u8], a: &[u8], b: &[u8]) -> usize {
  let n = operative_len(dst.len(), a.len(), b.len());
  if n == 0 {
    return 0;
  }
  let kernel = kernel();
  // SAFETY: n is within every slice, `dst` is exclusively borrowed, and the
  // kernel belongs to a set that runs on this CPU (see `KernelSet`).
  unsafe { kernel(dst.as_mut_ptr(), a.as_ptr(), b.as_ptr(), n) };
  n
}

#[inline(always)]
pub(crate) fn run_binary_assign(kernel: impl FnOnce() -> BinaryFn, dst: &mut [u8], b: &[u8]) -> usize {
  let n = operative_len_unary(dst.len(), b.len());
  if n == 0 {
    return 0;
  }
  let kernel = kernel();
  let p = dst.as_mut_ptr();
  // SAFETY: `dst` and `a` are the same pointer, which the kernel contract
  // permits. n is within both slices.
  unsafe { kernel(p, p.cast_const(), b.as_ptr(), n) };
  n
}

#[inline(always)]
pub(crate) fn run_not(kernel: impl FnOnce() -> UnaryFn, dst: &mut [u8], src: &[u8]) -> usize {
  let n = operative_len_unary(dst.len(), src.len());
  if n == 0 {
    return 0;
  }
  let kernel = kernel();
  // SAFETY: n is within both slices and `dst` is exclusively borrowed.
  unsafe { kernel(dst.as_mut_ptr(), src.as_ptr(), n) };
  n
}

#[inline(always)]
pub(crate) fn run_not_assign(kernel: impl FnOnce() -> UnaryFn, buf: &mut [u8]) -> usize {
  let n = buf.len();
  if n == 0 {
    return 0;
  }
  let kernel = kernel();
  let p = buf.as_mut_ptr();
  // SAFETY: in-place through one pointer, n == buf.len().
  unsafe { kernel(p, p.cast_const(), n) };
  n
}

// ─────────────────────────────────────────────────────────────────────────────
// Kernel set tables
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! kernel_set {
  ($name:literal, $tier:expr, $requires:expr, $($module:ident)::+) => {
    KernelSet {
      name: $name,
      tier: $tier,
      requires: $requires,
      xor: $($module)::+::xor,
      and: $($module)::+::and,
      and_not: $($module)::+::and_not,
      nand: $($module)::+::nand,
      or: $($module)::+::or,
      nor: $($module)::+::nor,
      not: $($module)::+::not,
    }
  };
}

/// Byte-at-a-time kernels, always available.
pub(crate) const PORTABLE: KernelSet = kernel_set!("portable", KernelTier::Portable, Caps::NONE, portable);

/// Native-word kernels, selected when unaligned word access is cheap.
pub(crate) const WORD: KernelSet = kernel_set!("word", KernelTier::Word, mem::UNALIGNED, word);

/// SSE2 kernels.
#[cfg(target_arch = "x86_64")]
pub(crate) const X86_64_SSE2: KernelSet =
  kernel_set!("x86_64/sse2", KernelTier::Vector, platform::caps::x86::SSE2, simd::x86_64);

/// NEON kernels.
#[cfg(target_arch = "aarch64")]
pub(crate) const AARCH64_NEON: KernelSet =
  kernel_set!("aarch64/neon", KernelTier::Vector, platform::caps::aarch64::NEON, simd::aarch64);

macro_rules! candidate {
  ($set:expr) => {
    Candidate::new($set.name, $set.tier, $set.requires, &$set)
  };
}

/// Every kernel set compiled for this target, best first. The last entry is
/// always the portable set.
pub(crate) const CANDIDATES: &[Candidate<&'static KernelSet>] = &[
  #[cfg(target_arch = "x86_64")]
  candidate!(X86_64_SSE2),
  #[cfg(target_arch = "aarch64")]
  candidate!(AARCH64_NEON),
  candidate!(WORD),
  candidate!(PORTABLE),
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn candidate_metadata_matches_sets() {
    for c in CANDIDATES {
      assert_eq!(c.name, c.func.name());
      assert_eq!(c.tier, c.func.tier());
      assert_eq!(c.requires, c.func.requires());
    }
  }

  #[test]
  fn candidates_are_best_first_and_end_portable() {
    assert!(CANDIDATES.windows(2).all(|w| w[0].tier >= w[1].tier));
    let last = CANDIDATES.last().unwrap();
    assert_eq!(last.name, "portable");
    assert!(last.requires.is_empty());
  }

  #[test]
  fn empty_inputs_write_nothing() {
    let mut dst = [7u8; 4];
    for c in CANDIDATES {
      assert_eq!(c.func.apply(BitOp::Xor, &mut dst, &[], &[1, 2]), 0);
      assert_eq!(c.func.apply_assign(BitOp::Or, &mut dst, &[]), 0);
      assert_eq!(c.func.not(&mut dst, &[]), 0);
      assert_eq!(c.func.not_assign(&mut []), 0);
    }
    assert_eq!(dst, [7; 4]);
  }

  #[test]
  fn empty_inputs_never_fetch_a_kernel() {
    fn no_binary() -> BinaryFn {
      panic!("kernel fetched for an empty call")
    }
    fn no_unary() -> UnaryFn {
      panic!("kernel fetched for an empty call")
    }

    let mut dst = [7u8; 4];
    assert_eq!(run_binary(no_binary, &mut dst, &[], &[1, 2]), 0);
    assert_eq!(run_binary(no_binary, &mut [], &[1], &[2]), 0);
    assert_eq!(run_binary_assign(no_binary, &mut dst, &[]), 0);
    assert_eq!(run_not(no_unary, &mut dst, &[]), 0);
    assert_eq!(run_not_assign(no_unary, &mut []), 0);
    assert_eq!(dst, [7; 4]);
  }

  #[test]
  fn non_empty_inputs_fetch_the_kernel_once() {
    let mut fetched = 0;
    let mut dst = [0u8; 3];
    let n = run_binary(
      || {
        fetched += 1;
        PORTABLE.binary_fn(BitOp::Or)
      },
      &mut dst,
      &[1, 2, 4],
      &[8, 8, 8],
    );
    assert_eq!(n, 3);
    assert_eq!(fetched, 1);
    assert_eq!(dst, [9, 10, 12]);
  }
}
