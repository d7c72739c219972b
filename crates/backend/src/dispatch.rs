//! Kernel dispatch: selection from an ordered candidate list.
//!
//! - [`Candidate`]: A kernel with tier and capability requirements
//! - [`Selected`]: The result of kernel selection
//! - [`select`]: Choose the best kernel from a candidate list
//! - [`select_capped`]: Same, but never above a given tier
//!
//! # Design
//!
//! Candidates are listed best-first and the last entry must be a portable
//! fallback with `requires = Caps::NONE`. Selection is a linear scan, done
//! once by the kernel crate and cached (see [`OnceCache`](crate::OnceCache)).
//! Nothing here runs on the per-call path.

use platform::Caps;

use crate::tier::KernelTier;

// ─────────────────────────────────────────────────────────────────────────────
// Core Types
// ─────────────────────────────────────────────────────────────────────────────

/// A candidate kernel with capability requirements.
///
/// Candidates are ordered from best to worst. The dispatcher selects the
/// first candidate whose requirements are satisfied by the detected capabilities.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<F> {
  /// Human-readable name for diagnostics (e.g., "x86_64/sse2").
  pub name: &'static str,
  /// Acceleration tier of this kernel.
  pub tier: KernelTier,
  /// Required CPU capabilities. Must be a subset of detected caps.
  pub requires: Caps,
  /// The kernel (usually a function pointer or a `&'static` table of them).
  pub func: F,
}

impl<F> Candidate<F> {
  /// Create a new candidate.
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, tier: KernelTier, requires: Caps, func: F) -> Self {
    Self {
      name,
      tier,
      requires,
      func,
    }
  }
}

/// The result of kernel selection.
#[derive(Clone, Copy, Debug)]
pub struct Selected<F> {
  /// Human-readable name of the selected kernel.
  pub name: &'static str,
  /// Tier of the selected kernel.
  pub tier: KernelTier,
  /// The selected kernel.
  pub func: F,
}

impl<F> Selected<F> {
  /// Create a new selected result.
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, tier: KernelTier, func: F) -> Self {
    Self { name, tier, func }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Select the best kernel from a candidate list.
///
/// Returns the first candidate whose `requires` is satisfied by `caps`.
///
/// # Panics
///
/// Panics if `candidates` is empty or no candidate matches. The last
/// candidate should always have `requires = Caps::NONE` as a fallback.
#[inline]
#[must_use]
pub fn select<F: Copy>(caps: Caps, candidates: &[Candidate<F>]) -> Selected<F> {
  select_capped(caps, KernelTier::Vector, candidates)
}

/// Select the best kernel whose tier does not exceed `ceiling`.
///
/// Used to honor force modes: forcing the word tier on a SIMD machine skips
/// the vector candidates but still respects capability requirements.
///
/// # Panics
///
/// Panics if no candidate at or below `ceiling` matches `caps`.
#[inline]
#[must_use]
pub fn select_capped<F: Copy>(caps: Caps, ceiling: KernelTier, candidates: &[Candidate<F>]) -> Selected<F> {
  for candidate in candidates {
    if candidate.tier <= ceiling && caps.has(candidate.requires) {
      return Selected::new(candidate.name, candidate.tier, candidate.func);
    }
  }

  panic!("no matching kernel found: candidate list must end with a portable fallback");
}

/// Build a candidate slice with concise syntax.
///
/// ```
/// use backend::{KernelTier, candidates, dispatch::Candidate};
/// use platform::caps::{Caps, mem};
///
/// let list: &[Candidate<u8>] = candidates![
///   "word" => KernelTier::Word, mem::UNALIGNED => 1,
///   "portable" => KernelTier::Portable, Caps::NONE => 0,
/// ];
/// assert_eq!(list.len(), 2);
/// ```
#[macro_export]
macro_rules! candidates {
  ($($name:literal => $tier:expr, $requires:expr => $func:expr),+ $(,)?) => {
    &[$($crate::dispatch::Candidate::new($name, $tier, $requires, $func)),+]
  };
}
