//! Kernel acceleration tiers.
//!
//! Tiers represent levels of hardware acceleration, from the portable
//! byte-at-a-time oracle to 128-bit SIMD. Higher tiers are faster but have
//! stricter hardware requirements.
//!
//! # Tier Overview
//!
//! | Tier | Name | Unit | Requirement |
//! |------|------|------|-------------|
//! | 0 | Portable | 1 byte | none, always available |
//! | 1 | Word | `usize` | unaligned word access ([`platform::caps::mem::UNALIGNED`]) |
//! | 2 | Vector | 16 bytes (×4 unrolled) | SSE2 (x86_64) or NEON (aarch64) |

use core::fmt;

/// Kernel acceleration tier.
///
/// Tiers are ordered from lowest (always available) to highest. Force modes
/// treat a tier as a ceiling, so `tier <= KernelTier::Word` reads naturally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum KernelTier {
  /// Tier 0: byte-at-a-time implementation.
  ///
  /// Always available, always correct. Serves as the fallback on targets that
  /// trap or slow down on unaligned word access.
  #[default]
  Portable = 0,

  /// Tier 1: native-word implementation.
  ///
  /// Processes `size_of::<usize>()` bytes per step. Only selected when the
  /// target tolerates unaligned loads and stores.
  Word = 1,

  /// Tier 2: 128-bit SIMD implementation.
  ///
  /// Available on:
  /// - x86_64: SSE2 (baseline)
  /// - aarch64: NEON (baseline)
  Vector = 2,
}

impl KernelTier {
  /// All tiers in ascending order.
  pub const ALL: [Self; 3] = [Self::Portable, Self::Word, Self::Vector];

  /// Human-readable tier name.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Portable => "portable",
      Self::Word => "word",
      Self::Vector => "vector",
    }
  }
}

impl fmt::Display for KernelTier {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tier_ordering() {
    assert!(KernelTier::Portable < KernelTier::Word);
    assert!(KernelTier::Word < KernelTier::Vector);
    assert!(KernelTier::ALL.windows(2).all(|w| w[0] < w[1]));
  }

  #[test]
  fn tier_names() {
    assert_eq!(KernelTier::Portable.name(), "portable");
    assert_eq!(KernelTier::Word.name(), "word");
    assert_eq!(KernelTier::Vector.name(), "vector");
  }

  #[test]
  fn default_is_portable() {
    assert_eq!(KernelTier::default(), KernelTier::Portable);
  }
}
