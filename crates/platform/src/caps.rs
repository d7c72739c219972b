//! CPU capability representation.
//!
//! This module answers the question: "What can I legally and profitably run on
//! this machine?"
//!
//! # Design
//!
//! [`Caps`] is a 64-bit bitset. Each bit corresponds to either a memory-model
//! property of the target (such as tolerance for unaligned word access) or an
//! ISA extension. The bits are grouped by architecture but the API is uniform
//! across all targets.
//!
//! # Bit Layout
//!
//! - Bits 0-7: memory-model properties ([`mem`])
//! - Bits 8-23: x86/x86_64 features ([`x86`])
//! - Bits 24-39: aarch64 features ([`aarch64`])
//!
//! # Usage
//!
//! ```
//! use platform::caps::{mem, x86};
//!
//! let c = platform::caps();
//! if c.has(x86::SSE2) {
//!   // 128-bit vector kernels
//! } else if c.has(mem::UNALIGNED) {
//!   // word-at-a-time kernels
//! }
//! ```

// alloc is only needed for tests (feature_names collection)
#[cfg(test)]
extern crate alloc;

// ─────────────────────────────────────────────────────────────────────────────
// Core Capability Type
// ─────────────────────────────────────────────────────────────────────────────

/// CPU capabilities: a 64-bit feature bitset.
///
/// Use [`has()`](Caps::has) to check if required features are available.
///
/// `Caps` is `Copy`, `Send`, and `Sync` and can be freely shared across threads.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Caps(pub(crate) u64);

impl Caps {
  /// Empty capability set (no features).
  pub const NONE: Self = Self(0);

  /// Create a capability set from a raw word.
  ///
  /// Only available in test builds or with the `testing` feature.
  #[cfg(any(test, feature = "testing"))]
  #[inline]
  #[must_use]
  pub const fn from_raw(bits: u64) -> Self {
    Self(bits)
  }

  /// Access the raw underlying word.
  #[inline]
  #[must_use]
  pub const fn as_raw(self) -> u64 {
    self.0
  }

  /// Check if all features in `required` are present.
  #[inline(always)]
  #[must_use]
  pub const fn has(self, required: Self) -> bool {
    (self.0 & required.0) == required.0
  }

  /// Union of two capability sets.
  #[inline]
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }

  /// Intersection of two capability sets.
  #[inline]
  #[must_use]
  pub const fn intersection(self, other: Self) -> Self {
    Self(self.0 & other.0)
  }

  /// Remove every feature in `other` from this set.
  #[inline]
  #[must_use]
  pub const fn difference(self, other: Self) -> Self {
    Self(self.0 & !other.0)
  }

  /// Check if the capability set is empty.
  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Count the number of features present.
  #[inline]
  #[must_use]
  pub const fn count(self) -> u32 {
    self.0.count_ones()
  }

  /// Create a capability set with a single bit set.
  ///
  /// Bits above 63 wrap; all named constants stay below that.
  #[inline]
  #[must_use]
  pub const fn bit(bit: u8) -> Self {
    Self(1u64 << (bit % 64))
  }

  /// Check if a specific bit is set.
  #[inline]
  #[must_use]
  pub const fn has_bit(self, bit: u8) -> bool {
    (self.0 & (1u64 << (bit % 64))) != 0
  }
}

impl core::ops::BitOr for Caps {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self::Output {
    self.union(rhs)
  }
}

impl core::ops::BitAnd for Caps {
  type Output = Self;

  #[inline]
  fn bitand(self, rhs: Self) -> Self::Output {
    self.intersection(rhs)
  }
}

impl core::ops::BitOrAssign for Caps {
  #[inline]
  fn bitor_assign(&mut self, rhs: Self) {
    *self = self.union(rhs);
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Architecture Identification
// ─────────────────────────────────────────────────────────────────────────────

/// Target architecture enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Arch {
  X86_64,
  X86,
  Aarch64,
  #[default]
  Other,
}

impl Arch {
  /// Get the architecture for the current compilation target.
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    if cfg!(target_arch = "x86_64") {
      Self::X86_64
    } else if cfg!(target_arch = "x86") {
      Self::X86
    } else if cfg!(target_arch = "aarch64") {
      Self::Aarch64
    } else {
      Self::Other
    }
  }

  /// Returns the human-readable name for this architecture.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::X86_64 => "x86_64",
      Self::X86 => "x86",
      Self::Aarch64 => "aarch64",
      Self::Other => "other",
    }
  }

  /// Whether ordinary word loads and stores tolerate unaligned addresses on
  /// this architecture without trapping or falling into a slow emulation path.
  ///
  /// Decided per architecture, never per CPU: the answer is a property of the
  /// ISA and feeds [`mem::UNALIGNED`].
  #[inline]
  #[must_use]
  pub const fn tolerates_unaligned(self) -> bool {
    matches!(self, Self::X86_64 | Self::X86 | Self::Aarch64)
  }
}

impl core::fmt::Display for Arch {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory-model properties (bits 0-7)
// ─────────────────────────────────────────────────────────────────────────────

/// Memory-model properties of the target.
pub mod mem {
  use super::Caps;

  /// Unaligned native-word loads and stores are safe and fast.
  ///
  /// Gates the word-at-a-time kernels. Fixed for the lifetime of the process.
  pub const UNALIGNED: Caps = Caps::bit(0);
}

// ─────────────────────────────────────────────────────────────────────────────
// x86/x86_64 Features (bits 8-23)
// ─────────────────────────────────────────────────────────────────────────────

/// x86/x86_64 CPU features.
pub mod x86 {
  use super::Caps;

  /// 128-bit integer SIMD (baseline on x86_64).
  pub const SSE2: Caps = Caps::bit(8);
}

// ─────────────────────────────────────────────────────────────────────────────
// aarch64 Features (bits 24-39)
// ─────────────────────────────────────────────────────────────────────────────

/// aarch64 CPU features.
pub mod aarch64 {
  use super::Caps;

  /// Advanced SIMD.
  pub const NEON: Caps = Caps::bit(24);
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature Names
// ─────────────────────────────────────────────────────────────────────────────

type FeatureEntry = (u8, &'static str);

const FEATURES: &[FeatureEntry] = &[(0, "unaligned"), (8, "sse2"), (24, "neon")];

impl Caps {
  /// Returns an iterator over the names of all set feature bits.
  pub fn feature_names(self) -> impl Iterator<Item = &'static str> {
    FEATURES.iter().filter_map(move |(bit, name)| if self.has_bit(*bit) { Some(*name) } else { None })
  }
}

impl core::fmt::Debug for Caps {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "Caps({}", Arch::current())?;

    let mut iter = self.feature_names().peekable();
    if iter.peek().is_none() {
      return write!(f, ", none)");
    }

    write!(f, ", [")?;
    let mut first = true;
    for name in iter {
      if !first {
        write!(f, ", ")?;
      }
      first = false;
      write!(f, "{name}")?;
    }
    write!(f, "])")
  }
}

impl core::fmt::Display for Caps {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Debug::fmt(self, f)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use alloc::{format, vec::Vec};

  use super::*;

  #[test]
  fn test_caps_basic() {
    let empty = Caps::NONE;
    assert!(empty.is_empty());
    assert_eq!(empty.count(), 0);

    let bit0 = Caps::bit(0);
    assert!(!bit0.is_empty());
    assert_eq!(bit0.count(), 1);
    assert!(bit0.has_bit(0));
    assert!(!bit0.has_bit(1));
  }

  #[test]
  fn test_caps_union_intersection_difference() {
    let a = Caps::bit(3);
    let b = Caps::bit(9);
    let ab = a.union(b);

    assert!(ab.has(a));
    assert!(ab.has(b));
    assert!(!a.has(ab));
    assert_eq!(ab.count(), 2);
    assert_eq!(ab & a, a);
    assert_eq!(ab.difference(a), b);
  }

  #[test]
  fn test_none_is_always_satisfied() {
    assert!(Caps::NONE.has(Caps::NONE));
    assert!(x86::SSE2.has(Caps::NONE));
  }

  #[test]
  fn test_feature_names() {
    let caps = x86::SSE2 | mem::UNALIGNED;
    let names: Vec<_> = caps.feature_names().collect();
    assert_eq!(names, ["unaligned", "sse2"]);
    assert_eq!(aarch64::NEON.feature_names().collect::<Vec<_>>(), ["neon"]);
  }

  #[test]
  fn test_feature_bits_are_distinct() {
    let mut seen = Caps::NONE;
    for &(bit, name) in FEATURES {
      assert!(!seen.has_bit(bit), "duplicate bit {bit} for {name}");
      seen |= Caps::bit(bit);
    }
  }

  #[test]
  fn test_feature_table_covers_exactly_the_named_bits() {
    let named = mem::UNALIGNED | x86::SSE2 | aarch64::NEON;
    let mut table = Caps::NONE;
    for &(bit, _) in FEATURES {
      table |= Caps::bit(bit);
    }
    assert_eq!(table, named);
    assert_eq!(Caps::from_raw(u64::MAX).feature_names().count(), 3);
  }

  #[test]
  fn test_debug_format() {
    assert!(format!("{:?}", Caps::NONE).ends_with(", none)"));
    let s = format!("{}", x86::SSE2 | mem::UNALIGNED);
    assert!(s.contains("[unaligned, sse2]"), "{s}");
  }

  #[test]
  fn test_arch_current() {
    let arch = Arch::current();
    #[cfg(target_arch = "x86_64")]
    assert_eq!(arch, Arch::X86_64);
    #[cfg(target_arch = "aarch64")]
    assert_eq!(arch, Arch::Aarch64);
    assert_eq!(format!("{arch}"), arch.name());
  }

  #[test]
  fn test_unaligned_tolerance() {
    assert!(Arch::X86_64.tolerates_unaligned());
    assert!(Arch::X86.tolerates_unaligned());
    assert!(Arch::Aarch64.tolerates_unaligned());
    assert!(!Arch::Other.tolerates_unaligned());
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Property-Based Tests (proptest)
// Note: proptest uses filesystem for failure persistence, which Miri doesn't support.
// ─────────────────────────────────────────────────────────────────────────────
