//! User-requested overrides of automatic kernel selection.
//!
//! A [`ForceMode`] is read once (from the environment or set programmatically)
//! and turned into a tier ceiling for [`select_capped`](crate::dispatch::select_capped).
//! Forcing a tier the hardware cannot run is safe: selection degrades to the
//! best available tier below it.

use core::{fmt, str::FromStr};

use crate::tier::KernelTier;

// ─────────────────────────────────────────────────────────────────────────────
// ForceMode
// ─────────────────────────────────────────────────────────────────────────────

/// Force mode for overriding automatic kernel selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ForceMode {
  /// Automatic selection based on capabilities (default).
  #[default]
  Auto,

  /// Use at most the given tier.
  Tier(KernelTier),
}

impl ForceMode {
  /// Force the byte-at-a-time kernels.
  pub const PORTABLE: Self = Self::Tier(KernelTier::Portable);
  /// Force the native-word kernels (if the target tolerates unaligned access).
  pub const WORD: Self = Self::Tier(KernelTier::Word);
  /// Force the SIMD kernels (if available).
  pub const VECTOR: Self = Self::Tier(KernelTier::Vector);

  /// Parse from string (for env var support).
  ///
  /// Accepts case-insensitive names, surrounding whitespace ignored:
  /// - `"auto"`: automatic selection
  /// - `"portable"`, `"scalar"`, `"byte"`: byte-at-a-time kernels
  /// - `"word"`, `"swar"`: native-word kernels
  /// - `"vector"`, `"simd"`: SIMD kernels
  #[must_use]
  pub fn parse(s: &str) -> Option<Self> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if s.eq_ignore_ascii_case("portable") || s.eq_ignore_ascii_case("scalar") || s.eq_ignore_ascii_case("byte") {
      return Some(Self::PORTABLE);
    }
    if s.eq_ignore_ascii_case("word") || s.eq_ignore_ascii_case("swar") {
      return Some(Self::WORD);
    }
    if s.eq_ignore_ascii_case("vector") || s.eq_ignore_ascii_case("simd") {
      return Some(Self::VECTOR);
    }

    None
  }

  /// Canonical name of this mode.
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Tier(tier) => tier.name(),
    }
  }

  /// The highest tier this mode permits.
  #[inline]
  #[must_use]
  pub const fn ceiling(self) -> KernelTier {
    match self {
      Self::Auto => KernelTier::Vector,
      Self::Tier(tier) => tier,
    }
  }

  /// Clamp this mode to the best tier the hardware supports.
  ///
  /// `Auto` stays `Auto`. A forced tier above `best_available` degrades to it.
  #[inline]
  #[must_use]
  pub fn clamp(self, best_available: KernelTier) -> Self {
    match self {
      Self::Auto => Self::Auto,
      Self::Tier(tier) => Self::Tier(tier.min(best_available)),
    }
  }
}

impl fmt::Display for ForceMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ForceMode {
  type Err = ParseForceError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s).ok_or(ParseForceError::new())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// ParseForceError
// ─────────────────────────────────────────────────────────────────────────────

/// The string did not name a known force mode.
///
/// ```
/// use backend::ForceMode;
///
/// assert!("avx9000".parse::<ForceMode>().is_err());
/// assert_eq!("SIMD".parse::<ForceMode>(), Ok(ForceMode::VECTOR));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ParseForceError;

impl ParseForceError {
  /// Create a new parse error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for ParseForceError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for ParseForceError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown force mode (expected auto, portable, word or vector)")
  }
}

impl core::error::Error for ParseForceError {}
