//! CPU capability detection for the bitwise kernels.
//!
//! This crate is the **single source of truth** for what the current machine
//! can run. Kernel crates query [`caps()`] instead of doing ad-hoc detection.
//!
//! # Core Types
//!
//! - [`Caps`]: what instructions (and memory-model properties) are available
//! - [`Arch`]: the compilation target architecture
//!
//! # Main Entry Point
//!
//! ```
//! use platform::caps::{mem, x86};
//!
//! let caps = platform::caps();
//!
//! if caps.has(x86::SSE2) {
//!   // 128-bit vector kernel
//! } else if caps.has(mem::UNALIGNED) {
//!   // native-word kernel
//! }
//! ```
//!
//! # Design Philosophy
//!
//! 1. **One API**: Kernels query `platform::caps()` instead of doing ad-hoc detection.
//! 2. **Zero-cost when possible**: Compile-time features are detected via `cfg!`.
//! 3. **Cached otherwise**: Runtime detection is cached in `OnceLock` (std) or atomics (no_std).
//! 4. **Miri-safe**: Under Miri, always returns portable-only caps.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod caps;
pub mod detect;

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

pub use caps::{Arch, Caps};

/// Get detected CPU capabilities.
///
/// # Caching
///
/// Detection runs once per process; the result is cached in a `OnceLock`
/// (std) or an atomic state machine (no_std).
///
/// # Miri
///
/// Under Miri, always returns [`Caps::NONE`] to avoid interpreting SIMD
/// intrinsics.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  detect::get()
}

/// Set or clear the capabilities override.
///
/// When set, [`caps()`] returns the override value instead of detecting.
/// Pass `None` to clear the override and resume detection.
///
/// ```
/// use platform::Caps;
///
/// platform::set_caps_override(Some(Caps::NONE));
/// assert!(platform::caps().is_empty());
/// platform::set_caps_override(None);
/// ```
#[inline]
pub fn set_caps_override(value: Option<Caps>) {
  detect::set_caps_override(value);
}

/// Check if an override is currently set.
#[inline]
#[must_use]
pub fn has_override() -> bool {
  detect::has_override()
}

// ─────────────────────────────────────────────────────────────────────────────
// Description
// ─────────────────────────────────────────────────────────────────────────────

/// A printable summary of the current platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Description {
  /// Compilation target architecture.
  pub arch: Arch,
  /// Effective capabilities (detected or overridden).
  pub caps: Caps,
  /// Whether [`caps`](Self::caps) came from an override.
  pub overridden: bool,
}

impl core::fmt::Display for Description {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{} [", self.arch)?;
    let mut first = true;
    for name in self.caps.feature_names() {
      if !first {
        f.write_str(", ")?;
      }
      first = false;
      f.write_str(name)?;
    }
    f.write_str("]")?;
    if self.overridden {
      f.write_str(" (override)")?;
    }
    Ok(())
  }
}

/// Describe the current platform.
#[inline]
#[must_use]
pub fn describe() -> Description {
  Description {
    arch: Arch::current(),
    caps: caps(),
    overridden: has_override(),
  }
}
