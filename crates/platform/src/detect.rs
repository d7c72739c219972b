//! CPU capability detection.
//!
//! This module provides the unified [`caps()`](crate::caps()) entry point. It handles:
//!
//! - Compile-time detection (via `cfg!(target_feature = "...")`)
//! - Runtime detection (via `std::arch` feature macros when `std` is enabled)
//! - Caching (via `OnceLock` with `std`, atomics without)
//! - User-supplied overrides for bare metal and testing
//! - Miri fallback (always returns portable caps)
//!
//! # Overrides
//!
//! ```
//! use platform::caps::mem;
//!
//! // Pretend the machine has no vector unit, only unaligned word access.
//! platform::set_caps_override(Some(mem::UNALIGNED));
//! assert_eq!(platform::caps(), mem::UNALIGNED);
//! platform::set_caps_override(None);
//! ```

#[cfg(not(feature = "std"))]
use core::sync::atomic::AtomicU8;
use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::caps::Caps;

mod compile_time;

pub use compile_time::caps_static;

// ─────────────────────────────────────────────────────────────────────────────
// Cache (no_std)
// ─────────────────────────────────────────────────────────────────────────────

/// Atomic cache for no_std builds.
#[cfg(not(feature = "std"))]
mod cache {
  use super::*;

  const UNINIT: u8 = 0;
  const INITING: u8 = 1;
  const READY: u8 = 2;

  static STATE: AtomicU8 = AtomicU8::new(UNINIT);
  static CACHED: AtomicU64 = AtomicU64::new(0);

  /// Return the cached value, computing it with `f` on first use.
  #[inline]
  pub fn get_or_init(f: fn() -> Caps) -> Caps {
    if STATE.load(Ordering::Acquire) == READY {
      return Caps(CACHED.load(Ordering::Acquire));
    }

    match STATE.compare_exchange(UNINIT, INITING, Ordering::AcqRel, Ordering::Acquire) {
      Ok(_) => {
        let caps = f();
        CACHED.store(caps.0, Ordering::Release);
        STATE.store(READY, Ordering::Release);
        caps
      }
      Err(_) => {
        // Someone else is initializing (or just finished).
        while STATE.load(Ordering::Acquire) != READY {
          core::hint::spin_loop();
        }
        Caps(CACHED.load(Ordering::Acquire))
      }
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Override Support
// ─────────────────────────────────────────────────────────────────────────────

static OVERRIDE_SET: AtomicBool = AtomicBool::new(false);
static OVERRIDE_BITS: AtomicU64 = AtomicU64::new(0);

/// Set or clear the capabilities override.
///
/// When set, [`get()`] returns the override instead of detected capabilities.
/// Pass `None` to clear the override and resume detection.
///
/// Thread-safe, but callers that cache a dispatch decision derived from
/// capabilities (as the kernel crates do) only observe the override if it is
/// installed before their first call.
pub fn set_caps_override(value: Option<Caps>) {
  match value {
    Some(caps) => {
      OVERRIDE_BITS.store(caps.0, Ordering::Release);
      OVERRIDE_SET.store(true, Ordering::Release);
    }
    None => OVERRIDE_SET.store(false, Ordering::Release),
  }
}

/// Check if an override is currently set.
#[inline]
#[must_use]
pub fn has_override() -> bool {
  OVERRIDE_SET.load(Ordering::Acquire)
}

fn get_override() -> Option<Caps> {
  if !OVERRIDE_SET.load(Ordering::Acquire) {
    return None;
  }
  Some(Caps(OVERRIDE_BITS.load(Ordering::Acquire)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Main API
// ─────────────────────────────────────────────────────────────────────────────

/// Get detected CPU capabilities.
///
/// Detection runs once; subsequent calls read the cached value. An override
/// installed via [`set_caps_override`] takes precedence.
///
/// Under Miri, always returns [`Caps::NONE`] so callers take the portable path.
#[inline]
#[must_use]
pub fn get() -> Caps {
  if cfg!(miri) {
    return Caps::NONE;
  }

  if let Some(caps) = get_override() {
    return caps;
  }

  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<Caps> = OnceLock::new();
    *CACHED.get_or_init(detect_uncached)
  }

  #[cfg(not(feature = "std"))]
  {
    cache::get_or_init(detect_uncached)
  }
}

/// Detect capabilities without caching or overrides.
#[must_use]
pub fn detect_uncached() -> Caps {
  caps_static().union(runtime())
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime Detection
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(all(feature = "std", any(target_arch = "x86_64", target_arch = "x86")))]
fn runtime() -> Caps {
  use crate::caps::x86;

  if std::arch::is_x86_feature_detected!("sse2") {
    x86::SSE2
  } else {
    Caps::NONE
  }
}

#[cfg(all(feature = "std", target_arch = "aarch64"))]
fn runtime() -> Caps {
  use crate::caps::aarch64;

  if std::arch::is_aarch64_feature_detected!("neon") {
    aarch64::NEON
  } else {
    Caps::NONE
  }
}

// Without std (or on architectures with no runtime probe) only the
// compile-time set is known.
#[cfg(not(all(
  feature = "std",
  any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")
)))]
const fn runtime() -> Caps {
  Caps::NONE
}
