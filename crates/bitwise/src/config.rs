//! Runtime configuration (forced kernel tier).
//!
//! The only knob is a tier ceiling, read once from `BITWISE_FORCE`:
//!
//! | Value | Effect |
//! |-------|--------|
//! | `auto` (default) | best kernel set the CPU supports |
//! | `portable`, `scalar`, `byte` | byte-at-a-time kernels |
//! | `word`, `swar` | native-word kernels |
//! | `vector`, `simd` | SIMD kernels |
//!
//! Unknown values are ignored. Forced modes are always clamped to detected CPU
//! capabilities, so forcing `vector` on a machine without SIMD is harmless.

use backend::{ForceMode, KernelTier, dispatch::select};
use platform::Caps;

use crate::kernels::CANDIDATES;

/// Environment variable holding the force mode.
pub const FORCE_ENV: &str = "BITWISE_FORCE";

/// Effective configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitwiseConfig {
  /// Requested force mode (from the environment).
  pub requested_force: ForceMode,
  /// Force mode clamped to detected CPU capabilities.
  pub effective_force: ForceMode,
}

#[cfg(feature = "std")]
fn read_env_force() -> ForceMode {
  let Ok(value) = std::env::var(FORCE_ENV) else {
    return ForceMode::Auto;
  };
  value.parse().unwrap_or_default()
}

#[cfg(feature = "std")]
fn requested_force() -> ForceMode {
  use std::sync::OnceLock;
  static FORCE: OnceLock<ForceMode> = OnceLock::new();
  *FORCE.get_or_init(read_env_force)
}

#[cfg(not(feature = "std"))]
fn requested_force() -> ForceMode {
  ForceMode::Auto
}

/// Best tier any compiled kernel set can run with `caps`.
#[inline]
#[must_use]
pub(crate) fn best_tier(caps: Caps) -> KernelTier {
  select(caps, CANDIDATES).tier
}

/// Resolve a configuration for explicit inputs.
#[inline]
#[must_use]
pub fn resolve(requested: ForceMode, caps: Caps) -> BitwiseConfig {
  BitwiseConfig {
    requested_force: requested,
    effective_force: requested.clamp(best_tier(caps)),
  }
}

/// Get the effective configuration for the current platform.
#[inline]
#[must_use]
pub fn get() -> BitwiseConfig {
  resolve(requested_force(), platform::caps())
}
