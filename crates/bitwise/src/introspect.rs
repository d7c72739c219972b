//! Kernel dispatch introspection.
//!
//! Answers "which kernels am I running?" without touching the hot path.
//!
//! ```
//! use bitwise::DispatchInfo;
//!
//! let info = DispatchInfo::current();
//! println!("{info}");
//! // e.g. "x86_64 [unaligned, sse2, ...]: x86_64/sse2 (vector, force auto)"
//! ```

use core::fmt;

use backend::KernelTier;

use crate::config::{self, BitwiseConfig};

/// Snapshot of the platform and the selected kernel set.
#[derive(Clone, Copy, Debug)]
pub struct DispatchInfo {
  platform: platform::Description,
  kernel: &'static str,
  tier: KernelTier,
  config: BitwiseConfig,
}

impl DispatchInfo {
  /// Dispatch info for the current process.
  ///
  /// Resolves the kernel set if no operation has run yet.
  #[must_use]
  pub fn current() -> Self {
    let set = crate::dispatch::active();
    Self {
      platform: platform::describe(),
      kernel: set.name(),
      tier: set.tier(),
      config: config::get(),
    }
  }

  /// Platform description (architecture and capabilities).
  #[inline]
  #[must_use]
  pub fn platform(&self) -> platform::Description {
    self.platform
  }

  /// Name of the selected kernel set.
  #[inline]
  #[must_use]
  pub fn kernel(&self) -> &'static str {
    self.kernel
  }

  /// Tier of the selected kernel set.
  #[inline]
  #[must_use]
  pub fn tier(&self) -> KernelTier {
    self.tier
  }

  /// Force configuration in effect.
  #[inline]
  #[must_use]
  pub fn config(&self) -> BitwiseConfig {
    self.config
  }
}

impl fmt::Display for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}: {} ({}, force {})",
      self.platform, self.kernel, self.tier, self.config.effective_force
    )
  }
}
