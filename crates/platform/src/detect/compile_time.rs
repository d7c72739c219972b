// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Static Detection
// ─────────────────────────────────────────────────────────────────────────────

use crate::caps::{Arch, Caps, mem};

/// Returns CPU capabilities known at compile time.
///
/// Detects features enabled via `-C target-feature=...` or `-C target-cpu=native`,
/// plus the architecture baseline (SSE2 on x86_64) and the
/// unaligned-access property of the target. Evaluates in `const` context, so the
/// compiler can drop dead dispatch branches entirely.
///
/// # Examples
///
/// ```
/// use platform::detect::caps_static;
///
/// const CAPS: platform::Caps = caps_static();
///
/// #[cfg(target_arch = "x86_64")]
/// {
///   use platform::caps::{mem, x86};
///   assert!(CAPS.has(x86::SSE2));
///   assert!(CAPS.has(mem::UNALIGNED));
/// }
///
/// #[cfg(target_arch = "aarch64")]
/// {
///   use platform::caps::aarch64;
///   assert!(CAPS.has(aarch64::NEON));
/// }
/// ```
#[inline(always)]
#[must_use]
pub const fn caps_static() -> Caps {
  // cfg!() is a const bool; dead branches are eliminated.
  let mut result = Caps::NONE;

  if Arch::current().tolerates_unaligned() {
    result = result.union(mem::UNALIGNED);
  }

  #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
  {
    use crate::caps::x86;

    // x86_64 baseline: SSE2 is guaranteed
    #[cfg(target_arch = "x86_64")]
    {
      result = result.union(x86::SSE2);
    }

    if cfg!(target_feature = "sse2") {
      result = result.union(x86::SSE2);
    }
  }

  #[cfg(target_arch = "aarch64")]
  {
    use crate::caps::aarch64;

    // Advanced SIMD is baseline on every aarch64 target except the softfloat ones.
    if cfg!(target_feature = "neon") {
      result = result.union(aarch64::NEON);
    }
  }

  result
}
