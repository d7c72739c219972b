//! Architecture-specific vector kernels.
//!
//! Each kernel runs three descending tiers over the remaining count:
//!
//! | Tier | Step | Runs while |
//! |------|------|------------|
//! | huge | 64 bytes (4 × 128-bit) | `rem >= 64` |
//! | big | 16 bytes | `rem >= 16` |
//! | tail | 1 byte | `rem > 0` |

/// Bytes consumed per huge-tier iteration.
pub(crate) const HUGE: usize = 64;
/// Bytes consumed per big-tier iteration.
pub(crate) const BIG: usize = 16;

#[cfg(target_arch = "aarch64")]
pub(crate) mod aarch64;
#[cfg(target_arch = "x86_64")]
pub(crate) mod x86_64;
