//! Process-wide kernel set selection.
//!
//! The first operation resolves the kernel set from `platform::caps()` and the
//! configured force mode, then caches it. Every later call is one acquire load
//! plus an indirect call. The decision never changes for the life of the
//! process.

use backend::{ForceMode, KernelTier, OnceCache, dispatch::select_capped};
use platform::Caps;

use crate::{config, kernels::{CANDIDATES, KernelSet}};

static ACTIVE: OnceCache<&'static KernelSet> = OnceCache::new();

/// The kernel set for explicit capabilities and force mode.
///
/// Does not touch the process-wide cache. `caps` is intersected with the
/// detected capabilities, so this can only ever pick a set the CPU runs:
/// pass fewer capabilities to exercise the fallback tiers.
///
/// ```
/// use backend::{ForceMode, KernelTier};
/// use platform::Caps;
///
/// let set = bitwise::kernel_set_for(Caps::NONE, ForceMode::Auto);
/// assert_eq!(set.tier(), KernelTier::Portable);
///
/// let mut dst = [0u8; 2];
/// assert_eq!(set.not(&mut dst, &[0x0F, 0xF0]), 2);
/// assert_eq!(dst, [0xF0, 0x0F]);
/// ```
#[must_use]
pub fn kernel_set_for(caps: Caps, force: ForceMode) -> &'static KernelSet {
  let caps = caps.intersection(platform::caps());
  select_capped(caps, force.ceiling(), CANDIDATES).func
}

fn resolve() -> &'static KernelSet {
  let caps = platform::caps();
  let cfg = config::get();
  let set = select_capped(caps, cfg.effective_force.ceiling(), CANDIDATES).func;

  #[cfg(feature = "log")]
  log::debug!(
    "bitwise: selected kernel set {} (tier {}, force {} -> {}, caps {:?})",
    set.name(),
    set.tier(),
    cfg.requested_force,
    cfg.effective_force,
    caps
  );

  set
}

/// The kernel set all top-level operations use.
#[inline]
#[must_use]
pub fn active() -> &'static KernelSet {
  ACTIVE.get_or_init(resolve)
}

/// Name of the selected kernel set, e.g. `"x86_64/sse2"` or `"portable"`.
#[inline]
#[must_use]
pub fn backend_name() -> &'static str {
  active().name()
}

/// Tier of the selected kernel set.
#[inline]
#[must_use]
pub fn active_tier() -> KernelTier {
  active().tier()
}
