//! Tests verifying the portable and word fallbacks are always reachable.
//!
//! Kernel sets are selected with reduced capabilities so the lower tiers run
//! on every host, whatever the CPU offers. Results must match the dispatched
//! kernels byte for byte.

use backend::{ForceMode, KernelTier};
use bitwise::{BitOp, KernelSet, kernel_set_for};
use platform::{Caps, caps::mem};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn make_data(len: usize, seed: u8) -> Vec<u8> {
  (0..len).map(|i| (i as u8).wrapping_mul(29) ^ seed).collect()
}

fn assert_matches_dispatch(set: &KernelSet) {
  for len in [0usize, 1, 7, 8, 9, 16, 17, 64, 65, 257] {
    let a = make_data(len, 0x3C);
    let b = make_data(len, 0xC3);

    for op in BitOp::ALL {
      let mut expected = vec![0u8; len];
      let mut actual = vec![0u8; len];
      assert_eq!(bitwise::apply(op, &mut expected, &a, &b), len);
      assert_eq!(set.apply(op, &mut actual, &a, &b), len);
      assert_eq!(actual, expected, "{} {op} len={len}", set.name());
    }

    let mut expected = vec![0u8; len];
    let mut actual = vec![0u8; len];
    bitwise::not(&mut expected, &a);
    set.not(&mut actual, &a);
    assert_eq!(actual, expected, "{} not len={len}", set.name());
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Portable
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn no_caps_selects_portable() {
  let set = kernel_set_for(Caps::NONE, ForceMode::Auto);
  assert_eq!(set.tier(), KernelTier::Portable);
  assert_eq!(set.name(), "portable");
  assert!(set.requires().is_empty());
  assert_matches_dispatch(set);
}

#[test]
fn forced_portable_ignores_caps() {
  let set = kernel_set_for(platform::caps(), ForceMode::PORTABLE);
  assert_eq!(set.tier(), KernelTier::Portable);
  assert_matches_dispatch(set);
}

// ─────────────────────────────────────────────────────────────────────────────
// Word
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unaligned_flag_alone_selects_word() {
  let set = kernel_set_for(mem::UNALIGNED, ForceMode::Auto);
  if platform::caps().has(mem::UNALIGNED) {
    assert_eq!(set.tier(), KernelTier::Word);
    assert_eq!(set.name(), "word");
  } else {
    assert_eq!(set.tier(), KernelTier::Portable);
  }
  assert_matches_dispatch(set);
}

#[test]
fn forced_word_never_exceeds_word() {
  let set = kernel_set_for(platform::caps(), ForceMode::WORD);
  assert!(set.tier() <= KernelTier::Word);
  assert_matches_dispatch(set);
}

// ─────────────────────────────────────────────────────────────────────────────
// Auto
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn auto_with_detected_caps_is_the_best_available() {
  let set = kernel_set_for(platform::caps(), ForceMode::Auto);
  assert_eq!(set.name(), bitwise::bench::available_kernels()[0]);
  assert_matches_dispatch(set);
}

#[test]
fn every_tier_ceiling_selects_a_runnable_set() {
  let available = bitwise::bench::available_kernels();
  for tier in KernelTier::ALL {
    let set = kernel_set_for(platform::caps(), ForceMode::Tier(tier));
    assert!(set.tier() <= tier, "{} above {tier}", set.name());
    assert!(available.contains(&set.name()), "{}", set.name());
  }
}
