//! Fixed input/output vectors for every operation.
//!
//! Each vector runs through the dispatched API and through every kernel set
//! the CPU supports, so a mistake in any tier shows up here by name.

use bitwise::{BitOp, bench};

// ─────────────────────────────────────────────────────────────────────────────
// Test Vectors
// ─────────────────────────────────────────────────────────────────────────────

const PATTERN: [u8; 4] = [0x55, 0xAA, 0xA5, 0x5A];

fn repeat(pattern: &[u8], times: usize) -> Vec<u8> {
  pattern.repeat(times)
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn xor_all_ones_with_pattern() {
  let a = [0xFFu8; 20];
  let b = repeat(&PATTERN, 5);
  let expected = repeat(&[0xAA, 0x55, 0x5A, 0xA5], 5);

  let mut dst = [0u8; 20];
  assert_eq!(bitwise::xor(&mut dst, &a, &b), 20);
  assert_eq!(dst.as_slice(), expected.as_slice());

  for name in bench::available_kernels() {
    let set = bench::get_kernel(name).unwrap();
    let mut dst = [0u8; 20];
    assert_eq!(set.apply(BitOp::Xor, &mut dst, &a, &b), 20, "{name}");
    assert_eq!(dst.as_slice(), expected.as_slice(), "{name}");
  }
}

#[test]
fn and_with_empty_operand_writes_nothing() {
  let mut dst = [0x11u8, 0x22, 0x33, 0x44, 0x55];
  let before = dst;

  assert_eq!(bitwise::and(&mut dst, &[], &[1, 2]), 0);
  assert_eq!(dst, before);

  for name in bench::available_kernels() {
    let set = bench::get_kernel(name).unwrap();
    assert_eq!(set.apply(BitOp::And, &mut dst, &[], &[1, 2]), 0, "{name}");
    assert_eq!(dst, before, "{name}");
  }
}

#[test]
fn every_op_on_one_block() {
  // 0b1100 / 0b1010 in each nibble covers all four input bit combinations.
  let a = [0xCCu8; 16];
  let b = [0xAAu8; 16];

  let cases: [(fn(&mut [u8], &[u8], &[u8]) -> usize, u8, &str); 6] = [
    (bitwise::xor, 0x66, "xor"),
    (bitwise::and, 0x88, "and"),
    (bitwise::and_not, 0x44, "and_not"),
    (bitwise::nand, 0x77, "nand"),
    (bitwise::or, 0xEE, "or"),
    (bitwise::nor, 0x11, "nor"),
  ];

  for (f, expected, name) in cases {
    let mut dst = [0u8; 16];
    assert_eq!(f(&mut dst, &a, &b), 16);
    assert!(dst.iter().all(|&x| x == expected), "{name}: {dst:02x?}");
  }

  let mut dst = [0u8; 16];
  assert_eq!(bitwise::not(&mut dst, &a), 16);
  assert!(dst.iter().all(|&x| x == 0x33));
}

#[test]
fn and_not_operand_order_in_every_tier() {
  // a & !b with a = 0xF0, b = 0x3C must give 0xC0. Swapped operands give 0x0C.
  for len in [1usize, 15, 16, 17, 63, 64, 65, 200] {
    let a = vec![0xF0u8; len];
    let b = vec![0x3Cu8; len];
    for name in bench::available_kernels() {
      let set = bench::get_kernel(name).unwrap();
      let mut dst = vec![0u8; len];
      assert_eq!(set.apply(BitOp::AndNot, &mut dst, &a, &b), len);
      assert!(dst.iter().all(|&x| x == 0xC0), "{name} len={len}: {dst:02x?}");
    }
  }
}

#[test]
fn in_place_scenario() {
  let mut buf = [0xFFu8; 20];
  let b = repeat(&PATTERN, 5);
  assert_eq!(bitwise::xor_assign(&mut buf, &b), 20);
  assert_eq!(buf.as_slice(), repeat(&[0xAA, 0x55, 0x5A, 0xA5], 5).as_slice());

  assert_eq!(bitwise::not_assign(&mut buf), 20);
  assert_eq!(buf.as_slice(), b.as_slice());
}
