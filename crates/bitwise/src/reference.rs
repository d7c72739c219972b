//! Reference implementation in safe Rust.
//!
//! Obviously correct by inspection: zip the slices and apply [`BitOp::eval`].
//! Every kernel set must agree with it for all inputs. Not used on the
//! dispatch path.

use crate::op::BitOp;

/// `dst[i] = op(a[i], b[i])` over the common prefix; returns its length.
///
/// ```
/// use bitwise::{BitOp, reference};
///
/// let mut dst = [0u8; 3];
/// assert_eq!(reference::apply(BitOp::AndNot, &mut dst, &[0xFF; 3], &[0x0F; 2]), 2);
/// assert_eq!(dst, [0xF0, 0xF0, 0x00]);
/// ```
pub fn apply(op: BitOp, dst: &mut [u8], a: &[u8], b: &[u8]) -> usize {
  let mut n = 0;
  for ((d, &x), &y) in dst.iter_mut().zip(a).zip(b) {
    *d = op.eval(x, y);
    n += 1;
  }
  n
}

/// `dst[i] = op(dst[i], b[i])` over the common prefix; returns its length.
pub fn apply_assign(op: BitOp, dst: &mut [u8], b: &[u8]) -> usize {
  let mut n = 0;
  for (d, &y) in dst.iter_mut().zip(b) {
    *d = op.eval(*d, y);
    n += 1;
  }
  n
}

/// `dst[i] = !src[i]` over the common prefix; returns its length.
pub fn not(dst: &mut [u8], src: &[u8]) -> usize {
  let mut n = 0;
  for (d, &x) in dst.iter_mut().zip(src) {
    *d = !x;
    n += 1;
  }
  n
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn truncates_to_shortest() {
    let mut dst = [0xAAu8; 4];
    assert_eq!(apply(BitOp::Or, &mut dst, &[1, 2, 3], &[4, 8, 16, 32]), 3);
    assert_eq!(dst, [5, 10, 19, 0xAA]);
  }

  #[test]
  fn assign_matches_disjoint() {
    let a = [0x12u8, 0x34, 0x56];
    let b = [0xF0u8, 0x0F, 0xFF];
    for op in BitOp::ALL {
      let mut disjoint = [0u8; 3];
      apply(op, &mut disjoint, &a, &b);
      let mut in_place = a;
      apply_assign(op, &mut in_place, &b);
      assert_eq!(disjoint, in_place, "{op}");
    }
  }

  #[test]
  fn not_twice_is_identity() {
    let src = [0u8, 1, 0x7F, 0x80, 0xFF];
    let mut once = [0u8; 5];
    let mut twice = [0u8; 5];
    not(&mut once, &src);
    not(&mut twice, &once);
    assert_eq!(twice, src);
  }
}
