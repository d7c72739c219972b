//! Operative length resolution.
//!
//! Every operation touches exactly the common prefix of its buffers. A zero
//! operative length means no reads and no writes.

/// Operative length of a binary operation: `min(dst, a, b)`.
///
/// ```
/// assert_eq!(bitwise::operative_len(20, 20, 20), 20);
/// assert_eq!(bitwise::operative_len(5, 0, 2), 0);
/// assert_eq!(bitwise::operative_len(3, 8, 8), 3);
/// ```
#[inline(always)]
#[must_use]
pub const fn operative_len(dst: usize, a: usize, b: usize) -> usize {
  let n = if dst < a { dst } else { a };
  if n < b { n } else { b }
}

/// Operative length of NOT: `min(dst, src)`.
#[inline(always)]
#[must_use]
pub const fn operative_len_unary(dst: usize, src: usize) -> usize {
  if dst < src { dst } else { src }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn picks_minimum() {
    assert_eq!(operative_len(1, 2, 3), 1);
    assert_eq!(operative_len(3, 1, 2), 1);
    assert_eq!(operative_len(2, 3, 1), 1);
    assert_eq!(operative_len(7, 7, 7), 7);
    assert_eq!(operative_len_unary(4, 9), 4);
    assert_eq!(operative_len_unary(9, 4), 4);
  }

  #[test]
  fn any_empty_buffer_yields_zero() {
    assert_eq!(operative_len(0, 10, 10), 0);
    assert_eq!(operative_len(10, 0, 10), 0);
    assert_eq!(operative_len(10, 10, 0), 0);
    assert_eq!(operative_len_unary(0, 10), 0);
    assert_eq!(operative_len_unary(10, 0), 0);
  }
}
