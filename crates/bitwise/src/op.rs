//! The binary operations, named.

use core::fmt;

/// A binary elementwise operation.
///
/// NOT is unary and has its own entry points; everything else is a `BitOp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BitOp {
  /// `a ^ b`
  Xor = 0,
  /// `a & b`
  And = 1,
  /// `a & !b`
  AndNot = 2,
  /// `!(a & b)`
  Nand = 3,
  /// `a | b`
  Or = 4,
  /// `!(a | b)`
  Nor = 5,
}

impl BitOp {
  /// All binary operations.
  pub const ALL: [Self; 6] = [Self::Xor, Self::And, Self::AndNot, Self::Nand, Self::Or, Self::Nor];

  /// Lower-case name, e.g. `"and_not"`.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Xor => "xor",
      Self::And => "and",
      Self::AndNot => "and_not",
      Self::Nand => "nand",
      Self::Or => "or",
      Self::Nor => "nor",
    }
  }

  /// Look an operation up by [`name`](Self::name).
  #[must_use]
  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|op| op.name() == name)
  }

  /// Apply the operation to one byte pair.
  #[inline(always)]
  #[must_use]
  pub const fn eval(self, a: u8, b: u8) -> u8 {
    match self {
      Self::Xor => a ^ b,
      Self::And => a & b,
      Self::AndNot => a & !b,
      Self::Nand => !(a & b),
      Self::Or => a | b,
      Self::Nor => !(a | b),
    }
  }
}

impl fmt::Display for BitOp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
