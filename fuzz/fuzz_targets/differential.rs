//! Differential fuzzing of every kernel set against the reference.
//!
//! Operands and destination get independent lengths so truncation, block
//! boundaries and the byte tail are all exercised.

#![no_main]

use arbitrary::Arbitrary;
use bitwise::{BitOp, kernel_test};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  op: u8,
  dst_len: u16,
  a: Vec<u8>,
  b: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let dst_len = usize::from(input.dst_len) % 4096;

  // One slot past the binary ops selects NOT.
  match BitOp::ALL.get(usize::from(input.op) % (BitOp::ALL.len() + 1)) {
    Some(&op) => {
      if let Err(e) = kernel_test::verify_binary(op, dst_len, &input.a, &input.b) {
        panic!("{e}");
      }
    }
    None => {
      if let Err(e) = kernel_test::verify_not(dst_len, &input.a) {
        panic!("{e}");
      }
    }
  }
});
