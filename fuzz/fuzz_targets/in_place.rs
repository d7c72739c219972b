//! Fuzz target for the dispatched in-place operations.
//!
//! `x ^= b` twice must restore `x`, and NOT twice must restore it too.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  key: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let mut buf = input.data.clone();
  let n = input.data.len().min(input.key.len());

  assert_eq!(bitwise::xor_assign(&mut buf, &input.key), n);
  assert_eq!(bitwise::xor_assign(&mut buf, &input.key), n);
  assert_eq!(buf, input.data, "xor twice mismatch");

  assert_eq!(bitwise::not_assign(&mut buf), buf.len());
  assert_eq!(bitwise::not_assign(&mut buf), buf.len());
  assert_eq!(buf, input.data, "not twice mismatch");
});
