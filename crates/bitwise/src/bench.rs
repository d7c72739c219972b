//! Kernel sets by name, bypassing the cached dispatcher.
//!
//! Benchmarks, fuzz targets and tests use this to run one specific engine
//! regardless of what dispatch picked.

use alloc::vec::Vec;

use crate::kernels::{CANDIDATES, KernelSet};

/// Names of every kernel set the current CPU can run, best first.
///
/// ```
/// let names = bitwise::bench::available_kernels();
/// assert_eq!(names.last(), Some(&"portable"));
/// ```
#[must_use]
pub fn available_kernels() -> Vec<&'static str> {
  let caps = platform::caps();
  CANDIDATES
    .iter()
    .filter(|c| caps.has(c.requires))
    .map(|c| c.name)
    .collect()
}

/// Look up a runnable kernel set by name.
///
/// Returns `None` for unknown names and for sets the CPU cannot run.
#[must_use]
pub fn get_kernel(name: &str) -> Option<&'static KernelSet> {
  let caps = platform::caps();
  CANDIDATES
    .iter()
    .find(|c| c.name == name && caps.has(c.requires))
    .map(|c| c.func)
}
