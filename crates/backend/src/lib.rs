//! Backend crate: kernel selection and dispatch caching for the bitwise kernels.
//!
//! This crate provides the plumbing shared by every kernel crate:
//!
//! - **Dispatch**: Pick the best kernel from an ordered candidate list
//! - **Caching**: Resolve the selection once per process ([`OnceCache`])
//! - **Tiers**: Name the acceleration levels ([`KernelTier`])
//! - **Policy**: User-requested overrides ([`ForceMode`])
//!
//! # Architecture
//!
//! The dispatch system has two paths:
//!
//! 1. **Compile-time selection** (zero-cost): When target features are known at compile time
//!    (`-C target-feature=...`), `platform::caps_static()` already contains them and dead
//!    candidates fold away.
//!
//! 2. **Runtime selection** (cached): For generic binaries, the kernel crate detects CPU features
//!    once and caches the selected kernel. Subsequent calls are a single indirect call.
//!
//! # Usage
//!
//! Kernel crates register kernels as an ordered list of `Candidate`s.
//! Use the [`candidates!`] macro for concise syntax:
//!
//! ```
//! use backend::{KernelTier, candidates, dispatch::select};
//! use platform::caps::{Caps, mem};
//!
//! fn fast(x: u8) -> u8 {
//!   !x
//! }
//! fn slow(x: u8) -> u8 {
//!   x ^ 0xFF
//! }
//!
//! let chosen = select(
//!   mem::UNALIGNED,
//!   candidates![
//!     "word" => KernelTier::Word, mem::UNALIGNED => fast as fn(u8) -> u8,
//!     "portable" => KernelTier::Portable, Caps::NONE => slow,
//!   ],
//! );
//! assert_eq!(chosen.name, "word");
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod cache;
pub mod dispatch;
pub mod policy;
pub mod tier;

pub use cache::OnceCache;
// Re-export platform types for convenience.
pub use platform;
pub use policy::{ForceMode, ParseForceError};
pub use tier::KernelTier;
