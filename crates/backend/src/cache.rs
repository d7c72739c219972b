//! Lazy, process-wide caching of dispatch decisions.
//!
//! [`OnceCache`] has the same semantics as `std::sync::OnceLock` for `Copy`
//! values but also works on no_std targets.
//!
//! # Caching Strategy
//!
//! - **std**: Uses `OnceLock` for thread-safe lazy initialization
//! - **no_std with atomics**: Uses an atomic state machine
//! - **no_std without atomics**: Per-call computation (single-threaded embedded)

#![allow(unsafe_code)]

#[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
use core::cell::UnsafeCell;
#[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
use core::mem::MaybeUninit;

/// A write-once cache for a `Copy` value.
///
/// - Zero-cost after first initialization (one acquire load)
/// - Thread-safe on targets with atomics
/// - Falls back to per-call computation on targets without atomics
///
/// ```
/// use backend::OnceCache;
///
/// static ANSWER: OnceCache<u32> = OnceCache::new();
///
/// assert_eq!(ANSWER.get_or_init(|| 42), 42);
/// assert_eq!(ANSWER.get_or_init(|| 7), 42);
/// ```
pub struct OnceCache<T: Copy> {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<T>,

  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  state: core::sync::atomic::AtomicU8,
  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  value: UnsafeCell<MaybeUninit<T>>,

  #[cfg(all(not(feature = "std"), not(target_has_atomic = "ptr")))]
  _marker: core::marker::PhantomData<*const T>,
}

// SAFETY: the value is written exactly once before READY is published with
// release ordering; readers only touch it after an acquire load of READY.
// Without atomics the target is single-threaded.
#[cfg(not(feature = "std"))]
unsafe impl<T: Copy + Send + Sync> Sync for OnceCache<T> {}
#[cfg(not(feature = "std"))]
// SAFETY: same argument as `Sync`; `T` itself is `Send`.
unsafe impl<T: Copy + Send + Sync> Send for OnceCache<T> {}

impl<T: Copy> OnceCache<T> {
  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  const UNINIT: u8 = 0;
  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  const INITING: u8 = 1;
  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  const READY: u8 = 2;

  /// Create a new empty cache.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),

      #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
      state: core::sync::atomic::AtomicU8::new(0),
      #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
      value: UnsafeCell::new(MaybeUninit::uninit()),

      #[cfg(all(not(feature = "std"), not(target_has_atomic = "ptr")))]
      _marker: core::marker::PhantomData,
    }
  }

  /// Get the cached value, initializing with `f` if not yet set.
  ///
  /// On targets with atomics the initializer runs at most once. Concurrent
  /// first callers spin until the winner publishes its value.
  #[inline]
  pub fn get_or_init(&self, f: impl FnOnce() -> T) -> T {
    #[cfg(feature = "std")]
    {
      *self.inner.get_or_init(f)
    }

    #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
    {
      use core::sync::atomic::Ordering;

      if self.state.load(Ordering::Acquire) == Self::READY {
        // SAFETY: the value is initialized once the state is READY.
        return unsafe { (*self.value.get()).assume_init() };
      }

      if self
        .state
        .compare_exchange(Self::UNINIT, Self::INITING, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
      {
        let value = f();
        // SAFETY: the INITING state grants exclusive write access.
        unsafe {
          (*self.value.get()).write(value);
        }
        self.state.store(Self::READY, Ordering::Release);
        return value;
      }

      while self.state.load(Ordering::Acquire) != Self::READY {
        core::hint::spin_loop();
      }
      // SAFETY: the value is initialized once the state is READY.
      unsafe {
        (*self.value.get()).assume_init()
      }
    }

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "ptr")))]
    {
      f()
    }
  }

  /// Return the cached value if it has been initialized.
  #[inline]
  #[must_use]
  pub fn get(&self) -> Option<T> {
    #[cfg(feature = "std")]
    {
      self.inner.get().copied()
    }

    #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
    {
      use core::sync::atomic::Ordering;

      if self.state.load(Ordering::Acquire) != Self::READY {
        return None;
      }
      // SAFETY: the value is initialized once the state is READY.
      Some(unsafe { (*self.value.get()).assume_init() })
    }

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "ptr")))]
    {
      None
    }
  }
}

impl<T: Copy> Default for OnceCache<T> {
  fn default() -> Self {
    Self::new()
  }
}
