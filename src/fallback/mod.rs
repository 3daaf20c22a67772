/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Lock-Based Atomic Fallback
//!
//! Emulates atomic integer operations for widths the target has no native
//! instructions for. Every access to a [`Locked`] cell, loads and stores
//! included, runs while holding the stripe lock keyed by the cell's
//! address, so the operations on one location form a single
//! total order.
//!
//! The method set mirrors the `core::sync::atomic` integer types, ordering
//! arguments included, which lets the per-width cells pick either one at
//! build time without any other change. The ordering arguments are
//! accepted for signature parity only: the stripe lock is taken and
//! released with `SeqCst`, which is the strongest ordering there is.
//!
//! Each operation runs inside a [`critical_section`] so it cannot be
//! re-entered from an interrupt (or, on hosted targets, a signal handler)
//! on the same core while a stripe is held. The stripe lock then excludes
//! the other cores. The final binary must provide a `critical-section`
//! implementation, as with any crate built on it.
//!
//! This module is always compiled, even when every width is native, so the
//! emulation can be exercised directly.
//!
//! # Author
//!
//! Haixing Hu

mod stripe;

use core::cell::UnsafeCell;
use core::ops::{
    BitAnd,
    BitOr,
    BitXor,
    Not,
};
use core::sync::atomic::Ordering;

/// Integer types a [`Locked`] cell can hold.
pub trait Integer:
    Copy
    + Eq
    + Send
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Two's-complement addition.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Two's-complement subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Integer for $ty {
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

/// An integer cell whose operations are made atomic by a stripe lock.
///
/// Has the same in-memory representation as `T`.
///
/// # Example
///
/// ```rust
/// use core::sync::atomic::Ordering;
/// use prism3_sync_builtins::fallback::Locked;
///
/// let cell = Locked::new(10_i64);
/// assert_eq!(cell.fetch_add(5, Ordering::SeqCst), 10);
/// assert_eq!(cell.load(Ordering::SeqCst), 15);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct Locked<T> {
    value: UnsafeCell<T>,
}

// SAFETY: every access to `value` happens while the stripe lock for its
// address is held.
unsafe impl<T: Send> Sync for Locked<T> {}

impl<T> Locked<T> {
    /// Creates a new cell holding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value: UnsafeCell::new(value),
        }
    }

    /// Returns a raw pointer to the stored value.
    #[inline]
    pub const fn as_ptr(&self) -> *mut T {
        self.value.get()
    }
}

impl<T: Integer> Locked<T> {
    /// Runs `f` on the value while holding the stripe lock for its address.
    ///
    /// The stripe is only taken inside a critical section. An interrupt
    /// handler that lands on a held stripe would otherwise spin forever on
    /// the core it interrupted.
    #[inline]
    fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let ptr = self.value.get();
        critical_section::with(|_| {
            let _guard = stripe::lock(ptr as usize);
            // SAFETY: the guard makes this the only live access to `*ptr`.
            f(unsafe { &mut *ptr })
        })
    }

    /// Replaces the value with `f(old)` and returns `old`.
    #[inline]
    fn fetch_with(&self, f: impl FnOnce(T) -> T) -> T {
        self.with(|value| {
            let old = *value;
            *value = f(old);
            old
        })
    }

    /// Loads the value.
    #[inline]
    pub fn load(&self, _order: Ordering) -> T {
        self.with(|value| *value)
    }

    /// Stores `val`.
    #[inline]
    pub fn store(&self, val: T, _order: Ordering) {
        self.with(|value| *value = val);
    }

    /// Stores `val` and returns the previous value.
    #[inline]
    pub fn swap(&self, val: T, _order: Ordering) -> T {
        self.fetch_with(|_| val)
    }

    /// Stores `new` if the value equals `current`.
    ///
    /// Returns `Ok(previous)` when the store happened, otherwise
    /// `Err(actual)`.
    #[inline]
    pub fn compare_exchange(
        &self,
        current: T,
        new: T,
        _success: Ordering,
        _failure: Ordering,
    ) -> Result<T, T> {
        self.with(|value| {
            let old = *value;
            if old == current {
                *value = new;
                Ok(old)
            } else {
                Err(old)
            }
        })
    }

    /// Adds `val` with wrap-around, returning the previous value.
    #[inline]
    pub fn fetch_add(&self, val: T, _order: Ordering) -> T {
        self.fetch_with(|old| old.wrapping_add(val))
    }

    /// Subtracts `val` with wrap-around, returning the previous value.
    #[inline]
    pub fn fetch_sub(&self, val: T, _order: Ordering) -> T {
        self.fetch_with(|old| old.wrapping_sub(val))
    }

    /// Bitwise AND with `val`, returning the previous value.
    #[inline]
    pub fn fetch_and(&self, val: T, _order: Ordering) -> T {
        self.fetch_with(|old| old & val)
    }

    /// Bitwise OR with `val`, returning the previous value.
    #[inline]
    pub fn fetch_or(&self, val: T, _order: Ordering) -> T {
        self.fetch_with(|old| old | val)
    }

    /// Bitwise XOR with `val`, returning the previous value.
    #[inline]
    pub fn fetch_xor(&self, val: T, _order: Ordering) -> T {
        self.fetch_with(|old| old ^ val)
    }

    /// Stores `!(old & val)`, returning the previous value.
    #[inline]
    pub fn fetch_nand(&self, val: T, _order: Ordering) -> T {
        self.fetch_with(|old| !(old & val))
    }
}

impl<T: Integer + Default> Default for Locked<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}
