/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines common traits for the width-specific atomic cells, providing a
//! unified interface over every width and backing strategy.
//!
//! Every operation is sequentially consistent.
//!
//! # Author
//!
//! Haixing Hu

/// Common trait for all atomic cells.
///
/// Provides load, store, swap and the compare-and-swap variants.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the atomic.
    type Value;

    /// Whether operations on this cell use native atomic instructions
    /// rather than the lock-based fallback.
    const IS_LOCK_FREE: bool;

    /// Loads the current value.
    fn load(&self) -> Self::Value;

    /// Stores a new value.
    fn store(&self, value: Self::Value);

    /// Swaps the current value with a new value, returning the old value.
    fn swap(&self, value: Self::Value) -> Self::Value;

    /// Compares and sets the value atomically.
    ///
    /// If the current value equals `current`, sets it to `new` and returns
    /// `Ok(())`. Otherwise, returns `Err(actual)`.
    fn compare_set(&self, current: Self::Value, new: Self::Value) -> Result<(), Self::Value>;

    /// Compares and exchanges the value atomically, returning the value
    /// held before the attempt whether or not the swap happened.
    fn compare_and_exchange(&self, current: Self::Value, new: Self::Value) -> Self::Value;

    /// Compares and swaps the value atomically, returning whether the swap
    /// happened.
    fn compare_and_swap(&self, current: Self::Value, new: Self::Value) -> bool;
}

/// Trait for atomic integer cells.
///
/// Provides the fetch-and-op and op-and-fetch families plus the
/// test-and-set / release pair used to build spinlocks.
///
/// Arithmetic wraps on overflow.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicInteger: Atomic {
    /// Adds `arg`, returning the old value.
    fn fetch_add(&self, arg: Self::Value) -> Self::Value;

    /// Subtracts `arg`, returning the old value.
    fn fetch_sub(&self, arg: Self::Value) -> Self::Value;

    /// Bitwise OR with `arg`, returning the old value.
    fn fetch_or(&self, arg: Self::Value) -> Self::Value;

    /// Bitwise AND with `arg`, returning the old value.
    fn fetch_and(&self, arg: Self::Value) -> Self::Value;

    /// Bitwise XOR with `arg`, returning the old value.
    fn fetch_xor(&self, arg: Self::Value) -> Self::Value;

    /// Stores `!(old & arg)`, returning the old value.
    fn fetch_nand(&self, arg: Self::Value) -> Self::Value;

    /// Adds `arg`, returning the new value.
    fn add_fetch(&self, arg: Self::Value) -> Self::Value;

    /// Subtracts `arg`, returning the new value.
    fn sub_fetch(&self, arg: Self::Value) -> Self::Value;

    /// Bitwise OR with `arg`, returning the new value.
    fn or_fetch(&self, arg: Self::Value) -> Self::Value;

    /// Bitwise AND with `arg`, returning the new value.
    fn and_fetch(&self, arg: Self::Value) -> Self::Value;

    /// Bitwise XOR with `arg`, returning the new value.
    fn xor_fetch(&self, arg: Self::Value) -> Self::Value;

    /// Stores `!(old & arg)`, returning the new value.
    fn nand_fetch(&self, arg: Self::Value) -> Self::Value;

    /// Stores `arg`, returning the previous value.
    ///
    /// A non-zero previous value means the lock was already held.
    fn test_and_set(&self, arg: Self::Value) -> Self::Value;

    /// Stores zero, releasing a lock taken with
    /// [`test_and_set`](AtomicInteger::test_and_set).
    fn release(&self);
}
