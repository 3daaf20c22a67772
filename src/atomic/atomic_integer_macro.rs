/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integer Macro
//!
//! Provides a macro to generate the width-specific atomic cells with
//! consistent implementations over either backing strategy.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate an atomic integer cell.
///
/// This macro generates a complete atomic cell type with all methods,
/// trait implementations, and documentation.
///
/// # Parameters
///
/// * `$name` - The name of the atomic type (e.g., `AtomicI32`)
/// * `$inner_type` - The backing cell: a `core::sync::atomic` type or a
///   [`Locked`](crate::fallback::Locked) cell. Both expose the same method
///   set.
/// * `$value_type` - The value type (e.g., `i32`)
/// * `$lock_free` - Whether `$inner_type` uses native instructions
/// * `$doc_type` - The type description for documentation (e.g., "32-bit
///   signed integer")
macro_rules! impl_atomic_integer {
    (
        $name:ident,
        $inner_type:ty,
        $value_type:ty,
        $lock_free:expr,
        $doc_type:expr
    ) => {
        #[doc = concat!("Atomic ", $doc_type, ".")]
        ///
        /// Every operation is linearizable and sequentially consistent,
        /// whether the width is backed by native instructions or by the
        /// lock-based fallback. Use `IS_LOCK_FREE` to find out which one
        /// was selected for the current build.
        ///
        /// Arithmetic wraps on overflow.
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use prism3_sync_builtins::", stringify!($name), ";")]
        /// use std::sync::Arc;
        /// use std::thread;
        ///
        #[doc = concat!("let counter = Arc::new(", stringify!($name), "::new(0));")]
        /// let mut handles = vec![];
        ///
        /// for _ in 0..4 {
        ///     let counter = counter.clone();
        ///     handles.push(thread::spawn(move || {
        ///         for _ in 0..25 {
        ///             counter.fetch_add(1);
        ///         }
        ///     }));
        /// }
        ///
        /// for handle in handles {
        ///     handle.join().unwrap();
        /// }
        ///
        /// assert_eq!(counter.load(), 100);
        /// ```
        ///
        /// # Author
        ///
        /// Haixing Hu
        #[repr(transparent)]
        pub struct $name {
            inner: $inner_type,
        }

        impl $name {
            /// Whether this width uses native atomic instructions.
            pub const IS_LOCK_FREE: bool = $lock_free;

            /// Creates a new atomic integer.
            ///
            /// # Parameters
            ///
            /// * `value` - The initial value.
            #[inline]
            pub const fn new(value: $value_type) -> Self {
                Self {
                    inner: <$inner_type>::new(value),
                }
            }

            /// Views caller-owned memory as an atomic cell.
            ///
            /// # Safety
            ///
            /// * `ptr` must be non-null and aligned to
            #[doc = concat!("  `align_of::<", stringify!($name), ">()`. For a lock-free cell")]
            #[doc = concat!("  this equals its size, which can exceed `align_of::<", stringify!($value_type), ">()`.")]
            /// * `ptr` must be valid for reads and writes for the whole of
            ///   `'a`.
            /// * For the whole of `'a`, the memory must only be accessed
            ///   through atomic operations of this width.
            #[inline]
            pub unsafe fn from_ptr<'a>(ptr: *mut $value_type) -> &'a Self {
                // SAFETY: `Self` is `repr(transparent)` over a cell with the
                // layout of `$value_type`; the caller upholds validity,
                // alignment and exclusive atomic access.
                unsafe { &*ptr.cast::<Self>() }
            }

            /// Returns a raw pointer to the underlying integer.
            #[inline]
            pub fn as_ptr(&self) -> *mut $value_type {
                self.inner.as_ptr()
            }

            /// Loads the current value.
            #[inline]
            pub fn load(&self) -> $value_type {
                self.inner.load(Ordering::SeqCst)
            }

            /// Stores a new value.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value to store.
            #[inline]
            pub fn store(&self, value: $value_type) {
                self.inner.store(value, Ordering::SeqCst);
            }

            /// Swaps the current value with a new value, returning the old
            /// value.
            #[inline]
            pub fn swap(&self, value: $value_type) -> $value_type {
                self.inner.swap(value, Ordering::SeqCst)
            }

            /// Compares and sets the value atomically.
            ///
            /// If the current value equals `current`, sets it to `new` and
            /// returns `Ok(())`. Otherwise, returns `Err(actual)` where
            /// `actual` is the current value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_sync_builtins::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// assert!(atomic.compare_set(10, 20).is_ok());
            /// assert_eq!(atomic.compare_set(10, 30), Err(20));
            /// ```
            #[inline]
            pub fn compare_set(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> Result<(), $value_type> {
                self.inner
                    .compare_exchange(current, new, Ordering::SeqCst, Ordering::SeqCst)
                    .map(|_| ())
            }

            /// Compares and exchanges the value atomically.
            ///
            /// If the current value equals `current`, sets it to `new`.
            /// Either way, returns the value held before the attempt, so
            /// the swap happened exactly when the result equals `current`.
            #[inline]
            pub fn compare_and_exchange(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                match self.inner.compare_exchange(
                    current,
                    new,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                ) {
                    Ok(prev) => prev,
                    Err(actual) => actual,
                }
            }

            /// Compares and swaps the value atomically, returning whether
            /// the swap happened.
            #[inline]
            pub fn compare_and_swap(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> bool {
                self.compare_set(current, new).is_ok()
            }

            /// Adds `arg` with wrap-around, returning the old value.
            #[inline]
            pub fn fetch_add(&self, arg: $value_type) -> $value_type {
                self.inner.fetch_add(arg, Ordering::SeqCst)
            }

            /// Subtracts `arg` with wrap-around, returning the old value.
            #[inline]
            pub fn fetch_sub(&self, arg: $value_type) -> $value_type {
                self.inner.fetch_sub(arg, Ordering::SeqCst)
            }

            /// Bitwise OR with `arg`, returning the old value.
            #[inline]
            pub fn fetch_or(&self, arg: $value_type) -> $value_type {
                self.inner.fetch_or(arg, Ordering::SeqCst)
            }

            /// Bitwise AND with `arg`, returning the old value.
            #[inline]
            pub fn fetch_and(&self, arg: $value_type) -> $value_type {
                self.inner.fetch_and(arg, Ordering::SeqCst)
            }

            /// Bitwise XOR with `arg`, returning the old value.
            #[inline]
            pub fn fetch_xor(&self, arg: $value_type) -> $value_type {
                self.inner.fetch_xor(arg, Ordering::SeqCst)
            }

            /// Stores `!(old & arg)`, returning the old value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_sync_builtins::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(0b1100);")]
            /// assert_eq!(atomic.fetch_nand(0b1010), 0b1100);
            /// assert_eq!(atomic.load(), !0b1000);
            /// ```
            #[inline]
            pub fn fetch_nand(&self, arg: $value_type) -> $value_type {
                self.inner.fetch_nand(arg, Ordering::SeqCst)
            }

            /// Adds `arg` with wrap-around, returning the new value.
            #[inline]
            pub fn add_fetch(&self, arg: $value_type) -> $value_type {
                self.fetch_add(arg).wrapping_add(arg)
            }

            /// Subtracts `arg` with wrap-around, returning the new value.
            #[inline]
            pub fn sub_fetch(&self, arg: $value_type) -> $value_type {
                self.fetch_sub(arg).wrapping_sub(arg)
            }

            /// Bitwise OR with `arg`, returning the new value.
            #[inline]
            pub fn or_fetch(&self, arg: $value_type) -> $value_type {
                self.fetch_or(arg) | arg
            }

            /// Bitwise AND with `arg`, returning the new value.
            #[inline]
            pub fn and_fetch(&self, arg: $value_type) -> $value_type {
                self.fetch_and(arg) & arg
            }

            /// Bitwise XOR with `arg`, returning the new value.
            #[inline]
            pub fn xor_fetch(&self, arg: $value_type) -> $value_type {
                self.fetch_xor(arg) ^ arg
            }

            /// Stores `!(old & arg)`, returning the new value.
            #[inline]
            pub fn nand_fetch(&self, arg: $value_type) -> $value_type {
                !(self.fetch_nand(arg) & arg)
            }

            /// Stores `arg`, returning the previous value.
            ///
            /// Used as a spinlock acquire: a non-zero previous value means
            /// the lock was already held.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_sync_builtins::", stringify!($name), ";")]
            ///
            #[doc = concat!("let lock = ", stringify!($name), "::new(0);")]
            /// while lock.test_and_set(1) != 0 {
            ///     std::hint::spin_loop();
            /// }
            /// // critical section
            /// lock.release();
            /// ```
            #[inline]
            pub fn test_and_set(&self, arg: $value_type) -> $value_type {
                self.swap(arg)
            }

            /// Stores zero, releasing a lock taken with `test_and_set`.
            #[inline]
            pub fn release(&self) {
                self.store(0);
            }
        }

        impl crate::atomic::traits::Atomic for $name {
            type Value = $value_type;

            const IS_LOCK_FREE: bool = $lock_free;

            #[inline]
            fn load(&self) -> $value_type {
                self.load()
            }

            #[inline]
            fn store(&self, value: $value_type) {
                self.store(value);
            }

            #[inline]
            fn swap(&self, value: $value_type) -> $value_type {
                self.swap(value)
            }

            #[inline]
            fn compare_set(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> Result<(), $value_type> {
                self.compare_set(current, new)
            }

            #[inline]
            fn compare_and_exchange(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> $value_type {
                self.compare_and_exchange(current, new)
            }

            #[inline]
            fn compare_and_swap(&self, current: $value_type, new: $value_type) -> bool {
                self.compare_and_swap(current, new)
            }
        }

        impl crate::atomic::traits::AtomicInteger for $name {
            #[inline]
            fn fetch_add(&self, arg: $value_type) -> $value_type {
                self.fetch_add(arg)
            }

            #[inline]
            fn fetch_sub(&self, arg: $value_type) -> $value_type {
                self.fetch_sub(arg)
            }

            #[inline]
            fn fetch_or(&self, arg: $value_type) -> $value_type {
                self.fetch_or(arg)
            }

            #[inline]
            fn fetch_and(&self, arg: $value_type) -> $value_type {
                self.fetch_and(arg)
            }

            #[inline]
            fn fetch_xor(&self, arg: $value_type) -> $value_type {
                self.fetch_xor(arg)
            }

            #[inline]
            fn fetch_nand(&self, arg: $value_type) -> $value_type {
                self.fetch_nand(arg)
            }

            #[inline]
            fn add_fetch(&self, arg: $value_type) -> $value_type {
                self.add_fetch(arg)
            }

            #[inline]
            fn sub_fetch(&self, arg: $value_type) -> $value_type {
                self.sub_fetch(arg)
            }

            #[inline]
            fn or_fetch(&self, arg: $value_type) -> $value_type {
                self.or_fetch(arg)
            }

            #[inline]
            fn and_fetch(&self, arg: $value_type) -> $value_type {
                self.and_fetch(arg)
            }

            #[inline]
            fn xor_fetch(&self, arg: $value_type) -> $value_type {
                self.xor_fetch(arg)
            }

            #[inline]
            fn nand_fetch(&self, arg: $value_type) -> $value_type {
                self.nand_fetch(arg)
            }

            #[inline]
            fn test_and_set(&self, arg: $value_type) -> $value_type {
                self.test_and_set(arg)
            }

            #[inline]
            fn release(&self) {
                self.release();
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl From<$value_type> for $name {
            #[inline]
            fn from(value: $value_type) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("value", &self.load())
                    .field("lock_free", &Self::IS_LOCK_FREE)
                    .finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.load())
            }
        }
    };
}

pub(crate) use impl_atomic_integer;
