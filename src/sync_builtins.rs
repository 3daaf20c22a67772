/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # `__sync_*` Runtime Symbols
//!
//! The C-ABI entry points a compiler backend lowers atomic operations to
//! when the target cannot do them inline. Names, parameter order and
//! return values follow the legacy `__sync` builtin family exactly:
//! `__sync_<op>_<bytes>` taking a pointer to an `int8_t`..`int64_t`
//! location.
//!
//! Each symbol views the location as the matching atomic cell for the
//! duration of the call and forwards to it; none of them carries logic of
//! its own.
//!
//! Compiled with the `symbols` cargo feature only.
//!
//! Some targets report native atomics that LLVM itself lowers to these
//! very libcalls (the pre-ARMv6 Linux targets, for example). Exporting the
//! symbols there would make them call themselves, and `lock-fallback` does
//! not help: the fallback's stripe lock is a word-sized compare-and-swap,
//! which lowers to `__sync_val_compare_and_swap_4` as well. Such targets
//! must be built without `symbols` and take the symbols from the platform
//! runtime; the known ones are rejected at compile time.
//!
//! # Safety
//!
//! Every function here has the contract of the cell's `from_ptr`: `ptr`
//! must be non-null, aligned for the width, valid for reads and writes for
//! the call, and only accessed atomically meanwhile.
//!
//! "Aligned for the width" means `align_of` of the cell, which for a
//! native cell is its size. This is stricter than C on hosts where
//! `int64_t` is only 4-aligned (i686, for example): an 8-byte location
//! handed to the `_8` symbols must be 8-aligned there, as the
//! `__atomic`/`_Atomic` rules already require of atomically accessed
//! 64-bit objects.
//!
//! # Author
//!
//! Haixing Hu

#[cfg(all(target_arch = "arm", target_os = "linux", not(target_feature = "v6")))]
compile_error!(
    "pre-ARMv6 Linux lowers atomics to `__sync_*` libcalls; build without the `symbols` feature"
);

use core::sync::atomic::{
    fence,
    Ordering,
};

use crate::atomic::{
    AtomicI16,
    AtomicI32,
    AtomicI64,
    AtomicI8,
};

macro_rules! impl_sync_builtins {
    (
        $cell:ident,
        $value_type:ty,
        $bytes:literal,
        rmw { $($rmw_symbol:ident => $method:ident),* $(,)? },
        test_and_set: $test_and_set:ident,
        release: $release:ident,
        val_compare_and_swap: $val_cas:ident,
        bool_compare_and_swap: $bool_cas:ident $(,)?
    ) => {
        $(
            #[doc = concat!(
                "`", stringify!($rmw_symbol), "`: forwards to [`",
                stringify!($cell), "::", stringify!($method), "`]."
            )]
            ///
            /// # Safety
            ///
            /// See the [module-level contract](self).
            #[no_mangle]
            pub unsafe extern "C" fn $rmw_symbol(
                ptr: *mut $value_type,
                arg: $value_type,
            ) -> $value_type {
                // SAFETY: the caller upholds the `from_ptr` contract.
                unsafe { $cell::from_ptr(ptr) }.$method(arg)
            }
        )*

        #[doc = concat!(
            "`", stringify!($test_and_set), "`: stores `arg` into the ",
            $bytes, "-byte location and returns the previous value."
        )]
        ///
        /// # Safety
        ///
        /// See the [module-level contract](self).
        #[no_mangle]
        pub unsafe extern "C" fn $test_and_set(
            ptr: *mut $value_type,
            arg: $value_type,
        ) -> $value_type {
            // SAFETY: the caller upholds the `from_ptr` contract.
            unsafe { $cell::from_ptr(ptr) }.test_and_set(arg)
        }

        #[doc = concat!(
            "`", stringify!($release), "`: stores zero into the ",
            $bytes, "-byte location."
        )]
        ///
        /// # Safety
        ///
        /// See the [module-level contract](self).
        #[no_mangle]
        pub unsafe extern "C" fn $release(ptr: *mut $value_type) {
            // SAFETY: the caller upholds the `from_ptr` contract.
            unsafe { $cell::from_ptr(ptr) }.release();
        }

        #[doc = concat!(
            "`", stringify!($val_cas), "`: stores `new` if the ",
            $bytes, "-byte location holds `old`; returns the value held ",
            "before the attempt."
        )]
        ///
        /// # Safety
        ///
        /// See the [module-level contract](self).
        #[no_mangle]
        pub unsafe extern "C" fn $val_cas(
            ptr: *mut $value_type,
            old: $value_type,
            new: $value_type,
        ) -> $value_type {
            // SAFETY: the caller upholds the `from_ptr` contract.
            unsafe { $cell::from_ptr(ptr) }.compare_and_exchange(old, new)
        }

        #[doc = concat!(
            "`", stringify!($bool_cas), "`: stores `new` if the ",
            $bytes, "-byte location holds `old`; returns whether it did."
        )]
        ///
        /// # Safety
        ///
        /// See the [module-level contract](self).
        #[no_mangle]
        pub unsafe extern "C" fn $bool_cas(
            ptr: *mut $value_type,
            old: $value_type,
            new: $value_type,
        ) -> bool {
            // SAFETY: the caller upholds the `from_ptr` contract.
            unsafe { $cell::from_ptr(ptr) }.compare_and_swap(old, new)
        }
    };
}

impl_sync_builtins!(
    AtomicI8,
    i8,
    "1",
    rmw {
        __sync_fetch_and_add_1 => fetch_add,
        __sync_fetch_and_sub_1 => fetch_sub,
        __sync_fetch_and_or_1 => fetch_or,
        __sync_fetch_and_and_1 => fetch_and,
        __sync_fetch_and_xor_1 => fetch_xor,
        __sync_fetch_and_nand_1 => fetch_nand,
        __sync_add_and_fetch_1 => add_fetch,
        __sync_sub_and_fetch_1 => sub_fetch,
        __sync_or_and_fetch_1 => or_fetch,
        __sync_and_and_fetch_1 => and_fetch,
        __sync_xor_and_fetch_1 => xor_fetch,
        __sync_nand_and_fetch_1 => nand_fetch,
    },
    test_and_set: __sync_lock_test_and_set_1,
    release: __sync_lock_release_1,
    val_compare_and_swap: __sync_val_compare_and_swap_1,
    bool_compare_and_swap: __sync_bool_compare_and_swap_1,
);

impl_sync_builtins!(
    AtomicI16,
    i16,
    "2",
    rmw {
        __sync_fetch_and_add_2 => fetch_add,
        __sync_fetch_and_sub_2 => fetch_sub,
        __sync_fetch_and_or_2 => fetch_or,
        __sync_fetch_and_and_2 => fetch_and,
        __sync_fetch_and_xor_2 => fetch_xor,
        __sync_fetch_and_nand_2 => fetch_nand,
        __sync_add_and_fetch_2 => add_fetch,
        __sync_sub_and_fetch_2 => sub_fetch,
        __sync_or_and_fetch_2 => or_fetch,
        __sync_and_and_fetch_2 => and_fetch,
        __sync_xor_and_fetch_2 => xor_fetch,
        __sync_nand_and_fetch_2 => nand_fetch,
    },
    test_and_set: __sync_lock_test_and_set_2,
    release: __sync_lock_release_2,
    val_compare_and_swap: __sync_val_compare_and_swap_2,
    bool_compare_and_swap: __sync_bool_compare_and_swap_2,
);

impl_sync_builtins!(
    AtomicI32,
    i32,
    "4",
    rmw {
        __sync_fetch_and_add_4 => fetch_add,
        __sync_fetch_and_sub_4 => fetch_sub,
        __sync_fetch_and_or_4 => fetch_or,
        __sync_fetch_and_and_4 => fetch_and,
        __sync_fetch_and_xor_4 => fetch_xor,
        __sync_fetch_and_nand_4 => fetch_nand,
        __sync_add_and_fetch_4 => add_fetch,
        __sync_sub_and_fetch_4 => sub_fetch,
        __sync_or_and_fetch_4 => or_fetch,
        __sync_and_and_fetch_4 => and_fetch,
        __sync_xor_and_fetch_4 => xor_fetch,
        __sync_nand_and_fetch_4 => nand_fetch,
    },
    test_and_set: __sync_lock_test_and_set_4,
    release: __sync_lock_release_4,
    val_compare_and_swap: __sync_val_compare_and_swap_4,
    bool_compare_and_swap: __sync_bool_compare_and_swap_4,
);

impl_sync_builtins!(
    AtomicI64,
    i64,
    "8",
    rmw {
        __sync_fetch_and_add_8 => fetch_add,
        __sync_fetch_and_sub_8 => fetch_sub,
        __sync_fetch_and_or_8 => fetch_or,
        __sync_fetch_and_and_8 => fetch_and,
        __sync_fetch_and_xor_8 => fetch_xor,
        __sync_fetch_and_nand_8 => fetch_nand,
        __sync_add_and_fetch_8 => add_fetch,
        __sync_sub_and_fetch_8 => sub_fetch,
        __sync_or_and_fetch_8 => or_fetch,
        __sync_and_and_fetch_8 => and_fetch,
        __sync_xor_and_fetch_8 => xor_fetch,
        __sync_nand_and_fetch_8 => nand_fetch,
    },
    test_and_set: __sync_lock_test_and_set_8,
    release: __sync_lock_release_8,
    val_compare_and_swap: __sync_val_compare_and_swap_8,
    bool_compare_and_swap: __sync_bool_compare_and_swap_8,
);

/// `__sync_synchronize`: a full sequentially consistent memory barrier.
#[no_mangle]
pub extern "C" fn __sync_synchronize() {
    fence(Ordering::SeqCst);
}
