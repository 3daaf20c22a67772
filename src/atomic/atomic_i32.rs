/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 32-bit Signed Integer
//!
//! Provides the 32-bit atomic cell. The backing strategy is chosen at build
//! time: native instructions when the target has 32-bit atomics, otherwise
//! the lock-striped fallback.
//!
//! # Author
//!
//! Haixing Hu

use core::fmt;
use core::sync::atomic::Ordering;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;

#[cfg(all(target_has_atomic = "32", not(feature = "lock-fallback")))]
type Inner = core::sync::atomic::AtomicI32;

#[cfg(not(all(target_has_atomic = "32", not(feature = "lock-fallback"))))]
type Inner = crate::fallback::Locked<i32>;

impl_atomic_integer!(
    AtomicI32,
    Inner,
    i32,
    cfg!(all(target_has_atomic = "32", not(feature = "lock-fallback"))),
    "32-bit signed integer"
);
