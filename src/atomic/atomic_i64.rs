/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Signed Integer
//!
//! Provides the 64-bit atomic cell. The backing strategy is chosen at build
//! time: native instructions when the target has 64-bit atomics, otherwise
//! the lock-striped fallback.
//!
//! # Author
//!
//! Haixing Hu

use core::fmt;
use core::sync::atomic::Ordering;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;

#[cfg(all(target_has_atomic = "64", not(feature = "lock-fallback")))]
type Inner = core::sync::atomic::AtomicI64;

#[cfg(not(all(target_has_atomic = "64", not(feature = "lock-fallback"))))]
type Inner = crate::fallback::Locked<i64>;

impl_atomic_integer!(
    AtomicI64,
    Inner,
    i64,
    cfg!(all(target_has_atomic = "64", not(feature = "lock-fallback"))),
    "64-bit signed integer"
);
