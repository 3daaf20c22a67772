/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 8-bit Signed Integer
//!
//! Provides the 8-bit atomic cell. The backing strategy is chosen at build
//! time: native instructions when the target has 8-bit atomics, otherwise
//! the lock-striped fallback.
//!
//! # Author
//!
//! Haixing Hu

use core::fmt;
use core::sync::atomic::Ordering;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;

#[cfg(all(target_has_atomic = "8", not(feature = "lock-fallback")))]
type Inner = core::sync::atomic::AtomicI8;

#[cfg(not(all(target_has_atomic = "8", not(feature = "lock-fallback"))))]
type Inner = crate::fallback::Locked<i8>;

impl_atomic_integer!(
    AtomicI8,
    Inner,
    i8,
    cfg!(all(target_has_atomic = "8", not(feature = "lock-fallback"))),
    "8-bit signed integer"
);
