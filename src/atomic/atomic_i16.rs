/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 16-bit Signed Integer
//!
//! Provides the 16-bit atomic cell. The backing strategy is chosen at build
//! time: native instructions when the target has 16-bit atomics, otherwise
//! the lock-striped fallback.
//!
//! # Author
//!
//! Haixing Hu

use core::fmt;
use core::sync::atomic::Ordering;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;

#[cfg(all(target_has_atomic = "16", not(feature = "lock-fallback")))]
type Inner = core::sync::atomic::AtomicI16;

#[cfg(not(all(target_has_atomic = "16", not(feature = "lock-fallback"))))]
type Inner = crate::fallback::Locked<i16>;

impl_atomic_integer!(
    AtomicI16,
    Inner,
    i16,
    cfg!(all(target_has_atomic = "16", not(feature = "lock-fallback"))),
    "16-bit signed integer"
);
