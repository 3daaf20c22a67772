/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Cells
//!
//! One opaque atomic integer cell per operand width. Each cell exposes only
//! atomic operations, all sequentially consistent, and is backed either by
//! the matching `core::sync::atomic` type or by the lock-based fallback,
//! depending on what the target supports.
//!
//! # Author
//!
//! Haixing Hu

mod atomic_integer_macro;

mod atomic_i16;
mod atomic_i32;
mod atomic_i64;
mod atomic_i8;
mod traits;

pub use atomic_i16::AtomicI16;
pub use atomic_i32::AtomicI32;
pub use atomic_i64::AtomicI64;
pub use atomic_i8::AtomicI8;
pub use traits::{
    Atomic,
    AtomicInteger,
};
