/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-sync-builtins
//!
//! Width-specific atomic read-modify-write primitives, and the `__sync_*`
//! runtime symbols a compiler backend calls when it cannot emit an atomic
//! instruction inline for a given operand width.
//!
//! ## Design Goals
//!
//! - **Correctness first**: every operation is linearizable and
//!   sequentially consistent
//! - **Build-time strategy**: each width uses native instructions when the
//!   target has them and a lock-striped emulation otherwise, with no
//!   runtime dispatch
//! - **Typed core, thin shim**: the typed cells carry the logic; the C-ABI
//!   layer only converts pointers and forwards
//! - **Runtime-support friendly**: `no_std`, no allocation, no error paths
//!
//! ## Features
//!
//! - Atomic cells: `AtomicI8`, `AtomicI16`, `AtomicI32`, `AtomicI64`
//! - Lock-based fallback cell: [`fallback::Locked`]
//! - C-ABI symbols `__sync_<op>_<bytes>` (cargo feature `symbols`, on by
//!   default)
//! - Cargo feature `lock-fallback` forces the emulation for every width
//! - Cargo feature `log` traces contended fallback locks
//!
//! ## Example
//!
//! ```rust
//! use prism3_sync_builtins::AtomicI32;
//!
//! let loc = AtomicI32::new(10);
//! assert_eq!(loc.fetch_add(5), 10);
//! assert_eq!(loc.add_fetch(5), 20);
//! assert_eq!(loc.compare_and_exchange(20, 99), 20);
//! assert_eq!(loc.compare_and_exchange(20, 1), 99);
//! assert_eq!(loc.load(), 99);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;
pub mod fallback;
#[cfg(feature = "symbols")]
pub mod sync_builtins;

pub use atomic::{
    Atomic,
    AtomicI16,
    AtomicI32,
    AtomicI64,
    AtomicI8,
    AtomicInteger,
};
