/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Stripe Lock Table
//!
//! A fixed table of word-sized spinlocks. Every emulated location maps to
//! exactly one stripe by address, so all operations on that location,
//! whatever their family, serialize on the same lock.
//!
//! # Author
//!
//! Haixing Hu

// The compare-and-swap below must be a real instruction: were it lowered to
// a `__sync_val_compare_and_swap_*` libcall, exporting that symbol from
// this crate would recurse. See `sync_builtins`.
#[cfg(not(target_has_atomic = "ptr"))]
compile_error!(
    "the lock-based atomic fallback needs a word-sized compare-and-swap"
);

use core::hint;
use core::sync::atomic::{
    AtomicUsize,
    Ordering,
};

/// Number of stripes in the table. Must be a power of two.
pub(crate) const STRIPE_COUNT: usize = 64;

/// Addresses inside one aligned granule of this many bytes share a stripe.
const GRANULE_SHIFT: u32 = 3;

#[cfg(feature = "log")]
const CONTENTION_TRACE_SPINS: u32 = 1 << 10;

const UNLOCKED: usize = 0;
const LOCKED: usize = 1;

#[repr(align(64))]
struct Stripe {
    state: AtomicUsize,
}

impl Stripe {
    const fn new() -> Self {
        Self {
            state: AtomicUsize::new(UNLOCKED),
        }
    }
}

const INIT: Stripe = Stripe::new();

static STRIPES: [Stripe; STRIPE_COUNT] = [INIT; STRIPE_COUNT];

/// Holds one stripe locked until dropped.
pub(crate) struct StripeGuard {
    stripe: &'static Stripe,
}

impl Drop for StripeGuard {
    #[inline]
    fn drop(&mut self) {
        self.stripe.state.store(UNLOCKED, Ordering::SeqCst);
    }
}

/// Returns the stripe index that guards `addr`.
#[inline]
pub(crate) const fn stripe_index(addr: usize) -> usize {
    (addr >> GRANULE_SHIFT) & (STRIPE_COUNT - 1)
}

/// Spins until the stripe guarding `addr` is acquired.
#[inline]
pub(crate) fn lock(addr: usize) -> StripeGuard {
    let index = stripe_index(addr);
    let stripe = &STRIPES[index];
    #[cfg(feature = "log")]
    let mut spins: u32 = 0;
    while stripe
        .state
        .compare_exchange_weak(UNLOCKED, LOCKED, Ordering::SeqCst, Ordering::Relaxed)
        .is_err()
    {
        // Wait on plain loads so waiters don't bounce the cache line.
        while stripe.state.load(Ordering::Relaxed) != UNLOCKED {
            hint::spin_loop();
            #[cfg(feature = "log")]
            {
                spins = spins.wrapping_add(1);
                if spins == CONTENTION_TRACE_SPINS {
                    log::trace!(
                        "atomic fallback stripe {} contended for {} spins (addr {:#x})",
                        index,
                        spins,
                        addr
                    );
                }
            }
        }
    }
    StripeGuard { stripe }
}
