/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

// Signal handlers stand in for interrupt handlers: the handler re-enters the
// fallback on the very thread it interrupted, possibly while that thread is
// inside a stripe critical section.

use prism3_sync_builtins::fallback::Locked;
use std::sync::atomic::Ordering::SeqCst;
use std::sync::atomic::{
    AtomicBool,
    AtomicUsize,
};
use std::sync::mpsc;
use std::thread;
use std::time::{
    Duration,
    Instant,
};

const MIN_ITERATIONS: usize = 50_000;
const MIN_HANDLER_HITS: usize = 200;
const STALL_TIMEOUT: Duration = Duration::from_secs(10);

fn install_handler(signal: libc::c_int, handler: extern "C" fn(libc::c_int)) {
    unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        action.sa_sigaction = handler as usize;
        action.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&mut action.sa_mask);
        assert_eq!(libc::sigaction(signal, &action, std::ptr::null_mut()), 0);
    }
}

/// Runs `work` in a loop on a worker thread that is bombarded with `signal`
/// until both the iteration and handler-hit targets are met. Panics if the
/// worker stops making progress. Returns the number of iterations run.
fn run_under_signals(
    signal: libc::c_int,
    handler: extern "C" fn(libc::c_int),
    hits: &'static AtomicUsize,
    work: fn(),
) -> usize {
    install_handler(signal, handler);

    let progress = std::sync::Arc::new(AtomicUsize::new(0));
    let done = std::sync::Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel();

    let worker = {
        let progress = progress.clone();
        let done = done.clone();
        thread::spawn(move || {
            tx.send(unsafe { libc::pthread_self() } as usize).unwrap();
            let mut iterations = 0;
            while iterations < MIN_ITERATIONS || hits.load(SeqCst) < MIN_HANDLER_HITS {
                work();
                iterations += 1;
                progress.store(iterations, SeqCst);
            }
            done.store(true, SeqCst);
            iterations
        })
    };

    let target = rx.recv().unwrap() as libc::pthread_t;
    let mut last_progress = 0;
    let mut last_change = Instant::now();
    while !done.load(SeqCst) {
        unsafe {
            libc::pthread_kill(target, signal);
        }
        thread::sleep(Duration::from_micros(20));

        let current = progress.load(SeqCst);
        if current != last_progress {
            last_progress = current;
            last_change = Instant::now();
        } else if last_change.elapsed() > STALL_TIMEOUT {
            panic!("worker stuck after {} iterations", current);
        }
    }

    worker.join().unwrap()
}

static LOCKED_COUNTER: Locked<i64> = Locked::new(0);
static LOCKED_HITS: AtomicUsize = AtomicUsize::new(0);

extern "C" fn bump_locked_counter(_signal: libc::c_int) {
    LOCKED_COUNTER.fetch_add(1, SeqCst);
    LOCKED_HITS.fetch_add(1, SeqCst);
}

#[test]
fn test_locked_reentered_from_signal_handler() {
    let iterations = run_under_signals(
        libc::SIGUSR1,
        bump_locked_counter,
        &LOCKED_HITS,
        || {
            LOCKED_COUNTER.fetch_add(1, SeqCst);
        },
    );

    assert!(LOCKED_HITS.load(SeqCst) >= MIN_HANDLER_HITS);
    assert_eq!(
        LOCKED_COUNTER.load(SeqCst),
        (iterations + LOCKED_HITS.load(SeqCst)) as i64
    );
}

// Two cells in one 8-byte granule always share a stripe, so the handler
// contends with the interrupted thread without touching its location.
#[repr(align(8))]
struct SharedGranule([Locked<i32>; 2]);

static GRANULE: SharedGranule = SharedGranule([Locked::new(0), Locked::new(0)]);
static GRANULE_HITS: AtomicUsize = AtomicUsize::new(0);

extern "C" fn bump_neighbour(_signal: libc::c_int) {
    GRANULE.0[1].fetch_add(1, SeqCst);
    GRANULE_HITS.fetch_add(1, SeqCst);
}

#[test]
fn test_neighbour_on_same_stripe_reentered_from_signal_handler() {
    let iterations = run_under_signals(
        libc::SIGUSR2,
        bump_neighbour,
        &GRANULE_HITS,
        || {
            GRANULE.0[0].fetch_add(1, SeqCst);
        },
    );

    assert_eq!(GRANULE.0[0].load(SeqCst), iterations as i32);
    assert_eq!(GRANULE.0[1].load(SeqCst), GRANULE_HITS.load(SeqCst) as i32);
}

#[cfg(feature = "symbols")]
mod symbols {
    use super::*;
    use prism3_sync_builtins::sync_builtins::__sync_fetch_and_add_8;
    use prism3_sync_builtins::AtomicI64;

    static SYMBOL_COUNTER: AtomicI64 = AtomicI64::new(0);
    static SYMBOL_HITS: AtomicUsize = AtomicUsize::new(0);

    extern "C" fn bump_through_symbol(_signal: libc::c_int) {
        unsafe {
            __sync_fetch_and_add_8(SYMBOL_COUNTER.as_ptr(), 1);
        }
        SYMBOL_HITS.fetch_add(1, SeqCst);
    }

    // With `lock-fallback` this runs through `Locked<i64>`.
    #[test]
    fn test_fetch_and_add_8_reentered_from_signal_handler() {
        let iterations = run_under_signals(
            libc::SIGURG,
            bump_through_symbol,
            &SYMBOL_HITS,
            || unsafe {
                __sync_fetch_and_add_8(SYMBOL_COUNTER.as_ptr(), 1);
            },
        );

        assert_eq!(
            SYMBOL_COUNTER.load(),
            (iterations + SYMBOL_HITS.load(SeqCst)) as i64
        );
    }
}
