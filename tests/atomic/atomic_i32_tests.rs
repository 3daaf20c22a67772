/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_sync_builtins::AtomicI32;

test_atomic_integer!(prism3_sync_builtins::AtomicI32, i32, common);

#[test]
fn test_size_matches_i32() {
    assert_eq!(std::mem::size_of::<AtomicI32>(), 4);
}

// 10 -> 15 -> 20 -> 99, then a stale CAS observes 99.
#[test]
fn test_worked_sequence() {
    let loc = AtomicI32::new(10);
    assert_eq!(loc.fetch_add(5), 10);
    assert_eq!(loc.load(), 15);
    assert_eq!(loc.add_fetch(5), 20);
    assert_eq!(loc.load(), 20);
    assert_eq!(loc.compare_and_exchange(20, 99), 20);
    assert_eq!(loc.load(), 99);
    assert_eq!(loc.compare_and_exchange(20, 1), 99);
    assert_eq!(loc.load(), 99);
}
