/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_sync_builtins::AtomicI16;

test_atomic_integer!(prism3_sync_builtins::AtomicI16, i16, common);

#[test]
fn test_size_matches_i16() {
    assert_eq!(std::mem::size_of::<AtomicI16>(), 2);
}

#[test]
fn test_high_byte_bit_operations() {
    let atomic = AtomicI16::new(0x0100);
    assert_eq!(atomic.or_fetch(0x7f00), 0x7f00);
    assert_eq!(atomic.fetch_xor(0x0f00), 0x7f00);
    assert_eq!(atomic.load(), 0x7000);
}
