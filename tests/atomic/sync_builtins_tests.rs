/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_sync_builtins::sync_builtins::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_worked_sequence_4() {
    let mut loc: i32 = 10;
    let ptr = &mut loc as *mut i32;
    unsafe {
        assert_eq!(__sync_fetch_and_add_4(ptr, 5), 10);
        assert_eq!(*ptr, 15);
        assert_eq!(__sync_add_and_fetch_4(ptr, 5), 20);
        assert_eq!(__sync_val_compare_and_swap_4(ptr, 20, 99), 20);
        assert_eq!(*ptr, 99);
        assert_eq!(__sync_val_compare_and_swap_4(ptr, 20, 1), 99);
        assert_eq!(*ptr, 99);
    }
}

#[test]
fn test_fetch_and_op_1() {
    let mut loc: i8 = 0b0110;
    let ptr = &mut loc as *mut i8;
    unsafe {
        assert_eq!(__sync_fetch_and_or_1(ptr, 0b0001), 0b0110);
        assert_eq!(__sync_fetch_and_and_1(ptr, 0b0011), 0b0111);
        assert_eq!(__sync_fetch_and_xor_1(ptr, 0b0001), 0b0011);
        assert_eq!(__sync_fetch_and_sub_1(ptr, 2), 0b0010);
        assert_eq!(__sync_fetch_and_nand_1(ptr, 0b0101), 0);
        assert_eq!(*ptr, !0);
    }
    assert_eq!(loc, -1);
}

#[test]
fn test_op_and_fetch_2() {
    let mut loc: i16 = 100;
    let ptr = &mut loc as *mut i16;
    unsafe {
        assert_eq!(__sync_sub_and_fetch_2(ptr, 1), 99);
        assert_eq!(__sync_or_and_fetch_2(ptr, 0x100), 0x163);
        assert_eq!(__sync_and_and_fetch_2(ptr, 0xff), 0x63);
        assert_eq!(__sync_xor_and_fetch_2(ptr, 0x63), 0);
        assert_eq!(__sync_nand_and_fetch_2(ptr, 0x7fff), -1);
    }
    assert_eq!(loc, -1);
}

#[test]
fn test_nand_8() {
    let v: i64 = 0x0f0f_0000_ffff;
    let arg: i64 = 0x00ff_00ff_00ff;
    let mut loc = v;
    let ptr = &mut loc as *mut i64;
    unsafe {
        assert_eq!(__sync_fetch_and_nand_8(ptr, arg), v);
    }
    assert_eq!(loc, !(v & arg));
    assert_ne!(loc, !v & arg);
    assert_ne!(loc, v & !arg);
}

#[test]
fn test_bool_compare_and_swap() {
    let mut a: i8 = 1;
    let mut b: i16 = 1;
    let mut c: i32 = 1;
    let mut d: i64 = 1;
    unsafe {
        assert!(__sync_bool_compare_and_swap_1(&mut a, 1, 2));
        assert!(!__sync_bool_compare_and_swap_1(&mut a, 1, 3));
        assert!(__sync_bool_compare_and_swap_2(&mut b, 1, 2));
        assert!(!__sync_bool_compare_and_swap_2(&mut b, 1, 3));
        assert!(__sync_bool_compare_and_swap_4(&mut c, 1, 2));
        assert!(!__sync_bool_compare_and_swap_4(&mut c, 1, 3));
        assert!(__sync_bool_compare_and_swap_8(&mut d, 1, 2));
        assert!(!__sync_bool_compare_and_swap_8(&mut d, 1, 3));
    }
    assert_eq!((a, b, c, d), (2, 2, 2, 2));
}

#[test]
fn test_lock_test_and_set_and_release() {
    let mut lock: i64 = 0;
    unsafe {
        assert_eq!(__sync_lock_test_and_set_8(&mut lock, 1), 0);
        assert_eq!(__sync_lock_test_and_set_8(&mut lock, 1), 1);
        __sync_lock_release_8(&mut lock);
        assert_eq!(__sync_lock_test_and_set_8(&mut lock, 1), 0);
        __sync_synchronize();
        __sync_lock_release_8(&mut lock);
    }
    assert_eq!(lock, 0);
}

// The symbols and the typed cells agree on the same memory.
#[test]
fn test_concurrent_symbols_and_cells() {
    let counter = Arc::new(prism3_sync_builtins::AtomicI64::new(0));
    let mut handles = vec![];

    for i in 0..8 {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..1000 {
                if i % 2 == 0 {
                    unsafe {
                        __sync_fetch_and_add_8(counter.as_ptr(), 1);
                    }
                } else {
                    counter.fetch_add(1);
                }
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.load(), 8000);
}
