// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::CairnVec;

#[test]
fn test_cairn_vec_resize_with_grows_with_produced_values() {
    let mut vec = CairnVec::try_from_slice(&[7u32, 8, 9]).expect("Failed to build vector");

    vec.resize_with(5, u32::default).expect("Failed to resize");

    assert_eq!(vec.as_slice(), &[7, 8, 9, 0, 0]);
}

#[test]
fn test_cairn_vec_resize_with_default_fills_from_empty() {
    let mut vec: CairnVec<u32> = CairnVec::new();

    vec.resize_with(4, u32::default).expect("Failed to resize");

    assert_eq!(vec.as_slice(), &[0, 0, 0, 0]);
}

#[test]
fn test_cairn_vec_resize_with_shrinks_to_prefix() {
    let mut vec = CairnVec::try_from_slice(&[7u32, 8, 9, 10, 11]).expect("Failed to build vector");
    let capacity = vec.capacity();

    vec.resize_with(2, u32::default).expect("Failed to resize");

    // The survivors are exactly the original first two; capacity stays.
    assert_eq!(vec.as_slice(), &[7, 8]);
    assert_eq!(vec.capacity(), capacity);
}

#[test]
fn test_cairn_vec_resize_clone_fills_growth() {
    let mut vec = CairnVec::try_from_slice(&[1u32]).expect("Failed to build vector");

    vec.resize(4, 9).expect("Failed to resize");

    assert_eq!(vec.as_slice(), &[1, 9, 9, 9]);
}

#[test]
fn test_cairn_vec_resize_shrink_matches_truncate() {
    let mut resized = CairnVec::try_from_slice(&[1u32, 2, 3, 4]).expect("Failed to build vector");
    let mut truncated = CairnVec::try_from_slice(&[1u32, 2, 3, 4]).expect("Failed to build vector");

    // The fill value plays no part when shrinking.
    resized.resize(2, 42).expect("Failed to resize");
    truncated.truncate(2);

    assert_eq!(resized, truncated);
}

#[test]
fn test_cairn_vec_resize_to_same_length_is_noop() {
    let mut vec = CairnVec::try_from_slice(&[1u32, 2]).expect("Failed to build vector");
    let capacity = vec.capacity();

    vec.resize(2, 9).expect("Failed to resize");

    assert_eq!(vec.as_slice(), &[1, 2]);
    assert_eq!(vec.capacity(), capacity);
}

#[test]
fn test_cairn_vec_resize_to_zero_empties() {
    let mut vec = CairnVec::try_from_slice(&[1u32, 2, 3]).expect("Failed to build vector");

    vec.resize_with(0, u32::default).expect("Failed to resize");

    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 3);
}

#[test]
fn test_cairn_vec_resize_capacity_never_decreases() {
    let mut vec = CairnVec::new();

    for x in 0..5u32 {
        vec.push(x).expect("Failed to push");
    }
    assert_eq!(vec.capacity(), 8);

    vec.resize_with(2, u32::default).expect("Failed to resize");
    assert_eq!(vec.capacity(), 8);

    vec.resize_with(6, u32::default).expect("Failed to resize");
    assert_eq!(vec.capacity(), 8);

    assert_eq!(vec.as_slice(), &[0, 1, 0, 0, 0, 0]);
}

#[test]
fn test_cairn_vec_resize_with_calls_producer_once_per_new_slot() {
    let mut vec = CairnVec::try_from_slice(&[1u32, 2]).expect("Failed to build vector");
    let mut calls = 0;

    vec.resize_with(5, || {
        calls += 1;
        calls
    })
    .expect("Failed to resize");

    assert_eq!(calls, 3);
    assert_eq!(vec.as_slice(), &[1, 2, 1, 2, 3]);

    vec.resize_with(1, || {
        calls += 1;
        calls
    })
    .expect("Failed to resize");

    // Shrinking never runs the producer.
    assert_eq!(calls, 3);
    assert_eq!(vec.as_slice(), &[1]);
}
