// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;

use cairn_alloc::{AllocError, FailingHeap};

use crate::{CairnVec, CairnVecError};

#[test]
fn test_cairn_vec_push_oom_propagates_and_preserves() {
    let mut vec = CairnVec::new_in(FailingHeap::fail_after(2));

    vec.push(1u32).expect("Failed to push");
    vec.push(2u32).expect("Failed to push");

    // Growing to four slots of u32 asks for sixteen bytes; the budget is
    // spent, so the request is refused.
    let result = vec.push(3u32);
    assert!(result.is_err());
    assert!(matches!(
        result,
        Err(CairnVecError::Alloc(AllocError::OutOfMemory { size: 16 }))
    ));

    assert_eq!(vec.as_slice(), &[1, 2]);
    assert_eq!(vec.capacity(), 2);

    // Refill the budget and the same append goes through.
    vec.allocator().set_budget(1);
    vec.push(3u32).expect("Failed to push");
    assert_eq!(vec.as_slice(), &[1, 2, 3]);
    assert_eq!(vec.capacity(), 4);
}

#[test]
fn test_cairn_vec_with_capacity_in_oom() {
    let result = CairnVec::<u8, _>::with_capacity_in(8, FailingHeap::fail_always());

    assert!(result.is_err());
    assert!(matches!(
        result,
        Err(CairnVecError::Alloc(AllocError::OutOfMemory { size: 8 }))
    ));
}

#[test]
fn test_cairn_vec_reserve_oom_preserves() {
    let mut vec = CairnVec::new_in(FailingHeap::fail_after(2));

    vec.push(1u32).expect("Failed to push");
    vec.push(2u32).expect("Failed to push");

    let result = vec.reserve(100);
    assert!(matches!(result, Err(CairnVecError::Alloc(_))));

    assert_eq!(vec.as_slice(), &[1, 2]);
    assert_eq!(vec.capacity(), 2);
}

#[test]
fn test_cairn_vec_try_clone_oom_leaves_source_intact() {
    let mut source = CairnVec::new_in(FailingHeap::fail_after(3));
    for x in [1u32, 2, 3] {
        source.push(x).expect("Failed to push");
    }

    let result = source.try_clone();
    assert!(matches!(result, Err(CairnVecError::Alloc(_))));

    assert_eq!(source.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_cairn_vec_try_clone_from_oom_leaves_target_unchanged() {
    let mut target = CairnVec::new_in(FailingHeap::fail_after(3));
    for x in [1u32, 2, 3] {
        target.push(x).expect("Failed to push");
    }

    let mut source = CairnVec::new_in(FailingHeap::fail_after(10));
    source.push(9u32).expect("Failed to push");
    source.push(9u32).expect("Failed to push");

    // The target's budget is spent, so building the replacement fails
    // before the old contents are touched.
    let result = target.try_clone_from(&source);
    assert!(result.is_err());
    assert!(matches!(result, Err(CairnVecError::Alloc(AllocError::OutOfMemory { .. }))));

    assert_eq!(target.as_slice(), &[1, 2, 3]);
    assert_eq!(target.capacity(), 4);
    assert_eq!(source.as_slice(), &[9, 9]);
    assert_eq!(source.allocator().remaining(), 8);
}

#[test]
fn test_cairn_vec_assign_from_slice_oom_leaves_target_unchanged() {
    let mut vec = CairnVec::new_in(FailingHeap::fail_after(1));
    vec.push(1u32).expect("Failed to push");

    let result = vec.assign_from_slice(&[7, 8, 9]);
    assert!(matches!(result, Err(CairnVecError::Alloc(_))));

    assert_eq!(vec.as_slice(), &[1]);
}

#[test]
fn test_cairn_vec_resize_oom_keeps_appended_prefix() {
    let mut vec = CairnVec::new_in(FailingHeap::fail_after(1));

    let result = vec.resize_with(3, || 5u32);
    assert!(matches!(result, Err(CairnVecError::Alloc(_))));

    // Growth failed partway; the element appended before the failure
    // remains.
    assert_eq!(vec.as_slice(), &[5]);
    assert_eq!(vec.capacity(), 1);
}

#[test]
fn test_cairn_vec_push_with_oom_skips_producer() {
    let mut vec = CairnVec::new_in(FailingHeap::fail_always());
    let called = Cell::new(false);

    let result = vec.push_with(|| {
        called.set(true);
        5u32
    });

    assert!(matches!(result, Err(CairnVecError::Alloc(_))));
    assert!(!called.get());
    assert!(vec.is_empty());
}
