// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! An external routine that needs nothing from the vector beyond indexed
//! reads, indexed writes and the length.

use cairn::{CairnVec, CairnVecError};

/// Insertion sort working purely through `len()` and the indexing
/// operators.
fn insertion_sort(values: &mut CairnVec<u64>) {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;

        while j > 0 && values[j - 1] > key {
            values[j] = values[j - 1];
            j -= 1;
        }

        values[j] = key;
    }
}

fn build(values: &[u64]) -> Result<CairnVec<u64>, CairnVecError> {
    CairnVec::try_from_slice(values)
}

#[test]
fn test_insertion_sort_orders_a_shuffled_vector() {
    let mut vec = build(&[5, 3, 8, 1, 9, 2, 7]).expect("Failed to build vector");

    insertion_sort(&mut vec);

    assert_eq!(vec.as_slice(), &[1, 2, 3, 5, 7, 8, 9]);
}

#[test]
fn test_insertion_sort_handles_reverse_order() {
    let mut vec = build(&[9, 8, 7, 6, 5]).expect("Failed to build vector");

    insertion_sort(&mut vec);

    assert_eq!(vec.as_slice(), &[5, 6, 7, 8, 9]);
}

#[test]
fn test_insertion_sort_keeps_sorted_input_intact() {
    let mut vec = build(&[1, 2, 3, 4]).expect("Failed to build vector");

    insertion_sort(&mut vec);

    assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn test_insertion_sort_handles_duplicates() {
    let mut vec = build(&[4, 1, 4, 2, 1]).expect("Failed to build vector");

    insertion_sort(&mut vec);

    assert_eq!(vec.as_slice(), &[1, 1, 2, 4, 4]);
}

#[test]
fn test_insertion_sort_handles_empty_and_single() {
    let mut empty: CairnVec<u64> = CairnVec::new();
    insertion_sort(&mut empty);
    assert!(empty.is_empty());

    let mut single = build(&[42]).expect("Failed to build vector");
    insertion_sort(&mut single);
    assert_eq!(single.as_slice(), &[42]);
}

#[test]
fn test_insertion_sort_matches_library_sort() {
    let raw: Vec<u64> = (0..64).map(|x| (x * 7919) % 101).collect();

    let mut vec = build(&raw).expect("Failed to build vector");
    insertion_sort(&mut vec);

    let mut expected = raw;
    expected.sort_unstable();

    assert_eq!(vec.as_slice(), expected.as_slice());
}
