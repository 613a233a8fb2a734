// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable arrays with explicit allocation capabilities and fallible
//! growth.
//!
//! `cairn` provides [`CairnVec`], a contiguous growable array in the spirit
//! of `Vec<T>` with two deliberate differences: every allocating operation
//! returns a `Result` instead of aborting on exhaustion, and the allocator
//! is a per-instance value — any [`BlockAlloc`] implementor — rather than
//! a global ambient. The default capability, [`SystemHeap`], forwards to
//! the global heap.
//!
//! # Pieces
//!
//! - [`CairnVec`]: the growable array. Amortized O(1) appends through
//!   capacity doubling, exact-size reservation, symmetric resizing, and
//!   deep copies with a strong failure guarantee.
//! - [`IntoIter`]: the owning iterator, double-ended; unconsumed elements
//!   are destroyed when it drops.
//! - [`CairnVecError`]: what can go wrong — allocation failure or popping
//!   from an empty vector.
//! - [`BlockAlloc`], [`SystemHeap`], [`AllocError`]: the allocation
//!   capability surface, re-exported from `cairn-alloc`. Its `test_utils`
//!   feature adds a budgeted failing allocator for exercising
//!   out-of-memory paths deterministically.
//!
//! # Example
//!
//! ```rust
//! use cairn::{CairnVec, CairnVecError};
//!
//! fn example() -> Result<(), CairnVecError> {
//!     let mut vec = CairnVec::new();
//!
//!     for x in [3u64, 1, 2] {
//!         vec.push(x)?;
//!     }
//!
//!     vec.as_mut_slice().sort_unstable();
//!     assert_eq!(vec.as_slice(), &[1, 2, 3]);
//!
//!     let copy = vec.try_clone()?;
//!     assert_eq!(copy, vec);
//!
//!     assert_eq!(vec.pop()?, 3);
//!     assert_eq!(copy.as_slice(), &[1, 2, 3]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod error;
mod into_iter;
mod raw_buf;
mod vec;

#[cfg(test)]
mod tests;

pub use cairn_alloc::{AllocError, BlockAlloc, SystemHeap};
pub use error::CairnVecError;
pub use into_iter::IntoIter;
pub use vec::CairnVec;
