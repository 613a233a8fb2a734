// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw block allocation capability with in-place slot construction.
//!
//! This crate is the storage half of a growable container: it acquires and
//! releases raw, uninitialized blocks and flips individual slots between
//! uninitialized and live. It never tracks occupancy; the container owning a
//! block decides which slots hold values.
//!
//! # Pieces
//!
//! - [`BlockAlloc`] — the capability: `acquire(layout)` / `release(ptr,
//!   layout)`. Implemented by [`SystemHeap`] for the global heap, and by any
//!   custom source of storage. Held per container instance, so two
//!   containers never observe each other's allocation bookkeeping.
//! - [`BlockAllocExt`] — typed layer computing array layouts, so containers
//!   deal in element counts: `acquire_array::<T>(n)` / `release_array`.
//! - [`construct_at`] / [`destroy_at`] / [`take_at`] — slot lifecycle
//!   primitives for building, dropping, and moving values in place.
//! - [`FailingHeap`] — deterministic out-of-memory injection for tests
//!   (`test_utils` feature).
//!
//! # Example
//!
//! ```rust
//! use cairn_alloc::{AllocError, BlockAllocExt, SystemHeap, construct_at, destroy_at};
//!
//! fn example() -> Result<(), AllocError> {
//!     let heap = SystemHeap;
//!     let block = heap.acquire_array::<u32>(4)?;
//!
//!     unsafe {
//!         construct_at(block, 7);
//!         assert_eq!(block.as_ptr().read(), 7);
//!         destroy_at(block);
//!
//!         heap.release_array(block, 4);
//!     }
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! cairn-alloc = { version = "*", features = ["test_utils"] }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod block_alloc;
mod error;
#[cfg(any(test, feature = "test_utils"))]
mod failing_heap;
mod slot;
mod system_heap;

#[cfg(test)]
mod tests;

pub use block_alloc::{BlockAlloc, BlockAllocExt};
pub use error::AllocError;
#[cfg(any(test, feature = "test_utils"))]
pub use failing_heap::FailingHeap;
pub use slot::{construct_at, destroy_at, take_at};
pub use system_heap::SystemHeap;
