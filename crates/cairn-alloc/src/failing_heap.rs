// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;

use crate::block_alloc::BlockAlloc;
use crate::error::AllocError;
use crate::system_heap::SystemHeap;

/// Block allocator that fails on demand, for exercising out-of-memory paths.
///
/// Delegates to [`SystemHeap`] while a budget of successful acquisitions
/// remains, then fails every further [`BlockAlloc::acquire`] with
/// [`AllocError::OutOfMemory`]. Releases always succeed, so blocks handed
/// out before exhaustion can be returned cleanly.
///
/// This is only available with the `test_utils` feature and exists so error
/// handling can be tested deterministically instead of by exhausting real
/// memory.
///
/// A clone carries the budget remaining at clone time and counts down
/// independently afterwards.
///
/// # Example
///
/// ```rust
/// use cairn_alloc::{BlockAlloc, BlockAllocExt, FailingHeap};
///
/// let heap = FailingHeap::fail_after(1);
///
/// let block = heap.acquire_array::<u64>(8).expect("first acquire within budget");
/// assert!(heap.acquire_array::<u64>(8).is_err());
///
/// unsafe { heap.release_array(block, 8) };
/// ```
#[derive(Debug, Clone)]
pub struct FailingHeap {
    budget: Cell<usize>,
}

impl FailingHeap {
    /// Creates a heap that satisfies `successes` acquisitions, then fails.
    pub fn fail_after(successes: usize) -> Self {
        Self {
            budget: Cell::new(successes),
        }
    }

    /// Creates a heap whose every acquisition fails.
    pub fn fail_always() -> Self {
        Self::fail_after(0)
    }

    /// Resets the remaining budget of successful acquisitions.
    pub fn set_budget(&self, successes: usize) {
        self.budget.set(successes);
    }

    /// Returns the remaining budget of successful acquisitions.
    pub fn remaining(&self) -> usize {
        self.budget.get()
    }
}

unsafe impl BlockAlloc for FailingHeap {
    fn acquire(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let remaining = self.budget.get();

        if remaining == 0 {
            return Err(AllocError::OutOfMemory {
                size: layout.size(),
            });
        }

        let ptr = SystemHeap.acquire(layout)?;
        self.budget.set(remaining - 1);

        Ok(ptr)
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: all blocks handed out by acquire come from SystemHeap.
        unsafe { SystemHeap.release(ptr, layout) };
    }
}
