// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::block_alloc::BlockAlloc;
use crate::error::AllocError;

/// Block allocator backed by the process's global heap.
///
/// Stateless and zero-sized: every instance observes the same underlying
/// memory service, and the capability can be copied freely. This is the
/// default capability for containers that do not inject their own.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemHeap;

unsafe impl BlockAlloc for SystemHeap {
    fn acquire(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        debug_assert!(layout.size() > 0, "acquire: zero-sized layout");

        // SAFETY: layout.size() is nonzero per the trait contract.
        let ptr = unsafe { alloc::alloc::alloc(layout) };

        NonNull::new(ptr).ok_or(AllocError::OutOfMemory {
            size: layout.size(),
        })
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: ptr was acquired from the global heap with this layout per
        // the trait contract.
        unsafe { alloc::alloc::dealloc(ptr.as_ptr(), layout) };
    }
}
