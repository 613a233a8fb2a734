// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block ownership: pointer, capacity, allocation capability.
//!
//! `RawBuf` knows nothing about which slots are constructed. The owning
//! container tracks that and must destroy live values before the buffer
//! drops or reallocates over them.

use core::ptr::NonNull;

use cairn_alloc::{AllocError, BlockAlloc, BlockAllocExt};

/// Owner of one contiguous storage block and the capability it came from.
///
/// For zero-sized element types no block is ever acquired and the capacity
/// reports `usize::MAX`; the address range `[ptr, ptr)` stays dangling but
/// aligned, which is all slot access to a zero-sized value needs.
pub(crate) struct RawBuf<T, A: BlockAlloc> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
}

impl<T, A: BlockAlloc> RawBuf<T, A> {
    const IS_ZST: bool = core::mem::size_of::<T>() == 0;

    /// Creates a buffer owning no block.
    pub(crate) fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: if Self::IS_ZST { usize::MAX } else { 0 },
            alloc,
        }
    }

    /// Creates a buffer owning a block of exactly `capacity` slots.
    pub(crate) fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, AllocError> {
        if Self::IS_ZST || capacity == 0 {
            return Ok(Self::new_in(alloc));
        }

        let ptr = alloc.acquire_array::<T>(capacity)?;

        Ok(Self {
            ptr,
            cap: capacity,
            alloc,
        })
    }

    #[inline]
    pub(crate) fn ptr(&self) -> NonNull<T> {
        self.ptr
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Replaces the block with a larger one, carrying over the constructed
    /// prefix.
    ///
    /// The first `live` slots of the old block must hold live values; they
    /// are moved bitwise into the new block, in order, and are not dropped
    /// here because they live on in the new block. On failure the old block
    /// and its values are untouched.
    pub(crate) fn grow_to(&mut self, new_cap: usize, live: usize) -> Result<(), AllocError> {
        debug_assert!(!Self::IS_ZST, "grow_to: zero-sized elements never reallocate");
        debug_assert!(new_cap > self.cap, "grow_to: capacity can only increase");
        debug_assert!(live <= self.cap, "grow_to: live prefix exceeds capacity");

        // 1. Acquire the new block first; an allocation failure must leave
        //    the old block intact.
        let new_ptr = self.alloc.acquire_array::<T>(new_cap)?;

        // 2. Move the constructed prefix over.
        unsafe {
            // SAFETY: both blocks are distinct allocations with at least
            // `live` slots, and the first `live` slots of the old block are
            // initialized.
            core::ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), live);
        }

        // 3. Release the old block. Its slots are raw storage now; the
        //    values moved out in step 2.
        if self.cap > 0 {
            // SAFETY: ptr/cap describe the block acquired earlier from this
            // same allocator.
            unsafe { self.alloc.release_array(self.ptr, self.cap) };
        }

        self.ptr = new_ptr;
        self.cap = new_cap;

        Ok(())
    }
}

impl<T, A: BlockAlloc> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        if !Self::IS_ZST && self.cap > 0 {
            // SAFETY: the owner destroyed every live value before dropping
            // the buffer, and ptr/cap describe the acquired block.
            unsafe { self.alloc.release_array(self.ptr, self.cap) };
        }
    }
}
