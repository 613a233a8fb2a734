// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The block allocation capability.

use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::AllocError;

/// Capability for acquiring and releasing raw storage blocks.
///
/// A `BlockAlloc` hands out uninitialized, exclusively owned blocks and takes
/// them back. It never tracks which slots inside a block hold live values;
/// that bookkeeping belongs to the container owning the block.
///
/// Zero-sized requests never reach the allocator: callers handle `n == 0` and
/// zero-sized element types before asking for storage.
///
/// # Safety
///
/// Implementors must guarantee that a pointer returned by [`acquire`] is
/// non-null, aligned to `layout.align()`, valid for reads and writes of
/// `layout.size()` bytes until passed to [`release`], and not aliased by any
/// other live allocation.
///
/// [`acquire`]: BlockAlloc::acquire
/// [`release`]: BlockAlloc::release
pub unsafe trait BlockAlloc {
    /// Acquires an uninitialized block for `layout`.
    ///
    /// `layout.size()` must be nonzero.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::OutOfMemory`] if the underlying memory service
    /// cannot satisfy the request. Acquiring has no side effects on any
    /// previously acquired block.
    fn acquire(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Releases a previously acquired block.
    ///
    /// Releasing does not run destructors; the caller destroys any live
    /// values in the block first.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by [`BlockAlloc::acquire`] on this same
    /// allocator with this exact `layout`, and must not have been released
    /// before. After this call the block must not be accessed.
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout);
}

unsafe impl<A: BlockAlloc + ?Sized> BlockAlloc for &A {
    fn acquire(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        (**self).acquire(layout)
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: same contract, forwarded to the referenced allocator.
        unsafe { (**self).release(ptr, layout) }
    }
}

/// Typed convenience layer over [`BlockAlloc`].
///
/// Computes array layouts so callers deal in element counts instead of raw
/// byte sizes. Blanket-implemented for every `BlockAlloc`.
pub trait BlockAllocExt: BlockAlloc {
    /// Acquires a block capable of holding `n` uninitialized slots of `T`.
    ///
    /// `n` must be nonzero and `T` must not be zero-sized.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::CapacityOverflow`] if `n` slots of `T` exceed
    /// the addressable size range, or [`AllocError::OutOfMemory`] if the
    /// allocator cannot satisfy the request.
    fn acquire_array<T>(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        debug_assert!(n > 0, "acquire_array: zero-length block requested");
        debug_assert!(
            core::mem::size_of::<T>() > 0,
            "acquire_array: zero-sized element type"
        );

        let layout = Layout::array::<T>(n).map_err(|_| AllocError::CapacityOverflow)?;

        Ok(self.acquire(layout)?.cast::<T>())
    }

    /// Releases a block previously acquired with [`acquire_array`].
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by [`acquire_array`] on this same
    /// allocator with this exact `n`, must not have been released before,
    /// and no live values may remain in the block.
    ///
    /// [`acquire_array`]: BlockAllocExt::acquire_array
    unsafe fn release_array<T>(&self, ptr: NonNull<T>, n: usize) {
        // The layout was valid when the block was acquired, so rebuilding it
        // cannot fail for a pointer that satisfies the contract.
        if let Ok(layout) = Layout::array::<T>(n) {
            // SAFETY: ptr/layout match the original acquire_array call.
            unsafe { self.release(ptr.cast::<u8>(), layout) };
        }
    }
}

impl<A: BlockAlloc + ?Sized> BlockAllocExt for A {}
