// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::ptr::NonNull;

use cairn_alloc::{BlockAlloc, SystemHeap, destroy_at, take_at};

use crate::raw_buf::RawBuf;

/// Owning iterator over the elements of a
/// [`CairnVec`](crate::CairnVec).
///
/// Yields elements front to back by moving them out of their slots; the
/// slots walk from initialized to consumed as the cursor advances. Whatever
/// remains unconsumed when the iterator drops is destroyed with it, and the
/// block is released exactly once.
///
/// # Example
///
/// ```rust
/// use cairn::{CairnVec, CairnVecError};
///
/// fn example() -> Result<(), CairnVecError> {
///     let vec = CairnVec::try_from_slice(&[1u32, 2, 3])?;
///
///     let doubled: Vec<u32> = vec.into_iter().map(|x| x * 2).collect();
///
///     assert_eq!(doubled, [2, 4, 6]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct IntoIter<T, A: BlockAlloc = SystemHeap> {
    buf: RawBuf<T, A>,
    /// First unconsumed slot; everything before it has been moved out.
    index: usize,
    /// One past the last unconsumed slot; everything from here up to the
    /// original length has been moved out from the back.
    len: usize,
}

// SAFETY: the iterator owns the remaining elements and the capability
// exclusively, same as the vector it came from.
unsafe impl<T: Send, A: BlockAlloc + Send> Send for IntoIter<T, A> {}
unsafe impl<T: Sync, A: BlockAlloc + Sync> Sync for IntoIter<T, A> {}

impl<T, A: BlockAlloc> IntoIter<T, A> {
    pub(crate) fn new(buf: RawBuf<T, A>, len: usize) -> Self {
        Self { buf, index: 0, len }
    }

    /// Returns the unconsumed elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots index..len hold the live, unconsumed elements.
        unsafe {
            core::slice::from_raw_parts(self.buf.ptr().as_ptr().add(self.index), self.len - self.index)
        }
    }

    /// Pointer to slot `index`.
    ///
    /// # Safety
    ///
    /// `index` must not exceed the capacity.
    #[inline]
    unsafe fn slot(&self, index: usize) -> NonNull<T> {
        // SAFETY: index <= capacity keeps the offset inside the block; for
        // zero-sized element types the offset is zero bytes.
        unsafe { NonNull::new_unchecked(self.buf.ptr().as_ptr().add(index)) }
    }
}

impl<T, A: BlockAlloc> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index == self.len {
            return None;
        }

        // SAFETY: index < len, so the slot holds a live element no other
        // path will touch again once the cursor moves past it.
        let value = unsafe { take_at(self.slot(self.index)) };
        self.index += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T, A: BlockAlloc> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.index == self.len {
            return None;
        }

        self.len -= 1;

        // SAFETY: slot `len` held the last unconsumed element; the bound
        // was decremented first, so nothing else will touch it.
        let value = unsafe { take_at(self.slot(self.len)) };

        Some(value)
    }
}

impl<T, A: BlockAlloc> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: BlockAlloc> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        // Destroy whatever was not consumed; buf's own drop releases the
        // block afterwards.
        while self.index < self.len {
            self.len -= 1;

            // SAFETY: slots index..len+1 were still live; slot `len` is
            // destroyed exactly once.
            unsafe { destroy_at(self.slot(self.len)) };
        }
    }
}

impl<T: fmt::Debug, A: BlockAlloc> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice().iter()).finish()
    }
}
