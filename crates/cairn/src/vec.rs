// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr::NonNull;
use core::slice::SliceIndex;

use cairn_alloc::{AllocError, BlockAlloc, SystemHeap, construct_at, destroy_at, take_at};

use crate::error::CairnVecError;
use crate::into_iter::IntoIter;
use crate::raw_buf::RawBuf;

/// Growable array over an explicit allocation capability.
///
/// `CairnVec<T, A>` owns one contiguous block at a time and partitions it
/// into a constructed prefix of `len()` live elements followed by raw,
/// uninitialized capacity. Appending into exhausted capacity acquires a
/// block of `max(1, 2 * len)` slots, moves the prefix over in order, and
/// only then releases the old block, so the capacity sequence under pure
/// appends is 1, 2, 4, 8, … and a failed growth leaves the vector exactly
/// as it was.
///
/// Every operation that may allocate returns a `Result` instead of
/// panicking; out-of-memory propagates as
/// [`CairnVecError::Alloc`].
///
/// The allocation capability `A` is held per instance: two vectors never
/// observe each other's allocation bookkeeping, and tests can inject a
/// failing capability through [`new_in`](CairnVec::new_in).
///
/// # Reallocation invalidates raw pointers
///
/// Any pointer obtained from [`as_ptr`](CairnVec::as_ptr) or
/// [`as_mut_ptr`](CairnVec::as_mut_ptr) stops being valid as soon as the
/// vector reallocates (any growing `push`, `push_with`, `reserve` or
/// `resize_with` call). References and iterators are covered by the borrow
/// checker; the raw-pointer surface is covered only by this contract.
///
/// # Example
///
/// ```rust
/// use cairn::{CairnVec, CairnVecError};
///
/// fn example() -> Result<(), CairnVecError> {
///     let mut vec = CairnVec::new();
///
///     vec.push(1u32)?;
///     vec.push(2u32)?;
///     vec.push(3u32)?;
///
///     assert_eq!(vec.as_slice(), &[1, 2, 3]);
///     assert_eq!(vec.capacity(), 4);
///
///     assert_eq!(vec.pop()?, 3);
///     assert_eq!(vec.len(), 2);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct CairnVec<T, A: BlockAlloc = SystemHeap> {
    buf: RawBuf<T, A>,
    len: usize,
}

// SAFETY: the vector owns its elements and its capability exclusively, so
// transferring or sharing it across threads is exactly as safe as doing the
// same with `T` and `A` directly.
unsafe impl<T: Send, A: BlockAlloc + Send> Send for CairnVec<T, A> {}
unsafe impl<T: Sync, A: BlockAlloc + Sync> Sync for CairnVec<T, A> {}

impl<T> CairnVec<T> {
    /// Creates a new empty vector backed by the global heap.
    ///
    /// No block is acquired until the first growing operation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cairn::CairnVec;
    ///
    /// let vec: CairnVec<u8> = CairnVec::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    pub fn new() -> Self {
        Self::new_in(SystemHeap)
    }

    /// Creates a vector with a block of exactly `capacity` slots, backed by
    /// the global heap.
    ///
    /// # Errors
    ///
    /// Returns [`CairnVecError::Alloc`] if the block cannot be acquired.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cairn::{CairnVec, CairnVecError};
    ///
    /// fn example() -> Result<(), CairnVecError> {
    ///     let vec = CairnVec::<u8>::with_capacity(10)?;
    ///     assert_eq!(vec.len(), 0);
    ///     assert_eq!(vec.capacity(), 10);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, CairnVecError> {
        Self::with_capacity_in(capacity, SystemHeap)
    }

    /// Creates a vector holding a clone of every element of `slice`, backed
    /// by the global heap.
    ///
    /// The block is sized exactly to `slice.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`CairnVecError::Alloc`] if the block cannot be acquired.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cairn::{CairnVec, CairnVecError};
    ///
    /// fn example() -> Result<(), CairnVecError> {
    ///     let vec = CairnVec::try_from_slice(&[10, 20, 30])?;
    ///
    ///     assert_eq!(vec.as_slice(), &[10, 20, 30]);
    ///     assert_eq!(vec.capacity(), 3);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn try_from_slice(slice: &[T]) -> Result<Self, CairnVecError>
    where
        T: Clone,
    {
        Self::try_from_slice_in(slice, SystemHeap)
    }
}

impl<T, A: BlockAlloc> CairnVec<T, A> {
    /// Creates a new empty vector using `alloc` as its allocation
    /// capability.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cairn::{CairnVec, SystemHeap};
    ///
    /// let vec: CairnVec<u8, SystemHeap> = CairnVec::new_in(SystemHeap);
    /// assert!(vec.is_empty());
    /// ```
    pub fn new_in(alloc: A) -> Self {
        Self {
            buf: RawBuf::new_in(alloc),
            len: 0,
        }
    }

    /// Creates a vector with a block of exactly `capacity` slots acquired
    /// from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`CairnVecError::Alloc`] if the block cannot be acquired.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, CairnVecError> {
        Ok(Self {
            buf: RawBuf::with_capacity_in(capacity, alloc)?,
            len: 0,
        })
    }

    /// Creates a vector holding a clone of every element of `slice`, with
    /// its block acquired from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`CairnVecError::Alloc`] if the block cannot be acquired.
    pub fn try_from_slice_in(slice: &[T], alloc: A) -> Result<Self, CairnVecError>
    where
        T: Clone,
    {
        Self::duplicate_in(slice, alloc)
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the owned block.
    ///
    /// For zero-sized element types this reports `usize::MAX`; no block is
    /// ever acquired for them.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns a reference to the allocation capability.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Returns the constructed prefix as a slice.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cairn::{CairnVec, CairnVecError};
    ///
    /// fn example() -> Result<(), CairnVecError> {
    ///     let mut vec = CairnVec::new();
    ///     vec.push(1u8)?;
    ///     vec.push(2u8)?;
    ///
    ///     assert_eq!(vec.as_slice(), &[1, 2]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Returns the constructed prefix as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Returns a raw pointer to the start of the block.
    ///
    /// The pointer is invalidated by any reallocation; see the type-level
    /// contract. Only the first `len()` slots may be read.
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr().as_ptr()
    }

    /// Returns a raw mutable pointer to the start of the block.
    ///
    /// The pointer is invalidated by any reallocation; see the type-level
    /// contract. Slots at and beyond `len()` are uninitialized.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr().as_ptr()
    }

    /// Appends `value` at the end, growing the block if the capacity is
    /// exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`CairnVecError::Alloc`] if growth is needed and the new
    /// block cannot be acquired; the vector is unchanged in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cairn::{CairnVec, CairnVecError};
    ///
    /// fn example() -> Result<(), CairnVecError> {
    ///     let mut vec = CairnVec::new();
    ///
    ///     vec.push(7u64)?;
    ///
    ///     assert_eq!(vec.len(), 1);
    ///     assert_eq!(vec[0], 7);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), CairnVecError> {
        self.maybe_grow()?;

        // SAFETY: maybe_grow left len < capacity, so slot `len` is inside
        // the block and uninitialized.
        unsafe { construct_at(self.slot(self.len), value) };
        self.len += 1;

        Ok(())
    }

    /// Appends the value produced by `make`, constructing it directly in
    /// the target slot.
    ///
    /// The slot is secured before `make` runs, so the produced value is
    /// written straight into the vector's storage instead of passing
    /// through a caller-side temporary.
    ///
    /// # Errors
    ///
    /// Returns [`CairnVecError::Alloc`] if growth is needed and the new
    /// block cannot be acquired; `make` is not called in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cairn::{CairnVec, CairnVecError};
    ///
    /// fn example() -> Result<(), CairnVecError> {
    ///     let mut vec = CairnVec::new();
    ///
    ///     vec.push_with(|| vec![0u8; 1024])?;
    ///
    ///     assert_eq!(vec.len(), 1);
    ///     assert_eq!(vec[0].len(), 1024);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn push_with<F>(&mut self, make: F) -> Result<(), CairnVecError>
    where
        F: FnOnce() -> T,
    {
        self.maybe_grow()?;

        // SAFETY: maybe_grow left len < capacity, so slot `len` is inside
        // the block and uninitialized.
        unsafe { construct_at(self.slot(self.len), make()) };
        self.len += 1;

        Ok(())
    }

    /// Removes the last element and returns ownership of it.
    ///
    /// The slot it occupied becomes uninitialized capacity again; no value
    /// lingers there to be overwritten by a later append.
    ///
    /// # Errors
    ///
    /// Returns [`CairnVecError::Empty`] if the vector holds no elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cairn::{CairnVec, CairnVecError};
    ///
    /// fn example() -> Result<(), CairnVecError> {
    ///     let mut vec = CairnVec::try_from_slice(&[1, 2, 3])?;
    ///
    ///     assert_eq!(vec.pop()?, 3);
    ///     assert_eq!(vec.as_slice(), &[1, 2]);
    ///
    ///     vec.clear();
    ///     assert!(vec.pop().is_err());
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn pop(&mut self) -> Result<T, CairnVecError> {
        if self.len == 0 {
            return Err(CairnVecError::Empty);
        }

        self.len -= 1;

        // SAFETY: slot `len` held the last live element; the length was
        // decremented first, so the vector already counts it as raw
        // capacity and nothing else will touch it.
        let value = unsafe { take_at(self.slot(self.len)) };

        Ok(value)
    }

    /// Grows the block to exactly `capacity` total slots.
    ///
    /// A no-op when `capacity` does not exceed the current capacity; the
    /// block never shrinks. All elements are preserved in order.
    ///
    /// # Errors
    ///
    /// Returns [`CairnVecError::Alloc`] if the new block cannot be
    /// acquired; the vector is unchanged in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cairn::{CairnVec, CairnVecError};
    ///
    /// fn example() -> Result<(), CairnVecError> {
    ///     let mut vec = CairnVec::try_from_slice(&[10, 20, 30])?;
    ///
    ///     vec.reserve(10)?;
    ///     assert_eq!(vec.capacity(), 10);
    ///     assert_eq!(vec.as_slice(), &[10, 20, 30]);
    ///
    ///     // Already large enough: nothing happens.
    ///     vec.reserve(4)?;
    ///     assert_eq!(vec.capacity(), 10);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn reserve(&mut self, capacity: usize) -> Result<(), CairnVecError> {
        if capacity <= self.buf.capacity() {
            return Ok(());
        }

        self.buf.grow_to(capacity, self.len)?;

        Ok(())
    }

    /// Destroys trailing elements down to `new_len` live elements.
    ///
    /// A no-op when `new_len` is not below the current length. The capacity
    /// is unchanged. This is the single shrink path: `resize_with` and
    /// `resize` both funnel through it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cairn::{CairnVec, CairnVecError};
    ///
    /// fn example() -> Result<(), CairnVecError> {
    ///     let mut vec = CairnVec::try_from_slice(&[1, 2, 3, 4, 5])?;
    ///
    ///     vec.truncate(2);
    ///
    ///     assert_eq!(vec.as_slice(), &[1, 2]);
    ///     assert_eq!(vec.capacity(), 5);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            self.len -= 1;

            // SAFETY: slot `len` held the last live element; decrementing
            // first keeps the bookkeeping consistent even if a destructor
            // panics.
            unsafe { destroy_at(self.slot(self.len)) };
        }
    }

    /// Destroys all elements, keeping the block.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes to exactly `new_len` elements, producing any new element
    /// with `make`.
    ///
    /// Growing appends `new_len - len()` produced values; shrinking funnels
    /// through [`truncate`](CairnVec::truncate). The capacity never
    /// decreases. Default-filling is `resize_with(n, T::default)`.
    ///
    /// # Errors
    ///
    /// Returns [`CairnVecError::Alloc`] if growth fails partway; elements
    /// appended before the failure remain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cairn::{CairnVec, CairnVecError};
    ///
    /// fn example() -> Result<(), CairnVecError> {
    ///     let mut vec = CairnVec::try_from_slice(&[7u8, 8, 9])?;
    ///
    ///     vec.resize_with(5, u8::default)?;
    ///     assert_eq!(vec.as_slice(), &[7, 8, 9, 0, 0]);
    ///
    ///     vec.resize_with(2, u8::default)?;
    ///     assert_eq!(vec.as_slice(), &[7, 8]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn resize_with<F>(&mut self, new_len: usize, mut make: F) -> Result<(), CairnVecError>
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }

        while self.len < new_len {
            self.push_with(&mut make)?;
        }

        Ok(())
    }

    /// Resizes to exactly `new_len` elements, filling with clones of
    /// `value` when growing.
    ///
    /// Shrinking behaves exactly like [`resize_with`](CairnVec::resize_with):
    /// both share the [`truncate`](CairnVec::truncate) path and differ only
    /// in what is appended.
    ///
    /// # Errors
    ///
    /// Returns [`CairnVecError::Alloc`] if growth fails partway; elements
    /// appended before the failure remain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cairn::{CairnVec, CairnVecError};
    ///
    /// fn example() -> Result<(), CairnVecError> {
    ///     let mut vec = CairnVec::try_from_slice(&[1u8])?;
    ///
    ///     vec.resize(4, 9)?;
    ///     assert_eq!(vec.as_slice(), &[1, 9, 9, 9]);
    ///
    ///     vec.resize(1, 9)?;
    ///     assert_eq!(vec.as_slice(), &[1]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), CairnVecError>
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone())
    }

    /// Returns an independent deep copy of the vector.
    ///
    /// The copy's block is sized exactly to `len()` and is acquired from a
    /// clone of this vector's capability; no storage is shared, so mutating
    /// one vector never affects the other.
    ///
    /// # Errors
    ///
    /// Returns [`CairnVecError::Alloc`] if the copy's block cannot be
    /// acquired.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cairn::{CairnVec, CairnVecError};
    ///
    /// fn example() -> Result<(), CairnVecError> {
    ///     let original = CairnVec::try_from_slice(&[1, 2, 3])?;
    ///     let mut copy = original.try_clone()?;
    ///
    ///     copy[0] = 99;
    ///
    ///     assert_eq!(original.as_slice(), &[1, 2, 3]);
    ///     assert_eq!(copy.as_slice(), &[99, 2, 3]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn try_clone(&self) -> Result<Self, CairnVecError>
    where
        T: Clone,
        A: Clone,
    {
        Self::duplicate_in(self.as_slice(), self.buf.allocator().clone())
    }

    /// Replaces this vector's contents with a deep copy of `source`.
    ///
    /// The replacement is built completely before the old contents are
    /// touched, so when acquisition or element cloning fails partway the
    /// vector keeps its prior elements and capacity. The capability stays
    /// this vector's own; only the contents are assigned.
    ///
    /// # Errors
    ///
    /// Returns [`CairnVecError::Alloc`] if the replacement block cannot be
    /// acquired; the vector is unchanged in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cairn::{CairnVec, CairnVecError};
    ///
    /// fn example() -> Result<(), CairnVecError> {
    ///     let source = CairnVec::try_from_slice(&[5, 6])?;
    ///     let mut target = CairnVec::try_from_slice(&[1, 2, 3])?;
    ///
    ///     target.try_clone_from(&source)?;
    ///
    ///     assert_eq!(target.as_slice(), &[5, 6]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), CairnVecError>
    where
        T: Clone,
        A: Clone,
    {
        let fresh = Self::duplicate_in(source.as_slice(), self.buf.allocator().clone())?;
        *self = fresh;

        Ok(())
    }

    /// Replaces this vector's contents with clones of `slice`'s elements.
    ///
    /// Same failure contract as [`try_clone_from`](CairnVec::try_clone_from):
    /// the replacement is built completely first, so a failure leaves the
    /// vector unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CairnVecError::Alloc`] if the replacement block cannot be
    /// acquired; the vector is unchanged in that case.
    pub fn assign_from_slice(&mut self, slice: &[T]) -> Result<(), CairnVecError>
    where
        T: Clone,
        A: Clone,
    {
        let fresh = Self::duplicate_in(slice, self.buf.allocator().clone())?;
        *self = fresh;

        Ok(())
    }

    /// Builds a vector holding clones of `source`, sized exactly to
    /// `source.len()`.
    fn duplicate_in(source: &[T], alloc: A) -> Result<Self, CairnVecError>
    where
        T: Clone,
    {
        let mut fresh = Self::with_capacity_in(source.len(), alloc)?;

        for value in source {
            // Never grows: the block already holds source.len() slots.
            fresh.push(value.clone())?;
        }

        Ok(fresh)
    }

    /// Pointer to slot `index`.
    ///
    /// # Safety
    ///
    /// `index` must not exceed the capacity. The returned pointer is only
    /// as valid as the block it points into.
    #[inline]
    unsafe fn slot(&self, index: usize) -> NonNull<T> {
        // SAFETY: index <= capacity keeps the offset inside the block; for
        // zero-sized element types the offset is zero bytes and the pointer
        // stays dangling but aligned.
        unsafe { NonNull::new_unchecked(self.buf.ptr().as_ptr().add(index)) }
    }

    #[inline(always)]
    fn maybe_grow(&mut self) -> Result<(), AllocError> {
        if self.len < self.buf.capacity() {
            return Ok(());
        }

        self.grow_for_append()
    }

    #[cold]
    #[inline(never)]
    fn grow_for_append(&mut self) -> Result<(), AllocError> {
        // Doubling keeps appends amortized O(1); an empty vector starts at
        // a single slot, giving the sequence 1, 2, 4, 8, ...
        let new_cap = if self.len == 0 {
            1
        } else {
            self.len.checked_mul(2).ok_or(AllocError::CapacityOverflow)?
        };

        self.buf.grow_to(new_cap, self.len)
    }
}

impl<T, A: BlockAlloc + Default> Default for CairnVec<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T, A: BlockAlloc> Drop for CairnVec<T, A> {
    fn drop(&mut self) {
        self.truncate(0);
        // buf's own drop releases the block afterwards.
    }
}

impl<T, A: BlockAlloc> Deref for CairnVec<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: the first `len` slots are initialized.
        unsafe { core::slice::from_raw_parts(self.buf.ptr().as_ptr(), self.len) }
    }
}

impl<T, A: BlockAlloc> DerefMut for CairnVec<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: the first `len` slots are initialized and exclusively
        // borrowed through self.
        unsafe { core::slice::from_raw_parts_mut(self.buf.ptr().as_ptr(), self.len) }
    }
}

impl<T, A: BlockAlloc, I: SliceIndex<[T]>> Index<I> for CairnVec<T, A> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, A: BlockAlloc, I: SliceIndex<[T]>> IndexMut<I> for CairnVec<T, A> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: fmt::Debug, A: BlockAlloc> fmt::Debug for CairnVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Renders the whole constructed prefix, in order.
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, A: BlockAlloc, A2: BlockAlloc> PartialEq<CairnVec<T, A2>> for CairnVec<T, A> {
    fn eq(&self, other: &CairnVec<T, A2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, A: BlockAlloc> PartialEq<[T]> for CairnVec<T, A> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, A: BlockAlloc> PartialEq<&[T]> for CairnVec<T, A> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, A: BlockAlloc, const N: usize> PartialEq<[T; N]> for CairnVec<T, A> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: BlockAlloc> Eq for CairnVec<T, A> {}

impl<T: Clone> TryFrom<&[T]> for CairnVec<T> {
    type Error = CairnVecError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        Self::try_from_slice(slice)
    }
}

impl<T, A: BlockAlloc> IntoIterator for CairnVec<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    /// Consumes the vector into an owning iterator over its elements.
    ///
    /// Elements not consumed by the time the iterator drops are destroyed
    /// with it, and the block is released exactly once.
    fn into_iter(self) -> IntoIter<T, A> {
        let this = ManuallyDrop::new(self);

        // SAFETY: `this` is never dropped, so `buf` is moved out exactly
        // once and the elements' ownership transfers to the iterator.
        let buf = unsafe { core::ptr::read(&this.buf) };

        IntoIter::new(buf, this.len)
    }
}

impl<'a, T, A: BlockAlloc> IntoIterator for &'a CairnVec<T, A> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: BlockAlloc> IntoIterator for &'a mut CairnVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
