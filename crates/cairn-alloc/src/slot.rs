// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! In-place slot lifecycle: construct, destroy, move out.
//!
//! A slot is one element-sized region inside an acquired block. These
//! primitives flip a slot between its two states, uninitialized and live,
//! without touching the block itself.

use core::ptr::NonNull;

/// Constructs `value` in place in an uninitialized slot.
///
/// The value is moved into the slot without reading the slot's previous
/// contents, so no destructor runs on whatever bytes were there.
///
/// # Safety
///
/// `slot` must be properly aligned, valid for writes of one `T`, and must
/// not currently hold a live value (a live value would be overwritten
/// without being dropped).
#[inline]
pub unsafe fn construct_at<T>(slot: NonNull<T>, value: T) {
    // SAFETY: slot is valid for writes per the caller contract.
    unsafe { slot.as_ptr().write(value) };
}

/// Destroys the live value in a slot, leaving the slot uninitialized.
///
/// # Safety
///
/// `slot` must be properly aligned, valid for reads and writes of one `T`,
/// and must hold a live value. After this call the slot must be treated as
/// uninitialized until constructed again.
#[inline]
pub unsafe fn destroy_at<T>(slot: NonNull<T>) {
    // SAFETY: slot holds a live value per the caller contract.
    unsafe { slot.as_ptr().drop_in_place() };
}

/// Moves the live value out of a slot, leaving the slot uninitialized.
///
/// Ownership transfers to the caller; no destructor runs in the slot.
///
/// # Safety
///
/// `slot` must be properly aligned, valid for reads of one `T`, and must
/// hold a live value. After this call the slot must be treated as
/// uninitialized until constructed again.
#[inline]
pub unsafe fn take_at<T>(slot: NonNull<T>) -> T {
    // SAFETY: slot holds a live value per the caller contract.
    unsafe { slot.as_ptr().read() }
}
