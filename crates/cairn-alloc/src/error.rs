// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Error type for block allocation.
#[derive(Debug, Error, Eq, PartialEq, Clone, Copy)]
pub enum AllocError {
    /// The underlying memory service could not satisfy the request.
    ///
    /// Carries the size of the failed request in bytes. This error is not
    /// locally recoverable; callers propagate it so the owner of the
    /// container can decide how to degrade.
    #[error("Out of memory: allocation of {size} bytes failed")]
    OutOfMemory {
        /// Requested allocation size in bytes.
        size: usize,
    },

    /// The requested element count does not fit in a single allocation.
    ///
    /// Raised by layout arithmetic before anything is acquired. Normal
    /// growth cannot reach it; a block would have to approach `isize::MAX`
    /// bytes first.
    #[error("Capacity overflow: element count exceeds addressable memory")]
    CapacityOverflow,
}
