// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use cairn_alloc::AllocError;

/// Error type for `CairnVec` operations.
#[derive(Debug, Error, Eq, PartialEq, Clone, Copy)]
pub enum CairnVecError {
    /// Storage acquisition failed.
    ///
    /// Wraps the allocation capability's error; growth and copy operations
    /// propagate it untouched and leave the vector in its prior state.
    #[error(transparent)]
    Alloc(#[from] AllocError),

    /// Attempted to remove an element from an empty vector.
    #[error("Empty vector: there is no last element to remove")]
    Empty,
}
