// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Hands out [`Counted`] values and tallies how many of them (originals or
/// clones) have been destroyed.
pub(crate) struct DropTally {
    drops: Rc<Cell<usize>>,
}

impl DropTally {
    pub(crate) fn new() -> Self {
        Self {
            drops: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn drops(&self) -> usize {
        self.drops.get()
    }

    pub(crate) fn item(&self, value: u32) -> Counted {
        Counted {
            value,
            drops: Rc::clone(&self.drops),
        }
    }
}

pub(crate) struct Counted {
    pub(crate) value: u32,
    drops: Rc<Cell<usize>>,
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl Clone for Counted {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            drops: Rc::clone(&self.drops),
        }
    }
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Counted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counted({})", self.value)
    }
}

/// A value whose clone panics when armed; destroyed clones are tallied so
/// unwind paths can be audited for leaks.
pub(crate) struct CloneBomb {
    pub(crate) value: u32,
    armed: bool,
    is_clone: bool,
    clone_drops: Rc<Cell<usize>>,
}

impl CloneBomb {
    pub(crate) fn tally() -> Rc<Cell<usize>> {
        Rc::new(Cell::new(0))
    }

    pub(crate) fn new(value: u32, armed: bool, clone_drops: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            armed,
            is_clone: false,
            clone_drops: Rc::clone(clone_drops),
        }
    }
}

impl Clone for CloneBomb {
    fn clone(&self) -> Self {
        if self.armed {
            panic!("armed clone tripped");
        }

        Self {
            value: self.value,
            armed: false,
            is_clone: true,
            clone_drops: Rc::clone(&self.clone_drops),
        }
    }
}

impl Drop for CloneBomb {
    fn drop(&mut self) {
        if self.is_clone {
            self.clone_drops.set(self.clone_drops.get() + 1);
        }
    }
}
