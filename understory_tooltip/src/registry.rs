// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry of tooltips that are visible or transitioning.

use alloc::vec::Vec;

use crate::types::TooltipId;

/// Ordered set of open tooltips (phase other than dismissed).
///
/// Owned by [`Tooltips`](crate::Tooltips); a tooltip is added and removed only
/// by its own phase transitions. Insertion order is preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpenTooltips {
    open: Vec<TooltipId>,
}

impl OpenTooltips {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { open: Vec::new() }
    }

    /// Add `id`; returns false if it was already present.
    pub(crate) fn insert(&mut self, id: TooltipId) -> bool {
        if self.open.contains(&id) {
            return false;
        }
        self.open.push(id);
        true
    }

    /// Remove `id`; returns false if it was not present.
    pub(crate) fn remove(&mut self, id: TooltipId) -> bool {
        let before = self.open.len();
        self.open.retain(|o| *o != id);
        self.open.len() != before
    }

    /// Whether `id` is open.
    pub fn contains(&self, id: TooltipId) -> bool {
        self.open.contains(&id)
    }

    /// Open tooltips in the order they opened.
    pub fn iter(&self) -> impl Iterator<Item = TooltipId> + '_ {
        self.open.iter().copied()
    }

    /// Snapshot of the open tooltips, for iterating while driving them.
    pub fn to_vec(&self) -> Vec<TooltipId> {
        self.open.clone()
    }

    /// Number of open tooltips.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Whether no tooltip is open.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
