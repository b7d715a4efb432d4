// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-pointer hover tracking: compute enter/exit transitions from hit-test results.
//!
//! ## Usage
//!
//! 1) Run [`RegionTree::hit_test`](crate::RegionTree::hit_test) for a pointer move.
//! 2) Pass the result's `hover_targets` to [`HoverTracker::update`] for that pointer.
//! 3) Dispatch the returned `Exit(..)` / `Enter(..)` events.
//!
//! ## Minimal example
//!
//! ```
//! use understory_hit_region::{HoverEvent, HoverTracker, PointerId, Region, RegionTree};
//! use kurbo::{Point, Rect};
//!
//! let mut tree = RegionTree::new();
//! let outer = tree.insert(None, Region::exclusive(Rect::new(0.0, 0.0, 100.0, 100.0)));
//! let inner = tree.insert(Some(outer), Region::exclusive(Rect::new(40.0, 40.0, 60.0, 60.0)));
//!
//! let mouse = PointerId(0);
//! let mut hover = HoverTracker::new();
//!
//! let hit = tree.hit_test(Point::new(10.0, 10.0));
//! assert_eq!(hover.update(mouse, &hit.hover_targets), vec![HoverEvent::Enter(mouse, outer)]);
//!
//! // Moving into the nested region moves the hover, it does not stack.
//! let hit = tree.hit_test(Point::new(50.0, 50.0));
//! assert_eq!(
//!     hover.update(mouse, &hit.hover_targets),
//!     vec![HoverEvent::Exit(mouse, outer), HoverEvent::Enter(mouse, inner)]
//! );
//! ```

use alloc::vec::Vec;

use crate::types::{PointerId, RegionId};

/// A hover transition event for one pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// Pointer enters the given region (in order from outer→inner).
    Enter(PointerId, RegionId),
    /// Pointer exits the given region (in order from inner→outer).
    Exit(PointerId, RegionId),
}

impl HoverEvent {
    /// Pointer this event belongs to.
    pub fn pointer(&self) -> PointerId {
        match *self {
            Self::Enter(p, _) | Self::Exit(p, _) => p,
        }
    }

    /// Region this event targets.
    pub fn region(&self) -> RegionId {
        match *self {
            Self::Enter(_, r) | Self::Exit(_, r) => r,
        }
    }
}

/// Hover state for every pointer device currently over the tree.
///
/// Tracks the hovered regions (innermost first, as produced by the hit test)
/// per pointer and, when updated, computes the exits and enters needed to move
/// from the old set to the new one.
///
/// Ordering semantics:
/// - Exit events are emitted from inner-most to outer-most.
/// - Enter events are emitted from outer-most to inner-most.
/// - All exits precede all enters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverTracker {
    pointers: Vec<(PointerId, Vec<RegionId>)>,
}

impl HoverTracker {
    /// Create an empty hover tracker.
    pub fn new() -> Self {
        Self {
            pointers: Vec::new(),
        }
    }

    /// Regions currently hovered by `pointer`, innermost first.
    pub fn hovered(&self, pointer: PointerId) -> &[RegionId] {
        self.pointers
            .iter()
            .find(|(p, _)| *p == pointer)
            .map(|(_, regions)| regions.as_slice())
            .unwrap_or(&[])
    }

    /// Pointers currently hovering at least one region.
    pub fn pointers(&self) -> impl Iterator<Item = PointerId> + '_ {
        self.pointers.iter().map(|(p, _)| *p)
    }

    /// Whether any pointer is hovering `region`.
    pub fn is_hovered(&self, region: RegionId) -> bool {
        self.pointers
            .iter()
            .any(|(_, regions)| regions.contains(&region))
    }

    /// Update the hover targets of `pointer` and return the transitions.
    ///
    /// `targets` is innermost first, as in
    /// [`HitTestResult::hover_targets`](crate::HitTestResult::hover_targets).
    pub fn update(&mut self, pointer: PointerId, targets: &[RegionId]) -> Vec<HoverEvent> {
        let slot = match self.pointers.iter().position(|(p, _)| *p == pointer) {
            Some(i) => i,
            None => {
                self.pointers.push((pointer, Vec::new()));
                self.pointers.len() - 1
            }
        };
        let previous = &self.pointers[slot].1;

        let mut out = Vec::new();
        // Exits: previous order is already inner→outer.
        for &r in previous {
            if !targets.contains(&r) {
                out.push(HoverEvent::Exit(pointer, r));
            }
        }
        // Enters: walk the new targets outer→inner.
        for &r in targets.iter().rev() {
            if !previous.contains(&r) {
                out.push(HoverEvent::Enter(pointer, r));
            }
        }

        if targets.is_empty() {
            self.pointers.swap_remove(slot);
        } else {
            let current = &mut self.pointers[slot].1;
            current.clear();
            current.extend_from_slice(targets);
        }
        #[cfg(feature = "tracing")]
        if !out.is_empty() {
            tracing::trace!(pointer = pointer.0, transitions = out.len(), "hover update");
        }
        out
    }

    /// Forget a pointer (device removed or left the surface), returning the
    /// exits for everything it hovered, inner→outer.
    pub fn remove_pointer(&mut self, pointer: PointerId) -> Vec<HoverEvent> {
        self.update(pointer, &[])
    }

    /// Drop regions for which `keep` returns false without emitting events.
    ///
    /// Use after removing regions from the tree so stale ids do not produce
    /// exits later.
    pub fn retain_regions(&mut self, mut keep: impl FnMut(RegionId) -> bool) {
        for (_, regions) in &mut self.pointers {
            regions.retain(|&r| keep(r));
        }
        self.pointers.retain(|(_, regions)| !regions.is_empty());
    }
}
