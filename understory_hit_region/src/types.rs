// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the region tree: region identifiers, pointers, flags, and local geometry.

use kurbo::{Affine, Rect};

/// Identifier for a region in the tree.
///
/// A small, copyable handle consisting of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `RegionId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `RegionId`.
///
/// Use [`RegionTree::is_alive`](crate::RegionTree::is_alive) to check whether a `RegionId`
/// still refers to a live region. Stale ids never alias a different live region because the
/// generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RegionId(pub(crate) u32, pub(crate) u32);

impl RegionId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Identifier of a pointer device (mouse, pen, finger).
///
/// Hover state is tracked independently per pointer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u32);

bitflags::bitflags! {
    /// Region flags controlling hover participation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RegionFlags: u8 {
        /// Region wants hover enter/exit notifications.
        const HOVERABLE = 0b0000_0001;
        /// Among nested exclusive regions, only the innermost hit one is notified.
        ///
        /// Has no effect unless [`RegionFlags::HOVERABLE`] is also set.
        const EXCLUSIVE = 0b0000_0010;
    }
}

impl Default for RegionFlags {
    fn default() -> Self {
        Self::HOVERABLE
    }
}

/// How a region behaves during hit testing.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum HitBehavior {
    /// Hit only when a descendant is hit.
    DeferToChild,
    /// Hit whenever the point is inside the bounds; stops siblings beneath it.
    #[default]
    Opaque,
    /// Recorded whenever the point is inside the bounds, but regions beneath it
    /// are still tested.
    Translucent,
}

/// Local geometry and hit-test policy for a region.
#[derive(Clone, Debug)]
pub struct Region {
    /// Local (untransformed) bounds.
    pub local_bounds: Rect,
    /// Local transform relative to parent space.
    pub local_transform: Affine,
    /// Hit-test behavior.
    pub behavior: HitBehavior,
    /// Hover participation flags.
    pub flags: RegionFlags,
}

impl Region {
    /// An exclusive, hoverable region covering `bounds`.
    pub fn exclusive(bounds: Rect) -> Self {
        Self {
            local_bounds: bounds,
            flags: RegionFlags::HOVERABLE | RegionFlags::EXCLUSIVE,
            ..Default::default()
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self {
            local_bounds: Rect::ZERO,
            local_transform: Affine::IDENTITY,
            behavior: HitBehavior::default(),
            flags: RegionFlags::default(),
        }
    }
}
