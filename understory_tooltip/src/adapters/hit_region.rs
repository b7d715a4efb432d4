// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Understory Hit Region.
//!
//! ## Feature
//!
//! Enable with `hit_region_adapter`.
//!
//! ## Notes
//!
//! Trigger areas are exclusive regions in a [`RegionTree`]; a [`TooltipLookup`]
//! maps each trigger region to its tooltip. Hover transitions from a
//! [`HoverTracker`] are routed to [`Tooltips::hover_enter`] and
//! [`Tooltips::hover_exit`], with [`PointerId`] `n` becoming [`DeviceId`] `n`.
//! Regions without a tooltip, and tooltips already unmounted, are skipped.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use understory_hit_region::{HoverEvent, HoverTracker, PointerId, RegionId, RegionTree};

use crate::tooltips::Tooltips;
use crate::types::{DeviceId, PointerKind, TooltipId};

/// Maps trigger regions to the tooltips they show.
pub trait TooltipLookup {
    /// Tooltip shown by hovering `region`, if any.
    fn tooltip_for(&self, region: RegionId) -> Option<TooltipId>;
}

impl<F> TooltipLookup for F
where
    F: Fn(RegionId) -> Option<TooltipId>,
{
    fn tooltip_for(&self, region: RegionId) -> Option<TooltipId> {
        self(region)
    }
}

/// Route hover transitions to the tooltips of their regions.
///
/// Exits are expected before enters, as [`HoverTracker::update`] produces them,
/// so moving between triggers hides before it preempts.
pub fn route_hover_events(
    tooltips: &mut Tooltips,
    lookup: &impl TooltipLookup,
    events: &[HoverEvent],
    kind: PointerKind,
) {
    for event in events {
        let Some(id) = lookup.tooltip_for(event.region()) else {
            continue;
        };
        if !tooltips.is_alive(id) {
            continue;
        }
        let device = DeviceId(event.pointer().0);
        match event {
            HoverEvent::Enter(..) => tooltips.hover_enter(id, device, kind),
            HoverEvent::Exit(..) => tooltips.hover_exit(id, device),
        }
    }
}

/// Hit test `pt`, update the pointer's hover targets, and route the transitions.
///
/// Returns the transitions for hosts that react to them as well.
pub fn pointer_moved(
    tree: &RegionTree,
    tracker: &mut HoverTracker,
    tooltips: &mut Tooltips,
    lookup: &impl TooltipLookup,
    pointer: PointerId,
    pt: Point,
    kind: PointerKind,
) -> Vec<HoverEvent> {
    let hit = tree.hit_test(pt);
    let events = tracker.update(pointer, &hit.hover_targets);
    route_hover_events(tooltips, lookup, &events, kind);
    events
}

/// The pointer left the surface: exit everything it hovered.
pub fn pointer_left(
    tracker: &mut HoverTracker,
    tooltips: &mut Tooltips,
    lookup: &impl TooltipLookup,
    pointer: PointerId,
    kind: PointerKind,
) -> Vec<HoverEvent> {
    let events = tracker.remove_pointer(pointer);
    route_hover_events(tooltips, lookup, &events, kind);
    events
}

/// World-space bounds of a trigger region, for [`Tooltips::place_overlay`].
///
/// Use [`anchor_in_overlay`](crate::anchor::anchor_in_overlay) when the overlay
/// has its own coordinate space.
pub fn trigger_anchor(tree: &RegionTree, region: RegionId) -> Option<Rect> {
    tree.world_bounds(region)
}
