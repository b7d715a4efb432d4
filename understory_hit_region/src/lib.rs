// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Hit Region: nested hover regions with exclusive enter/exit.
//!
//! ## Overview
//!
//! A [`RegionTree`] holds nested rectangular regions, each with a local transform,
//! a [`HitBehavior`], and [`RegionFlags`]. Hit testing a point walks the tree
//! topmost-first and reports:
//!
//! - the hit path (every region the pass recorded, innermost first), and
//! - the hover targets: regions that should receive enter/exit notifications.
//!
//! ## Exclusive regions
//!
//! Regions flagged [`RegionFlags::EXCLUSIVE`] cooperate so that, among a nest of
//! them, only the innermost region containing the point is a hover target.
//! Outer exclusive regions are still part of the hit path; they just do not
//! also report enter/exit. This is what a tooltip trigger nested inside another
//! tooltip trigger needs: hovering the inner trigger must not keep the outer
//! tooltip open.
//!
//! The pass keeps two flags scoped to one traversal: whether an exclusive region
//! is being traversed, and whether a descendant already claimed the hover. A
//! region tests its children before claiming, and the outermost exclusive region
//! resets both flags when it is done, so separate passes and sibling exclusive
//! subtrees never see each other's claims.
//!
//! A [`Translucent`](HitBehavior::Translucent) exclusive region still claims the
//! notification even though it lets regions beneath it be hit.
//!
//! ## Hover tracking
//!
//! [`HoverTracker`] keeps the hover targets per [`PointerId`] and emits
//! [`HoverEvent::Exit`] (inner→outer) and [`HoverEvent::Enter`] (outer→inner)
//! for the minimal transition between passes.
//!
//! ## Minimal usage
//!
//! ```
//! use understory_hit_region::{HoverEvent, HoverTracker, PointerId, Region, RegionTree};
//! use kurbo::{Point, Rect};
//!
//! let mut tree = RegionTree::new();
//! let a = tree.insert(None, Region::exclusive(Rect::new(0.0, 0.0, 300.0, 300.0)));
//! let b = tree.insert(Some(a), Region::exclusive(Rect::new(50.0, 50.0, 250.0, 250.0)));
//! let c = tree.insert(Some(b), Region::exclusive(Rect::new(100.0, 100.0, 200.0, 200.0)));
//!
//! let hit = tree.hit_test(Point::new(150.0, 150.0));
//! assert_eq!(hit.path, vec![c, b, a]);
//! assert_eq!(hit.hover_targets, vec![c]);
//!
//! let mut hover = HoverTracker::new();
//! let events = hover.update(PointerId(0), &hit.hover_targets);
//! assert_eq!(events, vec![HoverEvent::Enter(PointerId(0), c)]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hover;
mod tree;
mod types;

pub use hover::{HoverEvent, HoverTracker};
pub use tree::{HitTestResult, RegionTree};
pub use types::{HitBehavior, PointerId, Region, RegionFlags, RegionId};
