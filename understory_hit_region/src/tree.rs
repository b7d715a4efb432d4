// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, updates, and the exclusive hit-test pass.

use alloc::vec::Vec;
use kurbo::{Affine, Point, Rect};

use crate::types::{HitBehavior, Region, RegionFlags, RegionId};

impl Default for RegionTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Tree of nested hover regions.
///
/// Children are stacked in insertion order: the last inserted child is topmost
/// and is tested first. Roots are stacked the same way.
pub struct RegionTree {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    roots: Vec<RegionId>,
}

impl core::fmt::Debug for RegionTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("RegionTree")
            .field("regions_total", &total)
            .field("regions_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("roots", &self.roots.len())
            .finish_non_exhaustive()
    }
}

/// Results of a hit test.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HitTestResult {
    /// Every region recorded by the pass, innermost first.
    pub path: Vec<RegionId>,
    /// Regions that should receive hover notifications for this point, innermost first.
    ///
    /// Contains every hit hoverable non-exclusive region, plus at most one region
    /// per outermost exclusive subtree.
    pub hover_targets: Vec<RegionId>,
}

/// Transient state scoped to a single hit-test pass.
///
/// Both flags are reset by the outermost exclusive region once its traversal
/// finishes, so they never leak into sibling subtrees or later passes.
#[derive(Clone, Copy, Debug, Default)]
struct ExclusivePass {
    /// An exclusive region is currently being traversed.
    inside_exclusive: bool,
    /// A descendant exclusive region already claimed the hover notification.
    claimed: bool,
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<RegionId>,
    children: Vec<RegionId>,
    local: Region,
}

impl Node {
    fn new(generation: u32, local: Region) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            local,
        }
    }
}

impl RegionTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Insert a new region as the topmost child of `parent` (or as the topmost root if `None`).
    ///
    /// A stale `parent` inserts the region as a root.
    pub fn insert(&mut self, parent: Option<RegionId>, local: Region) -> RegionId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, local));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "RegionId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, local)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "RegionId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = RegionId::new(idx, generation);
        match parent {
            Some(p) if self.is_alive(p) => self.link_parent(id, p),
            _ => self.roots.push(id),
        }
        id
    }

    /// Remove a region (and its subtree) from the tree.
    pub fn remove(&mut self, id: RegionId) {
        if !self.is_alive(id) {
            return;
        }
        self.unlink(id);
        self.free_subtree(id);
    }

    /// Reparent `id` under `new_parent`, becoming its topmost child.
    ///
    /// Reparenting a region under itself or one of its descendants is ignored.
    pub fn reparent(&mut self, id: RegionId, new_parent: Option<RegionId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(p) = new_parent
            && (!self.is_alive(p) || self.path_to_root(p).contains(&id))
        {
            return;
        }
        self.unlink(id);
        match new_parent {
            Some(p) => self.link_parent(id, p),
            None => self.roots.push(id),
        }
    }

    /// Update local bounds.
    pub fn set_local_bounds(&mut self, id: RegionId, bounds: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.local_bounds = bounds;
        }
    }

    /// Update local transform.
    pub fn set_local_transform(&mut self, id: RegionId, transform: Affine) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.local_transform = transform;
        }
    }

    /// Update hit-test behavior.
    pub fn set_behavior(&mut self, id: RegionId, behavior: HitBehavior) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.behavior = behavior;
        }
    }

    /// Update region flags.
    pub fn set_flags(&mut self, id: RegionId, flags: RegionFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.local.flags = flags;
        }
    }

    /// Returns true if `id` refers to a live region.
    pub fn is_alive(&self, id: RegionId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Local data of a live region.
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.node_opt(id).map(|n| &n.local)
    }

    /// Parent of a live region, or `None` for roots and stale ids.
    pub fn parent_of(&self, id: RegionId) -> Option<RegionId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Composed transform from the region's local space to world space.
    pub fn world_transform(&self, id: RegionId) -> Option<Affine> {
        if !self.is_alive(id) {
            return None;
        }
        let mut transform = Affine::IDENTITY;
        for region in self.path_to_root(id) {
            transform = self.node(region).local.local_transform * transform;
        }
        Some(transform)
    }

    /// World-space axis-aligned bounds of a live region.
    ///
    /// Conservative under rotation and shear.
    pub fn world_bounds(&self, id: RegionId) -> Option<Rect> {
        let transform = self.world_transform(id)?;
        Some(transform_rect_bbox(transform, self.node(id).local.local_bounds))
    }

    /// Hit test a world-space point.
    ///
    /// Regions are only hit inside their bounds, and children are only tested
    /// when their parent's bounds contain the point.
    /// Among nested [`EXCLUSIVE`](RegionFlags::EXCLUSIVE) regions, only the
    /// innermost one recorded by the pass becomes a hover target.
    pub fn hit_test(&self, pt: Point) -> HitTestResult {
        let mut result = HitTestResult::default();
        let mut pass = ExclusivePass::default();
        for &root in self.roots.iter().rev() {
            if self.hit_test_region(root, pt, &mut pass, &mut result) {
                break;
            }
        }
        debug_assert!(
            !pass.inside_exclusive && !pass.claimed,
            "exclusive hit-test state leaked past the end of the pass"
        );
        #[cfg(feature = "tracing")]
        tracing::trace!(
            x = pt.x,
            y = pt.y,
            path = result.path.len(),
            hover_targets = result.hover_targets.len(),
            "region hit test"
        );
        result
    }

    fn hit_test_region(
        &self,
        id: RegionId,
        parent_pt: Point,
        pass: &mut ExclusivePass,
        result: &mut HitTestResult,
    ) -> bool {
        let node = self.node(id);
        let local_pt = node.local.local_transform.inverse() * parent_pt;
        let hoverable = node.local.flags.contains(RegionFlags::HOVERABLE);
        let exclusive = hoverable && node.local.flags.contains(RegionFlags::EXCLUSIVE);

        let outermost = exclusive && !pass.inside_exclusive;
        if outermost {
            pass.inside_exclusive = true;
            pass.claimed = false;
        }

        let mut is_hit = false;
        if node.local.local_bounds.contains(local_pt) {
            let child_hit = node
                .children
                .iter()
                .rev()
                .any(|&child| self.hit_test_region(child, local_pt, pass, result));
            is_hit = child_hit || node.local.behavior == HitBehavior::Opaque;
            if is_hit || node.local.behavior == HitBehavior::Translucent {
                result.path.push(id);
                if exclusive {
                    if !pass.claimed {
                        pass.claimed = true;
                        result.hover_targets.push(id);
                    }
                } else if hoverable {
                    result.hover_targets.push(id);
                }
            }
        }

        if outermost {
            pass.inside_exclusive = false;
            pass.claimed = false;
        }
        is_hit
    }

    // --- internals ---

    fn node_opt(&self, id: RegionId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.generation()).then_some(n)
    }

    fn node_opt_mut(&mut self, id: RegionId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.generation() {
            return None;
        }
        Some(n)
    }

    /// Access a live region; panics if `id` is stale.
    fn node(&self, id: RegionId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling RegionId")
    }

    fn node_mut(&mut self, id: RegionId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling RegionId")
    }

    fn link_parent(&mut self, id: RegionId, parent: RegionId) {
        self.node_mut(parent).children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink(&mut self, id: RegionId) {
        match self.node(id).parent {
            Some(parent) => {
                self.node_mut(parent).children.retain(|c| *c != id);
                self.node_mut(id).parent = None;
            }
            None => self.roots.retain(|r| *r != id),
        }
    }

    fn free_subtree(&mut self, id: RegionId) {
        let children = core::mem::take(&mut self.node_mut(id).children);
        for child in children {
            self.free_subtree(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Path from `id` up to its root, inclusive, innermost first.
    fn path_to_root(&self, mut id: RegionId) -> Vec<RegionId> {
        let mut out = Vec::new();
        loop {
            out.push(id);
            match self.node(id).parent {
                Some(p) => id = p,
                None => break,
            }
        }
        out
    }
}

/// Transform an axis-aligned `Rect` by an `Affine` and return a conservative
/// axis-aligned bounding box.
fn transform_rect_bbox(affine: Affine, rect: Rect) -> Rect {
    let p0 = affine * Point::new(rect.x0, rect.y0);
    let p1 = affine * Point::new(rect.x1, rect.y0);
    let p2 = affine * Point::new(rect.x0, rect.y1);
    let p3 = affine * Point::new(rect.x1, rect.y1);
    let min_x = p0.x.min(p1.x).min(p2.x).min(p3.x);
    let min_y = p0.y.min(p1.y).min(p2.y).min(p3.y);
    let max_x = p0.x.max(p1.x).max(p2.x).max(p3.x);
    let max_y = p0.y.max(p1.y).max(p2.y).max(p3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}
