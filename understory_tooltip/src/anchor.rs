// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor positioning: where the overlay goes relative to its trigger.
//!
//! ## Overview
//!
//! [`compute_offset`] turns an anchor (center and size), the overlay content size,
//! and a [`Placement`] into the overlay's top-left offset. It is a pure function:
//! no clamping against the viewport is performed, so callers that need on-screen
//! guarantees should supply a [`Placement::Custom`] function.
//!
//! The content size is only known after the overlay's own layout, so placement is
//! resolved in two explicit steps by [`OverlayPlacement`]:
//!
//! 1) [`place`](OverlayPlacement::place) records the anchor and parks the overlay
//!    off stage ([`OFFSTAGE_OFFSET`]).
//! 2) [`reposition`](OverlayPlacement::reposition) computes the final offset once
//!    the content has been measured.
//!
//! ## Alignment table
//!
//! With `c` the anchor center, `a` the anchor size and `s` the content size:
//!
//! | group | main axis | start / center / end |
//! |---|---|---|
//! | `Top*` | `y = c.y - a.h/2 - s.h` | `x = c.x - a.w/2`, `c.x - s.w/2`, `c.x + a.w/2 - s.w` |
//! | `Bottom*` | `y = c.y + a.h/2` | as `Top*` |
//! | `Left*` | `x = c.x - a.w/2 - s.w` | `y = c.y - a.h/2`, `c.y - s.h/2`, `c.y + a.h/2 - s.h` |
//! | `Right*` | `x = c.x + a.w/2` | as `Left*` |
//!
//! ```
//! use understory_tooltip::anchor::{Alignment, Placement, compute_offset};
//! use kurbo::{Point, Size};
//!
//! let offset = compute_offset(
//!     Point::new(100.0, 100.0),
//!     Size::new(40.0, 40.0),
//!     Size::new(20.0, 10.0),
//!     Placement::Aligned(Alignment::RightTop),
//! );
//! assert_eq!(offset, Point::new(120.0, 80.0));
//! ```

use kurbo::{Affine, Point, Rect, Size};

/// Offset used for an overlay whose content has not been measured yet.
///
/// Far outside any realistic viewport so the first frame never flashes the
/// overlay at a wrong position.
pub const OFFSTAGE_OFFSET: Point = Point::new(-10_000.0, -10_000.0);

/// Caller-supplied placement: `(anchor_center, anchor_size, content_size) -> offset`.
pub type OffsetFn = dyn Fn(Point, Size, Size) -> Point;

/// Where the overlay sits relative to its anchor.
///
/// The first word names the side of the anchor the content is placed on, the
/// second word which edge (or the center) of the content lines up with the
/// same edge of the anchor.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Above, left edges aligned.
    TopLeft,
    /// Above, horizontally centered.
    TopCenter,
    /// Above, right edges aligned.
    TopRight,
    /// Below, left edges aligned.
    BottomLeft,
    /// Below, horizontally centered.
    BottomCenter,
    /// Below, right edges aligned.
    BottomRight,
    /// Left of the anchor, top edges aligned.
    LeftTop,
    /// Left of the anchor, vertically centered.
    LeftCenter,
    /// Left of the anchor, bottom edges aligned.
    LeftBottom,
    /// Right of the anchor, top edges aligned.
    #[default]
    RightTop,
    /// Right of the anchor, vertically centered.
    RightCenter,
    /// Right of the anchor, bottom edges aligned.
    RightBottom,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum CrossAlign {
    Start,
    Center,
    End,
}

impl Alignment {
    /// All twelve alignments.
    pub const ALL: [Self; 12] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
        Self::LeftTop,
        Self::LeftCenter,
        Self::LeftBottom,
        Self::RightTop,
        Self::RightCenter,
        Self::RightBottom,
    ];

    fn split(self) -> (Side, CrossAlign) {
        use CrossAlign::*;
        match self {
            Self::TopLeft => (Side::Top, Start),
            Self::TopCenter => (Side::Top, Center),
            Self::TopRight => (Side::Top, End),
            Self::BottomLeft => (Side::Bottom, Start),
            Self::BottomCenter => (Side::Bottom, Center),
            Self::BottomRight => (Side::Bottom, End),
            Self::LeftTop => (Side::Left, Start),
            Self::LeftCenter => (Side::Left, Center),
            Self::LeftBottom => (Side::Left, End),
            Self::RightTop => (Side::Right, Start),
            Self::RightCenter => (Side::Right, Center),
            Self::RightBottom => (Side::Right, End),
        }
    }
}

/// Placement policy handed to [`compute_offset`].
#[derive(Copy, Clone)]
pub enum Placement<'a> {
    /// One of the built-in alignments.
    Aligned(Alignment),
    /// Caller-supplied function; fully replaces the alignment table.
    Custom(&'a OffsetFn),
}

impl core::fmt::Debug for Placement<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Aligned(a) => f.debug_tuple("Aligned").field(a).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Compute the overlay's top-left offset.
///
/// `anchor_center` and the result are in overlay coordinates. A custom function
/// receives the anchor center as its current offset.
pub fn compute_offset(
    anchor_center: Point,
    anchor_size: Size,
    content_size: Size,
    placement: Placement<'_>,
) -> Point {
    let alignment = match placement {
        Placement::Custom(f) => return f(anchor_center, anchor_size, content_size),
        Placement::Aligned(a) => a,
    };
    let (side, cross) = alignment.split();
    let half_w = anchor_size.width / 2.0;
    let half_h = anchor_size.height / 2.0;

    // Cross-axis position shared by the two groups on the same axis.
    let cross_x = match cross {
        CrossAlign::Start => anchor_center.x - half_w,
        CrossAlign::Center => anchor_center.x - content_size.width / 2.0,
        CrossAlign::End => anchor_center.x + half_w - content_size.width,
    };
    let cross_y = match cross {
        CrossAlign::Start => anchor_center.y - half_h,
        CrossAlign::Center => anchor_center.y - content_size.height / 2.0,
        CrossAlign::End => anchor_center.y + half_h - content_size.height,
    };

    match side {
        Side::Top => Point::new(cross_x, anchor_center.y - half_h - content_size.height),
        Side::Bottom => Point::new(cross_x, anchor_center.y + half_h),
        Side::Left => Point::new(anchor_center.x - half_w - content_size.width, cross_y),
        Side::Right => Point::new(anchor_center.x + half_w, cross_y),
    }
}

/// Anchor rectangle and measured content size, both in overlay coordinates.
///
/// Recomputed for every overlay show; never persisted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnchorGeometry {
    /// Anchor rectangle in overlay coordinates.
    pub anchor: Rect,
    /// Measured overlay content size.
    pub content_size: Size,
}

impl AnchorGeometry {
    /// Geometry from an anchor already expressed in overlay coordinates.
    pub fn new(anchor: Rect, content_size: Size) -> Self {
        Self {
            anchor,
            content_size,
        }
    }

    /// Geometry from the trigger's global rectangle.
    ///
    /// `overlay_from_global` maps global coordinates into the overlay's space;
    /// under rotation or shear the anchor becomes its conservative bounding box.
    pub fn from_global(global_anchor: Rect, overlay_from_global: Affine, content_size: Size) -> Self {
        Self::new(
            anchor_in_overlay(global_anchor, overlay_from_global),
            content_size,
        )
    }

    /// Overlay offset for this geometry.
    pub fn offset(&self, placement: Placement<'_>) -> Point {
        compute_offset(
            self.anchor.center(),
            self.anchor.size(),
            self.content_size,
            placement,
        )
    }
}

/// Map a global rectangle into overlay coordinates (axis-aligned bounding box).
pub fn anchor_in_overlay(global_anchor: Rect, overlay_from_global: Affine) -> Rect {
    let corners = [
        Point::new(global_anchor.x0, global_anchor.y0),
        Point::new(global_anchor.x1, global_anchor.y0),
        Point::new(global_anchor.x0, global_anchor.y1),
        Point::new(global_anchor.x1, global_anchor.y1),
    ]
    .map(|p| overlay_from_global * p);
    let mut out = Rect::from_points(corners[0], corners[1]);
    out = out.union_pt(corners[2]);
    out.union_pt(corners[3])
}

/// Two-step overlay placement: [`place`](Self::place), then
/// [`reposition`](Self::reposition) once the content has been laid out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayPlacement {
    anchor: Option<Rect>,
    content_size: Option<Size>,
    offset: Point,
}

impl Default for OverlayPlacement {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayPlacement {
    /// An unplaced overlay, parked off stage.
    pub const fn new() -> Self {
        Self {
            anchor: None,
            content_size: None,
            offset: OFFSTAGE_OFFSET,
        }
    }

    /// Record the anchor (overlay coordinates) and park the overlay off stage
    /// until its content is measured. Returns the tentative offset.
    pub fn place(&mut self, anchor: Rect) -> Point {
        self.anchor = Some(anchor);
        self.content_size = None;
        self.offset = OFFSTAGE_OFFSET;
        self.offset
    }

    /// Resolve the offset from the measured content size.
    ///
    /// Without a prior [`place`](Self::place) the overlay stays off stage.
    pub fn reposition(&mut self, content_size: Size, placement: Placement<'_>) -> Point {
        self.content_size = Some(content_size);
        if let Some(anchor) = self.anchor {
            self.offset = AnchorGeometry::new(anchor, content_size).offset(placement);
        }
        self.offset
    }

    /// Current offset; [`OFFSTAGE_OFFSET`] until resolved.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Anchor recorded by the last [`place`](Self::place).
    pub fn anchor(&self) -> Option<Rect> {
        self.anchor
    }

    /// Whether both steps have run since the last reset.
    pub fn is_resolved(&self) -> bool {
        self.anchor.is_some() && self.content_size.is_some()
    }

    /// Forget the anchor and content; the overlay goes back off stage.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
