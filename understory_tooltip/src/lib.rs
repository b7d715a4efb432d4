// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Tooltip: tooltip visibility, placement, and coordination for UI.
//!
//! ## Overview
//!
//! [`Tooltips`] holds every mounted tooltip of a UI. Each one runs a small
//! visibility state machine driven by gestures (tap, long press), hover, and
//! explicit requests, with delays and fades advanced by [`Tooltips::tick`]:
//!
//! ```text
//! Dismissed --show--> FadingIn --fade done--> Visible
//!     ^                  ^  |                    |
//!     |                  |  +------hide-------+  |
//!     |                  +------show------+   |  |
//!     +---fade done--- FadingOut <--------+---+--+
//! ```
//!
//! - Tap shows now and hides after the visible duration, unless a pointer is
//!   hovering the trigger.
//! - Long press shows now; releasing schedules the hide.
//! - Hover shows after the wait delay and hides after the exit delay once the
//!   last hovering device leaves. Touch never hovers.
//! - [`Tooltips::ensure_visible`] shows programmatically;
//!   [`Tooltips::dismiss_all`] hides every open tooltip.
//!
//! The set keeps an [`OpenTooltips`] registry of tooltips that are not
//! dismissed. Hovering a trigger hides every other open tooltip that nobody is
//! hovering, so at most one hover-driven tooltip is up at a time.
//!
//! The host learns what to do through [`TooltipEvent`]s: insert or remove the
//! overlay, emit platform feedback, and follow phase changes; while a fade runs,
//! paint with [`Tooltips::opacity`].
//!
//! ## Placement
//!
//! [`anchor`] computes the overlay offset from the trigger's bounds and the
//! measured content size, using one of twelve [`Alignment`](anchor::Alignment)s
//! or a custom function. Placement runs in two steps because content is
//! measured after the overlay is inserted.
//!
//! ## Nested triggers
//!
//! With the `hit_region_adapter` feature, [`adapters::hit_region`] routes hover
//! transitions from `understory_hit_region`, whose exclusive regions make only
//! the innermost of nested triggers receive the hover.
//!
//! ## Minimal usage
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Rect, Size};
//! use understory_tooltip::{
//!     DeviceId, Phase, TooltipConfig, TooltipEvent, Tooltips, TriggerMode,
//! };
//!
//! let mut tooltips = Tooltips::new();
//! let id = tooltips.mount(TooltipConfig::default().with_trigger_mode(TriggerMode::Tap));
//!
//! tooltips.tap_down(id, DeviceId(0));
//! assert!(tooltips.take_events().contains(&TooltipEvent::OverlayShown(id)));
//!
//! // Place the overlay: park it off stage, then resolve once measured.
//! tooltips.place_overlay(id, Rect::new(80.0, 80.0, 120.0, 120.0));
//! let offset = tooltips.reposition_overlay(id, Size::new(20.0, 10.0));
//! assert_eq!(offset, Point::new(120.0, 80.0));
//!
//! tooltips.tick(Duration::from_millis(150));
//! assert_eq!(tooltips.phase(id), Some(Phase::Visible));
//!
//! // Hidden again after the visible duration and the fade out.
//! tooltips.tick(Duration::from_millis(850 + 75));
//! assert_eq!(tooltips.phase(id), Some(Phase::Dismissed));
//! assert!(tooltips.registry().is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo. Use `libm` instead for `no_std`.
//! - `tracing`: debug and trace logging of phase changes, delays, and preemption.
//! - `serde`: serialize [`TooltipConfig`].
//! - `hit_region_adapter`: integration with `understory_hit_region`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod anchor;

mod animation;
mod config;
mod registry;
mod timer;
mod tooltips;
mod types;

pub use animation::FadeAnimation;
pub use config::TooltipConfig;
pub use registry::OpenTooltips;
pub use timer::TimerAction;
pub use tooltips::{Tooltips, TriggeredFn};
pub use types::{DeviceId, Phase, PointerKind, TooltipEvent, TooltipId, TriggerMode};
