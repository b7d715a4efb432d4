// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: handles, pointer devices, trigger modes, phases, and events.

/// Identifier for a mounted tooltip.
///
/// Slot index plus generation: unmounting frees the slot, and a later mount that
/// reuses it gets a higher generation, so stale ids never alias a live tooltip.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TooltipId(pub(crate) u32, pub(crate) u32);

impl TooltipId {
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

/// Identifier of a pointer device.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct DeviceId(pub u32);

/// Kind of pointer device that produced an event.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PointerKind {
    /// A mouse.
    #[default]
    Mouse,
    /// A finger on a touch screen; never hovers.
    Touch,
    /// A pen or stylus, which can hover above the surface.
    Stylus,
    /// A trackpad-driven cursor.
    Trackpad,
}

impl PointerKind {
    /// Whether this kind of device can hover without pressing.
    pub fn supports_hover(self) -> bool {
        !matches!(self, Self::Touch)
    }
}

/// Which gesture shows a tooltip. Fixed for the lifetime of the tooltip.
///
/// Hover is independent of the trigger mode: a hoverable pointer shows the
/// tooltip in every mode.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerMode {
    /// Shown only through [`Tooltips::ensure_visible`](crate::Tooltips::ensure_visible).
    Manual,
    /// Shown on tap down; hides after the visible duration.
    Tap,
    /// Shown on long press; hides after the visible duration once released.
    #[default]
    LongPress,
}

/// Visibility phase of a tooltip, derived from its fade progress.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Progress is `0.0` and not moving forward.
    #[default]
    Dismissed,
    /// Moving toward fully visible.
    FadingIn,
    /// Progress is `1.0`.
    Visible,
    /// Moving toward dismissed.
    FadingOut,
}

impl Phase {
    /// Whether the overlay exists in this phase (anything but dismissed).
    pub fn is_open(self) -> bool {
        self != Self::Dismissed
    }
}

/// Notification for the host, queued by [`Tooltips`](crate::Tooltips).
///
/// Drain with [`Tooltips::take_events`](crate::Tooltips::take_events).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TooltipEvent {
    /// Emit platform feedback (haptic or audible) for this tooltip.
    Feedback(TooltipId),
    /// A tap or long press triggered this tooltip.
    Triggered(TooltipId),
    /// Insert the overlay; place it with
    /// [`Tooltips::place_overlay`](crate::Tooltips::place_overlay).
    OverlayShown(TooltipId),
    /// Remove the overlay.
    OverlayHidden(TooltipId),
    /// The phase changed.
    PhaseChanged {
        /// Tooltip whose phase changed.
        tooltip: TooltipId,
        /// Previous phase.
        from: Phase,
        /// New phase.
        to: Phase,
    },
}
