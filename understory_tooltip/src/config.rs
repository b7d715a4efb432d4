// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tooltip configuration.

use core::time::Duration;

use crate::anchor::Alignment;
use crate::types::TriggerMode;

/// Configuration of a single tooltip.
///
/// Custom offset functions and the triggered callback are not part of the
/// config; set them on the mounted tooltip with
/// [`Tooltips::set_custom_offset`](crate::Tooltips::set_custom_offset) and
/// [`Tooltips::set_on_triggered`](crate::Tooltips::set_on_triggered).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TooltipConfig {
    /// Delay before a hover shows the tooltip.
    pub wait_delay: Duration,
    /// How long a tap or released long press keeps the tooltip up.
    pub visible_duration: Duration,
    /// Delay before hiding once the last hovering pointer leaves.
    pub hover_exit_delay: Duration,
    /// Length of the fade in.
    pub fade_in_duration: Duration,
    /// Length of the fade out.
    pub fade_out_duration: Duration,
    /// Gesture that shows the tooltip.
    pub trigger_mode: TriggerMode,
    /// Emit [`TooltipEvent::Feedback`](crate::TooltipEvent::Feedback) when a
    /// gesture shows a dismissed tooltip.
    pub feedback_enabled: bool,
    /// Placement relative to the anchor.
    pub alignment: Alignment,
}

impl TooltipConfig {
    /// Default hover wait delay.
    pub const DEFAULT_WAIT_DELAY: Duration = Duration::ZERO;
    /// Default visible duration after a tap or long press.
    pub const DEFAULT_VISIBLE_DURATION: Duration = Duration::from_millis(1000);
    /// Default delay before hiding after hover exit.
    pub const DEFAULT_HOVER_EXIT_DELAY: Duration = Duration::from_millis(200);
    /// Default fade-in length.
    pub const DEFAULT_FADE_IN: Duration = Duration::from_millis(150);
    /// Default fade-out length.
    pub const DEFAULT_FADE_OUT: Duration = Duration::from_millis(75);

    /// Set the hover wait delay.
    pub fn with_wait_delay(mut self, delay: Duration) -> Self {
        self.wait_delay = delay;
        self
    }

    /// Set the visible duration.
    pub fn with_visible_duration(mut self, duration: Duration) -> Self {
        self.visible_duration = duration;
        self
    }

    /// Set the hover exit delay.
    pub fn with_hover_exit_delay(mut self, delay: Duration) -> Self {
        self.hover_exit_delay = delay;
        self
    }

    /// Set both fade durations.
    pub fn with_fade(mut self, fade_in: Duration, fade_out: Duration) -> Self {
        self.fade_in_duration = fade_in;
        self.fade_out_duration = fade_out;
        self
    }

    /// Set the trigger mode.
    pub fn with_trigger_mode(mut self, mode: TriggerMode) -> Self {
        self.trigger_mode = mode;
        self
    }

    /// Enable or disable feedback.
    pub fn with_feedback(mut self, enabled: bool) -> Self {
        self.feedback_enabled = enabled;
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            wait_delay: Self::DEFAULT_WAIT_DELAY,
            visible_duration: Self::DEFAULT_VISIBLE_DURATION,
            hover_exit_delay: Self::DEFAULT_HOVER_EXIT_DELAY,
            fade_in_duration: Self::DEFAULT_FADE_IN,
            fade_out_duration: Self::DEFAULT_FADE_OUT,
            trigger_mode: TriggerMode::default(),
            feedback_enabled: true,
            alignment: Alignment::default(),
        }
    }
}
