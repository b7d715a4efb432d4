// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reversible fade progress driven by explicit ticks.
//!
//! The fade is a linear progress value in `0.0..=1.0` with a direction. Curves
//! are left to the host: map [`FadeAnimation::progress`] through whatever easing
//! the toolkit uses when painting.

use core::time::Duration;

use crate::types::Phase;

/// Fade-in/fade-out progress with a derived [`Phase`].
///
/// - [`forward`](Self::forward) and [`reverse`](Self::reverse) only change the
///   direction; progress is never reset, so reversing mid-fade resumes from the
///   current value.
/// - [`advance`](Self::advance) moves the progress and settles the phase at the ends.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FadeAnimation {
    progress: f64,
    phase: Phase,
    fade_in: Duration,
    fade_out: Duration,
}

impl FadeAnimation {
    /// A dismissed fade with the given durations.
    pub fn new(fade_in: Duration, fade_out: Duration) -> Self {
        Self {
            progress: 0.0,
            phase: Phase::Dismissed,
            fade_in,
            fade_out,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Linear progress in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whether the fade is moving toward dismissed.
    pub fn is_reversing(&self) -> bool {
        self.phase == Phase::FadingOut
    }

    /// Start (or continue) moving toward fully visible.
    ///
    /// A zero fade-in duration completes immediately.
    pub fn forward(&mut self) {
        if self.fade_in.is_zero() || self.progress >= 1.0 {
            self.progress = 1.0;
            self.phase = Phase::Visible;
        } else {
            self.phase = Phase::FadingIn;
        }
    }

    /// Start (or continue) moving toward dismissed.
    ///
    /// A zero fade-out duration completes immediately.
    pub fn reverse(&mut self) {
        if self.fade_out.is_zero() || self.progress <= 0.0 {
            self.progress = 0.0;
            self.phase = Phase::Dismissed;
        } else {
            self.phase = Phase::FadingOut;
        }
    }

    /// Advance by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        match self.phase {
            Phase::FadingIn => {
                self.progress += dt.as_secs_f64() / self.fade_in.as_secs_f64();
                if self.progress >= 1.0 {
                    self.progress = 1.0;
                    self.phase = Phase::Visible;
                }
            }
            Phase::FadingOut => {
                self.progress -= dt.as_secs_f64() / self.fade_out.as_secs_f64();
                if self.progress <= 0.0 {
                    self.progress = 0.0;
                    self.phase = Phase::Dismissed;
                }
            }
            Phase::Dismissed | Phase::Visible => {}
        }
    }
}
