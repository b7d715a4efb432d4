// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-shot delay owned by one tooltip.

use core::time::Duration;

/// What a pending delay does when it fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerAction {
    /// Show the tooltip, then optionally schedule a hide after `auto_hide`.
    Show {
        /// Delay of the follow-up hide, if any.
        auto_hide: Option<Duration>,
    },
    /// Start fading out.
    Hide,
}

/// At most one pending action with its remaining time.
///
/// Scheduling replaces (and so cancels) whatever was pending.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct DelayTimer {
    pending: Option<(TimerAction, Duration)>,
}

impl DelayTimer {
    pub(crate) fn schedule(&mut self, delay: Duration, action: TimerAction) {
        self.pending = Some((action, delay));
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }

    pub(crate) fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn pending(&self) -> Option<(TimerAction, Duration)> {
        self.pending
    }

    /// Time until the pending action fires.
    pub(crate) fn remaining(&self) -> Option<Duration> {
        self.pending.map(|(_, remaining)| remaining)
    }

    /// Advance by `dt`, returning the action if it fired.
    pub(crate) fn advance(&mut self, dt: Duration) -> Option<TimerAction> {
        let (action, remaining) = self.pending?;
        if dt >= remaining {
            self.pending = None;
            Some(action)
        } else {
            self.pending = Some((action, remaining - dt));
            None
        }
    }
}
