// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip set: mounted tooltips, their visibility state machines, and the
//! registry of open tooltips.
//!
//! ## Overview
//!
//! Every mounted tooltip owns one [`FadeAnimation`] and at most one pending
//! delay. Gesture and hover entry points translate into two primitives:
//!
//! - [`Tooltips::request_show`]: cancel the pending delay, then either defer the
//!   show (only from dismissed) or fade in now, optionally scheduling a hide.
//! - [`Tooltips::request_hide`]: cancel the pending delay, then fade out now or
//!   after a delay; nothing happens if already dismissed or fading out.
//!
//! Time only moves through [`Tooltips::tick`]. A tick is split at the pending
//! delay's deadline, so an action that fires mid-tick affects the fade for the
//! rest of that tick.
//!
//! ## Registry
//!
//! [`OpenTooltips`] holds every tooltip whose phase is not dismissed. It changes
//! only when a tooltip's own phase crosses the dismissed boundary, and each such
//! change is paired with [`TooltipEvent::OverlayShown`] or
//! [`TooltipEvent::OverlayHidden`]. A hover entering one trigger hides every
//! other open tooltip that no pointer is hovering.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Rect, Size};

use crate::anchor::{OFFSTAGE_OFFSET, OffsetFn, OverlayPlacement, Placement};
use crate::animation::FadeAnimation;
use crate::config::TooltipConfig;
use crate::registry::OpenTooltips;
use crate::timer::{DelayTimer, TimerAction};
use crate::types::{DeviceId, Phase, PointerKind, TooltipEvent, TooltipId, TriggerMode};

/// Callback invoked when a tap or long press triggers a tooltip.
pub type TriggeredFn = dyn FnMut(TooltipId);

struct Tooltip {
    generation: u32,
    config: TooltipConfig,
    fade: FadeAnimation,
    timer: DelayTimer,
    hovering: Vec<DeviceId>,
    eligible: bool,
    // Pointer of the tap or long press that last triggered the tooltip.
    primary_pointer: Option<DeviceId>,
    placement: OverlayPlacement,
    custom_offset: Option<Box<OffsetFn>>,
    on_triggered: Option<Box<TriggeredFn>>,
}

impl core::fmt::Debug for Tooltip {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tooltip")
            .field("generation", &self.generation)
            .field("phase", &self.fade.phase())
            .field("timer", &self.timer)
            .field("hovering", &self.hovering)
            .field("eligible", &self.eligible)
            .field("custom_offset", &self.custom_offset.is_some())
            .finish_non_exhaustive()
    }
}

impl Tooltip {
    fn new(generation: u32, config: TooltipConfig) -> Self {
        Self {
            generation,
            fade: FadeAnimation::new(config.fade_in_duration, config.fade_out_duration),
            config,
            timer: DelayTimer::default(),
            hovering: Vec::new(),
            eligible: true,
            primary_pointer: None,
            placement: OverlayPlacement::new(),
            custom_offset: None,
            on_triggered: None,
        }
    }

    fn check_timer_invariant(&self) {
        debug_assert!(
            !(self.timer.is_active() && self.fade.is_reversing()),
            "timer must not be active while the tooltip is fading out"
        );
    }
}

/// All mounted tooltips of one UI, plus the registry of open ones.
///
/// Pass one `Tooltips` down to every trigger that should coordinate with the
/// others (hover preemption, [`dismiss_all`](Self::dismiss_all)).
pub struct Tooltips {
    slots: Vec<Option<Tooltip>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    registry: OpenTooltips,
    events: Vec<TooltipEvent>,
}

impl core::fmt::Debug for Tooltips {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let alive = self.slots.iter().filter(|s| s.is_some()).count();
        f.debug_struct("Tooltips")
            .field("mounted", &alive)
            .field("open", &self.registry)
            .field("queued_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl Default for Tooltips {
    fn default() -> Self {
        Self::new()
    }
}

impl Tooltips {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            registry: OpenTooltips::new(),
            events: Vec::new(),
        }
    }

    // --- lifecycle ---

    /// Mount a tooltip; it starts dismissed and eligible.
    pub fn mount(&mut self, config: TooltipConfig) -> TooltipId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(Tooltip::new(generation, config));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "TooltipId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Tooltip::new(generation, config)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "TooltipId uses 32-bit indices by design."
            )]
            ((self.slots.len() - 1) as u32, generation)
        };
        TooltipId::new(idx, generation)
    }

    /// Unmount a tooltip.
    ///
    /// Its pending delay is dropped with it and it leaves the registry
    /// immediately; an open overlay gets [`TooltipEvent::OverlayHidden`] without
    /// fading. Unmounting a stale id does nothing.
    pub fn unmount(&mut self, id: TooltipId) {
        if !self.is_alive(id) {
            return;
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
        if self.registry.remove(id) {
            self.events.push(TooltipEvent::OverlayHidden(id));
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(?id, "tooltip unmounted");
    }

    /// Returns true if `id` refers to a mounted tooltip.
    pub fn is_alive(&self, id: TooltipId) -> bool {
        self.slot(id).is_some()
    }

    // --- configuration ---

    /// Configuration of a mounted tooltip.
    pub fn config(&self, id: TooltipId) -> Option<&TooltipConfig> {
        self.slot(id).map(|t| &t.config)
    }

    /// Gate all show requests. An ineligible tooltip ignores them but keeps its
    /// current phase; it is not torn down.
    pub fn set_eligible(&mut self, id: TooltipId, eligible: bool) {
        if let Some(t) = self.live_mut(id, "set_eligible") {
            t.eligible = eligible;
        }
    }

    /// Whether show requests are currently honored.
    pub fn is_eligible(&self, id: TooltipId) -> bool {
        self.slot(id).is_some_and(|t| t.eligible)
    }

    /// Replace the alignment table with a custom offset function, or restore it with `None`.
    pub fn set_custom_offset(&mut self, id: TooltipId, f: Option<Box<OffsetFn>>) {
        if let Some(t) = self.live_mut(id, "set_custom_offset") {
            t.custom_offset = f;
        }
    }

    /// Set the callback fired whenever a tap or long press triggers the tooltip.
    pub fn set_on_triggered(&mut self, id: TooltipId, f: Option<Box<TriggeredFn>>) {
        if let Some(t) = self.live_mut(id, "set_on_triggered") {
            t.on_triggered = f;
        }
    }

    // --- queries ---

    /// Current phase.
    pub fn phase(&self, id: TooltipId) -> Option<Phase> {
        self.slot(id).map(|t| t.fade.phase())
    }

    /// Linear fade progress in `0.0..=1.0`.
    pub fn progress(&self, id: TooltipId) -> Option<f64> {
        self.slot(id).map(|t| t.fade.progress())
    }

    /// Overlay opacity: the fade progress, `0.0` for unmounted tooltips.
    pub fn opacity(&self, id: TooltipId) -> f64 {
        self.progress(id).unwrap_or(0.0)
    }

    /// Pending delayed action and the time left before it fires.
    pub fn pending_timer(&self, id: TooltipId) -> Option<(TimerAction, Duration)> {
        self.slot(id).and_then(|t| t.timer.pending())
    }

    /// Whether a delayed action is pending.
    pub fn has_pending_timer(&self, id: TooltipId) -> bool {
        self.pending_timer(id).is_some()
    }

    /// Number of pointer devices hovering the trigger.
    pub fn hovering_count(&self, id: TooltipId) -> usize {
        self.slot(id).map_or(0, |t| t.hovering.len())
    }

    /// Registry of open tooltips.
    pub fn registry(&self) -> &OpenTooltips {
        &self.registry
    }

    /// Mounted tooltips, in slot order.
    pub fn ids(&self) -> impl Iterator<Item = TooltipId> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            s.as_ref().map(|t| {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "TooltipId uses 32-bit indices by design."
                )]
                TooltipId::new(i as u32, t.generation)
            })
        })
    }

    /// Events queued since the last [`take_events`](Self::take_events).
    pub fn events(&self) -> &[TooltipEvent] {
        &self.events
    }

    /// Drain queued events.
    pub fn take_events(&mut self) -> Vec<TooltipEvent> {
        core::mem::take(&mut self.events)
    }

    // --- visibility primitives ---

    /// Show the tooltip, now or after `delay`.
    ///
    /// Ignored while ineligible. Otherwise cancels the pending delay; a non-zero
    /// `delay` defers the show only when the tooltip is dismissed, in every other
    /// phase it fades in now. With `auto_hide_after`, a hide is scheduled when the
    /// show happens.
    pub fn request_show(
        &mut self,
        id: TooltipId,
        delay: Duration,
        auto_hide_after: Option<Duration>,
    ) {
        let Some(t) = self.live_mut(id, "request_show") else {
            return;
        };
        if !t.eligible {
            return;
        }
        t.check_timer_invariant();
        t.timer.cancel();
        if !delay.is_zero() && t.fade.phase() == Phase::Dismissed {
            #[cfg(feature = "tracing")]
            tracing::trace!(?id, ?delay, "show deferred");
            t.timer.schedule(
                delay,
                TimerAction::Show {
                    auto_hide: auto_hide_after,
                },
            );
        } else {
            self.show_now(id, auto_hide_after);
        }
    }

    /// Hide the tooltip, now or after `delay`.
    ///
    /// Cancels the pending delay. Nothing else happens when the tooltip is
    /// dismissed or already fading out, so repeated hides are idempotent.
    pub fn request_hide(&mut self, id: TooltipId, delay: Duration) {
        let Some(t) = self.live_mut(id, "request_hide") else {
            return;
        };
        t.check_timer_invariant();
        t.timer.cancel();
        match t.fade.phase() {
            Phase::Dismissed | Phase::FadingOut => {}
            Phase::FadingIn | Phase::Visible => {
                if delay.is_zero() {
                    self.drive(id, FadeAnimation::reverse);
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(?id, ?delay, "hide deferred");
                    t.timer.schedule(delay, TimerAction::Hide);
                }
            }
        }
    }

    /// Show the tooltip now, without auto-hide.
    ///
    /// Returns true if this started a show (the tooltip was dismissed or fading
    /// out), false if it was already fading in or visible, or is ineligible.
    pub fn ensure_visible(&mut self, id: TooltipId) -> bool {
        let Some(t) = self.live_mut(id, "ensure_visible") else {
            return false;
        };
        if !t.eligible {
            return false;
        }
        t.timer.cancel();
        match t.fade.phase() {
            Phase::Dismissed | Phase::FadingOut => {
                self.request_show(id, Duration::ZERO, None);
                true
            }
            Phase::FadingIn | Phase::Visible => false,
        }
    }

    /// Hide every open tooltip immediately.
    ///
    /// Returns false if none was open.
    pub fn dismiss_all(&mut self) -> bool {
        if self.registry.is_empty() {
            return false;
        }
        let open = self.registry.to_vec();
        #[cfg(feature = "tracing")]
        tracing::debug!(count = open.len(), "dismissing all tooltips");
        for id in open {
            self.request_hide(id, Duration::ZERO);
        }
        true
    }

    // --- gestures ---

    /// Tap down on the trigger. Only honored in [`TriggerMode::Tap`].
    ///
    /// The tooltip hides after the visible duration unless a pointer is
    /// hovering the trigger, in which case the hover keeps it up.
    pub fn tap_down(&mut self, id: TooltipId, pointer: DeviceId) {
        let Some(t) = self.live_mut(id, "tap_down") else {
            return;
        };
        if t.config.trigger_mode != TriggerMode::Tap || !t.eligible {
            return;
        }
        let auto_hide = t.hovering.is_empty().then_some(t.config.visible_duration);
        self.trigger(id, pointer);
        self.request_show(id, Duration::ZERO, auto_hide);
    }

    /// Long press recognized on the trigger. Only honored in [`TriggerMode::LongPress`].
    ///
    /// Shows without auto-hide; the hide is scheduled on [`long_press_up`](Self::long_press_up).
    pub fn long_press(&mut self, id: TooltipId, pointer: DeviceId) {
        let Some(t) = self.live_mut(id, "long_press") else {
            return;
        };
        if t.config.trigger_mode != TriggerMode::LongPress || !t.eligible {
            return;
        }
        self.trigger(id, pointer);
        self.request_show(id, Duration::ZERO, None);
    }

    /// Long press released. Schedules the hide after the visible duration unless
    /// a pointer is hovering the trigger.
    pub fn long_press_up(&mut self, id: TooltipId) {
        let Some(t) = self.live_mut(id, "long_press_up") else {
            return;
        };
        if t.config.trigger_mode != TriggerMode::LongPress || !t.hovering.is_empty() {
            return;
        }
        let delay = t.config.visible_duration;
        self.request_hide(id, delay);
    }

    /// A pointer device started hovering the trigger.
    ///
    /// Devices that cannot hover (touch) are ignored. Every other open tooltip
    /// that no pointer is hovering is hidden immediately; if any was, this
    /// tooltip shows without the wait delay.
    pub fn hover_enter(&mut self, id: TooltipId, device: DeviceId, kind: PointerKind) {
        let Some(t) = self.live_mut(id, "hover_enter") else {
            return;
        };
        if !kind.supports_hover() {
            return;
        }
        if !t.hovering.contains(&device) {
            t.hovering.push(device);
        }
        let wait_delay = t.config.wait_delay;

        let stale: Vec<TooltipId> = self
            .registry
            .iter()
            .filter(|&other| other != id && self.slot(other).is_some_and(|o| o.hovering.is_empty()))
            .collect();
        let preempted = !stale.is_empty();
        for other in stale {
            #[cfg(feature = "tracing")]
            tracing::debug!(?other, by = ?id, "tooltip preempted by hover");
            self.request_hide(other, Duration::ZERO);
        }

        let delay = if preempted { Duration::ZERO } else { wait_delay };
        self.request_show(id, delay, None);
    }

    /// A pointer device stopped hovering the trigger.
    ///
    /// When the last hovering device leaves, the tooltip hides after the hover
    /// exit delay. An exit from a device that is not hovering changes nothing.
    pub fn hover_exit(&mut self, id: TooltipId, device: DeviceId) {
        let Some(t) = self.live_mut(id, "hover_exit") else {
            return;
        };
        let before = t.hovering.len();
        t.hovering.retain(|d| *d != device);
        if before == 0 || !t.hovering.is_empty() {
            return;
        }
        let delay = t.config.hover_exit_delay;
        self.request_hide(id, delay);
    }

    /// Pointer down anywhere in the UI.
    ///
    /// Reserved for dismiss-on-outside-tap; it changes nothing and only reports
    /// whether `pointer` is the one whose tap or long press triggered the tooltip.
    pub fn global_pointer_down(&mut self, id: TooltipId, pointer: DeviceId) -> bool {
        let Some(t) = self.live_mut(id, "global_pointer_down") else {
            return false;
        };
        t.primary_pointer == Some(pointer)
    }

    // --- time ---

    /// Advance delays and fades of every mounted tooltip by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        let ids: Vec<TooltipId> = self.ids().collect();
        for id in ids {
            self.advance_tooltip(id, dt);
        }
    }

    // --- overlay placement ---

    /// First placement step: record the anchor (overlay coordinates) and get the
    /// off-stage offset to use until the content is measured.
    pub fn place_overlay(&mut self, id: TooltipId, anchor: Rect) -> Point {
        match self.live_mut(id, "place_overlay") {
            Some(t) => t.placement.place(anchor),
            None => OFFSTAGE_OFFSET,
        }
    }

    /// Second placement step: resolve the offset from the measured content size
    /// using the custom offset function, or the configured alignment.
    pub fn reposition_overlay(&mut self, id: TooltipId, content_size: Size) -> Point {
        let Some(t) = self.live_mut(id, "reposition_overlay") else {
            return OFFSTAGE_OFFSET;
        };
        let placement = match &t.custom_offset {
            Some(f) => Placement::Custom(f.as_ref()),
            None => Placement::Aligned(t.config.alignment),
        };
        t.placement.reposition(content_size, placement)
    }

    /// Current overlay offset; [`OFFSTAGE_OFFSET`] until both placement steps ran.
    pub fn overlay_offset(&self, id: TooltipId) -> Option<Point> {
        self.slot(id).map(|t| t.placement.offset())
    }

    // --- internals ---

    fn slot(&self, id: TooltipId) -> Option<&Tooltip> {
        let t = self.slots.get(id.idx())?.as_ref()?;
        (t.generation == id.generation()).then_some(t)
    }

    fn slot_mut(&mut self, id: TooltipId) -> Option<&mut Tooltip> {
        let t = self.slots.get_mut(id.idx())?.as_mut()?;
        if t.generation != id.generation() {
            return None;
        }
        Some(t)
    }

    /// Slot of a tooltip the caller expects to be mounted.
    ///
    /// Driving an unmounted tooltip is a programming error: it panics in debug
    /// builds and is ignored in release builds.
    fn live_mut(&mut self, id: TooltipId, op: &'static str) -> Option<&mut Tooltip> {
        let alive = self.is_alive(id);
        debug_assert!(alive, "{op} called on an unmounted tooltip {id:?}");
        #[cfg(feature = "tracing")]
        if !alive {
            tracing::warn!(?id, op, "ignored operation on an unmounted tooltip");
        }
        self.slot_mut(id)
    }

    /// Record a tap or long press: feedback (only when showing from dismissed),
    /// the triggered event, and the callback.
    fn trigger(&mut self, id: TooltipId, pointer: DeviceId) {
        let Some(t) = self.slot_mut(id) else {
            return;
        };
        t.primary_pointer = Some(pointer);
        let feedback = t.config.feedback_enabled && t.fade.phase() == Phase::Dismissed;
        if let Some(cb) = t.on_triggered.as_mut() {
            cb(id);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(?id, pointer = pointer.0, feedback, "tooltip triggered");
        if feedback {
            self.events.push(TooltipEvent::Feedback(id));
        }
        self.events.push(TooltipEvent::Triggered(id));
    }

    /// Fade in now and replace the pending delay with the optional auto-hide.
    fn show_now(&mut self, id: TooltipId, auto_hide: Option<Duration>) {
        match self.slot(id) {
            // A deferred show may fire after the tooltip became ineligible.
            Some(t) if t.eligible => {}
            _ => return,
        }
        self.drive(id, FadeAnimation::forward);
        if let Some(t) = self.slot_mut(id) {
            t.timer.cancel();
            if let Some(delay) = auto_hide {
                t.timer.schedule(delay, TimerAction::Hide);
            }
        }
    }

    fn fire(&mut self, id: TooltipId, action: TimerAction) {
        #[cfg(feature = "tracing")]
        tracing::trace!(?id, ?action, "delay fired");
        match action {
            TimerAction::Show { auto_hide } => self.show_now(id, auto_hide),
            TimerAction::Hide => self.drive(id, FadeAnimation::reverse),
        }
    }

    fn advance_tooltip(&mut self, id: TooltipId, mut dt: Duration) {
        while let Some(t) = self.slot_mut(id) {
            let step = match t.timer.remaining() {
                Some(remaining) if remaining <= dt => remaining,
                _ => dt,
            };
            let fired = t.timer.advance(step);
            self.drive(id, |fade| fade.advance(step));
            dt -= step;
            match fired {
                Some(action) => self.fire(id, action),
                None => return,
            }
        }
    }

    /// Apply `f` to the tooltip's fade and publish the resulting phase change.
    fn drive(&mut self, id: TooltipId, f: impl FnOnce(&mut FadeAnimation)) {
        let Some(t) = self.slot_mut(id) else {
            return;
        };
        let from = t.fade.phase();
        f(&mut t.fade);
        let to = t.fade.phase();
        if from == to {
            return;
        }
        match (from.is_open(), to.is_open()) {
            (false, true) => {
                t.placement.reset();
                self.registry.insert(id);
                self.events.push(TooltipEvent::OverlayShown(id));
            }
            (true, false) => {
                t.placement.reset();
                self.registry.remove(id);
                self.events.push(TooltipEvent::OverlayHidden(id));
            }
            _ => {}
        }
        self.events.push(TooltipEvent::PhaseChanged {
            tooltip: id,
            from,
            to,
        });
        #[cfg(feature = "tracing")]
        tracing::debug!(?id, ?from, ?to, open = self.registry.len(), "tooltip phase changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::Alignment;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::Cell;

    const MOUSE: DeviceId = DeviceId(1);
    const PEN: DeviceId = DeviceId(2);
    const FINGER: DeviceId = DeviceId(3);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn tap_config() -> TooltipConfig {
        TooltipConfig::default().with_trigger_mode(TriggerMode::Tap)
    }

    fn assert_registry_matches_phases(set: &Tooltips) {
        for id in set.ids() {
            let open = set.phase(id).unwrap().is_open();
            assert_eq!(set.registry().contains(id), open, "{id:?}");
        }
    }

    #[test]
    fn tap_scenario_fades_in_holds_and_fades_out() {
        let mut set = Tooltips::new();
        let id = set.mount(tap_config());
        set.tap_down(id, FINGER);
        assert_eq!(set.phase(id), Some(Phase::FadingIn));
        assert!(set.registry().contains(id));
        assert_eq!(set.pending_timer(id), Some((TimerAction::Hide, ms(1000))));

        set.tick(ms(150));
        assert_eq!(set.phase(id), Some(Phase::Visible));

        set.tick(ms(849));
        assert_eq!(set.phase(id), Some(Phase::Visible));
        set.tick(ms(1));
        assert_eq!(set.phase(id), Some(Phase::FadingOut));
        assert!(!set.has_pending_timer(id));

        set.tick(ms(75));
        assert_eq!(set.phase(id), Some(Phase::Dismissed));
        assert!(set.registry().is_empty());

        assert_eq!(
            set.take_events(),
            vec![
                TooltipEvent::Feedback(id),
                TooltipEvent::Triggered(id),
                TooltipEvent::OverlayShown(id),
                TooltipEvent::PhaseChanged {
                    tooltip: id,
                    from: Phase::Dismissed,
                    to: Phase::FadingIn
                },
                TooltipEvent::PhaseChanged {
                    tooltip: id,
                    from: Phase::FadingIn,
                    to: Phase::Visible
                },
                TooltipEvent::PhaseChanged {
                    tooltip: id,
                    from: Phase::Visible,
                    to: Phase::FadingOut
                },
                TooltipEvent::OverlayHidden(id),
                TooltipEvent::PhaseChanged {
                    tooltip: id,
                    from: Phase::FadingOut,
                    to: Phase::Dismissed
                },
            ]
        );
    }

    #[test]
    fn timer_firing_mid_tick_continues_the_fade() {
        let mut set = Tooltips::new();
        let id = set.mount(tap_config());
        set.tap_down(id, FINGER);
        // One long tick covers fade in, the visible duration, and part of the fade out.
        set.tick(ms(1000) + ms(30));
        assert_eq!(set.phase(id), Some(Phase::FadingOut));
        let p = set.progress(id).unwrap();
        assert!((p - (1.0 - 30.0 / 75.0)).abs() < 1e-9, "progress {p}");
        assert_eq!(set.opacity(id), p);
    }

    #[test]
    fn feedback_only_when_showing_from_dismissed() {
        let mut set = Tooltips::new();
        let id = set.mount(tap_config());
        set.tap_down(id, FINGER);
        set.tick(ms(10));
        let _ = set.take_events();
        set.tap_down(id, FINGER);
        assert_eq!(set.take_events(), vec![TooltipEvent::Triggered(id)]);

        let quiet = set.mount(tap_config().with_feedback(false));
        set.tap_down(quiet, FINGER);
        assert!(!set.take_events().contains(&TooltipEvent::Feedback(quiet)));
    }

    #[test]
    fn second_tap_restarts_auto_hide() {
        let mut set = Tooltips::new();
        let id = set.mount(tap_config());
        set.tap_down(id, FINGER);
        set.tick(ms(600));
        set.tap_down(id, FINGER);
        assert_eq!(set.pending_timer(id), Some((TimerAction::Hide, ms(1000))));
        set.tick(ms(600));
        assert_eq!(set.phase(id), Some(Phase::Visible));
    }

    #[test]
    fn tap_while_hovering_does_not_auto_hide() {
        let mut set = Tooltips::new();
        let id = set.mount(tap_config());
        set.hover_enter(id, MOUSE, PointerKind::Mouse);
        set.tap_down(id, MOUSE);
        assert!(!set.has_pending_timer(id));
        set.tick(Duration::from_secs(5));
        assert_eq!(set.phase(id), Some(Phase::Visible));
    }

    #[test]
    fn gestures_respect_trigger_mode() {
        let mut set = Tooltips::new();
        let tap = set.mount(tap_config());
        let long = set.mount(TooltipConfig::default());
        let manual = set.mount(TooltipConfig::default().with_trigger_mode(TriggerMode::Manual));

        set.long_press(tap, FINGER);
        set.tap_down(long, FINGER);
        set.tap_down(manual, FINGER);
        set.long_press(manual, FINGER);
        for id in [tap, long, manual] {
            assert_eq!(set.phase(id), Some(Phase::Dismissed));
        }
        assert!(set.events().is_empty());

        assert!(set.ensure_visible(manual));
        assert_eq!(set.phase(manual), Some(Phase::FadingIn));
    }

    #[test]
    fn long_press_shows_until_release_then_hides_after_visible_duration() {
        let mut set = Tooltips::new();
        let id = set.mount(TooltipConfig::default());
        set.long_press(id, FINGER);
        assert_eq!(set.phase(id), Some(Phase::FadingIn));
        assert!(!set.has_pending_timer(id));
        set.tick(Duration::from_secs(3));
        assert_eq!(set.phase(id), Some(Phase::Visible));

        set.long_press_up(id);
        assert_eq!(set.pending_timer(id), Some((TimerAction::Hide, ms(1000))));
        set.tick(ms(1000));
        assert_eq!(set.phase(id), Some(Phase::FadingOut));
    }

    #[test]
    fn long_press_release_while_hovering_keeps_tooltip() {
        let mut set = Tooltips::new();
        let id = set.mount(TooltipConfig::default());
        set.hover_enter(id, PEN, PointerKind::Stylus);
        set.long_press(id, PEN);
        set.long_press_up(id);
        assert!(!set.has_pending_timer(id));
    }

    #[test]
    fn triggered_callback_fires_on_gestures() {
        let mut set = Tooltips::new();
        let id = set.mount(tap_config());
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        set.set_on_triggered(id, Some(Box::new(move |_| seen.set(seen.get() + 1))));
        set.tap_down(id, FINGER);
        set.tap_down(id, FINGER);
        assert_eq!(count.get(), 2);
        set.hover_enter(id, MOUSE, PointerKind::Mouse);
        assert_eq!(count.get(), 2, "hover is not a trigger");
    }

    #[test]
    fn hover_shows_after_wait_delay_and_hides_after_exit_delay() {
        let mut set = Tooltips::new();
        let id = set.mount(TooltipConfig::default().with_wait_delay(ms(500)));
        set.hover_enter(id, MOUSE, PointerKind::Mouse);
        assert_eq!(set.phase(id), Some(Phase::Dismissed));
        assert_eq!(
            set.pending_timer(id),
            Some((TimerAction::Show { auto_hide: None }, ms(500)))
        );
        set.tick(ms(500));
        assert_eq!(set.phase(id), Some(Phase::FadingIn));
        set.tick(ms(150));

        set.hover_exit(id, MOUSE);
        assert_eq!(set.pending_timer(id), Some((TimerAction::Hide, ms(200))));
        set.tick(ms(199));
        assert_eq!(set.phase(id), Some(Phase::Visible));
        set.tick(ms(1));
        assert_eq!(set.phase(id), Some(Phase::FadingOut));
    }

    #[test]
    fn hover_exit_before_wait_delay_cancels_show() {
        let mut set = Tooltips::new();
        let id = set.mount(TooltipConfig::default().with_wait_delay(ms(500)));
        set.hover_enter(id, MOUSE, PointerKind::Mouse);
        set.hover_exit(id, MOUSE);
        // Dismissed: the hide is a no-op but the deferred show was cancelled.
        assert!(!set.has_pending_timer(id));
        set.tick(Duration::from_secs(1));
        assert_eq!(set.phase(id), Some(Phase::Dismissed));
    }

    #[test]
    fn hover_is_sustained_by_any_remaining_device() {
        let mut set = Tooltips::new();
        let id = set.mount(TooltipConfig::default());
        set.hover_enter(id, MOUSE, PointerKind::Mouse);
        set.hover_enter(id, PEN, PointerKind::Stylus);
        set.hover_enter(id, MOUSE, PointerKind::Mouse);
        assert_eq!(set.hovering_count(id), 2);
        set.tick(ms(150));
        set.hover_exit(id, MOUSE);
        assert!(!set.has_pending_timer(id));
        set.hover_exit(id, PEN);
        assert!(set.has_pending_timer(id));
        // A stray exit with nobody hovering changes nothing.
        set.hover_exit(id, PEN);
        assert_eq!(set.pending_timer(id), Some((TimerAction::Hide, ms(200))));
    }

    #[test]
    fn stray_exit_does_not_hide_a_gesture_shown_tooltip() {
        let mut set = Tooltips::new();
        let id = set.mount(TooltipConfig::default());
        set.hover_enter(id, FINGER, PointerKind::Touch);
        set.long_press(id, FINGER);
        set.tick(ms(150));
        set.hover_exit(id, FINGER);
        assert!(!set.has_pending_timer(id), "touch never entered, so its exit is ignored");
        set.tick(Duration::from_secs(5));
        assert_eq!(set.phase(id), Some(Phase::Visible));
    }

    #[test]
    fn touch_never_hovers() {
        let mut set = Tooltips::new();
        let id = set.mount(TooltipConfig::default());
        set.hover_enter(id, FINGER, PointerKind::Touch);
        assert_eq!(set.hovering_count(id), 0);
        assert_eq!(set.phase(id), Some(Phase::Dismissed));
    }

    #[test]
    fn hover_preempts_only_tooltips_nobody_hovers() {
        let mut set = Tooltips::new();
        let config = TooltipConfig::default().with_wait_delay(ms(300));
        let first = set.mount(config.clone());
        let second = set.mount(config.clone());
        let third = set.mount(config);

        // `first` is open from a long press, nobody hovers it.
        set.long_press(first, FINGER);
        set.tick(ms(150));
        // `second` is hovered by the pen and open.
        set.hover_enter(second, PEN, PointerKind::Stylus);
        assert_eq!(set.phase(first), Some(Phase::FadingOut), "preempted");
        assert_eq!(set.phase(second), Some(Phase::FadingIn), "shown without wait delay");
        set.tick(ms(150));

        // The mouse enters `third`: `second` is still hovered by the pen and stays.
        set.hover_enter(third, MOUSE, PointerKind::Mouse);
        assert_eq!(set.phase(second), Some(Phase::Visible));
        assert_eq!(set.phase(first), Some(Phase::Dismissed));
        assert_eq!(
            set.pending_timer(third),
            Some((TimerAction::Show { auto_hide: None }, ms(300))),
            "nothing preempted, so the wait delay applies"
        );
        assert_registry_matches_phases(&set);
    }

    #[test]
    fn hide_is_idempotent() {
        let mut set = Tooltips::new();
        let id = set.mount(TooltipConfig::default());
        set.ensure_visible(id);
        set.tick(ms(150));
        set.request_hide(id, Duration::ZERO);
        let once = (set.phase(id), set.progress(id), set.pending_timer(id));
        set.request_hide(id, Duration::ZERO);
        assert_eq!((set.phase(id), set.progress(id), set.pending_timer(id)), once);

        set.request_hide(id, ms(100));
        assert!(!set.has_pending_timer(id), "no timer while fading out");
    }

    #[test]
    fn ensure_visible_reports_whether_it_showed() {
        let mut set = Tooltips::new();
        let id = set.mount(TooltipConfig::default());
        assert!(set.ensure_visible(id));
        assert!(!set.ensure_visible(id), "fading in already");
        set.tick(ms(150));
        assert!(!set.ensure_visible(id));
        assert_eq!(set.phase(id), Some(Phase::Visible));

        set.request_hide(id, Duration::ZERO);
        set.tick(ms(30));
        assert!(set.ensure_visible(id), "reverses a fade out");
        assert_eq!(set.phase(id), Some(Phase::FadingIn));
        assert!(!set.has_pending_timer(id));
    }

    #[test]
    fn ensure_visible_cancels_pending_hide() {
        let mut set = Tooltips::new();
        let id = set.mount(tap_config());
        set.tap_down(id, FINGER);
        set.tick(ms(150));
        assert!(!set.ensure_visible(id));
        assert!(!set.has_pending_timer(id));
        set.tick(Duration::from_secs(5));
        assert_eq!(set.phase(id), Some(Phase::Visible));
    }

    #[test]
    fn ineligible_tooltip_ignores_show_requests() {
        let mut set = Tooltips::new();
        let id = set.mount(tap_config().with_wait_delay(ms(100)));
        set.set_eligible(id, false);
        assert!(!set.ensure_visible(id));
        set.tap_down(id, FINGER);
        set.request_show(id, Duration::ZERO, None);
        set.hover_enter(id, MOUSE, PointerKind::Mouse);
        set.tick(Duration::from_secs(1));
        assert_eq!(set.phase(id), Some(Phase::Dismissed));
        assert!(set.events().is_empty());
        assert!(set.is_alive(id), "not torn down");
    }

    #[test]
    fn deferred_show_rechecks_eligibility() {
        let mut set = Tooltips::new();
        let id = set.mount(TooltipConfig::default().with_wait_delay(ms(100)));
        set.hover_enter(id, MOUSE, PointerKind::Mouse);
        set.set_eligible(id, false);
        set.tick(ms(100));
        assert_eq!(set.phase(id), Some(Phase::Dismissed));
        set.set_eligible(id, true);
        assert!(set.is_eligible(id));
    }

    #[test]
    fn show_with_delay_while_open_shows_now() {
        let mut set = Tooltips::new();
        let id = set.mount(TooltipConfig::default());
        set.ensure_visible(id);
        set.tick(ms(150));
        set.request_hide(id, Duration::ZERO);
        set.tick(ms(30));
        assert_eq!(set.phase(id), Some(Phase::FadingOut));
        set.request_show(id, ms(500), Some(ms(50)));
        assert_eq!(set.phase(id), Some(Phase::FadingIn), "reverses without waiting");
        let p = set.progress(id).unwrap();
        assert!((p - 0.6).abs() < 1e-9, "resumes from current progress, got {p}");
        assert_eq!(set.pending_timer(id), Some((TimerAction::Hide, ms(50))));
    }

    #[test]
    fn deferred_show_schedules_auto_hide_when_it_fires() {
        let mut set = Tooltips::new();
        let id = set.mount(TooltipConfig::default());
        set.request_show(id, ms(100), Some(ms(400)));
        set.tick(ms(100));
        assert_eq!(set.phase(id), Some(Phase::FadingIn));
        assert_eq!(set.pending_timer(id), Some((TimerAction::Hide, ms(400))));
    }

    #[test]
    fn dismiss_all_hides_every_open_tooltip() {
        let mut set = Tooltips::new();
        assert!(!set.dismiss_all());
        let a = set.mount(TooltipConfig::default());
        let b = set.mount(TooltipConfig::default());
        let c = set.mount(TooltipConfig::default());
        // Hover `b` before `a` opens so the hover does not preempt `a`.
        set.hover_enter(b, MOUSE, PointerKind::Mouse);
        set.ensure_visible(a);
        set.tick(ms(30));
        assert_eq!(set.phase(a), Some(Phase::FadingIn));
        assert_eq!(set.phase(b), Some(Phase::FadingIn));
        assert!(set.dismiss_all());
        assert_eq!(set.phase(a), Some(Phase::FadingOut));
        assert_eq!(set.phase(b), Some(Phase::FadingOut), "hover does not protect");
        assert_eq!(set.phase(c), Some(Phase::Dismissed));
        set.tick(ms(75));
        assert!(set.registry().is_empty());
        assert!(!set.dismiss_all());
    }

    #[test]
    fn unmount_cancels_timer_and_leaves_registry() {
        let mut set = Tooltips::new();
        let id = set.mount(tap_config());
        set.tap_down(id, FINGER);
        let _ = set.take_events();
        set.unmount(id);
        assert!(!set.is_alive(id));
        assert!(set.registry().is_empty());
        assert_eq!(set.take_events(), vec![TooltipEvent::OverlayHidden(id)]);
        set.tick(Duration::from_secs(2));
        assert!(set.events().is_empty(), "nothing fires after unmount");
        set.unmount(id);

        // Slot reuse produces a distinct id.
        let next = set.mount(tap_config());
        assert_ne!(next, id);
        assert_eq!(set.phase(id), None);
        assert_eq!(set.phase(next), Some(Phase::Dismissed));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unmounted tooltip")]
    fn driving_an_unmounted_tooltip_panics_in_debug() {
        let mut set = Tooltips::new();
        let id = set.mount(TooltipConfig::default());
        set.unmount(id);
        set.ensure_visible(id);
    }

    #[test]
    fn global_pointer_down_only_checks_identity() {
        let mut set = Tooltips::new();
        let id = set.mount(tap_config());
        assert!(!set.global_pointer_down(id, FINGER));
        set.tap_down(id, FINGER);
        set.tick(ms(150));
        let _ = set.take_events();
        assert!(set.global_pointer_down(id, FINGER));
        assert!(!set.global_pointer_down(id, MOUSE));
        assert_eq!(set.phase(id), Some(Phase::Visible), "inert");
        assert!(set.events().is_empty());
    }

    #[test]
    fn overlay_is_placed_in_two_steps() {
        let mut set = Tooltips::new();
        let id = set.mount(TooltipConfig::default());
        set.ensure_visible(id);
        let anchor = Rect::new(80.0, 80.0, 120.0, 120.0);
        assert_eq!(set.place_overlay(id, anchor), OFFSTAGE_OFFSET);
        assert_eq!(set.overlay_offset(id), Some(OFFSTAGE_OFFSET));
        let content = Size::new(20.0, 10.0);
        assert_eq!(set.reposition_overlay(id, content), Point::new(120.0, 80.0));

        set.set_custom_offset(
            id,
            Some(Box::new(|center: Point, _anchor: Size, content: Size| {
                Point::new(center.x - content.width / 2.0, 0.0)
            })),
        );
        assert_eq!(set.reposition_overlay(id, content), Point::new(90.0, 0.0));

        // Hiding resets placement; the next show starts off stage again.
        set.request_hide(id, Duration::ZERO);
        set.tick(ms(75));
        assert_eq!(set.overlay_offset(id), Some(OFFSTAGE_OFFSET));
    }

    #[test]
    fn alignment_comes_from_config() {
        let mut set = Tooltips::new();
        let id = set.mount(TooltipConfig::default().with_alignment(Alignment::BottomCenter));
        set.ensure_visible(id);
        set.place_overlay(id, Rect::new(80.0, 80.0, 120.0, 120.0));
        assert_eq!(
            set.reposition_overlay(id, Size::new(20.0, 10.0)),
            Point::new(90.0, 120.0)
        );
    }

    #[test]
    fn zero_fades_jump_between_dismissed_and_visible() {
        let mut set = Tooltips::new();
        let id = set.mount(tap_config().with_fade(Duration::ZERO, Duration::ZERO));
        set.tap_down(id, FINGER);
        assert_eq!(set.phase(id), Some(Phase::Visible));
        set.tick(ms(1000));
        assert_eq!(set.phase(id), Some(Phase::Dismissed));
        assert!(set.registry().is_empty());
    }
}
