//! Hover Intent Controller
//!
//! Decides when a tooltip becomes visible from pointer enter/leave events on
//! two regions: the trigger and the tooltip (popover) itself.
//!
//! The controller does no waiting of its own. Every event handler returns a
//! [`Transition`] telling the host which timer to arm (if any), and the host
//! reports back through [`HoverIntentController::fire`] once the delay has
//! elapsed. Only one timer is ever pending: scheduling always cancels the
//! previous timer first, so the most recent event wins.

use std::time::Duration;

use crate::constants::{HIDE_DELAY_MS, POPOVER_HIDE_DELAY_MS, SHOW_DELAY_MS};
use crate::domain::config::HoverConfig;

/// Delays used by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverDelays {
    /// Dwell on the trigger before showing
    pub show: Duration,
    /// Grace period after leaving the trigger
    pub hide: Duration,
    /// Delay after leaving an interactive popover
    pub popover_hide: Duration,
}

impl Default for HoverDelays {
    fn default() -> Self {
        Self {
            show: Duration::from_millis(SHOW_DELAY_MS),
            hide: Duration::from_millis(HIDE_DELAY_MS),
            popover_hide: Duration::from_millis(POPOVER_HIDE_DELAY_MS),
        }
    }
}

impl From<&HoverConfig> for HoverDelays {
    fn from(config: &HoverConfig) -> Self {
        Self {
            show: Duration::from_millis(config.show_delay_ms),
            hide: Duration::from_millis(config.hide_delay_ms),
            popover_hide: Duration::from_millis(config.popover_hide_delay_ms),
        }
    }
}

/// Identifier of a scheduled timer, unique per controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// What happens when a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Set `visible = true`
    Show,
    /// Set `visible = false`
    Hide,
}

impl TimerAction {
    fn target_visibility(self) -> bool {
        matches!(self, TimerAction::Show)
    }
}

/// A scheduled callback issued by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: TimerId,
    pub action: TimerAction,
    pub delay: Duration,
}

/// The controller's single timer slot
///
/// The slot keeps the last issued handle after it fires or is cancelled.
/// Leave events are only honoured while a handle is held, so a leave that
/// was never preceded by an enter is ignored, while a leave after the
/// tooltip has already appeared still hides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimerSlot {
    timer: PendingTimer,
    armed: bool,
}

/// Result of feeding one pointer event into the controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transition {
    /// Timer the host must arm, replacing anything armed before
    pub scheduled: Option<PendingTimer>,
    /// A timer that was still armed got cancelled
    pub cancelled: bool,
    /// `visible` changed synchronously during this event
    pub visibility_changed: bool,
}

impl Transition {
    /// The event was ignored
    pub fn is_noop(&self) -> bool {
        self.scheduled.is_none() && !self.cancelled && !self.visibility_changed
    }
}

/// Hover-intent state machine for one trigger/popover pair
#[derive(Debug)]
pub struct HoverIntentController {
    visible: bool,
    slot: Option<TimerSlot>,
    interactive: bool,
    delays: HoverDelays,
    next_id: u64,
}

impl HoverIntentController {
    /// Create a controller with the default delays
    pub fn new(interactive: bool) -> Self {
        Self::with_delays(interactive, HoverDelays::default())
    }

    /// Create a controller with custom delays
    pub fn with_delays(interactive: bool, delays: HoverDelays) -> Self {
        Self {
            visible: false,
            slot: None,
            interactive,
            delays,
            next_id: 0,
        }
    }

    /// Create a controller from a loaded configuration
    pub fn from_config(config: &HoverConfig) -> Self {
        Self::with_delays(config.interactive, HoverDelays::from(config))
    }

    /// Whether the popover is currently displayed
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// The timer that is armed and has not fired yet
    pub fn pending(&self) -> Option<PendingTimer> {
        self.slot.filter(|slot| slot.armed).map(|slot| slot.timer)
    }

    pub fn is_pending(&self) -> bool {
        self.pending().is_some()
    }

    /// Whether a timer handle is held, armed or spent
    pub fn has_timer(&self) -> bool {
        self.slot.is_some()
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn delays(&self) -> HoverDelays {
        self.delays
    }

    /// Pointer entered the trigger: restart the show timer
    pub fn on_trigger_enter(&mut self) -> Transition {
        let cancelled = self.cancel();
        let scheduled = self.schedule(TimerAction::Show, self.delays.show);
        Transition {
            scheduled: Some(scheduled),
            cancelled,
            visibility_changed: false,
        }
    }

    /// Pointer left the trigger: start the hide grace period
    pub fn on_trigger_leave(&mut self) -> Transition {
        if !self.has_timer() {
            tracing::trace!("trigger leave ignored, no timer handle");
            return Transition::default();
        }
        let cancelled = self.cancel();
        let scheduled = self.schedule(TimerAction::Hide, self.delays.hide);
        Transition {
            scheduled: Some(scheduled),
            cancelled,
            visibility_changed: false,
        }
    }

    /// Pointer entered the popover: keep it open
    pub fn on_popover_enter(&mut self) -> Transition {
        if !self.interactive || !self.has_timer() {
            return Transition::default();
        }
        let cancelled = self.cancel();
        let visibility_changed = self.set_visible(true);
        Transition {
            scheduled: None,
            cancelled,
            visibility_changed,
        }
    }

    /// Pointer left the popover: hide on the next tick
    pub fn on_popover_leave(&mut self) -> Transition {
        if !self.interactive || !self.has_timer() {
            return Transition::default();
        }
        let cancelled = self.cancel();
        let scheduled = self.schedule(TimerAction::Hide, self.delays.popover_hide);
        Transition {
            scheduled: Some(scheduled),
            cancelled,
            visibility_changed: false,
        }
    }

    /// A timer armed by the host has elapsed
    ///
    /// Only the armed timer takes effect; cancelled or already-fired ids
    /// are ignored. Returns whether `visible` changed.
    pub fn fire(&mut self, id: TimerId) -> bool {
        let action = match self.slot.as_mut() {
            Some(slot) if slot.armed && slot.timer.id == id => {
                slot.armed = false;
                slot.timer.action
            }
            _ => {
                tracing::trace!(?id, "stale timer ignored");
                return false;
            }
        };
        self.set_visible(action.target_visibility())
    }

    /// Cancel any pending timer and release the handle before the owner goes away
    pub fn dispose(&mut self) {
        if self.cancel() {
            tracing::debug!("pending hover timer cancelled on dispose");
        }
        self.slot = None;
    }

    fn schedule(&mut self, action: TimerAction, delay: Duration) -> PendingTimer {
        self.next_id += 1;
        let timer = PendingTimer {
            id: TimerId(self.next_id),
            action,
            delay,
        };
        tracing::debug!(?action, delay_ms = delay.as_millis() as u64, "hover timer scheduled");
        self.slot = Some(TimerSlot { timer, armed: true });
        timer
    }

    /// Disarm the slot, keeping the handle. Returns whether a live timer was cancelled.
    fn cancel(&mut self) -> bool {
        match self.slot.as_mut() {
            Some(slot) if slot.armed => {
                slot.armed = false;
                true
            }
            _ => false,
        }
    }

    fn set_visible(&mut self, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        tracing::debug!(visible, "tooltip visibility changed");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drives a controller against virtual time the way a UI host would
    struct Harness {
        controller: HoverIntentController,
        now_ms: u64,
        armed: Option<(TimerId, u64)>,
        shown_count: usize,
        visibility_log: Vec<(u64, bool)>,
    }

    impl Harness {
        fn new(interactive: bool) -> Self {
            Self {
                controller: HoverIntentController::new(interactive),
                now_ms: 0,
                armed: None,
                shown_count: 0,
                visibility_log: Vec::new(),
            }
        }

        fn apply(&mut self, transition: Transition) {
            if transition.cancelled {
                self.armed = None;
            }
            if let Some(timer) = transition.scheduled {
                self.armed = Some((timer.id, self.now_ms + timer.delay.as_millis() as u64));
            }
            if transition.visibility_changed {
                self.record();
            }
        }

        fn record(&mut self) {
            let visible = self.controller.visible();
            if visible {
                self.shown_count += 1;
            }
            self.visibility_log.push((self.now_ms, visible));
        }

        fn trigger_enter(&mut self) {
            let t = self.controller.on_trigger_enter();
            self.apply(t);
        }

        fn trigger_leave(&mut self) {
            let t = self.controller.on_trigger_leave();
            self.apply(t);
        }

        fn popover_enter(&mut self) {
            let t = self.controller.on_popover_enter();
            self.apply(t);
        }

        fn popover_leave(&mut self) {
            let t = self.controller.on_popover_leave();
            self.apply(t);
        }

        fn advance(&mut self, ms: u64) {
            let target = self.now_ms + ms;
            if let Some((id, deadline)) = self.armed {
                if deadline <= target {
                    self.now_ms = deadline;
                    self.armed = None;
                    if self.controller.fire(id) {
                        self.record();
                    }
                }
            }
            self.now_ms = target;
        }
    }

    #[test]
    fn test_initial_state() {
        let controller = HoverIntentController::new(false);
        assert!(!controller.visible());
        assert!(!controller.is_pending());
        assert!(!controller.has_timer());
        assert_eq!(controller.delays(), HoverDelays::default());
    }

    #[test]
    fn test_show_after_dwell() {
        let mut h = Harness::new(false);
        h.trigger_enter();
        h.advance(499);
        assert!(!h.controller.visible());
        h.advance(1);
        assert!(h.controller.visible());
        h.advance(5_000);
        assert_eq!(h.shown_count, 1);
        assert!(!h.controller.is_pending());
    }

    #[test]
    fn test_quick_pass_never_shows() {
        let mut h = Harness::new(false);
        h.trigger_enter();
        h.advance(200);
        h.trigger_leave();
        let pending = h.controller.pending().expect("hide timer");
        assert_eq!(pending.action, TimerAction::Hide);
        assert_eq!(pending.delay, Duration::from_millis(300));
        h.advance(1_000);
        assert_eq!(h.shown_count, 0);
        assert!(!h.controller.visible());
        assert!(!h.controller.is_pending());
    }

    #[test]
    fn test_hide_after_grace_period() {
        let mut h = Harness::new(false);
        h.trigger_enter();
        h.advance(600);
        h.trigger_leave();
        h.advance(299);
        assert!(h.controller.visible());
        h.advance(1);
        assert!(!h.controller.visible());
        assert_eq!(h.visibility_log, vec![(500, true), (900, false)]);
    }

    #[test]
    fn test_leave_without_enter_is_ignored() {
        let mut controller = HoverIntentController::new(true);
        assert!(controller.on_trigger_leave().is_noop());
        assert!(controller.on_popover_enter().is_noop());
        assert!(controller.on_popover_leave().is_noop());
        assert!(!controller.has_timer());
        assert!(!controller.visible());
    }

    #[test]
    fn test_leave_after_fired_timer_reports_no_cancel() {
        let mut controller = HoverIntentController::new(false);
        let id = controller.on_trigger_enter().scheduled.expect("show").id;
        assert!(controller.fire(id));
        let transition = controller.on_trigger_leave();
        assert!(!transition.cancelled);
        assert_eq!(
            transition.scheduled.map(|timer| timer.action),
            Some(TimerAction::Hide)
        );
    }

    #[test]
    fn test_reenter_restarts_show_delay() {
        let mut h = Harness::new(false);
        h.trigger_enter();
        h.advance(400);
        h.trigger_enter();
        h.advance(400);
        assert!(!h.controller.visible());
        h.advance(100);
        assert!(h.controller.visible());
        assert_eq!(h.shown_count, 1);
    }

    #[test]
    fn test_reenter_during_hide_keeps_visible() {
        let mut h = Harness::new(false);
        h.trigger_enter();
        h.advance(600);
        h.trigger_leave();
        h.advance(100);
        h.trigger_enter();
        h.advance(1_000);
        assert!(h.controller.visible());
        assert_eq!(h.visibility_log, vec![(500, true)]);
    }

    #[test]
    fn test_non_interactive_ignores_popover() {
        let mut controller = HoverIntentController::new(false);
        let scheduled = controller.on_trigger_enter().scheduled;
        let before = controller.pending();
        assert_eq!(scheduled, before);

        assert!(controller.on_popover_enter().is_noop());
        assert_eq!(controller.pending(), before);
        assert!(!controller.visible());

        assert!(controller.on_popover_leave().is_noop());
        assert_eq!(controller.pending(), before);
        assert!(!controller.visible());
    }

    #[test]
    fn test_interactive_popover_enter_then_leave() {
        let mut h = Harness::new(true);
        h.trigger_enter();
        h.advance(100);
        h.popover_enter();
        assert!(h.controller.visible());
        assert!(!h.controller.is_pending());
        assert_eq!(h.visibility_log, vec![(100, true)]);

        h.advance(1_000);
        assert!(h.controller.visible());

        h.popover_leave();
        let pending = h.controller.pending().expect("hide timer");
        assert_eq!(pending.action, TimerAction::Hide);
        assert_eq!(pending.delay, Duration::ZERO);
        h.advance(0);
        assert!(!h.controller.visible());
        assert_eq!(h.visibility_log, vec![(100, true), (1_100, false)]);
    }

    #[test]
    fn test_interactive_move_from_trigger_to_popover() {
        let mut h = Harness::new(true);
        h.trigger_enter();
        h.advance(600);
        h.trigger_leave();
        h.advance(50);
        h.popover_enter();
        h.advance(1_000);
        assert!(h.controller.visible());
        assert_eq!(h.visibility_log, vec![(500, true)]);

        h.popover_leave();
        h.advance(0);
        assert!(!h.controller.visible());
    }

    #[test]
    fn test_popover_enter_when_already_visible_reports_no_change() {
        let mut controller = HoverIntentController::new(true);
        let id = controller.on_trigger_enter().scheduled.expect("show").id;
        assert!(controller.fire(id));
        controller.on_trigger_leave();
        let transition = controller.on_popover_enter();
        assert!(transition.cancelled);
        assert!(!transition.visibility_changed);
        assert!(controller.visible());
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut controller = HoverIntentController::new(false);
        let first = controller.on_trigger_enter().scheduled.expect("show").id;
        let second = controller.on_trigger_leave().scheduled.expect("hide").id;
        assert_ne!(first, second);

        assert!(!controller.fire(first));
        assert!(!controller.visible());
        assert!(controller.is_pending());

        assert!(!controller.fire(second));
        assert!(!controller.is_pending());
        assert!(!controller.fire(second));
    }

    #[test]
    fn test_dispose_cancels_pending_timer() {
        let mut controller = HoverIntentController::new(true);
        let id = controller.on_trigger_enter().scheduled.expect("show").id;
        controller.dispose();
        assert!(!controller.is_pending());
        assert!(!controller.has_timer());
        assert!(!controller.fire(id));
        assert!(!controller.visible());
        assert!(controller.on_trigger_leave().is_noop());
        assert!(controller.on_popover_enter().is_noop());
    }

    #[test]
    fn test_custom_delays_from_config() {
        let config = HoverConfig {
            interactive: true,
            show_delay_ms: 100,
            hide_delay_ms: 50,
            popover_hide_delay_ms: 10,
        };
        let mut controller = HoverIntentController::from_config(&config);
        assert!(controller.is_interactive());
        let show = controller.on_trigger_enter().scheduled.expect("show");
        assert_eq!(show.delay, Duration::from_millis(100));
        let hide = controller.on_trigger_leave().scheduled.expect("hide");
        assert_eq!(hide.delay, Duration::from_millis(50));
        let popover_hide = controller.on_popover_leave().scheduled.expect("hide");
        assert_eq!(popover_hide.delay, Duration::from_millis(10));
    }

    #[test]
    fn test_single_pending_timer_over_event_sequences() {
        // xorshift walk over every event kind
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        for interactive in [false, true] {
            let mut h = Harness::new(interactive);
            for _ in 0..2_000 {
                seed ^= seed << 13;
                seed ^= seed >> 7;
                seed ^= seed << 17;
                match seed % 5 {
                    0 => h.trigger_enter(),
                    1 => h.trigger_leave(),
                    2 => h.popover_enter(),
                    3 => h.popover_leave(),
                    _ => h.advance(seed % 700),
                }

                // The host's armed timer always mirrors the controller's slot.
                let armed = h.armed.map(|(id, _)| id);
                let pending = h.controller.pending().map(|timer| timer.id);
                assert_eq!(armed, pending);
            }
        }
    }
}
