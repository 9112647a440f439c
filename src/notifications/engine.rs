// SPDX-License-Identifier: MPL-2.0
//! Per-toast lifecycle state machine.
//!
//! A [`ToastEngine`] owns the countdown of exactly one toast. It knows nothing
//! about other toasts or about wall-clock time: its owner feeds it time deltas
//! through [`ToastEngine::tick`] and hover/close inputs, and it reports the
//! transitions that result.
//!
//! ```text
//! Visible ──(elapsed >= duration, not hovered)──▶ Closing ──(300 ms)──▶ Removed
//!    └──────────────(request_close)──────────────────▲
//! ```
//!
//! Time is tracked as "elapsed banked before the current run" plus "clock
//! position the current run started at". Hovering closes the current run and
//! banks it; unhovering opens a new run. The expiry deadline is therefore
//! always `run start + (duration - banked)`, i.e. only the *remaining* time
//! has to pass after a hover ends.

use crate::domain::toast::{Progress, ToastDuration, CLOSE_GRACE};
use std::fmt;
use std::time::Duration;

/// Lifecycle stage of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Shown and (unless hovered or persistent) counting down.
    Visible,
    /// Fading out; removal follows after [`CLOSE_GRACE`].
    Closing,
    /// Terminal. The owner has been signalled.
    Removed,
}

/// Why a toast left the Visible phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// Non-hovered elapsed time reached the duration.
    Expired,
    /// The user (or caller) asked for the toast to close.
    Requested,
}

/// A phase change reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Closing(CloseReason),
    Removed,
}

/// Callback fired exactly once when the engine reaches [`Phase::Removed`].
///
/// The `Send` bound lets a manager move onto a
/// [`ToastDriver`](super::ToastDriver) task. Single-threaded observers holding
/// `Rc` state should watch for [`ToastEventKind::Removed`](super::ToastEventKind)
/// in [`Manager::drain_events`](super::Manager::drain_events) instead.
pub type RemovedCallback = Box<dyn FnOnce() + Send>;

/// Countdown and close sequencing for a single toast.
pub struct ToastEngine {
    duration: ToastDuration,
    /// Engine-local monotonic clock, advanced by every tick.
    clock: Duration,
    /// Non-hovered visible time accumulated by finished runs.
    banked: Duration,
    /// Clock position the current counting run started at.
    running_since: Option<Duration>,
    hovered: bool,
    phase: Phase,
    closing_since: Option<Duration>,
    on_removed: Option<RemovedCallback>,
}

impl ToastEngine {
    /// Creates an engine in the Visible phase with nothing elapsed.
    #[must_use]
    pub fn new(duration: ToastDuration) -> Self {
        Self {
            duration,
            clock: Duration::ZERO,
            banked: Duration::ZERO,
            running_since: Some(Duration::ZERO),
            hovered: false,
            phase: Phase::Visible,
            closing_since: None,
            on_removed: None,
        }
    }

    /// Registers the callback fired on reaching [`Phase::Removed`].
    ///
    /// Replaces any previously registered callback. Has no effect once the
    /// engine is already Removed.
    pub fn set_on_removed(&mut self, callback: impl FnOnce() + Send + 'static) {
        if self.phase != Phase::Removed {
            self.on_removed = Some(Box::new(callback));
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.phase == Phase::Removed
    }

    /// Position of the engine's own clock (total time fed through `tick`).
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Visible, non-hovered time accumulated so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match self.running_since {
            Some(start) => self.banked + self.clock.saturating_sub(start),
            None => self.banked,
        }
    }

    /// Countdown time still left, or `None` for persistent toasts.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.duration
            .countdown()
            .map(|total| total.saturating_sub(self.elapsed()))
    }

    /// Remaining fraction of the countdown, for rendering a progress bar.
    ///
    /// `None` when the toast never auto-dismisses.
    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        self.duration
            .countdown()
            .and_then(|total| Progress::remaining(total, self.elapsed()))
    }

    /// Clock position at which the toast will expire if nothing changes.
    ///
    /// `None` while hovered, once closing, or for persistent toasts.
    #[must_use]
    pub fn expiry_deadline(&self) -> Option<Duration> {
        if self.phase != Phase::Visible {
            return None;
        }
        let total = self.duration.countdown()?;
        let start = self.running_since?;
        Some(start + total.saturating_sub(self.banked))
    }

    /// Clock position at which a closing toast becomes Removed.
    #[must_use]
    pub fn removal_deadline(&self) -> Option<Duration> {
        match self.phase {
            Phase::Closing => self.closing_since.map(|since| since + CLOSE_GRACE),
            Phase::Visible | Phase::Removed => None,
        }
    }

    /// The earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.expiry_deadline().or_else(|| self.removal_deadline())
    }

    /// Advances the engine's clock by `delta`.
    ///
    /// Elapsed time only grows while Visible and not hovered; the grace
    /// interval of a closing toast runs regardless of hover. A single large
    /// delta can report both `Closing` and `Removed`, in that order.
    pub fn tick(&mut self, delta: Duration) -> Vec<Transition> {
        let mut transitions = Vec::new();
        if self.phase == Phase::Removed {
            return transitions;
        }
        self.clock += delta;

        if let Some(deadline) = self.expiry_deadline() {
            if self.clock >= deadline {
                self.begin_closing(deadline);
                transitions.push(Transition::Closing(CloseReason::Expired));
            }
        }

        if let Some(deadline) = self.removal_deadline() {
            if self.clock >= deadline {
                self.finish();
                transitions.push(Transition::Removed);
            }
        }

        transitions
    }

    /// Updates the hover flag.
    ///
    /// Hovering banks the current run and cancels the expiry deadline;
    /// unhovering starts a new run so the deadline is re-armed at the
    /// remaining offset. Repeated calls with the same value are ignored.
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.phase == Phase::Removed || self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        if self.phase != Phase::Visible {
            return;
        }
        if hovered {
            self.banked = self.elapsed();
            self.running_since = None;
        } else {
            self.running_since = Some(self.clock);
        }
    }

    /// Starts closing immediately, cancelling any pending expiry.
    ///
    /// Returns the transition, or `None` if the toast was already closing
    /// or removed.
    pub fn request_close(&mut self) -> Option<Transition> {
        if self.phase != Phase::Visible {
            return None;
        }
        self.begin_closing(self.clock);
        Some(Transition::Closing(CloseReason::Requested))
    }

    fn begin_closing(&mut self, at: Duration) {
        if let Some(start) = self.running_since.take() {
            self.banked += at.saturating_sub(start);
        }
        self.phase = Phase::Closing;
        self.closing_since = Some(at);
    }

    fn finish(&mut self) {
        self.phase = Phase::Removed;
        if let Some(callback) = self.on_removed.take() {
            callback();
        }
    }
}

impl fmt::Debug for ToastEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastEngine")
            .field("duration", &self.duration)
            .field("clock", &self.clock)
            .field("elapsed", &self.elapsed())
            .field("hovered", &self.hovered)
            .field("phase", &self.phase)
            .field("closing_since", &self.closing_since)
            .field("on_removed", &self.on_removed.is_some())
            .finish()
    }
}
