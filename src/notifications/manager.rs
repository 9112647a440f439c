// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` ties the [`ToastRegistry`] to one [`ToastEngine`] per record.
//! It routes hover and close inputs to the right engine, advances every
//! engine from a single [`Clock`], and deletes a record as soon as its engine
//! reports [`Transition::Removed`].

use super::clock::{Clock, MonotonicClock};
use super::engine::{CloseReason, Phase, ToastEngine, Transition};
use super::record::{ToastId, ToastRecord};
use super::registry::ToastRegistry;
use crate::config::Config;
use crate::domain::toast::{Progress, ToastDuration, Zone};
use std::collections::HashMap;
use std::time::Instant;
use tracing::trace;

/// Messages for toast state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Show a new toast immediately.
    Show {
        message: String,
        zone: Zone,
        duration: ToastDuration,
    },
    /// Start the close sequence of a toast (e.g. its dismiss control was clicked).
    Dismiss(ToastId),
    /// Drop a toast right away, without the close sequence.
    Remove(ToastId),
    /// Drop every toast right away.
    RemoveAll,
    /// The pointer entered a toast.
    HoverStart(ToastId),
    /// The pointer left a toast.
    HoverEnd(ToastId),
    /// Advance every countdown to the clock's current time.
    Tick,
}

/// What happened to a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEventKind {
    Shown(Zone),
    Closing(CloseReason),
    /// Reached the end of its close sequence.
    Removed,
    /// Dropped through [`Manager::remove`] or [`Manager::remove_all`].
    Discarded,
}

/// A lifecycle notification for observers of the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastEvent {
    pub id: ToastId,
    pub kind: ToastEventKind,
}

/// Render-ready snapshot of one toast.
#[derive(Debug, Clone, Copy)]
pub struct ToastView<'a> {
    pub record: &'a ToastRecord,
    pub phase: Phase,
    pub hovered: bool,
    /// Remaining countdown fraction; `None` for toasts that never expire.
    pub progress: Option<Progress>,
}

#[derive(Debug)]
struct Slot {
    engine: ToastEngine,
    /// Clock reading the engine was last advanced to.
    synced_at: Instant,
}

/// Manages active toasts and their countdowns.
#[derive(Debug)]
pub struct Manager<C: Clock = MonotonicClock> {
    registry: ToastRegistry,
    slots: HashMap<ToastId, Slot>,
    clock: C,
    default_duration: ToastDuration,
    default_zone: Zone,
    events: Vec<ToastEvent>,
}

impl Manager<MonotonicClock> {
    /// Creates a new empty manager on the real monotonic clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }

    /// Creates a manager using the defaults from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_clock(MonotonicClock).with_defaults(config)
    }
}

impl Default for Manager<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Manager<C> {
    /// Creates a new empty manager driven by `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            registry: ToastRegistry::new(),
            slots: HashMap::new(),
            clock,
            default_duration: ToastDuration::default(),
            default_zone: Zone::default(),
            events: Vec::new(),
        }
    }

    /// Applies the default duration and zone from `config`.
    #[must_use]
    pub fn with_defaults(mut self, config: &Config) -> Self {
        self.default_duration = config.default_duration();
        self.default_zone = config.default_zone();
        self
    }

    /// Shows a toast with the configured default zone and duration.
    pub fn show_default(&mut self, message: impl Into<String>) -> ToastId {
        self.show(message, self.default_zone, self.default_duration)
    }

    /// Shows a new toast immediately and returns its id.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        zone: Zone,
        duration: ToastDuration,
    ) -> ToastId {
        let id = self.registry.create(message, zone, duration);
        self.slots.insert(
            id,
            Slot {
                engine: ToastEngine::new(duration),
                synced_at: self.clock.now(),
            },
        );
        self.events.push(ToastEvent {
            id,
            kind: ToastEventKind::Shown(zone),
        });
        id
    }

    /// Shows a new toast and registers the callback fired when it is removed
    /// at the end of its close sequence.
    pub fn show_with_callback(
        &mut self,
        message: impl Into<String>,
        zone: Zone,
        duration: ToastDuration,
        on_removed: impl FnOnce() + Send + 'static,
    ) -> ToastId {
        let id = self.show(message, zone, duration);
        if let Some(slot) = self.slots.get_mut(&id) {
            slot.engine.set_on_removed(on_removed);
        }
        id
    }

    /// Starts the close sequence of a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) {
        self.sync(id);
        let Some(slot) = self.slots.get_mut(&id) else {
            return;
        };
        if let Some(transition) = slot.engine.request_close() {
            self.record(id, transition);
        }
    }

    /// Marks a toast as hovered, pausing its countdown.
    pub fn hover_start(&mut self, id: ToastId) {
        self.set_hovered(id, true);
    }

    /// Clears the hover flag, resuming the countdown with the time left.
    pub fn hover_end(&mut self, id: ToastId) {
        self.set_hovered(id, false);
    }

    /// Drops a toast immediately. Returns `true` if it existed.
    ///
    /// The toast skips its close sequence and any `on_removed` callback
    /// registered for it is dropped without being called. Observers see a
    /// [`ToastEventKind::Discarded`] event instead.
    pub fn remove(&mut self, id: ToastId) -> bool {
        self.slots.remove(&id);
        let removed = self.registry.remove(id);
        if removed {
            self.events.push(ToastEvent {
                id,
                kind: ToastEventKind::Discarded,
            });
        }
        removed
    }

    /// Drops every toast immediately. As with [`Manager::remove`], no
    /// `on_removed` callback fires.
    pub fn remove_all(&mut self) {
        let discarded = self.registry.iter().map(|record| ToastEvent {
            id: record.id(),
            kind: ToastEventKind::Discarded,
        });
        self.events.extend(discarded);
        self.slots.clear();
        self.registry.remove_all();
    }

    /// Advances every countdown to the clock's current time and deletes the
    /// toasts whose close sequence finished.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        let mut finished = Vec::new();

        for record in self.registry.iter() {
            let id = record.id();
            let Some(slot) = self.slots.get_mut(&id) else {
                continue;
            };
            let delta = now.saturating_duration_since(slot.synced_at);
            slot.synced_at = now;
            for transition in slot.engine.tick(delta) {
                trace!(%id, ?transition, "toast transition");
                if transition == Transition::Removed {
                    finished.push(id);
                }
                self.events.push(event_for(id, transition));
            }
        }

        for id in finished {
            self.slots.remove(&id);
            self.registry.remove(id);
        }
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Show {
                message,
                zone,
                duration,
            } => {
                self.show(message.clone(), *zone, *duration);
            }
            Message::Dismiss(id) => self.dismiss(*id),
            Message::Remove(id) => {
                self.remove(*id);
            }
            Message::RemoveAll => self.remove_all(),
            Message::HoverStart(id) => self.hover_start(*id),
            Message::HoverEnd(id) => self.hover_end(*id),
            Message::Tick => self.tick(),
        }
    }

    /// Returns and clears the events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<ToastEvent> {
        std::mem::take(&mut self.events)
    }

    /// Earliest instant at which some toast changes phase, if any.
    ///
    /// Hovered and persistent toasts have no deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slots
            .values()
            .filter_map(|slot| {
                let deadline = slot.engine.next_deadline()?;
                Some(slot.synced_at + deadline.saturating_sub(slot.engine.clock()))
            })
            .min()
    }

    /// Returns the toasts of `zone` in stacking order.
    #[must_use]
    pub fn list_by_zone(&self, zone: Zone) -> Vec<&ToastRecord> {
        self.registry.list_by_zone(zone)
    }

    /// Returns render snapshots of the toasts of `zone` in stacking order.
    #[must_use]
    pub fn stack(&self, zone: Zone) -> Vec<ToastView<'_>> {
        self.registry
            .list_by_zone(zone)
            .into_iter()
            .filter_map(|record| self.view_of(record))
            .collect()
    }

    /// Returns a render snapshot of one toast.
    #[must_use]
    pub fn view(&self, id: ToastId) -> Option<ToastView<'_>> {
        self.registry.get(id).and_then(|record| self.view_of(record))
    }

    #[must_use]
    pub fn registry(&self) -> &ToastRegistry {
        &self.registry
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    fn view_of<'a>(&'a self, record: &'a ToastRecord) -> Option<ToastView<'a>> {
        let slot = self.slots.get(&record.id())?;
        Some(ToastView {
            record,
            phase: slot.engine.phase(),
            hovered: slot.engine.is_hovered(),
            progress: slot.engine.progress(),
        })
    }

    fn set_hovered(&mut self, id: ToastId, hovered: bool) {
        self.sync(id);
        if let Some(slot) = self.slots.get_mut(&id) {
            slot.engine.set_hovered(hovered);
        }
    }

    /// Brings one engine up to the current clock reading before an input is
    /// applied, so time spent before a hover or close still counts.
    fn sync(&mut self, id: ToastId) {
        let now = self.clock.now();
        let Some(slot) = self.slots.get_mut(&id) else {
            return;
        };
        let delta = now.saturating_duration_since(slot.synced_at);
        slot.synced_at = now;
        let transitions = slot.engine.tick(delta);
        let removed = transitions.contains(&Transition::Removed);
        for transition in transitions {
            self.record(id, transition);
        }
        if removed {
            self.slots.remove(&id);
            self.registry.remove(id);
        }
    }

    fn record(&mut self, id: ToastId, transition: Transition) {
        trace!(%id, ?transition, "toast transition");
        self.events.push(event_for(id, transition));
    }
}

fn event_for(id: ToastId, transition: Transition) -> ToastEvent {
    let kind = match transition {
        Transition::Closing(reason) => ToastEventKind::Closing(reason),
        Transition::Removed => ToastEventKind::Removed,
    };
    ToastEvent { id, kind }
}
