// SPDX-License-Identifier: MPL-2.0
//! Async driver that keeps a [`Manager`] ticking.
//!
//! The driver owns the manager on a single task. Inputs arrive as
//! [`Message`]s over an unbounded channel, time advances on a
//! `tokio::time::interval`, and every lifecycle event is re-published on a
//! broadcast channel for renderers and other observers.
//!
//! ```no_run
//! # async fn demo() -> toastkit::error::Result<()> {
//! use toastkit::domain::toast::{TickInterval, ToastDuration, Zone};
//! use toastkit::notifications::{Manager, ToastDriver, TokioClock};
//!
//! let manager = Manager::with_clock(TokioClock);
//! let (driver, handle) = ToastDriver::new(manager, TickInterval::default());
//! let task = tokio::spawn(driver.exit_when_idle(true).run());
//!
//! handle.show("Saved", Zone::BottomRight, ToastDuration::default())?;
//! task.await.ok();
//! # Ok(())
//! # }
//! ```

use super::clock::Clock;
use super::manager::{Manager, Message, ToastEvent};
use crate::domain::toast::{TickInterval, ToastDuration, Zone};
use crate::error::{Error, Result};
use std::time::Instant;
use tokio::sync::{broadcast, mpsc};
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace, warn};

/// Capacity of the event broadcast channel.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Clock backed by tokio's time source, so paused test time applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

#[derive(Debug)]
enum Command {
    Message(Message),
    Shutdown,
}

/// Cloneable sender side of a running driver.
#[derive(Debug, Clone)]
pub struct DriverHandle {
    commands: mpsc::UnboundedSender<Command>,
    events: broadcast::Sender<ToastEvent>,
}

impl DriverHandle {
    /// Queues a message for the driver.
    pub fn send(&self, message: Message) -> Result<()> {
        self.commands
            .send(Command::Message(message))
            .map_err(|_| Error::DriverClosed)
    }

    /// Queues a new toast.
    pub fn show(
        &self,
        message: impl Into<String>,
        zone: Zone,
        duration: ToastDuration,
    ) -> Result<()> {
        self.send(Message::Show {
            message: message.into(),
            zone,
            duration,
        })
    }

    /// Subscribes to lifecycle events published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ToastEvent> {
        self.events.subscribe()
    }

    /// Asks the driver to stop after the commands already queued.
    pub fn shutdown(&self) -> Result<()> {
        self.commands
            .send(Command::Shutdown)
            .map_err(|_| Error::DriverClosed)
    }
}

/// Receives the next lifecycle event, skipping over any a slow subscriber
/// missed.
///
/// A burst larger than the channel capacity overwrites the oldest events. The
/// gap is logged and reception continues with the oldest event still buffered.
/// Returns `None` once the driver and every [`DriverHandle`] are gone.
pub async fn recv_event(events: &mut broadcast::Receiver<ToastEvent>) -> Option<ToastEvent> {
    loop {
        match events.recv().await {
            Ok(event) => return Some(event),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(skipped, "toast event subscriber lagged behind");
            }
            Err(broadcast::error::RecvError::Closed) => return None,
        }
    }
}

/// Runs a manager until shut down.
#[derive(Debug)]
pub struct ToastDriver<C: Clock> {
    manager: Manager<C>,
    commands: mpsc::UnboundedReceiver<Command>,
    events: broadcast::Sender<ToastEvent>,
    tick_interval: TickInterval,
    exit_when_idle: bool,
}

impl<C: Clock> ToastDriver<C> {
    /// Wraps `manager`, returning the driver and a handle to feed it.
    pub fn new(manager: Manager<C>, tick_interval: TickInterval) -> (Self, DriverHandle) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let handle = DriverHandle {
            commands: command_tx,
            events: event_tx.clone(),
        };
        let driver = Self {
            manager,
            commands: command_rx,
            events: event_tx,
            tick_interval,
            exit_when_idle: false,
        };
        (driver, handle)
    }

    /// Stops the driver once no toast is left and no command is pending.
    #[must_use]
    pub fn exit_when_idle(mut self, enabled: bool) -> Self {
        self.exit_when_idle = enabled;
        self
    }

    /// Processes commands and ticks until shut down (or idle, if enabled).
    ///
    /// Returns the manager so callers can inspect what is left.
    pub async fn run(mut self) -> Manager<C> {
        let mut interval = tokio::time::interval(self.tick_interval.as_duration());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        debug!(tick_ms = self.tick_interval.value(), "toast driver started");

        loop {
            tokio::select! {
                biased;
                command = self.commands.recv() => match command {
                    Some(Command::Message(message)) => {
                        trace!(?message, "toast command");
                        self.manager.handle_message(&message);
                    }
                    Some(Command::Shutdown) | None => break,
                },
                _ = interval.tick() => self.manager.tick(),
            }
            self.publish();

            if self.exit_when_idle && self.manager.is_empty() && self.commands.is_empty() {
                break;
            }
        }

        self.publish();
        debug!(remaining = self.manager.len(), "toast driver stopped");
        self.manager
    }

    fn publish(&mut self) {
        for event in self.manager.drain_events() {
            // No subscribers is not an error: nobody is rendering yet.
            let _ = self.events.send(event);
        }
    }
}
