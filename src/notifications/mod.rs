// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle and scheduling engine.
//!
//! Toasts are short-lived messages stacked in one of six screen zones. This
//! module owns their state; drawing them is left to whatever presentation
//! layer holds the [`Manager`].
//!
//! # Components
//!
//! - [`engine`] - `ToastEngine`, the per-toast Visible → Closing → Removed state machine
//! - [`record`] - `ToastRecord` and `ToastId`, the data a renderer reads
//! - [`registry`] - `ToastRegistry`, the id → record mapping and per-zone ordering
//! - [`manager`] - `Manager`, which pairs records with engines and drives them from a [`Clock`]
//! - [`provider`] - `ToastProvider` / `ToastHandle` for explicit shared access
//! - [`driver`] - `ToastDriver`, a tokio task that keeps a manager ticking
//!
//! # Usage
//!
//! ```
//! use toastkit::domain::toast::{ToastDuration, Zone};
//! use toastkit::notifications::{ManualClock, Manager};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut manager = Manager::with_clock(clock.clone());
//! let id = manager.show("Image saved", Zone::BottomRight, ToastDuration::from_millis(1000));
//!
//! clock.advance(Duration::from_millis(1300));
//! manager.tick();
//! assert!(manager.view(id).is_none());
//! ```
//!
//! # Timing
//!
//! - Default duration: 3 s; a duration of 0 never auto-dismisses
//! - Hovering pauses the countdown; only the remaining time runs afterwards
//! - Closing always lasts exactly 300 ms before the toast is removed

pub mod clock;
pub mod driver;
pub mod engine;
pub mod manager;
pub mod provider;
pub mod record;
pub mod registry;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use driver::{recv_event, DriverHandle, ToastDriver, TokioClock};
pub use engine::{CloseReason, Phase, ToastEngine, Transition};
pub use manager::{Manager, Message, ToastEvent, ToastEventKind, ToastView};
pub use provider::{ToastHandle, ToastProvider};
pub use record::{ToastId, ToastRecord};
pub use registry::{group_by_zone, ToastRegistry, ZoneGroups};
