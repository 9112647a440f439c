// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! Value objects shared by the engine, the registry and any presentation
//! layer that renders toasts. Nothing here knows about timers or collections.

pub mod newtypes;
pub mod zone;

pub use newtypes::{Progress, TickInterval, ToastDuration, CLOSE_GRACE};
pub use zone::{HorizontalAlign, VerticalAnchor, Zone};
