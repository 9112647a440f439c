// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `ToastRecord` struct and its `ToastId`,
//! the read-only view the presentation layer renders from.

use crate::domain::toast::{ToastDuration, Zone};
use std::fmt;

/// Unique identifier for a toast.
///
/// Ids come from a process-wide counter, so they are never reused while the
/// process lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// A toast as stored by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRecord {
    id: ToastId,
    message: String,
    zone: Zone,
    duration: ToastDuration,
}

impl ToastRecord {
    /// Creates a record with a fresh id.
    pub fn new(message: impl Into<String>, zone: Zone, duration: ToastDuration) -> Self {
        Self {
            id: ToastId::new(),
            message: message.into(),
            zone,
            duration,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        let a = ToastRecord::new("test", Zone::TopLeft, ToastDuration::default());
        let b = ToastRecord::new("test", Zone::TopLeft, ToastDuration::default());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn toast_ids_increase() {
        let first = ToastId::new();
        let second = ToastId::new();
        assert!(second > first);
    }

    #[test]
    fn record_keeps_what_it_was_given() {
        let record = ToastRecord::new(
            "Saved",
            Zone::BottomCenter,
            ToastDuration::from_millis(1500),
        );
        assert_eq!(record.message(), "Saved");
        assert_eq!(record.zone(), Zone::BottomCenter);
        assert_eq!(record.duration().as_millis(), 1500);
    }

    #[test]
    fn id_display_is_prefixed() {
        let id = ToastId::new();
        assert_eq!(id.to_string(), format!("toast-{}", id.value()));
    }
}
