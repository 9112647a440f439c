// SPDX-License-Identifier: MPL-2.0
//! Active toast bookkeeping.
//!
//! The `ToastRegistry` owns the id → record mapping. Insertion order is kept
//! so the per-zone stacking can be derived on demand by [`group_by_zone`]
//! instead of being maintained alongside the mapping.

use super::record::{ToastId, ToastRecord};
use crate::domain::toast::{ToastDuration, Zone};
use indexmap::IndexMap;
use tracing::debug;

/// Toasts of every zone, in stacking order.
#[derive(Debug, Clone, Default)]
pub struct ZoneGroups<'a> {
    groups: [Vec<&'a ToastRecord>; 6],
}

impl<'a> ZoneGroups<'a> {
    /// Returns the stack of one zone.
    #[must_use]
    pub fn get(&self, zone: Zone) -> &[&'a ToastRecord] {
        &self.groups[zone.index()]
    }

    /// Takes the stack of one zone out of the grouping.
    #[must_use]
    pub fn take(mut self, zone: Zone) -> Vec<&'a ToastRecord> {
        std::mem::take(&mut self.groups[zone.index()])
    }

    /// Iterates over every zone with its stack, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Zone, &[&'a ToastRecord])> {
        Zone::ALL
            .into_iter()
            .map(move |zone| (zone, self.groups[zone.index()].as_slice()))
    }
}

/// Groups records by zone in stacking order.
///
/// `records` must be in creation order. Top zones keep that order (newest
/// farthest from the edge); bottom zones are reversed so the newest toast sits
/// closest to the bottom edge.
pub fn group_by_zone<'a, I>(records: I) -> ZoneGroups<'a>
where
    I: IntoIterator<Item = &'a ToastRecord>,
{
    let mut grouped = ZoneGroups::default();
    for record in records {
        grouped.groups[record.zone().index()].push(record);
    }
    for zone in Zone::ALL {
        if zone.is_bottom() {
            grouped.groups[zone.index()].reverse();
        }
    }
    grouped
}

/// Owns the active toasts.
#[derive(Debug, Default)]
pub struct ToastRegistry {
    /// Active records in creation order.
    records: IndexMap<ToastId, ToastRecord>,
}

impl ToastRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new toast and returns its id.
    ///
    /// The message is stored as given; rejecting empty messages is the
    /// caller's job.
    pub fn create(
        &mut self,
        message: impl Into<String>,
        zone: Zone,
        duration: ToastDuration,
    ) -> ToastId {
        let record = ToastRecord::new(message, zone, duration);
        let id = record.id();
        debug!(%id, %zone, duration_ms = duration.as_millis(), "toast created");
        self.records.insert(id, record);
        id
    }

    /// Removes a toast by its ID.
    ///
    /// Unknown ids are ignored. Returns `true` if a record was removed.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let removed = self.records.shift_remove(&id).is_some();
        if removed {
            debug!(%id, "toast removed");
        }
        removed
    }

    /// Removes every toast in every zone.
    pub fn remove_all(&mut self) {
        if !self.records.is_empty() {
            debug!(count = self.records.len(), "all toasts removed");
        }
        self.records.clear();
    }

    /// Returns the toasts of `zone` in stacking order.
    #[must_use]
    pub fn list_by_zone(&self, zone: Zone) -> Vec<&ToastRecord> {
        self.grouped().take(zone)
    }

    /// Returns all zones with their stacks.
    #[must_use]
    pub fn grouped(&self) -> ZoneGroups<'_> {
        group_by_zone(self.records.values())
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastRecord> {
        self.records.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.records.contains_key(&id)
    }

    /// Iterates over every record in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &ToastRecord> {
        self.records.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
