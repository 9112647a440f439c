// SPDX-License-Identifier: MPL-2.0
//! Explicit access to a shared toast manager.
//!
//! A [`ToastProvider`] owns the one manager of a presentation tree. Code that
//! needs to raise toasts is handed a [`ToastHandle`] instead of looking the
//! manager up globally. A handle whose provider has been dropped (or one
//! created with [`ToastHandle::detached`]) fails every call with
//! [`Error::Config`] rather than silently doing nothing.

use super::clock::{Clock, MonotonicClock};
use super::manager::Manager;
use super::record::{ToastId, ToastRecord};
use crate::domain::toast::{ToastDuration, Zone};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Owner of the shared manager.
#[derive(Debug)]
pub struct ToastProvider<C: Clock = MonotonicClock> {
    manager: Rc<RefCell<Manager<C>>>,
}

impl<C: Clock> ToastProvider<C> {
    pub fn new(manager: Manager<C>) -> Self {
        Self {
            manager: Rc::new(RefCell::new(manager)),
        }
    }

    /// Returns a handle to pass to code that raises toasts.
    #[must_use]
    pub fn handle(&self) -> ToastHandle<C> {
        ToastHandle {
            manager: Rc::downgrade(&self.manager),
        }
    }

    /// Runs `f` with mutable access to the manager, e.g. to tick it or
    /// render from it.
    pub fn with_manager<R>(&self, f: impl FnOnce(&mut Manager<C>) -> R) -> Result<R> {
        let mut manager = self
            .manager
            .try_borrow_mut()
            .map_err(|_| Error::Config("toast manager is already in use".into()))?;
        Ok(f(&mut manager))
    }
}

/// Non-owning access to a provider's manager.
#[derive(Debug)]
pub struct ToastHandle<C: Clock = MonotonicClock> {
    manager: Weak<RefCell<Manager<C>>>,
}

impl<C: Clock> Clone for ToastHandle<C> {
    fn clone(&self) -> Self {
        Self {
            manager: Weak::clone(&self.manager),
        }
    }
}

impl<C: Clock> ToastHandle<C> {
    /// A handle not attached to any provider.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            manager: Weak::new(),
        }
    }

    /// Returns true while the provider is alive.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.manager.strong_count() > 0
    }

    pub fn show(
        &self,
        message: impl Into<String>,
        zone: Zone,
        duration: ToastDuration,
    ) -> Result<ToastId> {
        self.with(|manager| manager.show(message, zone, duration))
    }

    /// Shows a toast whose `on_removed` callback fires once its close
    /// sequence finishes. See [`Manager::show_with_callback`].
    pub fn show_with_callback(
        &self,
        message: impl Into<String>,
        zone: Zone,
        duration: ToastDuration,
        on_removed: impl FnOnce() + Send + 'static,
    ) -> Result<ToastId> {
        self.with(|manager| manager.show_with_callback(message, zone, duration, on_removed))
    }

    pub fn show_default(&self, message: impl Into<String>) -> Result<ToastId> {
        self.with(|manager| manager.show_default(message))
    }

    pub fn dismiss(&self, id: ToastId) -> Result<()> {
        self.with(|manager| manager.dismiss(id))
    }

    pub fn remove(&self, id: ToastId) -> Result<()> {
        self.with(|manager| {
            manager.remove(id);
        })
    }

    pub fn remove_all(&self) -> Result<()> {
        self.with(Manager::remove_all)
    }

    pub fn hover_start(&self, id: ToastId) -> Result<()> {
        self.with(|manager| manager.hover_start(id))
    }

    pub fn hover_end(&self, id: ToastId) -> Result<()> {
        self.with(|manager| manager.hover_end(id))
    }

    /// Returns copies of the toasts of `zone` in stacking order.
    pub fn list_by_zone(&self, zone: Zone) -> Result<Vec<ToastRecord>> {
        self.with(|manager| manager.list_by_zone(zone).into_iter().cloned().collect())
    }

    fn with<R>(&self, f: impl FnOnce(&mut Manager<C>) -> R) -> Result<R> {
        let manager = self.manager.upgrade().ok_or_else(|| {
            Error::Config("toast handle used outside of an active ToastProvider".into())
        })?;
        let mut manager = manager
            .try_borrow_mut()
            .map_err(|_| Error::Config("toast manager is already in use".into()))?;
        Ok(f(&mut manager))
    }
}
