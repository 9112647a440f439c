// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.

use crate::domain::toast::newtypes::{duration_bounds, tick_bounds};

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default display duration of a toast (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = duration_bounds::DEFAULT_MS;

/// Default zone identifier for toasts shown without an explicit zone.
pub const DEFAULT_TOAST_ZONE: &str = "top-right";

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default period of the countdown clock (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = tick_bounds::DEFAULT_MS;

/// Minimum tick interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = tick_bounds::MIN_MS;

/// Maximum tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = tick_bounds::MAX_MS;
