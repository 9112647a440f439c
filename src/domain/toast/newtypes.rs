// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! This module provides type-safe wrappers for toast timing values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

/// Fixed delay between a toast starting to close and being removed.
///
/// Reserved for the exit animation; part of the public contract.
pub const CLOSE_GRACE: Duration = Duration::from_millis(300);

// =============================================================================
// Duration Bounds
// =============================================================================

/// Toast display duration bounds.
pub mod duration_bounds {
    /// Default display duration in milliseconds.
    pub const DEFAULT_MS: u64 = 3000;
    /// Sentinel meaning "never auto-dismiss".
    pub const PERSISTENT_MS: u64 = 0;
}

// =============================================================================
// ToastDuration
// =============================================================================

/// How long a toast counts down before closing on its own.
///
/// Zero is a sentinel: the toast stays until it is explicitly closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastDuration(u64);

impl ToastDuration {
    /// A duration that never expires.
    pub const PERSISTENT: Self = Self(duration_bounds::PERSISTENT_MS);

    /// Creates a duration from milliseconds.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the countdown length, or `None` if the toast never expires.
    #[must_use]
    pub fn countdown(self) -> Option<Duration> {
        if self.is_persistent() {
            None
        } else {
            Some(Duration::from_millis(self.0))
        }
    }

    /// Returns true if the toast never auto-dismisses.
    #[must_use]
    pub fn is_persistent(self) -> bool {
        self.0 == duration_bounds::PERSISTENT_MS
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(duration_bounds::DEFAULT_MS)
    }
}

impl From<u64> for ToastDuration {
    fn from(ms: u64) -> Self {
        Self::from_millis(ms)
    }
}

// =============================================================================
// Progress
// =============================================================================

/// Fraction of the countdown still remaining, always within `0.0..=1.0`.
///
/// `1.0` means the toast was just shown, `0.0` means it is about to close.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Progress(f32);

impl Progress {
    /// Full bar.
    pub const FULL: Self = Self(1.0);
    /// Empty bar.
    pub const EMPTY: Self = Self(0.0);

    /// Creates a progress value, clamping to `0.0..=1.0`. NaN maps to empty.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::EMPTY;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Computes the remaining fraction of `total` after `elapsed`.
    ///
    /// Returns `None` for a zero `total`, where progress is undefined.
    #[must_use]
    pub fn remaining(total: Duration, elapsed: Duration) -> Option<Self> {
        if total.is_zero() {
            return None;
        }
        let left = total.saturating_sub(elapsed);
        Some(Self::new(
            (left.as_secs_f64() / total.as_secs_f64()) as f32,
        ))
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the fraction as a percentage (e.g. `0.25` → `25.0`).
    #[must_use]
    pub fn as_percent(self) -> f32 {
        self.0 * 100.0
    }
}

// =============================================================================
// Tick Interval Bounds
// =============================================================================

/// Tick interval bounds (1 ms to 1 s).
pub mod tick_bounds {
    /// Minimum tick interval in milliseconds.
    pub const MIN_MS: u64 = 1;
    /// Maximum tick interval in milliseconds.
    pub const MAX_MS: u64 = 1000;
    /// Default tick interval in milliseconds.
    pub const DEFAULT_MS: u64 = 10;
}

// =============================================================================
// TickInterval
// =============================================================================

/// Period of the logical clock that drives toast countdowns.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–1000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a new tick interval, clamping to valid range.
    #[must_use]
    pub fn new(ms: u64) -> Self {
        Self(ms.clamp(tick_bounds::MIN_MS, tick_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(tick_bounds::DEFAULT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn close_grace_is_three_hundred_millis() {
        assert_eq!(CLOSE_GRACE, Duration::from_millis(300));
    }

    #[test]
    fn default_duration_is_three_seconds() {
        assert_eq!(ToastDuration::default().as_millis(), 3000);
        assert_eq!(
            ToastDuration::default().countdown(),
            Some(Duration::from_secs(3))
        );
    }

    #[test]
    fn zero_duration_is_persistent() {
        let d = ToastDuration::from_millis(0);
        assert!(d.is_persistent());
        assert_eq!(d.countdown(), None);
        assert_eq!(d, ToastDuration::PERSISTENT);
    }

    #[test]
    fn progress_is_clamped() {
        assert_abs_diff_eq!(Progress::new(1.5).value(), 1.0);
        assert_abs_diff_eq!(Progress::new(-0.5).value(), 0.0);
        assert_abs_diff_eq!(Progress::new(f32::NAN).value(), 0.0);
    }

    #[test]
    fn remaining_progress_tracks_elapsed() {
        let total = Duration::from_millis(1000);
        let p = Progress::remaining(total, Duration::from_millis(250)).unwrap();
        assert_abs_diff_eq!(p.value(), 0.75, epsilon = 1e-6);
        assert_abs_diff_eq!(p.as_percent(), 75.0, epsilon = 1e-4);
    }

    #[test]
    fn remaining_progress_never_goes_negative() {
        let total = Duration::from_millis(1000);
        let p = Progress::remaining(total, Duration::from_millis(1500)).unwrap();
        assert_eq!(p, Progress::EMPTY);
    }

    #[test]
    fn remaining_progress_is_undefined_for_zero_total() {
        assert!(Progress::remaining(Duration::ZERO, Duration::from_millis(5)).is_none());
    }

    #[test]
    fn tick_interval_clamps_to_valid_range() {
        assert_eq!(TickInterval::new(0).value(), tick_bounds::MIN_MS);
        assert_eq!(TickInterval::new(10_000).value(), tick_bounds::MAX_MS);
        assert_eq!(TickInterval::new(16).value(), 16);
    }

    #[test]
    fn tick_interval_default_is_ten_millis() {
        assert_eq!(
            TickInterval::default().as_duration(),
            Duration::from_millis(10)
        );
    }
}
