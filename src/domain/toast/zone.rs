// SPDX-License-Identifier: MPL-2.0
//! Screen zones toasts are anchored to.
//!
//! The six identifiers (`top-left` … `bottom-right`) are part of the public
//! contract: they are what configuration files, command-line flags and
//! presentation layers exchange.

use std::fmt;
use std::str::FromStr;

/// Vertical edge a zone is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAnchor {
    Top,
    Bottom,
}

/// Horizontal alignment of a zone's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// One of the six fixed screen anchor positions for stacking toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Zone {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Zone {
    /// Every zone, in a stable order (top row first, then bottom row).
    pub const ALL: [Zone; 6] = [
        Zone::TopLeft,
        Zone::TopCenter,
        Zone::TopRight,
        Zone::BottomLeft,
        Zone::BottomCenter,
        Zone::BottomRight,
    ];

    /// Returns the contractual identifier of this zone.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Zone::TopLeft => "top-left",
            Zone::TopCenter => "top-center",
            Zone::TopRight => "top-right",
            Zone::BottomLeft => "bottom-left",
            Zone::BottomCenter => "bottom-center",
            Zone::BottomRight => "bottom-right",
        }
    }

    #[must_use]
    pub fn vertical(self) -> VerticalAnchor {
        match self {
            Zone::TopLeft | Zone::TopCenter | Zone::TopRight => VerticalAnchor::Top,
            Zone::BottomLeft | Zone::BottomCenter | Zone::BottomRight => VerticalAnchor::Bottom,
        }
    }

    #[must_use]
    pub fn horizontal(self) -> HorizontalAlign {
        match self {
            Zone::TopLeft | Zone::BottomLeft => HorizontalAlign::Left,
            Zone::TopCenter | Zone::BottomCenter => HorizontalAlign::Center,
            Zone::TopRight | Zone::BottomRight => HorizontalAlign::Right,
        }
    }

    /// Returns true for zones anchored to the bottom edge.
    ///
    /// Bottom stacks are listed newest-first so the newest toast sits
    /// closest to the screen edge.
    #[must_use]
    pub fn is_bottom(self) -> bool {
        self.vertical() == VerticalAnchor::Bottom
    }

    /// Index into [`Zone::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown zone identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseZoneError(pub String);

impl fmt::Display for ParseZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown zone '{}'", self.0)
    }
}

impl std::error::Error for ParseZoneError {}

impl FromStr for Zone {
    type Err = ParseZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::ALL
            .into_iter()
            .find(|zone| zone.as_str() == s)
            .ok_or_else(|| ParseZoneError(s.to_string()))
    }
}
