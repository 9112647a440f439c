// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core toast types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`toast`]: Toast value objects ([`Zone`](toast::Zone),
//!   [`ToastDuration`](toast::ToastDuration), [`Progress`](toast::Progress),
//!   [`TickInterval`](toast::TickInterval))

pub mod toast;
