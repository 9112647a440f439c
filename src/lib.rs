// SPDX-License-Identifier: MPL-2.0
//! `toastkit` is the lifecycle and scheduling engine behind toast notifications.
//!
//! It tracks short-lived messages stacked in six screen zones, runs their
//! countdowns with pause-on-hover, sequences their close animation and removes
//! them. Rendering is left to the caller.

#![doc(html_root_url = "https://docs.rs/toastkit/0.1.0")]

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod notifications;
