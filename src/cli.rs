// SPDX-License-Identifier: MPL-2.0
//! Command-line flags for the demo binary.
//!
//! This is the boundary where input is validated before it reaches the
//! engine: empty messages and unknown zones are rejected here.

use crate::domain::toast::{ToastDuration, Zone};
use crate::error::{Error, Result};
use std::ffi::OsString;

pub const USAGE: &str = "\
Usage: toastkit [OPTIONS] MESSAGE

Options:
  --zone ZONE         top-left, top-center, top-right,
                      bottom-left, bottom-center or bottom-right
  --duration MS       display time in milliseconds (0 = until closed)
  --count N           number of toasts to show (default 1)
  --config-dir DIR    read settings.toml from DIR
  -h, --help          print this help";

/// Parsed command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    pub message: String,
    /// `None` falls back to the configured default zone.
    pub zone: Option<Zone>,
    /// `None` falls back to the configured default duration.
    pub duration: Option<ToastDuration>,
    pub count: usize,
    pub config_dir: Option<String>,
    pub help: bool,
}

/// Parses flags from an argument list (without the program name).
pub fn parse_flags(args: Vec<OsString>) -> Result<Flags> {
    let mut args = pico_args::Arguments::from_vec(args);

    if args.contains(["-h", "--help"]) {
        return Ok(Flags {
            message: String::new(),
            zone: None,
            duration: None,
            count: 0,
            config_dir: None,
            help: true,
        });
    }

    let zone = args
        .opt_value_from_str::<_, String>("--zone")
        .map_err(|e| Error::Config(e.to_string()))?
        .map(|raw| raw.parse::<Zone>().map_err(|_| Error::InvalidZone(raw)))
        .transpose()?;
    let duration = args
        .opt_value_from_str::<_, u64>("--duration")
        .map_err(|e| Error::Config(e.to_string()))?
        .map(ToastDuration::from_millis);
    let count = args
        .opt_value_from_str::<_, usize>("--count")
        .map_err(|e| Error::Config(e.to_string()))?
        .unwrap_or(1);
    let config_dir = args
        .opt_value_from_str::<_, String>("--config-dir")
        .map_err(|e| Error::Config(e.to_string()))?;

    let message = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(Flags {
        message: validate_message(&message)?.to_string(),
        zone,
        duration,
        count,
        config_dir,
        help: false,
    })
}

/// Rejects messages that are empty once surrounding whitespace is trimmed.
pub fn validate_message(message: &str) -> Result<&str> {
    if message.trim().is_empty() {
        Err(Error::EmptyMessage)
    } else {
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn parses_all_flags() {
        let flags = parse_flags(args(&[
            "--zone",
            "bottom-center",
            "--duration",
            "0",
            "--count",
            "3",
            "--config-dir",
            "/tmp/cfg",
            "Hello",
            "there",
        ]))
        .expect("flags should parse");

        assert_eq!(flags.message, "Hello there");
        assert_eq!(flags.zone, Some(Zone::BottomCenter));
        assert_eq!(flags.duration, Some(ToastDuration::PERSISTENT));
        assert_eq!(flags.count, 3);
        assert_eq!(flags.config_dir.as_deref(), Some("/tmp/cfg"));
        assert!(!flags.help);
    }

    #[test]
    fn optional_flags_default_to_none() {
        let flags = parse_flags(args(&["Saved"])).expect("flags should parse");
        assert_eq!(flags.zone, None);
        assert_eq!(flags.duration, None);
        assert_eq!(flags.count, 1);
    }

    #[test]
    fn rejects_empty_message() {
        assert_eq!(parse_flags(args(&[])), Err(Error::EmptyMessage));
        assert_eq!(parse_flags(args(&["   "])), Err(Error::EmptyMessage));
    }

    #[test]
    fn rejects_unknown_zone() {
        let result = parse_flags(args(&["--zone", "middle", "hi"]));
        assert_eq!(result, Err(Error::InvalidZone("middle".into())));
    }

    #[test]
    fn rejects_non_numeric_duration() {
        let result = parse_flags(args(&["--duration", "soon", "hi"]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn help_short_circuits_validation() {
        let flags = parse_flags(args(&["--help"])).expect("help should parse");
        assert!(flags.help);
    }

    #[test]
    fn validate_message_keeps_original_text() {
        assert_eq!(validate_message("  padded  "), Ok("  padded  "));
    }
}
