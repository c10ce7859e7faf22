//! Upskill CLI
//!
//! Library half of the `thermo` binary: command definition, config file
//! loading, logging setup and subcommand execution.
//!
//! # Example
//!
//! ```rust
//! use upskill_cli::{build_cli, dispatch};
//!
//! let matches = build_cli().get_matches_from(["thermo", "convert", "212"]);
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let status = dispatch(&matches, &mut out, &mut err).unwrap();
//!
//! assert_eq!(status, 0);
//! assert_eq!(String::from_utf8(out).unwrap(), "212°F = 100°C\n");
//! ```

#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

// Re-exports
pub use cli::{build_cli, ConvertArgs, GlobalArgs};
pub use commands::{dispatch, run_convert, run_limits, ConversionRecord, ConvertSummary};
pub use config::AppConfig;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
