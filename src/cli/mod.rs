//! Command-line interface.
//!
//! Parsed before the TUI starts: `--version` and `--check` run and exit,
//! everything else feeds [`Config`](crate::config::Config).

pub mod args;
pub mod check;
pub mod version;

pub use args::{parse_args, ArgsError, CliArgs, CliCommand};
pub use check::run_check;
pub use version::{handle_version_command, version_string, VERSION};
