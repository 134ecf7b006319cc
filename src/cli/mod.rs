//! Command-line interface for fusion-chef.
//!
//! Provides commands for serving the kitchen front end and cooking a single
//! dish from the terminal.

mod commands;

pub use commands::{parse_cli, run_with_cli, Cli, Commands, CookArgs, ServeArgs};
