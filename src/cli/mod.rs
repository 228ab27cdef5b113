//! Command-line interface components
//!
//! Argument parsing and the handlers behind the `list` and `grab`
//! subcommands.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, Coordinate, GlobalArgs, GrabArgs};
pub use commands::{handle_grab, handle_list};
