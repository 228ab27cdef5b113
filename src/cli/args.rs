//! Command-line argument parsing
//!
//! The flag set predates this implementation and is kept stable: `-c`
//! coordinate, `-l` landscape host, `-u`/`-p` credentials, with `list` and
//! `grab` subcommands. A bare invocation lists.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

use crate::errors::ConfigError;

/// hcplog - list and download application log files
#[derive(Parser, Debug)]
#[command(
    name = "hcplog",
    version,
    about = "List and download application log files from a cloud platform landscape",
    long_about = "A client for the basic-auth log API of cloud platform landscapes.
Lists the log files of an application and downloads the ones matching glob patterns."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand; a bare invocation lists
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every subcommand
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Application coordinate in the form account:application
    #[arg(short = 'c', long = "coordinate", value_name = "ACCOUNT:APPLICATION")]
    pub coordinate: Coordinate,

    /// Landscape host, e.g. eu1.hana.ondemand.com
    #[arg(short = 'l', long = "landscape", value_name = "HOST")]
    pub landscape_host: String,

    /// Platform user; defaults to HCP_USERNAME, then the OS user
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// Platform password; defaults to HCP_PASSWORD, then an interactive prompt
    #[arg(short = 'p', long)]
    pub password: Option<String>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - errors only
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the log file listing as a table
    List,

    /// Download the log files matching glob patterns
    Grab(GrabArgs),
}

/// Arguments for the grab command
#[derive(Args, Debug, Clone)]
pub struct GrabArgs {
    /// Glob patterns matched against log file names
    #[arg(value_name = "PATTERN", required = true, num_args = 1..)]
    pub patterns: Vec<String>,

    /// Directory the files are written to (default: current directory)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// account:application pair identifying one tenant application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub account: String,
    pub application: String,
}

impl FromStr for Coordinate {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [account, application] if !account.is_empty() && !application.is_empty() => {
                Ok(Self {
                    account: account.to_string(),
                    application: application.to_string(),
                })
            }
            _ => Err(ConfigError::InvalidCoordinate {
                coord: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.account, self.application)
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run; a missing subcommand means list
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List)
    }

    /// Logging level derived from the verbosity flags
    pub fn log_level(&self) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_coordinate_parsing() {
        let coordinate: Coordinate = "acme:myapp".parse().unwrap();
        assert_eq!(coordinate.account, "acme");
        assert_eq!(coordinate.application, "myapp");
        assert_eq!(coordinate.to_string(), "acme:myapp");
    }

    #[test]
    fn test_coordinate_rejects_bad_shapes() {
        for bad in ["acme", "acme:", ":myapp", "a:b:c", ""] {
            assert!(
                bad.parse::<Coordinate>().is_err(),
                "'{bad}' must not parse"
            );
        }
    }

    #[test]
    fn test_missing_subcommand_means_list() {
        let cli = parse(&["hcplog", "-c", "acme:myapp", "-l", "eu1.hana.ondemand.com"]);
        assert!(matches!(cli.command(), Commands::List));
    }

    #[test]
    fn test_grab_requires_a_pattern() {
        let result = Cli::try_parse_from([
            "hcplog",
            "-c",
            "acme:myapp",
            "-l",
            "eu1.hana.ondemand.com",
            "grab",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_grab_collects_patterns_and_output_dir() {
        let cli = parse(&[
            "hcplog",
            "-c",
            "acme:myapp",
            "-l",
            "eu1.hana.ondemand.com",
            "grab",
            "*.log",
            "ljs_*",
            "-o",
            "/tmp/logs",
        ]);
        match cli.command() {
            Commands::Grab(args) => {
                assert_eq!(args.patterns, vec!["*.log", "ljs_*"]);
                assert_eq!(args.output_dir, Some(PathBuf::from("/tmp/logs")));
            }
            other => panic!("expected grab, got {other:?}"),
        }
    }

    #[test]
    fn test_coordinate_flag_is_required() {
        let result = Cli::try_parse_from(["hcplog", "-l", "eu1.hana.ondemand.com"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level() {
        let quiet = parse(&["hcplog", "-c", "a:b", "-l", "h.example.com", "-q"]);
        let verbose = parse(&["hcplog", "-c", "a:b", "-l", "h.example.com", "-v"]);
        let default = parse(&["hcplog", "-c", "a:b", "-l", "h.example.com"]);

        assert_eq!(quiet.log_level(), tracing::Level::ERROR);
        assert_eq!(verbose.log_level(), tracing::Level::INFO);
        assert_eq!(default.log_level(), tracing::Level::WARN);
    }
}
