//! hcplog CLI application
//!
//! Lists and downloads application log files from a cloud platform
//! landscape over its basic-auth log API.

use std::error::Error;
use std::process;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use hcplog::cli::{handle_grab, handle_list, Cli, Commands};
use hcplog::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse_args();
    init_logging(&cli);

    info!("hcplog v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command() {
        Commands::List => handle_list(&cli.global).await,
        Commands::Grab(args) => handle_grab(&cli.global, &args).await,
    }
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("hcplog={}", cli.log_level()).parse().unwrap());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
