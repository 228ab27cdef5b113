//! Command handlers for the hcplog CLI
//!
//! Bridges parsed arguments to the client: resolves credentials, builds the
//! client, runs the requested operation, and shapes the terminal output.

use std::env;

use tracing::{debug, info};

use crate::app::{render_file_table, Config, HcpClient};
use crate::auth::resolve_credentials;
use crate::cli::{GlobalArgs, GrabArgs};
use crate::errors::{AppError, Result};

/// Handle the list command
pub async fn handle_list(global: &GlobalArgs) -> Result<()> {
    let client = build_client(global)?;
    let listing = client.list_files(&global.coordinate.application).await?;

    if listing.is_empty() {
        println!("No log files for {}", global.coordinate);
        return Ok(());
    }
    println!("{}", render_file_table(&listing));
    Ok(())
}

/// Handle the grab command
pub async fn handle_grab(global: &GlobalArgs, args: &GrabArgs) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir()?,
    };

    let client = build_client(global)?;
    let report = client
        .grab_files(&global.coordinate.application, &args.patterns, &output_dir)
        .await?;

    for file in &report.downloaded {
        println!("Downloaded {}", file.path.display());
    }
    for failure in &report.failures {
        eprintln!("Failed {}: {}", failure.name, failure.cause);
    }
    if report.attempted() == 0 {
        println!(
            "No log files of {} match {}",
            global.coordinate,
            args.patterns.join(" ")
        );
        return Ok(());
    }

    info!(
        "grabbed {} of {} matched log files",
        report.downloaded.len(),
        report.attempted()
    );

    match report.partial_error() {
        Some(error) => Err(AppError::Grab(error)),
        None => Ok(()),
    }
}

fn build_client(global: &GlobalArgs) -> Result<HcpClient> {
    let credentials = resolve_credentials(global.user.as_deref(), global.password.as_deref())?;
    let config = Config::new(&global.coordinate.account, &global.landscape_host, credentials)?;
    debug!("configured {}", config);
    HcpClient::new(config)
}
