//! Log client scoped to one account
//!
//! [`HcpClient`] composes the derived endpoints, the authenticated
//! transport, and the listing parser, and carries the grab
//! (match-and-download) flow. All operations are sequential: one network
//! call at a time, no retries.
//!
//! The module is organized into:
//! - `config`: client configuration and HTTP client building
//! - `http`: the authenticated GET primitive

use std::path::{Path, PathBuf};

use crate::app::grab::{
    compile_patterns, select_matches, unmatched_patterns, Downloaded, GrabFailure, GrabReport,
};
use crate::app::models::{parse_log_list, LogFileInfo};
use crate::constants::files;
use crate::errors::{GrabError, GrabResult, ListError, ListResult, Result};

pub mod config;
pub mod http;

pub use config::{ClientConfig, Config};

use http::HttpHandler;

/// Log client for one account on one landscape
#[derive(Debug)]
pub struct HcpClient {
    config: Config,
    http: HttpHandler,
}

impl HcpClient {
    /// Creates a client with default HTTP tuning
    pub fn new(config: Config) -> Result<Self> {
        Self::with_client_config(config, ClientConfig::default())
    }

    /// Creates a client with custom HTTP tuning
    pub fn with_client_config(config: Config, client_config: ClientConfig) -> Result<Self> {
        let client = client_config.build_http_client()?;
        Ok(Self {
            config,
            http: HttpHandler::new(client),
        })
    }

    /// Configuration the client was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lists the log files of an application, in server order.
    ///
    /// A single attempt: transport and decode failures are terminal and
    /// come back wrapped with the coordinate they were raised for.
    pub async fn list_files(&self, application: &str) -> ListResult<Vec<LogFileInfo>> {
        let account = self.config.account();
        let url = self.config.endpoints().list_url(account, application);

        let body = self
            .http
            .get(&url, self.config.credentials())
            .await
            .map_err(|source| ListError::Transport {
                account: account.to_string(),
                application: application.to_string(),
                source,
            })?;

        let listing = parse_log_list(&body).map_err(|source| ListError::Payload {
            account: account.to_string(),
            application: application.to_string(),
            source,
        })?;

        tracing::debug!(
            "listed {} log files for {}:{}",
            listing.len(),
            account,
            application
        );
        Ok(listing)
    }

    /// Downloads one log file into `output_dir`, overwriting any existing
    /// file of the same name.
    ///
    /// The body lands in a temp file first and is renamed into place, so a
    /// torn download never clobbers a previous copy.
    pub async fn download_file(
        &self,
        application: &str,
        name: &str,
        output_dir: &Path,
    ) -> GrabResult<PathBuf> {
        let url = self
            .config
            .endpoints()
            .file_url(self.config.account(), application, name);

        let body = self
            .http
            .get(&url, self.config.credentials())
            .await
            .map_err(|source| GrabError::Download {
                name: name.to_string(),
                source,
            })?;

        let path = output_dir.join(name);
        let temp_path = output_dir.join(format!("{name}{}", files::TEMP_FILE_SUFFIX));

        tokio::fs::write(&temp_path, &body)
            .await
            .map_err(|source| GrabError::Write {
                path: temp_path.clone(),
                source,
            })?;
        tokio::fs::rename(&temp_path, &path)
            .await
            .map_err(|source| GrabError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::info!("downloaded {} ({} bytes)", path.display(), body.len());
        Ok(path)
    }

    /// Lists once, selects the descriptors matching the patterns, and
    /// downloads each match in order.
    ///
    /// Continue-and-collect: a failed download is recorded in the report
    /// and the remaining matches still run. Invalid patterns and listing
    /// failures are fatal before the first download.
    pub async fn grab_files(
        &self,
        application: &str,
        patterns: &[String],
        output_dir: &Path,
    ) -> Result<GrabReport> {
        let compiled = compile_patterns(patterns)?;
        let listing = self.list_files(application).await?;

        for pattern in unmatched_patterns(&compiled, &listing) {
            tracing::warn!("pattern '{}' matched no log file", pattern.as_str());
        }

        let mut report = GrabReport::default();
        for file in select_matches(&compiled, &listing) {
            match self.download_file(application, &file.name, output_dir).await {
                Ok(path) => report.downloaded.push(Downloaded {
                    name: file.name.clone(),
                    path,
                }),
                Err(cause) => {
                    tracing::warn!("failed to download {}: {}", file.name, cause);
                    report.failures.push(GrabFailure {
                        name: file.name.clone(),
                        cause,
                    });
                }
            }
        }

        Ok(report)
    }
}
