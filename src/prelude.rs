//! Prelude re-exporting the items most integrations need
//!
//! ```rust,no_run
//! use hcplog::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let credentials = Credentials::new("ada", "s3cret");
//!     let config = Config::new("acme", "eu1.hana.ondemand.com", credentials)?;
//!     let client = HcpClient::new(config)?;
//!
//!     let listing = client.list_files("myapp").await?;
//!     println!("{}", render_file_table(&listing));
//!     Ok(())
//! }
//! ```

pub use crate::app::{
    render_file_table, ClientConfig, Config, Endpoints, GrabReport, HcpClient, LogFileInfo,
};
pub use crate::auth::Credentials;
pub use crate::errors::{AppError, Result};
