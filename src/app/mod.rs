//! Core application modules
//!
//! Leaf-first: `endpoints` derives service URLs from a landscape host,
//! `models` decodes listing payloads, `grab` selects files by glob,
//! `report` renders listings, and `client` composes them into the
//! account-scoped [`HcpClient`].

pub mod client;
pub mod endpoints;
pub mod grab;
pub mod models;
pub mod report;

pub use client::{ClientConfig, Config, HcpClient};
pub use endpoints::Endpoints;
pub use grab::{Downloaded, GrabFailure, GrabReport};
pub use models::{parse_log_list, LogFileInfo};
pub use report::render_file_table;
