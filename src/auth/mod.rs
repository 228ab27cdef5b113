//! Credential handling for basic-auth requests
//!
//! Resolution order mirrors the CLI contract: explicit flags win, then the
//! `HCP_USERNAME`/`HCP_PASSWORD` environment variables (a local `.env` is
//! loaded at startup), then the OS user name or an interactive prompt.

pub mod credentials;

pub use credentials::{resolve_credentials, resolve_password, resolve_user, Credentials};
