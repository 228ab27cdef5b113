//! Error types for hcplog
//!
//! One error enum per component, composed into a top-level [`AppError`].
//! Nothing here retries: every error is terminal for the operation that
//! raised it and bubbles up to the CLI unchanged.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors, raised before any network call
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Landscape host is empty or not a plain DNS name
    #[error("landscape host '{host}' is not valid: {reason}")]
    InvalidHost { host: String, reason: String },

    /// Coordinate did not split into account and application
    #[error("invalid coordinate '{coord}': expected the form account:application")]
    InvalidCoordinate { coord: String },
}

/// Credential resolution errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user from the -u flag, HCP_USERNAME, or the OS user
    #[error("cannot determine user. Pass -u or set HCP_USERNAME")]
    MissingUser,

    /// Reading the password from the terminal failed
    #[error("cannot read password from standard input")]
    PasswordPrompt(#[from] std::io::Error),

    /// An empty password was entered at the prompt
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Transport failures for a single HTTP request
#[derive(Error, Debug)]
pub enum TransportError {
    /// Building the HTTP client failed
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// Connection or protocol failure before a response arrived
    #[error("GET {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-200 status
    #[error("GET {url} returned HTTP {status} {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },
}

/// Listing payload decode failures
#[derive(Error, Debug)]
pub enum PayloadError {
    /// The body is not the expected `logFiles` object
    #[error("malformed log file listing")]
    Malformed(#[from] serde_json::Error),
}

/// Listing failures, carrying the coordinate they were raised for
#[derive(Error, Debug)]
pub enum ListError {
    /// The listing request itself failed
    #[error("failed to list log files for {account}:{application}")]
    Transport {
        account: String,
        application: String,
        #[source]
        source: TransportError,
    },

    /// The listing response could not be decoded
    #[error("failed to decode log file listing for {account}:{application}")]
    Payload {
        account: String,
        application: String,
        #[source]
        source: PayloadError,
    },
}

/// Grab (match-and-download) failures
#[derive(Error, Debug)]
pub enum GrabError {
    /// A glob pattern did not compile; nothing is downloaded
    #[error("invalid glob pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Downloading one matched file failed
    #[error("failed to download {name}")]
    Download {
        name: String,
        #[source]
        source: TransportError,
    },

    /// Writing one downloaded file to disk failed
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Summary raised after all matches were attempted
    #[error("{failed} of {attempted} matched log files failed to download")]
    Partial { failed: usize, attempted: usize },
}

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    List(#[from] ListError),

    #[error(transparent)]
    Grab(#[from] GrabError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::Auth(_) => "auth",
            AppError::Transport(_) => "transport",
            AppError::Payload(_) => "payload",
            AppError::List(_) => "list",
            AppError::Grab(_) => "grab",
            AppError::Io(_) => "io",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Credential resolution result type alias
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Transport result type alias
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Payload result type alias
pub type PayloadResult<T> = std::result::Result<T, PayloadError>;

/// Listing result type alias
pub type ListResult<T> = std::result::Result<T, ListError>;

/// Grab result type alias
pub type GrabResult<T> = std::result::Result<T, GrabError>;
