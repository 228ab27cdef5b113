//! User and password resolution
//!
//! The password is kept inside [`Credentials`] only; `Debug` output masks
//! it, so credentials can be logged without leaking secret material.

use std::env;
use std::fmt;

use crate::constants::env as env_constants;
use crate::errors::{AuthError, AuthResult};

/// Basic-auth credentials
#[derive(Clone)]
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Password masked with one `*` per character, the tool's display
    /// contract for configuration output
    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.chars().count())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &self.masked_password())
            .finish()
    }
}

/// Resolves the user: `-u` flag, then `HCP_USERNAME`, then the OS `USER`
pub fn resolve_user(flag: Option<&str>) -> AuthResult<String> {
    if let Some(user) = non_empty(flag) {
        return Ok(user);
    }
    if let Some(user) = non_empty(env::var(env_constants::USERNAME).ok().as_deref()) {
        return Ok(user);
    }
    if let Some(user) = non_empty(env::var(env_constants::FALLBACK_USER).ok().as_deref()) {
        return Ok(user);
    }
    Err(AuthError::MissingUser)
}

/// Resolves the password: `-p` flag, then `HCP_PASSWORD`, then a prompt on
/// the controlling terminal
pub fn resolve_password(flag: Option<&str>) -> AuthResult<String> {
    if let Some(password) = flag {
        return Ok(password.to_string());
    }
    if let Some(password) = non_empty(env::var(env_constants::PASSWORD).ok().as_deref()) {
        return Ok(password);
    }

    let password = rpassword::prompt_password("Password: ")?;
    if password.is_empty() {
        return Err(AuthError::EmptyPassword);
    }
    Ok(password)
}

/// Resolves both halves of the credentials from optional CLI flags
pub fn resolve_credentials(
    user_flag: Option<&str>,
    password_flag: Option<&str>,
) -> AuthResult<Credentials> {
    let user = resolve_user(user_flag)?;
    let password = resolve_password(password_flag)?;
    Ok(Credentials::new(user, password))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
