use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::PublishError;
use crate::telemetry::log::LogManager;

pub const USERNAME_ENV: &str = "PLOTLY_USERNAME";
pub const API_KEY_ENV: &str = "PLOTLY_API_KEY";

/// Account used to sign uploads.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    /// Credentials from `PLOTLY_USERNAME` / `PLOTLY_API_KEY`.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let username = lookup(USERNAME_ENV).filter(|v| !v.is_empty());
        let api_key = lookup(API_KEY_ENV).filter(|v| !v.is_empty());
        match (username, api_key) {
            (Some(username), Some(api_key)) => Some(Self::new(username, api_key)),
            (Some(_), None) => {
                LogManager::new("Credentials")
                    .caution(&format!("{} is set but {} is not", USERNAME_ENV, API_KEY_ENV));
                None
            }
            (None, Some(_)) => {
                LogManager::new("Credentials")
                    .caution(&format!("{} is set but {} is not", API_KEY_ENV, USERNAME_ENV));
                None
            }
            (None, None) => None,
        }
    }

    /// `~/.plotly/.credentials`, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".plotly").join(".credentials"))
    }

    /// Read the JSON credentials file (`{"username": .., "api_key": ..}`).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PublishError> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|e| {
            PublishError::Auth(format!("reading credentials {}: {}", path_ref.display(), e))
        })?;
        let credentials: Credentials = serde_json::from_str(&contents).map_err(|e| {
            PublishError::Auth(format!("parsing credentials {}: {}", path_ref.display(), e))
        })?;
        credentials.validated()
    }

    /// Environment first, then the default credentials file.
    pub fn discover() -> Result<Self, PublishError> {
        Self::discover_with(|key| std::env::var(key).ok(), Self::default_path())
    }

    fn discover_with(
        lookup: impl Fn(&str) -> Option<String>,
        file: Option<PathBuf>,
    ) -> Result<Self, PublishError> {
        if let Some(credentials) = Self::from_lookup(lookup) {
            return Ok(credentials);
        }
        match file {
            Some(path) => Self::from_file(path),
            None => Err(PublishError::Auth(format!(
                "no credentials: set {} and {}",
                USERNAME_ENV, API_KEY_ENV
            ))),
        }
    }

    fn validated(self) -> Result<Self, PublishError> {
        if self.username.is_empty() || self.api_key.is_empty() {
            return Err(PublishError::Auth(
                "credentials need a username and an api_key".into(),
            ));
        }
        Ok(self)
    }
}
