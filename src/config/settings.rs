use std::env;
use std::fmt;
use crate::error::QuobyteError;
use serde::{Deserialize, Serialize};
use url::Url;

pub const ENV_API_URL: &str = "QUOBYTE_API_URL";
pub const ENV_API_USER: &str = "QUOBYTE_API_USER";
pub const ENV_API_PASSWORD: &str = "QUOBYTE_API_PASSWORD";
pub const ENV_TIMEOUT_SECS: &str = "QUOBYTE_API_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "QUOBYTE_API_CONNECT_TIMEOUT_SECS";

/// Connection settings for a Quobyte API endpoint.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuobyteSettings {
    pub url: String,
    pub username: String,
    pub password: String,
    /// Whole-request timeout applied by the transport. `None` means no limit.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl fmt::Debug for QuobyteSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuobyteSettings")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl QuobyteSettings {
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
            timeout_secs: None,
            connect_timeout_secs: None,
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn with_connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = Some(secs);
        self
    }

    pub fn from_env() -> Result<Self, QuobyteError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup, using the same variable
    /// names as [`QuobyteSettings::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, QuobyteError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(ENV_API_URL)
            .ok_or_else(|| QuobyteError::Configuration(format!("{} must be set", ENV_API_URL)))?;

        let username = lookup(ENV_API_USER)
            .ok_or_else(|| QuobyteError::Configuration(format!("{} must be set", ENV_API_USER)))?;

        let password = lookup(ENV_API_PASSWORD)
            .ok_or_else(|| QuobyteError::Configuration(format!("{} must be set", ENV_API_PASSWORD)))?;

        let timeout_secs = parse_secs(ENV_TIMEOUT_SECS, lookup(ENV_TIMEOUT_SECS))?;
        let connect_timeout_secs =
            parse_secs(ENV_CONNECT_TIMEOUT_SECS, lookup(ENV_CONNECT_TIMEOUT_SECS))?;

        let settings = Self {
            url,
            username,
            password,
            timeout_secs,
            connect_timeout_secs,
        };
        settings.validate()?;

        Ok(settings)
    }

    /// Checks that the URL is an absolute http(s) URL and the username is set.
    pub fn validate(&self) -> Result<(), QuobyteError> {
        let parsed = Url::parse(&self.url).map_err(|e| {
            QuobyteError::Configuration(format!("{} must be a valid URL: {}", ENV_API_URL, e))
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(QuobyteError::Configuration(format!(
                "{} must use http or https, got {}",
                ENV_API_URL,
                parsed.scheme()
            )));
        }

        if self.username.is_empty() {
            return Err(QuobyteError::Configuration(format!("{} must not be empty", ENV_API_USER)));
        }

        Ok(())
    }
}

fn parse_secs(name: &str, value: Option<String>) -> Result<Option<u64>, QuobyteError> {
    match value {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Some(secs)),
            _ => Err(QuobyteError::Configuration(format!(
                "{} must be a positive number of seconds",
                name
            ))),
        },
    }
}
