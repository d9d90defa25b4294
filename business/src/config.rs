use std::any::Any;

use serde::Deserialize;
use thiserror::Error;
use userboard_states::State;

/// Endpoint the dashboard reads its users from.
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(String),
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    userboard_users_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub users_url: String,
}

impl BusinessConfig {
    pub fn new(users_url: impl Into<String>) -> Self {
        Self {
            users_url: users_url.into(),
        }
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }

    /// Reads `USERBOARD_USERS_URL`, falling back to [`DEFAULT_USERS_URL`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<S: AsRef<str>>(
        vars: impl IntoIterator<Item = (S, S)>,
    ) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            serde_env::from_iter(vars).map_err(|err| ConfigError::Env(err.to_string()))?;

        Ok(raw
            .userboard_users_url
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty())
            .map(Self::new)
            .unwrap_or_default())
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USERS_URL)
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send + 'static>> {
        Some(Box::new(self.clone()))
    }
}
