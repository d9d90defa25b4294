//! Users collection: the one-shot fetch command and the compute that caches its result.
//!
//! Fetching is a side effect, so it lives in [`FetchUsersCommand`] rather than in a
//! compute: computes can run implicitly on any dirty propagation. The command is
//! enqueued once at startup and publishes into [`UsersCompute`] through the `Updater`.
//!
//! Register once during app setup:
//! - `ctx.record_compute(UsersCompute::default());`
//! - `ctx.record_command(FetchUsersCommand);`
//!
//! Then `ctx.enqueue_command::<FetchUsersCommand>()` and `ctx.flush_commands()`.

use std::any::Any;
use std::sync::Arc;

use log::{error, info};
use thiserror::Error;
use userboard_states::{
    Command, CommandFuture, CommandSnapshot, Compute, ComputeDeps, Dep, Updater, assign_impl,
};

use crate::http::{Client, HttpError};
use crate::{BusinessConfig, User};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to reach users endpoint: {0}")]
    Request(String),
    #[error("Users endpoint returned status {0}")]
    Status(u16),
    #[error("Failed to decode users: {0}")]
    Decode(String),
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        Self::Request(err.message)
    }
}

/// Reads the full users collection from the configured endpoint.
///
/// A single GET without retry or timeout; any failure is terminal.
pub async fn load(config: &BusinessConfig) -> Result<Vec<User>, FetchError> {
    let response = Client::get(config.users_url())
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.is_success() {
        return Err(FetchError::Status(response.status));
    }

    response
        .json::<Vec<User>>()
        .map_err(|err| FetchError::Decode(err.to_string()))
}

/// Lifecycle of the users collection: `Loading -> Ready | Failed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UsersStatus {
    #[default]
    Loading,
    Ready(Arc<[User]>),
    Failed(String),
}

/// Raw users collection, written only by [`FetchUsersCommand`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersCompute {
    pub status: UsersStatus,
}

impl UsersCompute {
    pub fn ready(users: impl Into<Arc<[User]>>) -> Self {
        Self {
            status: UsersStatus::Ready(users.into()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: UsersStatus::Failed(message.into()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, UsersStatus::Loading)
    }

    /// Fetched users, empty until the fetch succeeds.
    pub fn users(&self) -> &[User] {
        match &self.status {
            UsersStatus::Ready(users) => users,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            UsersStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl Compute for UsersCompute {
    fn deps(&self) -> ComputeDeps {
        (vec![], vec![])
    }

    // Updated only by `FetchUsersCommand`.
    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Fetches the users collection once and publishes the outcome into [`UsersCompute`].
#[derive(Debug, Default)]
pub struct FetchUsersCommand;

impl Command for FetchUsersCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let config = snap.state::<BusinessConfig>().clone();

        Box::pin(async move {
            info!("FetchUsersCommand: fetching users from {}", config.users_url());

            match load(&config).await {
                Ok(users) => {
                    info!("FetchUsersCommand: fetched {} users", users.len());
                    updater.set(UsersCompute::ready(users));
                }
                Err(err) => {
                    error!("FetchUsersCommand: {err}");
                    updater.set(UsersCompute::failed(err.to_string()));
                }
            }
        })
    }
}
