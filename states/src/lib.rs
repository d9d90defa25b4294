//! Reactive state container shared by the business and UI crates.
//!
//! - [`State`]: plain data written by the UI.
//! - [`Compute`]: derived data, rerun in dependency order when an input changes.
//! - [`Command`]: explicitly dispatched side effects (network IO).

mod command;
mod compute;
mod ctx;
mod graph;
mod state;
mod state_sync_status;

pub use command::{Command, CommandFuture, CommandSnapshot};
pub use compute::{Compute, ComputeDeps, Dep, Updater, assign_impl};
pub use ctx::StateCtx;
pub(crate) use ctx::Slot;
pub use graph::{DepRoute, Graph, TopologyError};
pub use state::{State, Time, state_assign_impl};
pub use state_sync_status::StateSyncStatus;
