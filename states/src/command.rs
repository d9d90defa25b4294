use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use crate::{Compute, State, Updater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Explicitly dispatched side effect.
///
/// Commands never run implicitly: they are enqueued with
/// `StateCtx::enqueue_command` and started by `StateCtx::flush_commands`.
/// They read an owned [`CommandSnapshot`] and report back through the
/// [`Updater`], so the returned future can run off the UI thread.
pub trait Command: Any + Debug {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture;
}

/// Owned copies of every state and compute that provides a snapshot.
#[derive(Debug, Default)]
pub struct CommandSnapshot {
    states: BTreeMap<TypeId, Box<dyn Any + Send>>,
    computes: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub(crate) fn new(
        states: BTreeMap<TypeId, Box<dyn Any + Send>>,
        computes: BTreeMap<TypeId, Box<dyn Any + Send>>,
    ) -> Self {
        Self { states, computes }
    }

    /// # Panics
    /// Panics if `T` is not registered or does not provide a snapshot.
    pub fn state<T: State>(&self) -> &T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .unwrap_or_else(|| panic!("State snapshot for {} is missing", type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` is not registered or does not provide a snapshot.
    pub fn compute<T: Compute>(&self) -> &T {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .unwrap_or_else(|| panic!("Compute snapshot for {} is missing", type_name::<T>()))
    }
}
