use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::fmt::Debug;

use flume::Sender;

use crate::{Slot, State};

/// `(state ids, compute ids)` a compute reads.
pub type ComputeDeps = (Vec<TypeId>, Vec<TypeId>);

/// Derived value stored in a [`crate::StateCtx`].
///
/// `compute` must not mutate anything directly: it publishes its new value
/// through the [`Updater`], and a compute that publishes nothing leaves its
/// dependents untouched. Side effects (network) belong in commands.
pub trait Compute: Any + Debug {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);

    /// Owned copy handed to commands through a `CommandSnapshot`.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}

/// Standard `assign_box` body for computes.
pub fn assign_impl<T: Any>(target: &mut T, new_self: Box<dyn Any + Send>) {
    crate::state_assign_impl(target, new_self);
}

/// Read-only view of the registered states and computes given to `Compute::compute`.
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, Slot<dyn State>>,
    computes: &'a BTreeMap<TypeId, Slot<dyn Compute>>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, Slot<dyn State>>,
        computes: &'a BTreeMap<TypeId, Slot<dyn Compute>>,
    ) -> Self {
        Self { states, computes }
    }

    /// # Panics
    /// Panics if `T` was never registered with `add_state`.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("State {} is not registered", std::any::type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was never registered with `record_compute`.
    pub fn get_compute_ref<T: Compute>(&self) -> &'a T {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("Compute {} is not registered", std::any::type_name::<T>()))
    }
}

/// Send-able handle that publishes new compute values.
///
/// Values are queued on a channel and applied on the UI thread by
/// `StateCtx::sync_computes`.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<(TypeId, Box<dyn Any + Send>)>,
}

impl Updater {
    pub(crate) fn new(send: Sender<(TypeId, Box<dyn Any + Send>)>) -> Self {
        Self { send }
    }

    pub fn set<T: Compute + Send>(&self, value: T) {
        if self
            .send
            .send((TypeId::of::<T>(), Box::new(value)))
            .is_err()
        {
            log::warn!(
                "Dropped update for {}: state context is gone",
                std::any::type_name::<T>()
            );
        }
    }
}
