use std::any::{Any, TypeId, type_name};
use std::collections::{BTreeMap, BTreeSet};

use flume::{Receiver, Sender};
use log::{debug, error, trace};

use crate::{
    Command, CommandSnapshot, Compute, Dep, Graph, State, StateSyncStatus, TopologyError, Updater,
};

pub(crate) struct Slot<T: ?Sized> {
    pub(crate) value: Box<T>,
    pub(crate) status: StateSyncStatus,
}

impl<T: ?Sized> Slot<T> {
    fn new(value: Box<T>) -> Self {
        Self {
            value,
            status: StateSyncStatus::Init,
        }
    }
}

/// Owner of every state, compute and command of the application.
///
/// Typical frame:
/// 1. `sync_computes()` applies values published by finished commands.
/// 2. UI reads with `state` / `cached` and writes with `state_mut` / `update`.
/// 3. `flush_commands()` starts queued commands.
/// 4. `run_computed()` reruns every compute downstream of a change.
pub struct StateCtx {
    states: BTreeMap<TypeId, Slot<dyn State>>,
    computes: BTreeMap<TypeId, Slot<dyn Compute>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    queued: Vec<TypeId>,

    graph: Graph<TypeId>,
    order: Option<Vec<TypeId>>,

    send: Sender<(TypeId, Box<dyn Any + Send>)>,
    recv: Receiver<(TypeId, Box<dyn Any + Send>)>,

    #[cfg(not(target_arch = "wasm32"))]
    tasks: tokio::task::JoinSet<()>,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("queued", &self.queued.len())
            .finish_non_exhaustive()
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            queued: Vec::new(),
            graph: Graph::new(),
            order: None,
            send,
            recv,
            #[cfg(not(target_arch = "wasm32"))]
            tasks: tokio::task::JoinSet::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.graph.add_node(id);
        self.order = None;
        let value: Box<dyn State> = Box::new(state);
        self.states.insert(id, Slot::new(value));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        let (state_ids, compute_ids) = compute.deps();

        self.graph.add_node(id);
        for dep in state_ids.into_iter().chain(compute_ids) {
            self.graph.route_to(dep, id, ());
        }
        self.order = None;
        let value: Box<dyn Compute> = Box::new(compute);
        self.computes.insert(id, Slot::new(value));
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    /// Checks that the registered computes form a DAG.
    pub fn verify_deps(&self) -> Result<(), TopologyError<TypeId>> {
        self.graph.topology_sort().map(|_| ())
    }

    /// # Panics
    /// Panics if `T` was never registered with `add_state`.
    pub fn state<T: State>(&self) -> &T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    /// Mutable access; marks the state dirty even if the caller does not change it.
    ///
    /// # Panics
    /// Panics if `T` was never registered with `add_state`.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let slot = self
            .states
            .get_mut(&TypeId::of::<T>())
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()));
        slot.status = StateSyncStatus::Dirty;
        slot.value
            .as_any_mut()
            .downcast_mut::<T>()
            .unwrap_or_else(|| panic!("State {} has a mismatched type", type_name::<T>()))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if `T` was never registered with `record_compute`.
    pub fn compute<T: Compute>(&self) -> &T {
        self.cached::<T>()
            .unwrap_or_else(|| panic!("Compute {} is not registered", type_name::<T>()))
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Applies every value published through an [`Updater`] since the last call.
    pub fn sync_computes(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        while let Some(joined) = self.tasks.try_join_next() {
            if let Err(err) = joined {
                error!("Command task failed: {err}");
            }
        }

        self.apply_updates();
    }

    fn apply_updates(&mut self) -> BTreeSet<TypeId> {
        let mut applied = BTreeSet::new();
        while let Ok((id, value)) = self.recv.try_recv() {
            match self.computes.get_mut(&id) {
                Some(slot) => {
                    slot.value.assign_box(value);
                    slot.status = StateSyncStatus::Dirty;
                    applied.insert(id);
                }
                None => error!("Received update for unregistered compute {id:?}"),
            }
        }
        applied
    }

    fn compute_order(&mut self) -> Result<Vec<TypeId>, TopologyError<TypeId>> {
        if let Some(order) = &self.order {
            return Ok(order.clone());
        }
        let order = self.graph.topology_sort()?;
        self.order = Some(order.clone());
        Ok(order)
    }

    fn is_stale(&self, id: &TypeId) -> bool {
        self.states
            .get(id)
            .map(|slot| slot.status)
            .or_else(|| self.computes.get(id).map(|slot| slot.status))
            .is_some_and(StateSyncStatus::is_stale)
    }

    fn should_run(&self, slot: &Slot<dyn Compute>) -> bool {
        if slot.status == StateSyncStatus::Init {
            return true;
        }
        let (state_ids, compute_ids) = slot.value.deps();
        state_ids
            .iter()
            .chain(compute_ids.iter())
            .any(|dep| self.is_stale(dep))
    }

    /// Reruns, in dependency order, every compute with a stale input.
    ///
    /// Each compute's published value is applied before its dependents are
    /// considered, so a single pass propagates a change through the whole graph.
    pub fn run_computed(&mut self) {
        let order = match self.compute_order() {
            Ok(order) => order,
            Err(err) => {
                error!("Cannot run computes: {err}");
                return;
            }
        };

        let mut visited = BTreeSet::new();
        let mut late = BTreeSet::new();

        for id in order {
            let Some(slot) = self.computes.get(&id) else {
                continue;
            };
            if !self.should_run(slot) {
                visited.insert(id);
                continue;
            }

            trace!("Running compute {:?}", slot.value);
            slot.value
                .compute(Dep::new(&self.states, &self.computes), self.updater());

            // A dirty compute keeps signalling its dependents.
            if let Some(slot) = self.computes.get_mut(&id)
                && slot.status == StateSyncStatus::Init
            {
                slot.status = StateSyncStatus::Clean;
            }
            visited.insert(id);

            // Async results for an already visited compute arrive too late for
            // its dependents in this pass; keep them dirty for the next one.
            for applied in self.apply_updates() {
                if applied != id && visited.contains(&applied) {
                    late.insert(applied);
                }
            }
        }

        for slot in self.states.values_mut() {
            slot.status = StateSyncStatus::Clean;
        }
        for (id, slot) in &mut self.computes {
            if !late.contains(id) {
                slot.status = StateSyncStatus::Clean;
            }
        }
    }

    pub fn enqueue_command<T: Command>(&mut self) {
        self.queued.push(TypeId::of::<T>());
    }

    fn snapshot(&self) -> CommandSnapshot {
        let states = self
            .states
            .iter()
            .filter_map(|(id, slot)| slot.value.snapshot().map(|snap| (*id, snap)))
            .collect();
        let computes = self
            .computes
            .iter()
            .filter_map(|(id, slot)| slot.value.snapshot().map(|snap| (*id, snap)))
            .collect();
        CommandSnapshot::new(states, computes)
    }

    /// Starts every queued command.
    ///
    /// On native the futures run on the ambient tokio runtime; without one the
    /// command is dropped and logged. On wasm they run on the JS event loop.
    pub fn flush_commands(&mut self) {
        for id in std::mem::take(&mut self.queued) {
            let Some(command) = self.commands.get(&id) else {
                error!("Command {id:?} was enqueued but never recorded");
                continue;
            };
            debug!("Dispatching command {command:?}");
            let future = command.run(self.snapshot(), self.updater());
            self.spawn(future);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn(&mut self, future: crate::CommandFuture) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                self.tasks.spawn_on(future, &handle);
            }
            Err(err) => error!("No tokio runtime to run command on: {err}"),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn(&mut self, future: crate::CommandFuture) {
        wasm_bindgen_futures::spawn_local(future);
    }

    /// Number of command tasks still running.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Waits for every running command and applies its results.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn await_tasks(&mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(err) = joined {
                error!("Command task failed: {err}");
            }
            self.apply_updates();
        }
        self.apply_updates();
    }
}
