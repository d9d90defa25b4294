use std::any::{Any, type_name};
use std::fmt::Debug;

/// Plain, UI-owned data stored in a [`crate::StateCtx`].
///
/// States are only ever written on the UI thread through
/// `StateCtx::state_mut` / `StateCtx::update`, which marks them dirty so that
/// dependent computes rerun on the next `run_computed` pass.
pub trait State: Any + Debug {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Owned copy handed to commands through a `CommandSnapshot`.
    ///
    /// States that commands never read can keep the default.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}

/// Replaces `target` with `new_self` when the boxed value has the same type.
pub fn state_assign_impl<T: Any>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => log::warn!("Ignored assignment with mismatched type for {}", type_name::<T>()),
    }
}

/// Wall clock as seen by computes.
///
/// The app advances it once per frame; tests set it explicitly, which keeps
/// time-based computes (debounce) deterministic.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    virt: chrono::DateTime<chrono::Utc>,
}

impl Default for Time {
    fn default() -> Self {
        Self {
            virt: chrono::Utc::now(),
        }
    }
}

impl Time {
    pub fn at(now: chrono::DateTime<chrono::Utc>) -> Self {
        Self { virt: now }
    }

    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.virt
    }

    pub fn set(&mut self, now: chrono::DateTime<chrono::Utc>) {
        self.virt = now;
    }
}

impl AsRef<chrono::DateTime<chrono::Utc>> for Time {
    fn as_ref(&self) -> &chrono::DateTime<chrono::Utc> {
        &self.virt
    }
}

impl AsMut<chrono::DateTime<chrono::Utc>> for Time {
    fn as_mut(&mut self) -> &mut chrono::DateTime<chrono::Utc> {
        &mut self.virt
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }
}
