use std::any::{Any, TypeId};

use chrono::{DateTime, Utc};
use userboard_states::{Compute, ComputeDeps, Dep, State, Time, Updater, assign_impl};

use crate::Debounced;

/// Search text as typed into the search field.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    text: Debounced<String>,
}

impl SearchInput {
    pub fn set_text(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        self.text.input(text.into(), now);
    }

    /// The raw text, including keystrokes that have not settled yet.
    pub fn text(&self) -> &str {
        self.text.pending()
    }

    pub fn debounced(&self) -> &Debounced<String> {
        &self.text
    }
}

impl State for SearchInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The search term the view pipeline filters by.
///
/// Follows [`SearchInput`] once the input has been quiet for the debounce
/// delay, and publishes only when the term actually changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettledSearchCompute {
    pub term: String,
}

impl Compute for SettledSearchCompute {
    fn deps(&self) -> ComputeDeps {
        (
            vec![TypeId::of::<SearchInput>(), TypeId::of::<Time>()],
            vec![],
        )
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let input = deps.get_state_ref::<SearchInput>();
        let time = deps.get_state_ref::<Time>();

        let settled = input.debounced().settled_at(time.now());
        if *settled != self.term {
            updater.set(Self {
                term: settled.clone(),
            });
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
