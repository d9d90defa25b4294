use std::time::Duration;

use chrono::{DateTime, Utc};

/// Settling delay of the search field.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// A value that only becomes visible after its input has been quiet for `delay`.
///
/// Time is passed in explicitly so callers drive it from the `Time` state.
#[derive(Debug, Clone, PartialEq)]
pub struct Debounced<T> {
    delay: Duration,
    pending: T,
    settled: T,
    last_input: Option<DateTime<Utc>>,
}

impl<T: Clone + PartialEq + Default> Default for Debounced<T> {
    fn default() -> Self {
        Self::new(T::default(), SEARCH_DEBOUNCE)
    }
}

impl<T: Clone + PartialEq> Debounced<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            delay,
            pending: initial.clone(),
            settled: initial,
            last_input: None,
        }
    }

    /// Records a new raw value and restarts the timer.
    ///
    /// A previous value whose delay already elapsed is settled first, so it
    /// stays visible while the new one is pending.
    pub fn input(&mut self, value: T, now: DateTime<Utc>) {
        self.settle(now);
        self.pending = value;
        self.last_input = Some(now);
    }

    /// Promotes the pending value once the delay has elapsed.
    ///
    /// Returns true if the settled value changed.
    pub fn settle(&mut self, now: DateTime<Utc>) -> bool {
        if self.remaining(now).is_some() {
            return false;
        }
        self.last_input = None;
        if self.pending == self.settled {
            return false;
        }
        self.settled = self.pending.clone();
        true
    }

    /// The settled value as of `now`, without mutating.
    pub fn settled_at(&self, now: DateTime<Utc>) -> &T {
        if self.remaining(now).is_some() {
            &self.settled
        } else {
            &self.pending
        }
    }

    #[cfg(test)]
    fn settled(&self) -> &T {
        &self.settled
    }

    /// The raw value, as typed.
    pub fn pending(&self) -> &T {
        &self.pending
    }

    /// Time left before the pending value settles, or `None` if nothing is waiting.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        let last = self.last_input?;
        let elapsed = (now - last).to_std().unwrap_or(Duration::ZERO);
        self.delay.checked_sub(elapsed).filter(|left| !left.is_zero())
    }
}
