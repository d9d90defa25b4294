use std::any::Any;

use userboard_states::State;

/// The user whose details row is expanded, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowDetails {
    expanded: Option<u64>,
}

impl RowDetails {
    pub fn is_expanded(&self, user_id: u64) -> bool {
        self.expanded == Some(user_id)
    }

    pub fn expanded(&self) -> Option<u64> {
        self.expanded
    }

    /// Expands `user_id`, or collapses it if it is already expanded.
    pub fn toggle(&mut self, user_id: u64) {
        self.expanded = if self.is_expanded(user_id) {
            None
        } else {
            Some(user_id)
        };
    }
}

impl State for RowDetails {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_same_row_collapses() {
        let mut details = RowDetails::default();
        details.toggle(3);
        assert!(details.is_expanded(3));

        details.toggle(3);
        assert_eq!(details.expanded(), None);
    }

    #[test]
    fn toggle_other_row_moves_expansion() {
        let mut details = RowDetails::default();
        details.toggle(3);
        details.toggle(7);

        assert!(!details.is_expanded(3));
        assert!(details.is_expanded(7));
    }
}
