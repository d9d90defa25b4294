use std::any::Any;

use userboard_states::State;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeState {
    #[default]
    Dark,
    Light,
}

impl ThemeState {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        };
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Label of the button that switches away from the current theme.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Dark => "Switch to Light Mode",
            Self::Light => "Switch to Dark Mode",
        }
    }
}

impl State for ThemeState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
