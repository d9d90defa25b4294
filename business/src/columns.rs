use std::any::Any;

use userboard_states::State;

/// Table columns in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Email,
    Company,
    Phone,
    Website,
    Address,
}

impl Column {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Email,
        Self::Company,
        Self::Phone,
        Self::Website,
        Self::Address,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Company => "Company",
            Self::Phone => "Phone",
            Self::Website => "Website",
            Self::Address => "Address",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Which columns the table shows. All visible by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnVisibility {
    visible: [bool; Column::ALL.len()],
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self {
            visible: [true; Column::ALL.len()],
        }
    }
}

impl ColumnVisibility {
    pub fn is_visible(&self, column: Column) -> bool {
        self.visible[column.index()]
    }

    pub fn set(&mut self, column: Column, visible: bool) {
        self.visible[column.index()] = visible;
    }

    pub fn toggle(&mut self, column: Column) {
        let slot = &mut self.visible[column.index()];
        *slot = !*slot;
    }

    /// Visible columns in display order.
    pub fn visible(&self) -> impl Iterator<Item = Column> + '_ {
        Column::ALL.into_iter().filter(|c| self.is_visible(*c))
    }
}

impl State for ColumnVisibility {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
