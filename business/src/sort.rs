use std::any::Any;
use std::cmp::Ordering;

use userboard_states::State;

use crate::User;

/// Columns the table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Email,
    Company,
}

impl SortKey {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Company];

    /// String value compared for this key; company sorts by its name.
    pub fn value_of<'a>(&self, user: &'a User) -> &'a str {
        match self {
            Self::Name => &user.name,
            Self::Email => &user.email,
            Self::Company => &user.company.name,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
    /// Fetch order.
    #[default]
    Reset,
}

impl SortDirection {
    pub const ALL: [Self; 3] = [Self::Reset, Self::Ascending, Self::Descending];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "A → Z",
            Self::Descending => "Z → A",
            Self::Reset => "Export Order",
        }
    }
}

/// Active sort; a `None` key or a `Reset` direction keeps fetch order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortDirective {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        let mut directive = Self::default();
        directive.apply(key, direction);
        directive
    }

    /// Selects `direction` for `key`; `Reset` clears the key.
    pub fn apply(&mut self, key: SortKey, direction: SortDirection) {
        self.direction = direction;
        self.key = match direction {
            SortDirection::Reset => None,
            _ => Some(key),
        };
    }

    pub fn is_identity(&self) -> bool {
        self.key.is_none() || self.direction == SortDirection::Reset
    }

    /// Direction shown in the selector of `key`.
    pub fn direction_for(&self, key: SortKey) -> SortDirection {
        if self.key == Some(key) {
            self.direction
        } else {
            SortDirection::Reset
        }
    }
}

impl State for SortDirective {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Stable sort of `users` according to `directive`; identity when it is reset.
pub fn sort_users(users: &mut [User], directive: &SortDirective) {
    let Some(key) = directive.key else {
        return;
    };
    let order = |a: &User, b: &User| -> Ordering { key.value_of(a).cmp(key.value_of(b)) };

    match directive.direction {
        SortDirection::Ascending => users.sort_by(order),
        SortDirection::Descending => users.sort_by(|a, b| order(b, a)),
        SortDirection::Reset => {}
    }
}
