mod columns;
mod config;
mod debounce;
mod fetch_users;
pub mod http;
mod pagination;
mod row_details;
mod search;
mod sort;
mod theme;
mod user;
mod view;

#[cfg(test)]
mod test_utils;

pub use columns::{Column, ColumnVisibility};
pub use config::{BusinessConfig, ConfigError, DEFAULT_USERS_URL};
pub use debounce::{Debounced, SEARCH_DEBOUNCE};
pub use fetch_users::{FetchError, FetchUsersCommand, UsersCompute, UsersStatus, load};
pub use pagination::{PageSize, Pagination, total_pages};
pub use row_details::RowDetails;
pub use search::{SearchInput, SettledSearchCompute};
pub use sort::{SortDirection, SortDirective, SortKey, sort_users};
pub use theme::ThemeState;
pub use user::{Address, Company, Geo, User};
pub use view::{UserView, UserViewCompute, compute_view, filter_users, reconcile_pagination};
