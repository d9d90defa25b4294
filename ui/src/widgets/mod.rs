mod column_toggles;
mod header;
mod pagination_bar;
mod search_bar;
mod status;
pub mod users_table;

pub use column_toggles::column_toggles;
pub use header::{TITLE, apply_theme, header};
pub use pagination_bar::pagination_bar;
pub use search_bar::{SEARCH_HINT, search_bar, search_field_id};
pub use status::{LOADING_TEXT, source_footer, users_status};
pub use users_table::users_table;
