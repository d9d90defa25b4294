//! Cell rendering for the users table.

use egui::Ui;
use userboard_business::{Column, User};

/// Text shown in `column` for `user`.
pub fn cell_text(user: &User, column: Column) -> &str {
    match column {
        Column::Name => &user.name,
        Column::Email => &user.email,
        Column::Company => &user.company.name,
        Column::Phone => &user.phone,
        Column::Website => &user.website,
        Column::Address => &user.address.city,
    }
}

#[inline]
pub fn render_data_cell(ui: &mut Ui, user: &User, column: Column) {
    ui.label(cell_text(user, column));
}
