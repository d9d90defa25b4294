//! Row rendering for the users table.

use egui_extras::TableRow;
use userboard_business::{Column, User};

use super::cells::render_data_cell;

/// Something clicked in a row's actions cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    CopyEmail(String),
    CopyPhone(String),
    ToggleDetails(u64),
}

/// Renders the visible cells of `user` and its action buttons.
///
/// Copy buttons only appear while their column is visible.
pub fn render_user_row(
    row: &mut TableRow<'_, '_>,
    user: &User,
    visible: &[Column],
    expanded: bool,
) -> Option<RowAction> {
    for column in visible {
        row.col(|ui| render_data_cell(ui, user, *column));
    }

    let mut action = None;
    row.col(|ui| {
        ui.horizontal(|ui| {
            if visible.contains(&Column::Email) && ui.button("Copy Email").clicked() {
                action = Some(RowAction::CopyEmail(user.email.clone()));
            }
            if visible.contains(&Column::Phone) && ui.button("Copy Phone").clicked() {
                action = Some(RowAction::CopyPhone(user.phone.clone()));
            }
            let label = if expanded { "Hide" } else { "Details" };
            if ui.button(label).clicked() {
                action = Some(RowAction::ToggleDetails(user.id));
            }
        });
    });

    action
}
