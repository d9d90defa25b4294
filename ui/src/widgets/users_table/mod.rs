//! Users table: one row per user of the current page.
//!
//! - `columns`: column widths
//! - `header`: header row with sort selectors
//! - `row`: user rows and their actions
//! - `cells`: per-column cell rendering
//! - `details`: the expanded details block below the table

mod cells;
pub mod columns;
mod details;
pub mod header;
pub mod row;

use egui::{Frame, Margin, Response, Stroke, Ui};
use egui_extras::TableBuilder;
use userboard_business::{ColumnVisibility, RowDetails, SortDirective, UserViewCompute};
use userboard_states::StateCtx;

use crate::utils::clipboard::copy_to_clipboard;
use crate::utils::colors::TABLE_BORDER_COLOR;
use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::{SortAction, render_table_header};
use row::{RowAction, render_user_row};

/// Renders the current page of users, then applies whatever the user clicked.
pub fn users_table(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let rows = state_ctx
        .cached::<UserViewCompute>()
        .map(|c| c.view.rows.clone())
        .unwrap_or_default();
    let visible: Vec<_> = state_ctx.state::<ColumnVisibility>().visible().collect();
    let sort = *state_ctx.state::<SortDirective>();
    let details = *state_ctx.state::<RowDetails>();

    let mut sort_action: Option<SortAction> = None;
    let mut row_action: Option<RowAction> = None;

    let response = ui
        .vertical(|ui| {
            Frame::NONE
                .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
                .inner_margin(Margin::ZERO)
                .show(ui, |ui| {
                    let mut builder = TableBuilder::new(ui).striped(true).vscroll(false);
                    for column in table_columns(&visible) {
                        builder = builder.column(column);
                    }

                    builder
                        .header(HEADER_HEIGHT, |mut header| {
                            sort_action = render_table_header(&mut header, &visible, &sort);
                        })
                        .body(|mut body| {
                            for user in &rows {
                                body.row(ROW_HEIGHT, |mut row| {
                                    let expanded = details.is_expanded(user.id);
                                    if let Some(action) =
                                        render_user_row(&mut row, user, &visible, expanded)
                                    {
                                        row_action = Some(action);
                                    }
                                });
                            }
                        });
                });

            if let Some(user) = details
                .expanded()
                .and_then(|id| rows.iter().find(|user| user.id == id))
            {
                details::render_details(ui, user);
            }
        })
        .response;

    if let Some(SortAction { key, direction }) = sort_action {
        log::debug!("Sorting by {key:?} {direction:?}");
        state_ctx.update::<SortDirective>(|s| s.apply(key, direction));
    }

    match row_action {
        Some(RowAction::CopyEmail(email)) => copy_to_clipboard(ui.ctx(), "email", &email),
        Some(RowAction::CopyPhone(phone)) => copy_to_clipboard(ui.ctx(), "phone", &phone),
        Some(RowAction::ToggleDetails(id)) => {
            state_ctx.update::<RowDetails>(|d| d.toggle(id));
        }
        None => {}
    }

    response
}
