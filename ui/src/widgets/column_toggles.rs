use egui::{Response, Ui};
use userboard_business::{Column, ColumnVisibility};
use userboard_states::StateCtx;

/// One checkbox per table column.
pub fn column_toggles(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let current = *state_ctx.state::<ColumnVisibility>();
    let mut toggled: Option<Column> = None;

    let response = ui
        .horizontal_wrapped(|ui| {
            ui.label("Columns:");
            for column in Column::ALL {
                let mut visible = current.is_visible(column);
                if ui.checkbox(&mut visible, column.label()).changed() {
                    toggled = Some(column);
                }
            }
        })
        .response;

    if let Some(column) = toggled {
        state_ctx.update::<ColumnVisibility>(|columns| columns.toggle(column));
    }

    response
}
