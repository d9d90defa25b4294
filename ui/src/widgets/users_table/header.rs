//! Table header rendering for the users table.

use egui::{ComboBox, Ui};
use egui_extras::TableRow;
use userboard_business::{Column, SortDirection, SortDirective, SortKey};

/// A sort selection made in a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortAction {
    pub key: SortKey,
    pub direction: SortDirection,
}

fn sort_key(column: Column) -> Option<SortKey> {
    match column {
        Column::Name => Some(SortKey::Name),
        Column::Email => Some(SortKey::Email),
        Column::Company => Some(SortKey::Company),
        Column::Phone | Column::Website | Column::Address => None,
    }
}

/// Renders one header per visible column plus "Actions".
///
/// Returns the sort selection made this frame, if any.
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    visible: &[Column],
    sort: &SortDirective,
) -> Option<SortAction> {
    let mut action = None;

    for column in visible {
        header.col(|ui| {
            ui.strong(column.label());
            if let Some(key) = sort_key(*column)
                && let Some(direction) = sort_selector(ui, key, sort.direction_for(key))
            {
                action = Some(SortAction { key, direction });
            }
        });
    }
    header.col(|ui| {
        ui.strong("Actions");
    });

    action
}

fn sort_selector(ui: &mut Ui, key: SortKey, current: SortDirection) -> Option<SortDirection> {
    let mut selected = current;
    ComboBox::from_id_salt(("sort", key))
        .selected_text(current.label())
        .show_ui(ui, |ui| {
            for direction in SortDirection::ALL {
                ui.selectable_value(&mut selected, direction, direction.label());
            }
        });

    (selected != current).then_some(selected)
}
