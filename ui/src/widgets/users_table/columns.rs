//! Column definitions for the users table.

use egui_extras::Column as TableColumn;
use userboard_business::Column;

pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 28.0;
pub const ACTIONS_WIDTH: f32 = 230.0;

fn data_column(column: Column) -> TableColumn {
    match column {
        Column::Name | Column::Email | Column::Company => {
            TableColumn::auto().at_least(150.0).resizable(true)
        }
        Column::Phone => TableColumn::auto().at_least(140.0).resizable(true),
        Column::Website | Column::Address => TableColumn::auto().at_least(100.0).resizable(true),
    }
}

/// One column per visible data column, then the actions column.
pub fn table_columns(visible: &[Column]) -> Vec<TableColumn> {
    visible
        .iter()
        .map(|column| data_column(*column))
        .chain(std::iter::once(TableColumn::exact(ACTIONS_WIDTH)))
        .collect()
}
