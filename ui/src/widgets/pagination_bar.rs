use egui::{ComboBox, Response, Ui};
use userboard_business::{PageSize, Pagination, UserViewCompute};
use userboard_states::StateCtx;

enum PageAction {
    Prev,
    Next,
    Resize(PageSize),
}

/// Prev/Next buttons, page indicator and page size selector.
pub fn pagination_bar(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let view = state_ctx
        .cached::<UserViewCompute>()
        .map(|c| c.view.clone())
        .unwrap_or_default();
    let mut page_size = state_ctx.state::<Pagination>().page_size();
    let mut action = None;

    let response = ui
        .horizontal(|ui| {
            if ui
                .add_enabled(view.has_prev(), egui::Button::new("Prev"))
                .clicked()
            {
                action = Some(PageAction::Prev);
            }
            ui.label(format!("Page {} of {}", view.current_page, view.total_pages));
            if ui
                .add_enabled(view.has_next(), egui::Button::new("Next"))
                .clicked()
            {
                action = Some(PageAction::Next);
            }

            ui.separator();
            ui.label("Users per page");
            ComboBox::from_id_salt("users_per_page")
                .selected_text(page_size.to_string())
                .show_ui(ui, |ui| {
                    for size in PageSize::ALL {
                        if ui
                            .selectable_value(&mut page_size, size, size.to_string())
                            .changed()
                        {
                            action = Some(PageAction::Resize(size));
                        }
                    }
                });
        })
        .response;

    let count = view.result_count;
    match action {
        Some(PageAction::Prev) => state_ctx.update::<Pagination>(Pagination::prev),
        Some(PageAction::Next) => state_ctx.update::<Pagination>(|p| p.next(count)),
        Some(PageAction::Resize(size)) => {
            state_ctx.update::<Pagination>(|p| p.set_page_size(size, count));
        }
        None => {}
    }

    response
}
