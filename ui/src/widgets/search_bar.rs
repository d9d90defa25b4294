use egui::{Context, Event, Id, Key, Response, TextEdit, Ui};
use userboard_business::SearchInput;
use userboard_states::{StateCtx, Time};

pub const SEARCH_HINT: &str = "Search by name or email...";

/// Id of the search field, for focusing it from outside.
pub fn search_field_id() -> Id {
    Id::new("userboard_search_field")
}

/// Search field bound to [`SearchInput`]; `/` focuses it.
pub fn search_bar(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let mut text = state_ctx.state::<SearchInput>().text().to_owned();

    let response = ui.add(
        TextEdit::singleline(&mut text)
            .id(search_field_id())
            .hint_text(SEARCH_HINT)
            .desired_width(f32::INFINITY),
    );

    if response.changed() {
        let now = state_ctx.state::<Time>().now();
        state_ctx.update::<SearchInput>(|search| search.set_text(text, now));
    }

    // Checked after the field consumed this frame's input, so the slash is
    // never typed into it.
    if !response.has_focus() && !text_input_focused(ui.ctx()) && slash_pressed(ui.ctx()) {
        response.request_focus();
    }

    response
}

fn slash_pressed(ctx: &Context) -> bool {
    ctx.input(|i| {
        i.key_pressed(Key::Slash)
            || i
                .events
                .iter()
                .any(|event| matches!(event, Event::Text(text) if text == "/"))
    })
}

/// True if some text field other than the search has keyboard focus.
fn text_input_focused(ctx: &Context) -> bool {
    ctx.memory(|m| m.focused())
        .is_some_and(|id| egui::text_edit::TextEditState::load(ctx, id).is_some())
}
