use egui::{Response, RichText, Ui};
use userboard_business::{BusinessConfig, UsersCompute};
use userboard_states::StateCtx;

use crate::utils::colors::{COLOR_AMBER, COLOR_RED};

pub const LOADING_TEXT: &str = "Loading users...";

/// Loading or error notice; `None` once the users are ready.
pub fn users_status(state_ctx: &StateCtx, ui: &mut Ui) -> Option<Response> {
    let users = state_ctx.cached::<UsersCompute>()?;

    if users.is_loading() {
        return Some(
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(LOADING_TEXT).color(COLOR_AMBER));
            })
            .response,
        );
    }

    users
        .error_message()
        .map(|message| ui.colored_label(COLOR_RED, format!("Error: {message}")))
}

/// "Users fetched from <url>".
pub fn source_footer(state_ctx: &StateCtx, ui: &mut Ui) -> Response {
    let url = state_ctx.state::<BusinessConfig>().users_url();
    ui.small(format!("Users fetched from {url}"))
}
