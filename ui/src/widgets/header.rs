use egui::{Response, Ui};
use userboard_business::{ThemeState, UsersCompute};
use userboard_states::StateCtx;

pub const TITLE: &str = "User Dashboard";

/// Title, total user count and the theme toggle.
pub fn header(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let total = state_ctx
        .cached::<UsersCompute>()
        .map_or(0, |users| users.users().len());
    let label = state_ctx.state::<ThemeState>().toggle_label();

    let toggled = ui
        .horizontal(|ui| {
            ui.heading(TITLE);
            ui.label(format!("Total Users: {total}"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.button(label).clicked()
            })
            .inner
        })
        .inner;

    if toggled {
        state_ctx.update::<ThemeState>(ThemeState::toggle);
        log::debug!("Theme switched to {:?}", state_ctx.state::<ThemeState>());
    }

    ui.separator()
}

/// Applies the stored theme to egui.
pub fn apply_theme(state_ctx: &StateCtx, ctx: &egui::Context) {
    let theme = if state_ctx.state::<ThemeState>().is_dark() {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    };
    if ctx.theme() != theme {
        ctx.set_theme(theme);
    }
}
