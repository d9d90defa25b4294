use std::time::Duration;

use userboard_business::{
    FetchUsersCommand, SearchInput, UserViewCompute, UsersCompute, reconcile_pagination,
};
use userboard_states::Time;

use crate::{state::State, widgets};

/// How often to poll for the users while the fetch is in flight.
const LOADING_REPAINT: Duration = Duration::from_millis(100);

pub struct UserboardApp {
    state: State,
}

impl UserboardApp {
    /// Called once before the first frame; starts the users fetch.
    pub fn new(mut state: State) -> Self {
        state.ctx.enqueue_command::<FetchUsersCommand>();
        state.ctx.flush_commands();
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    fn schedule_repaint(&self, ctx: &egui::Context) {
        let state_ctx = &self.state.ctx;

        if state_ctx
            .cached::<UsersCompute>()
            .is_some_and(UsersCompute::is_loading)
        {
            ctx.request_repaint_after(LOADING_REPAINT);
        }

        let now = state_ctx.state::<Time>().now();
        if let Some(left) = state_ctx.state::<SearchInput>().debounced().remaining(now) {
            ctx.request_repaint_after(left);
        }
    }
}

impl eframe::App for UserboardApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state_ctx = &mut self.state.ctx;

        state_ctx.update::<Time>(|time| time.set(chrono::Utc::now()));
        state_ctx.sync_computes();

        widgets::apply_theme(state_ctx, ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            widgets::header(state_ctx, ui);
        });

        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            widgets::source_footer(state_ctx, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::search_bar(state_ctx, ui);
            widgets::column_toggles(state_ctx, ui);
            ui.separator();

            if widgets::users_status(state_ctx, ui).is_none() {
                egui::ScrollArea::both().show(ui, |ui| {
                    widgets::users_table(state_ctx, ui);
                    ui.add_space(8.0);
                    widgets::pagination_bar(state_ctx, ui);
                });
            }
        });

        let before = state_ctx.cached::<UserViewCompute>().cloned();

        state_ctx.flush_commands();
        state_ctx.run_computed();
        reconcile_pagination(state_ctx);

        if state_ctx.cached::<UserViewCompute>() != before.as_ref() {
            ctx.request_repaint();
        }
        self.schedule_repaint(ctx);
    }
}
