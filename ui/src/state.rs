use userboard_business::{
    BusinessConfig, ColumnVisibility, FetchUsersCommand, Pagination, RowDetails, SearchInput,
    SettledSearchCompute, SortDirective, ThemeState, UserViewCompute, UsersCompute,
};
use userboard_states::{StateCtx, Time};

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::default())
    }
}

impl State {
    pub fn with_config(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(config);

        ctx.add_state(SearchInput::default());
        ctx.add_state(SortDirective::default());
        ctx.add_state(Pagination::default());
        ctx.add_state(ColumnVisibility::default());
        ctx.add_state(ThemeState::default());
        ctx.add_state(RowDetails::default());

        ctx.record_compute(UsersCompute::default());
        ctx.record_compute(SettledSearchCompute::default());
        ctx.record_compute(UserViewCompute::default());

        ctx.record_command(FetchUsersCommand);

        if let Err(err) = ctx.verify_deps() {
            log::error!("Invalid compute dependencies: {err}");
        }

        Self { ctx }
    }

    /// State reading users from `users_url`, used against mock servers.
    pub fn test(users_url: String) -> Self {
        Self::with_config(BusinessConfig::new(users_url))
    }
}
