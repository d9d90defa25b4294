//! Derived view pipeline: filter, then sort, then paginate.

use std::any::{Any, TypeId};

use userboard_states::{Compute, ComputeDeps, Dep, StateCtx, Updater, assign_impl};

use crate::{Pagination, SettledSearchCompute, SortDirective, User, UsersCompute, sort_users};

/// Keeps users whose name or email contains `term`, ignoring case.
///
/// An empty term keeps everything; input order is preserved.
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    if term.is_empty() {
        return users.iter().collect();
    }
    let needle = term.to_lowercase();
    users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The page of users to render plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct UserView {
    pub rows: Vec<User>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Number of users matching the search, across all pages.
    pub result_count: usize,
}

impl Default for UserView {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            current_page: 1,
            total_pages: 1,
            result_count: 0,
        }
    }
}

impl UserView {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Runs the full pipeline. Total: never fails, an empty result is one empty page.
pub fn compute_view(
    raw: &[User],
    search_term: &str,
    sort: &SortDirective,
    pagination: Pagination,
) -> UserView {
    let mut matched: Vec<User> = filter_users(raw, search_term)
        .into_iter()
        .cloned()
        .collect();
    sort_users(&mut matched, sort);

    let result_count = matched.len();
    let mut page = pagination;
    page.clamp(result_count);

    let size = page.page_size().get();
    let start = (page.page() - 1) * size;
    let rows = matched.into_iter().skip(start).take(size).collect();

    UserView {
        rows,
        current_page: page.page(),
        total_pages: crate::total_pages(result_count, page.page_size()),
        result_count,
    }
}

/// Memoised [`compute_view`] over the users, settled search, sort and pagination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserViewCompute {
    pub view: UserView,
}

impl Compute for UserViewCompute {
    fn deps(&self) -> ComputeDeps {
        (
            vec![TypeId::of::<SortDirective>(), TypeId::of::<Pagination>()],
            vec![
                TypeId::of::<UsersCompute>(),
                TypeId::of::<SettledSearchCompute>(),
            ],
        )
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let users = deps.get_compute_ref::<UsersCompute>();
        let search = deps.get_compute_ref::<SettledSearchCompute>();
        let sort = deps.get_state_ref::<SortDirective>();
        let pagination = deps.get_state_ref::<Pagination>();

        let view = compute_view(users.users(), &search.term, sort, *pagination);
        if view != self.view {
            updater.set(Self { view });
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Writes the page the view clamped to back into [`Pagination`].
///
/// Call after `run_computed` so a shrinking result never leaves the stored
/// page out of range.
pub fn reconcile_pagination(ctx: &mut StateCtx) {
    let Some(current_page) = ctx.cached::<UserViewCompute>().map(|c| c.view.current_page) else {
        return;
    };
    if ctx.state::<Pagination>().page() != current_page {
        log::debug!("Clamping page to {current_page}");
        ctx.update::<Pagination>(|p| p.set_page(current_page));
    }
}
