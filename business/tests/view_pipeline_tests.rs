//! End-to-end tests of the derived view through a `StateCtx`.

use chrono::{DateTime, Duration, Utc};
use userboard_business::{
    Address, BusinessConfig, Company, PageSize, Pagination, SearchInput, SettledSearchCompute,
    SortDirection, SortDirective, SortKey, User, UserViewCompute, UsersCompute,
    reconcile_pagination,
};
use userboard_states::{StateCtx, Time};

fn user(id: u64, name: &str, email: &str, company: &str) -> User {
    User {
        id,
        name: name.to_owned(),
        username: String::new(),
        email: email.to_owned(),
        address: Address::default(),
        phone: String::new(),
        website: String::new(),
        company: Company {
            name: company.to_owned(),
            ..Company::default()
        },
    }
}

fn twelve_users() -> Vec<User> {
    (1..=12)
        .map(|id| {
            user(
                id,
                &format!("Person {id:02}"),
                &format!("person{id}@mail.test"),
                &format!("Company {}", 13 - id),
            )
        })
        .collect()
}

struct Pipeline {
    ctx: StateCtx,
    start: DateTime<Utc>,
}

impl Pipeline {
    fn new(users: Vec<User>) -> Self {
        let start = Utc::now();
        let mut ctx = StateCtx::new();
        ctx.add_state(Time::at(start));
        ctx.add_state(BusinessConfig::default());
        ctx.add_state(SearchInput::default());
        ctx.add_state(SortDirective::default());
        ctx.add_state(Pagination::default());
        ctx.record_compute(UsersCompute::default());
        ctx.record_compute(SettledSearchCompute::default());
        ctx.record_compute(UserViewCompute::default());
        ctx.verify_deps().expect("compute graph should be acyclic");

        ctx.updater().set(UsersCompute::ready(users));
        ctx.sync_computes();

        let mut pipeline = Self { ctx, start };
        pipeline.frame();
        pipeline
    }

    fn frame(&mut self) {
        self.ctx.run_computed();
        reconcile_pagination(&mut self.ctx);
        self.ctx.run_computed();
    }

    fn at(&mut self, ms: i64) {
        let now = self.start + Duration::milliseconds(ms);
        self.ctx.update::<Time>(|t| t.set(now));
    }

    fn type_text(&mut self, text: &str, ms: i64) {
        self.at(ms);
        let now = self.ctx.state::<Time>().now();
        self.ctx.update::<SearchInput>(|s| s.set_text(text, now));
        self.frame();
    }

    fn view(&self) -> &userboard_business::UserView {
        &self.ctx.compute::<UserViewCompute>().view
    }

    fn ids(&self) -> Vec<u64> {
        self.view().rows.iter().map(|u| u.id).collect()
    }
}

#[test]
fn initial_view_is_first_page_in_fetch_order() {
    let pipeline = Pipeline::new(twelve_users());

    assert_eq!(pipeline.ids(), [1, 2, 3, 4, 5]);
    assert_eq!(pipeline.view().total_pages, 3);
    assert_eq!(pipeline.view().current_page, 1);
}

#[test]
fn search_applies_only_after_debounce() {
    let mut pipeline = Pipeline::new(twelve_users());

    pipeline.type_text("person1", 0);
    assert_eq!(pipeline.view().result_count, 12);

    pipeline.type_text("person12", 150);
    pipeline.at(449);
    pipeline.frame();
    assert_eq!(pipeline.view().result_count, 12);

    pipeline.at(450);
    pipeline.frame();
    assert_eq!(pipeline.ids(), [12]);
}

#[test]
fn shrinking_result_clamps_stored_page() {
    let mut pipeline = Pipeline::new(twelve_users());
    pipeline.ctx.update::<Pagination>(|p| p.set_page(3));
    pipeline.frame();
    assert_eq!(pipeline.ids(), [11, 12]);

    pipeline.type_text("person1", 0);
    pipeline.at(300);
    pipeline.frame();

    // person1, person10, person11, person12
    assert_eq!(pipeline.view().result_count, 4);
    assert_eq!(pipeline.view().current_page, 1);
    assert_eq!(pipeline.ctx.state::<Pagination>().page(), 1);
}

#[test]
fn unmatched_search_leaves_one_empty_page() {
    let mut pipeline = Pipeline::new(twelve_users());

    pipeline.type_text("ovidiu", 0);
    pipeline.at(300);
    pipeline.frame();

    assert!(pipeline.view().rows.is_empty());
    assert_eq!(pipeline.view().total_pages, 1);
    assert_eq!(pipeline.ctx.state::<Pagination>().page(), 1);
}

#[test]
fn sort_then_reset_restores_fetch_order() {
    let mut pipeline = Pipeline::new(twelve_users());

    pipeline
        .ctx
        .update::<SortDirective>(|s| s.apply(SortKey::Company, SortDirection::Ascending));
    pipeline.frame();
    // "Company 1" < "Company 10" < "Company 11" < "Company 12" < "Company 2"
    assert_eq!(pipeline.ids(), [12, 3, 2, 1, 11]);

    pipeline
        .ctx
        .update::<SortDirective>(|s| s.apply(SortKey::Company, SortDirection::Reset));
    pipeline.frame();
    assert_eq!(pipeline.ids(), [1, 2, 3, 4, 5]);
}

#[test]
fn page_size_change_reclamps_page() {
    let mut pipeline = Pipeline::new(twelve_users());
    pipeline.ctx.update::<Pagination>(|p| p.set_page(3));
    pipeline.frame();

    let count = pipeline.view().result_count;
    pipeline
        .ctx
        .update::<Pagination>(|p| p.set_page_size(PageSize::Ten, count));
    pipeline.frame();

    assert_eq!(pipeline.view().current_page, 2);
    assert_eq!(pipeline.view().total_pages, 2);
    assert_eq!(pipeline.ids(), [11, 12]);
}

#[test]
fn unchanged_inputs_do_not_republish_view() {
    let mut pipeline = Pipeline::new(twelve_users());
    let before = pipeline.view().clone();

    pipeline.at(10_000);
    pipeline.frame();

    assert_eq!(pipeline.view(), &before);
}

#[test]
fn previous_search_stays_applied_while_typing_again() {
    let mut pipeline = Pipeline::new(twelve_users());

    pipeline.type_text("person1", 0);
    pipeline.at(300);
    pipeline.frame();
    assert_eq!(pipeline.view().result_count, 4);

    pipeline.type_text("person12", 1000);
    pipeline.at(1100);
    pipeline.frame();
    assert_eq!(pipeline.view().result_count, 4);

    pipeline.at(1300);
    pipeline.frame();
    assert_eq!(pipeline.ids(), [12]);
}
