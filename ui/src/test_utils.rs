//! Helpers for widget tests.

use userboard_business::{Address, Company, User, UsersCompute, reconcile_pagination};
use userboard_states::StateCtx;

use crate::state::State;

pub fn sample_user(id: u64, name: &str, email: &str, company: &str) -> User {
    User {
        id,
        name: name.to_owned(),
        username: format!("user{id}"),
        email: email.to_owned(),
        address: Address {
            street: format!("{id} Kulas Light"),
            city: format!("City {id}"),
            zipcode: format!("{:05}", id * 7),
            ..Address::default()
        },
        phone: format!("1-770-736-80{id:02}"),
        website: format!("site{id}.org"),
        company: Company {
            name: company.to_owned(),
            catch_phrase: format!("Catch phrase {id}"),
            bs: format!("bs {id}"),
        },
    }
}

/// `count` users named "User 1".."User N", in that order.
pub fn sample_users(count: u64) -> Vec<User> {
    (1..=count)
        .map(|id| {
            sample_user(
                id,
                &format!("User {id}"),
                &format!("user{id}@example.com"),
                &format!("Company {id}"),
            )
        })
        .collect()
}

/// A fully registered context whose users are already fetched.
pub fn ready_ctx(users: Vec<User>) -> StateCtx {
    let mut ctx = State::test("http://test/users".to_owned()).ctx;
    ctx.updater().set(UsersCompute::ready(users));
    ctx.sync_computes();
    settle(&mut ctx);
    ctx
}

/// What the app does at the end of every frame.
pub fn settle(ctx: &mut StateCtx) {
    ctx.run_computed();
    reconcile_pagination(ctx);
}
