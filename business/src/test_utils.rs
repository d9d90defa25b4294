//! Fixtures shared by the unit tests of this crate.

#![cfg(test)]

use crate::{Address, Company, Geo, User};

/// A user with only the fields the pipeline looks at filled in.
pub fn user(id: u64, name: &str, email: &str) -> User {
    User {
        id,
        name: name.to_owned(),
        username: String::new(),
        email: email.to_owned(),
        address: Address::default(),
        phone: String::new(),
        website: String::new(),
        company: Company::default(),
    }
}

fn full_user(id: u64, name: &str, email: &str, city: &str, company: &str) -> User {
    User {
        phone: format!("555-01{id:02}"),
        website: format!("user{id}.example"),
        address: Address {
            street: format!("{id} Main Street"),
            suite: String::new(),
            city: city.to_owned(),
            zipcode: format!("{:05}", id * 1111),
            geo: Geo::default(),
        },
        company: Company {
            name: company.to_owned(),
            catch_phrase: "Multi-layered client-server neural-net".to_owned(),
            bs: "harness real-time e-markets".to_owned(),
        },
        ..user(id, name, email)
    }
}

/// Twelve users in fetch order.
pub fn reference_users() -> Vec<User> {
    vec![
        full_user(
            1,
            "Leanne Graham",
            "Sincere@april.biz",
            "Gwenborough",
            "Romaguera-Crona",
        ),
        full_user(
            2,
            "Ervin Howell",
            "Shanna@melissa.tv",
            "Wisokyburgh",
            "Deckow-Crist",
        ),
        full_user(
            3,
            "Clementine Bauch",
            "Nathan@yesenia.net",
            "McKenziehaven",
            "Romaguera-Jacobson",
        ),
        full_user(
            4,
            "Patricia Lebsack",
            "Julianne.OConner@kory.org",
            "South Elvis",
            "Robel-Corkery",
        ),
        full_user(
            5,
            "Chelsey Dietrich",
            "Lucio_Hettinger@annie.ca",
            "Roscoeview",
            "Keebler LLC",
        ),
        full_user(
            6,
            "Mrs. Dennis Schulist",
            "Karley_Dach@jasper.info",
            "South Christy",
            "Considine-Lockman",
        ),
        full_user(
            7,
            "Kurtis Weissnat",
            "Telly.Hoeger@billy.biz",
            "Howemouth",
            "Johns Group",
        ),
        full_user(
            8,
            "Nicholas Runolfsdottir V",
            "Sherwood@rosamond.me",
            "Aliyaview",
            "Abernathy Group",
        ),
        full_user(
            9,
            "Glenna Reichert",
            "Chaim_McDermott@dana.io",
            "Bartholomebury",
            "Yost and Sons",
        ),
        full_user(
            10,
            "Clementina DuBuque",
            "Rey.Padberg@karina.biz",
            "Lebsackbury",
            "Hoeger LLC",
        ),
        full_user(
            11,
            "Marta Quigley",
            "marta@quigley.dev",
            "Port Jacey",
            "Quigley Labs",
        ),
        full_user(
            12,
            "Tobias Lind",
            "tobias.lind@example.org",
            "North Elmira",
            "Lind & Co",
        ),
    ]
}
