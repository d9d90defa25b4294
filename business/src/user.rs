//! User records as served by the users endpoint.
//!
//! Records are read-only once fetched: the dashboard never mutates or sends
//! them back.

use serde::{Deserialize, Serialize};

/// A user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique within a fetched collection.
    pub id: u64,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    #[serde(default)]
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    #[serde(default)]
    pub geo: Geo,
}

impl Address {
    /// "street, city, zipcode", as shown in the row details.
    pub fn one_line(&self) -> String {
        format!("{}, {}, {}", self.street, self.city, self.zipcode)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}

impl Company {
    /// "catch phrase (bs)", as shown in the row details.
    pub fn summary(&self) -> String {
        format!("{} ({})", self.catch_phrase, self.bs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_reference_record() {
        let json = r#"{
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "address": {
                "street": "Victor Plains",
                "suite": "Suite 879",
                "city": "Wisokyburgh",
                "zipcode": "90566-7771",
                "geo": { "lat": "-43.9509", "lng": "-34.4618" }
            },
            "phone": "010-692-6593 x09125",
            "website": "anastasia.net",
            "company": {
                "name": "Deckow-Crist",
                "catchPhrase": "Proactive didactic contingency",
                "bs": "synergize scalable supply-chains"
            }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 2);
        assert_eq!(user.company.name, "Deckow-Crist");
        assert_eq!(user.company.catch_phrase, "Proactive didactic contingency");
        assert_eq!(user.address.geo.lat, "-43.9509");
        assert_eq!(
            user.address.one_line(),
            "Victor Plains, Wisokyburgh, 90566-7771"
        );
        assert_eq!(
            user.company.summary(),
            "Proactive didactic contingency (synergize scalable supply-chains)"
        );
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough", "zipcode": "92998-3874" },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": { "name": "Romaguera-Crona" }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert!(user.username.is_empty());
        assert!(user.address.suite.is_empty());
        assert!(user.company.bs.is_empty());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let json = r#"{ "id": 1, "name": "No Email" }"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }
}
