use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::record::{RecordId, Resource, lenient_timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(
        default,
        alias = "joinDate",
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl Default for NewUser {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: default_role(),
            status: default_status(),
        }
    }
}

impl Resource for User {
    const PATH: &'static str = "/users";
    const NOUN: &'static str = "User";
    type Draft = NewUser;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

pub const ROLES: [&str; 3] = ["Admin", "Moderator", "User"];
pub const STATUSES: [&str; 2] = ["Active", "Inactive"];

fn default_role() -> String {
    "User".to_string()
}

fn default_status() -> String {
    "Active".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_backend_shape_fills_defaults() {
        let user: User = serde_json::from_str(
            r#"{"id":"4","name":"Alice Brown","email":"alice@example.com","createdAt":"2024-01-25T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(user.id, RecordId(4));
        assert_eq!(user.role, "User");
        assert_eq!(user.status, "Active");
        assert!(user.created_at.is_some());
    }

    #[test]
    fn join_date_is_an_alias() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"name":"John Doe","email":"john@example.com","role":"Admin","joinDate":"2024-01-15"}"#,
        )
        .unwrap();

        assert_eq!(user.role, "Admin");
        assert_eq!(
            user.created_at.unwrap().to_string(),
            "2024-01-15T00:00:00Z"
        );
    }

    #[test]
    fn item_path_appends_id() {
        assert_eq!(User::item_path(RecordId(9)), "/users/9");
    }
}
