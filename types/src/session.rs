use serde::{Deserialize, Serialize};

use crate::Result;

/// Storage key the session record is persisted under.
pub const SESSION_STORAGE_KEY: &str = "currentUser";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: u64,
    pub username: String,
    pub email: String,
}

impl Session {
    /// The session handed out by the simulated login.
    pub fn simulated(username: &str) -> Self {
        Self {
            id: 1,
            username: username.to_string(),
            email: format!("{username}@example.com"),
        }
    }

    /// First letter of the username, for avatars.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }
}

pub fn encode_session(session: &Session) -> Result<String> {
    Ok(serde_json::to_string(session)?)
}

pub fn decode_session(encoded: &str) -> Result<Session> {
    Ok(serde_json::from_str(encoded)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_session_derives_email() {
        let session = Session::simulated("alice");
        assert_eq!(session.id, 1);
        assert_eq!(session.email, "alice@example.com");
        assert_eq!(session.initial(), "A");
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_session("{not json").is_err());
        assert!(decode_session(r#"{"id":1}"#).is_err());
    }

    #[test]
    fn encoded_session_is_plain_json() {
        let encoded = encode_session(&Session::simulated("bob")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["username"], "bob");
        assert_eq!(decode_session(&encoded).unwrap(), Session::simulated("bob"));
    }
}
