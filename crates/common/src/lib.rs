// ================
// crates/common/src/lib.rs
// ================
//! Shared types for the accounts service: the persisted user record and
//! the request payloads accepted by the page and API endpoints.

use serde::{Deserialize, Serialize};

/// A persisted user record.
///
/// `password` holds the scrypt PHC hash of the user's password, never the
/// plaintext. Names are unique by convention only; the store enforces no
/// constraint, so duplicates are possible (and documented).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub password: String,
}

/// Credentials submitted on signup, login and `POST /api/users`.
#[derive(Deserialize, Debug, Clone)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

/// Body of `POST /change-password`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChangePassword {
    pub old_password: String,
    pub new_password: String,
}

/// Body of `PUT /api/users/{name}/password`.
///
/// `new_password` is optional so that an absent field maps to a 400
/// rather than a deserialization error; an empty string counts as absent.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePassword {
    #[serde(default)]
    pub new_password: Option<String>,
}

impl UpdatePassword {
    /// The submitted password, treating both a missing field and an empty
    /// string as "not provided".
    pub fn provided(&self) -> Option<&str> {
        self.new_password.as_deref().filter(|p| !p.is_empty())
    }
}
