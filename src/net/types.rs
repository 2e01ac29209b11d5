//! Wire types shared with the journal backend.
//!
//! Field names follow the backend's camelCase JSON. Deserialization
//! is tolerant of missing fields since the entry shape is owned by
//! the server and the client never reconciles copies across views.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Login/signup request body. Transient: built at submit time and
/// dropped once the call resolves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub user_name: String,
    pub password: String,
}

/// One journal entry as returned by the backend.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: Option<NaiveDateTime>,
}

/// Create/update request body for a journal entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
}

/// Outbound email request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EmailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Account record returned by the profile and admin endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}
