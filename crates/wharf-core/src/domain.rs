//! Domain types shared across adapters.

use serde::{Deserialize, Serialize};

/// An application user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Database identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// Payload for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    /// Display name.
    pub name: String,
}

/// One stored session value, scoped to a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionEntry {
    /// Owning user.
    pub user_id: i64,
    /// Entry key.
    pub key: String,
    /// Stored value.
    pub value: String,
    /// Last write timestamp (ISO-8601, UTC).
    pub updated_at: String,
}
