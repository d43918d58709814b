use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single user-created record in the store.
///
/// The `id` is assigned by the database and never changes. `created_at` is
/// set once at creation; `updated_at` is refreshed on every successful
/// update, so `updated_at >= created_at` always holds.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub value: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The caller-supplied fields for creating a new `Item`.
///
/// `name` defaults to an empty string when absent from the request body so
/// the repository can reject it with a validation error instead of the
/// deserializer failing with a shape error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// A partial update: only the supplied fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub value: Option<String>,
}
