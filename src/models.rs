use super::db_ops::NoteStore;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn NoteStore>,
}

/// A persisted note. `id` is assigned by the database and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    pub id: i32,
    pub name: String,
    pub note: String,
}

/// Body of a create request. Absent or `null` fields are stored as empty
/// strings; content is otherwise taken as-is.
#[derive(Clone, Debug, Deserialize)]
pub struct NewNote {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub note: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}
