use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A persisted note. `id` and `date` are assigned by the store at creation
/// and never change afterwards; `content` is always non-empty.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Note {
    pub id: Uuid,
    pub content: String,
    pub important: bool,

    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// Input to note creation. The store fills in `id` and `date`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NoteDraft {
    pub content: String,
    pub important: bool,
}

/// A partial update. Only the fields that are `Some` are applied; `id` and
/// `date` are not representable here.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NoteChanges {
    pub content: Option<String>,
    pub important: Option<bool>,
}
