use serde::Deserialize;

/// Creation body. Anything else the client sends, a `date` included, is
/// dropped at deserialization.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct CreateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
}

/// Update body. Only `content` and `important` can be changed.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct UpdateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
}
