use thiserror::Error;
use tokio::io::Error as IoError;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("note id \"{0}\" is malformed")]
    MalformedId(String),

    #[error("note document {id} cannot be decoded")]
    CorruptDocument {
        id: Uuid,
        #[source]
        source: serde_json::Error,
    },

    #[error("note document {id} cannot be encoded")]
    EncodeDocument {
        id: Uuid,
        #[source]
        source: serde_json::Error,
    },

    #[error("note content must not be empty")]
    EmptyContent,

    #[error(transparent)]
    Io(#[from] IoError),
}
