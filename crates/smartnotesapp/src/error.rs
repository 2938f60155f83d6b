use crate::model::NoteId;
use crate::tags::TagValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    #[error("Unknown color \"{0}\"")]
    InvalidColor(String),

    #[error("Invalid tag: {0}")]
    InvalidTag(#[from] TagValidationError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, NotesError>;
