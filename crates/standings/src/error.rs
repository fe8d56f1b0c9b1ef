#![forbid(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid result for {grand_prix}: {source}")]
    InvalidResult {
        grand_prix: String,
        #[source]
        source: engine::Error,
    },

    #[error("{user} entered {grand_prix} more than once")]
    DuplicateEntrant { grand_prix: String, user: String },
}
