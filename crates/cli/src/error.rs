use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Standings(#[from] standings::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to read glob entry: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("No race sheet matches {0:?}")]
    NoMatch(String),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}
