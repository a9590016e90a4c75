use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeedError>;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed file {} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read feed file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed feed file: {0}")]
    Parse(#[source] serde_yaml::Error),

    /// Missing key, wrong value type or a document that is not a mapping.
    #[error("invalid feed: {0}")]
    Field(#[source] serde_yaml::Error),

    #[error("failed to render feed xml: {0}")]
    Render(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FeedError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => FeedError::NotFound { path },
            _ => FeedError::Read { path, source },
        }
    }
}
