use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CollectorError>;

/// Errors that abort a collection run.
#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("failed to download '{url}': {source}")]
    Network {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("'{url}' answered with HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed JSON at line {line}, column {column}: {source}")]
    Json {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CollectorError {
    pub fn network(url: &str, error: ureq::Error) -> Self {
        match error {
            ureq::Error::StatusCode(status) => CollectorError::Status {
                url: url.to_string(),
                status,
            },
            other => CollectorError::Network {
                url: url.to_string(),
                source: Box::new(other),
            },
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CollectorError::Write {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for CollectorError {
    fn from(source: serde_json::Error) -> Self {
        CollectorError::Json {
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}
