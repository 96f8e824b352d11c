use std::{io, str::Utf8Error};

use thiserror::Error;

/// Everything that can go wrong while loading a corpus or (de)serializing an index.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed corpus line {line}: expected `<id> <content>`, got {content:?}")]
    Parse { line: usize, content: String },

    #[error("Malformed index: {0}")]
    Format(String),

    #[error("Invalid UTF-8 word in index: {0}")]
    Encoding(#[from] Utf8Error),

    #[error("Can't encode {what} {value}: the binary format is limited to {max}")]
    EncodingOverflow {
        what: &'static str,
        value: u64,
        max: u64,
    },

    #[error("Document id {0:?} can't be stored in the binary format, only integers up to 65535 are supported")]
    InvalidDocId(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }

    /// A short read in the middle of an index means the file was truncated,
    /// not that the disk failed.
    pub(crate) fn truncated(err: io::Error, what: &str) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Error::Format(format!("unexpected end of input while reading {what}"))
        } else {
            Error::Io(err)
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::Format(err.to_string())
        }
    }
}
