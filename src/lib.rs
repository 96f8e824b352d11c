mod corpus;
mod error;
mod index;
mod tokenizer;

pub use corpus::{load_documents, read_documents, Corpus};
pub use error::{Error, Result};
pub use index::{build_inverted_index, InvertedIndex};
pub use tokenizer::tokenize;

pub mod storage;

pub use crate::storage::{StorageStrategy, Strategy};

/// Documents are identified by the literal id found in the dataset.
pub type DocId = String;
