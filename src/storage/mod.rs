mod binary;
mod json;

use std::{
    fmt,
    fs::{self, File},
    io::{BufReader, Read, Write},
    path::Path,
};

pub use binary::BinaryStrategy;
pub use json::JsonStrategy;

use crate::{InvertedIndex, Result};

/// A way to persist an [`InvertedIndex`] and read it back.
///
/// `load` must be the exact inverse of `dump`: `load(dump(index)) == index`.
pub trait StorageStrategy {
    /// Serialize the whole index into `writer`.
    fn dump<W: Write>(&self, index: &InvertedIndex, writer: W) -> Result<()>;

    /// Read an index previously written by [`StorageStrategy::dump`].
    fn load<R: Read>(&self, reader: R) -> Result<InvertedIndex>;

    /// The index is fully serialized in memory before the file is created,
    /// so a failed dump never leaves a half written file behind.
    fn dump_to_path(&self, index: &InvertedIndex, path: impl AsRef<Path>) -> Result<()> {
        let mut buffer = Vec::new();
        self.dump(index, &mut buffer)?;
        fs::write(path.as_ref(), &buffer)?;

        log::info!(
            "Saved {} words and {} postings to {} ({} bytes)",
            index.len(),
            index.posting_count(),
            path.as_ref().display(),
            buffer.len()
        );
        Ok(())
    }

    fn load_from_path(&self, path: impl AsRef<Path>) -> Result<InvertedIndex> {
        let file = File::open(path.as_ref())?;
        let index = self.load(BufReader::new(file))?;

        log::debug!(
            "Loaded {} words and {} postings from {}",
            index.len(),
            index.posting_count(),
            path.as_ref().display()
        );
        Ok(index)
    }
}

/// Storage strategy selector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Human readable JSON object mapping each word to its ids.
    Json,
    /// Compact little-endian format with 16-bit document ids.
    #[default]
    #[value(alias = "struct")]
    Binary,
}

impl StorageStrategy for Strategy {
    fn dump<W: Write>(&self, index: &InvertedIndex, writer: W) -> Result<()> {
        match self {
            Strategy::Json => JsonStrategy.dump(index, writer),
            Strategy::Binary => BinaryStrategy.dump(index, writer),
        }
    }

    fn load<R: Read>(&self, reader: R) -> Result<InvertedIndex> {
        match self {
            Strategy::Json => JsonStrategy.load(reader),
            Strategy::Binary => BinaryStrategy.load(reader),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Json => f.write_str("json"),
            Strategy::Binary => f.write_str("binary"),
        }
    }
}
