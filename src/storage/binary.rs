//! Compact binary layout, every integer is little-endian:
//!
//! ```text
//! [u32 table_size]
//! table_size times:
//!     [u16 word_len] [word_len bytes of UTF-8] [u16 doc_count]
//! sum(doc_count) times, in table order:
//!     [u16 docid]
//! ```
//!
//! The table comes first so a reader knows the size of every posting list
//! before reading a single id.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use indexmap::{IndexMap, IndexSet};

use super::StorageStrategy;
use crate::{Error, InvertedIndex, Result};

/// Cap on what we pre-allocate from a table size read from untrusted input.
const MAX_PREALLOCATED_WORDS: usize = 1 << 16;

#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryStrategy;

impl StorageStrategy for BinaryStrategy {
    fn dump<W: Write>(&self, index: &InvertedIndex, mut writer: W) -> Result<()> {
        let buffer = encode(index)?;
        writer.write_all(&buffer)?;
        writer.flush()?;
        Ok(())
    }

    fn load<R: Read>(&self, reader: R) -> Result<InvertedIndex> {
        decode(reader)
    }
}

/// Encode the whole index in memory so that nothing reaches the writer
/// if any value doesn't fit the format.
fn encode(index: &InvertedIndex) -> Result<Vec<u8>> {
    let table_size = checked_u32("word count", index.len())?;

    let mut table = Vec::new();
    let mut postings = Vec::with_capacity(index.posting_count() * 2);
    table.write_u32::<LittleEndian>(table_size)?;

    for (word, ids) in index.iter() {
        table.write_u16::<LittleEndian>(checked_u16("word length", word.len())?)?;
        table.write_all(word.as_bytes())?;
        table.write_u16::<LittleEndian>(checked_u16("posting list length", ids.len())?)?;

        for docid in ids {
            postings.write_u16::<LittleEndian>(encode_docid(docid)?)?;
        }
    }

    table.extend_from_slice(&postings);
    Ok(table)
}

fn decode(mut reader: impl Read) -> Result<InvertedIndex> {
    let table_size = reader
        .read_u32::<LittleEndian>()
        .map_err(|e| Error::truncated(e, "the table size"))?;

    // first pass: the words and the length of their posting lists
    let mut table = Vec::with_capacity((table_size as usize).min(MAX_PREALLOCATED_WORDS));
    for _ in 0..table_size {
        let word_len = reader
            .read_u16::<LittleEndian>()
            .map_err(|e| Error::truncated(e, "a word length"))?;
        let mut bytes = vec![0; word_len as usize];
        reader
            .read_exact(&mut bytes)
            .map_err(|e| Error::truncated(e, "a word"))?;
        let word = std::str::from_utf8(&bytes)?.to_string();
        let doc_count = reader
            .read_u16::<LittleEndian>()
            .map_err(|e| Error::truncated(e, "a posting list length"))?;
        table.push((word, doc_count));
    }

    // second pass: the flat stream of ids, split back by word
    let mut words = IndexMap::with_capacity(table.len());
    for (word, doc_count) in table {
        let mut ids = vec![0; doc_count as usize];
        reader
            .read_u16_into::<LittleEndian>(&mut ids)
            .map_err(|e| Error::truncated(e, "the posting lists"))?;

        let mut postings = IndexSet::with_capacity(ids.len());
        for docid in ids {
            if !postings.insert(docid.to_string()) {
                return Err(Error::format(format!(
                    "document {docid} is listed twice for the word {word:?}"
                )));
            }
        }
        if words.insert(word, postings).is_some() {
            return Err(Error::format("the same word appears twice in the table"));
        }
    }

    let mut rest = [0u8; 1];
    if reader.read(&mut rest)? != 0 {
        return Err(Error::format("trailing bytes after the posting lists"));
    }

    Ok(InvertedIndex::from_postings(words))
}

/// Only the canonical decimal form of a `u16` survives a round trip.
fn encode_docid(docid: &str) -> Result<u16> {
    match docid.parse::<u16>() {
        Ok(id) if id.to_string() == docid => Ok(id),
        Ok(_) => Err(Error::InvalidDocId(docid.to_string())),
        Err(_) if !docid.is_empty() && docid.bytes().all(|b| b.is_ascii_digit()) => {
            Err(Error::EncodingOverflow {
                what: "document id",
                value: docid.parse().unwrap_or(u64::MAX),
                max: u16::MAX as u64,
            })
        }
        Err(_) => Err(Error::InvalidDocId(docid.to_string())),
    }
}

fn checked_u16(what: &'static str, value: usize) -> Result<u16> {
    u16::try_from(value).map_err(|_| Error::EncodingOverflow {
        what,
        value: value as u64,
        max: u16::MAX as u64,
    })
}

fn checked_u32(what: &'static str, value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::EncodingOverflow {
        what,
        value: value as u64,
        max: u32::MAX as u64,
    })
}
