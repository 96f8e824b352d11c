use std::{
    fmt,
    io::{BufWriter, Read, Write},
};

use indexmap::{IndexMap, IndexSet};
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};

use super::StorageStrategy;
use crate::{DocId, Error, InvertedIndex, Result};

/// Stores the index as one JSON object: `{"word": ["id", ...], ...}`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonStrategy;

/// Older dumps wrote numeric ids as JSON integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocId {
    Text(DocId),
    Number(u64),
}

impl From<RawDocId> for DocId {
    fn from(raw: RawDocId) -> Self {
        match raw {
            RawDocId::Text(docid) => docid,
            RawDocId::Number(docid) => docid.to_string(),
        }
    }
}

/// The words of a dump in file order, repeated keys included so that
/// they can be rejected instead of overwriting each other.
struct RawIndex(Vec<(String, Vec<RawDocId>)>);

impl<'de> Deserialize<'de> for RawIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RawIndexVisitor;

        impl<'de> Visitor<'de> for RawIndexVisitor {
            type Value = RawIndex;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping each word to its document ids")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<RawIndex, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(RawIndex(entries))
            }
        }

        deserializer.deserialize_map(RawIndexVisitor)
    }
}

impl StorageStrategy for JsonStrategy {
    fn dump<W: Write>(&self, index: &InvertedIndex, writer: W) -> Result<()> {
        let mut writer = BufWriter::new(writer);
        serde_json::to_writer(&mut writer, index)?;
        writer.flush()?;
        Ok(())
    }

    fn load<R: Read>(&self, reader: R) -> Result<InvertedIndex> {
        let RawIndex(raw) = serde_json::from_reader(reader)?;

        let mut words = IndexMap::with_capacity(raw.len());
        for (word, ids) in raw {
            let mut postings = IndexSet::with_capacity(ids.len());
            for docid in ids {
                let docid = DocId::from(docid);
                if let Some(docid) = postings.replace(docid) {
                    return Err(Error::format(format!(
                        "document {docid:?} is listed twice for the word {word:?}"
                    )));
                }
            }
            if words.contains_key(&word) {
                return Err(Error::format(format!("the word {word:?} appears twice")));
            }
            words.insert(word, postings);
        }
        Ok(InvertedIndex::from_postings(words))
    }
}
