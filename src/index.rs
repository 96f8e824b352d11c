use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::{tokenize, Corpus, DocId};

/// Map every word to the set of documents containing it.
///
/// Both the words and each posting list keep their insertion order, but
/// equality ignores it: two indexes are equal when they hold the same
/// `(word, set of ids)` pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InvertedIndex {
    words: IndexMap<String, IndexSet<DocId>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an index from already deduplicated posting lists.
    pub(crate) fn from_postings(words: IndexMap<String, IndexSet<DocId>>) -> Self {
        Self { words }
    }

    /// Record that `docid` contains every word of `words`.
    /// A word present multiple times in the same document is only counted once.
    pub fn add<'a>(&mut self, docid: &str, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            let ids = self.words.entry(word.to_string()).or_default();
            if !ids.contains(docid) {
                ids.insert(docid.to_string());
            }
        }
    }

    /// Return the documents containing *all* the `terms`.
    ///
    /// An empty query matches nothing, and so does a query containing a
    /// word that isn't in the index. The order of the result is unspecified.
    pub fn query<S: AsRef<str>>(&self, terms: &[S]) -> Vec<DocId> {
        let mut postings = Vec::with_capacity(terms.len());
        for term in terms {
            match self.words.get(term.as_ref()) {
                Some(ids) => postings.push(ids),
                None => return Vec::new(),
            }
        }

        let Some((first, rest)) = postings.split_first() else {
            return Vec::new();
        };

        first
            .iter()
            .filter(|docid| rest.iter().all(|ids| ids.contains(*docid)))
            .cloned()
            .collect()
    }

    /// Posting list of one word, `None` if the word was never indexed.
    pub fn postings(&self, word: &str) -> Option<impl Iterator<Item = &str> + '_> {
        self.words
            .get(word)
            .map(|ids| ids.iter().map(String::as_str))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.keys().map(String::as_str)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &IndexSet<DocId>)> + '_ {
        self.words.iter()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of the length of every posting list.
    pub fn posting_count(&self) -> usize {
        self.words.values().map(IndexSet::len).sum()
    }
}

/// Tokenize every document of the corpus and index its words.
pub fn build_inverted_index(corpus: &Corpus) -> InvertedIndex {
    let mut index = InvertedIndex::new();
    for (docid, content) in corpus {
        index.add(docid, tokenize(content));
    }

    log::debug!(
        "Indexed {} documents: {} words, {} postings",
        corpus.len(),
        index.len(),
        index.posting_count()
    );
    index
}
