use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use indexmap::IndexMap;

use crate::{DocId, Error, Result};

/// Documents by id, in the order they appear in the dataset.
pub type Corpus = IndexMap<DocId, String>;

/// Load a dataset file where each line is `<id><whitespace><content>`.
pub fn load_documents(path: impl AsRef<Path>) -> Result<Corpus> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let corpus = read_documents(BufReader::new(file))?;
    log::debug!("Loaded {} documents from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// Parse a dataset from any buffered reader.
///
/// Blank lines are skipped. A line without content after its id fails the
/// whole load: no partial corpus is ever returned. When an id shows up twice
/// the last content wins.
pub fn read_documents(reader: impl BufRead) -> Result<Corpus> {
    let mut corpus = Corpus::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (docid, content) = parse_line(line).ok_or_else(|| Error::Parse {
            line: line_number + 1,
            content: line.to_string(),
        })?;
        corpus.insert(docid.to_string(), content.to_string());
    }
    Ok(corpus)
}

/// Split a trimmed line on its first whitespace run.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (docid, content) = line.split_once(char::is_whitespace)?;
    let content = content.trim_start();
    (!content.is_empty()).then_some((docid, content))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use big_s::S;

    use super::*;

    const TINY_DATASET: &str = "\
123    some words A_word and nothing
2      some words B_word in this dataset
5      famous_phrases to be or not to be
37     all words such as A_word and B_word are here
";

    fn tiny_corpus() -> Corpus {
        Corpus::from([
            (S("123"), S("some words A_word and nothing")),
            (S("2"), S("some words B_word in this dataset")),
            (S("5"), S("famous_phrases to be or not to be")),
            (S("37"), S("all words such as A_word and B_word are here")),
        ])
    }

    #[test]
    fn can_load_documents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TINY_DATASET.as_bytes()).unwrap();

        let corpus = load_documents(file.path()).unwrap();
        assert_eq!(corpus, tiny_corpus());
        let ids: Vec<_> = corpus.keys().map(String::as_str).collect();
        assert_eq!(ids, ["123", "2", "5", "37"]);
    }

    #[test]
    fn tabs_and_blank_lines() {
        let corpus = read_documents("1\tfirst doc\n\n   \n2 \t second  doc \n".as_bytes()).unwrap();
        assert_eq!(
            corpus,
            Corpus::from([(S("1"), S("first doc")), (S("2"), S("second  doc"))])
        );
    }

    #[test]
    fn ids_are_kept_verbatim() {
        let corpus = read_documents("007 agent\ndoc-a text\n".as_bytes()).unwrap();
        assert_eq!(corpus["007"], "agent");
        assert_eq!(corpus["doc-a"], "text");
    }

    #[test]
    fn later_duplicates_overwrite() {
        let corpus = read_documents("1 old\n2 other\n1 new\n".as_bytes()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus["1"], "new");
    }

    #[test]
    fn missing_content_is_a_parse_error() {
        let err = read_documents("1 fine\n2\n3 fine\n".as_bytes()).unwrap_err();
        match err {
            Error::Parse { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "2");
            }
            err => panic!("unexpected error {err:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_documents(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
