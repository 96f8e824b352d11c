use invindex::{read_documents, Corpus};

/// The bundled sample is tiny, so it's repeated under fresh ids.
pub fn dataset() -> Corpus {
    let sample = read_documents(std::include_bytes!("../../datasets/sample.txt").as_ref()).unwrap();
    let mut corpus = Corpus::new();
    for round in 0..1000 {
        for (i, content) in sample.values().enumerate() {
            corpus.insert((round * sample.len() + i).to_string(), content.clone());
        }
    }
    corpus
}
