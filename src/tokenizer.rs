/// Split `content` into words on whitespace runs. Words are kept verbatim:
/// no case folding and no punctuation stripping.
pub fn tokenize(content: &str) -> impl Iterator<Item = &str> {
    content.split_whitespace()
}
