//! src/tokenizer.rs

/// Strips every ASCII punctuation character from `text`, then splits the
/// remainder on whitespace runs. No case folding: "The" and "the" are
/// distinct tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let stripped: String = text
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    stripped.split_whitespace().map(str::to_string).collect()
}
