//! Prompt token counting via tiktoken-rs, with a character-based fallback.

use std::sync::LazyLock;

use tiktoken_rs::CoreBPE;

// None if the BPE tables fail to load; counting then degrades to an estimate.
static CL100K: LazyLock<Option<CoreBPE>> = LazyLock::new(|| tiktoken_rs::cl100k_base().ok());

/// Count tokens in `text` using the cl100k_base encoding.
pub fn count_tokens(text: &str) -> usize {
    match CL100K.as_ref() {
        Some(bpe) => bpe.encode_with_special_tokens(text).len(),
        None => estimate_tokens(text),
    }
}

/// Rough token estimate: one token per four characters, rounded up.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_tokens() {
        assert_eq!(count_tokens(""), 0);
        assert_eq!(estimate_tokens(""), 0);
    }

    #[test]
    fn longer_text_has_more_tokens() {
        let short = count_tokens("Vibration sensor triggered.");
        let long = count_tokens(&"Vibration sensor triggered. ".repeat(50));
        assert!(short > 0);
        assert!(long > short * 10);
    }

    #[test]
    fn estimate_rounds_up() {
        assert_eq!(estimate_tokens("abcde"), 2);
        assert_eq!(estimate_tokens("abcd"), 1);
    }
}
