//! Token counting.
//!
//! Counts with the `cl100k_base` BPE encoding; falls back to a
//! four-characters-per-token estimate when the encoding cannot be loaded.

use std::sync::OnceLock;
use tiktoken_rs::CoreBPE;
use tracing::warn;

/// Name of the BPE encoding used by [`count_tokens`].
pub const ENCODING: &str = "cl100k_base";

fn encoding() -> Option<&'static CoreBPE> {
    static BPE: OnceLock<Option<CoreBPE>> = OnceLock::new();
    BPE.get_or_init(|| match tiktoken_rs::cl100k_base() {
        Ok(bpe) => Some(bpe),
        Err(e) => {
            warn!("failed to load {ENCODING} encoding, estimating tokens: {e}");
            None
        }
    })
    .as_ref()
}

/// Token count of `text` under `cl100k_base`, or [`estimate_tokens`] if the
/// encoding is unavailable.
pub fn count_tokens(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    match encoding() {
        Some(bpe) => bpe.encode_ordinary(text).len(),
        None => estimate_tokens(text),
    }
}

/// Approximate token count of `text` at roughly four characters per token.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_tokens() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abc"), 1);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
        // Counts characters, not bytes.
        assert_eq!(estimate_tokens("├──├"), 1);
    }

    #[test]
    fn test_count_tokens_uses_bpe() {
        assert!(encoding().is_some());
        assert_eq!(count_tokens(""), 0);
        assert_eq!(count_tokens("hello world"), 2);
        assert_eq!(estimate_tokens("hello world"), 3);
    }

    #[test]
    fn test_special_token_text_counted_as_text() {
        assert!(count_tokens("<|endoftext|>") > 1);
    }
}
