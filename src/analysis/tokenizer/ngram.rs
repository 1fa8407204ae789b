//! Character n-gram splitter.
//!
//! The spellcheck index matches misspelled words through their n-grams, so
//! these grams back both the document side (`gram*` fields) and the query
//! side of the lookup.

use crate::error::{Result, SuggestError};

/// Splits text into overlapping grams of a fixed number of characters.
///
/// # Examples
///
/// ```
/// use solr_suggest::analysis::tokenizer::ngram::NgramTokenizer;
///
/// let tokenizer = NgramTokenizer::new(3).unwrap();
/// assert_eq!(tokenizer.grams("hello"), vec!["hel", "ell", "llo"]);
/// ```
#[derive(Clone, Debug)]
pub struct NgramTokenizer {
    gram_size: usize,
}

impl NgramTokenizer {
    /// Create a tokenizer emitting grams of exactly `gram_size` characters.
    ///
    /// # Errors
    ///
    /// Returns an error if `gram_size` is 0.
    pub fn new(gram_size: usize) -> Result<Self> {
        if gram_size == 0 {
            return Err(SuggestError::analysis("gram_size must be at least 1"));
        }
        Ok(Self { gram_size })
    }

    /// The grams of `text` in order; empty when `text` is too short.
    pub fn grams(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < self.gram_size {
            return Vec::new();
        }

        chars
            .windows(self.gram_size)
            .map(|window| window.iter().collect())
            .collect()
    }
}
