//! Tokenizer implementations for text analysis.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokens must come out in text order with byte offsets into `text`.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;
}

pub mod ngram;
pub mod unicode_word;

pub use ngram::NgramTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
