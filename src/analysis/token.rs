//! Token types produced by the tokenizers.
//!
//! A token keeps the byte span it was cut from, so a corrected sentence can
//! be rebuilt around the original punctuation and spacing.
//!
//! # Examples
//!
//! ```
//! use solr_suggest::analysis::token::Token;
//!
//! let token = Token::new("world", 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(&"hello world"[token.start_offset..token.end_offset], "world");
//! ```

/// A single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with its text and byte offsets.
    pub fn new<S: Into<String>>(text: S, start_offset: usize, end_offset: usize) -> Self {
        Token {
            text: text.into(),
            start_offset,
            end_offset,
        }
    }
}

/// A token stream is a boxed iterator of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 3, 8);
        assert_eq!(token.text, "hello");
        assert_eq!(token.start_offset, 3);
        assert_eq!(token.end_offset, 8);
    }
}
