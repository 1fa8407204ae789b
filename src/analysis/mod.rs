//! Text analysis used on both sides of the spellcheck index.
//!
//! Keywords typed by users are split into words with the Unicode word
//! tokenizer, and dictionary words are decomposed into character n-grams
//! before they are written to Solr.

pub mod token;
pub mod tokenizer;

pub use token::*;
pub use tokenizer::*;
