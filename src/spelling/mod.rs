//! Spell checking against a Solr index.
//!
//! Dictionary words are indexed as n-gram documents by
//! [`SpellCheckIndexWriter`]; [`QuerySuggester`] looks misspelled tokens up by
//! their n-grams and re-ranks the hits by edit distance and weight.

pub mod collator;
pub mod dictionary;
pub mod distance;
pub mod ngram;
pub mod query_builder;
pub mod suggest;
pub mod writer;

pub use collator::collate;
pub use dictionary::{DictionaryReader, DictionaryRecord};
pub use distance::{DistanceKind, StringDistance};
pub use ngram::{NGramHolder, NGramHolderBuilder};
pub use query_builder::NGramQueryBuilder;
pub use suggest::{Candidate, QuerySuggester, ScoredCandidate, rank_candidates};
pub use writer::{IndexingStats, SpellCheckIndexWriter};
