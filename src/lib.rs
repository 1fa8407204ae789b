//! # solr-suggest
//!
//! Spell checking and keyword suggestions for a portal search index backed by
//! Solr.
//!
//! ## Features
//!
//! - N-gram candidate lookup re-ranked by string distance and word weight
//! - "Did you mean" sentence collation
//! - Keyword query completion scoped by company, site and locale
//! - Per-locale dictionary loading with batched bulk writes

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod solr;
pub mod spelling;
