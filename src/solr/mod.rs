//! Client-side view of the Solr cluster that stores the spellcheck index.
//!
//! Everything the suggester and the dictionary writer need from Solr goes
//! through the [`SolrClient`] trait: one query entry point and the three
//! update operations. [`HttpSolrClient`] implements it over Solr's JSON API.

pub mod document;
pub mod http;
pub mod query;

pub use document::{SolrDocument, SolrInputDocument, SolrResponse};
pub use http::HttpSolrClient;
pub use query::{RequestMethod, SolrQuery, escape_query_chars};

use crate::error::Result;

/// Operations issued against a Solr core or collection.
///
/// Implementations must report every transport, status or decoding problem
/// as [`SuggestError::Search`](crate::error::SuggestError::Search).
pub trait SolrClient: Send + Sync {
    /// Run a select query and return the matching documents.
    fn query(&self, query: &SolrQuery) -> Result<SolrResponse>;

    /// Add or replace a batch of documents.
    fn add(&self, documents: &[SolrInputDocument]) -> Result<()>;

    /// Delete every document matching `query`.
    fn delete_by_query(&self, query: &str) -> Result<()>;

    /// Make pending updates visible to searchers.
    fn commit(&self) -> Result<()>;
}
