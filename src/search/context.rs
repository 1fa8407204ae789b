//! The per-request search context.

use serde::{Deserialize, Serialize};

/// Who is searching, for what, and in which locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchContext {
    /// Owning company (tenant) of the searched content.
    pub company_id: u64,
    /// Sites the search is scoped to; empty means all of them.
    pub group_ids: Vec<u64>,
    /// Raw keyword string typed by the user.
    pub keywords: String,
    /// Locale identifier such as `en_US`.
    pub locale: String,
}

impl SearchContext {
    pub fn new<K: Into<String>, L: Into<String>>(company_id: u64, keywords: K, locale: L) -> Self {
        SearchContext {
            company_id,
            group_ids: Vec::new(),
            keywords: keywords.into(),
            locale: locale.into(),
        }
    }

    pub fn with_group_ids(mut self, group_ids: Vec<u64>) -> Self {
        self.group_ids = group_ids;
        self
    }
}
