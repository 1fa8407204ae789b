//! In-memory Solr client shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use solr_suggest::error::{Result, SuggestError};
use solr_suggest::solr::{SolrClient, SolrDocument, SolrInputDocument, SolrQuery, SolrResponse};

/// One request seen by [`RecordingSolrClient`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Query(SolrQuery),
    Add(Vec<SolrInputDocument>),
    DeleteByQuery(String),
    Commit,
}

/// Records every request and answers queries from a queue of canned
/// responses. An empty queue answers with no documents.
#[derive(Default)]
pub struct RecordingSolrClient {
    calls: Mutex<Vec<Call>>,
    responses: Mutex<VecDeque<SolrResponse>>,
    fail_add_at: Mutex<Option<usize>>,
    fail_queries: Mutex<bool>,
}

impl RecordingSolrClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response made of `(word, weight)` spellcheck documents.
    pub fn with_candidates(self, candidates: &[(&str, f64)]) -> Self {
        let docs = candidates
            .iter()
            .map(|(word, weight)| {
                SolrDocument::new()
                    .with_field("word", *word)
                    .with_field("weight", weight.to_string())
            })
            .collect();
        self.with_response(SolrResponse::from_docs(docs))
    }

    pub fn with_response(self, response: SolrResponse) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Fail the `n`th add request, counting from zero.
    pub fn failing_add_at(self, n: usize) -> Self {
        *self.fail_add_at.lock().unwrap() = Some(n);
        self
    }

    pub fn failing_queries(self) -> Self {
        *self.fail_queries.lock().unwrap() = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<SolrQuery> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Query(query) => Some(query),
                _ => None,
            })
            .collect()
    }

    pub fn batches(&self) -> Vec<Vec<SolrInputDocument>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Add(documents) => Some(documents),
                _ => None,
            })
            .collect()
    }

    pub fn added_words(&self) -> Vec<String> {
        self.batches()
            .iter()
            .flatten()
            .filter_map(|document| document.get_field_value("word").map(str::to_string))
            .collect()
    }

    pub fn commits(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Commit))
            .count()
    }
}

impl SolrClient for RecordingSolrClient {
    fn query(&self, query: &SolrQuery) -> Result<SolrResponse> {
        self.calls.lock().unwrap().push(Call::Query(query.clone()));

        if *self.fail_queries.lock().unwrap() {
            return Err(SuggestError::search("connection refused"));
        }
        Ok(self.responses.lock().unwrap().pop_front().unwrap_or_default())
    }

    fn add(&self, documents: &[SolrInputDocument]) -> Result<()> {
        let mut calls = self.calls.lock().unwrap();
        let adds = calls.iter().filter(|call| matches!(call, Call::Add(_))).count();
        calls.push(Call::Add(documents.to_vec()));

        if *self.fail_add_at.lock().unwrap() == Some(adds) {
            return Err(SuggestError::search("bulk add rejected"));
        }
        Ok(())
    }

    fn delete_by_query(&self, query: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::DeleteByQuery(query.to_string()));
        Ok(())
    }

    fn commit(&self) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Commit);
        Ok(())
    }
}
