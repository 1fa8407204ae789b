//! Blocking HTTP implementation of [`SolrClient`].

use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::SolrConfig;
use crate::error::{Result, SuggestError};
use crate::solr::{RequestMethod, SolrClient, SolrInputDocument, SolrQuery, SolrResponse};

/// Talks to one Solr core (or collection) through its JSON API.
///
/// `base_url` points at the core, e.g. `http://localhost:8983/solr/portal`;
/// `/select` and `/update` are appended to it.
///
/// # Examples
///
/// ```no_run
/// use solr_suggest::solr::{HttpSolrClient, SolrClient, SolrQuery};
///
/// # fn example() -> solr_suggest::error::Result<()> {
/// let client = HttpSolrClient::new("http://localhost:8983/solr/portal")?;
/// let response = client.query(&SolrQuery::new("word:hello").with_rows(5))?;
/// println!("{} matches", response.num_found);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpSolrClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct SelectBody {
    response: SolrResponse,
}

impl HttpSolrClient {
    /// Create a client with the default timeout.
    pub fn new<S: Into<String>>(base_url: S) -> Result<Self> {
        Self::from_config(&SolrConfig {
            url: base_url.into(),
            ..SolrConfig::default()
        })
    }

    /// Create a client from configuration.
    pub fn from_config(config: &SolrConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SuggestError::search(format!("Unable to create HTTP client: {e}")))?;

        Ok(HttpSolrClient {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// The core URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn update<T: Serialize + ?Sized>(&self, body: &T) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/update", self.base_url))
            .query(&[("wt", "json")])
            .json(body)
            .send()
            .map_err(|e| SuggestError::search(format!("Solr update request failed: {e}")))?;

        Self::read_body(response)?;
        Ok(())
    }

    fn read_body(response: Response) -> Result<String> {
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| SuggestError::search(format!("Failed to read Solr response: {e}")))?;

        if !status.is_success() {
            debug!("Solr returned {status}: {body}");
            return Err(SuggestError::search(format!(
                "Solr error (status {status}): {body}"
            )));
        }

        Ok(body)
    }
}

impl SolrClient for HttpSolrClient {
    fn query(&self, query: &SolrQuery) -> Result<SolrResponse> {
        let url = format!("{}/select", self.base_url);
        let params = query.to_params();

        let request = match query.method() {
            RequestMethod::Get => self.client.get(url).query(&params),
            RequestMethod::Post => self.client.post(url).form(&params),
        };

        let response = request
            .send()
            .map_err(|e| SuggestError::search(format!("Solr query failed: {e}")))?;
        let body = Self::read_body(response)?;

        let select: SelectBody = serde_json::from_str(&body).map_err(|e| {
            SuggestError::search(format!("Failed to parse Solr response: {e}"))
        })?;

        Ok(select.response)
    }

    fn add(&self, documents: &[SolrInputDocument]) -> Result<()> {
        if documents.is_empty() {
            return Ok(());
        }
        self.update(documents)
    }

    fn delete_by_query(&self, query: &str) -> Result<()> {
        self.update(&json!({ "delete": { "query": query } }))
    }

    fn commit(&self) -> Result<()> {
        self.update(&json!({ "commit": {} }))
    }
}
