//! Configuration for the Solr connection, the suggester and the dictionary
//! writer.
//!
//! All structs deserialize from JSON with every field optional, so a config
//! file only needs to mention what differs from the defaults:
//!
//! ```
//! use solr_suggest::config::Config;
//!
//! let config: Config = serde_json::from_str(r#"{
//!     "solr": { "url": "http://search:8983/solr/portal" },
//!     "index_writer": { "batch_size": 500, "commit": true }
//! }"#).unwrap();
//!
//! assert_eq!(config.index_writer.batch_size, 500);
//! assert_eq!(config.suggester.max_candidates, 50);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SuggestError};
use crate::spelling::distance::DistanceKind;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub solr: SolrConfig,
    pub suggester: SuggesterConfig,
    pub index_writer: IndexWriterConfig,
}

impl Config {
    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            SuggestError::config(format!("Unable to read {}: {e}", path.display()))
        })?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.suggester.validate()?;
        self.index_writer.validate()
    }
}

/// Where the Solr core lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolrConfig {
    /// Core or collection URL.
    pub url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SolrConfig {
    fn default() -> Self {
        SolrConfig {
            url: "http://localhost:8983/solr/collection1".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Configuration for spelling suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggesterConfig {
    /// Candidates are kept only when their similarity is above this value.
    pub threshold: f32,
    /// Maximum number of candidates fetched from Solr per token.
    pub max_candidates: usize,
    /// Similarity metric used to re-rank candidates.
    pub distance: DistanceKind,
    /// Boost applied to `start*` n-gram clauses.
    pub start_boost: f32,
    /// Boost applied to `end*` n-gram clauses.
    pub end_boost: f32,
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        SuggesterConfig {
            threshold: 0.5,
            max_candidates: 50,
            distance: DistanceKind::Levenshtein,
            start_boost: 2.0,
            end_boost: 1.0,
        }
    }
}

impl SuggesterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_candidates == 0 {
            return Err(SuggestError::config("max_candidates must be at least 1"));
        }
        if !self.threshold.is_finite() {
            return Err(SuggestError::config("threshold must be a finite number"));
        }
        Ok(())
    }
}

/// Configuration for loading dictionaries into the spellcheck index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexWriterConfig {
    /// Number of documents sent per bulk add.
    pub batch_size: usize,
    /// Commit after clearing and after every batch.
    pub commit: bool,
    /// Locales indexed by a full reload, e.g. `en_US`.
    pub supported_locales: Vec<String>,
    /// Directory holding one sub-directory of dictionary files per locale.
    pub dictionaries_directory: PathBuf,
}

impl Default for IndexWriterConfig {
    fn default() -> Self {
        IndexWriterConfig {
            batch_size: 1000,
            commit: false,
            supported_locales: vec!["en_US".to_string()],
            dictionaries_directory: PathBuf::from("dictionaries"),
        }
    }
}

impl IndexWriterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(SuggestError::config("batch_size must be at least 1"));
        }
        Ok(())
    }
}
