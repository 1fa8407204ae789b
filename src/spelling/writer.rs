//! Loads dictionary files into the Solr spellcheck index.
//!
//! Dictionaries live under `<dictionaries_directory>/<locale>/`, any number
//! of files per locale, one `word weight` record per line. Each record becomes
//! one document carrying the word, its weight and the n-gram fields the
//! suggester queries.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};
use serde::Serialize;

use crate::config::IndexWriterConfig;
use crate::error::{Result, SuggestError};
use crate::search::{field, filter_query};
use crate::solr::{SolrClient, SolrInputDocument};
use crate::spelling::dictionary::{DictionaryReader, DictionaryRecord};
use crate::spelling::ngram::NGramHolderBuilder;

/// Unique key of the document holding `word` for `locale`.
pub fn uid(locale: &str, word: &str) -> String {
    format!("{locale}_{}_{word}", field::SPELLCHECKING_TYPE)
}

/// What a load did.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndexingStats {
    /// Dictionary files read to the end.
    pub files: usize,
    /// Documents sent by files that loaded completely.
    pub documents: usize,
    /// Bulk add requests issued.
    pub batches: usize,
    /// Locales without a dictionary directory.
    pub skipped_locales: Vec<String>,
    /// Files whose load was aborted, with the reason.
    pub failed_files: Vec<(PathBuf, String)>,
    /// Locales whose directory could not be listed, with the reason.
    pub failed_locales: Vec<(String, String)>,
}

impl IndexingStats {
    fn merge(&mut self, other: IndexingStats) {
        self.files += other.files;
        self.documents += other.documents;
        self.batches += other.batches;
        self.skipped_locales.extend(other.skipped_locales);
        self.failed_files.extend(other.failed_files);
        self.failed_locales.extend(other.failed_locales);
    }

    /// Merge one locale's outcome; an error is recorded against the locale.
    fn merge_locale(&mut self, locale: &str, outcome: Result<IndexingStats>) {
        match outcome {
            Ok(stats) => self.merge(stats),
            Err(e) => {
                warn!("Unable to load dictionaries for {locale}: {e}");
                self.failed_locales.push((locale.to_string(), e.to_string()));
            }
        }
    }

    /// Whether every locale and file was loaded.
    pub fn is_complete(&self) -> bool {
        self.failed_files.is_empty() && self.failed_locales.is_empty()
    }
}

/// Writes dictionary words into the spellcheck index.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use solr_suggest::config::IndexWriterConfig;
/// use solr_suggest::solr::HttpSolrClient;
/// use solr_suggest::spelling::SpellCheckIndexWriter;
///
/// # fn example() -> solr_suggest::error::Result<()> {
/// let client = Arc::new(HttpSolrClient::new("http://localhost:8983/solr/portal")?);
/// let writer = SpellCheckIndexWriter::new(client, IndexWriterConfig::default())?;
///
/// let stats = writer.index_dictionaries()?;
/// println!("{} words indexed", stats.documents);
/// # Ok(())
/// # }
/// ```
pub struct SpellCheckIndexWriter {
    client: Arc<dyn SolrClient>,
    ngram_builder: NGramHolderBuilder,
    config: IndexWriterConfig,
}

impl SpellCheckIndexWriter {
    pub fn new(client: Arc<dyn SolrClient>, config: IndexWriterConfig) -> Result<Self> {
        config.validate()?;

        Ok(SpellCheckIndexWriter {
            client,
            ngram_builder: NGramHolderBuilder::new(),
            config,
        })
    }

    pub fn config(&self) -> &IndexWriterConfig {
        &self.config
    }

    /// Delete every spellcheck document, committing if configured.
    pub fn clear_dictionary_indexes(&self) -> Result<()> {
        let delete_query = filter_query(field::TYPE, field::SPELLCHECKING_TYPE);

        self.client
            .delete_by_query(&delete_query)
            .and_then(|_| {
                if self.config.commit {
                    self.client.commit()
                } else {
                    Ok(())
                }
            })
            .map_err(|e| SuggestError::search(format!("Unable to delete documents: {e}")))
    }

    /// Wipe the spellcheck documents and reload every supported locale.
    ///
    /// The wipe happens first and is not undone if a later load fails. A
    /// locale that cannot be loaded is recorded in the returned stats and
    /// the remaining locales are still loaded.
    pub fn index_dictionaries(&self) -> Result<IndexingStats> {
        self.clear_dictionary_indexes()?;

        let mut stats = IndexingStats::default();
        for locale in &self.config.supported_locales {
            stats.merge_locale(locale, self.index_dictionary(locale));
        }

        info!(
            "Indexed {} words from {} dictionaries",
            stats.documents, stats.files
        );
        Ok(stats)
    }

    /// Load every file of one locale's dictionary directory.
    ///
    /// A missing directory is skipped with a warning. A directory that
    /// cannot be listed is an error. A file that fails is recorded in the
    /// returned stats and the remaining files are still loaded.
    pub fn index_dictionary(&self, locale: &str) -> Result<IndexingStats> {
        let directory = self.dictionary_directory(locale);
        let mut stats = IndexingStats::default();

        if !directory.is_dir() {
            warn!(
                "Dictionary directory {} does not exist, skipping {locale}",
                directory.display()
            );
            stats.skipped_locales.push(locale.to_string());
            return Ok(stats);
        }

        let files = dictionary_files(&directory).map_err(|e| {
            SuggestError::search(format!("Unable to list {}: {e}", directory.display()))
        })?;

        for path in files {
            match self.index_dictionary_file(&path, locale) {
                Ok(file_stats) => stats.merge(file_stats),
                Err(e) => {
                    warn!("Aborted loading {}: {e}", path.display());
                    stats.failed_files.push((path, e.to_string()));
                }
            }
        }

        Ok(stats)
    }

    /// Stream one dictionary file into the index in batches.
    ///
    /// Documents are flushed every `batch_size` records and once more for the
    /// remainder. Any read or remote error stops the file; batches already
    /// flushed stay in the index.
    pub fn index_dictionary_file<P: AsRef<Path>>(
        &self,
        path: P,
        locale: &str,
    ) -> Result<IndexingStats> {
        let path = path.as_ref();
        let wrap = |e: SuggestError| {
            debug!("Unable to index dictionary {}: {e}", path.display());
            SuggestError::search(format!("Unable to index {}: {e}", path.display()))
        };

        let reader = DictionaryReader::open(path).map_err(wrap)?;
        let mut stats = IndexingStats::default();
        let mut batch = Vec::new();

        for record in reader {
            let record = record.map_err(wrap)?;
            batch.push(self.build_document(locale, &record).map_err(wrap)?);

            if batch.len() >= self.config.batch_size {
                self.flush(&mut batch, &mut stats).map_err(wrap)?;
            }
        }

        if !batch.is_empty() {
            self.flush(&mut batch, &mut stats).map_err(wrap)?;
        }

        stats.files = 1;
        info!(
            "Indexed {} words from {} in {} batches",
            stats.documents,
            path.display(),
            stats.batches
        );
        Ok(stats)
    }

    /// The document written for one dictionary record.
    pub fn build_document(
        &self,
        locale: &str,
        record: &DictionaryRecord,
    ) -> Result<SolrInputDocument> {
        let mut document = SolrInputDocument::new();
        document.add_field(field::UID, uid(locale, &record.word));
        document.add_field(field::LANGUAGE_ID, locale);
        document.add_field(field::WORD, record.word.as_str());
        document.add_field(field::WEIGHT, record.weight.to_string());
        document.add_field(field::TYPE, field::SPELLCHECKING_TYPE);

        self.ngram_builder
            .build(&record.word)?
            .add_to_document(&mut document);

        Ok(document)
    }

    fn dictionary_directory(&self, locale: &str) -> PathBuf {
        self.config.dictionaries_directory.join(locale)
    }

    fn flush(&self, batch: &mut Vec<SolrInputDocument>, stats: &mut IndexingStats) -> Result<()> {
        self.client.add(batch)?;
        if self.config.commit {
            self.client.commit()?;
        }

        stats.documents += batch.len();
        stats.batches += 1;
        batch.clear();
        Ok(())
    }
}

/// Regular files of `directory`, sorted by name.
fn dictionary_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
