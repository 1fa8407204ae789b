//! N-gram decomposition of dictionary words.
//!
//! A word is split into character n-grams for a small range of sizes chosen
//! from its length. For every size `n` three Solr fields are produced:
//! `start{n}` (first gram), `end{n}` (last gram) and the multi-valued
//! `gram{n}` (every gram, in order). The same decomposition drives both the
//! indexed documents and the lookup query, which is what makes the fuzzy
//! match work.

use std::collections::BTreeMap;

use crate::analysis::tokenizer::NgramTokenizer;
use crate::error::Result;
use crate::solr::SolrInputDocument;

/// The n-gram fields of one word, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NGramHolder {
    starts: BTreeMap<String, String>,
    ends: BTreeMap<String, String>,
    grams: BTreeMap<String, Vec<String>>,
}

impl NGramHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_ngram_start(&mut self, size: usize, gram: String) {
        self.starts.insert(format!("start{size}"), gram);
    }

    pub fn add_ngram_end(&mut self, size: usize, gram: String) {
        self.ends.insert(format!("end{size}"), gram);
    }

    pub fn add_ngram(&mut self, size: usize, gram: String) {
        self.grams.entry(format!("gram{size}")).or_default().push(gram);
    }

    /// `start{n}` fields.
    pub fn ngram_starts(&self) -> &BTreeMap<String, String> {
        &self.starts
    }

    /// `end{n}` fields.
    pub fn ngram_ends(&self) -> &BTreeMap<String, String> {
        &self.ends
    }

    /// `gram{n}` fields.
    pub fn ngrams(&self) -> &BTreeMap<String, Vec<String>> {
        &self.grams
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    /// Write every field into `document`: ends, then starts, then grams.
    pub fn add_to_document(&self, document: &mut SolrInputDocument) {
        for (name, gram) in &self.ends {
            document.add_field(name.as_str(), gram.as_str());
        }
        for (name, gram) in &self.starts {
            document.add_field(name.as_str(), gram.as_str());
        }
        for (name, grams) in &self.grams {
            for gram in grams {
                document.add_field(name.as_str(), gram.as_str());
            }
        }
    }
}

/// Smallest gram size for a word of `length` characters.
pub fn min_ngram_size(length: usize) -> usize {
    match length {
        l if l > 5 => 3,
        5 => 2,
        _ => 1,
    }
}

/// Largest gram size for a word of `length` characters.
pub fn max_ngram_size(length: usize) -> usize {
    match length {
        l if l > 5 => 4,
        5 => 3,
        _ => 2,
    }
}

/// Builds [`NGramHolder`]s, optionally with fixed gram sizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NGramHolderBuilder {
    sizes: Option<(usize, usize)>,
}

impl NGramHolderBuilder {
    /// Builder that picks gram sizes from the word length.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder that always uses `min..=max`.
    pub fn with_sizes(min: usize, max: usize) -> Self {
        NGramHolderBuilder {
            sizes: Some((min, max)),
        }
    }

    /// Decompose `text` into its n-gram fields.
    ///
    /// ```
    /// use solr_suggest::spelling::ngram::NGramHolderBuilder;
    ///
    /// let holder = NGramHolderBuilder::new().build("hello").unwrap();
    /// assert_eq!(holder.ngram_starts()["start3"], "hel");
    /// assert_eq!(holder.ngram_ends()["end3"], "llo");
    /// assert_eq!(holder.ngrams()["gram2"], vec!["he", "el", "ll", "lo"]);
    /// ```
    pub fn build(&self, text: &str) -> Result<NGramHolder> {
        let length = text.chars().count();
        let (min, max) = self
            .sizes
            .unwrap_or_else(|| (min_ngram_size(length), max_ngram_size(length)));

        let mut holder = NGramHolder::new();

        for size in min..=max {
            let grams = NgramTokenizer::new(size)?.grams(text);
            let (Some(first), Some(last)) = (grams.first(), grams.last()) else {
                continue;
            };

            holder.add_ngram_start(size, first.clone());
            holder.add_ngram_end(size, last.clone());
            for gram in grams {
                holder.add_ngram(size, gram);
            }
        }

        Ok(holder)
    }
}
