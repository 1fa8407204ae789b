//! Builds the n-gram lookup query for a misspelled token.

use crate::error::Result;
use crate::solr::{SolrQuery, escape_query_chars};
use crate::spelling::ngram::NGramHolderBuilder;

/// Turns a token into a Solr query over the `start*`, `end*` and `gram*`
/// fields written by the dictionary loader.
///
/// Clauses are space separated so Solr ORs them; matching the first or last
/// gram of a word is boosted because typos tend to sit in the middle.
#[derive(Debug, Clone)]
pub struct NGramQueryBuilder {
    holder_builder: NGramHolderBuilder,
    start_boost: f32,
    end_boost: f32,
}

impl Default for NGramQueryBuilder {
    fn default() -> Self {
        Self::new(2.0, 1.0)
    }
}

impl NGramQueryBuilder {
    pub fn new(start_boost: f32, end_boost: f32) -> Self {
        NGramQueryBuilder {
            holder_builder: NGramHolderBuilder::new(),
            start_boost,
            end_boost,
        }
    }

    /// The `q` string for `token`.
    ///
    /// ```
    /// use solr_suggest::spelling::query_builder::NGramQueryBuilder;
    ///
    /// let query = NGramQueryBuilder::default().build_query_string("ab").unwrap();
    /// assert_eq!(
    ///     query,
    ///     "start1:a^2 start2:ab^2 end1:b end2:ab gram1:a gram1:b gram2:ab"
    /// );
    /// ```
    pub fn build_query_string(&self, token: &str) -> Result<String> {
        let holder = self.holder_builder.build(token)?;
        let mut clauses = Vec::new();

        for (field, gram) in holder.ngram_starts() {
            clauses.push(boosted(field, gram, self.start_boost));
        }
        for (field, gram) in holder.ngram_ends() {
            clauses.push(boosted(field, gram, self.end_boost));
        }
        for (field, grams) in holder.ngrams() {
            for gram in grams {
                clauses.push(format!("{field}:{}", escape_query_chars(gram)));
            }
        }

        Ok(clauses.join(" "))
    }

    /// A [`SolrQuery`] for `token`; callers add rows and filters.
    pub fn build_query(&self, token: &str) -> Result<SolrQuery> {
        Ok(SolrQuery::new(self.build_query_string(token)?))
    }
}

fn boosted(field: &str, gram: &str, boost: f32) -> String {
    let gram = escape_query_chars(gram);
    if boost == 1.0 {
        format!("{field}:{gram}")
    } else {
        format!("{field}:{gram}^{boost}")
    }
}
