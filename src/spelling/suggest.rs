//! Spelling suggestions backed by the Solr spellcheck index.
//!
//! For each token the suggester fetches candidate words through an n-gram
//! query, re-scores them with a [`StringDistance`] and the stored word
//! weight, and returns the best ones. Keyword-query completion against
//! indexed "suggestion" documents lives here too.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::config::SuggesterConfig;
use crate::error::{Result, SuggestError};
use crate::search::{SearchContext, field, filter_queries, filter_query};
use crate::solr::{RequestMethod, SolrClient, SolrDocument, SolrQuery};
use crate::spelling::collator::collate;
use crate::spelling::distance::StringDistance;
use crate::spelling::query_builder::NGramQueryBuilder;

/// A word returned by the index together with its stored weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub word: String,
    pub weight: f32,
}

impl Candidate {
    pub fn new<S: Into<String>>(word: S, weight: f32) -> Self {
        Candidate {
            word: word.into(),
            weight,
        }
    }

    /// Read `word` and `weight` from a spellcheck document.
    ///
    /// A missing field or a weight that is not a number is an error: the
    /// document does not follow the spellcheck schema.
    pub fn from_document(document: &SolrDocument) -> Result<Self> {
        let word = document
            .first_value(field::WORD)
            .ok_or_else(|| SuggestError::search("Spellcheck document without a word"))?;

        let weight_text = document.first_value(field::WEIGHT).ok_or_else(|| {
            SuggestError::search(format!("Spellcheck document for {word} without a weight"))
        })?;

        let weight = weight_text.trim().parse::<f32>().map_err(|e| {
            SuggestError::search(format!("Invalid weight {weight_text:?} for {word}: {e}"))
        })?;

        Ok(Candidate { word, weight })
    }
}

/// A suggestion with its ranking score; lower scores rank first.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub word: String,
    pub score: f32,
}

impl ScoredCandidate {
    pub fn new<S: Into<String>>(word: S, score: f32) -> Self {
        ScoredCandidate {
            word: word.into(),
            score,
        }
    }
}

impl Eq for ScoredCandidate {}

impl Ord for ScoredCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Ascending score, ties by word so the order is deterministic
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for ScoredCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Rank the candidates returned for `token`, best first.
///
/// Candidates are consumed in order. The first one equal to `token` (ignoring
/// case) ends the scan and becomes the only result, scored with its weight.
/// Otherwise a candidate survives when `metric` rates it above `threshold`
/// and is scored `weight + similarity`. With no survivors the token itself is
/// returned with score 0, so the result is never empty.
///
/// An `Err` item fails the whole ranking, unless the scan already stopped on
/// an exact match.
pub fn rank_candidates<I>(
    token: &str,
    candidates: I,
    metric: &dyn StringDistance,
    threshold: f32,
) -> Result<Vec<ScoredCandidate>>
where
    I: IntoIterator<Item = Result<Candidate>>,
{
    let token_lower = token.to_lowercase();
    let mut survivors: HashMap<String, f32> = HashMap::new();

    for candidate in candidates {
        let candidate = candidate?;
        let word_lower = candidate.word.to_lowercase();

        if word_lower == token_lower {
            return Ok(vec![ScoredCandidate::new(token, candidate.weight)]);
        }

        let distance = metric.distance(&word_lower, &token_lower);
        if distance > threshold {
            survivors.insert(candidate.word, candidate.weight + distance);
        }
    }

    if survivors.is_empty() {
        return Ok(vec![ScoredCandidate::new(token, 0.0)]);
    }

    let mut ranked: Vec<ScoredCandidate> = survivors
        .into_iter()
        .map(|(word, score)| ScoredCandidate { word, score })
        .collect();
    ranked.sort();
    Ok(ranked)
}

/// Spelling and keyword suggestions served from Solr.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use solr_suggest::config::SuggesterConfig;
/// use solr_suggest::search::SearchContext;
/// use solr_suggest::solr::HttpSolrClient;
/// use solr_suggest::spelling::QuerySuggester;
///
/// # fn example() -> solr_suggest::error::Result<()> {
/// let client = Arc::new(HttpSolrClient::new("http://localhost:8983/solr/portal")?);
/// let suggester = QuerySuggester::new(client, SuggesterConfig::default())?;
///
/// let context = SearchContext::new(10157, "helo wrld", "en_US");
/// println!("Did you mean: {}", suggester.spell_check_keywords_sentence(&context)?);
/// # Ok(())
/// # }
/// ```
pub struct QuerySuggester {
    client: Arc<dyn SolrClient>,
    distance: Box<dyn StringDistance>,
    query_builder: NGramQueryBuilder,
    tokenizer: Box<dyn Tokenizer>,
    config: SuggesterConfig,
}

impl QuerySuggester {
    /// Create a suggester using the metric named in `config`.
    pub fn new(client: Arc<dyn SolrClient>, config: SuggesterConfig) -> Result<Self> {
        config.validate()?;

        Ok(QuerySuggester {
            client,
            distance: config.distance.build(),
            query_builder: NGramQueryBuilder::new(config.start_boost, config.end_boost),
            tokenizer: Box::new(UnicodeWordTokenizer::new()),
            config,
        })
    }

    /// Use a custom similarity metric instead of the configured one.
    pub fn with_distance(mut self, distance: Box<dyn StringDistance>) -> Self {
        self.distance = distance;
        self
    }

    pub fn config(&self) -> &SuggesterConfig {
        &self.config
    }

    /// Up to `max_suggestions` corrections for one token, best first.
    ///
    /// A correctly spelled token comes back as itself; a token without any
    /// close candidate comes back as itself too. An empty token yields no
    /// suggestions and no request.
    pub fn suggest_token_similars(
        &self,
        locale: &str,
        max_suggestions: usize,
        token: &str,
    ) -> Result<Vec<String>> {
        if token.is_empty() {
            return Ok(Vec::new());
        }

        let ranked = self.search_token_similars(locale, token)?;

        Ok(ranked
            .into_iter()
            .take(max_suggestions)
            .map(|candidate| candidate.word)
            .collect())
    }

    /// Suggestions for every word of `search_context.keywords`.
    pub fn spell_check_keywords(
        &self,
        search_context: &SearchContext,
        max_suggestions: usize,
    ) -> Result<HashMap<String, Vec<String>>> {
        let mut suggestions = HashMap::new();

        for token in self.tokenize(&search_context.keywords)? {
            if suggestions.contains_key(&token.text) {
                continue;
            }
            let similar =
                self.suggest_token_similars(&search_context.locale, max_suggestions, &token.text)?;
            suggestions.insert(token.text, similar);
        }

        Ok(suggestions)
    }

    /// The keywords rewritten with the best suggestion for each word.
    ///
    /// Punctuation and spacing between words are kept as typed.
    pub fn spell_check_keywords_sentence(&self, search_context: &SearchContext) -> Result<String> {
        let suggestions = self.spell_check_keywords(search_context, 1)?;
        let tokens = self.tokenize(&search_context.keywords)?;

        Ok(collate(&search_context.keywords, &tokens, &suggestions))
    }

    /// Complete the whole keyword string against indexed keyword queries.
    ///
    /// Matches the `start{n}` field, `n` being the keyword length in
    /// characters, scoped by company, groups, locale and the suggestion type.
    pub fn suggest_keyword_queries(
        &self,
        search_context: &SearchContext,
        max: usize,
    ) -> Result<Vec<String>> {
        let keywords = &search_context.keywords;
        let phrase = keywords.replace('\\', "\\\\").replace('"', "\\\"");
        let start_field = format!("start{}", keywords.chars().count());

        let mut query = SolrQuery::new(filter_query(&start_field, &format!("\"{phrase}\"")))
            .with_rows(max);
        query.set_filter_queries(filter_queries(search_context));

        let response = self.client.query(&query).map_err(search_failure)?;

        Ok(response
            .docs
            .iter()
            .filter_map(|document| document.first_value(field::KEYWORD_SEARCH))
            .collect())
    }

    fn search_token_similars(&self, locale: &str, token: &str) -> Result<Vec<ScoredCandidate>> {
        let mut query = self
            .query_builder
            .build_query(token)?
            .with_rows(self.config.max_candidates)
            .with_method(RequestMethod::Post);
        query.add_filter_query(filter_query(field::TYPE, field::SPELLCHECKING_TYPE));
        query.add_filter_query(filter_query(field::LANGUAGE_ID, locale));

        let response = self.client.query(&query).map_err(search_failure)?;

        rank_candidates(
            token,
            response.docs.iter().map(Candidate::from_document),
            self.distance.as_ref(),
            self.config.threshold,
        )
        .map_err(search_failure)
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        Ok(self.tokenizer.tokenize(text)?.collect())
    }
}

fn search_failure(error: SuggestError) -> SuggestError {
    debug!("Unable to execute Solr query: {error}");
    match error {
        SuggestError::Search(_) => error,
        other => SuggestError::search(other.to_string()),
    }
}
