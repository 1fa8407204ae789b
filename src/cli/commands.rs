//! Command implementations for the CLI.

use std::sync::Arc;
use std::time::Instant;

use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::Config;
use crate::error::{Result, SuggestError};
use crate::search::SearchContext;
use crate::solr::{HttpSolrClient, SolrClient};
use crate::spelling::{IndexingStats, QuerySuggester, SpellCheckIndexWriter};

/// Execute a CLI command.
pub fn execute_command(args: SuggestArgs) -> Result<()> {
    let config = load_config(&args)?;
    let client: Arc<dyn SolrClient> = Arc::new(HttpSolrClient::from_config(&config.solr)?);

    execute_with_client(args, config, client)
}

/// Execute a CLI command against an already built client.
pub fn execute_with_client(
    args: SuggestArgs,
    config: Config,
    client: Arc<dyn SolrClient>,
) -> Result<()> {
    match &args.command {
        Command::Suggest(suggest_args) => spell_check(suggest_args, &args, config, client),
        Command::Sentence(sentence_args) => sentence(sentence_args, &args, config, client),
        Command::Keywords(keywords_args) => keyword_queries(keywords_args, &args, config, client),
        Command::IndexDictionaries => index_dictionaries(&args, config, client),
        Command::IndexDictionary(index_args) => index_dictionary(index_args, &args, config, client),
        Command::Clear => clear(&args, config, client),
    }
}

/// The configuration file if given, else defaults, with `--url` applied.
pub fn load_config(args: &SuggestArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    if let Some(url) = &args.url {
        config.solr.url = url.clone();
    }

    Ok(config)
}

/// Per-word suggestions.
fn spell_check(
    args: &SpellCheckArgs,
    cli_args: &SuggestArgs,
    config: Config,
    client: Arc<dyn SolrClient>,
) -> Result<()> {
    let suggester = QuerySuggester::new(client, config.suggester)?;
    let search_context = SearchContext::new(0, args.keywords.as_str(), args.locale.as_str());

    let start_time = Instant::now();
    let suggestions = suggester.spell_check_keywords(&search_context, args.max)?;

    output_result(
        "Spell check complete",
        &SpellCheckResults {
            keywords: args.keywords.clone(),
            locale: args.locale.clone(),
            suggestions: suggestions.into_iter().collect(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// "Did you mean" rewriting.
fn sentence(
    args: &SentenceArgs,
    cli_args: &SuggestArgs,
    config: Config,
    client: Arc<dyn SolrClient>,
) -> Result<()> {
    let suggester = QuerySuggester::new(client, config.suggester)?;
    let search_context = SearchContext::new(0, args.keywords.as_str(), args.locale.as_str());

    let sentence = suggester.spell_check_keywords_sentence(&search_context)?;

    output_result(
        "Did you mean",
        &SentenceResult {
            changed: sentence != args.keywords,
            keywords: args.keywords.clone(),
            sentence,
        },
        cli_args,
    )
}

/// Keyword query completion.
fn keyword_queries(
    args: &KeywordsArgs,
    cli_args: &SuggestArgs,
    config: Config,
    client: Arc<dyn SolrClient>,
) -> Result<()> {
    let suggester = QuerySuggester::new(client, config.suggester)?;
    let search_context =
        SearchContext::new(args.company_id, args.keywords.as_str(), args.locale.as_str())
            .with_group_ids(args.group_ids.clone());

    let queries = suggester.suggest_keyword_queries(&search_context, args.max)?;

    output_result(
        "Keyword queries",
        &KeywordQueryResults {
            keywords: args.keywords.clone(),
            queries,
        },
        cli_args,
    )
}

/// Full reload of every configured locale.
fn index_dictionaries(
    cli_args: &SuggestArgs,
    config: Config,
    client: Arc<dyn SolrClient>,
) -> Result<()> {
    let writer = SpellCheckIndexWriter::new(client, config.index_writer)?;

    let start_time = Instant::now();
    let stats = writer.index_dictionaries()?;

    report_indexing("Dictionaries indexed", stats, start_time, cli_args)
}

/// Load of one locale.
fn index_dictionary(
    args: &IndexDictionaryArgs,
    cli_args: &SuggestArgs,
    mut config: Config,
    client: Arc<dyn SolrClient>,
) -> Result<()> {
    if let Some(directory) = &args.directory {
        config.index_writer.dictionaries_directory = directory.clone();
    }
    let writer = SpellCheckIndexWriter::new(client, config.index_writer)?;

    let start_time = Instant::now();
    let stats = writer.index_dictionary(&args.locale)?;

    report_indexing("Dictionary indexed", stats, start_time, cli_args)
}

/// Wipe of the spellcheck documents.
fn clear(cli_args: &SuggestArgs, config: Config, client: Arc<dyn SolrClient>) -> Result<()> {
    let writer = SpellCheckIndexWriter::new(client, config.index_writer)?;
    writer.clear_dictionary_indexes()?;

    output_result(
        "Spellcheck documents deleted",
        &ClearResult { cleared: true },
        cli_args,
    )
}

fn report_indexing(
    message: &str,
    stats: IndexingStats,
    start_time: Instant,
    cli_args: &SuggestArgs,
) -> Result<()> {
    let failed_files = stats.failed_files.len();
    let failed_locales = stats.failed_locales.len();

    output_result(
        message,
        &IndexingResult {
            stats,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )?;

    if failed_files > 0 || failed_locales > 0 {
        return Err(SuggestError::search(format!(
            "{failed_files} dictionary file(s) and {failed_locales} locale(s) failed to load"
        )));
    }
    Ok(())
}
