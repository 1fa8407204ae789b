//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// solr-suggest - spelling suggestions for a Solr portal index
#[derive(Parser, Debug, Clone)]
#[command(name = "solr-suggest")]
#[command(about = "Spelling suggestions and dictionary loading for a Solr portal index")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SuggestArgs {
    /// JSON configuration file
    #[arg(short, long, global = true, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Solr core URL, overrides the configuration file
    #[arg(long, global = true, env = "SOLR_URL")]
    pub url: Option<String>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", global = true, default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SuggestArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest corrections for every word of a keyword string
    Suggest(SpellCheckArgs),

    /// Rewrite a keyword string with the best correction for each word
    Sentence(SentenceArgs),

    /// Complete a keyword string against indexed keyword queries
    Keywords(KeywordsArgs),

    /// Wipe the spellcheck index and load every configured locale
    #[command(name = "index-dictionaries")]
    IndexDictionaries,

    /// Load the dictionaries of one locale without wiping
    #[command(name = "index-dictionary")]
    IndexDictionary(IndexDictionaryArgs),

    /// Delete every spellcheck document
    Clear,
}

/// Arguments for per-word suggestions
#[derive(Parser, Debug, Clone)]
pub struct SpellCheckArgs {
    /// Keywords to check
    #[arg(value_name = "KEYWORDS")]
    pub keywords: String,

    /// Locale of the keywords
    #[arg(short, long, default_value = "en_US")]
    pub locale: String,

    /// Maximum number of suggestions per word
    #[arg(short, long, default_value = "5")]
    pub max: usize,
}

/// Arguments for "did you mean" rewriting
#[derive(Parser, Debug, Clone)]
pub struct SentenceArgs {
    /// Keywords to rewrite
    #[arg(value_name = "KEYWORDS")]
    pub keywords: String,

    /// Locale of the keywords
    #[arg(short, long, default_value = "en_US")]
    pub locale: String,
}

/// Arguments for keyword query completion
#[derive(Parser, Debug, Clone)]
pub struct KeywordsArgs {
    /// Keywords typed so far
    #[arg(value_name = "KEYWORDS")]
    pub keywords: String,

    /// Company owning the searched content
    #[arg(long)]
    pub company_id: u64,

    /// Sites to restrict the completion to (repeatable)
    #[arg(short, long = "group-id")]
    pub group_ids: Vec<u64>,

    /// Locale of the keywords
    #[arg(short, long, default_value = "en_US")]
    pub locale: String,

    /// Maximum number of completions
    #[arg(short, long, default_value = "10")]
    pub max: usize,
}

/// Arguments for loading a single locale
#[derive(Parser, Debug, Clone)]
pub struct IndexDictionaryArgs {
    /// Locale whose dictionary directory is loaded
    #[arg(value_name = "LOCALE")]
    pub locale: String,

    /// Dictionary root directory, overrides the configuration file
    #[arg(short, long)]
    pub directory: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_suggest_command() {
        let args = SuggestArgs::try_parse_from([
            "solr-suggest",
            "suggest",
            "helo wrld",
            "--locale",
            "es_ES",
            "--max",
            "3",
        ])
        .unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.keywords, "helo wrld");
            assert_eq!(suggest_args.locale, "es_ES");
            assert_eq!(suggest_args.max, 3);
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_keywords_command() {
        let args = SuggestArgs::try_parse_from([
            "solr-suggest",
            "keywords",
            "liferay",
            "--company-id",
            "20116",
            "-g",
            "1",
            "-g",
            "2",
        ])
        .unwrap();

        if let Command::Keywords(keywords_args) = args.command {
            assert_eq!(keywords_args.company_id, 20116);
            assert_eq!(keywords_args.group_ids, vec![1, 2]);
            assert_eq!(keywords_args.locale, "en_US");
            assert_eq!(keywords_args.max, 10);
        } else {
            panic!("Expected Keywords command");
        }
    }

    #[test]
    fn test_keywords_requires_company() {
        assert!(SuggestArgs::try_parse_from(["solr-suggest", "keywords", "liferay"]).is_err());
    }

    #[test]
    fn test_index_dictionary_command() {
        let args = SuggestArgs::try_parse_from([
            "solr-suggest",
            "index-dictionary",
            "en_US",
            "--directory",
            "/srv/dictionaries",
        ])
        .unwrap();

        if let Command::IndexDictionary(index_args) = args.command {
            assert_eq!(index_args.locale, "en_US");
            assert_eq!(index_args.directory, Some(PathBuf::from("/srv/dictionaries")));
        } else {
            panic!("Expected IndexDictionary command");
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = SuggestArgs::try_parse_from([
            "solr-suggest",
            "clear",
            "--url",
            "http://solr:8983/solr/portal",
            "--config",
            "suggest.json",
        ])
        .unwrap();

        assert!(matches!(args.command, Command::Clear));
        assert_eq!(args.url.as_deref(), Some("http://solr:8983/solr/portal"));
        assert_eq!(args.config, Some(PathBuf::from("suggest.json")));
    }

    #[test]
    fn test_verbosity_levels() {
        let args = SuggestArgs::try_parse_from(["solr-suggest", "clear"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SuggestArgs::try_parse_from(["solr-suggest", "-vv", "clear"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = SuggestArgs::try_parse_from(["solr-suggest", "-vvv", "clear"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = SuggestArgs::try_parse_from(["solr-suggest", "-q", "-vv", "clear"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = SuggestArgs::try_parse_from(["solr-suggest", "--format", "json", "clear"])
            .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
