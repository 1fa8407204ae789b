//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SuggestArgs};
use crate::error::Result;
use crate::spelling::IndexingStats;

/// Per-word suggestions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpellCheckResults {
    pub keywords: String,
    pub locale: String,
    pub suggestions: BTreeMap<String, Vec<String>>,
    pub duration_ms: u64,
}

/// A rewritten keyword string.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceResult {
    pub keywords: String,
    pub sentence: String,
    pub changed: bool,
}

/// Keyword query completions.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordQueryResults {
    pub keywords: String,
    pub queries: Vec<String>,
}

/// Outcome of a dictionary load.
#[derive(Debug, Serialize)]
pub struct IndexingResult {
    #[serde(flatten)]
    pub stats: IndexingStats,
    pub duration_ms: u64,
}

/// Outcome of a wipe.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClearResult {
    pub cleared: bool,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &SuggestArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &SuggestArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    if value.get("suggestions").is_some() {
        output_suggestions_human(&value)
    } else if value.get("queries").is_some() {
        output_queries_human(&value)
    } else {
        output_generic_human(&value)
    }
}

/// Output per-word suggestions in human format.
fn output_suggestions_human(value: &serde_json::Value) -> Result<()> {
    if let Some(suggestions) = value.get("suggestions").and_then(|s| s.as_object()) {
        println!("Suggestions:");
        println!("════════════");

        for (word, candidates) in suggestions {
            let candidates = candidates
                .as_array()
                .map(|arr| arr.iter().map(format_value).collect::<Vec<_>>().join(", "))
                .unwrap_or_default();
            println!("{word}: {candidates}");
        }

        if let Some(duration) = value.get("duration_ms").and_then(|d| d.as_u64()) {
            println!();
            println!("Lookup time: {duration}ms");
        }
    }
    Ok(())
}

/// Output keyword completions in human format.
fn output_queries_human(value: &serde_json::Value) -> Result<()> {
    if let Some(queries) = value.get("queries").and_then(|q| q.as_array()) {
        if queries.is_empty() {
            println!("No keyword queries found");
        }
        for (i, query) in queries.iter().enumerate() {
            println!("{}. {}", i + 1, format_value(query));
        }
    }
    Ok(())
}

/// Generic output for other types.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{key}: {}", format_value(val));
            }
        }
        _ => println!("{}", format_value(value)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SuggestArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
