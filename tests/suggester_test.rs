//! Integration tests for spelling and keyword suggestions.

mod common;

use std::sync::Arc;

use common::RecordingSolrClient;
use solr_suggest::config::SuggesterConfig;
use solr_suggest::error::Result;
use solr_suggest::search::SearchContext;
use solr_suggest::solr::{RequestMethod, SolrDocument, SolrResponse};
use solr_suggest::spelling::{DistanceKind, QuerySuggester};

fn suggester(client: Arc<RecordingSolrClient>) -> Result<QuerySuggester> {
    QuerySuggester::new(client, SuggesterConfig::default())
}

#[test]
fn test_ranked_by_weight_plus_similarity() -> Result<()> {
    let client = Arc::new(RecordingSolrClient::new().with_candidates(&[
        ("hello", 5.0),
        ("world", 9.0),
        ("help", 2.0),
    ]));
    let suggester = suggester(client.clone())?;

    // hello 5 + 0.8, help 2 + 0.75, world rated 0.2 and dropped
    let suggestions = suggester.suggest_token_similars("en_US", 10, "helo")?;
    assert_eq!(suggestions, vec!["help", "hello"]);

    let queries = client.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(
        queries[0].filter_queries(),
        &["type:spellchecking".to_string(), "languageId:en_US".to_string()]
    );
    assert_eq!(queries[0].rows(), Some(50));
    assert_eq!(queries[0].method(), RequestMethod::Post);
    assert!(queries[0].query().starts_with("start1:h^2 start2:he^2 end1:o end2:lo"));

    Ok(())
}

#[test]
fn test_exact_match_short_circuits() -> Result<()> {
    let client = Arc::new(RecordingSolrClient::new().with_candidates(&[
        ("helps", 1.0),
        ("Hello", 3.0),
        ("hell", 8.0),
    ]));
    let suggester = suggester(client)?;

    assert_eq!(
        suggester.suggest_token_similars("en_US", 5, "hello")?,
        vec!["hello"]
    );
    Ok(())
}

#[test]
fn test_falls_back_to_token() -> Result<()> {
    let client = Arc::new(RecordingSolrClient::new().with_candidates(&[("zebra", 4.0)]));
    let suggester = suggester(client)?;

    assert_eq!(
        suggester.suggest_token_similars("en_US", 5, "qwxy")?,
        vec!["qwxy"]
    );
    Ok(())
}

#[test]
fn test_no_candidates_returns_token() -> Result<()> {
    let suggester = suggester(Arc::new(RecordingSolrClient::new()))?;
    assert_eq!(
        suggester.suggest_token_similars("en_US", 5, "anything")?,
        vec!["anything"]
    );
    Ok(())
}

#[test]
fn test_truncated_to_max_suggestions() -> Result<()> {
    let client = Arc::new(RecordingSolrClient::new().with_candidates(&[
        ("house", 1.0),
        ("horse", 2.0),
        ("hose", 3.0),
        ("mouse", 4.0),
    ]));
    let suggester = suggester(client)?;

    let suggestions = suggester.suggest_token_similars("en_US", 2, "hous")?;
    assert_eq!(suggestions, vec!["house", "horse"]);

    Ok(())
}

#[test]
fn test_empty_token_sends_no_query() -> Result<()> {
    let client = Arc::new(RecordingSolrClient::new());
    let suggester = suggester(client.clone())?;

    assert!(suggester.suggest_token_similars("en_US", 5, "")?.is_empty());
    assert!(client.calls().is_empty());
    Ok(())
}

#[test]
fn test_remote_failure_is_search_error() -> Result<()> {
    let client = Arc::new(RecordingSolrClient::new().failing_queries());
    let suggester = suggester(client)?;

    let err = suggester
        .suggest_token_similars("en_US", 5, "helo")
        .unwrap_err();
    assert!(err.is_search());
    Ok(())
}

#[test]
fn test_malformed_weight_is_search_error() -> Result<()> {
    let response = SolrResponse::from_docs(vec![
        SolrDocument::new()
            .with_field("word", "hello")
            .with_field("weight", "lots"),
    ]);
    let client = Arc::new(RecordingSolrClient::new().with_response(response));
    let suggester = suggester(client)?;

    let err = suggester
        .suggest_token_similars("en_US", 5, "helo")
        .unwrap_err();
    assert!(err.is_search());
    Ok(())
}

#[test]
fn test_spell_check_keywords() -> Result<()> {
    let client = Arc::new(
        RecordingSolrClient::new()
            .with_candidates(&[("hello", 5.0), ("help", 2.0)])
            .with_candidates(&[("world", 9.0), ("worlds", 1.0)]),
    );
    let suggester = suggester(client.clone())?;
    let context = SearchContext::new(10157, "helo wrld", "fr_FR");

    let suggestions = suggester.spell_check_keywords(&context, 3)?;
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions["helo"], vec!["help", "hello"]);
    assert_eq!(suggestions["wrld"], vec!["worlds", "world"]);

    for query in client.queries() {
        assert!(query.filter_queries().contains(&"languageId:fr_FR".to_string()));
    }
    Ok(())
}

#[test]
fn test_sentence_uses_best_suggestion_per_word() -> Result<()> {
    let client = Arc::new(
        RecordingSolrClient::new()
            .with_candidates(&[("hello", 5.0), ("help", 2.0)])
            .with_candidates(&[("world", 9.0)])
            .with_candidates(&[]),
    );
    let suggester = suggester(client)?;
    let context = SearchContext::new(10157, "helo wrld xyzzy", "en_US");

    assert_eq!(
        suggester.spell_check_keywords_sentence(&context)?,
        "help world xyzzy"
    );
    Ok(())
}

#[test]
fn test_sentence_keeps_punctuation_between_words() -> Result<()> {
    let client = Arc::new(
        RecordingSolrClient::new()
            .with_candidates(&[("hello", 5.0), ("help", 2.0)])
            .with_candidates(&[("world", 9.0)]),
    );
    let suggester = suggester(client.clone())?;
    let context = SearchContext::new(10157, "helo,  wrld! helo?", "en_US");

    assert_eq!(
        suggester.spell_check_keywords_sentence(&context)?,
        "help,  world! help?"
    );
    // the repeated word is looked up once
    assert_eq!(client.queries().len(), 2);
    Ok(())
}

#[test]
fn test_jaro_winkler_metric() -> Result<()> {
    let client = Arc::new(RecordingSolrClient::new().with_candidates(&[("martha", 1.0)]));
    let config = SuggesterConfig {
        distance: DistanceKind::JaroWinkler,
        threshold: 0.9,
        ..Default::default()
    };
    let suggester = QuerySuggester::new(client, config)?;

    assert_eq!(
        suggester.suggest_token_similars("en_US", 5, "marhta")?,
        vec!["martha"]
    );
    Ok(())
}

#[test]
fn test_keyword_queries() -> Result<()> {
    let response = SolrResponse::from_docs(vec![
        SolrDocument::new().with_field("keywordSearch", vec!["liferay portal"]),
        SolrDocument::new().with_field("keywordSearch", "liferay dxp"),
        SolrDocument::new().with_field("title", "no keywords here"),
    ]);
    let client = Arc::new(RecordingSolrClient::new().with_response(response));
    let suggester = suggester(client.clone())?;
    let context = SearchContext::new(20116, "liferay", "en_US").with_group_ids(vec![1, 2]);

    let queries = suggester.suggest_keyword_queries(&context, 10)?;
    assert_eq!(queries, vec!["liferay portal", "liferay dxp"]);

    let sent_queries = client.queries();
    let sent = &sent_queries[0];
    assert_eq!(sent.query(), "start7:\"liferay\"");
    assert_eq!(sent.rows(), Some(10));
    assert_eq!(
        sent.filter_queries(),
        &[
            "companyId:20116".to_string(),
            "groupId:1 OR groupId:2 ".to_string(),
            "locale:en_US".to_string(),
            "type:suggestion".to_string(),
        ]
    );
    Ok(())
}
