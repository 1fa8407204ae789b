//! Select requests sent to Solr.

use serde::{Deserialize, Serialize};

/// HTTP method used for a select request.
///
/// N-gram queries get long quickly, so the suggester sends them with POST.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMethod {
    #[default]
    Get,
    Post,
}

/// A select request: main query, filter queries and a row limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolrQuery {
    query: String,
    filter_queries: Vec<String>,
    rows: Option<usize>,
    method: RequestMethod,
}

impl SolrQuery {
    /// Create a query with the given `q` parameter.
    pub fn new<S: Into<String>>(query: S) -> Self {
        SolrQuery {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Limit the number of returned rows.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Choose the HTTP method.
    pub fn with_method(mut self, method: RequestMethod) -> Self {
        self.method = method;
        self
    }

    /// Append one filter query.
    pub fn add_filter_query<S: Into<String>>(&mut self, filter_query: S) {
        self.filter_queries.push(filter_query.into());
    }

    /// Replace all filter queries.
    pub fn set_filter_queries(&mut self, filter_queries: Vec<String>) {
        self.filter_queries = filter_queries;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter_queries(&self) -> &[String] {
        &self.filter_queries
    }

    pub fn rows(&self) -> Option<usize> {
        self.rows
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// Request parameters in the order Solr receives them, JSON response
    /// writer included.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", self.query.clone())];
        params.extend(self.filter_queries.iter().map(|fq| ("fq", fq.clone())));
        if let Some(rows) = self.rows {
            params.push(("rows", rows.to_string()));
        }
        params.push(("wt", "json".to_string()));
        params
    }
}

/// Escape characters that carry meaning in Solr's standard query syntax.
pub fn escape_query_chars(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '+'
                | '-'
                | '!'
                | '('
                | ')'
                | ':'
                | '^'
                | '['
                | ']'
                | '"'
                | '{'
                | '}'
                | '~'
                | '*'
                | '?'
                | '|'
                | '&'
                | ';'
                | '/'
        ) || c.is_whitespace()
        {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params() {
        let mut query = SolrQuery::new("gram3:hel")
            .with_rows(50)
            .with_method(RequestMethod::Post);
        query.add_filter_query("type:spellchecking");
        query.add_filter_query("languageId:en_US");

        assert_eq!(query.method(), RequestMethod::Post);
        assert_eq!(
            query.to_params(),
            vec![
                ("q", "gram3:hel".to_string()),
                ("fq", "type:spellchecking".to_string()),
                ("fq", "languageId:en_US".to_string()),
                ("rows", "50".to_string()),
                ("wt", "json".to_string()),
            ]
        );
    }

    #[test]
    fn test_set_filter_queries_replaces() {
        let mut query = SolrQuery::new("*:*");
        query.add_filter_query("a:1");
        query.set_filter_queries(vec!["b:2".to_string()]);
        assert_eq!(query.filter_queries(), ["b:2".to_string()]);
        assert_eq!(query.rows(), None);
    }

    #[test]
    fn test_escape_query_chars() {
        assert_eq!(escape_query_chars("hello"), "hello");
        assert_eq!(escape_query_chars("c++"), "c\\+\\+");
        assert_eq!(escape_query_chars("a:b"), "a\\:b");
        assert_eq!(escape_query_chars("new york"), "new\\ york");
    }
}
