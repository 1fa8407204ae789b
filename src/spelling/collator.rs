//! Rewrites keywords with per-token suggestions into a "did you mean" string.

use std::collections::HashMap;

use crate::analysis::token::Token;

/// Replace the span of every token in `keywords` with its best suggestion.
///
/// Tokens without a suggestion keep their text, and everything between
/// tokens (spaces, punctuation) is copied unchanged. A token whose offsets do
/// not fit `keywords` or overlap the previous token is left as it is.
///
/// ```
/// use std::collections::HashMap;
/// use solr_suggest::analysis::token::Token;
/// use solr_suggest::spelling::collator::collate;
///
/// let mut suggestions = HashMap::new();
/// suggestions.insert("helo".to_string(), vec!["hello".to_string()]);
///
/// let tokens = vec![Token::new("helo", 0, 4), Token::new("world", 6, 11)];
/// assert_eq!(collate("helo, world", &tokens, &suggestions), "hello, world");
/// ```
pub fn collate(
    keywords: &str,
    tokens: &[Token],
    suggestions: &HashMap<String, Vec<String>>,
) -> String {
    let mut sentence = String::with_capacity(keywords.len());
    let mut cursor = 0;

    for token in tokens {
        let Some(gap) = keywords.get(cursor..token.start_offset) else {
            continue;
        };
        if keywords.get(token.start_offset..token.end_offset).is_none() {
            continue;
        }

        let replacement = suggestions
            .get(&token.text)
            .and_then(|candidates| candidates.first())
            .unwrap_or(&token.text);

        sentence.push_str(gap);
        sentence.push_str(replacement);
        cursor = token.end_offset;
    }

    sentence.push_str(&keywords[cursor..]);
    sentence
}
