//! String similarity metrics used to re-rank spelling candidates.
//!
//! Every [`StringDistance`] returns a similarity in `0.0..=1.0` where `1.0`
//! means identical strings. The suggester keeps candidates whose value is
//! *above* its threshold, so a higher threshold means stricter matching.

use std::cmp::min;

use serde::{Deserialize, Serialize};

/// A string similarity metric.
pub trait StringDistance: Send + Sync {
    /// Similarity of `a` and `b`, `1.0` for identical strings.
    fn distance(&self, a: &str, b: &str) -> f32;

    /// Name of this metric (for logging and configuration).
    fn name(&self) -> &'static str;
}

/// Selects one of the bundled metrics from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceKind {
    #[default]
    Levenshtein,
    DamerauLevenshtein,
    JaroWinkler,
}

impl DistanceKind {
    /// Instantiate the metric.
    pub fn build(self) -> Box<dyn StringDistance> {
        match self {
            DistanceKind::Levenshtein => Box::new(LevenshteinDistance),
            DistanceKind::DamerauLevenshtein => Box::new(DamerauLevenshteinDistance),
            DistanceKind::JaroWinkler => Box::new(JaroWinklerDistance::default()),
        }
    }
}

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Two rows are enough: the previous one and the one being filled.
    let mut prev_row: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr_row = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[s2_chars.len()]
}

/// Calculate Damerau-Levenshtein distance (optimal string alignment), which
/// also counts a swap of adjacent characters as one edit.
#[allow(clippy::needless_range_loop)]
pub fn damerau_levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);

            matrix[i][j] = min(
                min(matrix[i - 1][j] + 1, matrix[i][j - 1] + 1),
                matrix[i - 1][j - 1] + cost,
            );

            if i > 1
                && j > 1
                && s1_chars[i - 1] == s2_chars[j - 2]
                && s1_chars[i - 2] == s2_chars[j - 1]
            {
                matrix[i][j] = min(matrix[i][j], matrix[i - 2][j - 2] + cost);
            }
        }
    }

    matrix[len1][len2]
}

fn normalize(edits: usize, s1: &str, s2: &str) -> f32 {
    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - edits as f32 / max_len as f32
}

/// Edit distance normalized by the longer string: `1 - edits / max_len`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinDistance;

impl StringDistance for LevenshteinDistance {
    fn distance(&self, a: &str, b: &str) -> f32 {
        normalize(levenshtein_distance(a, b), a, b)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Like [`LevenshteinDistance`] but transpositions cost one edit.
#[derive(Debug, Clone, Copy, Default)]
pub struct DamerauLevenshteinDistance;

impl StringDistance for DamerauLevenshteinDistance {
    fn distance(&self, a: &str, b: &str) -> f32 {
        normalize(damerau_levenshtein_distance(a, b), a, b)
    }

    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }
}

/// Jaro-Winkler similarity.
///
/// The common-prefix bonus (up to four characters, scaled by 0.1) is only
/// applied when the plain Jaro similarity reaches `boost_threshold`.
#[derive(Debug, Clone, Copy)]
pub struct JaroWinklerDistance {
    pub boost_threshold: f32,
}

impl Default for JaroWinklerDistance {
    fn default() -> Self {
        JaroWinklerDistance {
            boost_threshold: 0.7,
        }
    }
}

fn jaro(s1: &[char], s2: &[char]) -> f32 {
    if s1.is_empty() && s2.is_empty() {
        return 1.0;
    }
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }

    let window = (s1.len().max(s2.len()) / 2).saturating_sub(1);
    let mut s1_matched = vec![false; s1.len()];
    let mut s2_matched = vec![false; s2.len()];
    let mut matches = 0usize;

    for (i, c1) in s1.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = min(i + window + 1, s2.len());
        for j in lo..hi {
            if !s2_matched[j] && s2[j] == *c1 {
                s1_matched[i] = true;
                s2_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let s1_seq = s1.iter().zip(&s1_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let s2_seq = s2.iter().zip(&s2_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let transpositions = s1_seq.zip(s2_seq).filter(|(a, b)| a != b).count() / 2;

    let m = matches as f32;
    (m / s1.len() as f32 + m / s2.len() as f32 + (m - transpositions as f32) / m) / 3.0
}

impl StringDistance for JaroWinklerDistance {
    fn distance(&self, a: &str, b: &str) -> f32 {
        let s1: Vec<char> = a.chars().collect();
        let s2: Vec<char> = b.chars().collect();

        let similarity = jaro(&s1, &s2);
        if similarity < self.boost_threshold {
            return similarity;
        }

        let prefix = s1
            .iter()
            .zip(&s2)
            .take(4)
            .take_while(|(x, y)| x == y)
            .count();

        similarity + 0.1 * prefix as f32 * (1.0 - similarity)
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2);
    }

    #[test]
    fn test_damerau_levenshtein_distance() {
        assert_eq!(damerau_levenshtein_distance("", ""), 0);
        assert_eq!(damerau_levenshtein_distance("ab", "ba"), 1);
        assert_eq!(damerau_levenshtein_distance("search", "serach"), 1);
        assert_eq!(damerau_levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_normalized_levenshtein() {
        let metric = LevenshteinDistance;
        assert!(approx(metric.distance("hello", "hello"), 1.0));
        assert!(approx(metric.distance("helo", "hello"), 0.8));
        assert!(approx(metric.distance("helo", "help"), 0.75));
        assert!(approx(metric.distance("abc", "xyz"), 0.0));
        assert!(approx(metric.distance("", ""), 1.0));
    }

    #[test]
    fn test_normalized_damerau() {
        let metric = DamerauLevenshteinDistance;
        assert!(approx(metric.distance("teh", "the"), 1.0 - 1.0 / 3.0));
    }

    #[test]
    fn test_jaro_winkler() {
        let metric = JaroWinklerDistance::default();
        assert!(approx(metric.distance("martha", "martha"), 1.0));
        assert!(approx(metric.distance("martha", "marhta"), 0.9611));
        assert!(approx(metric.distance("dwayne", "duane"), 0.84));
        assert!(approx(metric.distance("abc", "xyz"), 0.0));
    }

    #[test]
    fn test_similar_words_score_higher() {
        for kind in [
            DistanceKind::Levenshtein,
            DistanceKind::DamerauLevenshtein,
            DistanceKind::JaroWinkler,
        ] {
            let metric = kind.build();
            assert!(
                metric.distance("hello", "helo") > metric.distance("hello", "world"),
                "{} should prefer the closer word",
                metric.name()
            );
        }
    }
}
