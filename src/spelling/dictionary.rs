//! Dictionary files: one `word weight` record per line.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use log::warn;

use crate::error::Result;

/// One dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryRecord {
    pub word: String,
    pub weight: u32,
}

impl DictionaryRecord {
    pub fn new<S: Into<String>>(word: S, weight: u32) -> Self {
        DictionaryRecord {
            word: word.into(),
            weight,
        }
    }

    /// Parse a line of the form `word [weight]`.
    ///
    /// Blank lines yield `None`. A missing weight is 0; an unparsable one is
    /// also 0 and logged as a warning. Anything after the weight is ignored.
    ///
    /// ```
    /// use solr_suggest::spelling::dictionary::DictionaryRecord;
    ///
    /// assert_eq!(
    ///     DictionaryRecord::parse_line("apple 42"),
    ///     Some(DictionaryRecord::new("apple", 42))
    /// );
    /// assert_eq!(
    ///     DictionaryRecord::parse_line("apple"),
    ///     Some(DictionaryRecord::new("apple", 0))
    /// );
    /// assert_eq!(DictionaryRecord::parse_line("   "), None);
    /// ```
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let word = parts.next()?;

        let weight = match parts.next() {
            None => 0,
            Some(text) => text.parse::<u32>().unwrap_or_else(|_| {
                warn!("Invalid weight for term: {word}");
                0
            }),
        };

        Some(DictionaryRecord::new(word, weight))
    }
}

/// Streams records out of a dictionary, skipping blank lines.
pub struct DictionaryReader<R: BufRead> {
    lines: Lines<R>,
}

impl DictionaryReader<BufReader<File>> {
    /// Open a dictionary file. The file is closed when the reader is dropped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(DictionaryReader::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> DictionaryReader<R> {
    pub fn new(reader: R) -> Self {
        DictionaryReader {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for DictionaryReader<R> {
    type Item = Result<DictionaryRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    if let Some(record) = DictionaryRecord::parse_line(&line) {
                        return Some(Ok(record));
                    }
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
