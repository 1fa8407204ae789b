//! Documents exchanged with Solr.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A stored document returned by a select query.
///
/// Solr returns multi-valued fields as JSON arrays and single-valued fields
/// as scalars; [`SolrDocument::first_value`] reads either shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct SolrDocument {
    fields: Map<String, Value>,
}

impl SolrDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn with_field<S: Into<String>, V: Into<Value>>(mut self, name: S, value: V) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Raw JSON value of a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// First value of a field rendered as text.
    ///
    /// Arrays yield their first element; strings, numbers and booleans are
    /// converted as-is. Null, objects and empty arrays yield `None`.
    pub fn first_value(&self, name: &str) -> Option<String> {
        let value = match self.fields.get(name)? {
            Value::Array(values) => values.first()?,
            value => value,
        };

        match value {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }

    /// Names of all fields present in the document.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// The `response` block of a select query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolrResponse {
    /// Total number of matching documents on the server.
    #[serde(default)]
    pub num_found: u64,
    /// Offset of the first returned document.
    #[serde(default)]
    pub start: u64,
    /// The returned page of documents.
    #[serde(default)]
    pub docs: Vec<SolrDocument>,
}

impl SolrResponse {
    /// Build a response holding exactly `docs`.
    pub fn from_docs(docs: Vec<SolrDocument>) -> Self {
        SolrResponse {
            num_found: docs.len() as u64,
            start: 0,
            docs,
        }
    }

    /// Number of returned documents.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether no document was returned.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// A document to be written to Solr.
///
/// Fields keep their insertion order and may hold several values; adding a
/// value to an existing field makes it multi-valued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolrInputDocument {
    fields: Vec<(String, Vec<String>)>,
}

impl SolrInputDocument {
    /// Create an empty input document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to a field.
    pub fn add_field<S: Into<String>, V: Into<String>>(&mut self, name: S, value: V) {
        let name = name.into();
        let value = value.into();

        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, values)) => values.push(value),
            None => self.fields.push((name, vec![value])),
        }
    }

    /// All values of a field.
    pub fn get_field_values(&self, name: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, values)| values.as_slice())
    }

    /// First value of a field.
    pub fn get_field_value(&self, name: &str) -> Option<&str> {
        self.get_field_values(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Number of distinct fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for SolrInputDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, values) in &self.fields {
            match values.as_slice() {
                [single] => map.serialize_entry(name, single)?,
                many => map.serialize_entry(name, many)?,
            }
        }
        map.end()
    }
}
