//! Document and chunk models.
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::Subject;

/// Content of a chunk file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Chunk {
    #[serde(default)]
    pub documents: Vec<Document>,
}

/// External identifier of a document.
///
/// Harvesters emit either a bare string or a `{"value": .., "identifierType": ..}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Plain(String),
    Typed {
        value: String,
        #[serde(
            default,
            rename = "identifierType",
            skip_serializing_if = "Option::is_none"
        )]
        kind: Option<String>,
    },
}

impl Identifier {
    pub fn value(&self) -> &str {
        match self {
            Identifier::Plain(v) => v,
            Identifier::Typed { value, .. } => value,
        }
    }
}

/// One textual value of a metadata field (a title, a description...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl Instance {
    pub fn new(value: &str, lang: Option<&str>) -> Self {
        Self {
            value: Some(value.to_string()),
            lang: lang.map(String::from),
        }
    }
}

/// One bibliographic record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(
        default,
        deserialize_with = "super::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub identifier: Option<Identifier>,
    #[serde(
        default,
        deserialize_with = "subject_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub subjects: Option<Vec<Subject>>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

/// Subjects of a document, skipping entries that are not subject objects.
fn subject_list<'de, D>(deserializer: D) -> Result<Option<Vec<Subject>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| Subject::deserialize(item).ok())
                .collect(),
        )),
        Value::Null => Ok(None),
        _ => Ok(Some(Vec::new())),
    }
}

impl Document {
    pub fn new(identifier: &str, subjects: Vec<Subject>) -> Self {
        Self {
            identifier: Some(Identifier::Plain(identifier.to_string())),
            subjects: Some(subjects),
            fields: BTreeMap::new(),
        }
    }

    /// Attach the instances of a field, `field` being the singular name (`title`).
    pub fn with_field(mut self, field: &str, instances: Vec<Instance>) -> Self {
        // Instance serialization cannot fail
        let instances = serde_json::to_value(instances).unwrap_or(Value::Null);
        self.fields.insert(format!("{field}s"), instances);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.identifier.as_ref().map(Identifier::value)
    }

    pub fn subjects(&self) -> &[Subject] {
        self.subjects.as_deref().unwrap_or_default()
    }

    /// Get the instances of a field by its singular name (`title` looks up `titles`).
    ///
    /// Returns [None] if the document does not have the field at all.
    /// Instances that are not `{value, lang}` objects are skipped.
    pub fn instances(&self, field: &str) -> Option<Vec<Instance>> {
        let plural = format!("{field}s");
        let value = self.fields.get(&plural)?;
        match value {
            Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(|item| Instance::deserialize(item).ok())
                    .collect(),
            ),
            _ => Some(Vec::new()),
        }
    }
}
