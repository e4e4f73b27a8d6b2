/*! Payload extraction

The payload of a document is the text of its configured fields.
For each field, instances that are empty or not in the target language are skipped,
and the remaining values are joined with a space.

Extraction is all-or-nothing: if a field is missing from the document, or if its
text has less words than the field minimum, the document has no payload.
!*/
use std::collections::BTreeMap;

use itertools::Itertools;
use log::debug;
use oxilangtag::LanguageTag;
use serde::{Deserialize, Serialize};

use super::{Filter, WordCount};
use crate::identifiers::Identify;
use crate::metadata::Document;

/// Field name to text, sorted by field name.
pub type Payload = BTreeMap<String, String>;

/// A payload field and its minimum word count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default = "FieldSpec::default_min_words")]
    pub min_words: usize,
}

impl FieldSpec {
    pub fn new(name: &str, min_words: usize) -> Self {
        Self {
            name: name.to_string(),
            min_words,
        }
    }

    fn default_min_words() -> usize {
        1
    }
}

pub struct PayloadExtractor<'a> {
    fields: Vec<(String, WordCount)>,
    identifier: &'a dyn Identify,
    language: LanguageTag<String>,
    dedup_instances: bool,
}

impl<'a> PayloadExtractor<'a> {
    pub fn new(
        fields: &[FieldSpec],
        identifier: &'a dyn Identify,
        language: LanguageTag<String>,
    ) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|f| (f.name.clone(), WordCount::with_min_words(f.min_words)))
                .collect(),
            identifier,
            language,
            dedup_instances: false,
        }
    }

    /// Only keep the first of identical instance values.
    pub fn dedup_instances(mut self, dedup: bool) -> Self {
        self.dedup_instances = dedup;
        self
    }

    /// Text of one field, [None] if the field is absent.
    fn field_text(&self, document: &Document, field: &str) -> Option<String> {
        let instances = document.instances(field)?;
        let mut values = instances.iter().filter_map(|instance| {
            let value = instance.value.as_deref()?.trim();
            if value.is_empty() {
                return None;
            }
            match self.identifier.identify(instance) {
                Ok(Some(id)) if id.is(&self.language) => Some(value),
                Ok(_) => None,
                Err(e) => {
                    debug!("Cannot identify {:?}: {}", value, e);
                    None
                }
            }
        });

        let text = if self.dedup_instances {
            values.unique().join(" ")
        } else {
            values.join(" ")
        };
        Some(text)
    }

    /// Extract the payload of a document.
    pub fn extract(&self, document: &Document) -> Option<Payload> {
        self.fields
            .iter()
            .map(|(field, min_words)| {
                let text = self.field_text(document, field)?;
                if min_words.detect(text.as_str()) {
                    Some((field.clone(), text))
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Number of whitespace separated words of a payload.
pub fn word_count(payload: &Payload) -> usize {
    payload
        .values()
        .map(|text| text.split_whitespace().count())
        .sum()
}
