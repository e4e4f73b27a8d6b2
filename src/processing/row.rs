//! Per-document result record.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::filtering::{word_count, Payload};
use crate::labels::{Label, LabelSet};
use crate::resolver::{Resolution, Resolved};
use crate::schemes::Scheme;

use super::content_hash;

/// Outcome of the cleaning of one document.
///
/// Exactly one of `not_annot`, `multi_annot` and (`useable` or `not_fit`) is set,
/// `duplicate` later replaces `useable` on rows whose payload was already seen for the same label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub file: String,
    pub useable: bool,
    pub not_annot: bool,
    pub multi_annot: bool,
    pub not_fit: bool,
    pub duplicate: bool,
    pub special: bool,
    pub labels: LabelSet,
    pub wc: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
    #[serde(default)]
    pub scheme_uris: Vec<String>,
    #[serde(default)]
    pub subject_schemes: Vec<String>,
    #[serde(default)]
    pub first_values: BTreeMap<Scheme, String>,
}

impl Row {
    /// Build the row of a resolved document.
    ///
    /// `payload` is only looked at when the document has a single label.
    pub fn new(
        id: &str,
        file: &str,
        resolved: &Resolved,
        payload: Option<Payload>,
    ) -> Result<Self, Error> {
        let mut row = Row {
            id: id.to_string(),
            file: file.to_string(),
            special: resolved.special,
            labels: resolved.resolution.labels(),
            scheme_uris: resolved.scheme_uris.clone(),
            subject_schemes: resolved.subject_schemes.clone(),
            first_values: resolved.first_values.clone(),
            ..Default::default()
        };

        match (resolved.resolution, payload) {
            (Resolution::NotAnnotatable, _) => row.not_annot = true,
            (Resolution::MultiAnnotated(_), _) => row.multi_annot = true,
            (Resolution::Single(_), None) => row.not_fit = true,
            (Resolution::Single(_), Some(payload)) => {
                row.useable = true;
                row.wc = word_count(&payload);
                row.payload_hash = Some(content_hash(&payload)?);
                row.payload = Some(payload);
            }
        }
        Ok(row)
    }

    /// Label of a useable (or duplicate) row.
    pub fn label(&self) -> Option<Label> {
        if self.useable || self.duplicate {
            self.labels.single()
        } else {
            None
        }
    }

    /// Number of labels.
    pub fn nol(&self) -> usize {
        self.labels.len()
    }

    pub fn mark_duplicate(&mut self) {
        self.useable = false;
        self.duplicate = true;
    }

    /// CSV header, with one column per scheme.
    pub fn csv_header(schemes: &[Scheme]) -> Vec<String> {
        let mut header: Vec<String> = [
            "id",
            "file",
            "useable",
            "not_annot",
            "multi_annot",
            "not_fit",
            "duplicate",
            "special",
            "labels",
            "nol",
            "wc",
            "payload_hash",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect();
        header.extend(schemes.iter().map(|s| s.name().to_string()));
        header
    }

    /// CSV record, matching [Row::csv_header].
    pub fn csv_record(&self, schemes: &[Scheme]) -> Vec<String> {
        let mut record = vec![
            self.id.clone(),
            self.file.clone(),
            self.useable.to_string(),
            self.not_annot.to_string(),
            self.multi_annot.to_string(),
            self.not_fit.to_string(),
            self.duplicate.to_string(),
            self.special.to_string(),
            self.labels.bits().to_string(),
            self.nol().to_string(),
            self.wc.to_string(),
            self.payload_hash.clone().unwrap_or_default(),
        ];
        record.extend(
            schemes
                .iter()
                .map(|s| self.first_values.get(s).cloned().unwrap_or_default()),
        );
        record
    }
}
