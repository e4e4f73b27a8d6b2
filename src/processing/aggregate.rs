/*! Reduction of chunk results

Chunk results are merged one at a time, in a fixed order.
Useable rows are bucketed by label and keyed by payload hash:
a row whose payload hash is already in its label bucket is a duplicate,
so the first merged row wins.
!*/
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filtering::Payload;
use crate::labels::Label;
use crate::resolver::Resolved;

use super::{Row, Stats};

/// Partial result of one chunk file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkResult {
    pub chunk: String,
    pub file: String,
    /// hash of the rules the chunk was labelled with
    #[serde(default)]
    pub rules: String,
    pub stats: Stats,
    pub rows: Vec<Row>,
}

impl ChunkResult {
    pub fn new(chunk: &str, file: &str) -> Self {
        Self {
            chunk: chunk.to_string(),
            file: file.to_string(),
            ..Default::default()
        }
    }

    pub fn with_rules(mut self, rules_hash: &str) -> Self {
        self.rules = rules_hash.to_string();
        self
    }

    pub fn push(&mut self, row: Row, resolved: &Resolved) {
        self.stats.record(&row, resolved);
        self.rows.push(row);
    }
}

#[derive(Debug, Default)]
pub struct Aggregate {
    pub chunks: usize,
    pub stats: Stats,
    pub duplicates: usize,
    /// every row, without payloads
    pub rows: Vec<Row>,
    /// label -> payload hash -> payload
    pub payloads: BTreeMap<Label, BTreeMap<String, Payload>>,
}

impl Aggregate {
    pub fn merge(&mut self, result: ChunkResult) {
        self.chunks += 1;
        self.stats.merge(&result.stats);
        for mut row in result.rows {
            let payload = row.payload.take();
            if row.useable {
                if let (Some(label), Some(hash), Some(payload)) =
                    (row.label(), row.payload_hash.clone(), payload)
                {
                    let bucket = self.payloads.entry(label).or_default();
                    if bucket.contains_key(&hash) {
                        row.mark_duplicate();
                        self.duplicates += 1;
                    } else {
                        bucket.insert(hash, payload);
                    }
                }
            }
            self.rows.push(row);
        }
    }

    pub fn useable(&self) -> usize {
        self.payloads.values().map(BTreeMap::len).sum()
    }

    pub fn summary(&self) -> Summary {
        let useable = self.useable();
        let percent = |part: usize, whole: usize| {
            if whole == 0 {
                0.0
            } else {
                100.0 * part as f64 / whole as f64
            }
        };

        let labels = self
            .stats
            .candidates
            .keys()
            .chain(self.payloads.keys())
            .map(|label| {
                let candidates = self.stats.candidates.get(label).copied().unwrap_or(0);
                let label_useable = self.payloads.get(label).map_or(0, BTreeMap::len);
                let summary = LabelSummary {
                    name: label.to_string(),
                    candidates,
                    useable: label_useable,
                    special: self.stats.special.get(label).copied().unwrap_or(0),
                    useable_pct: percent(label_useable, candidates),
                    share_pct: percent(label_useable, useable),
                };
                (*label, summary)
            })
            .collect();

        Summary {
            chunks: self.chunks,
            documents: self.stats.documents,
            useable,
            not_annotatable: self.stats.not_annotatable,
            multi_annotated: self.stats.multi_annotated,
            not_fit: self.stats.not_fit,
            duplicates: self.duplicates,
            special: self.stats.special.values().sum(),
            labels,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSummary {
    pub name: String,
    /// single-label documents
    pub candidates: usize,
    pub useable: usize,
    pub special: usize,
    /// share of the single-label documents that are useable
    pub useable_pct: f64,
    /// share of all useable documents
    pub share_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub chunks: usize,
    pub documents: usize,
    pub useable: usize,
    pub not_annotatable: usize,
    pub multi_annotated: usize,
    pub not_fit: usize,
    pub duplicates: usize,
    pub special: usize,
    pub labels: BTreeMap<Label, LabelSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Resolution;

    fn useable_row(id: &str, code: u8, title: &str) -> (Row, Resolved) {
        let resolved = Resolved {
            resolution: Resolution::Single(Label::new(code).unwrap()),
            special: false,
            scheme_uris: vec![],
            subject_schemes: vec![],
            mappings: vec![],
            first_values: BTreeMap::new(),
        };
        let payload: Payload = [("title".to_string(), title.to_string())]
            .into_iter()
            .collect();
        (
            Row::new(id, "f", &resolved, Some(payload)).unwrap(),
            resolved,
        )
    }

    fn chunk(rows: Vec<(Row, Resolved)>) -> ChunkResult {
        let mut result = ChunkResult::new("00", "00.json");
        for (row, resolved) in rows {
            result.push(row, &resolved);
        }
        result
    }

    #[test]
    fn first_seen_wins_within_label() {
        let mut aggregate = Aggregate::default();
        aggregate.merge(chunk(vec![
            useable_row("a", 11, "same"),
            useable_row("b", 2, "same"),
        ]));
        aggregate.merge(chunk(vec![
            useable_row("c", 11, "same"),
            useable_row("d", 11, "other"),
        ]));

        let duplicates: Vec<&str> = aggregate
            .rows
            .iter()
            .filter(|r| r.duplicate)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(duplicates, vec!["c"]);
        assert_eq!(aggregate.duplicates, 1);
        assert_eq!(aggregate.useable(), 3);
        assert!(aggregate.rows.iter().all(|r| r.payload.is_none()));
    }

    #[test]
    fn summary_percentages() {
        let mut aggregate = Aggregate::default();
        aggregate.merge(chunk(vec![
            useable_row("a", 11, "one"),
            useable_row("b", 11, "one"),
            useable_row("c", 2, "two"),
            useable_row("d", 2, "three"),
        ]));
        let summary = aggregate.summary();
        assert_eq!(summary.documents, 4);
        assert_eq!(summary.useable, 3);
        assert_eq!(summary.duplicates, 1);

        let medical = &summary.labels[&Label::new(11).unwrap()];
        assert_eq!(medical.candidates, 2);
        assert_eq!(medical.useable, 1);
        assert!((medical.useable_pct - 50.0).abs() < 1e-9);
        let physics = &summary.labels[&Label::new(2).unwrap()];
        assert!((physics.share_pct - 200.0 / 3.0).abs() < 1e-9);
    }
}
