//! Mergeable statistics of a chunk.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::labels::Label;
use crate::resolver::Resolved;
use crate::schemes::Scheme;

use super::Row;

/// Raw subject values that mapped to a label, per scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanOut {
    pub total: usize,
    pub schemes: BTreeMap<Scheme, BTreeMap<String, usize>>,
}

impl FanOut {
    pub fn register(&mut self, scheme: Scheme, value: &str) {
        self.total += 1;
        *self
            .schemes
            .entry(scheme)
            .or_default()
            .entry(value.to_string())
            .or_default() += 1;
    }

    pub fn merge(&mut self, other: &FanOut) {
        self.total += other.total;
        for (scheme, values) in &other.schemes {
            let mine = self.schemes.entry(*scheme).or_default();
            for (value, count) in values {
                *mine.entry(value.clone()).or_default() += count;
            }
        }
    }
}

fn merge_counts<K: Ord + Clone>(into: &mut BTreeMap<K, usize>, from: &BTreeMap<K, usize>) {
    for (key, count) in from {
        *into.entry(key.clone()).or_default() += count;
    }
}

/// Counters of a set of documents.
///
/// Merging is commutative and associative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub documents: usize,
    pub not_annotatable: usize,
    pub multi_annotated: usize,
    pub not_fit: usize,
    /// single-label documents, per label
    pub candidates: BTreeMap<Label, usize>,
    /// documents labelled by a special chunk, per label
    pub special: BTreeMap<Label, usize>,
    /// documents per `schemeURI`
    pub scheme_uris: BTreeMap<String, usize>,
    /// documents per `subjectScheme`
    pub subject_schemes: BTreeMap<String, usize>,
    pub label2subject: BTreeMap<Label, FanOut>,
}

impl Stats {
    /// Account for one document.
    pub fn record(&mut self, row: &Row, resolved: &Resolved) {
        self.documents += 1;
        if row.not_annot {
            self.not_annotatable += 1;
        }
        if row.multi_annot {
            self.multi_annotated += 1;
        }
        if row.not_fit {
            self.not_fit += 1;
        }
        if let Some(label) = resolved.resolution.label() {
            *self.candidates.entry(label).or_default() += 1;
            if resolved.special {
                *self.special.entry(label).or_default() += 1;
            }
        }
        for uri in &resolved.scheme_uris {
            *self.scheme_uris.entry(uri.clone()).or_default() += 1;
        }
        for scheme in &resolved.subject_schemes {
            *self.subject_schemes.entry(scheme.clone()).or_default() += 1;
        }
        for mapping in &resolved.mappings {
            self.label2subject
                .entry(mapping.label)
                .or_default()
                .register(mapping.scheme, &mapping.value);
        }
    }

    pub fn merge(&mut self, other: &Stats) {
        self.documents += other.documents;
        self.not_annotatable += other.not_annotatable;
        self.multi_annotated += other.multi_annotated;
        self.not_fit += other.not_fit;
        merge_counts(&mut self.candidates, &other.candidates);
        merge_counts(&mut self.special, &other.special);
        merge_counts(&mut self.scheme_uris, &other.scheme_uris);
        merge_counts(&mut self.subject_schemes, &other.subject_schemes);
        for (label, fan_out) in &other.label2subject {
            self.label2subject.entry(*label).or_default().merge(fan_out);
        }
    }
}
