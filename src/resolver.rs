//! Document label resolution
//!
//! Every subject of a document is tried against the active schemes in priority order.
//! The first scheme that recognizes a subject is the only one used for it,
//! and its mapped label (if any) goes into the document label set.
//!
//! The size of the label set classifies the document:
//! - no label: not annotatable
//! - several distinct labels: multi-annotated
//! - one label: candidate for the training set
//!
//! Documents of special chunks skip all of this and get the chunk's fixed label.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::labels::{Label, LabelSet};
use crate::metadata::{Document, Subject};
use crate::schemes::{Rules, Scheme};

/// What to do with subjects that are recognized by a scheme but map to no label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Uncategorized {
    /// ignore them
    #[default]
    Drop,
    /// record them in the label fan-out statistics only
    Count,
    /// treat `00 uncategorized` as a label
    Label,
}

/// Outcome of label resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    NotAnnotatable,
    MultiAnnotated(LabelSet),
    Single(Label),
}

impl Resolution {
    pub fn from_labels(labels: LabelSet) -> Self {
        match labels.len() {
            0 => Resolution::NotAnnotatable,
            1 => labels
                .single()
                .map_or(Resolution::NotAnnotatable, Resolution::Single),
            _ => Resolution::MultiAnnotated(labels),
        }
    }

    pub fn labels(&self) -> LabelSet {
        match self {
            Resolution::NotAnnotatable => LabelSet::default(),
            Resolution::MultiAnnotated(labels) => *labels,
            Resolution::Single(label) => std::iter::once(*label).collect(),
        }
    }

    pub fn label(&self) -> Option<Label> {
        match self {
            Resolution::Single(label) => Some(*label),
            _ => None,
        }
    }
}

/// A subject value that a scheme recognized, and the label it got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub label: Label,
    pub scheme: Scheme,
    pub value: String,
}

/// Label resolution of one document, along with its scheme statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub resolution: Resolution,
    pub special: bool,
    /// distinct `schemeURI`s, recognized or not
    pub scheme_uris: Vec<String>,
    /// distinct `subjectScheme`s, recognized or not
    pub subject_schemes: Vec<String>,
    pub mappings: Vec<Mapping>,
    /// first raw value recognized by each scheme
    pub first_values: BTreeMap<Scheme, String>,
}

impl Resolved {
    fn special(label: Label) -> Self {
        Self {
            resolution: Resolution::Single(label),
            special: true,
            scheme_uris: Vec::new(),
            subject_schemes: Vec::new(),
            mappings: Vec::new(),
            first_values: BTreeMap::new(),
        }
    }
}

fn push_distinct(seen: &mut Vec<String>, value: Option<&str>) {
    if let Some(value) = value {
        if !seen.iter().any(|v| v == value) {
            seen.push(value.to_string());
        }
    }
}

pub struct Resolver<'a> {
    rules: &'a Rules,
    schemes: &'a [Scheme],
    uncategorized: Uncategorized,
}

impl<'a> Resolver<'a> {
    pub fn new(rules: &'a Rules, schemes: &'a [Scheme]) -> Self {
        Self {
            rules,
            schemes,
            uncategorized: Uncategorized::default(),
        }
    }

    pub fn uncategorized(mut self, policy: Uncategorized) -> Self {
        self.uncategorized = policy;
        self
    }

    pub fn rules(&self) -> &'a Rules {
        self.rules
    }

    /// First active scheme recognizing `subject`.
    pub fn scheme_of(&self, subject: &Subject) -> Option<Scheme> {
        self.schemes
            .iter()
            .find(|scheme| scheme.detect(self.rules, subject))
            .copied()
    }

    /// Resolve a document. `special` is the fixed label of the chunk, if it is a special one.
    pub fn resolve(&self, document: &Document, special: Option<Label>) -> Resolved {
        if let Some(label) = special {
            return Resolved::special(label);
        }

        let mut labels = LabelSet::default();
        let mut scheme_uris = Vec::new();
        let mut subject_schemes = Vec::new();
        let mut mappings = Vec::new();
        let mut first_values = BTreeMap::new();

        for subject in document.subjects() {
            push_distinct(&mut scheme_uris, subject.scheme_uri());
            push_distinct(&mut subject_schemes, subject.subject_scheme());

            let scheme = match self.scheme_of(subject) {
                Some(scheme) => scheme,
                None => continue,
            };
            // detection guarantees a value
            let value = subject.value().unwrap_or_default().to_string();
            first_values.entry(scheme).or_insert_with(|| value.clone());

            let label = match (scheme.map(self.rules, subject), self.uncategorized) {
                (Some(label), _) => label,
                (None, Uncategorized::Drop) => continue,
                (None, Uncategorized::Count) => {
                    mappings.push(Mapping {
                        label: Label::UNCATEGORIZED,
                        scheme,
                        value,
                    });
                    continue;
                }
                (None, Uncategorized::Label) => Label::UNCATEGORIZED,
            };
            labels.insert(label);
            mappings.push(Mapping {
                label,
                scheme,
                value,
            });
        }

        Resolved {
            resolution: Resolution::from_labels(labels),
            special: false,
            scheme_uris,
            subject_schemes,
            mappings,
            first_values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(code: u8) -> Label {
        Label::new(code).unwrap()
    }

    fn ddc(value: &str) -> Subject {
        Subject::new(value).with_scheme("ddc")
    }

    #[test]
    fn same_label_collapses() {
        let rules = Rules::builtin().unwrap();
        let resolver = Resolver::new(&rules, &Scheme::ALL);
        let doc = Document::new("a", vec![ddc("610"), ddc("611.2")]);

        let resolved = resolver.resolve(&doc, None);
        assert_eq!(resolved.resolution, Resolution::Single(label(11)));
        assert_eq!(resolved.mappings.len(), 2);
        assert_eq!(resolved.first_values.get(&Scheme::Ddc).unwrap(), "610");
    }

    #[test]
    fn distinct_labels_are_multi() {
        let rules = Rules::builtin().unwrap();
        let resolver = Resolver::new(&rules, &Scheme::ALL);
        let doc = Document::new(
            "a",
            vec![ddc("610"), Subject::new("C53").with_scheme("JEL")],
        );
        let resolved = resolver.resolve(&doc, None);
        match resolved.resolution {
            Resolution::MultiAnnotated(labels) => {
                assert!(labels.contains(label(11)));
                assert!(labels.contains(label(14)));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_subjects_are_not_annotatable() {
        let rules = Rules::builtin().unwrap();
        let resolver = Resolver::new(&rules, &Scheme::ALL);
        let doc = Document::new(
            "a",
            vec![
                Subject::new("Soil").with_scheme("lcsh"),
                Subject::new("Soil").with_scheme("lcsh"),
                Subject::new("x").with_scheme_uri("http://id.loc.gov"),
                Subject::default().with_scheme("ddc"),
            ],
        );
        let resolved = resolver.resolve(&doc, None);
        assert_eq!(resolved.resolution, Resolution::NotAnnotatable);
        assert_eq!(resolved.subject_schemes, vec!["lcsh", "ddc"]);
        assert_eq!(resolved.scheme_uris, vec!["http://id.loc.gov"]);
        assert!(resolved.mappings.is_empty());
    }

    #[test]
    fn first_scheme_wins() {
        let rules = Rules::builtin().unwrap();
        // both the ddc and the narcis detectors accept it
        let subject = Subject::new("610")
            .with_scheme("ddc")
            .with_scheme_uri("http://www.narcis.nl/classification");
        assert!(Scheme::Ddc.detect(&rules, &subject));
        assert!(Scheme::Narcis.detect(&rules, &subject));

        let ddc_first = [Scheme::Ddc, Scheme::Narcis];
        assert_eq!(
            Resolver::new(&rules, &ddc_first).scheme_of(&subject),
            Some(Scheme::Ddc)
        );
        let narcis_first = [Scheme::Narcis, Scheme::Ddc];
        assert_eq!(
            Resolver::new(&rules, &narcis_first).scheme_of(&subject),
            Some(Scheme::Narcis)
        );

        // inactive schemes are never tried
        let jel = Subject::new("610").with_scheme("JEL");
        assert_eq!(Resolver::new(&rules, &[Scheme::Ddc]).scheme_of(&jel), None);
    }

    #[test]
    fn at_most_one_scheme_per_subject() {
        let rules = Rules::builtin().unwrap();
        let resolver = Resolver::new(&rules, &Scheme::ALL);
        let subjects = vec![
            ddc("610"),
            Subject::new("ddc 551")
                .with_scheme("ddc")
                .with_scheme_uri("http://www.narcis.nl/classification")
                .with_value_uri("http://www.narcis.nl/classfication/D16100"),
            Subject::new("Physics").with_scheme("JELinsearch"),
        ];
        for subject in subjects {
            let doc = Document::new("a", vec![subject]);
            let resolved = resolver.resolve(&doc, None);
            assert!(resolved.mappings.len() <= 1);
            assert!(resolved.first_values.len() <= 1);
        }
    }

    #[test]
    fn uncategorized_policies() {
        let rules = Rules::builtin().unwrap();
        let doc = Document::new("a", vec![ddc("zzz")]);

        let drop = Resolver::new(&rules, &Scheme::ALL).resolve(&doc, None);
        assert_eq!(drop.resolution, Resolution::NotAnnotatable);
        assert!(drop.mappings.is_empty());

        let count = Resolver::new(&rules, &Scheme::ALL)
            .uncategorized(Uncategorized::Count)
            .resolve(&doc, None);
        assert_eq!(count.resolution, Resolution::NotAnnotatable);
        assert_eq!(count.mappings[0].label, Label::UNCATEGORIZED);

        let as_label = Resolver::new(&rules, &Scheme::ALL)
            .uncategorized(Uncategorized::Label)
            .resolve(&doc, None);
        assert_eq!(as_label.resolution, Resolution::Single(Label::UNCATEGORIZED));
    }

    #[test]
    fn special_chunks_bypass_subjects() {
        let rules = Rules::builtin().unwrap();
        let resolver = Resolver::new(&rules, &Scheme::ALL);
        let doc = Document::new("a", vec![ddc("610")]);
        let resolved = resolver.resolve(&doc, Some(label(2)));
        assert_eq!(resolved.resolution, Resolution::Single(label(2)));
        assert!(resolved.special);
        assert!(resolved.mappings.is_empty());
    }
}
