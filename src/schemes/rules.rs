//! Rule book and compiled rule tables.
//!
//! A [RuleBook] is the serializable source of every scheme rule: the literals
//! that recognize a scheme and the `(label, pattern)` tables that map a subject
//! to a label. It is either the built-in one or loaded from a JSON file, and is
//! hashed so that a run can pin the exact rules it labels data with.
//!
//! [Rules] is the compiled form shared (read-only) by every worker.
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use log::debug;
use regex::{Regex, RegexSet};
use serde::{Deserialize, Serialize};

use super::tables;
use super::Scheme;
use crate::error::Error;
use crate::labels::Label;
use crate::metadata::Subject;
use crate::processing::sha256_hex;

/// Subject field a table matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "value")]
    Value,
    #[serde(rename = "valueURI")]
    ValueUri,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSource {
    pub label: Label,
    pub pattern: String,
    #[serde(default)]
    pub ignore_case: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSource {
    pub field: Field,
    /// lower-case the field before matching
    pub lowercase: bool,
    /// whether row order is significant
    pub ordered: bool,
    pub rules: Vec<RuleSource>,
}

impl TableSource {
    fn from_rows(field: Field, lowercase: bool, ordered: bool, rows: &[(u8, &[&str])]) -> Self {
        let rules = rows
            .iter()
            .filter_map(|(code, alternatives)| {
                Label::new(*code).map(|label| RuleSource {
                    label,
                    pattern: alternatives.join("|"),
                    ignore_case: false,
                })
            })
            .collect();
        Self {
            field,
            lowercase,
            ordered,
            rules,
        }
    }
}

/// Literals and guard patterns used to recognize schemes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Markers {
    pub ddc_names: Vec<String>,
    pub ddc_coordinates: String,
    pub ddc_scheme_uri: String,
    pub anzsrc_scheme_uri: String,
    pub anzsrc_code: String,
    pub jel_subject_scheme: String,
    pub narcis_scheme_uri: String,
    pub narcis_subject_scheme: String,
    pub bk_subject_schemes: Vec<String>,
    pub linsearch_subject_schemes: Vec<String>,
    pub bepress_subject_schemes: Vec<String>,
}

impl Default for Markers {
    fn default() -> Self {
        let strings = |s: &[&str]| s.iter().map(|s| s.to_string()).collect();
        Self {
            ddc_names: strings(tables::DDC_NAMES),
            ddc_coordinates: tables::DDC_COORDINATES.to_string(),
            ddc_scheme_uri: tables::DDC_SCHEME_URI.to_string(),
            anzsrc_scheme_uri: tables::ANZSRC_SCHEME_URI.to_string(),
            anzsrc_code: tables::ANZSRC_CODE.to_string(),
            jel_subject_scheme: tables::JEL_SUBJECT_SCHEME.to_string(),
            narcis_scheme_uri: tables::NARCIS_SCHEME_URI.to_string(),
            narcis_subject_scheme: tables::NARCIS_SUBJECT_SCHEME.to_string(),
            bk_subject_schemes: strings(tables::BK_SUBJECT_SCHEMES),
            linsearch_subject_schemes: strings(tables::LINSEARCH_SUBJECT_SCHEMES),
            bepress_subject_schemes: strings(tables::BEPRESS_SUBJECT_SCHEMES),
        }
    }
}

/// Serializable source of all rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleBook {
    pub markers: Markers,
    pub tables: BTreeMap<Scheme, TableSource>,
}

impl RuleBook {
    /// Rules shipped with the crate.
    pub fn builtin() -> Self {
        let mut tables = BTreeMap::new();
        tables.insert(
            Scheme::Ddc,
            TableSource::from_rows(Field::Value, true, true, tables::DDC),
        );
        // valueURIs are lower-cased while the rows expect an upper-case `D` code,
        // so these rows never match. Rule files can set `lowercase: false`.
        tables.insert(
            Scheme::Narcis,
            TableSource::from_rows(Field::ValueUri, true, true, tables::NARCIS),
        );
        tables.insert(
            Scheme::Bk,
            TableSource::from_rows(Field::Value, true, true, tables::BK),
        );

        let linsearch = tables::LINSEARCH
            .iter()
            .filter_map(|(code, pattern, ignore_case)| {
                Label::new(*code).map(|label| RuleSource {
                    label,
                    pattern: pattern.to_string(),
                    ignore_case: *ignore_case,
                })
            })
            .collect();
        tables.insert(
            Scheme::Linsearch,
            TableSource {
                field: Field::Value,
                lowercase: true,
                ordered: false,
                rules: linsearch,
            },
        );

        let bepress = tables::BEPRESS
            .iter()
            .filter_map(|(code, names)| {
                let names: Vec<String> = names.iter().map(|n| regex::escape(n)).collect();
                Label::new(*code).map(|label| RuleSource {
                    label,
                    pattern: format!("(?:{})$", names.join("|")),
                    ignore_case: true,
                })
            })
            .collect();
        tables.insert(
            Scheme::Bepress,
            TableSource {
                field: Field::Value,
                lowercase: true,
                ordered: false,
                rules: bepress,
            },
        );

        Self {
            markers: Markers::default(),
            tables,
        }
    }

    /// Load the built-in rules or a rule file, returning the book and its source hash.
    ///
    /// The hash of a rule file is the SHA-256 of its bytes,
    /// the hash of the built-in rules is the SHA-256 of their JSON serialization.
    pub fn load(path: Option<&Path>) -> Result<(Self, String), Error> {
        match path {
            Some(path) => {
                let bytes = std::fs::read(path)?;
                let book = serde_json::from_slice(&bytes)?;
                Ok((book, sha256_hex(&bytes)))
            }
            None => {
                let book = Self::builtin();
                let bytes = serde_json::to_vec(&book)?;
                Ok((book, sha256_hex(&bytes)))
            }
        }
    }
}

/// Compile a pattern so that it only matches from the start of the text.
fn anchored(pattern: &str, ignore_case: bool) -> String {
    if ignore_case {
        format!("(?i)^(?:{pattern})")
    } else {
        format!("^(?:{pattern})")
    }
}

fn compile(pattern: &str) -> Result<Regex, Error> {
    Ok(Regex::new(&anchored(pattern, false))?)
}

/// Compiled decision list of a scheme.
///
/// Every row is compiled into one [RegexSet] so a subject is matched against
/// the whole table in a single pass. The lowest matching row index wins,
/// which is the first-match semantics of the ordered list ([RuleTable::scan]).
#[derive(Debug)]
pub struct RuleTable {
    field: Field,
    lowercase: bool,
    ordered: bool,
    labels: Vec<Label>,
    set: RegexSet,
    regexes: Vec<Regex>,
}

impl RuleTable {
    pub fn compile(source: &TableSource) -> Result<Self, Error> {
        let patterns: Vec<String> = source
            .rules
            .iter()
            .map(|rule| anchored(&rule.pattern, rule.ignore_case))
            .collect();
        let regexes = patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            field: source.field,
            lowercase: source.lowercase,
            ordered: source.ordered,
            labels: source.rules.iter().map(|rule| rule.label).collect(),
            set: RegexSet::new(&patterns)?,
            regexes,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Normalized text of the matched field, if present.
    pub fn normalize(&self, subject: &Subject) -> Option<String> {
        let raw = match self.field {
            Field::Value => subject.value(),
            Field::ValueUri => subject.value_uri(),
        }?;
        let text = raw.trim();
        Some(if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        })
    }

    /// Label of the first matching row.
    pub fn first_match(&self, text: &str) -> Option<Label> {
        let matches = self.set.matches(text);
        if !self.ordered && matches.iter().count() > 1 {
            debug!("{:?} matches several rows of an unordered table", text);
        }
        matches.iter().next().map(|idx| self.labels[idx])
    }

    /// Linear scan of the rows, in order.
    pub fn scan(&self, text: &str) -> Option<Label> {
        self.regexes
            .iter()
            .zip(self.labels.iter())
            .find(|(regex, _)| regex.is_match(text))
            .map(|(_, label)| *label)
    }

    pub fn resolve(&self, subject: &Subject) -> Option<Label> {
        let text = self.normalize(subject)?;
        self.first_match(&text)
    }
}

/// Compiled rules.
#[derive(Debug)]
pub struct Rules {
    pub(super) ddc_names: HashSet<String>,
    pub(super) ddc_coordinates: Regex,
    pub(super) ddc_scheme_uri: Regex,
    pub(super) anzsrc_scheme_uri: String,
    pub(super) anzsrc_code: Regex,
    pub(super) strict_anzsrc: bool,
    pub(super) jel_subject_scheme: Regex,
    pub(super) narcis_scheme_uri: String,
    pub(super) narcis_subject_scheme: String,
    pub(super) bk_subject_schemes: HashSet<String>,
    pub(super) linsearch_subject_schemes: HashSet<String>,
    pub(super) bepress_subject_schemes: HashSet<String>,
    tables: BTreeMap<Scheme, RuleTable>,
    hash: String,
}

impl Rules {
    pub fn compile(book: &RuleBook, hash: String) -> Result<Self, Error> {
        let lowercased = |names: &[String]| {
            names
                .iter()
                .map(|n| n.trim().to_lowercase())
                .collect::<HashSet<_>>()
        };
        let markers = &book.markers;
        let tables = book
            .tables
            .iter()
            .map(|(scheme, source)| Ok((*scheme, RuleTable::compile(source)?)))
            .collect::<Result<BTreeMap<_, _>, Error>>()?;

        Ok(Self {
            ddc_names: markers.ddc_names.iter().cloned().collect(),
            ddc_coordinates: compile(&markers.ddc_coordinates)?,
            ddc_scheme_uri: compile(&markers.ddc_scheme_uri)?,
            anzsrc_scheme_uri: markers.anzsrc_scheme_uri.clone(),
            anzsrc_code: compile(&markers.anzsrc_code)?,
            strict_anzsrc: true,
            jel_subject_scheme: compile(&markers.jel_subject_scheme)?,
            narcis_scheme_uri: markers.narcis_scheme_uri.clone(),
            narcis_subject_scheme: markers.narcis_subject_scheme.clone(),
            bk_subject_schemes: lowercased(&markers.bk_subject_schemes),
            linsearch_subject_schemes: lowercased(&markers.linsearch_subject_schemes),
            bepress_subject_schemes: lowercased(&markers.bepress_subject_schemes),
            tables,
            hash,
        })
    }

    /// Compile the built-in rules.
    pub fn builtin() -> Result<Self, Error> {
        let (book, hash) = RuleBook::load(None)?;
        Self::compile(&book, hash)
    }

    /// Require ANZSRC values to start with a 5 digit code (default), or accept any value.
    pub fn strict_anzsrc(mut self, strict: bool) -> Self {
        self.strict_anzsrc = strict;
        self
    }

    pub fn table(&self, scheme: Scheme) -> Option<&RuleTable> {
        self.tables.get(&scheme)
    }

    /// SHA-256 of the rule source.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Fail if the rule source hash differs from the `expected` one.
    pub fn check_hash(&self, expected: Option<&str>) -> Result<(), Error> {
        match expected {
            Some(expected) if expected != self.hash => Err(Error::RulesHashMismatch {
                expected: expected.to_string(),
                found: self.hash.clone(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(code: u8) -> Label {
        Label::new(code).unwrap()
    }

    #[test]
    fn builtin_compiles() {
        let rules = Rules::builtin().unwrap();
        for scheme in [
            Scheme::Ddc,
            Scheme::Narcis,
            Scheme::Bk,
            Scheme::Linsearch,
            Scheme::Bepress,
        ] {
            assert!(!rules.table(scheme).unwrap().is_empty(), "{scheme:?}");
        }
        assert!(rules.table(Scheme::Anzsrc).is_none());
        assert_eq!(rules.hash().len(), 64);
    }

    #[test]
    fn builtin_hash_is_stable() {
        let (_, first) = RuleBook::load(None).unwrap();
        let (_, second) = RuleBook::load(None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn hash_guard() {
        let rules = Rules::builtin().unwrap();
        assert!(rules.check_hash(None).is_ok());
        let own = rules.hash().to_string();
        assert!(rules.check_hash(Some(&own)).is_ok());
        assert!(matches!(
            rules.check_hash(Some("deadbeef")),
            Err(Error::RulesHashMismatch { .. })
        ));
    }

    #[test]
    fn anchored_at_start() {
        let source = TableSource {
            field: Field::Value,
            lowercase: true,
            ordered: true,
            rules: vec![RuleSource {
                label: label(11),
                pattern: r"61\d".to_string(),
                ignore_case: false,
            }],
        };
        let table = RuleTable::compile(&source).unwrap();
        assert_eq!(table.first_match("611.2"), Some(label(11)));
        assert_eq!(table.first_match("ddc 611"), None);
    }

    #[test]
    fn set_agrees_with_scan() {
        let rules = Rules::builtin().unwrap();
        let ddc = rules.table(Scheme::Ddc).unwrap();
        let values = [
            "000", "004", "025.04", "150", "200", "306.4", "330", "340", "372", "401", "510",
            "530", "540", "551.46", "571.9", "591.5", "610", "611.2", "630", "650", "690", "720",
            "780", "820", "900", "ddc 551", "medizin und gesundheit", "psychologie", "xyz",
        ];
        for value in values {
            assert_eq!(ddc.first_match(value), ddc.scan(value), "{value}");
        }

        let bk = rules.table(Scheme::Bk).unwrap();
        for value in ["31.10", "55.82", "55.30", "79.60", "79.10", "44.00", "99"] {
            assert_eq!(bk.first_match(value), bk.scan(value), "{value}");
        }
    }

    #[test]
    fn case_handling_is_per_row() {
        let rules = Rules::builtin().unwrap();
        let linsearch = rules.table(Scheme::Linsearch).unwrap();
        // normalized values are lower-cased, the case-sensitive row never matches them
        assert_eq!(linsearch.first_match("social science"), None);
        assert_eq!(linsearch.first_match("Social Science"), Some(label(16)));
        assert_eq!(linsearch.first_match("physics"), Some(label(2)));
    }

    #[test]
    fn rule_file_roundtrip_hash() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        let bytes = serde_json::to_vec(&RuleBook::builtin()).unwrap();
        std::fs::write(&path, &bytes).unwrap();

        let (book, hash) = RuleBook::load(Some(&path)).unwrap();
        let (_, builtin_hash) = RuleBook::load(None).unwrap();
        assert_eq!(book, RuleBook::builtin());
        assert_eq!(hash, builtin_hash);
    }
}
