/*! Subject classification schemes.

A [Scheme] both recognizes the subjects that belong to it ([Scheme::detect])
and maps them to a discipline ([Scheme::map]).
Regex backed schemes get their tables from a compiled [Rules].

ANZSRC codes are not matched by regex: the class key is derived from the
length parity of the leading digit run and looked up directly.
!*/
mod rules;
mod tables;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

pub use rules::{Field, Markers, RuleBook, RuleSource, RuleTable, Rules, TableSource};

use crate::error::Error;
use crate::labels::Label;
use crate::metadata::Subject;

lazy_static! {
    /// ANZSRC two-digit division keys.
    static ref ANZSRC_BASE_CLASSES: HashMap<String, Label> =
        Label::disciplines().map(|label| (label.key(), label)).collect();
}

/// Supported classification schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Anzsrc,
    Ddc,
    Jel,
    Narcis,
    Bk,
    Linsearch,
    Bepress,
}

impl Scheme {
    /// Default priority order.
    pub const ALL: [Scheme; 7] = [
        Scheme::Anzsrc,
        Scheme::Ddc,
        Scheme::Jel,
        Scheme::Narcis,
        Scheme::Bk,
        Scheme::Linsearch,
        Scheme::Bepress,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Anzsrc => "anzsrc",
            Scheme::Ddc => "ddc",
            Scheme::Jel => "jel",
            Scheme::Narcis => "narcis",
            Scheme::Bk => "bk",
            Scheme::Linsearch => "linsearch",
            Scheme::Bepress => "bepress",
        }
    }

    /// Whether `subject` belongs to this scheme.
    ///
    /// A subject without a value belongs to no scheme.
    pub fn detect(&self, rules: &Rules, subject: &Subject) -> bool {
        let value = match subject.value() {
            Some(value) => value.trim(),
            None => return false,
        };
        let subject_scheme = subject.subject_scheme();
        let scheme_uri = subject.scheme_uri();
        let named = |names: &std::collections::HashSet<String>| {
            subject_scheme
                .map(|s| names.contains(&s.trim().to_lowercase()))
                .unwrap_or(false)
        };

        match self {
            Scheme::Ddc => {
                !rules.ddc_coordinates.is_match(value)
                    && (subject_scheme
                        .map(|s| rules.ddc_names.contains(s))
                        .unwrap_or(false)
                        || scheme_uri
                            .map(|u| rules.ddc_scheme_uri.is_match(u))
                            .unwrap_or(false))
            }
            Scheme::Anzsrc => {
                scheme_uri == Some(rules.anzsrc_scheme_uri.as_str())
                    && (!rules.strict_anzsrc || rules.anzsrc_code.is_match(value))
            }
            Scheme::Jel => subject_scheme
                .map(|s| rules.jel_subject_scheme.is_match(s))
                .unwrap_or(false),
            Scheme::Narcis => {
                scheme_uri == Some(rules.narcis_scheme_uri.as_str())
                    || subject_scheme == Some(rules.narcis_subject_scheme.as_str())
            }
            Scheme::Bk => named(&rules.bk_subject_schemes),
            Scheme::Linsearch => named(&rules.linsearch_subject_schemes),
            Scheme::Bepress => named(&rules.bepress_subject_schemes),
        }
    }

    /// Map a subject of this scheme to a discipline.
    ///
    /// [None] means the value is uncategorized: no row matched, or the ANZSRC class key is unknown.
    pub fn map(&self, rules: &Rules, subject: &Subject) -> Option<Label> {
        match self {
            Scheme::Anzsrc => subject.value().and_then(anzsrc_label),
            // JEL codes only ever annotate economics
            Scheme::Jel => Label::new(14),
            Scheme::Ddc | Scheme::Narcis | Scheme::Bk | Scheme::Linsearch | Scheme::Bepress => {
                rules.table(*self)?.resolve(subject)
            }
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Scheme::ALL
            .iter()
            .find(|scheme| scheme.name() == lowered)
            .copied()
            .ok_or_else(|| Error::UnknownScheme(s.to_string()))
    }
}

/// Two-digit ANZSRC class key of a code.
///
/// The first run of digits is used. Codes written with their leading zero have
/// an even length (`0801`) and the key is their first two digits, codes that lost
/// it have an odd length (`801`) and the key is their zero-padded first digit.
pub fn anzsrc_key(code: &str) -> Option<String> {
    let digits: String = code
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.len() {
        0 => None,
        n if n % 2 == 0 => Some(digits[..2].to_string()),
        _ => Some(format!("0{}", &digits[..1])),
    }
}

/// Discipline of an ANZSRC code, [None] for unknown class keys.
pub fn anzsrc_label(code: &str) -> Option<Label> {
    anzsrc_key(code).and_then(|key| ANZSRC_BASE_CLASSES.get(&key).copied())
}
