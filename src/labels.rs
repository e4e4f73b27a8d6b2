//! ANZSRC discipline taxonomy.
//!
//! The label space is closed: 22 fields of research (`01`..`22`) and the
//! `00 uncategorized` sentinel. A [Label] is identified by its numeric code,
//! and a [LabelSet] stores distinct labels as a bitmask where bit `n` stands
//! for label `n`.
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

lazy_static! {
    /// Long names, indexed by label code.
    pub static ref NAMES: [&'static str; 23] = [
        "uncategorized",
        "mathematical science",
        "physical science",
        "chemical science",
        "earth sciences",
        "environmental sciences",
        "biological sciences",
        "agricultural and veterinary science",
        "information and computing sciences",
        "engineering",
        "technology",
        "medical and health sciences",
        "built environment and design",
        "education",
        "economics",
        "commerce, management, tourism and services",
        "studies in human society",
        "psychology and cognitive sciences",
        "law and legal studies",
        "studies in creative arts and writing",
        "language, communication and culture",
        "history and archaeology",
        "philosophy and religious studies",
    ];
}

/// One discipline of the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(u8);

impl Label {
    pub const UNCATEGORIZED: Label = Label(0);
    pub const MAX_CODE: u8 = 22;

    pub fn new(code: u8) -> Option<Self> {
        if code <= Self::MAX_CODE {
            Some(Self(code))
        } else {
            None
        }
    }

    /// Iterate over the 22 disciplines, leaving the sentinel out.
    pub fn disciplines() -> impl Iterator<Item = Label> {
        (1..=Self::MAX_CODE).map(Label)
    }

    pub fn code(&self) -> u8 {
        self.0
    }

    /// Two-digit code, as used in file names and lookups (`"08"`).
    pub fn key(&self) -> String {
        format!("{:02}", self.0)
    }

    pub fn name(&self) -> &'static str {
        NAMES[usize::from(self.0)]
    }

    pub fn is_uncategorized(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} {}", self.0, self.name())
    }
}

/// Parses either a code (`"8"`, `"08"`) or a full long name (`"08 information and computing sciences"`).
impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let code = s.split_whitespace().next().unwrap_or_default();
        code.parse::<u8>()
            .ok()
            .and_then(Label::new)
            .ok_or_else(|| Error::UnknownLabel(s.to_string()))
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Label::from_str(&s).map_err(de::Error::custom)
    }
}

/// Set of distinct labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(u32);

impl LabelSet {
    pub fn insert(&mut self, label: Label) {
        self.0 |= 1 << label.code();
    }

    pub fn contains(&self, label: Label) -> bool {
        self.0 & (1 << label.code()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Returns the label if the set holds exactly one.
    pub fn single(&self) -> Option<Label> {
        if self.len() == 1 {
            Label::new(self.0.trailing_zeros() as u8)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        (0..=Label::MAX_CODE)
            .map(Label)
            .filter(move |label| self.contains(*label))
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut set = LabelSet::default();
        for label in iter {
            set.insert(label);
        }
        set
    }
}
