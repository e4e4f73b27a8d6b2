//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Csv(csv::Error),
    Regex(regex::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    FastText(String),
    LanguageTag(oxilangtag::LanguageTagParseError),
    UnknownScheme(String),
    UnknownLabel(String),
    RulesHashMismatch { expected: String, found: String },
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Serde(e) => write!(f, "json error: {e}"),
            Error::Csv(e) => write!(f, "csv error: {e}"),
            Error::Regex(e) => write!(f, "invalid regex: {e}"),
            Error::Glob(e) => write!(f, "glob error: {e}"),
            Error::GlobPattern(e) => write!(f, "invalid glob pattern: {e}"),
            Error::FastText(e) => write!(f, "fasttext error: {e}"),
            Error::LanguageTag(e) => write!(f, "invalid language tag: {e}"),
            Error::UnknownScheme(s) => write!(f, "unknown subject scheme: {s}"),
            Error::UnknownLabel(s) => write!(f, "unknown label: {s}"),
            Error::RulesHashMismatch { expected, found } => write!(
                f,
                "rule table hash mismatch: configured {expected}, loaded {found}"
            ),
            Error::Custom(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Error {
        Error::Regex(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<oxilangtag::LanguageTagParseError> for Error {
    fn from(e: oxilangtag::LanguageTagParseError) -> Error {
        Error::LanguageTag(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
