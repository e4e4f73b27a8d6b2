//! Subject annotation.
use serde::{Deserialize, Serialize};

/// One classification annotation of a document.
///
/// Every field is optional, and a field that is not a string is read as absent,
/// so that malformed subjects still parse.
/// A subject without `value` is never recognized by a scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(
        default,
        deserialize_with = "super::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<String>,
    #[serde(
        default,
        rename = "subjectScheme",
        deserialize_with = "super::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub subject_scheme: Option<String>,
    #[serde(
        default,
        rename = "schemeURI",
        deserialize_with = "super::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheme_uri: Option<String>,
    #[serde(
        default,
        rename = "valueURI",
        deserialize_with = "super::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub value_uri: Option<String>,
}

impl Subject {
    pub fn new(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            ..Default::default()
        }
    }

    pub fn with_scheme(mut self, subject_scheme: &str) -> Self {
        self.subject_scheme = Some(subject_scheme.to_string());
        self
    }

    pub fn with_scheme_uri(mut self, scheme_uri: &str) -> Self {
        self.scheme_uri = Some(scheme_uri.to_string());
        self
    }

    pub fn with_value_uri(mut self, value_uri: &str) -> Self {
        self.value_uri = Some(value_uri.to_string());
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn subject_scheme(&self) -> Option<&str> {
        self.subject_scheme.as_deref()
    }

    pub fn scheme_uri(&self) -> Option<&str> {
        self.scheme_uri.as_deref()
    }

    pub fn value_uri(&self) -> Option<&str> {
        self.value_uri.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::Subject;

    #[test]
    fn deserialize_datacite_keys() {
        let s = r#"{"value": "610", "subjectScheme": "ddc", "schemeURI": "http://dewey.info/"}"#;
        let subject: Subject = serde_json::from_str(s).unwrap();
        assert_eq!(subject.value(), Some("610"));
        assert_eq!(subject.subject_scheme(), Some("ddc"));
        assert_eq!(subject.scheme_uri(), Some("http://dewey.info/"));
        assert_eq!(subject.value_uri(), None);
    }

    #[test]
    fn deserialize_without_value() {
        let subject: Subject = serde_json::from_str(r#"{"subjectScheme": "ddc"}"#).unwrap();
        assert_eq!(subject.value(), None);
    }

    #[test]
    fn wrongly_typed_fields_are_absent() {
        let subject: Subject =
            serde_json::from_str(r#"{"value": 610, "subjectScheme": "ddc", "schemeURI": null}"#)
                .unwrap();
        assert_eq!(subject.value(), None);
        assert_eq!(subject.subject_scheme(), Some("ddc"));
        assert_eq!(subject.scheme_uri(), None);
    }
}
