/*! Language identification result.

Wraps a BCP47 [LanguageTag] and the confidence of the identifier.
!*/
use fasttext::Prediction;
use oxilangtag::{LanguageTag, LanguageTagParseError};

#[derive(Debug, Clone, PartialEq)]
pub struct Identification {
    label: LanguageTag<String>,
    prob: f32,
}

impl Identification {
    pub fn new(label: LanguageTag<String>, prob: f32) -> Self {
        Self { label, prob }
    }

    pub fn label(&self) -> &LanguageTag<String> {
        &self.label
    }

    pub fn prob(&self) -> f32 {
        self.prob
    }

    /// Whether the identified language is `target` (primary subtags are compared, `en-GB` is `en`).
    pub fn is(&self, target: &LanguageTag<String>) -> bool {
        self.label
            .primary_language()
            .eq_ignore_ascii_case(target.primary_language())
    }
}

/// fastText predictions are `__label__<code>` with `_` separated subtags.
impl TryFrom<Prediction> for Identification {
    type Error = LanguageTagParseError;
    fn try_from(prediction: Prediction) -> Result<Self, LanguageTagParseError> {
        let label = prediction
            .label
            .trim_start_matches("__label__")
            .replace('_', "-");

        Ok(Self::new(
            LanguageTag::parse_and_normalize(&label)?,
            prediction.prob,
        ))
    }
}

#[cfg(test)]
mod tests {
    use fasttext::Prediction;
    use oxilangtag::LanguageTag;

    use super::Identification;

    #[test]
    fn from_prediction() {
        let p = Prediction {
            prob: 0.9,
            label: "__label__en".to_string(),
        };
        let id = Identification::try_from(p).unwrap();
        assert_eq!(id.label().as_str(), "en");
        assert_eq!(id.prob(), 0.9);
    }

    #[test]
    fn scripted_prediction() {
        let p = Prediction {
            prob: 1.0,
            label: "__label__zho_Hans".to_string(),
        };
        let id = Identification::try_from(p).unwrap();
        assert_eq!(id.label().primary_language(), "zho");
        assert_eq!(id.label().script(), Some("Hans"));
    }

    #[test]
    fn compare_primary_language() {
        let en = LanguageTag::parse("en".to_string()).unwrap();
        let id = Identification::new(LanguageTag::parse("en-GB".to_string()).unwrap(), 1.0);
        assert!(id.is(&en));
        let de = Identification::new(LanguageTag::parse("de".to_string()).unwrap(), 1.0);
        assert!(!de.is(&en));
    }
}
