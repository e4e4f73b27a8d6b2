//! Identification from the `lang` attribute of instances.
use oxilangtag::LanguageTag;

use crate::error::Error;
use crate::metadata::Instance;

use super::{Identification, Identify};

/// Trusts the declared language of an instance.
///
/// Instances without a `lang` attribute are identified as English
/// when they only hold ASCII characters, and are left unidentified otherwise.
#[derive(Debug, Default, Clone)]
pub struct Declared;

impl Identify for Declared {
    fn identify(&self, instance: &Instance) -> Result<Option<Identification>, Error> {
        match (instance.lang.as_deref(), instance.value.as_deref()) {
            (Some(lang), _) => {
                let tag = LanguageTag::parse_and_normalize(lang.trim())?;
                Ok(Some(Identification::new(tag, 1.0)))
            }
            (None, Some(text)) if text.is_ascii() => Ok(Some(Identification::new(
                LanguageTag::parse("en".to_string())?,
                1.0,
            ))),
            _ => Ok(None),
        }
    }
}
