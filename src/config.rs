//! Run configuration.
//!
//! A JSON file with a `clean` section. Every key but the two directories has a default.
//! The hash of the section identifies the run and names its output directory,
//! so that runs with different settings never mix their partial results.
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, info};
use oxilangtag::LanguageTag;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::filtering::FieldSpec;
use crate::identifiers::{Declared, FastTextBuilder, Identify};
use crate::labels::Label;
use crate::processing::content_hash;
use crate::resolver::Uncategorized;
use crate::schemes::{RuleBook, Rules, Scheme};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub clean: CleanConfig,
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let config = serde_json::from_reader(reader)?;
        debug!("loaded configuration from {:?}", path);
        Ok(config)
    }
}

/// How payload languages are identified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IdentifierConfig {
    FastText {
        #[serde(default = "default_model_path")]
        path: PathBuf,
        #[serde(default = "default_threshold")]
        threshold: f32,
    },
    /// trust the `lang` attribute of instances
    Declared,
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        IdentifierConfig::FastText {
            path: default_model_path(),
            threshold: default_threshold(),
        }
    }
}

impl IdentifierConfig {
    pub fn build(&self) -> Result<Box<dyn Identify>, Error> {
        match self {
            IdentifierConfig::FastText { path, threshold } => {
                info!("loading fasttext model {:?}", path);
                let model = FastTextBuilder::default()
                    .path(path)
                    .threshold(*threshold)
                    .build()?;
                Ok(Box::new(model))
            }
            IdentifierConfig::Declared => Ok(Box::new(Declared)),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("lid.176.bin")
}

fn default_threshold() -> f32 {
    0.8
}

fn default_data_regex() -> String {
    r"[0-9a-f]{2}\.json$".to_string()
}

fn default_special_regex() -> String {
    r"^wiki.*\.json$".to_string()
}

fn default_schemes() -> Vec<Scheme> {
    Scheme::ALL.to_vec()
}

fn default_fields() -> Vec<FieldSpec> {
    vec![FieldSpec::new("title", 1), FieldSpec::new("description", 15)]
}

fn default_language() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

fn default_workers() -> usize {
    4
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanConfig {
    /// directory of raw chunk files
    pub raw_dir: PathBuf,
    pub output_dir: PathBuf,
    /// chunk files are the ones whose name matches
    #[serde(default = "default_data_regex")]
    pub data_regex: String,
    #[serde(default = "default_special_regex")]
    pub special_regex: String,
    /// fixed label of special chunk files, by file name
    #[serde(default)]
    pub special: BTreeMap<String, Label>,
    /// active schemes, in priority order
    #[serde(default = "default_schemes")]
    pub schemes: Vec<Scheme>,
    #[serde(default = "default_fields")]
    pub fields: Vec<FieldSpec>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub identifier: IdentifierConfig,
    #[serde(default)]
    pub dedup_instances: bool,
    #[serde(default)]
    pub uncategorized: Uncategorized,
    #[serde(default = "default_true")]
    pub strict_anzsrc: bool,
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// rule file replacing the built-in rules
    #[serde(default)]
    pub rules: Option<PathBuf>,
    /// expected hash of the rule source
    #[serde(default)]
    pub rules_hash: Option<String>,
}

impl CleanConfig {
    pub fn new(raw_dir: &Path, output_dir: &Path) -> Self {
        Self {
            raw_dir: raw_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            data_regex: default_data_regex(),
            special_regex: default_special_regex(),
            special: BTreeMap::new(),
            schemes: default_schemes(),
            fields: default_fields(),
            language: default_language(),
            identifier: IdentifierConfig::default(),
            dedup_instances: false,
            uncategorized: Uncategorized::default(),
            strict_anzsrc: true,
            workers: default_workers(),
            rules: None,
            rules_hash: None,
        }
    }

    /// SHA-256 of the sorted-key JSON of the section.
    pub fn hash(&self) -> Result<String, Error> {
        // serde_json::Value objects are sorted by key
        let canonical = serde_json::to_value(self)?;
        content_hash(&canonical)
    }

    /// Output directory of this configuration.
    pub fn run_dir(&self) -> Result<PathBuf, Error> {
        Ok(self.output_dir.join(self.hash()?))
    }

    /// Save a copy of the configuration in `dir`.
    pub fn save(&self, dir: &Path) -> Result<(), Error> {
        let path = dir.join("config.json");
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(file, self)?;
        debug!("saved configuration copy to {:?}", path);
        Ok(())
    }

    pub fn language_tag(&self) -> Result<LanguageTag<String>, Error> {
        Ok(LanguageTag::parse_and_normalize(&self.language)?)
    }

    /// Load and compile the rules, checking their hash against [CleanConfig::rules_hash].
    pub fn load_rules(&self) -> Result<Rules, Error> {
        let (book, hash) = RuleBook::load(self.rules.as_deref())?;
        let rules = Rules::compile(&book, hash)?.strict_anzsrc(self.strict_anzsrc);
        rules.check_hash(self.rules_hash.as_deref())?;
        info!("using rules {}", rules.hash());
        Ok(rules)
    }
}
