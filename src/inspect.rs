/*! Inspection of raw subjects and run statistics.

- [grep] streams every subject of the raw chunks and reports those whose field matches a pattern,
- [analyze] reads a statistics file of a run and sorts its entries by count.
!*/
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use log::error;
use regex::Regex;

use crate::error::Error;
use crate::io::list_chunks;
use crate::labels::Label;
use crate::metadata::Subject;
use crate::processing::FanOut;

/// Subject field to grep on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectField {
    Value,
    SubjectScheme,
    SchemeUri,
}

impl SubjectField {
    fn get<'s>(&self, subject: &'s Subject) -> Option<&'s str> {
        match self {
            SubjectField::Value => subject.value(),
            SubjectField::SubjectScheme => subject.subject_scheme(),
            SubjectField::SchemeUri => subject.scheme_uri(),
        }
    }
}

impl FromStr for SubjectField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(SubjectField::Value),
            "subjectScheme" => Ok(SubjectField::SubjectScheme),
            "schemeURI" => Ok(SubjectField::SchemeUri),
            other => Err(Error::Custom(format!(
                "unknown subject field {other}, expected value, subjectScheme or schemeURI"
            ))),
        }
    }
}

/// A subject matched by [grep].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub chunk: String,
    pub document: Option<String>,
    pub subject: Subject,
}

/// Call `on_match` for every subject whose `field` matches `pattern` from its start.
///
/// Unreadable chunks are logged and skipped. Returns the number of matches.
pub fn grep<F>(
    raw_dir: &Path,
    data_regex: &Regex,
    field: SubjectField,
    pattern: &str,
    mut on_match: F,
) -> Result<usize, Error>
where
    F: FnMut(Match),
{
    let pattern = Regex::new(&format!("^(?:{pattern})"))?;
    let mut count = 0;
    for chunk in list_chunks(raw_dir, data_regex, None)? {
        let documents = match chunk.read() {
            Ok(c) => c.documents,
            Err(e) => {
                error!("{}: {:?}", chunk.name, e);
                continue;
            }
        };
        for document in &documents {
            for subject in document.subjects() {
                if field.get(subject).map_or(false, |v| pattern.is_match(v)) {
                    count += 1;
                    on_match(Match {
                        chunk: chunk.name.clone(),
                        document: document.id().map(String::from),
                        subject: subject.clone(),
                    });
                }
            }
        }
    }
    Ok(count)
}

/// Statistics file of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsFile {
    SubjectSchemes,
    SchemeUris,
    Label2Subject,
}

impl StatsFile {
    pub fn file_name(&self) -> &'static str {
        match self {
            StatsFile::SubjectSchemes => "subjectSchemes.json",
            StatsFile::SchemeUris => "schemeURIs.json",
            StatsFile::Label2Subject => "label2subject.json",
        }
    }
}

impl FromStr for StatsFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subjectSchemes" => Ok(StatsFile::SubjectSchemes),
            "schemeURIs" => Ok(StatsFile::SchemeUris),
            "label2subject" => Ok(StatsFile::Label2Subject),
            other => Err(Error::Custom(format!(
                "unknown statistics {other}, expected subjectSchemes, schemeURIs or label2subject"
            ))),
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Entries of a statistics file by descending count.
///
/// `label2subject` entries are the `scheme: value` pairs of `label`.
pub fn analyze(
    run_dir: &Path,
    stats: StatsFile,
    label: Label,
) -> Result<Vec<(String, usize)>, Error> {
    let path = run_dir.join(stats.file_name());
    let mut entries: Vec<(String, usize)> = match stats {
        StatsFile::SubjectSchemes | StatsFile::SchemeUris => {
            read_json::<BTreeMap<String, usize>>(&path)?
                .into_iter()
                .collect()
        }
        StatsFile::Label2Subject => {
            let mut fan_outs: BTreeMap<Label, FanOut> = read_json(&path)?;
            let fan_out = fan_outs.remove(&label).unwrap_or_default();
            fan_out
                .schemes
                .into_iter()
                .flat_map(|(scheme, values)| {
                    values
                        .into_iter()
                        .map(move |(value, count)| (format!("{scheme}: {value}"), count))
                })
                .collect()
        }
    };
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemes::Scheme;

    const CHUNK: &str = r#"{"documents": [
        {"identifier": "a", "subjects": [
            {"value": "610", "subjectScheme": "ddc"},
            {"value": "Soil", "subjectScheme": "lcsh"}
        ]},
        {"identifier": "b", "subjects": [{"value": "611.2", "subjectScheme": "ddc"}]}
    ]}"#;

    #[test]
    fn grep_values() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("00.json"), CHUNK).unwrap();
        std::fs::write(dir.path().join("01.json"), "not json").unwrap();
        let data = Regex::new(r"[0-9a-f]{2}\.json$").unwrap();

        let mut matches = Vec::new();
        let count = grep(dir.path(), &data, SubjectField::Value, r"61\d", |m| {
            matches.push(m)
        })
        .unwrap();
        assert_eq!(count, 2);
        assert_eq!(matches[0].document.as_deref(), Some("a"));
        assert_eq!(matches[1].subject.value(), Some("611.2"));

        // anchored at the start
        let count = grep(dir.path(), &data, SubjectField::Value, r"1\.2", |_| ()).unwrap();
        assert_eq!(count, 0);

        let count = grep(
            dir.path(),
            &data,
            "subjectScheme".parse().unwrap(),
            "lc",
            |_| (),
        )
        .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn analyze_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("subjectSchemes.json"),
            r#"{"ddc": 2, "lcsh": 5, "bk": 2}"#,
        )
        .unwrap();
        let entries = analyze(dir.path(), StatsFile::SubjectSchemes, Label::UNCATEGORIZED).unwrap();
        assert_eq!(
            entries,
            vec![
                ("lcsh".to_string(), 5),
                ("bk".to_string(), 2),
                ("ddc".to_string(), 2)
            ]
        );
    }

    #[test]
    fn analyze_label() {
        let dir = tempfile::tempdir().unwrap();
        let medical = Label::new(11).unwrap();
        let mut fan_out = FanOut::default();
        fan_out.register(Scheme::Ddc, "610");
        fan_out.register(Scheme::Ddc, "610");
        fan_out.register(Scheme::Bk, "44.00");
        let fan_outs: BTreeMap<Label, FanOut> = [(medical, fan_out)].into_iter().collect();
        std::fs::write(
            dir.path().join("label2subject.json"),
            serde_json::to_vec(&fan_outs).unwrap(),
        )
        .unwrap();

        let entries = analyze(dir.path(), StatsFile::Label2Subject, medical).unwrap();
        assert_eq!(entries[0], ("ddc: 610".to_string(), 2));
        assert_eq!(entries.len(), 2);
        assert!(analyze(dir.path(), StatsFile::Label2Subject, Label::new(1).unwrap())
            .unwrap()
            .is_empty());
    }
}
