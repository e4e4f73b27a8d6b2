/*! Final outputs of a run.

| file | content |
|---|---|
| `<code>.data.json` | payload hash to payload, useable documents of a label |
| `label2subject.json` | label to scheme to raw subject value to count |
| `schemeURIs.json` | documents per `schemeURI` |
| `subjectSchemes.json` | documents per `subjectScheme` |
| `summary.json` | general and per-label counts |
| `result.csv` | one row per document |
| `useable.csv` | useable rows only |
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::error::Error;
use crate::processing::{Aggregate, Row};
use crate::schemes::Scheme;

pub struct OutputWriter {
    dir: PathBuf,
    schemes: Vec<Scheme>,
}

impl OutputWriter {
    /// `schemes` are the columns of the CSV files.
    pub fn new(dir: &Path, schemes: &[Scheme]) -> Result<Self, Error> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            schemes: schemes.to_vec(),
        })
    }

    fn write_json<T: Serialize>(&self, name: &str, content: &T) -> Result<(), Error> {
        let path = self.dir.join(name);
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, content)?;
        writer.flush()?;
        info!("wrote {:?}", path);
        Ok(())
    }

    fn write_rows<'a>(&self, name: &str, rows: impl Iterator<Item = &'a Row>) -> Result<(), Error> {
        let path = self.dir.join(name);
        let mut out = csv::WriterBuilder::new().from_path(&path)?;
        out.write_record(Row::csv_header(&self.schemes))?;
        for row in rows {
            out.write_record(row.csv_record(&self.schemes))?;
        }
        out.flush()?;
        info!("wrote {:?}", path);
        Ok(())
    }

    /// Remove the payload files of a previous write, whose labels may have changed since.
    fn clear_payloads(&self) -> Result<(), Error> {
        let pattern = self.dir.join("[0-9][0-9].data.json");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid output directory: {:?}", self.dir)))?;
        for path in glob::glob(pattern)? {
            let path = path?;
            debug!("removing {:?}", path);
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn write(&self, aggregate: &Aggregate) -> Result<(), Error> {
        self.clear_payloads()?;
        for (label, payloads) in &aggregate.payloads {
            self.write_json(&format!("{}.data.json", label.key()), payloads)?;
        }
        self.write_json("label2subject.json", &aggregate.stats.label2subject)?;
        self.write_json("schemeURIs.json", &aggregate.stats.scheme_uris)?;
        self.write_json("subjectSchemes.json", &aggregate.stats.subject_schemes)?;
        self.write_json("summary.json", &aggregate.summary())?;
        self.write_rows("result.csv", aggregate.rows.iter())?;
        self.write_rows("useable.csv", aggregate.rows.iter().filter(|r| r.useable))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::filtering::Payload;
    use crate::labels::Label;
    use crate::processing::ChunkResult;
    use crate::resolver::{Resolution, Resolved};

    #[test]
    fn writes_every_file() {
        let resolved = Resolved {
            resolution: Resolution::Single(Label::new(8).unwrap()),
            special: false,
            scheme_uris: vec![],
            subject_schemes: vec!["ddc".to_string()],
            mappings: vec![],
            first_values: [(Scheme::Ddc, "004".to_string())].into_iter().collect(),
        };
        let payload: Payload = [("title".to_string(), "A title".to_string())]
            .into_iter()
            .collect();
        let mut chunk = ChunkResult::new("00", "00.json");
        chunk.push(
            Row::new("a", "00.json", &resolved, Some(payload)).unwrap(),
            &resolved,
        );
        let mut aggregate = Aggregate::default();
        aggregate.merge(chunk);

        let dir = tempfile::tempdir().unwrap();
        let writer = OutputWriter::new(dir.path(), &Scheme::ALL).unwrap();
        writer.write(&aggregate).unwrap();

        for name in [
            "08.data.json",
            "label2subject.json",
            "schemeURIs.json",
            "subjectSchemes.json",
            "summary.json",
            "result.csv",
            "useable.csv",
        ] {
            assert!(dir.path().join(name).is_file(), "{name}");
        }

        // payload files of labels that are gone are removed
        std::fs::write(dir.path().join("02.data.json"), "{}").unwrap();
        writer.write(&aggregate).unwrap();
        assert!(!dir.path().join("02.data.json").exists());
        assert!(dir.path().join("08.data.json").is_file());

        let data: BTreeMap<String, Payload> =
            serde_json::from_slice(&std::fs::read(dir.path().join("08.data.json")).unwrap())
                .unwrap();
        assert_eq!(data.len(), 1);

        let mut reader = csv::Reader::from_path(dir.path().join("useable.csv")).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.get(0), Some("id"));
        assert_eq!(headers.len(), 12 + Scheme::ALL.len());
        let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(13), Some("004"));
    }
}
