//! Chunk file discovery and reading.
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use log::{debug, error, warn};
use regex::Regex;

use crate::error::Error;
use crate::metadata::Chunk;

/// A raw chunk file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFile {
    pub path: PathBuf,
    /// file name
    pub name: String,
    /// stable identifier, names the partial result
    pub id: String,
    pub size: u64,
}

impl ChunkFile {
    pub fn new(path: &Path, data_regex: &Regex) -> Result<Self, Error> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::Custom(format!("invalid chunk file name: {:?}", path)))?
            .to_string();
        let id = chunk_id(&name, data_regex);
        let size = std::fs::metadata(path)?.len();
        Ok(Self {
            path: path.to_path_buf(),
            name,
            id,
            size,
        })
    }

    pub fn read(&self) -> Result<Chunk, Error> {
        read_chunk(&self.path)
    }
}

/// First capture group of the data regex, or the file stem.
pub fn chunk_id(name: &str, data_regex: &Regex) -> String {
    data_regex
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| {
            let stem = name.trim_end_matches(".gz");
            stem.rsplit_once('.')
                .map_or(stem, |(stem, _)| stem)
                .to_string()
        })
}

/// List the chunk files of `dir` whose name matches `data_regex` or `special_regex`,
/// largest first (ties broken by path).
pub fn list_chunks(
    dir: &Path,
    data_regex: &Regex,
    special_regex: Option<&Regex>,
) -> Result<Vec<ChunkFile>, Error> {
    let pattern = dir.join("*");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| Error::Custom(format!("invalid raw directory: {:?}", dir)))?;

    let mut chunks = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                error!("error reading raw directory: {}", e);
                continue;
            }
        };
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .map_or(false, |n| {
                data_regex.is_match(n) || special_regex.map_or(false, |r| r.is_match(n))
            });
        if path.is_file() && matches {
            chunks.push(ChunkFile::new(&path, data_regex)?);
        } else {
            debug!("skipping {:?}", path);
        }
    }

    chunks.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
    disambiguate(&mut chunks);
    Ok(chunks)
}

/// Chunks sharing an id (`00.json`, `00.json.gz`) are identified by their file name instead.
fn disambiguate(chunks: &mut [ChunkFile]) {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for chunk in chunks.iter() {
        *counts.entry(chunk.id.clone()).or_default() += 1;
    }
    for chunk in chunks.iter_mut() {
        if counts.get(&chunk.id).copied().unwrap_or(0) > 1 {
            warn!(
                "{}: chunk id {} is not unique, using the file name",
                chunk.name, chunk.id
            );
            chunk.id = chunk.name.clone();
        }
    }
}

/// Read a chunk file, gzipped if its extension is `gz`.
pub fn read_chunk(path: &Path) -> Result<Chunk, Error> {
    let file = File::open(path)?;
    let reader: Box<dyn Read> = match path.extension().and_then(|e| e.to_str()) {
        Some("gz") => Box::new(MultiGzDecoder::new(file)),
        _ => Box::new(file),
    };
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::*;

    const CHUNK: &str = r#"{"documents": [{"identifier": "a", "subjects": []}]}"#;

    #[test]
    fn ids() {
        let with_group = Regex::new(r"^([0-9a-f]{2})\.json$").unwrap();
        assert_eq!(chunk_id("0a.json", &with_group), "0a");
        let without = Regex::new(r"[0-9a-f]{2}\.json$").unwrap();
        assert_eq!(chunk_id("0a.json", &without), "0a");
        assert_eq!(chunk_id("wiki_physics.json.gz", &without), "wiki_physics");
    }

    #[test]
    fn sorted_by_size() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("00.json"), CHUNK).unwrap();
        std::fs::write(dir.path().join("01.json"), format!("{CHUNK}   ")).unwrap();
        std::fs::write(dir.path().join("02.json"), CHUNK).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let regex = Regex::new(r"[0-9a-f]{2}\.json$").unwrap();
        let chunks = list_chunks(dir.path(), &regex, None).unwrap();
        let names: Vec<&str> = chunks.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["01.json", "00.json", "02.json"]);
    }

    #[test]
    fn special_chunks_listed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("00.json"), CHUNK).unwrap();
        std::fs::write(dir.path().join("wiki_physics.json"), CHUNK).unwrap();

        let data = Regex::new(r"[0-9a-f]{2}\.json$").unwrap();
        let special = Regex::new(r"^wiki.*\.json$").unwrap();
        assert_eq!(list_chunks(dir.path(), &data, None).unwrap().len(), 1);
        let chunks = list_chunks(dir.path(), &data, Some(&special)).unwrap();
        let names: Vec<&str> = chunks.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["00.json", "wiki_physics.json"]);
        assert_eq!(chunks[1].id, "wiki_physics");
    }

    #[test]
    fn colliding_ids() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("00.json"), CHUNK).unwrap();
        std::fs::write(dir.path().join("00.json.gz"), CHUNK).unwrap();
        std::fs::write(dir.path().join("01.json"), CHUNK).unwrap();

        let regex = Regex::new(r"[0-9a-f]{2}\.json(?:\.gz)?$").unwrap();
        let chunks = list_chunks(dir.path(), &regex, None).unwrap();
        let ids: Vec<&str> = chunks.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["00.json", "00.json.gz", "01"]);
    }

    #[test]
    fn read_plain_and_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("00.json");
        std::fs::write(&plain, CHUNK).unwrap();

        let gz = dir.path().join("01.json.gz");
        let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(CHUNK.as_bytes()).unwrap();
        encoder.finish().unwrap();

        assert_eq!(read_chunk(&plain).unwrap().documents.len(), 1);
        assert_eq!(read_chunk(&gz).unwrap().documents.len(), 1);
    }

    #[test]
    fn malformed_chunk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("00.json");
        std::fs::write(&path, "{\"documents\": [").unwrap();
        assert!(matches!(read_chunk(&path), Err(Error::Serde(_))));
    }
}
