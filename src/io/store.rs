//! Partial results store.
//!
//! Each chunk gets its own `<chunk id>.json` file.
//! Files are written under a temporary name then renamed,
//! so an existing file is always a complete result.
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::processing::ChunkResult;

pub struct PartialStore {
    dir: PathBuf,
}

impl PartialStore {
    /// Open the store, creating its directory if needed.
    pub fn new(dir: &Path) -> Result<Self, Error> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn path(&self, chunk_id: &str) -> PathBuf {
        self.dir.join(format!("{chunk_id}.json"))
    }

    pub fn contains(&self, chunk_id: &str) -> bool {
        self.path(chunk_id).is_file()
    }

    pub fn load(&self, chunk_id: &str) -> Result<ChunkResult, Error> {
        let reader = BufReader::new(File::open(self.path(chunk_id))?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn save(&self, result: &ChunkResult) -> Result<PathBuf, Error> {
        let path = self.path(&result.chunk);
        let tmp = self.dir.join(format!(".{}.json.tmp", result.chunk));
        {
            let mut writer = BufWriter::new(File::create(&tmp)?);
            serde_json::to_writer(&mut writer, result)?;
            writer.flush()?;
        }
        std::fs::rename(&tmp, &path)?;
        Ok(path)
    }
}
