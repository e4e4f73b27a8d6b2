//! Subject cleaning pipeline
//!
//! Turns a directory of harvested metadata chunks into a deduplicated,
//! single-label training set partitioned by ANZSRC discipline.
//!
//! # Processing
//! 1. The rules are loaded and their hash is checked against the pinned one, a mismatch aborts the run.
//! 1. Chunk files are sorted by descending size and processed by a pool of `workers` threads.
//!    Each chunk result is saved on its own. Chunks that already have a result made with the same rules are skipped.
//! 1. Chunk results of completed chunks are merged in the sorted order, deduplicating payloads per label.
//! 1. Payloads, statistics and per-document tables are written to the run directory.
//!
//! There is no timeout on workers: a chunk that never finishes blocks the run.
use std::path::PathBuf;

use log::{info, warn};
use rayon::prelude::*;
use regex::Regex;

use crate::config::CleanConfig;
use crate::error::Error;
use crate::filtering::PayloadExtractor;
use crate::identifiers::Identify;
use crate::io::{list_chunks, ChunkFile, OutputWriter, PartialStore};
use crate::pipelines::Pipeline;
use crate::processing::{Aggregate, Summary};
use crate::resolver::Resolver;

use super::Worker;

pub struct Clean {
    config: CleanConfig,
    identifier: Option<Box<dyn Identify>>,
}

impl Clean {
    pub fn new(config: CleanConfig) -> Self {
        Self {
            config,
            identifier: None,
        }
    }

    /// Use `identifier` instead of the configured one.
    pub fn with_identifier(mut self, identifier: Box<dyn Identify>) -> Self {
        self.identifier = Some(identifier);
        self
    }

    /// Directory holding the outputs of this configuration.
    pub fn run_dir(&self) -> Result<PathBuf, Error> {
        self.config.run_dir()
    }

    /// Process every chunk, returning the chunks that did not complete.
    fn map(
        &self,
        worker: &Worker,
        chunks: &[ChunkFile],
        store: &PartialStore,
    ) -> Result<Vec<ChunkFile>, Error> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers.max(1))
            .build()
            .map_err(|e| Error::Custom(e.to_string()))?;
        info!("Starting {} workers", pool.current_num_threads());

        let outcomes: Vec<(&ChunkFile, Result<(), Error>)> = pool.install(|| {
            chunks
                .par_iter()
                .map(|chunk| (chunk, worker.run(chunk, store)))
                .collect()
        });

        Ok(outcomes
            .into_iter()
            .filter_map(|(chunk, outcome)| outcome.err().map(|_| chunk.clone()))
            .collect())
    }

    /// Merge the chunk results in the order of `chunks`.
    fn reduce(chunks: &[ChunkFile], store: &PartialStore) -> Result<Aggregate, Error> {
        info!("Combining worker output");
        let mut aggregate = Aggregate::default();
        for chunk in chunks {
            aggregate.merge(store.load(&chunk.id)?);
        }
        Ok(aggregate)
    }

    fn report(summary: &Summary) {
        info!("Discipline match after data cleanup");
        let width = summary
            .labels
            .values()
            .map(|l| l.name.len())
            .max()
            .unwrap_or(0);
        for label in summary.labels.values() {
            info!(
                "\t{:<width$}: {:>12} ({:>6.2}% of single-label documents)",
                label.name,
                label.useable,
                label.useable_pct,
                width = width
            );
        }
        info!("General Statistics:");
        info!("\tNumber of non-annotatable docs:    {:>12}", summary.not_annotatable);
        info!("\tNumber of multi-annotated docs:    {:>12}", summary.multi_annotated);
        info!("\tNumber of docs with unfit payload: {:>12}", summary.not_fit);
        info!("\tNumber of duplicate docs:          {:>12}", summary.duplicates);
        info!("\tNumber of special-source docs:     {:>12}", summary.special);
        info!("\tNumber of useable documents:       {:>12}", summary.useable);
        info!("\tNumber of documents:               {:>12}", summary.documents);
    }
}

impl Pipeline<Summary> for Clean {
    fn version() -> &'static str {
        "1.0.0"
    }

    fn run(&self) -> Result<Summary, Error> {
        let config = &self.config;
        let run_dir = config.run_dir()?;
        std::fs::create_dir_all(&run_dir)?;
        config.save(&run_dir)?;
        info!("Starting clean with config {:?}", run_dir);

        let rules = config.load_rules()?;

        let built;
        let identifier: &dyn Identify = match &self.identifier {
            Some(identifier) => &**identifier,
            None => {
                built = config.identifier.build()?;
                &*built
            }
        };

        let resolver = Resolver::new(&rules, &config.schemes).uncategorized(config.uncategorized);
        let extractor = PayloadExtractor::new(&config.fields, identifier, config.language_tag()?)
            .dedup_instances(config.dedup_instances);
        let special_regex = Regex::new(&config.special_regex)?;
        let data_regex = Regex::new(&config.data_regex)?;
        let chunks = list_chunks(&config.raw_dir, &data_regex, Some(&special_regex))?;
        let worker = Worker::new(resolver, extractor, special_regex, &config.special);

        info!("{} chunk files in {:?}", chunks.len(), config.raw_dir);

        let store = PartialStore::new(&run_dir.join("chunks"))?;
        let failed = self.map(&worker, &chunks, &store)?;
        for chunk in &failed {
            warn!("{} did not complete", chunk.name);
        }

        let completed: Vec<ChunkFile> = chunks
            .into_iter()
            .filter(|chunk| !failed.contains(chunk))
            .collect();
        let aggregate = Self::reduce(&completed, &store)?;

        OutputWriter::new(&run_dir, &config.schemes)?.write(&aggregate)?;
        let summary = aggregate.summary();
        Self::report(&summary);
        Ok(summary)
    }
}
