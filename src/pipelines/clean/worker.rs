//! Chunk worker.
//!
//! Runs label resolution and payload extraction on every document of a chunk file.
//! A worker is shared read-only between the threads of the pool.
use std::collections::BTreeMap;

use log::{debug, error, info, warn};
use regex::Regex;

use crate::error::Error;
use crate::filtering::PayloadExtractor;
use crate::io::{ChunkFile, PartialStore};
use crate::labels::Label;
use crate::processing::{ChunkResult, Row};
use crate::resolver::{Resolution, Resolver};

pub struct Worker<'a> {
    resolver: Resolver<'a>,
    extractor: PayloadExtractor<'a>,
    special_regex: Regex,
    special: &'a BTreeMap<String, Label>,
}

impl<'a> Worker<'a> {
    pub fn new(
        resolver: Resolver<'a>,
        extractor: PayloadExtractor<'a>,
        special_regex: Regex,
        special: &'a BTreeMap<String, Label>,
    ) -> Self {
        Self {
            resolver,
            extractor,
            special_regex,
            special,
        }
    }

    /// Fixed label of a special chunk.
    fn special_label(&self, name: &str) -> Option<Label> {
        if !self.special_regex.is_match(name) {
            return None;
        }
        let label = self.special.get(name).copied();
        if label.is_none() {
            debug!("{} looks special but has no configured label", name);
        }
        label
    }

    /// Process a whole chunk.
    pub fn process(&self, chunk: &ChunkFile) -> Result<ChunkResult, Error> {
        let special = self.special_label(&chunk.name);
        let documents = chunk.read()?.documents;
        let mut result =
            ChunkResult::new(&chunk.id, &chunk.name).with_rules(self.resolver.rules().hash());

        for (idx, document) in documents.iter().enumerate() {
            let resolved = self.resolver.resolve(document, special);
            let payload = match resolved.resolution {
                Resolution::Single(_) => self.extractor.extract(document),
                _ => None,
            };
            // documents without identifier are named after their position
            let id = document
                .id()
                .map(String::from)
                .unwrap_or_else(|| format!("{}#{}", chunk.id, idx));
            let row = Row::new(&id, &chunk.name, &resolved, payload)?;
            result.push(row, &resolved);
        }
        Ok(result)
    }

    /// Whether the chunk has a partial result made with the current rules.
    fn is_done(&self, chunk: &ChunkFile, store: &PartialStore) -> bool {
        if !store.contains(&chunk.id) {
            return false;
        }
        match store.load(&chunk.id) {
            Ok(previous) if previous.rules == self.resolver.rules().hash() => true,
            Ok(previous) => {
                warn!(
                    "{}: processed with rules {:?}, processing again",
                    chunk.name, previous.rules
                );
                false
            }
            Err(e) => {
                warn!("{}: unreadable partial result ({}), processing again", chunk.name, e);
                false
            }
        }
    }

    /// Process a chunk unless it already has a partial result made with the current rules.
    pub fn run(&self, chunk: &ChunkFile, store: &PartialStore) -> Result<(), Error> {
        if self.is_done(chunk, store) {
            info!("{}: already processed", chunk.name);
            return Ok(());
        }
        info!("{}: start processing", chunk.name);
        let saved = self
            .process(chunk)
            .and_then(|result| Ok((store.save(&result)?, result.stats.documents)));
        let (path, documents) = saved.map_err(|e| {
            error!("{}: {:?}", chunk.name, e);
            e
        })?;
        info!("{}: saved {} documents to {:?}", chunk.name, documents, path);
        Ok(())
    }
}
