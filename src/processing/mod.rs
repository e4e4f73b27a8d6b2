/*! Result processing

Contains structures and functions to record and aggregate the per-document outcomes of a cleaning run:
- [Row] is the outcome of one document,
- [ChunkResult] holds the rows and [Stats] of one chunk file,
- [Aggregate] merges chunk results and deduplicates payloads per label.
!*/
mod aggregate;
mod hash;
mod row;
mod stats;

pub use aggregate::{Aggregate, ChunkResult, LabelSummary, Summary};
pub use hash::{content_hash, sha256_hex};
pub use row::Row;
pub use stats::{FanOut, Stats};
