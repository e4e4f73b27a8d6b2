/*! Subject cleaning of research metadata.

Resolves the heterogeneous subject annotations of DataCite-like metadata records
into the 22 ANZSRC top-level disciplines, and builds a deduplicated, single-label
training set from the records that resolve to exactly one discipline.

- [schemes] detects the classification scheme of a subject and maps it to a [labels::Label],
- [resolver] combines the subjects of a record into a [resolver::Resolution],
- [filtering] extracts and filters the textual payload of a record,
- [processing] deduplicates and aggregates per-record results,
- [pipelines] runs the whole thing over a directory of chunk files.
!*/
pub mod config;
pub mod error;
pub mod filtering;
pub mod identifiers;
pub mod inspect;
pub mod io;
pub mod labels;
pub mod metadata;
pub mod pipelines;
pub mod processing;
pub mod resolver;
pub mod schemes;
