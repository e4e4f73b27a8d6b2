/*!
# IO utilities

Raw chunk loading, partial result storage and final output writing.
!*/
mod reader;
mod store;
mod writer;

pub use reader::{chunk_id, list_chunks, read_chunk, ChunkFile};
pub use store::PartialStore;
pub use writer::OutputWriter;
