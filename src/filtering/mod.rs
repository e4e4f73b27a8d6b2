/*! Filtering utilities

Filters implement [Filter]: they are pure and stateless, and detect whether an item is kept.
[WordCount] is the text length filter used on payload fields.

[PayloadExtractor] builds the text payload of a document out of its configured fields.
! */
mod filter;
mod payload;
mod words;

pub use filter::Filter;
pub use payload::{word_count, FieldSpec, Payload, PayloadExtractor};
pub use words::WordCount;
