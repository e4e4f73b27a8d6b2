/*! Language identification

Holds an [Identify] trait for implementing other ones.

Two identifiers are available: [fasttext](https://fasttext.cc) ([FastText])
and the language declared by the metadata itself ([Declared]).
!*/
mod declared;
mod identification;
mod model;

pub use declared::Declared;
pub use identification::Identification;
pub use model::{FastText, FastTextBuilder};

use crate::error::Error;
use crate::metadata::Instance;

/// All identifiers should implement [Identify] to be useable in the payload extractor.
pub trait Identify: Send + Sync {
    /// Identify the language of an instance. [None] means no language could be found.
    fn identify(&self, instance: &Instance) -> Result<Option<Identification>, Error>;
}
