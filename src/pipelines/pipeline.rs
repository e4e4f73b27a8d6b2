//! Pipeline trait.
use crate::error::Error;

/// A runnable pipeline, generic over what a run returns
/// ([Clean](super::Clean) returns its run summary).
pub trait Pipeline<T> {
    fn version() -> &'static str;
    fn run(&self) -> Result<T, Error>;
}
