/*! Harvested metadata records.

A chunk file is a JSON object holding a `documents` array.
Each [Document] carries its subjects and an open set of textual fields
(`titles`, `descriptions`, ...) made of [Instance]s.

Harvested records are messy: a field of the wrong type is read as absent
instead of failing the whole chunk.
!*/
mod document;
mod subject;

pub use document::{Chunk, Document, Identifier, Instance};
pub use subject::Subject;

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde_json::Value;

/// Deserialize a field, [None] if it does not have the expected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}
