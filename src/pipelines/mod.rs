//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation,
//! and the [Clean] pipeline that builds the training set.
pub mod clean;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use clean::Clean;
pub use pipeline::Pipeline;
