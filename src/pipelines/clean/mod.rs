mod pipeline;
mod worker;

pub use pipeline::Clean;
pub use worker::Worker;
