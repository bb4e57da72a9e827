//! API endpoint implementations.

mod info;
mod streams;

pub use info::InfoApi;
pub use streams::StreamsApi;
