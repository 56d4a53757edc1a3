//! Shared test helpers: temp file-tree fixtures and a recording HTTP stub
//! server for exercising the API client without a live network.

mod fs;
mod http;

pub use fs::file_tree;
pub use http::{Request, Response, TestHttpServer};
