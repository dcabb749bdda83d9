//! Shared data models used by both the server and the wasm frontend

pub mod call;
pub mod report;

pub use call::*;
pub use report::*;
