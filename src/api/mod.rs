pub mod client;
pub mod reports;

pub use client::*;
