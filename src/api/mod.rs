pub mod client;

pub use client::{ApiError, HttpSearchClient, SearchApi};
