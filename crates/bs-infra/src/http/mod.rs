//! reqwest-backed adapters for the catalog and summarizer ports.

mod client;

pub use client::HttpBookService;
