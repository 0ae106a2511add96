//! Port interfaces for the application layer
//!
//! Ports define the contract between the controllers (use cases) and the
//! adapters that talk to the remote catalog and summarization services.
//! Controllers depend only on these traits, so tests can drive them with
//! fakes and the HTTP transport can be swapped without touching them.

pub mod catalog;
pub mod summarizer;

pub use catalog::CatalogPort;
pub use summarizer::SummarizerPort;
