//! Catalog listing: pages, pagination math and query state.

pub mod model;
pub mod pagination;
pub mod query;

pub use model::CatalogPage;
pub use pagination::{has_pagination, total_pages, PAGE_SIZE};
pub use query::QueryState;
