pub mod http;

pub use http::HttpBookService;
