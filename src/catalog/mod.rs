//! Static movie catalog
//!
//! The catalog is loaded once at process start and treated as immutable for
//! the process lifetime. Search is the only read path: title substring
//! matching over eligible records (non-empty cast) with 1-based pagination.

pub mod movie;
pub mod store;

// Re-export main types
pub use movie::MovieRecord;
pub use store::{Catalog, CatalogError, CatalogResult};
