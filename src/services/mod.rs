// Service exports
pub mod cache;
pub mod catalog;

pub use cache::{CacheError, CacheKey, CacheManager, CacheStats};
pub use catalog::{CatalogSnapshot, CatalogStore};
