// Service exports
pub mod catalog;

pub use catalog::{CatalogBatch, CatalogError, CatalogSource};
