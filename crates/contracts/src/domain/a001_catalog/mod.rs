pub mod aggregate;

pub use aggregate::{CatalogItem, CatalogSection, CatalogSections};
