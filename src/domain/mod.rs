pub mod catalog;
pub mod listing;
pub mod mappings;
pub mod pricing;

pub use catalog::{Catalog, Facets};
pub use listing::NormalizedListing;
