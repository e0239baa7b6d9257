pub mod categories;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod sources;
pub mod tree;
pub mod types;
pub mod urls;

// Re-export the types most consumers need
pub use error::{CatalogError, Result};
pub use pipeline::category_tree;
pub use sources::{CategorySource, HttpCategorySource, RawResponse, StaticCategorySource};
pub use types::{DisplayNode, RawCategory};
