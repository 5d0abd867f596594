pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use models::{Catalog, Category, Link, Module, Release};
pub use parsing::{ParseError, parse_catalog};
