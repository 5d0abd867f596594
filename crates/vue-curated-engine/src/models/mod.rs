pub mod catalog;

pub use catalog::{Catalog, Category, Link, Module, Release};
