pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::catalog::{BuiltinCatalog, TomlCatalog};
pub use crate::core::{
    ordering::{by_name, compare_names, NameComparator},
    render::{render, OutputFormat},
    sort::{is_sorted_by, sort_items, SortEngine},
};
pub use domain::model::Item;
pub use domain::ports::{CatalogSource, Comparator};
pub use utils::error::{Result, SortError};
