pub mod ordering;
pub mod render;
pub mod sort;

pub use crate::domain::model::Item;
pub use crate::domain::ports::{CatalogSource, Comparator};
pub use crate::utils::error::Result;
