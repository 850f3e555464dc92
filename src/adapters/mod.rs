// Adapters layer: concrete catalog sources behind the CatalogSource port.

pub mod catalog;
