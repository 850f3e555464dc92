use crate::config::catalog::CatalogFile;
use crate::domain::model::{builtin_items, Item};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> Result<Vec<Item>> {
        Ok(builtin_items())
    }

    fn describe(&self) -> String {
        "built-in product list".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct TomlCatalog {
    path: PathBuf,
}

impl TomlCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for TomlCatalog {
    fn load(&self) -> Result<Vec<Item>> {
        let catalog = CatalogFile::from_file(&self.path)?;
        catalog.validate()?;
        tracing::debug!(
            "Catalog '{}' has {} items",
            catalog.label(),
            catalog.items.len()
        );
        Ok(catalog.into_items())
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}
