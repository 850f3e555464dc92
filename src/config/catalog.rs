use crate::domain::model::Item;
use crate::utils::error::{Result, SortError};
use crate::utils::validation::{validate_finite, validate_non_empty_string, validate_range, Validate};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

/// Contents of a TOML catalog file.
///
/// ```toml
/// name = "electronics"
///
/// [[items]]
/// name = "TV"
/// price = 1200.0
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    pub name: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl CatalogFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SortError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses the catalog, then expands `${VAR}` placeholders inside string values.
    ///
    /// Expansion happens after parsing, so a variable's value is always taken
    /// literally and can never add items or change the file's structure. Numeric
    /// fields such as `price` cannot be templated.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut catalog: Self =
            toml::from_str(content).map_err(|e| SortError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        if let Some(name) = catalog.name.as_mut() {
            *name = substitute_env_vars(name);
        }
        for item in &mut catalog.items {
            item.name = substitute_env_vars(&item.name);
        }

        Ok(catalog)
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed catalog")
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

/// Replaces `${VAR}` with the variable's value; unset variables stay as written.
fn substitute_env_vars(value: &str) -> String {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
    });

    re.replace_all(value, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

impl Validate for CatalogFile {
    fn validate(&self) -> Result<()> {
        for (index, item) in self.items.iter().enumerate() {
            validate_non_empty_string(&format!("items[{}].name", index), &item.name)?;

            let price_field = format!("items[{}].price", index);
            validate_finite(&price_field, item.price)?;
            validate_range(&price_field, item.price, 0.0, f64::MAX)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let catalog = CatalogFile::from_toml_str(
            r#"
name = "electronics"

[[items]]
name = "TV"
price = 1200.0

[[items]]
name = "Tablet"
price = 400
"#,
        )
        .unwrap();

        assert_eq!(catalog.label(), "electronics");
        assert_eq!(
            catalog.items,
            vec![Item::new("TV", 1200.0), Item::new("Tablet", 400.0)]
        );
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_catalog_without_items_is_valid() {
        let catalog = CatalogFile::from_toml_str("").unwrap();
        assert!(catalog.items.is_empty());
        assert_eq!(catalog.label(), "unnamed catalog");
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PRODUCT_SORT_TEST_ITEM_NAME", "Headphones");
        let catalog = CatalogFile::from_toml_str(
            r#"
[[items]]
name = "${PRODUCT_SORT_TEST_ITEM_NAME}"
price = 150.0

[[items]]
name = "${PRODUCT_SORT_TEST_UNSET_VARIABLE}"
price = 1.0
"#,
        )
        .unwrap();

        assert_eq!(catalog.items[0].name, "Headphones");
        assert_eq!(catalog.items[1].name, "${PRODUCT_SORT_TEST_UNSET_VARIABLE}");
    }

    #[test]
    fn test_env_var_value_is_taken_literally() {
        std::env::set_var(
            "PRODUCT_SORT_TEST_TRICKY_NAME",
            "Mouse\"\n\n[[items]]\nname = \"Injected\"\nprice = 1.0\n",
        );
        let catalog = CatalogFile::from_toml_str(
            r#"
name = "${PRODUCT_SORT_TEST_TRICKY_NAME}"

[[items]]
name = "${PRODUCT_SORT_TEST_TRICKY_NAME}"
price = 25.0
"#,
        )
        .unwrap();

        assert_eq!(catalog.items.len(), 1);
        assert!(catalog.items[0].name.starts_with("Mouse\""));
        assert!(catalog.items[0].name.contains("Injected"));
        assert_eq!(catalog.items[0].price, 25.0);
        assert!(catalog.label().starts_with("Mouse"));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = CatalogFile::from_toml_str("[[items]]\nname = ").unwrap_err();
        assert!(matches!(err, SortError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_validation_rejects_bad_items() {
        let negative = CatalogFile {
            name: None,
            items: vec![Item::new("TV", -1.0)],
        };
        let err = negative.validate().unwrap_err();
        assert!(
            matches!(err, SortError::InvalidConfigValueError { ref field, .. } if field == "items[0].price")
        );

        let blank = CatalogFile {
            name: None,
            items: vec![Item::new("TV", 1.0), Item::new("  ", 2.0)],
        };
        let err = blank.validate().unwrap_err();
        assert!(
            matches!(err, SortError::InvalidConfigValueError { ref field, .. } if field == "items[1].name")
        );

        let not_a_number = CatalogFile {
            name: None,
            items: vec![Item::new("TV", f64::NAN)],
        };
        assert!(not_a_number.validate().is_err());
    }
}
