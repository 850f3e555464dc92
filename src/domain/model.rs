use serde::{Deserialize, Serialize};
use std::fmt;

/// A sortable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {:.2}", self.name, self.price)
    }
}

/// The four products every run starts from when no catalog file is given.
pub fn builtin_items() -> Vec<Item> {
    vec![
        Item::new("TV", 1200.0),
        Item::new("Smartphone", 1000.0),
        Item::new("Notebook", 1500.0),
        Item::new("Tablet", 400.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_two_decimals() {
        assert_eq!(Item::new("TV", 1200.0).to_string(), "TV, 1200.00");
        assert_eq!(Item::new("Cable", 9.5).to_string(), "Cable, 9.50");
    }

    #[test]
    fn test_builtin_items_keep_literal_order() {
        let names: Vec<String> = builtin_items().into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["TV", "Smartphone", "Notebook", "Tablet"]);
    }
}
