use crate::domain::model::Item;
use crate::domain::ports::{CatalogSource, Comparator};
use crate::utils::error::Result;
use std::cmp::Ordering;

/// Stable in-place sort; items that compare equal keep their input order.
pub fn sort_items<C>(items: &mut [Item], comparator: &C)
where
    C: Comparator<Item> + ?Sized,
{
    items.sort_by(|a, b| comparator.compare(a, b));
}

pub fn is_sorted_by<C>(items: &[Item], comparator: &C) -> bool
where
    C: Comparator<Item> + ?Sized,
{
    items
        .windows(2)
        .all(|pair| comparator.compare(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Loads a catalog and sorts it once with the configured comparator.
pub struct SortEngine<S: CatalogSource, C: Comparator<Item>> {
    source: S,
    comparator: C,
}

impl<S: CatalogSource, C: Comparator<Item>> SortEngine<S, C> {
    pub fn new(source: S, comparator: C) -> Self {
        Self { source, comparator }
    }

    pub fn run(&self) -> Result<Vec<Item>> {
        tracing::info!("Loading items from {}", self.source.describe());
        let mut items = self.source.load()?;
        tracing::info!("Loaded {} items", items.len());

        sort_items(&mut items, &self.comparator);
        tracing::debug!(
            "Sorted order: {:?}",
            items.iter().map(|item| item.name.as_str()).collect::<Vec<_>>()
        );

        Ok(items)
    }
}
