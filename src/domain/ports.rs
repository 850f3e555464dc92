use crate::domain::model::Item;
use crate::utils::error::Result;
use std::cmp::Ordering;

/// An ordering that lives outside the compared type.
///
/// Implemented by named comparator types and, through the blanket impl, by any
/// closure or function of shape `Fn(&T, &T) -> Ordering`.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

pub trait CatalogSource {
    fn load(&self) -> Result<Vec<Item>>;

    /// Short label used in log lines.
    fn describe(&self) -> String;
}
