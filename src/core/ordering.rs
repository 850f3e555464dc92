use crate::domain::model::Item;
use crate::domain::ports::Comparator;
use std::cmp::Ordering;

/// Compares two names as if both were uppercased first.
///
/// Uses the full Unicode uppercase mapping, so `"straße"` and `"STRASSE"` are equal.
/// The uppercased names are compared as UTF-16 code units, which puts characters
/// above U+FFFF (surrogate pairs) before U+E000..U+FFFF. Nothing is allocated.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    upper_utf16(a).cmp(upper_utf16(b))
}

fn upper_utf16(name: &str) -> impl Iterator<Item = u16> + '_ {
    name.chars().flat_map(char::to_uppercase).flat_map(|c| {
        let mut buf = [0u16; 2];
        let len = c.encode_utf16(&mut buf).len();
        buf.into_iter().take(len)
    })
}

pub fn by_name(a: &Item, b: &Item) -> Ordering {
    compare_names(&a.name, &b.name)
}

/// Case-insensitive ordering by item name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameComparator;

impl Comparator<Item> for NameComparator {
    fn compare(&self, a: &Item, b: &Item) -> Ordering {
        by_name(a, b)
    }
}
