use std::cmp::Ordering;

use crate::sorting::comparator::compare_by_last_name_then_given_names;

/// Sorts lists of names with an injected comparison strategy.
///
/// The sorter never mutates the caller's list; `sort` copies the input and
/// returns a new, ordered list. The underlying sort is stable, so entries
/// whose keys compare equal keep their relative input order.
///
/// There is exactly one comparison strategy in this crate, reachable through
/// [`NameSorter::by_last_name_then_given_names`], but the comparator stays an
/// injected function so alternative orderings remain possible.
pub struct NameSorter<F = fn(&str, &str) -> Ordering>
where
    F: Fn(&str, &str) -> Ordering,
{
    comparator: F,
}

impl NameSorter {
    /// A sorter ordering by last name, tie-broken by given names,
    /// case-insensitively.
    pub fn by_last_name_then_given_names() -> Self {
        NameSorter {
            comparator: compare_by_last_name_then_given_names,
        }
    }
}

impl<F> NameSorter<F>
where
    F: Fn(&str, &str) -> Ordering,
{
    /// Creates a sorter using a custom comparator.
    pub fn new(comparator: F) -> Self {
        NameSorter { comparator }
    }

    /// Returns a new list containing the same names in sorted order.
    ///
    /// The input slice is left untouched. An empty input produces an empty
    /// output; there are no failure modes.
    pub fn sort(&self, names: &[String]) -> Vec<String> {
        let mut sorted = names.to_vec();
        sorted.sort_by(|a, b| (self.comparator)(a, b));
        sorted
    }
}
