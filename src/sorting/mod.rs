//! Name parsing, comparison and sorting.
//!
//! The ordering rule: compare by last name first (case-insensitive), then by
//! the sequence of given names (also case-insensitive). The last name is the
//! final whitespace-delimited token of a full name; everything before it
//! counts as given names.

pub mod comparator;
pub mod parser;
pub mod sorter;

pub use comparator::compare_by_last_name_then_given_names;
pub use parser::{ParsedName, parse_full_name};
pub use sorter::NameSorter;
