use std::cmp::Ordering;

use crate::sorting::parser::parse_full_name;

/// Orders two full-name strings by last name, then by given names.
///
/// Both comparisons are case-insensitive. The comparator performs no
/// validation and never fails: single-token strings compare through the
/// parser fallback (empty given names, whole string as last name).
///
/// # Examples
///
/// ```
/// use namesort::sorting::compare_by_last_name_then_given_names;
///
/// let mut names = vec!["John Smith", "Adam Smith", "Jane Doe"];
/// names.sort_by(|a, b| compare_by_last_name_then_given_names(a, b));
/// assert_eq!(names, vec!["Jane Doe", "Adam Smith", "John Smith"]);
/// ```
pub fn compare_by_last_name_then_given_names(a: &str, b: &str) -> Ordering {
    let name_a = parse_full_name(a);
    let name_b = parse_full_name(b);

    match compare_ignore_case(&name_a.last_name, &name_b.last_name) {
        Ordering::Equal => compare_ignore_case(&name_a.given_names, &name_b.given_names),
        ordering => ordering,
    }
}

/// Case-insensitive ordinal comparison using a simple per-codepoint fold.
///
/// Only letter case is folded; diacritics and non-letter characters compare
/// as-is. Deliberately not locale-aware collation.
fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_different_last_names() {
        assert_eq!(
            compare_by_last_name_then_given_names("Jane Doe", "John Smith"),
            Ordering::Less
        );
        assert_eq!(
            compare_by_last_name_then_given_names("John Smith", "Jane Doe"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_same_last_name_falls_back_to_given_names() {
        assert_eq!(
            compare_by_last_name_then_given_names("Adam Smith", "John Smith"),
            Ordering::Less
        );
    }

    #[test]
    fn test_case_insensitive_equality() {
        assert_eq!(
            compare_by_last_name_then_given_names("MARY lee", "mary LEE"),
            Ordering::Equal
        );
        assert_eq!(
            compare_by_last_name_then_given_names("John Smith", "john smith"),
            Ordering::Equal
        );
    }

    #[test]
    fn test_shorter_given_names_sort_first() {
        // "Mary" < "Mary Ann" lexicographically.
        assert_eq!(
            compare_by_last_name_then_given_names("Mary Lee", "Mary Ann Lee"),
            Ordering::Less
        );
    }

    #[test]
    fn test_single_token_input_does_not_panic() {
        // No validation here; the parser fallback kicks in.
        assert_eq!(
            compare_by_last_name_then_given_names("Smith", "Smith"),
            Ordering::Equal
        );
        assert_eq!(
            compare_by_last_name_then_given_names("Doe", "Smith"),
            Ordering::Less
        );
    }

    #[test]
    fn test_diacritics_are_not_folded() {
        // Simple case fold only: 'ä' != 'a', so these are distinct keys.
        assert_ne!(
            compare_by_last_name_then_given_names("Jane Häkkinen", "Jane Hakkinen"),
            Ordering::Equal
        );
    }

    #[test]
    fn test_irregular_spacing_does_not_affect_last_name_key() {
        assert_eq!(
            compare_by_last_name_then_given_names("Mary Ann Lee", "John   Smith"),
            Ordering::Less
        );
    }
}
