use crate::constants::{MAX_PARTS_IN_NAME, MIN_PARTS_IN_NAME};
use crate::error::AppError;

/// Validates that every name in the list has between 2 and 4 parts.
///
/// A valid name carries at least one and at most three given names along with
/// the last name. Validation is eager and all-or-nothing: the first offending
/// entry aborts the whole batch and no partial result is produced.
///
/// # Errors
/// * `AppError::TooFewNameParts` - a name has fewer than 2 parts
/// * `AppError::TooManyNameParts` - a name has more than 4 parts
pub fn validate_names(names: &[String]) -> Result<(), AppError> {
    for name in names {
        let parts = count_parts(name);
        if parts < MIN_PARTS_IN_NAME {
            return Err(AppError::TooFewNameParts);
        }
        if parts > MAX_PARTS_IN_NAME {
            return Err(AppError::TooManyNameParts);
        }
    }
    Ok(())
}

/// Counts the whitespace-separated parts of a raw name line.
///
/// Runs of whitespace count as a single separator and edge whitespace does
/// not create phantom parts, so irregular spacing cannot inflate the count.
pub fn count_parts(name: &str) -> usize {
    name.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_count_parts() {
        assert_eq!(count_parts("Smith"), 1);
        assert_eq!(count_parts("Jane Doe"), 2);
        assert_eq!(count_parts("Hunter Uriah Mathew Clarke"), 4);
        assert_eq!(count_parts("  John   Smith  "), 2);
        assert_eq!(count_parts(""), 0);
    }

    #[test]
    fn test_two_to_four_parts_pass() {
        let names = to_strings(&[
            "Jane Doe",
            "Mary Ann Lee",
            "Hunter Uriah Mathew Clarke",
        ]);
        assert!(validate_names(&names).is_ok());
    }

    #[test]
    fn test_last_name_only_is_rejected() {
        let err = validate_names(&to_strings(&["Smith"])).unwrap_err();
        assert!(matches!(err, AppError::TooFewNameParts));
        assert_eq!(
            err.to_string(),
            "A Name must contain at least one given name along with the last name"
        );
    }

    #[test]
    fn test_five_parts_are_rejected() {
        let err = validate_names(&to_strings(&["One Two Three Four Five"])).unwrap_err();
        assert!(matches!(err, AppError::TooManyNameParts));
        assert_eq!(
            err.to_string(),
            "A Name can only contain a maximum of 3 given names along with the last name"
        );
    }

    #[test]
    fn test_empty_line_is_rejected() {
        let err = validate_names(&to_strings(&["Jane Doe", ""])).unwrap_err();
        assert!(matches!(err, AppError::TooFewNameParts));
    }

    #[test]
    fn test_first_offender_aborts_the_batch() {
        // The single-token line is hit before the five-token line.
        let err = validate_names(&to_strings(&[
            "Jane Doe",
            "Smith",
            "One Two Three Four Five",
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::TooFewNameParts));
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate_names(&[]).is_ok());
    }
}
