/// A full name split into its two sort keys.
///
/// Constructed transiently during each comparison; never cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// The one-to-three name tokens preceding the last name, joined as a
    /// single trimmed string. Empty only for names without any whitespace.
    pub given_names: String,
    /// The final whitespace-delimited token of the full name.
    pub last_name: String,
}

/// Splits a full-name string into given names and last name.
///
/// Everything before the *last* run of whitespace becomes `given_names` and
/// the final token becomes `last_name`; both are trimmed. The rule is
/// deliberately insensitive to how many given names precede the last name and
/// to irregular internal spacing. A string without any whitespace falls back
/// to an empty `given_names` with the entire string as `last_name`.
///
/// This cannot handle multi-word last names ("van der Berg" parses as given
/// names "van der", last name "Berg"). Known limitation of the
/// rightmost-split rule, not a bug.
///
/// Never fails; malformed input is simply parsed with the fallback.
pub fn parse_full_name(full_name: &str) -> ParsedName {
    let trimmed = full_name.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(split_at) => ParsedName {
            given_names: trimmed[..split_at].trim().to_string(),
            last_name: trimmed[split_at..].trim_start().to_string(),
        },
        None => ParsedName {
            given_names: String::new(),
            last_name: full_name.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_part_name() {
        let parsed = parse_full_name("John Smith");
        assert_eq!(parsed.given_names, "John");
        assert_eq!(parsed.last_name, "Smith");
    }

    #[test]
    fn test_multiple_given_names() {
        let parsed = parse_full_name("Hunter Uriah Mathew Clarke");
        assert_eq!(parsed.given_names, "Hunter Uriah Mathew");
        assert_eq!(parsed.last_name, "Clarke");
    }

    #[test]
    fn test_irregular_internal_spacing() {
        let parsed = parse_full_name("John   Smith");
        assert_eq!(parsed.given_names, "John");
        assert_eq!(parsed.last_name, "Smith");

        let parsed = parse_full_name("Mary  Ann   Lee");
        assert_eq!(parsed.given_names, "Mary  Ann");
        assert_eq!(parsed.last_name, "Lee");
    }

    #[test]
    fn test_leading_and_trailing_whitespace() {
        let parsed = parse_full_name("  Jane Doe  ");
        assert_eq!(parsed.given_names, "Jane");
        assert_eq!(parsed.last_name, "Doe");
    }

    #[test]
    fn test_single_token_fallback() {
        let parsed = parse_full_name("Smith");
        assert_eq!(parsed.given_names, "");
        assert_eq!(parsed.last_name, "Smith");
    }

    #[test]
    fn test_empty_string_fallback() {
        let parsed = parse_full_name("");
        assert_eq!(parsed.given_names, "");
        assert_eq!(parsed.last_name, "");
    }

    #[test]
    fn test_multi_word_last_name_limitation() {
        // Documented limitation: the rightmost split cannot recognize
        // particles, so the last token alone becomes the last name.
        let parsed = parse_full_name("Anna van der Berg");
        assert_eq!(parsed.given_names, "Anna van der");
        assert_eq!(parsed.last_name, "Berg");
    }

    #[test]
    fn test_reconstruction_recovers_token_sequence() {
        for name in ["Jane Doe", "Mary Ann Lee", "Hunter Uriah Mathew Clarke"] {
            let parsed = parse_full_name(name);
            let rebuilt = format!("{} {}", parsed.given_names, parsed.last_name);
            let rebuilt_tokens: Vec<&str> = rebuilt.split_whitespace().collect();
            let original_tokens: Vec<&str> = name.split_whitespace().collect();
            assert_eq!(rebuilt_tokens, original_tokens);
        }
    }
}
