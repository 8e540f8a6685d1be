/// Splits the free text of the Add Artifact form into GAVs.
///
/// Entries are separated by newlines or commas. Surrounding whitespace is
/// dropped and blank entries are skipped, so trailing separators are harmless.
pub fn parse_gav_list(input: &str) -> Vec<String> {
    input
        .trim()
        .split(['\n', ','])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated() {
        assert_eq!(
            parse_gav_list("com.foo:bar:1.0, com.foo:baz:2.0"),
            vec!["com.foo:bar:1.0", "com.foo:baz:2.0"]
        );
    }

    #[test]
    fn test_mixed_separators_and_blank_entries() {
        assert_eq!(
            parse_gav_list("\n a:b:1\r\n,, c:d:2 ,\n\n"),
            vec!["a:b:1", "c:d:2"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_gav_list("   \n ").is_empty());
    }
}
