// file: src/fingerprint/path_key.rs
// description: digit-sequence secondary key derived from a file path
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DIGIT_RUNS: Regex = Regex::new(r"\d+").expect("DIGIT_RUNS regex is valid");
}

/// Concatenates every digit found in the path, in order, dropping everything
/// else. Used as a proxy for the source identifier embedded in scan paths, so
/// re-encounters of the same file can be told apart from independently sourced
/// copies of identical content. Paths without digits all map to the empty
/// string and collide on one key.
pub fn path_key(path: &str) -> String {
    DIGIT_RUNS
        .find_iter(path)
        .map(|m| m.as_str())
        .collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_digits_in_order() {
        assert_eq!(path_key("reports/2023/doc14_v2.html"), "2023142");
    }

    #[test]
    fn test_single_run() {
        assert_eq!(path_key("doc1.html"), "1");
        assert_eq!(path_key("doc2.html"), "2");
    }

    #[test]
    fn test_digit_after_suffix_is_kept() {
        // "doc1copy" and "doc1" share the key "1"; renaming a file without
        // touching its digits does not make it look independently sourced.
        assert_eq!(path_key("doc1copy.html"), "1");
        assert_eq!(path_key("doc1.html"), path_key("doc1copy.html"));
    }

    #[test]
    fn test_no_digits_collide_on_empty_key() {
        // Known heuristic boundary: digit-free paths are indistinguishable.
        assert_eq!(path_key("report.html"), "");
        assert_eq!(path_key("summary.html"), "");
    }
}
