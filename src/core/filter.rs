// arpsleuth - core/filter.rs
//
// Line filter over ARP table output.
// Core layer: generic over BufRead, no terminal interaction, no paths.
//
// Matching is positional on purpose: a line matches iff its third
// whitespace-delimited token is exactly `INCOMPLETE`. Lines are kept
// byte-for-byte, including their original terminator, so the report
// reproduces the switch output faithfully.

use crate::util::constants::{HARDWARE_ADDR_FIELD, INCOMPLETE_MARKER};
use std::io::{self, BufRead};

/// Returns true iff the line's whitespace-delimited token sequence has at
/// least three tokens and the third equals `INCOMPLETE` exactly.
///
/// Case variants (`incomplete`, `Incomplete`) do not match. Lines with
/// fewer than three tokens never match and never error.
pub fn is_incomplete_entry(line: &str) -> bool {
    line.split_whitespace().nth(HARDWARE_ADDR_FIELD) == Some(INCOMPLETE_MARKER)
}

/// Collect the ordered subsequence of lines from `reader` that match
/// [`is_incomplete_entry`].
///
/// Lines are returned unmodified, trailing `\n` / `\r\n` included (a final
/// unterminated line is kept without a terminator). Order equals input
/// order; duplicates are preserved.
///
/// # Errors
/// Returns the underlying `io::Error` on any read failure, including
/// `InvalidData` for content that is not valid UTF-8. Partial results are
/// discarded; a read failure is fatal for the whole run.
pub fn collect_incomplete<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut matches = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if is_incomplete_entry(&line) {
            matches.push(line.clone());
        }
    }

    tracing::debug!(matches = matches.len(), "Filter pass complete");
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
Protocol  Address          Age (min)  Hardware Addr   Type   Interface
192.168.1.1            0    aabb.ccdd.eeff  ARPA   GigabitEthernet0/1
192.168.1.2            5    INCOMPLETE      ARPA   GigabitEthernet0/2
192.168.1.3           10    1122.3344.5566  ARPA   GigabitEthernet0/3
";

    #[test]
    fn test_marker_in_third_column_matches() {
        assert!(is_incomplete_entry(
            "192.168.1.2            5    INCOMPLETE      ARPA   GigabitEthernet0/2"
        ));
    }

    #[test]
    fn test_marker_elsewhere_does_not_match() {
        // Marker in column 4, not 3
        assert!(!is_incomplete_entry("a b c INCOMPLETE e"));
        // Marker in column 1
        assert!(!is_incomplete_entry("INCOMPLETE b c"));
    }

    #[test]
    fn test_case_sensitive_match() {
        assert!(!is_incomplete_entry("192.168.1.2 5 incomplete ARPA Gi0/2"));
        assert!(!is_incomplete_entry("192.168.1.2 5 Incomplete ARPA Gi0/2"));
        assert!(is_incomplete_entry("192.168.1.2 5 INCOMPLETE ARPA Gi0/2"));
    }

    #[test]
    fn test_short_lines_never_match() {
        assert!(!is_incomplete_entry(""));
        assert!(!is_incomplete_entry("192.168.1.1"));
        assert!(!is_incomplete_entry("Short line"));
    }

    #[test]
    fn test_exactly_three_tokens_matches() {
        assert!(is_incomplete_entry("192.168.1.2 5 INCOMPLETE"));
    }

    #[test]
    fn test_tabs_and_repeated_spaces_split_the_same() {
        assert!(is_incomplete_entry("192.168.1.2\t5\tINCOMPLETE\tARPA"));
        assert!(is_incomplete_entry("  192.168.1.2   5   INCOMPLETE  "));
    }

    #[test]
    fn test_collect_preserves_line_and_terminator() {
        let result = collect_incomplete(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(
            result[0],
            "192.168.1.2            5    INCOMPLETE      ARPA   GigabitEthernet0/2\n"
        );
    }

    #[test]
    fn test_collect_preserves_crlf_terminator() {
        let input = "a b INCOMPLETE\r\nc d eeff.0011.2233\r\n";
        let result = collect_incomplete(Cursor::new(input)).unwrap();
        assert_eq!(result, vec!["a b INCOMPLETE\r\n".to_string()]);
    }

    #[test]
    fn test_collect_final_line_without_terminator() {
        let input = "a b cc00.1122.3344\nx y INCOMPLETE";
        let result = collect_incomplete(Cursor::new(input)).unwrap();
        assert_eq!(result, vec!["x y INCOMPLETE".to_string()]);
    }

    #[test]
    fn test_collect_preserves_input_order_and_duplicates() {
        let input = "\
1 a mac1\n\
2 b INCOMPLETE\n\
3 c mac2\n\
4 d INCOMPLETE\n\
4 d INCOMPLETE\n";
        let result = collect_incomplete(Cursor::new(input)).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[0], "2 b INCOMPLETE\n");
        assert_eq!(result[1], "4 d INCOMPLETE\n");
        assert_eq!(result[2], "4 d INCOMPLETE\n");
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let result = collect_incomplete(Cursor::new("")).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_header_only_yields_empty_result() {
        let input = "Protocol  Address          Age (min)  Hardware Addr   Type   Interface\n";
        let result = collect_incomplete(Cursor::new(input)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let input: &[u8] = b"a b INCOMPLETE\n\xff\xfe broken\n";
        let err = collect_incomplete(Cursor::new(input)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_idempotent_over_same_input() {
        let first = collect_incomplete(Cursor::new(SAMPLE)).unwrap();
        let second = collect_incomplete(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(first, second);
    }
}
