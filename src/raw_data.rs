//! Raw data blocks.
//!
//! A raw data block starts with `$` immediately followed by a name and runs up
//! to the first `$end` (case-insensitive). The body is handed back untouched,
//! including its leading and trailing line breaks, so that downstream code can
//! read formats this grammar knows nothing about (molecular geometries, basis
//! set listings, ...).
//!
//! ```text
//! $coords
//! O  0.000  0.000  0.000
//! H  0.000  0.757  0.587
//! $end
//! ```

use crate::recognizer::{skip_whitespace, Match, Recognizer};
use crate::{Error, RawData, Result};
use tracing::trace;

const END_SENTINEL: &str = "$end";

/// Recognizes a `$name ... $end` block.
///
/// # Examples
///
/// ```rust
/// use glossy_atoms::{RawData, RawDataRecognizer, Recognizer};
///
/// let block = RawDataRecognizer.parse_all("$mydata\nline1\nline2\n$END").unwrap();
/// assert_eq!(block, RawData::new("mydata", "\nline1\nline2\n"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawDataRecognizer;

impl RawDataRecognizer {
    /// End offset of the identifier starting at `start`, if there is one.
    fn identifier(input: &str, start: usize) -> Option<usize> {
        let bytes = input.as_bytes();
        match bytes.get(start) {
            Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
            _ => return None,
        }
        let len = bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
            .count();
        Some(start + len)
    }

    /// Offset of the first case-insensitive `$end` at or after `from`.
    fn find_end(input: &str, from: usize) -> Option<usize> {
        input.as_bytes()[from..]
            .windows(END_SENTINEL.len())
            .position(|w| w.eq_ignore_ascii_case(END_SENTINEL.as_bytes()))
            .map(|i| from + i)
    }
}

impl Recognizer for RawDataRecognizer {
    type Output = RawData;

    fn name(&self) -> &str {
        "raw data"
    }

    fn recognize(&self, input: &str, pos: usize) -> Result<Match<RawData>> {
        let start = skip_whitespace(input, pos);
        if input.as_bytes().get(start) != Some(&b'$') {
            return Err(Error::no_match(input, pos, self.name()));
        }
        let name_end = Self::identifier(input, start + 1)
            .ok_or_else(|| Error::no_match(input, pos, self.name()))?;
        let name = &input[start + 1..name_end];

        let body_end = Self::find_end(input, name_end)
            .ok_or_else(|| Error::unterminated_block(input, start, name))?;
        trace!(name, len = body_end - name_end, "raw data block");

        Ok(Match::new(
            RawData::new(name, &input[name_end..body_end]),
            body_end + END_SENTINEL.len(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_is_exact() {
        let block = RawDataRecognizer
            .parse_all("$mydata\nline1\nline2\n$end")
            .unwrap();
        assert_eq!(block.name, "mydata");
        assert_eq!(block.body, "\nline1\nline2\n");
    }

    #[test]
    fn test_sentinel_is_case_insensitive() {
        for sentinel in ["$end", "$END", "$End"] {
            let input = format!("$x 1 2 3 {}", sentinel);
            assert_eq!(
                RawDataRecognizer.parse_all(&input).unwrap(),
                RawData::new("x", " 1 2 3 ")
            );
        }
    }

    #[test]
    fn test_stops_at_first_sentinel() {
        let m = RawDataRecognizer.recognize("$a\n1\n$end\n$b\n2\n$end", 0).unwrap();
        assert_eq!(m.value, RawData::new("a", "\n1\n"));
        assert_eq!(m.end, 9);
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(
            RawDataRecognizer.parse_all("$empty$end").unwrap(),
            RawData::new("empty", "")
        );
    }

    #[test]
    fn test_identifier_rules() {
        assert_eq!(
            RawDataRecognizer.parse_all("$_basis_2 sto-3g $end").unwrap().name,
            "_basis_2"
        );
        assert!(matches!(
            RawDataRecognizer.recognize("$2x $end", 0),
            Err(Error::NoMatch { .. })
        ));
        assert!(matches!(
            RawDataRecognizer.recognize("$ x $end", 0),
            Err(Error::NoMatch { .. })
        ));
    }

    #[test]
    fn test_missing_opening_is_no_match() {
        assert!(matches!(
            RawDataRecognizer.recognize("mydata $end", 0),
            Err(Error::NoMatch { .. })
        ));
    }

    #[test]
    fn test_missing_sentinel_is_unterminated() {
        match RawDataRecognizer.recognize("\n  $mydata\nline1\n", 0) {
            Err(Error::UnterminatedBlock {
                name, offset, line, ..
            }) => {
                assert_eq!(name, "mydata");
                assert_eq!(offset, 3);
                assert_eq!(line, 2);
            }
            other => panic!("Expected UnterminatedBlock, got {:?}", other),
        }
    }

    #[test]
    fn test_non_ascii_body() {
        let block = RawDataRecognizer.parse_all("$note\nÅngström\n$end").unwrap();
        assert_eq!(block.body, "\nÅngström\n");
    }
}
