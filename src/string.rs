//! String literals: quoted strings and bare words.
//!
//! A quoted string is delimited by a pair of `"` or `'` characters and may not
//! span lines. The quotes are stripped. A backslash escapes the next character:
//!
//! ```text
//! \"  - double quote
//! \'  - single quote
//! \\  - backslash
//! \n  - newline
//! \r  - carriage return
//! \t  - tab
//! ```
//!
//! Unknown escapes are kept as written. A bare word is a run of ASCII letters
//! and digits, so `hello world` unquoted is two words.

use crate::recognizer::{skip_whitespace, Match, Recognizer};
use crate::{Error, Result};

/// Recognizes a quoted string or, failing that, a bare alphanumeric word.
///
/// # Examples
///
/// ```rust
/// use glossy_atoms::{Recognizer, StringRecognizer};
///
/// let string = StringRecognizer::new();
/// assert_eq!(string.parse_all("\"hello world\"").unwrap(), "hello world");
/// assert_eq!(string.parse_all("'it\\'s'").unwrap(), "it's");
/// assert_eq!(string.parse_all("hello").unwrap(), "hello");
/// assert!(string.parse_all("hello world").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StringRecognizer {
    escapes: bool,
}

impl Default for StringRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl StringRecognizer {
    /// A string recognizer that translates escape sequences.
    #[must_use]
    pub const fn new() -> Self {
        StringRecognizer { escapes: true }
    }

    /// A string recognizer that returns quoted content verbatim.
    #[must_use]
    pub const fn verbatim() -> Self {
        StringRecognizer { escapes: false }
    }

    #[must_use]
    pub const fn with_escapes(escapes: bool) -> Self {
        StringRecognizer { escapes }
    }

    fn quoted(&self, input: &str, start: usize) -> Option<Match<String>> {
        let quote = match input.get(start..)?.chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => return None,
        };

        let mut result = String::new();
        let mut chars = input[start + 1..].char_indices();
        while let Some((i, ch)) = chars.next() {
            match ch {
                '\n' | '\r' => return None,
                '\\' => {
                    let (_, escaped) = chars.next()?;
                    match (self.escapes, escaped) {
                        (_, '\n' | '\r') => return None,
                        (true, 'n') => result.push('\n'),
                        (true, 'r') => result.push('\r'),
                        (true, 't') => result.push('\t'),
                        (true, '\\' | '"' | '\'') => result.push(escaped),
                        _ => {
                            result.push('\\');
                            result.push(escaped);
                        }
                    }
                }
                c if c == quote => {
                    return Some(Match::new(result, start + 1 + i + c.len_utf8()));
                }
                c => result.push(c),
            }
        }
        None
    }

    fn bare(&self, input: &str, start: usize) -> Option<Match<String>> {
        let rest = input.get(start..)?;
        let len = rest.bytes().take_while(u8::is_ascii_alphanumeric).count();
        (len > 0).then(|| Match::new(rest[..len].to_string(), start + len))
    }
}

impl Recognizer for StringRecognizer {
    type Output = String;

    fn name(&self) -> &str {
        "str"
    }

    fn recognize(&self, input: &str, pos: usize) -> Result<Match<String>> {
        let start = skip_whitespace(input, pos);
        self.quoted(input, start)
            .or_else(|| self.bare(input, start))
            .ok_or_else(|| Error::no_match(input, pos, self.name()))
    }
}
