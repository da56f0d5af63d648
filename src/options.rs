//! Configuration options for building a [`Grammar`](crate::Grammar).
//!
//! - [`GrammarOptions`]: boolean vocabularies and quoted-string escape handling
//!
//! ## Examples
//!
//! ```rust
//! use glossy_atoms::{Grammar, GrammarOptions, Recognizer, Value};
//!
//! // Replace both default vocabularies
//! let options = GrammarOptions::new()
//!     .with_truthy(["ENABLED"])
//!     .with_falsey(["DISABLED"]);
//! let grammar = Grammar::new(options).unwrap();
//! assert_eq!(grammar.parse_all("Enabled").unwrap(), Value::Bool(true));
//! ```

use crate::boolean::{FALSEY, TRUTHY};

/// Configuration options for the literal grammar.
///
/// The vocabularies are validated when the grammar is built; overlapping
/// vocabularies make [`Grammar::new`](crate::Grammar::new) fail.
///
/// # Examples
///
/// ```rust
/// use glossy_atoms::GrammarOptions;
///
/// let options = GrammarOptions::new();
/// assert_eq!(options.truthy, vec!["TRUE", "ON", "YES", "Y"]);
/// assert!(options.escapes);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GrammarOptions {
    pub truthy: Vec<String>,
    pub falsey: Vec<String>,
    pub escapes: bool,
}

impl Default for GrammarOptions {
    fn default() -> Self {
        GrammarOptions {
            truthy: TRUTHY.iter().map(|s| s.to_string()).collect(),
            falsey: FALSEY.iter().map(|s| s.to_string()).collect(),
            escapes: true,
        }
    }
}

impl GrammarOptions {
    /// Creates default options: the standard boolean vocabularies and escape
    /// processing in quoted strings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the truthy vocabulary.
    #[must_use]
    pub fn with_truthy<I, S>(mut self, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.truthy = literals.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the falsey vocabulary.
    #[must_use]
    pub fn with_falsey<I, S>(mut self, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.falsey = literals.into_iter().map(Into::into).collect();
        self
    }

    /// Enables or disables backslash escape translation in quoted strings.
    ///
    /// With escapes disabled the quoted content is returned verbatim; a
    /// backslash still keeps the following quote from closing the string.
    #[must_use]
    pub fn with_escapes(mut self, escapes: bool) -> Self {
        self.escapes = escapes;
        self
    }
}
