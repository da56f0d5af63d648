//! Boolean literals.
//!
//! A boolean is one of a closed, case-insensitive vocabulary:
//!
//! | Value | Literals |
//! |-------|----------|
//! | `true` | `TRUE`, `ON`, `YES`, `Y` |
//! | `false` | `FALSE`, `OFF`, `NO`, `N` |
//!
//! A literal matches only as a whole word, so `yesterday` is not a boolean.
//! When several literals match (`Y` and `YES` on `yes`), the longest wins.

use crate::recognizer::{at_word_boundary, skip_whitespace, Match, Recognizer};
use crate::{Error, Result};

pub const TRUTHY: [&str; 4] = ["TRUE", "ON", "YES", "Y"];
pub const FALSEY: [&str; 4] = ["FALSE", "OFF", "NO", "N"];

/// Disjoint truthy and falsey vocabularies, stored upper-cased.
///
/// # Examples
///
/// ```rust
/// use glossy_atoms::{BoolVocabulary, Error};
///
/// let vocabulary = BoolVocabulary::default();
/// assert_eq!(vocabulary.resolve(Some("on")).unwrap(), true);
/// assert_eq!(vocabulary.resolve(Some("No")).unwrap(), false);
/// assert_eq!(vocabulary.resolve(None).unwrap(), false);
///
/// let err = BoolVocabulary::new(["YES", "Y"], ["NO", "y"]).unwrap_err();
/// assert!(matches!(err, Error::AmbiguousGrammar { .. }));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BoolVocabulary {
    truthy: Vec<String>,
    falsey: Vec<String>,
}

impl BoolVocabulary {
    /// Builds a vocabulary, checking that no literal is both truthy and falsey.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AmbiguousGrammar`] if the vocabularies overlap (compared
    /// case-insensitively), and [`Error::Custom`] for an empty literal.
    pub fn new<T, F, S>(truthy: T, falsey: F) -> Result<Self>
    where
        T: IntoIterator<Item = S>,
        F: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let truthy = normalize(truthy)?;
        let falsey = normalize(falsey)?;
        if let Some(shared) = truthy.iter().find(|t| falsey.contains(t)) {
            return Err(Error::ambiguous_grammar(shared));
        }
        Ok(BoolVocabulary { truthy, falsey })
    }

    pub fn truthy(&self) -> &[String] {
        &self.truthy
    }

    pub fn falsey(&self) -> &[String] {
        &self.falsey
    }

    /// Classifies a literal, or `None` if it is in neither vocabulary.
    #[must_use]
    pub fn classify(&self, literal: &str) -> Option<bool> {
        if self.truthy.iter().any(|t| t.eq_ignore_ascii_case(literal)) {
            Some(true)
        } else if self.falsey.iter().any(|f| f.eq_ignore_ascii_case(literal)) {
            Some(false)
        } else {
            None
        }
    }

    /// Turns an optional token into a boolean. An absent token is `false`.
    /// Surrounding whitespace is ignored, as it is for configured literals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatch`] for a token in neither vocabulary.
    pub fn resolve(&self, token: Option<&str>) -> Result<bool> {
        match token {
            None => Ok(false),
            Some(literal) => self
                .classify(literal.trim())
                .ok_or_else(|| Error::no_match(literal, 0, "bool")),
        }
    }

    fn literals(&self) -> impl Iterator<Item = (&str, bool)> {
        self.truthy
            .iter()
            .map(|t| (t.as_str(), true))
            .chain(self.falsey.iter().map(|f| (f.as_str(), false)))
    }
}

impl Default for BoolVocabulary {
    fn default() -> Self {
        BoolVocabulary {
            truthy: TRUTHY.iter().map(|s| s.to_string()).collect(),
            falsey: FALSEY.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn normalize<I, S>(literals: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    literals
        .into_iter()
        .map(|s| {
            let s = s.as_ref().trim();
            if s.is_empty() {
                Err(Error::custom("boolean literal must not be empty"))
            } else {
                Ok(s.to_ascii_uppercase())
            }
        })
        .collect()
}

/// Recognizes a boolean literal.
///
/// # Examples
///
/// ```rust
/// use glossy_atoms::{BoolRecognizer, Recognizer};
///
/// let recognizer = BoolRecognizer::default();
/// assert!(recognizer.parse_all("Yes").unwrap());
/// assert!(!recognizer.parse_all("off").unwrap());
/// assert!(recognizer.parse_all("maybe").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoolRecognizer {
    vocabulary: BoolVocabulary,
}

impl BoolRecognizer {
    pub fn new(vocabulary: BoolVocabulary) -> Self {
        BoolRecognizer { vocabulary }
    }

    pub fn vocabulary(&self) -> &BoolVocabulary {
        &self.vocabulary
    }
}

impl Recognizer for BoolRecognizer {
    type Output = bool;

    fn name(&self) -> &str {
        "bool"
    }

    fn recognize(&self, input: &str, pos: usize) -> Result<Match<bool>> {
        let start = skip_whitespace(input, pos);
        let mut best: Option<(usize, bool)> = None;

        for (literal, value) in self.vocabulary.literals() {
            let end = start + literal.len();
            let matches = input
                .get(start..end)
                .is_some_and(|text| text.eq_ignore_ascii_case(literal));
            if matches && at_word_boundary(input, end) && best.map_or(true, |(e, _)| end > e) {
                best = Some((end, value));
            }
        }

        best.map(|(end, value)| Match::new(value, end))
            .ok_or_else(|| Error::no_match(input, pos, self.name()))
    }
}
