//! The literal grammar as a whole.
//!
//! [`Grammar`] owns one configured instance of every recognizer and is itself
//! a recognizer for "any literal". A raw data block (`$name ... $end`) is tried
//! first, since its opening is unambiguous and a missing `$end` must stop
//! parsing. Otherwise numeric, boolean and string are all tried at the same
//! position and the longest match wins:
//!
//! - `3d`, `1s` and `6e31g` are words, not numbers followed by junk
//! - `12` and `1e3` are numbers even though they are also bare words
//!
//! On a tie the earlier of numeric, boolean, string wins, so `yes` is a
//! boolean even though it is also a bare word.

use crate::recognizer::{Match, Recognizer};
use crate::{
    BoolRecognizer, BoolVocabulary, ComplexRecognizer, Error, FloatRecognizer, GrammarOptions,
    IntegerRecognizer, NumericRecognizer, RawDataRecognizer, Result, StringRecognizer, Value,
};
use tracing::{debug, trace};

/// A validated set of literal recognizers.
///
/// # Examples
///
/// ```rust
/// use glossy_atoms::{Grammar, Recognizer, Value};
///
/// let grammar = Grammar::default();
/// assert_eq!(grammar.parse_all("off").unwrap(), Value::Bool(false));
/// assert_eq!(grammar.parse_all("'DFT'").unwrap(), Value::from("DFT"));
/// assert_eq!(grammar.numeric().parse_all("7").unwrap(), Value::Integer(7));
/// ```
#[derive(Clone, Debug)]
pub struct Grammar {
    boolean: BoolRecognizer,
    string: StringRecognizer,
    numeric: NumericRecognizer,
}

impl Grammar {
    /// Builds a grammar, validating the boolean vocabularies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AmbiguousGrammar`] when a literal is both truthy and
    /// falsey.
    pub fn new(options: GrammarOptions) -> Result<Self> {
        let vocabulary = BoolVocabulary::new(&options.truthy, &options.falsey)?;
        debug!(
            truthy = ?vocabulary.truthy(),
            falsey = ?vocabulary.falsey(),
            escapes = options.escapes,
            "building literal grammar"
        );
        Ok(Self::from_parts(
            BoolRecognizer::new(vocabulary),
            StringRecognizer::with_escapes(options.escapes),
        ))
    }

    fn from_parts(boolean: BoolRecognizer, string: StringRecognizer) -> Self {
        Grammar {
            boolean,
            string,
            numeric: NumericRecognizer::new(),
        }
    }

    pub fn boolean(&self) -> &BoolRecognizer {
        &self.boolean
    }

    pub fn integer(&self) -> IntegerRecognizer {
        IntegerRecognizer
    }

    /// The standalone float recognizer, which accepts integer-shaped input.
    pub fn float(&self) -> FloatRecognizer {
        FloatRecognizer::new()
    }

    pub fn complex(&self) -> ComplexRecognizer {
        ComplexRecognizer
    }

    pub fn numeric(&self) -> &NumericRecognizer {
        &self.numeric
    }

    pub fn string(&self) -> &StringRecognizer {
        &self.string
    }

    pub fn raw_data(&self) -> RawDataRecognizer {
        RawDataRecognizer
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::from_parts(BoolRecognizer::default(), StringRecognizer::new())
    }
}

impl Recognizer for Grammar {
    type Output = Value;

    fn name(&self) -> &str {
        "literal"
    }

    fn recognize(&self, input: &str, pos: usize) -> Result<Match<Value>> {
        match RawDataRecognizer.recognize(input, pos) {
            Ok(m) => return Ok(Match::new(Value::RawData(m.value), m.end)),
            Err(err) if !err.is_recoverable() => return Err(err),
            Err(_) => {}
        }

        let candidates = [
            self.numeric.recognize(input, pos),
            self.boolean
                .recognize(input, pos)
                .map(|m| Match::new(Value::Bool(m.value), m.end)),
            self.string
                .recognize(input, pos)
                .map(|m| Match::new(Value::Text(m.value), m.end)),
        ];

        let mut best: Option<Match<Value>> = None;
        for candidate in candidates {
            match candidate {
                Ok(m) if best.as_ref().map_or(true, |b| m.end > b.end) => {
                    if let Some(shorter) = &best {
                        trace!(pos, shorter = shorter.end, longer = m.end, "longer literal wins");
                    }
                    best = Some(m);
                }
                Ok(_) => {}
                Err(err) if !err.is_recoverable() => return Err(err),
                Err(_) => {}
            }
        }
        best.ok_or_else(|| Error::no_match(input, pos, self.name()))
    }
}
