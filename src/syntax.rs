//! Literal Syntax Reference
//!
//! This module documents the literal syntax recognized by this library. It
//! contains no code.
//!
//! # Overview
//!
//! Input files of the host language are made of sections and `key = value`
//! entries. This crate covers only the **atoms**: the literal tokens that appear
//! on the value side. Every recognizer skips leading whitespace (spaces, tabs,
//! line breaks) before its token, and never consumes input on failure.
//!
//! ## Summary
//!
//! | Literal | Pattern | Example | Value |
//! |---------|---------|---------|-------|
//! | Boolean | closed vocabulary, any case | `yes`, `Off` | `Value::Bool` |
//! | Integer | `[+-]?[0-9]+` | `-42` | `Value::Integer` / `Value::BigInt` |
//! | Float | `[+-]?[0-9]+\.?[0-9]*([eE][+-]?[0-9]+)?` | `1.5e-3` | `Value::Float` |
//! | Complex | one or two floats, then `*i` or `*j` | `1 2*j` | `Value::Complex` |
//! | String | quoted, or `[A-Za-z0-9]+` | `"a b"`, `H2O` | `Value::Text` |
//! | Raw data | `$` name ... `$end` | `$xyz ... $end` | `Value::RawData` |
//!
//! # Booleans
//!
//! ```text
//! true:  TRUE  ON   YES  Y
//! false: FALSE OFF  NO   N
//! ```
//!
//! Matching is case-insensitive and whole-word: `yesterday` is not a boolean.
//! When several literals match, the longest wins (`YES` rather than `Y`).
//! The two vocabularies can be replaced through `GrammarOptions`, but must stay
//! disjoint; an overlapping pair is rejected when the grammar is built.
//!
//! # Numbers
//!
//! ## Integers
//!
//! An optional sign and one or more decimal digits. A digit run followed by `.`
//! or by an exponent with digits is a float, not an integer. Literals that do
//! not fit in 64 bits are kept exactly as arbitrary-precision integers:
//!
//! ```text
//! 42                      -> Integer(42)
//! +7                      -> Integer(7)
//! 99999999999999999999    -> BigInt(99999999999999999999)
//! ```
//!
//! ## Floats
//!
//! ```text
//! 12      -> 12.0   (standalone float recognizer only)
//! 12.     -> 12.0
//! 12.5    -> 12.5
//! 1e10    -> 1e10
//! -1.5E-3 -> -0.0015
//! .5      -> no match (a digit must lead)
//! 3e      -> matches `3`, the dangling `e` is left over
//! ```
//!
//! ## Complex numbers
//!
//! A complex literal is one or two float-shaped numbers followed by `*i` or
//! `*j` (either case). With one number it is purely imaginary; with two, the
//! first is the real part and the second, carrying its own sign, the imaginary
//! part. Whitespace may appear between the parts.
//!
//! ```text
//! 3*j        -> (0, 3)
//! 3 4*i      -> (3, 4)
//! 3 -4*J     -> (3, -4)
//! 3+4*j      -> (3, 4)
//! 1 2 3*j    -> no match
//! ```
//!
//! ## Dispatch
//!
//! The numeric recognizer tries complex, then float (requiring a `.` or an
//! exponent), then integer. `12` is therefore an integer and `12.` a float.
//!
//! # Strings
//!
//! A quoted string uses `"` or `'` and may not span lines. The quotes are
//! stripped and escapes are translated:
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\"` | double quote |
//! | `\'` | single quote |
//! | `\\` | backslash |
//! | `\n` | newline |
//! | `\r` | carriage return |
//! | `\t` | tab |
//!
//! Any other escape is kept as written, backslash included. With escapes
//! disabled the content is returned verbatim.
//!
//! A bare word is a run of ASCII letters and digits. Unquoted `hello world` is
//! two words.
//!
//! # Raw data blocks
//!
//! ```text
//! $geometry
//! O  0.000  0.000  0.000
//! H  0.000  0.757  0.587
//! $END
//! ```
//!
//! `$` is followed directly by a name (`[A-Za-z_][A-Za-z0-9_]*`). Everything
//! after the name up to the first `$end`, in any case, is the body, with line
//! breaks preserved. A block whose `$end` never appears is an error that stops
//! parsing; it is not treated as a failed alternative.
//!
//! # Complex numbers in JSON
//!
//! JSON has no complex type, so a complex number is written as a tagged object:
//!
//! ```json
//! {"__complex__": [1.0, -2.5]}
//! ```
//!
//! Decoding turns every object carrying the `__complex__` key back into a
//! complex number, at any depth. Any other key in such an object is dropped, so
//! documents must not use `__complex__` for anything else.
