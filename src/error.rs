//! Error types for the reader

use thiserror::Error;

use crate::lexer::TokenKind;

/// Lexical errors raised while the tokenizer is filling a token.
///
/// Every variant records the 1-indexed line and column where the offending
/// token started, so a front end can point at the source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    /// A code point that cannot start any token
    ///
    /// **Triggered by:** control characters outside string literals
    /// **Example:** a stray `\u{1}` byte in the source
    #[error("Unexpected character {ch:?} at line {line}, column {column}")]
    UnexpectedChar {
        /// Line number where the character appears
        line: usize,
        /// Column number where the character appears
        column: usize,
        /// The offending code point
        ch: char,
    },

    /// End of input reached inside a string literal
    ///
    /// **Example:** `(message "hi` (missing closing quote)
    #[error("Unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString {
        /// Line number of the opening quote
        line: usize,
        /// Column number of the opening quote
        column: usize,
    },

    /// End of input reached inside a `?` character literal
    ///
    /// **Example:** `?` or `?\` at the very end of the buffer
    #[error("Unterminated character literal starting at line {line}, column {column}")]
    UnterminatedChar {
        /// Line number of the `?`
        line: usize,
        /// Column number of the `?`
        column: usize,
    },

    /// A `#` not followed by one of the radix letters `x`, `o`, `b`
    ///
    /// **Example:** `#z12`
    #[error("Invalid radix prefix '#{found}' at line {line}, column {column}: expected x, o or b")]
    InvalidRadixPrefix {
        /// Line number of the `#`
        line: usize,
        /// Column number of the `#`
        column: usize,
        /// The code point that followed the `#`
        found: char,
    },
}

/// Syntactic errors raised while assembling tokens into expressions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A lexical error surfaced while pulling the next token
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token kind that no grammar rule accepts at this point
    ///
    /// **Example:** `(a . b . c)` (second dot in one list)
    #[error("Unexpected token {found} at line {line}, column {column}: expected {context}")]
    UnexpectedToken {
        /// Line number where the token starts
        line: usize,
        /// Column number where the token starts
        column: usize,
        /// The token kind that was found
        found: TokenKind,
        /// What the grammar expected instead
        context: &'static str,
    },

    /// End of input while a list, vector or quote is still open
    ///
    /// **Example:** `(a b` (missing closing parenthesis)
    #[error("Unterminated form: {open} opened at line {line}, column {column} is never closed")]
    UnterminatedForm {
        /// Line number of the opening token
        line: usize,
        /// Column number of the opening token
        column: usize,
        /// The kind of token left open
        open: TokenKind,
    },

    /// A literal whose token text does not decode to a value
    ///
    /// **Triggered by:** integer overflow, or a radix prefix with no digits
    /// **Example:** `#x` (prefix only), `99999999999999999999`
    #[error("Invalid literal '{literal}' at line {line}, column {column}")]
    InvalidLiteral {
        /// Line number where the literal starts
        line: usize,
        /// Column number where the literal starts
        column: usize,
        /// The raw literal text
        literal: String,
    },
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, ParseError>;
