use serde::{Deserialize, Serialize};

/// A single token from the source code
///
/// `literal` retains the exact raw source text that was consumed, including
/// prefix markers like `#x`, the quote marks of a string and a leading sign,
/// so diagnostics can re-serialize a token faithfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub literal: String,
    /// Line number where token starts (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind,
            literal: literal.into(),
            line,
            column,
        }
    }
}

/// All possible token kinds
///
/// Kinds carry no payload; the raw text lives in [`Token::literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    // Delimiters
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Left bracket [ (opens a vector)
    LeftBracket,
    /// Right bracket ]
    RightBracket,
    /// Dot separating the cdr of a dotted pair
    Dot,
    /// Quote sugar (')
    Quote,

    // Literals
    /// String literal, quotes included: `"hello"`
    String,
    /// Symbol: `let`, `char-to-string`, `+`, `%`
    Symbol,
    /// Decimal integer literal: `1234`, `-9`, `+2`
    Decimal,
    /// Octal integer literal: `#o1234`
    Oct,
    /// Hexadecimal integer literal: `#x1234`
    Hex,
    /// Binary integer literal: `#b0101`
    Binary,
    /// Floating-point literal: `10.123`, `3.2e+50`
    Float,
    /// Character literal: `?a`, `?\n`
    Char,

    // Special
    /// End of file marker
    Eof,
}

impl TokenKind {
    /// True for the kinds that the reader materializes as a single atom.
    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::Symbol
                | TokenKind::Decimal
                | TokenKind::Oct
                | TokenKind::Hex
                | TokenKind::Binary
                | TokenKind::Float
                | TokenKind::Char
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::Dot => "'.'",
            TokenKind::Quote => "quote",
            TokenKind::String => "string",
            TokenKind::Symbol => "symbol",
            TokenKind::Decimal => "decimal number",
            TokenKind::Oct => "octal number",
            TokenKind::Hex => "hex number",
            TokenKind::Binary => "binary number",
            TokenKind::Float => "float number",
            TokenKind::Char => "character",
            TokenKind::Eof => "end of input",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_atom() {
        assert!(TokenKind::Symbol.is_atom());
        assert!(TokenKind::Hex.is_atom());
        assert!(!TokenKind::LeftParen.is_atom());
        assert!(!TokenKind::Eof.is_atom());
    }

    #[test]
    fn test_token_keeps_raw_literal() {
        let tok = Token::new(TokenKind::Hex, "#x1234", 1, 1);
        assert_eq!(tok.literal, "#x1234");
        assert_eq!(tok.kind, TokenKind::Hex);
    }
}
