use super::scanner::Scanner;
use super::token::{Token, TokenKind};
use crate::error::LexError;

/// Pull-based tokenizer for the S-expression syntax
///
/// Pulls code points from a [`Scanner`] on demand and classifies one token
/// per [`Tokenizer::next_token`] call. Whitespace and `;` line comments are
/// skipped silently. Once the buffer is exhausted every further call yields
/// a [`TokenKind::Eof`] token.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    scanner: Scanner,
}

impl Tokenizer {
    /// Creates a new tokenizer over the given source text.
    pub fn new(source: &str) -> Self {
        Tokenizer {
            scanner: Scanner::new(source),
        }
    }

    /// Scans and returns the next token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();

        let line = self.scanner.line();
        let column = self.scanner.column();

        if self.scanner.is_at_end() {
            return Ok(Token::new(TokenKind::Eof, "", line, column));
        }

        let c = self.scanner.advance();
        let token = match c {
            // S-expression delimiters and quote sugar
            '(' => Token::new(TokenKind::LeftParen, "(", line, column),
            ')' => Token::new(TokenKind::RightParen, ")", line, column),
            '[' => Token::new(TokenKind::LeftBracket, "[", line, column),
            ']' => Token::new(TokenKind::RightBracket, "]", line, column),
            '.' => Token::new(TokenKind::Dot, ".", line, column),
            '\'' => Token::new(TokenKind::Quote, "'", line, column),

            // Strings keep their raw text, quotes included; escape decoding
            // happens when the reader materializes the value
            '"' => self.scan_string(line, column)?,

            // Character literals: ?a, ?\n
            '?' => self.scan_char(line, column)?,

            // A sign starts a number only when a digit follows immediately;
            // `- 9` is a symbol and a separate unsigned number
            '+' | '-' => {
                if self.scanner.peek().is_ascii_digit() {
                    self.scan_number(c, line, column)
                } else {
                    Token::new(TokenKind::Symbol, c.to_string(), line, column)
                }
            }

            // Always single-character symbols, never glued to what follows
            '*' | '/' | '%' | '=' => Token::new(TokenKind::Symbol, c.to_string(), line, column),

            // Radix-prefixed integers: #x1234, #o1234, #b0101
            '#' => self.scan_radix(line, column)?,

            c if c.is_ascii_digit() => self.scan_number(c, line, column),

            // Control characters cannot start any token
            c if c.is_control() => {
                return Err(LexError::UnexpectedChar {
                    line,
                    column,
                    ch: c,
                })
            }

            // Everything else starts a symbol: letters, and operator-ish
            // code points like < > : ! & _ { }
            c => self.scan_symbol(c, line, column),
        };

        tracing::trace!(
            kind = ?token.kind,
            literal = %token.literal,
            line = token.line,
            column = token.column,
            "lexed token"
        );
        Ok(token)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            let c = self.scanner.peek();
            if c.is_whitespace() {
                self.scanner.advance();
            } else if c == ';' {
                // Line comment: drop everything through end of line
                while !self.scanner.is_at_end() && self.scanner.peek() != '\n' {
                    self.scanner.advance();
                }
            } else {
                break;
            }
        }
    }

    fn scan_string(&mut self, line: usize, column: usize) -> Result<Token, LexError> {
        let mut literal = String::from('"');

        loop {
            if self.scanner.is_at_end() {
                return Err(LexError::UnterminatedString { line, column });
            }
            // Only backslash-quote is special at this layer: both characters
            // are copied and the scan continues past the escaped quote
            if self.scanner.peek() == '\\' && self.scanner.peek_next() == '"' {
                literal.push(self.scanner.advance());
                literal.push(self.scanner.advance());
                continue;
            }
            let c = self.scanner.advance();
            literal.push(c);
            if c == '"' {
                break;
            }
        }

        Ok(Token::new(TokenKind::String, literal, line, column))
    }

    fn scan_char(&mut self, line: usize, column: usize) -> Result<Token, LexError> {
        let mut literal = String::from('?');

        if self.scanner.is_at_end() {
            return Err(LexError::UnterminatedChar { line, column });
        }
        if self.scanner.peek() == '\\' {
            literal.push(self.scanner.advance());
            if self.scanner.is_at_end() {
                return Err(LexError::UnterminatedChar { line, column });
            }
        }
        literal.push(self.scanner.advance());

        Ok(Token::new(TokenKind::Char, literal, line, column))
    }

    /// Scans a decimal integer or float. `first` is the already consumed
    /// leading sign or digit.
    fn scan_number(&mut self, first: char, line: usize, column: usize) -> Token {
        let mut literal = String::from(first);

        while self.scanner.peek().is_ascii_digit() {
            literal.push(self.scanner.advance());
        }

        if self.scanner.peek() != '.' {
            return Token::new(TokenKind::Decimal, literal, line, column);
        }

        // Fractional part, then an optional e/E exponent with optional sign
        literal.push(self.scanner.advance());
        while self.scanner.peek().is_ascii_digit() {
            literal.push(self.scanner.advance());
        }

        if matches!(self.scanner.peek(), 'e' | 'E')
            && (self.scanner.peek_next().is_ascii_digit()
                || matches!(self.scanner.peek_next(), '+' | '-'))
        {
            literal.push(self.scanner.advance());
            if matches!(self.scanner.peek(), '+' | '-') {
                literal.push(self.scanner.advance());
            }
            while self.scanner.peek().is_ascii_digit() {
                literal.push(self.scanner.advance());
            }
        }

        Token::new(TokenKind::Float, literal, line, column)
    }

    /// Scans a `#x`/`#o`/`#b` prefixed integer. The `#` is already consumed.
    fn scan_radix(&mut self, line: usize, column: usize) -> Result<Token, LexError> {
        let marker = self.scanner.peek();
        let (kind, digits): (TokenKind, fn(char) -> bool) = match marker {
            'x' | 'X' => (TokenKind::Hex, |c| c.is_ascii_hexdigit()),
            'o' | 'O' => (TokenKind::Oct, |c| matches!(c, '0'..='7')),
            'b' | 'B' => (TokenKind::Binary, |c| matches!(c, '0' | '1')),
            found => {
                return Err(LexError::InvalidRadixPrefix {
                    line,
                    column,
                    found,
                })
            }
        };

        let mut literal = String::from('#');
        literal.push(self.scanner.advance());
        while digits(self.scanner.peek()) {
            literal.push(self.scanner.advance());
        }

        Ok(Token::new(kind, literal, line, column))
    }

    /// Scans a multi-character symbol. `first` is the already consumed
    /// starting code point; the run continues over letters and digits only.
    fn scan_symbol(&mut self, first: char, line: usize, column: usize) -> Token {
        let mut literal = String::from(first);

        while self.scanner.peek().is_alphanumeric() {
            literal.push(self.scanner.advance());
        }

        Token::new(TokenKind::Symbol, literal, line, column)
    }
}
