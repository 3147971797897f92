use super::expr::Expression;
use crate::error::{ParseError, Result};
use crate::lexer::{Token, TokenKind, Tokenizer};

/// Recursive-descent reader assembling tokens into S-expressions
///
/// Pulls tokens from a [`Tokenizer`] on demand and builds one expression
/// tree per [`Reader::read_form`] call. Each call consumes exactly the
/// tokens belonging to one top-level form and leaves the cursor positioned
/// to begin the next, so a REPL or batch loader can read forms one at a
/// time without re-scanning from the start.
#[derive(Debug, Clone)]
pub struct Reader {
    tokenizer: Tokenizer,
}

impl Reader {
    /// Creates a new reader over the given source text.
    pub fn new(source: &str) -> Self {
        Reader {
            tokenizer: Tokenizer::new(source),
        }
    }

    /// Reads the next top-level form.
    ///
    /// Returns `Ok(None)` on clean end of input. On error the remaining
    /// buffer after the failure point is left untouched; no recovery or
    /// resynchronization is attempted.
    pub fn read_form(&mut self) -> Result<Option<Expression>> {
        let token = self.tokenizer.next_token()?;
        if token.kind == TokenKind::Eof {
            return Ok(None);
        }
        let form = self.parse_form(token)?;
        tracing::trace!(form = %form, "read top-level form");
        Ok(Some(form))
    }

    /// Dispatches on the kind of an already consumed token.
    fn parse_form(&mut self, token: Token) -> Result<Expression> {
        match token.kind {
            TokenKind::LeftParen => self.parse_list_tail(&token, true),
            TokenKind::LeftBracket => self.parse_vector(&token),
            TokenKind::Quote => self.parse_quoted(),

            TokenKind::Symbol => Ok(Expression::Symbol(token.literal)),
            TokenKind::Decimal => Self::integer(token, 10),
            TokenKind::Hex => Self::integer(token, 16),
            TokenKind::Oct => Self::integer(token, 8),
            TokenKind::Binary => Self::integer(token, 2),
            TokenKind::Float => Self::float(token),
            TokenKind::String => Ok(Expression::Str(decode_string(&token.literal))),
            TokenKind::Char => Self::char(token),

            TokenKind::RightParen
            | TokenKind::RightBracket
            | TokenKind::Dot
            | TokenKind::Eof => Err(ParseError::UnexpectedToken {
                line: token.line,
                column: token.column,
                found: token.kind,
                context: "a form",
            }),
        }
    }

    /// Parses the remainder of a list after its `(`.
    ///
    /// `first` is true until one element has been consumed; a dot is only
    /// legal once a car exists for it to follow.
    fn parse_list_tail(&mut self, open: &Token, first: bool) -> Result<Expression> {
        let token = self.tokenizer.next_token()?;
        match token.kind {
            TokenKind::RightParen => Ok(Expression::Nil),
            TokenKind::Eof => Err(Self::unterminated(open)),
            TokenKind::Dot if !first => {
                let cdr_token = self.tokenizer.next_token()?;
                if cdr_token.kind == TokenKind::Eof {
                    return Err(Self::unterminated(open));
                }
                let cdr = self.parse_form(cdr_token)?;

                let close = self.tokenizer.next_token()?;
                match close.kind {
                    TokenKind::RightParen => Ok(cdr),
                    TokenKind::Eof => Err(Self::unterminated(open)),
                    _ => Err(ParseError::UnexpectedToken {
                        line: close.line,
                        column: close.column,
                        found: close.kind,
                        context: "')' after the cdr of a dotted pair",
                    }),
                }
            }
            TokenKind::Dot => Err(ParseError::UnexpectedToken {
                line: token.line,
                column: token.column,
                found: token.kind,
                context: "a form or ')'",
            }),
            _ => {
                let car = self.parse_form(token)?;
                let cdr = self.parse_list_tail(open, false)?;
                Ok(Expression::cons(car, cdr))
            }
        }
    }

    /// Parses the remainder of a vector after its `[`.
    fn parse_vector(&mut self, open: &Token) -> Result<Expression> {
        let mut elements = Vec::new();
        loop {
            let token = self.tokenizer.next_token()?;
            match token.kind {
                TokenKind::RightBracket => return Ok(Expression::Vector(elements)),
                TokenKind::Eof => return Err(Self::unterminated(open)),
                _ => elements.push(self.parse_form(token)?),
            }
        }
    }

    /// Expands `'form` into `(quote form)`.
    fn parse_quoted(&mut self) -> Result<Expression> {
        let token = self.tokenizer.next_token()?;
        if token.kind == TokenKind::Eof {
            return Err(ParseError::UnexpectedToken {
                line: token.line,
                column: token.column,
                found: token.kind,
                context: "a form after quote",
            });
        }
        let form = self.parse_form(token)?;
        Ok(Expression::list(vec![
            Expression::symbol("quote"),
            form,
        ]))
    }

    fn unterminated(open: &Token) -> ParseError {
        ParseError::UnterminatedForm {
            line: open.line,
            column: open.column,
            open: open.kind,
        }
    }

    fn integer(token: Token, radix: u32) -> Result<Expression> {
        let digits = if radix == 10 {
            &token.literal[..]
        } else {
            // Strip the two-character "#x"/"#o"/"#b" prefix
            &token.literal[2..]
        };
        let parsed = if radix == 10 {
            digits.parse::<i64>().ok()
        } else {
            i64::from_str_radix(digits, radix).ok()
        };
        match parsed {
            Some(value) => Ok(Expression::Integer { value, radix }),
            None => Err(Self::invalid_literal(token)),
        }
    }

    fn float(token: Token) -> Result<Expression> {
        match token.literal.parse::<f64>() {
            Ok(value) => Ok(Expression::Float(value)),
            Err(_) => Err(Self::invalid_literal(token)),
        }
    }

    fn char(token: Token) -> Result<Expression> {
        match decode_char(&token.literal) {
            Some(c) => Ok(Expression::Char(c)),
            None => Err(Self::invalid_literal(token)),
        }
    }

    fn invalid_literal(token: Token) -> ParseError {
        ParseError::InvalidLiteral {
            line: token.line,
            column: token.column,
            literal: token.literal,
        }
    }
}

impl Iterator for Reader {
    type Item = Result<Expression>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_form().transpose()
    }
}

/// Decodes the escape sequences of a raw string literal, quotes included.
///
/// `\n`, `\t`, `\r`, `\0`, `\\` and `\"` decode to their control or literal
/// character; any other escaped code point decodes to itself.
fn decode_string(literal: &str) -> String {
    // The tokenizer guarantees the surrounding quotes
    let inner = &literal[1..literal.len().saturating_sub(1)];
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => value.push(unescape(escaped)),
                None => value.push('\\'),
            }
        } else {
            value.push(c);
        }
    }
    value
}

/// Decodes a raw `?a` / `?\n` character literal.
fn decode_char(literal: &str) -> Option<char> {
    let mut chars = literal.chars();
    if chars.next() != Some('?') {
        return None;
    }
    match chars.next()? {
        '\\' => Some(unescape(chars.next()?)),
        c => Some(c),
    }
}

fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        c => c,
    }
}
