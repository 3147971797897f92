/// Sentinel returned by [`Scanner::peek`] once the cursor runs past the end.
pub const EOF_CHAR: char = '\0';

/// Cursor over the source text as a sequence of code points.
///
/// Supplies one- and two-code-point lookahead. Running past end of input
/// always yields [`EOF_CHAR`]; the cursor never blocks and never fails.
#[derive(Debug, Clone)]
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
}

impl Scanner {
    /// Creates a new scanner over the given source text.
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// True once the cursor has consumed the whole buffer.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// The code point under the cursor, without consuming it.
    pub fn peek(&self) -> char {
        if self.is_at_end() {
            EOF_CHAR
        } else {
            self.source[self.current]
        }
    }

    /// The code point one past [`Scanner::peek`].
    pub fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            EOF_CHAR
        } else {
            self.source[self.current + 1]
        }
    }

    /// Consumes the code point under the cursor and returns it.
    ///
    /// At end of input this returns [`EOF_CHAR`] and the cursor stays put.
    pub fn advance(&mut self) -> char {
        if self.is_at_end() {
            return EOF_CHAR;
        }
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Current line number (1-indexed).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Current column number (1-indexed).
    pub fn column(&self) -> usize {
        self.column
    }
}
