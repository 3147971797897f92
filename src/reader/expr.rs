use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed S-expression
///
/// A closed tagged union: either an atom, a `Pair` chain forming a list, or
/// a vector. Pairs own their `car` and `cdr` exclusively, so every tree has
/// a single owner and no cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// The empty list / list terminator
    Nil,
    /// A cons cell. `cdr` is `Nil` or another `Pair` for a proper list;
    /// any other expression makes this a dotted pair.
    Pair {
        /// First slot of the cell
        car: Box<Expression>,
        /// Second slot of the cell
        cdr: Box<Expression>,
    },
    /// Symbol: `let`, `char-to-string`, `+`
    Symbol(String),
    /// Integer with the radix its literal was written in (2, 8, 10 or 16)
    Integer {
        /// Decoded numeric value
        value: i64,
        /// Base of the original literal
        radix: u32,
    },
    /// Floating-point number
    Float(f64),
    /// String with escape sequences already decoded
    Str(String),
    /// Single character: `?a`
    Char(char),
    /// Vector: `[1 2 3]`
    Vector(Vec<Expression>),
}

impl Expression {
    /// Builds a cons cell.
    pub fn cons(car: Expression, cdr: Expression) -> Expression {
        Expression::Pair {
            car: Box::new(car),
            cdr: Box::new(cdr),
        }
    }

    /// Builds a proper list from the given elements, terminated by `Nil`.
    pub fn list(elements: Vec<Expression>) -> Expression {
        elements
            .into_iter()
            .rev()
            .fold(Expression::Nil, |cdr, car| Expression::cons(car, cdr))
    }

    /// Builds a decimal integer.
    pub fn int(value: i64) -> Expression {
        Expression::Integer { value, radix: 10 }
    }

    /// Builds a symbol from anything string-like.
    pub fn symbol(name: impl Into<String>) -> Expression {
        Expression::Symbol(name.into())
    }

    /// True for `Nil`.
    pub fn is_nil(&self) -> bool {
        matches!(self, Expression::Nil)
    }

    /// True when this expression is a well-formed proper list: `Nil`, or a
    /// `Pair` chain whose final `cdr` is `Nil`.
    pub fn is_list(&self) -> bool {
        let mut cursor = self;
        loop {
            match cursor {
                Expression::Nil => return true,
                Expression::Pair { cdr, .. } => cursor = cdr,
                _ => return false,
            }
        }
    }

    /// Number of elements in a proper list, `None` for dotted pairs
    /// and non-list expressions.
    pub fn list_len(&self) -> Option<usize> {
        let mut cursor = self;
        let mut len = 0;
        loop {
            match cursor {
                Expression::Nil => return Some(len),
                Expression::Pair { cdr, .. } => {
                    len += 1;
                    cursor = cdr;
                }
                _ => return None,
            }
        }
    }
}

impl fmt::Display for Expression {
    /// Canonical one-line re-serialization: `(a . b)` for dotted pairs,
    /// radix prefixes preserved on integers, strings re-quoted. `Nil`
    /// renders as `()` so it reads back as `Nil` (`nil` would read back as
    /// a symbol).
    ///
    /// Output reads back as the same tree, with one exception: a string
    /// value ending in a backslash renders as `"…\\"`, which cannot be
    /// re-lexed because scanning recognizes only the `\"` escape and takes
    /// the final `\"` for an escaped quote, missing the real closing quote.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Nil => write!(f, "()"),
            Expression::Pair { car, cdr } => {
                write!(f, "({}", car)?;
                let mut cursor = cdr.as_ref();
                loop {
                    match cursor {
                        Expression::Nil => break,
                        Expression::Pair { car, cdr } => {
                            write!(f, " {}", car)?;
                            cursor = cdr;
                        }
                        other => {
                            write!(f, " . {}", other)?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
            Expression::Symbol(name) => write!(f, "{}", name),
            Expression::Integer { value, radix } => match radix {
                16 => write!(f, "#x{:x}", value),
                8 => write!(f, "#o{:o}", value),
                2 => write!(f, "#b{:b}", value),
                _ => write!(f, "{}", value),
            },
            Expression::Float(value) => write!(f, "{:?}", value),
            Expression::Str(value) => {
                write!(f, "\"")?;
                for c in value.chars() {
                    match c {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        '\r' => write!(f, "\\r")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                write!(f, "\"")
            }
            Expression::Char(c) => match c {
                '\n' => write!(f, "?\\n"),
                '\t' => write!(f, "?\\t"),
                '\r' => write!(f, "?\\r"),
                '\\' => write!(f, "?\\\\"),
                c => write!(f, "?{}", c),
            },
            Expression::Vector(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_builder() {
        let list = Expression::list(vec![
            Expression::symbol("a"),
            Expression::symbol("b"),
            Expression::symbol("c"),
        ]);
        assert!(list.is_list());
        assert_eq!(list.list_len(), Some(3));
        assert_eq!(list.to_string(), "(a b c)");
    }

    #[test]
    fn test_empty_list_is_nil() {
        assert_eq!(Expression::list(vec![]), Expression::Nil);
        assert!(Expression::Nil.is_list());
        assert_eq!(Expression::Nil.list_len(), Some(0));
        assert_eq!(Expression::Nil.to_string(), "()");
    }

    #[test]
    fn test_dotted_pair_is_not_a_list() {
        let pair = Expression::cons(Expression::symbol("a"), Expression::symbol("b"));
        assert!(!pair.is_list());
        assert_eq!(pair.list_len(), None);
        assert_eq!(pair.to_string(), "(a . b)");
    }

    #[test]
    fn test_display_atoms() {
        assert_eq!(Expression::int(42).to_string(), "42");
        assert_eq!(
            Expression::Integer {
                value: 0x1234,
                radix: 16
            }
            .to_string(),
            "#x1234"
        );
        assert_eq!(Expression::Float(3.0).to_string(), "3.0");
        assert_eq!(Expression::Str("hi\n".to_string()).to_string(), "\"hi\\n\"");
        assert_eq!(Expression::Char('a').to_string(), "?a");
        assert_eq!(Expression::Char('\n').to_string(), "?\\n");
    }

    #[test]
    fn test_display_vector() {
        let vector = Expression::Vector(vec![
            Expression::int(1),
            Expression::int(2),
            Expression::int(3),
        ]);
        assert_eq!(vector.to_string(), "[1 2 3]");
    }
}
