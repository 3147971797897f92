//! # elisp-reader
//!
//! Lexer and S-expression reader for an Emacs Lisp flavored language:
//! `?a` character literals, `[...]` vectors, `#x`/`#o`/`#b` radix-prefixed
//! integers and `;` line comments. The reader turns raw source text into
//! [`Expression`] trees, one top-level form per call, ready to be handed to
//! an evaluator.
//!
//! ## Quick Start
//!
//! ```rust
//! use elisp_reader::Reader;
//!
//! # fn main() -> elisp_reader::Result<()> {
//! let mut reader = Reader::new("(+ 4 5 1) '(a . b)");
//!
//! let form = reader.read_form()?.expect("one form");
//! assert!(form.is_list());
//! assert_eq!(form.to_string(), "(+ 4 5 1)");
//!
//! let form = reader.read_form()?.expect("another form");
//! assert_eq!(form.to_string(), "(quote (a . b))");
//!
//! assert_eq!(reader.read_form()?, None); // clean end of input
//! # Ok(())
//! # }
//! ```
//!
//! `Reader` also implements `Iterator`, so a whole buffer collects in one
//! line:
//!
//! ```rust
//! use elisp_reader::{Expression, Reader, Result};
//!
//! let forms: Result<Vec<Expression>> = Reader::new("1 #x10 3.5").collect();
//! assert_eq!(forms.unwrap().len(), 3);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokenizer → Reader → Expression trees
//! ```
//!
//! Data flow is strictly pull-based: the [`Reader`] asks the [`Tokenizer`]
//! for one token at a time, which asks the [`Scanner`] for one code point
//! at a time. Every component is instance-local state over an immutable
//! buffer, so independent readers can run on separate threads.
//!
//! ## Error Handling
//!
//! No input can panic the reader. Lexical failures ([`LexError`]) and
//! syntactic failures ([`ParseError`]) are typed values with 1-indexed
//! line/column positions:
//!
//! ```rust
//! use elisp_reader::Reader;
//!
//! let err = Reader::new("(a b").read_form().unwrap_err();
//! assert!(err.to_string().contains("Unterminated form"));
//! ```

/// Version of the reader crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod reader;

// Re-export main types
pub use error::{LexError, ParseError, Result};
pub use lexer::{Scanner, Token, TokenKind, Tokenizer};
pub use reader::{printer, Expression, Reader};
