//! Lexical analysis
//!
//! Converts source text into a stream of tokens, pulled one at a time
//! by the reader.

mod scanner;
mod token;
mod tokenizer;

pub use scanner::{Scanner, EOF_CHAR};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
