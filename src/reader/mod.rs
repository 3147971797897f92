//! Reader module
//!
//! Assembles the token stream into S-expression trees, one top-level form
//! at a time.

mod expr;
mod form_reader;
pub mod printer;

pub use expr::Expression;
pub use form_reader::Reader;
