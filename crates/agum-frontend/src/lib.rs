//! Surface syntax for Abelian group terms and equations.
//!
//! A term is a sum of signed factors (`2x + y - 3z`), a factor is an
//! optional integer coefficient juxtaposed with a variable, the literal `0`,
//! or a parenthesized term; an equation is two terms separated by `=`.
//! Parsing goes through the `agum-core` constructors, so every produced term
//! is canonical.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lexer;
pub mod parser;

pub use lexer::Token;
pub use parser::{parse_equation, parse_term, ParseError};
