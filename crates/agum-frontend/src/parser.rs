//! Recursive-descent parser for terms and equations
//!
//! Grammar:
//!
//! ```text
//! equation := term '=' term
//! term     := ['+'|'-'] factor { ('+'|'-') factor }
//! factor   := numeral symbol | symbol | numeral | '(' term ')'
//! ```
//!
//! A bare numeral must be `0` (the group identity); there are no constants
//! in the algebra, so any other bare numeral is rejected.

use agum_core::{Equation, Term};
use logos::Logos;
use num_bigint::BigInt;
use num_traits::Zero;
use thiserror::Error;

use crate::lexer::Token;

/// Parse failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input contained a character no token matches.
    #[error("unrecognized input at byte {0}")]
    Lex(usize),
    /// A token appeared where the grammar does not allow it.
    #[error("unexpected `{0}`")]
    UnexpectedToken(String),
    /// Input ended mid-production.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A bare numeral other than `0`.
    #[error("bare numeral {0} is not a term; only 0 denotes the identity")]
    BareNumeral(String),
    /// Extra tokens after a complete parse.
    #[error("trailing input starting at `{0}`")]
    TrailingInput(String),
}

struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self, ParseError> {
        let mut tokens = Vec::new();
        for (result, span) in Token::lexer(input).spanned() {
            match result {
                Ok(token) => tokens.push(token),
                Err(()) => return Err(ParseError::Lex(span.start)),
            }
        }
        Ok(Parser { tokens, pos: 0 })
    }

    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Result<Token<'a>, ParseError> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(ParseError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, expected: &Token<'a>) -> Result<(), ParseError> {
        let token = self.advance()?;
        if &token == expected {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken(token.to_string()))
        }
    }

    fn at_end(&self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(ParseError::TrailingInput(token.to_string())),
        }
    }

    /// term := ['+'|'-'] factor { ('+'|'-') factor }
    fn term(&mut self) -> Result<Term, ParseError> {
        let mut negate = false;
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                negate = true;
            }
            Some(Token::Plus) => {
                self.pos += 1;
            }
            _ => {}
        }
        let first = self.factor()?;
        let mut sum = if negate { first.negated() } else { first };
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    let factor = self.factor()?;
                    sum = sum.add(&factor);
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    let factor = self.factor()?;
                    sum = sum.sub(&factor);
                }
                _ => return Ok(sum),
            }
        }
    }

    /// factor := numeral symbol | symbol | numeral | '(' term ')'
    fn factor(&mut self) -> Result<Term, ParseError> {
        match self.advance()? {
            Token::Numeral(digits) => {
                let coeff: BigInt = digits.parse().expect("numeral consists of digits");
                if let Some(Token::Symbol(name)) = self.peek().cloned() {
                    self.pos += 1;
                    return Ok(Term::monomial(coeff, name));
                }
                if coeff.is_zero() {
                    Ok(Term::zero())
                } else {
                    Err(ParseError::BareNumeral(digits.to_owned()))
                }
            }
            Token::Symbol(name) => Ok(Term::variable(name)),
            Token::LParen => {
                let inner = self.term()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            token => Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }
}

/// Parse a single term.
///
/// # Errors
///
/// Returns a [`ParseError`] when the input is not a well-formed term.
pub fn parse_term(input: &str) -> Result<Term, ParseError> {
    let mut parser = Parser::new(input)?;
    let term = parser.term()?;
    parser.at_end()?;
    Ok(term)
}

/// Parse an equation `term = term`.
///
/// # Errors
///
/// Returns a [`ParseError`] when the input is not a well-formed equation.
pub fn parse_equation(input: &str) -> Result<Equation, ParseError> {
    let mut parser = Parser::new(input)?;
    let lhs = parser.term()?;
    parser.expect(&Token::Equals)?;
    let rhs = parser.term()?;
    parser.at_end()?;
    Ok(Equation::new(lhs, rhs))
}
