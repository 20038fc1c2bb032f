//! Equation lexer
//!
//! Tokenizes the surface syntax using the logos crate.

use logos::Logos;
use std::fmt;

/// Surface tokens
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token<'a> {
    /// Addition sign
    #[token("+")]
    Plus,

    /// Subtraction / negation sign
    #[token("-")]
    Minus,

    /// Equation separator
    #[token("=")]
    Equals,

    /// Left parenthesis
    #[token("(")]
    LParen,

    /// Right parenthesis
    #[token(")")]
    RParen,

    /// Non-negative integer coefficient
    #[regex(r"[0-9]+", |lex| lex.slice())]
    Numeral(&'a str),

    /// Variable name: alphabetic first character, alphanumeric rest
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice())]
    Symbol(&'a str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Equals => write!(f, "="),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Numeral(text) | Token::Symbol(text) => write!(f, "{text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokens() {
        let input = "2x + y = 3z";
        let tokens: Vec<Token> = Token::lexer(input).map(Result::unwrap).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Numeral("2"),
                Token::Symbol("x"),
                Token::Plus,
                Token::Symbol("y"),
                Token::Equals,
                Token::Numeral("3"),
                Token::Symbol("z"),
            ]
        );
    }

    #[test]
    fn test_signs_and_parens() {
        let input = "-(x - 41y)";
        let tokens: Vec<Token> = Token::lexer(input).map(Result::unwrap).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Minus,
                Token::LParen,
                Token::Symbol("x"),
                Token::Minus,
                Token::Numeral("41"),
                Token::Symbol("y"),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_multicharacter_names() {
        let input = "speed2 = g10";
        let tokens: Vec<Token> = Token::lexer(input).map(Result::unwrap).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Symbol("speed2"),
                Token::Equals,
                Token::Symbol("g10"),
            ]
        );
    }

    #[test]
    fn test_unrecognized_character() {
        let mut lexer = Token::lexer("x ? y");
        assert_eq!(lexer.next(), Some(Ok(Token::Symbol("x"))));
        assert_eq!(lexer.next(), Some(Err(())));
    }
}
