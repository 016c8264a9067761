//! Tokenizer.
//!
//! Tokens are separated by whitespace, except `(` and `)` which always stand
//! alone. Tokenization never fails; validity is checked by the later passes.

use std::fmt;

use crate::ops::{BinaryOp, UnaryOp};

/// Split `input` into raw tokens.
///
/// ```
/// use truth_table::token::tokenize;
///
/// assert_eq!(tokenize("not(a)"), ["not", "(", "a", ")"]);
/// ```
pub fn tokenize(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    // Byte offset where the current word started, if inside one.
    let mut start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        if c.is_whitespace() || c == '(' || c == ')' {
            if let Some(s) = start.take() {
                tokens.push(&input[s..i]);
            }
            if c == '(' || c == ')' {
                tokens.push(&input[i..i + 1]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(&input[s..]);
    }

    tokens
}

/// A classified token.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Token<'a> {
    LParen,
    RParen,
    Unary(UnaryOp),
    Binary(BinaryOp),
    Const(bool),
    Var(&'a str),
}

impl<'a> Token<'a> {
    /// Classify a raw token. Anything that is not reserved is a variable name.
    pub fn classify(raw: &'a str) -> Self {
        match raw {
            "(" => Token::LParen,
            ")" => Token::RParen,
            "true" => Token::Const(true),
            "false" => Token::Const(false),
            _ => {
                if let Some(op) = UnaryOp::from_name(raw) {
                    Token::Unary(op)
                } else if let Some(op) = BinaryOp::from_name(raw) {
                    Token::Binary(op)
                } else {
                    Token::Var(raw)
                }
            }
        }
    }
}

/// Tokenize and classify `input` in one go.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    tokenize(input).into_iter().map(Token::classify).collect()
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Unary(op) => write!(f, "{}", op),
            Token::Binary(op) => write!(f, "{}", op),
            Token::Const(value) => write!(f, "{}", value),
            Token::Var(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(
            tokenize("a and (b or c)"),
            ["a", "and", "(", "b", "or", "c", ")"]
        );
    }

    #[test]
    fn test_tokenize_whitespace_insensitive() {
        assert_eq!(tokenize(" a and ( b or c ) "), tokenize("a and (b or c)"));
        assert_eq!(tokenize("a\tand\n\n b"), ["a", "and", "b"]);
    }

    #[test]
    fn test_tokenize_parens_always_split() {
        assert_eq!(tokenize("(a)"), ["(", "a", ")"]);
        assert_eq!(tokenize("((x))y"), ["(", "(", "x", ")", ")", "y"]);
        assert_eq!(tokenize(")("), [")", "("]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn test_tokenize_non_ascii() {
        assert_eq!(tokenize("α and(β)"), ["α", "and", "(", "β", ")"]);
    }

    #[test]
    fn test_classify() {
        assert_eq!(Token::classify("("), Token::LParen);
        assert_eq!(Token::classify(")"), Token::RParen);
        assert_eq!(Token::classify("not"), Token::Unary(UnaryOp::Not));
        assert_eq!(Token::classify("implies"), Token::Binary(BinaryOp::Implies));
        assert_eq!(Token::classify("true"), Token::Const(true));
        assert_eq!(Token::classify("false"), Token::Const(false));
        assert_eq!(Token::classify("True"), Token::Var("True"));
        assert_eq!(Token::classify("x1"), Token::Var("x1"));
    }

    #[test]
    fn test_lex() {
        assert_eq!(
            lex("not(p)"),
            [Token::Unary(UnaryOp::Not), Token::LParen, Token::Var("p"), Token::RParen]
        );
    }
}
