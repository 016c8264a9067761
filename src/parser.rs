//! Building expression trees from infix strings.

use std::str::FromStr;

use log::debug;

use crate::ast::BoolExpr;
use crate::error::ParseError;
use crate::postfix::to_postfix;
use crate::token::{lex, Token};

/// Deepest tree [`parse_infix`] and [`build_tree`] accept.
///
/// Every walk over a [`BoolExpr`] recurses once per level, so this bounds stack use.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Build a tree from a postfix token sequence.
///
/// For example, `true false or not` is `not (true or false)`.
pub fn build_tree(postfix: &[Token<'_>]) -> Result<BoolExpr, ParseError> {
    build_tree_bounded(postfix, DEFAULT_MAX_DEPTH)
}

/// Like [`build_tree`], but fails with [`ParseError::TooDeep`] once a node
/// would sit more than `max_depth` levels above its deepest leaf.
pub fn build_tree_bounded(postfix: &[Token<'_>], max_depth: usize) -> Result<BoolExpr, ParseError> {
    // Each operand is kept together with its depth.
    let mut stack: Vec<(BoolExpr, usize)> = Vec::new();

    for &token in postfix {
        let (node, depth) = match token {
            Token::Unary(op) => {
                let (arg, d) = stack.pop().ok_or(ParseError::InvalidExpression)?;
                (BoolExpr::unary(op, arg), d + 1)
            }
            Token::Binary(op) => {
                let (rhs, dr) = stack.pop().ok_or(ParseError::InvalidExpression)?;
                let (lhs, dl) = stack.pop().ok_or(ParseError::InvalidExpression)?;
                (BoolExpr::binary(op, lhs, rhs), dl.max(dr) + 1)
            }
            Token::Const(value) => (BoolExpr::constant(value), 0),
            Token::Var(name) => (BoolExpr::var(name), 0),
            // Parentheses never survive the shunting-yard pass.
            Token::LParen | Token::RParen => return Err(ParseError::MismatchedParentheses),
        };
        if depth > max_depth {
            return Err(ParseError::TooDeep { limit: max_depth });
        }
        stack.push((node, depth));
    }

    let (root, _) = stack.pop().ok_or(ParseError::InvalidExpression)?;
    if !stack.is_empty() {
        return Err(ParseError::InvalidExpression);
    }
    Ok(root)
}

/// Parse a boolean expression written in infix notation.
///
/// ```
/// use truth_table::parser::parse_infix;
///
/// let e = parse_infix("not (a or b)").unwrap();
/// assert_eq!(e.vars(), ["a", "b"]);
/// ```
pub fn parse_infix(input: &str) -> Result<BoolExpr, ParseError> {
    parse_infix_bounded(input, DEFAULT_MAX_DEPTH)
}

pub fn parse_infix_bounded(input: &str, max_depth: usize) -> Result<BoolExpr, ParseError> {
    let tokens = lex(input);
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    let postfix = to_postfix(&tokens)?;
    let expr = build_tree_bounded(&postfix, max_depth)?;
    debug!("parse_infix({:?}) = {}", input, expr);
    Ok(expr)
}

impl FromStr for BoolExpr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_infix(s)
    }
}
