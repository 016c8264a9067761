//! Infix to postfix conversion using the shunting-yard algorithm.

use log::trace;

use crate::error::ParseError;
use crate::token::Token;

/// Rewrite an infix token sequence into postfix (RPN) order.
///
/// Binary operators of equal precedence associate to the left, so
/// `a and b or c` becomes `a b and c or`. Parentheses never reach the output.
pub fn to_postfix<'a>(tokens: &[Token<'a>]) -> Result<Vec<Token<'a>>, ParseError> {
    let mut output: Vec<Token<'a>> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token<'a>> = Vec::new();

    for &token in tokens {
        match token {
            Token::Unary(_) | Token::LParen => stack.push(token),
            Token::Binary(op) => {
                while let Some(&top) = stack.last() {
                    let top_precedence = match top {
                        Token::Binary(other) => other.precedence(),
                        Token::Unary(other) => other.precedence(),
                        _ => break,
                    };
                    if op.precedence() > top_precedence {
                        break;
                    }
                    output.push(top);
                    stack.pop();
                }
                stack.push(token);
            }
            Token::RParen => loop {
                match stack.pop() {
                    Some(Token::LParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(ParseError::MismatchedParentheses),
                }
            },
            Token::Const(_) | Token::Var(_) => output.push(token),
        }
    }

    while let Some(top) = stack.pop() {
        if matches!(top, Token::LParen | Token::RParen) {
            return Err(ParseError::MismatchedParentheses);
        }
        output.push(top);
    }

    trace!("to_postfix: {} tokens -> {} tokens", tokens.len(), output.len());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::token::lex;

    fn postfix(input: &str) -> Result<String, ParseError> {
        let tokens = lex(input);
        let out = to_postfix(&tokens)?;
        Ok(out.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" "))
    }

    #[test]
    fn test_single_operand() {
        assert_eq!(postfix("a").unwrap(), "a");
        assert_eq!(postfix("(true)").unwrap(), "true");
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(postfix("a and b or c").unwrap(), "a b and c or");
        assert_eq!(postfix("a and b and c").unwrap(), "a b and c and");
    }

    #[test]
    fn test_higher_precedence_binds_tighter() {
        assert_eq!(postfix("a and b xor c").unwrap(), "a b c xor and");
        assert_eq!(postfix("a xor b and c").unwrap(), "a b xor c and");
    }

    #[test]
    fn test_unary_binds_to_next_operand() {
        assert_eq!(postfix("not true and false").unwrap(), "true not false and");
        assert_eq!(postfix("not not a").unwrap(), "a not not");
    }

    #[test]
    fn test_mismatched_parentheses() {
        assert_eq!(postfix("(a and b"), Err(ParseError::MismatchedParentheses));
        assert_eq!(postfix("a and b)"), Err(ParseError::MismatchedParentheses));
        assert_eq!(postfix(")("), Err(ParseError::MismatchedParentheses));
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(to_postfix(&[]), Ok(vec![]));
    }
}
