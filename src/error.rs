//! Error types for parsing, evaluating, and tabulating expressions.

use thiserror::Error;

/// Errors that can occur while turning a string into a [`BoolExpr`][crate::ast::BoolExpr].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no tokens at all.
    #[error("Empty expression")]
    EmptyExpression,

    /// A `)` without a matching `(`, or a `(` that is never closed.
    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    /// Wrong operand count: an operator without enough operands, or leftover operands.
    #[error("Invalid expression")]
    InvalidExpression,

    /// The tree would be nested deeper than the configured limit.
    #[error("Expression nested too deeply (limit is {limit})")]
    TooDeep { limit: usize },
}

/// Errors that can occur while evaluating an expression tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The assignment has no value for a variable used in the expression.
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),
}

/// Errors that can occur while building a [`TruthTable`][crate::table::TruthTable].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    /// The expression has more free variables than the configured limit.
    #[error("Too many variables: {found} (limit is {limit})")]
    TooManyVariables { found: usize, limit: usize },
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ParseError::EmptyExpression.to_string(), "Empty expression");
        assert_eq!(ParseError::MismatchedParentheses.to_string(), "Mismatched parentheses");
        assert_eq!(ParseError::InvalidExpression.to_string(), "Invalid expression");
        assert_eq!(
            ParseError::TooDeep { limit: 8 }.to_string(),
            "Expression nested too deeply (limit is 8)"
        );
        assert_eq!(
            EvalError::UndefinedVariable("q".to_string()).to_string(),
            "Undefined variable: q"
        );
    }

    #[test]
    fn test_table_error_is_transparent() {
        let err = TableError::from(ParseError::MismatchedParentheses);
        assert_eq!(err.to_string(), "Mismatched parentheses");
        let err = TableError::TooManyVariables { found: 25, limit: 20 };
        assert_eq!(err.to_string(), "Too many variables: 25 (limit is 20)");
    }
}
