//! Expression tree.
//!
//! A [`BoolExpr`] is a strict tree: every node owns its children, there is
//! no sharing and no back-references.

use std::collections::HashMap;
use std::fmt;

use crate::error::EvalError;
use crate::ops::{BinaryOp, UnaryOp};

/// Assignment of boolean values to variable names.
pub type VarMap = HashMap<String, bool>;

/// A boolean expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoolExpr {
    /// Constant `true` or `false`.
    Const(bool),
    /// Free variable, resolved against a [`VarMap`] on evaluation.
    Var(String),
    /// Unary operator applied to a sub-expression.
    Unary(UnaryOp, Box<BoolExpr>),
    /// Binary operator applied to a left and a right sub-expression.
    Binary(BinaryOp, Box<BoolExpr>, Box<BoolExpr>),
}

impl BoolExpr {
    pub fn constant(value: bool) -> Self {
        BoolExpr::Const(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        BoolExpr::Var(name.into())
    }

    pub fn unary(op: UnaryOp, arg: Self) -> Self {
        BoolExpr::Unary(op, Box::new(arg))
    }

    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        BoolExpr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn not(arg: Self) -> Self {
        Self::unary(UnaryOp::Not, arg)
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::And, lhs, rhs)
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Or, lhs, rhs)
    }
}

impl BoolExpr {
    /// Free variables, deduplicated, in first-seen left-to-right order.
    pub fn vars(&self) -> Vec<&str> {
        let mut vars = Vec::new();
        self.collect_vars(&mut vars);
        vars
    }

    fn collect_vars<'a>(&'a self, vars: &mut Vec<&'a str>) {
        match self {
            BoolExpr::Const(_) => {}
            BoolExpr::Var(name) => {
                if !vars.contains(&name.as_str()) {
                    vars.push(name);
                }
            }
            BoolExpr::Unary(_, arg) => arg.collect_vars(vars),
            BoolExpr::Binary(_, lhs, rhs) => {
                lhs.collect_vars(vars);
                rhs.collect_vars(vars);
            }
        }
    }

    /// Evaluate the expression under the given assignment.
    ///
    /// Children are evaluated before their parent. A variable missing from
    /// `map` is an error, never a silent `false`.
    pub fn eval(&self, map: &VarMap) -> Result<bool, EvalError> {
        match self {
            BoolExpr::Const(value) => Ok(*value),
            BoolExpr::Var(name) => map
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),
            BoolExpr::Unary(op, arg) => Ok(op.apply(arg.eval(map)?)),
            BoolExpr::Binary(op, lhs, rhs) => {
                let x = lhs.eval(map)?;
                let y = rhs.eval(map)?;
                Ok(op.apply(x, y))
            }
        }
    }

    /// Depth of the expression tree (0 for leaves).
    pub fn depth(&self) -> usize {
        match self {
            BoolExpr::Const(_) | BoolExpr::Var(_) => 0,
            BoolExpr::Unary(_, arg) => 1 + arg.depth(),
            BoolExpr::Binary(_, lhs, rhs) => 1 + lhs.depth().max(rhs.depth()),
        }
    }

    /// Size of the expression tree (number of nodes).
    pub fn size(&self) -> usize {
        match self {
            BoolExpr::Const(_) | BoolExpr::Var(_) => 1,
            BoolExpr::Unary(_, arg) => 1 + arg.size(),
            BoolExpr::Binary(_, lhs, rhs) => 1 + lhs.size() + rhs.size(),
        }
    }
}

/// Fully parenthesised infix form. Parsing it back yields an equal tree.
impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolExpr::Const(value) => write!(f, "{}", value),
            BoolExpr::Var(name) => write!(f, "{}", name),
            BoolExpr::Unary(op, arg) => write!(f, "{} {}", op, arg),
            BoolExpr::Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}
