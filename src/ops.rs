//! Operator table.
//!
//! Every operator keyword is either a [`UnaryOp`] or a [`BinaryOp`], never both.
//! Precedence is used by the shunting-yard pass: a higher value binds tighter.

use std::fmt;

/// Operators taking a single operand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Not,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 1] = [UnaryOp::Not];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "not" => Some(UnaryOp::Not),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Not => "not",
        }
    }

    /// Precedence of the operator.
    ///
    /// Unary operators go straight onto the operator stack, so this is never compared.
    pub fn precedence(self) -> u8 {
        match self {
            UnaryOp::Not => 3,
        }
    }

    pub fn apply(self, x: bool) -> bool {
        match self {
            UnaryOp::Not => !x,
        }
    }
}

/// Operators taking two operands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Nand,
    Implies,
    Eq,
    Xor,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 6] = [
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Nand,
        BinaryOp::Implies,
        BinaryOp::Eq,
        BinaryOp::Xor,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "and" => Some(BinaryOp::And),
            "or" => Some(BinaryOp::Or),
            "nand" => Some(BinaryOp::Nand),
            "implies" => Some(BinaryOp::Implies),
            "eq" => Some(BinaryOp::Eq),
            "xor" => Some(BinaryOp::Xor),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Nand => "nand",
            BinaryOp::Implies => "implies",
            BinaryOp::Eq => "eq",
            BinaryOp::Xor => "xor",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::And | BinaryOp::Or => 1,
            BinaryOp::Nand | BinaryOp::Implies | BinaryOp::Eq | BinaryOp::Xor => 2,
        }
    }

    /// Apply the operator. Operand order matters for `implies`.
    pub fn apply(self, x: bool, y: bool) -> bool {
        match self {
            BinaryOp::And => x && y,
            BinaryOp::Or => x || y,
            BinaryOp::Nand => !(x && y),
            BinaryOp::Implies => !x || y,
            BinaryOp::Eq => x == y,
            BinaryOp::Xor => x != y,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_names_round_trip() {
        for op in UnaryOp::ALL {
            assert_eq!(UnaryOp::from_name(op.name()), Some(op));
        }
        for op in BinaryOp::ALL {
            assert_eq!(BinaryOp::from_name(op.name()), Some(op));
        }
    }

    #[test]
    fn test_tables_are_disjoint() {
        for op in UnaryOp::ALL {
            assert_eq!(BinaryOp::from_name(op.name()), None);
        }
        for op in BinaryOp::ALL {
            assert_eq!(UnaryOp::from_name(op.name()), None);
        }
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(BinaryOp::from_name("AND"), None);
        assert_eq!(BinaryOp::from_name("true"), None);
        assert_eq!(UnaryOp::from_name("x"), None);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(BinaryOp::And.precedence(), 1);
        assert_eq!(BinaryOp::Or.precedence(), 1);
        assert_eq!(BinaryOp::Nand.precedence(), 2);
        assert_eq!(BinaryOp::Implies.precedence(), 2);
        assert_eq!(BinaryOp::Eq.precedence(), 2);
        assert_eq!(BinaryOp::Xor.precedence(), 2);
        assert_eq!(UnaryOp::Not.precedence(), 3);
    }

    #[test]
    fn test_apply() {
        let cases = [(false, false), (false, true), (true, false), (true, true)];
        let table = |op: BinaryOp| cases.map(|(x, y)| op.apply(x, y));

        assert_eq!(table(BinaryOp::And), [false, false, false, true]);
        assert_eq!(table(BinaryOp::Or), [false, true, true, true]);
        assert_eq!(table(BinaryOp::Nand), [true, true, true, false]);
        assert_eq!(table(BinaryOp::Implies), [true, true, false, true]);
        assert_eq!(table(BinaryOp::Eq), [true, false, false, true]);
        assert_eq!(table(BinaryOp::Xor), [false, true, true, false]);

        assert!(UnaryOp::Not.apply(false));
        assert!(!UnaryOp::Not.apply(true));
    }
}
