//! # truth-table: truth tables for propositional logic
//!
//! **`truth-table`** parses infix boolean expressions such as `a and (b implies not c)`
//! and tabulates their value under every assignment of their free variables.
//!
//! ## Pipeline
//!
//! 1. [`token`]: split the input into raw tokens and classify them.
//! 2. [`postfix`]: reorder the tokens into postfix form (shunting-yard).
//! 3. [`parser`]: build a [`BoolExpr`][crate::ast::BoolExpr] tree from the postfix form.
//! 4. [`table`]: evaluate the tree under all `2^n` assignments.
//! 5. [`render`]: print the table as text, HTML, or CSV.
//!
//! ## Syntax
//!
//! - Constants: `true`, `false`
//! - Unary operator: `not`
//! - Binary operators: `and`, `or` (precedence 1); `nand`, `implies`, `eq`, `xor` (precedence 2)
//! - Parentheses, which need no surrounding whitespace
//! - Anything else is a variable name
//!
//! Operators of equal precedence group left to right, so `a and b or c` is `(a and b) or c`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table::table::TruthTable;
//!
//! let table = TruthTable::new("p implies q").unwrap();
//!
//! assert_eq!(table.header(), ["p", "q", "p implies q"]);
//! assert_eq!(
//!     table.rows(),
//!     [
//!         [false, false, true],
//!         [false, true, true],
//!         [true, false, false],
//!         [true, true, true],
//!     ]
//! );
//! assert!(table.is_satisfiable());
//! assert!(!table.is_tautology());
//! ```

pub mod ast;
pub mod error;
pub mod ops;
pub mod parser;
pub mod postfix;
pub mod render;
pub mod table;
pub mod token;
