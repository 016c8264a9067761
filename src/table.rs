//! Truth table generation.
//!
//! A [`TruthTable`] is built once from an expression string and never
//! changes afterwards. Data rows enumerate every assignment of the free
//! variables in binary-counting order, with the first variable as the most
//! significant bit.

use log::debug;

use crate::ast::{BoolExpr, VarMap};
use crate::error::TableError;
use crate::parser::{parse_infix_bounded, DEFAULT_MAX_DEPTH};

/// Hard ceiling on [`TableConfig::max_vars`]: `2^30` rows is already far past usable.
pub const MAX_VARS_CEILING: usize = 30;

/// Limits applied when building a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Maximum number of distinct free variables, clamped to [`MAX_VARS_CEILING`].
    /// The table has `2^max_vars` rows at most.
    pub max_vars: usize,
    /// Maximum nesting depth of the parsed expression.
    pub max_depth: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_vars: 20,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TableConfig {
    pub fn new(max_vars: usize, max_depth: usize) -> Self {
        Self {
            max_vars: max_vars.min(MAX_VARS_CEILING),
            max_depth,
        }
    }

    /// Limits for callers that know what they are doing.
    pub fn permissive() -> Self {
        Self::new(MAX_VARS_CEILING, 4 * DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_vars(mut self, max_vars: usize) -> Self {
        self.max_vars = max_vars.min(MAX_VARS_CEILING);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Variable limit actually enforced, even if `max_vars` was set directly.
    fn vars_limit(&self) -> usize {
        self.max_vars.min(MAX_VARS_CEILING)
    }
}

/// All `2^n` combinations of `false`/`true` of length `n`.
///
/// `combinations(n)` is every combination of length `n - 1` prefixed with
/// `false`, followed by every one prefixed with `true`.
///
/// ```
/// use truth_table::table::combinations;
///
/// assert_eq!(
///     combinations(2),
///     [[false, false], [false, true], [true, false], [true, true]]
/// );
/// ```
pub fn combinations(n: usize) -> Vec<Vec<bool>> {
    if n == 0 {
        return vec![vec![]];
    }
    let rest = combinations(n - 1);
    [false, true]
        .into_iter()
        .flat_map(|first| {
            rest.iter().map(move |tail| {
                let mut row = Vec::with_capacity(n);
                row.push(first);
                row.extend_from_slice(tail);
                row
            })
        })
        .collect()
}

/// Truth table of a single expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    source: String,
    expr: BoolExpr,
    vars: Vec<String>,
    /// Each row is the assignment (in `vars` order) followed by the result.
    rows: Vec<Vec<bool>>,
}

impl TruthTable {
    /// Parse `source` and tabulate it with the default [`TableConfig`].
    pub fn new(source: &str) -> Result<Self, TableError> {
        Self::with_config(source, &TableConfig::default())
    }

    pub fn with_config(source: &str, config: &TableConfig) -> Result<Self, TableError> {
        let expr = parse_infix_bounded(source, config.max_depth)?;
        Self::from_expr(source, expr, config)
    }

    /// Tabulate an already parsed expression. `source` is used for the header.
    ///
    /// `config.max_depth` is not checked here; it applies when parsing.
    pub fn from_expr(source: &str, expr: BoolExpr, config: &TableConfig) -> Result<Self, TableError> {
        let vars: Vec<String> = expr.vars().into_iter().map(String::from).collect();
        let limit = config.vars_limit();
        if vars.len() > limit {
            return Err(TableError::TooManyVariables {
                found: vars.len(),
                limit,
            });
        }
        debug!("tabulating {:?} over {} variables", source, vars.len());

        let assignments = combinations(vars.len());
        let mut rows = Vec::with_capacity(assignments.len());
        for mut row in assignments {
            let map: VarMap = vars.iter().cloned().zip(row.iter().copied()).collect();
            let result = expr.eval(&map)?;
            row.push(result);
            rows.push(row);
        }

        Ok(Self {
            source: source.to_string(),
            expr,
            vars,
            rows,
        })
    }
}

impl TruthTable {
    /// The expression string as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn expr(&self) -> &BoolExpr {
        &self.expr
    }

    /// Free variables, in column order.
    pub fn vars(&self) -> &[String] {
        &self.vars
    }

    /// Variable names followed by the source string.
    pub fn header(&self) -> Vec<&str> {
        self.vars
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.source.as_str()))
            .collect()
    }

    /// Data rows, without the header.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Header row followed by data rows, with booleans spelled `true`/`false`.
    pub fn string_rows(&self) -> Vec<Vec<String>> {
        let header = self.header().into_iter().map(String::from).collect();
        std::iter::once(header)
            .chain(
                self.rows
                    .iter()
                    .map(|row| row.iter().map(|b| b.to_string()).collect()),
            )
            .collect()
    }

    /// Number of data rows, `2^n` for `n` variables.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false`: even a closed expression has one data row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Result column.
    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().filter_map(|row| row.last().copied())
    }

    /// Number of assignments under which the expression is true.
    pub fn count_true(&self) -> usize {
        self.results().filter(|&b| b).count()
    }

    pub fn is_tautology(&self) -> bool {
        self.results().all(|b| b)
    }

    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    pub fn is_satisfiable(&self) -> bool {
        self.results().any(|b| b)
    }
}
