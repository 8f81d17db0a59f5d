//! Data Manipulation Language (DML) statements: SELECT
//!
//! Only queries are modelled, as the body of CREATE TABLE ... AS SELECT.

use super::common::{Direction, FromClause};
use super::expressions::Expression;

/// SELECT statement structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectStatement {
    /// DISTINCT: whether to deduplicate result rows.
    pub distinct: bool,
    /// Expressions to select, with an optional column alias.
    pub select: Vec<(Expression, Option<String>)>,
    /// FROM: tables to select from.
    pub from: Vec<FromClause>,
    /// WHERE: optional condition to filter rows.
    pub r#where: Option<Expression>,
    /// GROUP BY: expressions to group and aggregate by.
    pub group_by: Vec<Expression>,
    /// HAVING: expression to filter groups by.
    pub having: Option<Expression>,
    /// ORDER BY: expressions to sort by, with direction.
    pub order_by: Vec<(Expression, Direction)>,
    /// OFFSET: row offset to start from.
    pub offset: Option<Expression>,
    /// LIMIT: maximum number of rows to return.
    pub limit: Option<Expression>,
}
