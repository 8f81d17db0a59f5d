//! DML (Data Manipulation Language) parser module
//!
//! Handles parsing of the SELECT query that may trail a CREATE TABLE.

use super::super::{Keyword, Token};
use super::expr_parser::ExpressionParser;
use crate::error::Result;
use crate::parsing::ast::{Direction, Expression, FromClause, SelectStatement};

/// Type alias for the SELECT clause: DISTINCT flag and aliased expressions.
type SelectClauseResult = (bool, Vec<(Expression, Option<String>)>);

/// Parser trait for SELECT queries
pub trait SelectParser: ExpressionParser {
    /// Parses a SELECT query, starting at the SELECT keyword.
    fn parse_select(&mut self) -> Result<SelectStatement> {
        let (distinct, select) = self.parse_select_clause()?;
        let from = self.parse_from_clause()?;
        let r#where = self.parse_where_clause()?;
        let group_by = self.parse_group_by_clause()?;
        let having = self.parse_having_clause()?;
        let order_by = self.parse_order_by_clause()?;
        let (offset, limit) = self.parse_limit_offset_clause()?;
        Ok(SelectStatement {
            distinct,
            select,
            from,
            r#where,
            group_by,
            having,
            order_by,
            offset,
            limit,
        })
    }

    /// Parses the SELECT clause.
    fn parse_select_clause(&mut self) -> Result<SelectClauseResult> {
        self.expect(Keyword::Select.into())?;
        let distinct = self.next_is(Keyword::Distinct.into());

        let mut select = Vec::new();
        loop {
            let expr = self.parse_expression()?;
            let mut alias = None;
            if self.next_is(Keyword::As.into()) || self.peek_is_name() {
                if expr == Expression::All {
                    return Err(self.syntax_error("no alias after *"));
                }
                alias = Some(self.expect_ident("column alias")?);
            }
            select.push((expr, alias));
            if !self.next_is(Token::Comma) {
                break;
            }
        }
        Ok((distinct, select))
    }

    /// Parses a FROM clause, if present. Tables are comma-separated.
    fn parse_from_clause(&mut self) -> Result<Vec<FromClause>> {
        let mut from = Vec::new();
        if !self.next_is(Keyword::From.into()) {
            return Ok(from);
        }
        loop {
            from.push(self.parse_from_table()?);
            if !self.next_is(Token::Comma) {
                break;
            }
        }
        Ok(from)
    }

    /// Parses a FROM table with an optional alias.
    fn parse_from_table(&mut self) -> Result<FromClause> {
        let name = self.parse_qualified_name()?;
        let mut alias = None;
        if self.next_is(Keyword::As.into()) || self.peek_is_name() {
            alias = Some(self.expect_ident("table alias")?);
        }
        Ok(FromClause::Table { name, alias })
    }

    /// Parses a WHERE clause, if present.
    fn parse_where_clause(&mut self) -> Result<Option<Expression>> {
        if !self.next_is(Keyword::Where.into()) {
            return Ok(None);
        }
        Ok(Some(self.parse_expression()?))
    }

    /// Parses a GROUP BY clause, if present.
    fn parse_group_by_clause(&mut self) -> Result<Vec<Expression>> {
        let mut group_by = Vec::new();
        if !self.next_is(Keyword::Group.into()) {
            return Ok(group_by);
        }
        self.expect(Keyword::By.into())?;
        loop {
            group_by.push(self.parse_expression()?);
            if !self.next_is(Token::Comma) {
                break;
            }
        }
        Ok(group_by)
    }

    /// Parses a HAVING clause, if present.
    fn parse_having_clause(&mut self) -> Result<Option<Expression>> {
        if !self.next_is(Keyword::Having.into()) {
            return Ok(None);
        }
        Ok(Some(self.parse_expression()?))
    }

    /// Parses an ORDER BY clause, if present.
    fn parse_order_by_clause(&mut self) -> Result<Vec<(Expression, Direction)>> {
        let mut order_by = Vec::new();
        if !self.next_is(Keyword::Order.into()) {
            return Ok(order_by);
        }
        self.expect(Keyword::By.into())?;
        loop {
            let expr = self.parse_expression()?;
            let direction = self
                .next_if_map(|token| match token {
                    Token::Keyword(Keyword::Asc) => Some(Direction::Asc),
                    Token::Keyword(Keyword::Desc) => Some(Direction::Desc),
                    _ => None,
                })
                .unwrap_or_default();
            order_by.push((expr, direction));
            if !self.next_is(Token::Comma) {
                break;
            }
        }
        Ok(order_by)
    }

    /// Parses `LIMIT count [OFFSET offset]` or `LIMIT offset, count`.
    /// Returns (offset, limit).
    fn parse_limit_offset_clause(&mut self) -> Result<(Option<Expression>, Option<Expression>)> {
        if !self.next_is(Keyword::Limit.into()) {
            return Ok((None, None));
        }
        let first = self.parse_expression()?;
        if self.next_is(Token::Comma) {
            let limit = self.parse_expression()?;
            return Ok((Some(first), Some(limit)));
        }
        let offset = if self.next_is(Keyword::Offset.into()) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        Ok((offset, Some(first)))
    }
}
