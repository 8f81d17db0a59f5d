//! Expression parser module
//!
//! Handles parsing of SQL expressions, names, column definitions and the
//! key column lists shared by indexes and constraints.

use std::ops::Add;

use super::super::{Keyword, Token};
use super::type_parser::TypeParser;
use crate::error::{Error, Result};
use crate::parsing::ast::{
    ColumnDefinition, Expression, Literal, ObjectName, Operator, TableConstraint,
    TableConstraintKind,
};

/// Operator precedence.
pub type Precedence = u8;

/// Maximum nesting of expressions, e.g. parentheses or prefix operators.
/// Deeper input is rejected instead of exhausting the stack.
pub const MAX_EXPRESSION_DEPTH: usize = 128;

/// Operator associativity.
pub enum Associativity {
    Left,
    Right,
}

impl Add<Associativity> for Precedence {
    type Output = Self;

    fn add(self, rhs: Associativity) -> Self {
        // Left-associative operators have increased precedence, so they bind
        // tighter to their left-hand side.
        self + match rhs {
            Associativity::Left => 1,
            Associativity::Right => 0,
        }
    }
}

/// Prefix operators.
pub enum PrefixOperator {
    Minus, // -a
    Not,   // NOT a
    Plus,  // +a
}

impl PrefixOperator {
    /// The operator precedence.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Not => 3,
            Self::Minus | Self::Plus => 10,
        }
    }

    // Prefix operators are right-associative by definition.
    pub fn associativity(&self) -> Associativity {
        Associativity::Right
    }

    /// Builds an AST expression for the operator.
    pub fn into_expression(self, rhs: Expression) -> Expression {
        let rhs = Box::new(rhs);
        match self {
            Self::Plus => Operator::Identity(rhs).into(),
            Self::Minus => Operator::Negate(rhs).into(),
            Self::Not => Operator::Not(rhs).into(),
        }
    }
}

/// Infix operators.
pub enum InfixOperator {
    Add,                // a + b
    And,                // a AND b
    Divide,             // a / b
    Equal,              // a = b
    GreaterThan,        // a > b
    GreaterThanOrEqual, // a >= b
    LessThan,           // a < b
    LessThanOrEqual,    // a <= b
    Multiply,           // a * b
    NotEqual,           // a != b
    Or,                 // a OR b
    Remainder,          // a % b
    Subtract,           // a - b
}

impl InfixOperator {
    /// The operator precedence. IS shares the precedence of =.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Or => 1,
            Self::And => 2,
            // Self::Not => 3
            Self::Equal | Self::NotEqual => 4,
            Self::GreaterThan
            | Self::GreaterThanOrEqual
            | Self::LessThan
            | Self::LessThanOrEqual => 5,
            Self::Add | Self::Subtract => 6,
            Self::Multiply | Self::Divide | Self::Remainder => 7,
        }
    }

    /// The operator associativity.
    pub fn associativity(&self) -> Associativity {
        Associativity::Left
    }

    /// Builds an AST expression for the infix operator.
    pub fn into_expression(self, lhs: Expression, rhs: Expression) -> Expression {
        let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));
        match self {
            Self::Add => Operator::Add(lhs, rhs).into(),
            Self::And => Operator::And(lhs, rhs).into(),
            Self::Divide => Operator::Divide(lhs, rhs).into(),
            Self::Equal => Operator::Equal(lhs, rhs).into(),
            Self::GreaterThan => Operator::GreaterThan(lhs, rhs).into(),
            Self::GreaterThanOrEqual => Operator::GreaterThanOrEqual(lhs, rhs).into(),
            Self::LessThan => Operator::LessThan(lhs, rhs).into(),
            Self::LessThanOrEqual => Operator::LessThanOrEqual(lhs, rhs).into(),
            Self::Multiply => Operator::Multiply(lhs, rhs).into(),
            Self::NotEqual => Operator::NotEqual(lhs, rhs).into(),
            Self::Or => Operator::Or(lhs, rhs).into(),
            Self::Remainder => Operator::Remainder(lhs, rhs).into(),
            Self::Subtract => Operator::Subtract(lhs, rhs).into(),
        }
    }
}

/// Postfix operators.
pub enum PostfixOperator {
    IsNull,    // a IS NULL
    IsNotNull, // a IS NOT NULL
}

impl PostfixOperator {
    // The operator precedence.
    pub fn precedence(&self) -> Precedence {
        4
    }

    /// Builds an AST expression for the operator.
    pub fn into_expression(self, lhs: Expression) -> Expression {
        let is_null = Operator::Is(Box::new(lhs), Literal::Null);
        match self {
            Self::IsNull => is_null.into(),
            Self::IsNotNull => Operator::Not(is_null.into()).into(),
        }
    }
}

/// Parser trait for expressions, names and column definitions.
pub trait ExpressionParser: TypeParser {
    /// The current expression nesting depth.
    fn expression_depth(&mut self) -> &mut usize;

    /// Parses an expression using precedence climbing: operators bind to the
    /// left-hand side as long as their precedence is at least that of the
    /// upstack operator.
    fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_expression_at(0)
    }

    /// Parses an expression at the given minimum precedence. Nesting deeper
    /// than `MAX_EXPRESSION_DEPTH` is a syntax error.
    fn parse_expression_at(&mut self, min_precedence: Precedence) -> Result<Expression> {
        if *self.expression_depth() >= MAX_EXPRESSION_DEPTH {
            return Err(self.syntax_error("expression nesting within limit"));
        }
        *self.expression_depth() += 1;
        let result = self.parse_operators_at(min_precedence);
        *self.expression_depth() -= 1;
        result
    }

    /// Parses prefix, infix and postfix operators around atoms.
    fn parse_operators_at(&mut self, min_precedence: Precedence) -> Result<Expression> {
        // If the left-hand side is a prefix operator, recursively parse it and
        // its operand. Otherwise, parse the left-hand side as an atom.
        let mut lhs = if let Some(prefix) = self.parse_prefix_operator_at(min_precedence) {
            let next_precedence = prefix.precedence() + prefix.associativity();
            let rhs = self.parse_expression_at(next_precedence)?;
            prefix.into_expression(rhs)
        } else {
            self.parse_expression_atom()?
        };

        while let Some(postfix) = self.parse_postfix_operator_at(min_precedence)? {
            lhs = postfix.into_expression(lhs)
        }

        while let Some(infix) = self.parse_infix_operator_at(min_precedence) {
            let next_precedence = infix.precedence() + infix.associativity();
            let rhs = self.parse_expression_at(next_precedence)?;
            lhs = infix.into_expression(lhs, rhs);
        }

        // Consider e.g. 1 + NULL IS NULL.
        while let Some(postfix) = self.parse_postfix_operator_at(min_precedence)? {
            lhs = postfix.into_expression(lhs)
        }

        Ok(lhs)
    }

    /// Parses an expression atom. This is either:
    ///
    /// * A literal value.
    /// * A column name.
    /// * A function call.
    /// * A parenthesized expression.
    fn parse_expression_atom(&mut self) -> Result<Expression> {
        if self.peek()?.is_none() {
            return Err(self.syntax_error("expression"));
        }
        let offset = self.offset();
        Ok(match self.next()? {
            // All columns, or the argument of COUNT(*).
            Token::Asterisk => Expression::All,

            Token::Number(n) if n.chars().all(|c| c.is_ascii_digit()) => match n.parse::<i64>() {
                Ok(value) => Literal::Integer(value).into(),
                Err(_) => {
                    return Err(Error::Syntax {
                        expected: "integer within 64-bit range".into(),
                        found: Some(Token::Number(n)),
                        offset,
                    })
                }
            },
            Token::Number(n) => match n.parse::<f64>() {
                Ok(value) => Literal::Float(value).into(),
                Err(_) => {
                    return Err(Error::Syntax {
                        expected: "numeric literal".into(),
                        found: Some(Token::Number(n)),
                        offset,
                    })
                }
            },
            Token::String(s) => Literal::String(s).into(),
            Token::Keyword(Keyword::True) => Literal::Boolean(true).into(),
            Token::Keyword(Keyword::False) => Literal::Boolean(false).into(),
            Token::Keyword(Keyword::Null) => Literal::Null.into(),

            // Function call.
            Token::Ident(name) | Token::QuotedIdent(name) if self.next_is(Token::OpenParen) => {
                let mut args = Vec::new();
                while !self.next_is(Token::CloseParen) {
                    if !args.is_empty() {
                        self.expect(Token::Comma)?;
                    }
                    args.push(self.parse_expression()?);
                }
                Expression::Function(name, args)
            }

            // Column name, either qualified as table.column or unqualified.
            Token::Ident(table) | Token::QuotedIdent(table) if self.next_is(Token::Period) => {
                Expression::Column(Some(table), self.expect_ident("column name")?)
            }
            Token::Ident(column) | Token::QuotedIdent(column) => Expression::Column(None, column),

            // Parenthesized expression.
            Token::OpenParen => {
                let expr = self.parse_expression()?;
                self.expect(Token::CloseParen)?;
                expr
            }

            token => {
                return Err(Error::Syntax {
                    expected: "expression".into(),
                    found: Some(token),
                    offset,
                })
            }
        })
    }

    /// Parses a prefix operator, if there is one and its precedence is at least
    /// min_precedence.
    fn parse_prefix_operator_at(&mut self, min_precedence: Precedence) -> Option<PrefixOperator> {
        self.next_if_map(|token| {
            let operator = match token {
                Token::Keyword(Keyword::Not) => PrefixOperator::Not,
                Token::Minus => PrefixOperator::Minus,
                Token::Plus => PrefixOperator::Plus,
                _ => return None,
            };
            Some(operator).filter(|op| op.precedence() >= min_precedence)
        })
    }

    /// Parses an infix operator, if there is one and its precedence is at least
    /// min_precedence.
    fn parse_infix_operator_at(&mut self, min_precedence: Precedence) -> Option<InfixOperator> {
        self.next_if_map(|token| {
            let operator = match token {
                Token::Asterisk => InfixOperator::Multiply,
                Token::Equal => InfixOperator::Equal,
                Token::GreaterThan => InfixOperator::GreaterThan,
                Token::GreaterThanOrEqual => InfixOperator::GreaterThanOrEqual,
                Token::Keyword(Keyword::And) => InfixOperator::And,
                Token::Keyword(Keyword::Or) => InfixOperator::Or,
                Token::LessThan => InfixOperator::LessThan,
                Token::LessThanOrEqual => InfixOperator::LessThanOrEqual,
                Token::Minus => InfixOperator::Subtract,
                Token::NotEqual => InfixOperator::NotEqual,
                Token::Percent => InfixOperator::Remainder,
                Token::Plus => InfixOperator::Add,
                Token::Slash => InfixOperator::Divide,
                _ => return None,
            };
            Some(operator).filter(|op| op.precedence() >= min_precedence)
        })
    }

    /// Parses IS [NOT] NULL, if present and its precedence is at least
    /// min_precedence.
    fn parse_postfix_operator_at(
        &mut self,
        min_precedence: Precedence,
    ) -> Result<Option<PostfixOperator>> {
        if self.peek()? != Some(&Token::Keyword(Keyword::Is)) {
            return Ok(None);
        }
        // Nothing may be consumed unless the precedence is satisfied.
        if PostfixOperator::IsNull.precedence() < min_precedence {
            return Ok(None);
        }
        self.expect(Keyword::Is.into())?;
        let not = self.next_is(Keyword::Not.into());
        self.expect(Keyword::Null.into())?;
        Ok(Some(match not {
            false => PostfixOperator::IsNull,
            true => PostfixOperator::IsNotNull,
        }))
    }

    /// Parses a single unqualified name.
    fn parse_name(&mut self) -> Result<String> {
        self.expect_ident("name")
    }

    /// Parses a dotted name such as `db.table`.
    fn parse_qualified_name(&mut self) -> Result<ObjectName> {
        let mut parts = vec![self.parse_name()?];
        while self.next_is(Token::Period) {
            parts.push(self.parse_name()?);
        }
        Ok(ObjectName(parts))
    }

    /// Parses a string literal, e.g. a COMMENT value.
    fn parse_string_literal(&mut self) -> Result<String> {
        match self.next_if_map(|token| match token {
            Token::String(s) => Some(s.clone()),
            _ => None,
        }) {
            Some(s) => Ok(s),
            None => Err(self.syntax_error("string literal")),
        }
    }

    /// Parses a column definition: a name, a data type and any column
    /// constraints, in any order.
    fn parse_column_definition(&mut self) -> Result<ColumnDefinition> {
        let name = self.parse_name()?;
        let mut column = ColumnDefinition::new(name, self.parse_type()?);
        loop {
            let offset = self.offset();
            if let Some(nullable) = self.parse_nullability()? {
                if column.nullable.is_some() {
                    return Err(Error::Syntax {
                        expected: "a single NULL or NOT NULL per column".into(),
                        found: Some(Keyword::Null.into()),
                        offset,
                    });
                }
                column.nullable = Some(nullable);
            } else if self.next_is(Keyword::Default.into()) {
                column.default = Some(self.parse_expression()?);
            } else if self.next_is(Keyword::Primary.into()) {
                self.expect(Keyword::Key.into())?;
                column.primary_key = true;
            } else if self.next_is(Keyword::Unique.into()) {
                self.skip(Keyword::Key.into());
                column.unique = true;
            } else if self.next_if_ident_eq("AUTO_INCREMENT") {
                column.auto_increment = true;
            } else if self.next_if_ident_eq("COMMENT") {
                column.comment = Some(self.parse_string_literal()?);
            } else {
                break;
            }
        }
        Ok(column)
    }

    /// Parses NULL or NOT NULL, if present.
    fn parse_nullability(&mut self) -> Result<Option<bool>> {
        if self.next_is(Keyword::Not.into()) {
            self.expect(Keyword::Null.into())?;
            return Ok(Some(false));
        }
        Ok(self.next_is(Keyword::Null.into()).then_some(true))
    }

    /// Parses `PRIMARY KEY [USING type] (columns) [USING type]`.
    fn parse_primary_key_constraint(&mut self, name: Option<String>) -> Result<TableConstraint> {
        self.expect(Keyword::Primary.into())?;
        self.expect(Keyword::Key.into())?;
        let mut index_type = self.parse_index_type()?;
        let columns = self.parse_index_columns()?;
        if index_type.is_none() {
            index_type = self.parse_index_type()?;
        }
        Ok(TableConstraint {
            name,
            kind: TableConstraintKind::PrimaryKey {
                index_type,
                columns,
            },
        })
    }

    /// Parses `USING <type>`, if present. USING is matched on identifier text.
    fn parse_index_type(&mut self) -> Result<Option<String>> {
        if !self.next_if_ident_eq("USING") {
            return Ok(None);
        }
        self.expect_ident("index type").map(Some)
    }

    /// Parses a parenthesized, non-empty list of key columns. ASC and DESC are
    /// accepted after each column but not recorded.
    fn parse_index_columns(&mut self) -> Result<Vec<Expression>> {
        self.expect(Token::OpenParen)?;
        if self.peek()? == Some(&Token::CloseParen) {
            return Err(self.syntax_error("at least one index column"));
        }
        let mut columns = Vec::new();
        loop {
            columns.push(self.parse_expression()?);
            self.next_if(|t| matches!(t, Token::Keyword(Keyword::Asc | Keyword::Desc)));
            if !self.next_is(Token::Comma) {
                break;
            }
        }
        self.expect(Token::CloseParen)?;
        Ok(columns)
    }
}
