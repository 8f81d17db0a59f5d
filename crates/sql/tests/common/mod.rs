//! Common test utilities for CREATE TABLE integration tests
#![allow(dead_code)]

use dialect_sql::ast::{CreateTableStatement, Expression, TableElement};
use dialect_sql::{parse_create_table, Dialect, Error};

/// Test context that parses statements with a fixed dialect
pub struct TestContext {
    pub dialect: Dialect,
}

impl TestContext {
    /// Create a new test context for the given dialect
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Parse a statement, panicking with the error message on failure
    pub fn parse(&self, sql: &str) -> CreateTableStatement {
        parse_create_table(sql, self.dialect)
            .unwrap_or_else(|err| panic!("failed to parse {sql:?}: {err}"))
    }

    /// Parse a statement that must fail, returning the error
    pub fn parse_err(&self, sql: &str) -> Error {
        match parse_create_table(sql, self.dialect) {
            Ok(stmt) => panic!("expected {sql:?} to fail, parsed {stmt:?}"),
            Err(err) => err,
        }
    }
}

/// Setup a MySQL test context
pub fn setup_test() -> TestContext {
    TestContext::new(Dialect::MySql)
}

/// Short labels for the element list, in order
pub fn element_kinds(stmt: &CreateTableStatement) -> Vec<&'static str> {
    stmt.elements
        .iter()
        .map(|element| match element {
            TableElement::Column(_) => "column",
            TableElement::Constraint(_) => "constraint",
            TableElement::Index(_) => "index",
        })
        .collect()
}

/// Unqualified column references
pub fn columns(names: &[&str]) -> Vec<Expression> {
    names.iter().map(|name| Expression::column(*name)).collect()
}
