//! Abstract Syntax Tree (AST) for CREATE TABLE statements
//!
//! Nodes are plain values built bottom-up by the parser and owned by their
//! parent. The root is [`CreateTableStatement`].

pub mod common;
pub mod ddl;
pub mod dml;
pub mod expressions;

pub use common::{Direction, FromClause, ObjectName};
pub use ddl::{
    ColumnDefinition, CreateTableKind, CreateTableStatement, DataType, IndexDefinition,
    IntegerSize, Partitioning, TableConstraint, TableConstraintKind, TableElement, TableOptions,
};
pub use dml::SelectStatement;
pub use expressions::{Expression, Literal, Operator};
