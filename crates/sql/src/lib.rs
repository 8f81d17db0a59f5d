//! A dialect-extensible CREATE TABLE parser
//!
//! This crate turns a `CREATE TABLE` statement into a typed syntax tree:
//! - A generic base grammar covers names, columns, PRIMARY KEY and the
//!   trailing `AS SELECT`
//! - The MySQL grammar adds inline indexes, KEY constraints, table options
//!   and `PARTITION BY KEY`
//! - Errors distinguish malformed input from valid but unsupported SQL
//!
//! ```
//! use dialect_sql::{parse_create_table, Dialect};
//!
//! let stmt = parse_create_table("CREATE TABLE t (a INT) ENGINE=InnoDB", Dialect::MySql).unwrap();
//! assert_eq!(stmt.options.get("engine"), Some("InnoDB"));
//! ```

mod config;
mod error;
mod parsing;

pub use config::{Dialect, ParserConfig};
pub use error::{Error, Result};
pub use parsing::ast;
pub use parsing::{
    parse_create_table, CachingParser, DdlParser, ExpressionParser, GenericGrammar, Keyword,
    Lexer, MySqlGrammar, Parser, SelectParser, Spanned, Token, TokenHelper, TypeParser,
};
