//! CREATE TABLE parser module
//!
//! This module parses raw SQL strings into a structured Abstract Syntax Tree
//! (AST). The grammar is dialect-extensible: a dialect overrides a few
//! productions of the base grammar and inherits the rest.

pub mod ast;
pub mod caching_parser;
mod lexer;
mod parser;

use crate::config::Dialect;
use crate::error::Result;

pub use caching_parser::CachingParser;
pub use lexer::{Keyword, Lexer, Spanned, Token};
pub use parser::ddl_parser::DdlParser;
pub use parser::dml_parser::SelectParser;
pub use parser::expr_parser::ExpressionParser;
pub use parser::token_helper::TokenHelper;
pub use parser::type_parser::TypeParser;
pub use parser::{GenericGrammar, MySqlGrammar, Parser};

use ast::CreateTableStatement;

/// Parse a CREATE TABLE statement with the grammar of the given dialect
pub fn parse_create_table(sql: &str, dialect: Dialect) -> Result<CreateTableStatement> {
    match dialect {
        Dialect::Generic => Parser::<GenericGrammar>::parse(sql),
        Dialect::MySql => Parser::<MySqlGrammar>::parse(sql),
    }
}
