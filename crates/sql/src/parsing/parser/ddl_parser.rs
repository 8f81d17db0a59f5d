//! DDL (Data Definition Language) statement parser module
//!
//! Holds the dialect-neutral CREATE TABLE grammar. A dialect overrides the
//! element dispatch, the constraint parser and the tail grammar; everything
//! else is shared.

use super::super::{Keyword, Token};
use super::dml_parser::SelectParser;
use crate::config::Dialect;
use crate::error::Result;
use crate::parsing::ast::{
    CreateTableKind, CreateTableStatement, SelectStatement, TableConstraint, TableElement,
};

/// Parser trait for CREATE TABLE statements
pub trait DdlParser: SelectParser {
    /// The dialect this grammar implements.
    fn dialect(&self) -> Dialect;

    /// Parses a CREATE TABLE statement. If `accept_create` is false the
    /// caller has already consumed the CREATE keyword.
    fn parse_create_table(&mut self, accept_create: bool) -> Result<CreateTableStatement> {
        if accept_create {
            self.expect(Keyword::Create.into())?;
        }

        let temporary = self.next_is(Keyword::Temporary.into());
        self.expect(Keyword::Table.into())?;

        let if_not_exists = if self.next_is(Keyword::If.into()) {
            self.expect(Keyword::Not.into())?;
            self.expect(Keyword::Exists.into())?;
            true
        } else {
            false
        };

        let mut stmt = CreateTableStatement::new(self.parse_qualified_name()?);
        stmt.temporary = temporary;
        stmt.if_not_exists = if_not_exists;
        if temporary {
            stmt.kind = CreateTableKind::GlobalTemporary;
        }
        tracing::debug!(
            "parsing CREATE TABLE {} ({:?} dialect)",
            stmt.name,
            self.dialect()
        );

        if self.peek()? == Some(&Token::OpenParen) {
            stmt.elements = self.parse_table_elements()?;
        }
        self.parse_create_table_tail(&mut stmt)?;

        tracing::debug!(
            "parsed CREATE TABLE {}: {} elements, {} options",
            stmt.name,
            stmt.elements.len(),
            stmt.options.len()
        );
        Ok(stmt)
    }

    /// Parses the parenthesized, comma-separated element list.
    fn parse_table_elements(&mut self) -> Result<Vec<TableElement>> {
        self.expect(Token::OpenParen)?;
        let mut elements = Vec::new();
        loop {
            elements.push(self.parse_table_element()?);
            if !self.next_is(Token::Comma) {
                break;
            }
        }
        self.expect(Token::CloseParen)?;
        Ok(elements)
    }

    /// Parses one table element. Every branch either consumes tokens or
    /// fails, so the element loop always makes progress.
    fn parse_table_element(&mut self) -> Result<TableElement> {
        if self.peek_is_name() {
            return Ok(TableElement::Column(self.parse_column_definition()?));
        }
        match self.peek()? {
            Some(Token::Keyword(Keyword::Constraint | Keyword::Primary)) => {
                Ok(TableElement::Constraint(self.parse_table_constraint()?))
            }
            _ => Err(self.syntax_error("column definition or table constraint")),
        }
    }

    /// Parses `[CONSTRAINT [name]]`, returning the name if one was given.
    fn parse_constraint_name(&mut self) -> Result<Option<String>> {
        if !self.next_is(Keyword::Constraint.into()) {
            return Ok(None);
        }
        Ok(self.next_if_map(|token| match token {
            Token::Ident(name) | Token::QuotedIdent(name) => Some(name.clone()),
            _ => None,
        }))
    }

    /// Parses a table constraint. The base grammar knows only PRIMARY KEY.
    fn parse_table_constraint(&mut self) -> Result<TableConstraint> {
        let name = self.parse_constraint_name()?;
        if self.peek()? == Some(&Token::Keyword(Keyword::Primary)) {
            return self.parse_primary_key_constraint(name);
        }
        Err(self.unsupported("table constraint other than PRIMARY KEY"))
    }

    /// Parses everything after the element list. The base grammar has no
    /// table options, only the optional trailing query.
    fn parse_create_table_tail(&mut self, stmt: &mut CreateTableStatement) -> Result<()> {
        self.reject_on_clause()?;
        stmt.query = self.parse_trailing_query()?.map(Box::new);
        Ok(())
    }

    /// An ON clause after the table definition is recognized but not
    /// implemented.
    fn reject_on_clause(&mut self) -> Result<()> {
        if self.peek()? == Some(&Token::Keyword(Keyword::On)) {
            return Err(self.unsupported("ON clause after table definition"));
        }
        Ok(())
    }

    /// Parses `AS SELECT ...` or a bare `SELECT ...`, if present.
    fn parse_trailing_query(&mut self) -> Result<Option<SelectStatement>> {
        let has_as = self.next_is(Keyword::As.into());
        if has_as || self.peek()? == Some(&Token::Keyword(Keyword::Select)) {
            return Ok(Some(self.parse_select()?));
        }
        Ok(None)
    }
}
