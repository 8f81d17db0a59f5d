//! MySQL CREATE TABLE grammar
//!
//! Extends the base grammar with inline INDEX and KEY elements, named
//! constraints, table options and PARTITION BY KEY. Dialect words like
//! ENGINE, USING and PARTITION are matched on identifier text, so they stay
//! legal as table and column names.

use super::super::{Keyword, Token};
use super::ddl_parser::DdlParser;
use super::expr_parser::ExpressionParser;
use super::token_helper::TokenHelper;
use super::{MySqlGrammar, Parser};
use crate::config::Dialect;
use crate::error::Result;
use crate::parsing::ast::{
    CreateTableStatement, IndexDefinition, Partitioning, TableConstraint, TableConstraintKind,
    TableElement,
};

/// Table option names recognized after the element list. CHARACTER is only
/// valid as the start of CHARACTER SET.
const TABLE_OPTIONS: &[&str] = &[
    "ENGINE",
    "TYPE",
    "AUTO_INCREMENT",
    "CHARSET",
    "CHARACTER",
    "COLLATE",
    "COMMENT",
    "ROW_FORMAT",
];

impl DdlParser for Parser<'_, MySqlGrammar> {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    fn parse_table_element(&mut self) -> Result<TableElement> {
        if self.peek_is_name() {
            tracing::trace!("table element: column definition");
            return Ok(TableElement::Column(self.parse_column_definition()?));
        }
        match self.peek()? {
            Some(Token::Keyword(Keyword::Constraint | Keyword::Key | Keyword::Primary)) => {
                tracing::trace!("table element: constraint");
                Ok(TableElement::Constraint(self.parse_table_constraint()?))
            }
            Some(Token::Keyword(Keyword::Index)) => {
                tracing::trace!("table element: index");
                self.next()?;
                Ok(TableElement::Index(self.parse_index_definition()?))
            }
            _ => Err(self.syntax_error("column definition, constraint, INDEX, KEY or PRIMARY KEY")),
        }
    }

    fn parse_table_constraint(&mut self) -> Result<TableConstraint> {
        let name = self.parse_constraint_name()?;
        if self.next_is(Keyword::Key.into()) {
            return Ok(TableConstraint {
                name,
                kind: TableConstraintKind::Key(self.parse_index_definition()?),
            });
        }
        if self.peek()? == Some(&Token::Keyword(Keyword::Primary)) {
            return self.parse_primary_key_constraint(name);
        }
        Err(self.unsupported("table constraint other than KEY or PRIMARY KEY"))
    }

    fn parse_create_table_tail(&mut self, stmt: &mut CreateTableStatement) -> Result<()> {
        loop {
            if let Some(name) = self.parse_table_option_name()? {
                self.expect(Token::Equal)?;
                let value = self.next_option_value()?;
                tracing::trace!("table option {} = {}", name, value);
                stmt.options.insert(name, value);
            } else if self.peek_ident_eq("PARTITION") {
                if stmt.partitioning.is_some() {
                    return Err(self.syntax_error("at most one PARTITION BY clause"));
                }
                self.next()?;
                stmt.partitioning = Some(self.parse_partitioning()?);
            } else {
                break;
            }
        }
        self.reject_on_clause()?;
        stmt.query = self.parse_trailing_query()?.map(Box::new);
        Ok(())
    }
}

impl Parser<'_, MySqlGrammar> {
    /// Parses the rest of an index or key after INDEX/KEY:
    /// `[name] [USING type] (columns) [USING type]`.
    fn parse_index_definition(&mut self) -> Result<IndexDefinition> {
        // A bare USING introduces the index type; a quoted `using` is a name.
        let named = self.peek_is_name() && !self.peek_ident_eq("USING");
        let name = if named { Some(self.next_ident()?) } else { None };
        let mut index_type = self.parse_index_type()?;
        let columns = self.parse_index_columns()?;
        if index_type.is_none() {
            index_type = self.parse_index_type()?;
        }
        Ok(IndexDefinition {
            name,
            index_type,
            columns,
        })
    }

    /// Parses a table option name, returning its canonical upper-case form.
    /// DEFAULT may prefix CHARSET and COLLATE.
    fn parse_table_option_name(&mut self) -> Result<Option<&'static str>> {
        let has_default = self.next_is(Keyword::Default.into());
        let name = self.next_if_map(|token| match token {
            Token::Ident(word) => TABLE_OPTIONS
                .iter()
                .copied()
                .find(|option| option.eq_ignore_ascii_case(word)),
            _ => None,
        });
        let name = match name {
            Some("CHARACTER") => {
                if !self.next_if_ident_eq("SET") {
                    return Err(self.syntax_error("SET after CHARACTER"));
                }
                Some("CHARSET")
            }
            name => name,
        };
        if has_default && !matches!(name, Some("CHARSET" | "COLLATE")) {
            return Err(self.syntax_error("CHARSET or COLLATE after DEFAULT"));
        }
        Ok(name)
    }

    /// Takes the literal text of the next token as an option value.
    fn next_option_value(&mut self) -> Result<String> {
        if self.peek()?.is_none() {
            return Err(self.syntax_error("table option value"));
        }
        Ok(self.next()?.literal())
    }

    /// Parses the rest of a partitioning clause after PARTITION. Only
    /// `BY KEY (columns) [PARTITIONS n]` is supported.
    fn parse_partitioning(&mut self) -> Result<Partitioning> {
        self.expect(Keyword::By.into())?;
        if !self.next_is(Keyword::Key.into()) {
            return Err(self.unsupported("partitioning other than PARTITION BY KEY"));
        }
        self.expect(Token::OpenParen)?;
        if self.peek()? == Some(&Token::CloseParen) {
            return Err(self.syntax_error("at least one partitioning column"));
        }
        let mut columns = Vec::new();
        loop {
            columns.push(self.parse_qualified_name()?);
            if !self.next_is(Token::Comma) {
                break;
            }
        }
        self.expect(Token::CloseParen)?;

        let partitions = if self.next_if_ident_eq("PARTITIONS") {
            Some(self.parse_expression()?)
        } else {
            None
        };
        Ok(Partitioning::Key {
            columns,
            partitions,
        })
    }
}
