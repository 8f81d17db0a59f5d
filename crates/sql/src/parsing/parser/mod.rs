//! Modular CREATE TABLE parser implementation
//!
//! The parser is split into several modules, each a trait layered on the
//! previous one:
//! - token_helper: Base trait for token navigation
//! - type_parser: Data type parsing
//! - expr_parser: Expressions, names, column definitions and key columns
//! - dml_parser: The SELECT of CREATE TABLE ... AS SELECT
//! - ddl_parser: The dialect-neutral CREATE TABLE grammar
//! - mysql_parser: MySQL overrides of the CREATE TABLE grammar
//!
//! A grammar is selected by the type parameter of [`Parser`]. Every parser
//! shares the lower traits; only the `DdlParser` impl differs per grammar.

pub mod ddl_parser;
pub mod dml_parser;
pub mod expr_parser;
pub mod mysql_parser;
pub mod token_helper;
pub mod type_parser;

use std::iter::Peekable;
use std::marker::PhantomData;

use self::ddl_parser::DdlParser;
use self::dml_parser::SelectParser;
use self::expr_parser::ExpressionParser;
use self::token_helper::TokenHelper;
use self::type_parser::TypeParser;
use super::ast::CreateTableStatement;
use super::{Lexer, Token};
use crate::config::Dialect;
use crate::error::{Error, Result};

/// The dialect-neutral CREATE TABLE grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericGrammar;

/// The MySQL CREATE TABLE grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlGrammar;

/// The SQL parser takes tokens from the lexer and parses a CREATE TABLE
/// statement into an Abstract Syntax Tree (AST).
///
/// The AST only reflects the syntax. Whether column types make sense or
/// indexed columns exist is not checked here.
pub struct Parser<'a, G = MySqlGrammar> {
    lexer: Peekable<Lexer<'a>>,
    /// Length of the input, reported as the offset of end-of-input errors.
    end: usize,
    /// Current expression nesting, bounded by `MAX_EXPRESSION_DEPTH`.
    depth: usize,
    grammar: PhantomData<G>,
}

impl<'a, G> Parser<'a, G> {
    /// Creates a new parser for the given string.
    pub fn new(input: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(input).peekable(),
            end: input.len(),
            depth: 0,
            grammar: PhantomData,
        }
    }
}

impl<'a, G> Parser<'a, G>
where
    Self: DdlParser,
{
    /// Parses the input string into a CREATE TABLE statement. The entire
    /// string must be a single statement, ending with an optional semicolon.
    pub fn parse(statement: &'a str) -> Result<CreateTableStatement> {
        let mut parser = Self::new(statement);
        let stmt = parser.parse_create_table(true)?;
        parser.skip(Token::Semicolon);
        if parser.peek()?.is_some() {
            return Err(parser.syntax_error("end of statement"));
        }
        Ok(stmt)
    }
}

impl<G> TokenHelper for Parser<'_, G> {
    fn next(&mut self) -> Result<Token> {
        match self.lexer.next().transpose()? {
            Some(spanned) => Ok(spanned.token),
            None => Err(Error::Syntax {
                expected: "more input".into(),
                found: None,
                offset: self.end,
            }),
        }
    }

    fn peek(&mut self) -> Result<Option<&Token>> {
        self.lexer
            .peek()
            .map(|result| {
                result
                    .as_ref()
                    .map(|spanned| Some(&spanned.token))
                    .map_err(|e| e.clone())
            })
            .unwrap_or(Ok(None))
    }

    fn offset(&mut self) -> usize {
        match self.lexer.peek() {
            Some(Ok(spanned)) => spanned.offset,
            Some(Err(err)) => err.offset(),
            None => self.end,
        }
    }
}

impl<G> TypeParser for Parser<'_, G> {}

impl<G> ExpressionParser for Parser<'_, G> {
    fn expression_depth(&mut self) -> &mut usize {
        &mut self.depth
    }
}

impl<G> SelectParser for Parser<'_, G> {}

// The generic grammar uses every default production.
impl DdlParser for Parser<'_, GenericGrammar> {
    fn dialect(&self) -> Dialect {
        Dialect::Generic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::ast::{
        CreateTableKind, DataType, Expression, Literal, Operator, TableConstraint,
        TableConstraintKind, TableElement,
    };
    use crate::parsing::Keyword;

    fn parse(sql: &str) -> Result<CreateTableStatement> {
        Parser::<GenericGrammar>::parse(sql)
    }

    #[test]
    fn test_minimal_statement() {
        let stmt = parse("CREATE TABLE t (a INT);").unwrap();
        assert_eq!(stmt.name.to_string(), "t");
        assert_eq!(stmt.kind, CreateTableKind::Table);
        assert!(!stmt.temporary);
        assert!(!stmt.if_not_exists);
        assert_eq!(stmt.elements.len(), 1);
        assert!(stmt.options.is_empty());
        assert!(stmt.partitioning.is_none());
        assert!(stmt.query.is_none());
    }

    #[test]
    fn test_temporary_and_qualified_name() {
        let stmt = parse("CREATE TEMPORARY TABLE IF NOT EXISTS shop.orders (id INT)").unwrap();
        assert!(stmt.temporary);
        assert!(stmt.if_not_exists);
        assert_eq!(stmt.kind, CreateTableKind::GlobalTemporary);
        assert_eq!(stmt.name.0, vec!["shop".to_string(), "orders".to_string()]);
    }

    #[test]
    fn test_if_requires_not_exists() {
        let err = parse("CREATE TABLE IF EXISTS t (a INT)").unwrap_err();
        assert_eq!(
            err,
            Error::Syntax {
                expected: "keyword NOT".into(),
                found: Some(Keyword::Exists.into()),
                offset: 16,
            }
        );
    }

    #[test]
    fn test_missing_table_keyword() {
        let err = parse("CREATE TABEL t (a INT)").unwrap_err();
        assert_eq!(
            err.to_string(),
            "syntax error at offset 7: expected keyword TABLE, found identifier TABEL"
        );
    }

    #[test]
    fn test_column_definitions() {
        let stmt = parse(
            "CREATE TABLE t (
                id INT PRIMARY KEY,
                name VARCHAR(64) NOT NULL DEFAULT 'anon' COMMENT 'display name',
                price DECIMAL(10, 2) NULL,
                tags ENUM('a', 'b') UNIQUE
            )",
        )
        .unwrap();
        let columns: Vec<_> = stmt.columns().collect();
        assert_eq!(columns.len(), 4);
        assert!(columns[0].primary_key);
        assert_eq!(columns[1].data_type, DataType::Varchar(64));
        assert_eq!(columns[1].nullable, Some(false));
        assert_eq!(
            columns[1].default,
            Some(Literal::String("anon".into()).into())
        );
        assert_eq!(columns[1].comment.as_deref(), Some("display name"));
        assert_eq!(
            columns[2].data_type,
            DataType::Decimal {
                precision: Some(10),
                scale: Some(2)
            }
        );
        assert_eq!(columns[2].nullable, Some(true));
        assert_eq!(
            columns[3].data_type,
            DataType::Custom {
                name: "ENUM".into(),
                args: vec!["a".into(), "b".into()]
            }
        );
        assert!(columns[3].unique);
    }

    #[test]
    fn test_conflicting_nullability() {
        let err = parse("CREATE TABLE t (a INT NULL NOT NULL)").unwrap_err();
        assert!(matches!(err, Error::Syntax { offset: 27, .. }), "{err}");
    }

    #[test]
    fn test_default_expression() {
        let stmt = parse("CREATE TABLE t (a INT DEFAULT -1 + 2 * 3)").unwrap();
        let column = stmt.columns().next().unwrap();
        assert_eq!(
            column.default,
            Some(
                Operator::Add(
                    Operator::Negate(Box::new(Literal::Integer(1).into())).into(),
                    Operator::Multiply(
                        Box::new(Literal::Integer(2).into()),
                        Box::new(Literal::Integer(3).into()),
                    )
                    .into(),
                )
                .into()
            )
        );
    }

    #[test]
    fn test_primary_key_constraint() {
        let stmt = parse(
            "CREATE TABLE t (a INT, b INT, CONSTRAINT pk PRIMARY KEY USING BTREE (a, b))",
        )
        .unwrap();
        assert_eq!(
            stmt.elements[2],
            TableElement::Constraint(TableConstraint {
                name: Some("pk".into()),
                kind: TableConstraintKind::PrimaryKey {
                    index_type: Some("BTREE".into()),
                    columns: vec![Expression::column("a"), Expression::column("b")],
                },
            })
        );
    }

    #[test]
    fn test_generic_grammar_rejects_dialect_elements() {
        // INDEX and KEY are MySQL elements.
        assert!(matches!(
            parse("CREATE TABLE t (a INT, INDEX (a))"),
            Err(Error::Syntax { .. })
        ));
        assert!(matches!(
            parse("CREATE TABLE t (a INT, KEY k (a))"),
            Err(Error::Syntax { .. })
        ));
        // And table options are not recognized, so ENGINE is trailing input.
        let err = parse("CREATE TABLE t (a INT) ENGINE=InnoDB").unwrap_err();
        assert_eq!(
            err,
            Error::Syntax {
                expected: "end of statement".into(),
                found: Some(Token::Ident("ENGINE".into())),
                offset: 23,
            }
        );
    }

    #[test]
    fn test_generic_constraint_other_than_primary_key() {
        let err = parse("CREATE TABLE t (a INT, CONSTRAINT c UNIQUE (a))").unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_generic_on_clause_is_unsupported() {
        let err = parse("CREATE TABLE t (a INT) ON COMMIT PRESERVE ROWS").unwrap_err();
        assert!(err.is_unsupported());
        assert_eq!(err.offset(), 23);
    }

    #[test]
    fn test_create_table_as_select() {
        let stmt = parse("CREATE TABLE t AS SELECT a, b AS c FROM s WHERE a > 1").unwrap();
        assert!(stmt.elements.is_empty());
        let query = stmt.query.unwrap();
        assert_eq!(query.select.len(), 2);
        assert_eq!(query.select[1].1.as_deref(), Some("c"));
        assert!(query.r#where.is_some());
    }

    #[test]
    fn test_empty_element_list() {
        assert!(matches!(
            parse("CREATE TABLE t ()"),
            Err(Error::Syntax {
                found: Some(Token::CloseParen),
                ..
            })
        ));
    }

    #[test]
    fn test_parse_without_create_keyword() {
        let mut parser = Parser::<GenericGrammar>::new("TABLE t (a INT)");
        let stmt = parser.parse_create_table(false).unwrap();
        assert_eq!(stmt.name.to_string(), "t");
    }

    #[test]
    fn test_lex_error_is_reported() {
        let err = parse("CREATE TABLE t (a INT) #").unwrap_err();
        assert!(matches!(err, Error::Lex { offset: 23, .. }), "{err}");
    }

    #[test]
    fn test_unexpected_end_of_input() {
        let err = parse("CREATE TABLE t (a INT,").unwrap_err();
        assert!(matches!(
            err,
            Error::Syntax {
                found: None,
                offset: 22,
                ..
            }
        ));
    }
}
