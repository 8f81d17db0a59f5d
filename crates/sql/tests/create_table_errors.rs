//! Tests for malformed and unsupported CREATE TABLE statements

mod common;

use common::{setup_test, TestContext};
use dialect_sql::{Dialect, Error, Token};

#[test]
fn test_on_clause_is_unsupported() {
    for dialect in [Dialect::MySql, Dialect::Generic] {
        let err = TestContext::new(dialect).parse_err("CREATE TABLE t (a INT) ON COMMIT DROP");
        assert!(err.is_unsupported(), "{dialect:?}: {err}");
    }
}

#[test]
fn test_unrecognized_element_fails() {
    let ctx = setup_test();
    for sql in [
        "CREATE TABLE t (a INT, 42)",
        "CREATE TABLE t (a INT, UNIQUE (a))",
        "CREATE TABLE t (a INT, , b INT)",
        "CREATE TABLE t (SELECT)",
    ] {
        let err = ctx.parse_err(sql);
        assert!(matches!(err, Error::Syntax { .. }), "{sql}: {err}");
    }
}

#[test]
fn test_empty_key_column_lists() {
    let ctx = setup_test();
    for sql in [
        "CREATE TABLE t (a INT, KEY k ())",
        "CREATE TABLE t (a INT, INDEX ())",
        "CREATE TABLE t (a INT, PRIMARY KEY ())",
    ] {
        let err = ctx.parse_err(sql);
        assert!(
            matches!(
                err,
                Error::Syntax {
                    found: Some(Token::CloseParen),
                    ..
                }
            ),
            "{sql}: {err}"
        );
    }
}

#[test]
fn test_missing_close_paren() {
    let err = setup_test().parse_err("CREATE TABLE t (a INT b INT)");
    assert_eq!(
        err,
        Error::Syntax {
            expected: "')'".into(),
            found: Some(Token::Ident("b".into())),
            offset: 22,
        }
    );
}

#[test]
fn test_trailing_input() {
    let err = setup_test().parse_err("CREATE TABLE t (a INT); DROP");
    assert!(err.to_string().contains("expected end of statement"), "{err}");
}

#[test]
fn test_non_key_partitioning_is_unsupported() {
    let ctx = setup_test();
    for sql in [
        "CREATE TABLE t (a INT) PARTITION BY RANGE (a)",
        "CREATE TABLE t (a INT) PARTITION BY LIST (a)",
    ] {
        assert!(ctx.parse_err(sql).is_unsupported(), "{sql}");
    }
}

#[test]
fn test_error_message_names_token() {
    let err = setup_test().parse_err("CREATE TABLE t (a INT, INDEX idx USING (a))");
    assert_eq!(
        err.to_string(),
        "syntax error at offset 39: expected index type, found '('"
    );
}

#[test]
fn test_quoted_option_name_is_trailing_input() {
    let err = setup_test().parse_err("CREATE TABLE t (a INT) `ENGINE`=InnoDB");
    assert_eq!(
        err,
        Error::Syntax {
            expected: "end of statement".into(),
            found: Some(Token::QuotedIdent("ENGINE".into())),
            offset: 23,
        }
    );
}

#[test]
fn test_deeply_nested_default_fails_cleanly() {
    let sql = format!(
        "CREATE TABLE t (a INT DEFAULT {}1{})",
        "(".repeat(200_000),
        ")".repeat(200_000)
    );
    for dialect in [Dialect::MySql, Dialect::Generic] {
        let err = TestContext::new(dialect).parse_err(&sql);
        assert!(
            err.to_string().contains("expected expression nesting within limit"),
            "{dialect:?}: {err}"
        );
    }
}

#[test]
fn test_deeply_nested_key_column_fails_cleanly() {
    let sql = format!(
        "CREATE TABLE t (a INT, KEY k ({}a{}))",
        "(".repeat(1_000),
        ")".repeat(1_000)
    );
    let err = setup_test().parse_err(&sql);
    assert!(matches!(err, Error::Syntax { .. }), "{err}");
}
