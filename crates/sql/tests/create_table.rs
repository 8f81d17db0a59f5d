//! Tests for well-formed CREATE TABLE statements

mod common;

use common::{columns, element_kinds, setup_test, TestContext};
use dialect_sql::ast::{
    IndexDefinition, Literal, Partitioning, TableConstraint, TableConstraintKind, TableElement,
};
use dialect_sql::Dialect;

#[test]
fn test_create_table_basic() {
    let ctx = setup_test();
    let stmt = ctx.parse("CREATE TABLE t (a INT)");

    assert_eq!(stmt.name.to_string(), "t");
    assert_eq!(element_kinds(&stmt), vec!["column"]);
    assert!(stmt.options.is_empty());
    assert!(stmt.partitioning.is_none());
    assert!(stmt.query.is_none());
}

#[test]
fn test_create_table_if_not_exists_with_key() {
    let ctx = setup_test();
    let stmt = ctx.parse("CREATE TABLE IF NOT EXISTS t (a INT, KEY k (a))");

    assert!(stmt.if_not_exists);
    assert_eq!(element_kinds(&stmt), vec!["column", "constraint"]);
    assert_eq!(
        stmt.elements[1],
        TableElement::Constraint(TableConstraint {
            name: None,
            kind: TableConstraintKind::Key(IndexDefinition {
                name: Some("k".into()),
                index_type: None,
                columns: columns(&["a"]),
            }),
        })
    );
}

#[test]
fn test_create_table_engine_option() {
    let ctx = setup_test();
    let stmt = ctx.parse("CREATE TABLE t (a INT) ENGINE=InnoDB");

    let options: Vec<_> = stmt.options.iter().collect();
    assert_eq!(options, vec![("ENGINE", "InnoDB")]);
}

#[test]
fn test_create_table_key_partitioning() {
    let ctx = setup_test();
    let stmt = ctx.parse("CREATE TABLE t (a INT) PARTITION BY KEY (a) PARTITIONS 4");

    assert_eq!(
        stmt.partitioning,
        Some(Partitioning::Key {
            columns: vec!["a".into()],
            partitions: Some(Literal::Integer(4).into()),
        })
    );
}

#[test]
fn test_create_table_unnamed_index() {
    let ctx = setup_test();
    let stmt = ctx.parse("CREATE TABLE t (INDEX (a))");

    assert_eq!(
        stmt.elements,
        vec![TableElement::Index(IndexDefinition {
            name: None,
            index_type: None,
            columns: columns(&["a"]),
        })]
    );
}

#[test]
fn test_create_table_element_order_matches_source() {
    let ctx = setup_test();
    let stmt = ctx.parse(
        "CREATE TABLE orders (
            id BIGINT NOT NULL AUTO_INCREMENT,
            INDEX idx_customer (customer_id),
            customer_id INT NOT NULL,
            PRIMARY KEY (id),
            KEY k_created (created_at),
            created_at DATETIME(3) DEFAULT NULL,
            CONSTRAINT uk KEY (customer_id, created_at)
        ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 PARTITION BY KEY (id) PARTITIONS 8;",
    );

    assert_eq!(
        element_kinds(&stmt),
        vec!["column", "index", "column", "constraint", "constraint", "column", "constraint"]
    );
    let names: Vec<_> = stmt.columns().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "customer_id", "created_at"]);
    assert_eq!(stmt.options.get("charset"), Some("utf8mb4"));
    assert!(stmt.partitioning.is_some());
}

#[test]
fn test_create_temporary_table_as_select() {
    let ctx = setup_test();
    let stmt = ctx.parse(
        "CREATE TEMPORARY TABLE recent ENGINE=MEMORY AS \
         SELECT DISTINCT id, COUNT(*) AS n FROM db.orders o \
         WHERE created_at > '2024-01-01' AND total IS NOT NULL \
         GROUP BY id HAVING COUNT(*) > 1 ORDER BY n DESC LIMIT 10",
    );

    assert!(stmt.temporary);
    assert!(stmt.elements.is_empty());
    assert_eq!(stmt.options.get("ENGINE"), Some("MEMORY"));

    let query = stmt.query.expect("trailing query");
    assert!(query.distinct);
    assert_eq!(query.select.len(), 2);
    assert_eq!(query.select[1].1.as_deref(), Some("n"));
    assert_eq!(query.group_by.len(), 1);
    assert!(query.having.is_some());
    assert_eq!(query.limit, Some(Literal::Integer(10).into()));
}

#[test]
fn test_bare_select_after_elements() {
    // Elements and a trailing query may coexist.
    let ctx = setup_test();
    let stmt = ctx.parse("CREATE TABLE t (a INT) SELECT a FROM s");

    assert_eq!(stmt.elements.len(), 1);
    assert!(stmt.query.is_some());
}

#[test]
fn test_quoted_names() {
    let ctx = setup_test();
    let stmt = ctx.parse("CREATE TABLE `my db`.`order` (`key` INT, \"select\" TEXT)");

    assert_eq!(stmt.name.0, vec!["my db".to_string(), "order".to_string()]);
    let names: Vec<_> = stmt.columns().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["key", "select"]);
}

#[test]
fn test_generic_dialect_base_grammar() {
    let ctx = TestContext::new(Dialect::Generic);
    let stmt = ctx.parse("CREATE TABLE t (a INT, b TEXT, PRIMARY KEY (a, b))");

    assert_eq!(element_kinds(&stmt), vec!["column", "column", "constraint"]);
    assert!(stmt.options.is_empty());
}

#[test]
fn test_quoted_dialect_words_stay_names() {
    let ctx = setup_test();

    let stmt = ctx.parse("CREATE TABLE t (a INT, INDEX `using` (a))");
    assert_eq!(
        stmt.elements[1],
        TableElement::Index(IndexDefinition {
            name: Some("using".into()),
            index_type: None,
            columns: columns(&["a"]),
        })
    );

    for dialect in [Dialect::MySql, Dialect::Generic] {
        let stmt = TestContext::new(dialect).parse("CREATE TABLE `if` (a INT)");
        assert_eq!(stmt.name.to_string(), "if");
        assert!(!stmt.if_not_exists);
    }
}
