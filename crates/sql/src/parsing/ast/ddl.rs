//! Data Definition Language (DDL) statements: CREATE TABLE

use super::common::ObjectName;
use super::dml::SelectStatement;
use super::expressions::Expression;

/// Statement subtype, set by the TEMPORARY modifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CreateTableKind {
    #[default]
    Table,
    GlobalTemporary,
}

/// CREATE TABLE: creates a new table.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStatement {
    /// The (possibly qualified) table name.
    pub name: ObjectName,
    /// The statement subtype.
    pub kind: CreateTableKind,
    /// TEMPORARY: whether the table is temporary.
    pub temporary: bool,
    /// IF NOT EXISTS: if true, don't error if the table already exists.
    pub if_not_exists: bool,
    /// Columns, constraints and indexes, in source order.
    pub elements: Vec<TableElement>,
    /// Table options such as ENGINE=InnoDB.
    pub options: TableOptions,
    /// PARTITION BY clause, if any.
    pub partitioning: Option<Partitioning>,
    /// The trailing query of a CREATE TABLE ... AS SELECT.
    pub query: Option<Box<SelectStatement>>,
}

impl CreateTableStatement {
    /// Creates an empty statement for the given table name.
    pub fn new(name: ObjectName) -> Self {
        Self {
            name,
            kind: CreateTableKind::default(),
            temporary: false,
            if_not_exists: false,
            elements: Vec::new(),
            options: TableOptions::default(),
            partitioning: None,
            query: None,
        }
    }

    /// Iterates over the column definitions, skipping constraints and indexes.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.elements.iter().filter_map(|element| match element {
            TableElement::Column(column) => Some(column),
            _ => None,
        })
    }
}

/// An entry of the parenthesized CREATE TABLE element list.
#[derive(Debug, Clone, PartialEq)]
pub enum TableElement {
    Column(ColumnDefinition),
    Constraint(TableConstraint),
    /// An inline `INDEX [name] [USING type] (columns)`.
    Index(IndexDefinition),
}

/// CREATE TABLE column definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    /// `Some(false)` for NOT NULL, `Some(true)` for an explicit NULL.
    pub nullable: Option<bool>,
    pub default: Option<Expression>,
    pub primary_key: bool,
    pub unique: bool,
    pub auto_increment: bool,
    pub comment: Option<String>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: None,
            default: None,
            primary_key: false,
            unique: false,
            auto_increment: false,
            comment: None,
        }
    }
}

/// A named or typed ordered column list. Shared by inline indexes and KEY
/// constraints, which differ only in their introducing keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexDefinition {
    pub name: Option<String>,
    /// The `USING <type>` index type, e.g. BTREE.
    pub index_type: Option<String>,
    /// The indexed columns. Never empty.
    pub columns: Vec<Expression>,
}

/// A table-level constraint, optionally named with CONSTRAINT <name>.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConstraint {
    pub name: Option<String>,
    pub kind: TableConstraintKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraintKind {
    /// `KEY [name] [USING type] (columns)`
    Key(IndexDefinition),
    /// `PRIMARY KEY [USING type] (columns)`
    PrimaryKey {
        index_type: Option<String>,
        columns: Vec<Expression>,
    },
}

/// Table options, in the order they were given. Names are stored upper-cased
/// and compared case-insensitively; a repeated option overwrites the earlier
/// value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableOptions(Vec<(String, String)>);

impl TableOptions {
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let name = name.to_uppercase();
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// PARTITION BY clause. Only key partitioning is supported.
#[derive(Debug, Clone, PartialEq)]
pub enum Partitioning {
    Key {
        /// Column names, possibly qualified. Never empty.
        columns: Vec<ObjectName>,
        /// The PARTITIONS count expression.
        partitions: Option<Expression>,
    },
}

/// Column data types. Unknown type names are kept verbatim as `Custom`.
#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    Integer {
        size: IntegerSize,
        /// Display width, e.g. the 11 in INT(11).
        width: Option<u32>,
        unsigned: bool,
    },
    Decimal {
        precision: Option<u32>,
        scale: Option<u32>,
    },
    Float,
    Double,
    Boolean,
    Char(Option<u32>),
    Varchar(u32),
    Text,
    Blob,
    Date,
    Time,
    DateTime,
    Timestamp,
    Custom {
        name: String,
        args: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerSize {
    Tiny,
    Small,
    Medium,
    Int,
    Big,
}
