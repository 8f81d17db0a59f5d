//! Common structures used across AST modules

use std::fmt::{self, Display};

/// A possibly qualified object name, e.g. `db.users`. Parts are kept as
/// written, without quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectName(pub Vec<String>);

impl ObjectName {
    /// The last (unqualified) part of the name.
    pub fn base(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }
}

impl Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl From<&str> for ObjectName {
    fn from(name: &str) -> Self {
        Self(name.split('.').map(String::from).collect())
    }
}

/// Sort direction for ORDER BY
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// A FROM item.
#[derive(Debug, Clone, PartialEq)]
pub enum FromClause {
    /// A table.
    Table {
        /// The table name.
        name: ObjectName,
        /// An optional alias for the table.
        alias: Option<String>,
    },
}
