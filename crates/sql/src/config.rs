//! Parser configuration

use serde::{Deserialize, Serialize};

/// SQL dialect of the CREATE TABLE grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// The dialect-neutral base grammar.
    Generic,
    /// MySQL: inline indexes, KEY constraints, table options and key
    /// partitioning.
    #[default]
    MySql,
}

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Grammar used for every statement.
    pub dialect: Dialect,

    /// Number of parsed statements kept by the caching parser. Zero falls
    /// back to a small default.
    pub cache_capacity: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::MySql,
            cache_capacity: 1000,
        }
    }
}

impl ParserConfig {
    /// Create config optimized for testing
    pub fn for_testing() -> Self {
        Self {
            dialect: Dialect::MySql,
            cache_capacity: 8, // small enough to exercise eviction
        }
    }
}
