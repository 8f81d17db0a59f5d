//! Caching parser for CREATE TABLE statements
//!
//! This module provides a caching wrapper around the parser that maintains
//! an LRU cache of parsed statements to avoid redundant parsing.

use super::ast::CreateTableStatement;
use super::parse_create_table;
use crate::config::{Dialect, ParserConfig};
use crate::error::Result;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Capacity used when the configured capacity is zero
const FALLBACK_CACHE_CAPACITY: usize = 100;

/// A caching wrapper around the parser. Failed parses are not cached.
pub struct CachingParser {
    /// LRU cache for parsed statements
    cache: LruCache<String, Arc<CreateTableStatement>>,
    dialect: Dialect,
}

impl CachingParser {
    /// Create a new caching parser from the given configuration
    pub fn new(config: &ParserConfig) -> Self {
        let capacity = NonZeroUsize::new(config.cache_capacity)
            .or(NonZeroUsize::new(FALLBACK_CACHE_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            dialect: config.dialect,
        }
    }

    /// Parse SQL with caching
    pub fn parse(&mut self, sql: &str) -> Result<Arc<CreateTableStatement>> {
        let normalized = normalize_sql(sql);

        if let Some(statement) = self.cache.get(&normalized) {
            tracing::trace!("parse cache hit");
            return Ok(statement.clone());
        }
        tracing::trace!("parse cache miss");

        let statement = Arc::new(parse_create_table(&normalized, self.dialect)?);
        self.cache.put(normalized, statement.clone());
        Ok(statement)
    }

    /// Number of cached statements
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Clear the cache
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl Default for CachingParser {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}

/// Normalize SQL for consistent caching
#[inline]
fn normalize_sql(sql: &str) -> String {
    sql.trim().to_string()
}
