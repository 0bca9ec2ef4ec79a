//! Natural-language query parser.
//!
//! Resolution order is fixed: region (city table, then province table),
//! category, deadline bucket, campaign type, channels. Single-valued fields
//! take the first hit in table order; channels collect every hit.

use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::keywords::KeywordTables;
use crate::types::{ExtractedFilters, ParsedQuery};

static DEFAULT_PARSER: Lazy<QueryParser> = Lazy::new(|| {
    let tables = KeywordTables::korean().expect("built-in keyword tables compile");
    QueryParser::new(Arc::new(tables))
});

/// Parser over an injected, immutable set of keyword tables.
#[derive(Debug, Clone)]
pub struct QueryParser {
    tables: Arc<KeywordTables>,
}

impl QueryParser {
    pub fn new(tables: Arc<KeywordTables>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    /// Parse `query` into structured filters. Never fails; an empty or
    /// unrecognised query yields a result with only `raw_query` set.
    pub fn parse(&self, query: &str) -> ParsedQuery {
        let tables = &self.tables;
        let mut result = ParsedQuery::new(query);

        // A named city beats the province that contains it.
        result.region = tables
            .cities
            .first_match(query)
            .or_else(|| tables.regions.first_match(query))
            .map(|entry| entry.code.clone());

        result.category = tables
            .categories
            .first_match(query)
            .map(|entry| entry.code.clone());

        result.deadline = tables.deadlines.first_match(query).map(|entry| entry.code);
        result.campaign_type = tables.types.first_match(query).map(|entry| entry.code);

        let channels: Vec<&str> = tables
            .channels
            .all_matches(query)
            .into_iter()
            .map(|entry| entry.code.as_str())
            .collect();
        if !channels.is_empty() {
            result.channel = Some(channels.join("/"));
        }

        debug!("Parsed search query {:?}: {:?}", query, result);
        result
    }

    /// Parse `query` and compute the residual title-search text.
    pub fn extract_filters(&self, query: &str) -> ExtractedFilters {
        let parsed = self.parse(query);
        let clean_query = self.extract_residual(query, &parsed);
        ExtractedFilters {
            filters: parsed.filters(),
            clean_query,
        }
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        DEFAULT_PARSER.clone()
    }
}

/// Shared parser over the built-in vocabulary.
pub fn default_parser() -> &'static QueryParser {
    &DEFAULT_PARSER
}

/// Parse with the built-in vocabulary.
pub fn parse_search_query(query: &str) -> ParsedQuery {
    DEFAULT_PARSER.parse(query)
}
