//! Boundary to the search engine.
//!
//! The web layer only describes what it wants (query text, validated
//! filters, sort, page) and renders whatever comes back (one page of
//! hits plus facet buckets). Indexing and matching live behind
//! [`SearchBackend`]; the bundled [`memory::MemoryIndex`] is a small
//! stand-in so the application runs without an external engine.

pub mod memory;

use std::fmt;

use crate::models::digital_file::DigitalFile;
use crate::models::filters::AppliedFilters;
use crate::models::pagination::{PageParams, Pagination};
use crate::models::sort::SortSpec;

pub struct SearchRequest {
    pub query: String,
    pub filters: AppliedFilters,
    pub sort: SortSpec,
    pub page: PageParams,
}

/// One aggregation bucket: a facet value and its hit count over the
/// filtered result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetBucket {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Aggregations {
    pub formats: Vec<FacetBucket>,
    pub collections: Vec<FacetBucket>,
}

pub struct SearchResponse {
    pub hits: Vec<DigitalFile>,
    pub aggregations: Aggregations,
    pub pagination: Pagination,
}

#[derive(Debug)]
pub enum SearchError {
    Backend(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Backend(e) => write!(f, "Search backend error: {e}"),
        }
    }
}

impl std::error::Error for SearchError {}

pub trait SearchBackend: Send + Sync {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}
