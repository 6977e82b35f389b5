use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{Aggregations, FacetBucket, SearchBackend, SearchError, SearchRequest, SearchResponse};
use crate::models::digital_file::DigitalFile;
use crate::models::filters::AppliedFilters;
use crate::models::pagination::Pagination;
use crate::models::sort::{SortDir, SortSpec};

const BUNDLED_SEED: &str = include_str!("../../data/seed/digital_files.json");

/// In-memory search backend seeded from a JSON fixture.
///
/// Filters are AND-ed across facets and OR-ed within one facet, the date
/// range is inclusive at both ends, and facet buckets are counted over
/// the filtered set, the same contract an external engine is expected
/// to honor. Text matching is a case-insensitive substring check, which
/// is all the fixture-backed pages need.
pub struct MemoryIndex {
    files: Vec<DigitalFile>,
}

impl MemoryIndex {
    pub fn new(files: Vec<DigitalFile>) -> Self {
        MemoryIndex { files }
    }

    /// Load the bundled demo fixture.
    pub fn from_seed() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let files: Vec<DigitalFile> = serde_json::from_str(json)?;
        log::info!("Loaded {} digital files into the in-memory index", files.len());
        Ok(MemoryIndex::new(files))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl SearchBackend for MemoryIndex {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let query = request.query.trim().to_lowercase();
        let mut matched: Vec<&DigitalFile> = self
            .files
            .iter()
            .filter(|f| matches_query(f, &query) && matches_filters(f, &request.filters))
            .collect();
        sort_hits(&mut matched, &request.sort);

        let aggregations = aggregate(&matched);
        let pagination = Pagination::build(request.page, matched.len());
        let hits = matched
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.limit)
            .cloned()
            .collect();

        Ok(SearchResponse { hits, aggregations, pagination })
    }
}

fn matches_query(file: &DigitalFile, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    file.filepath.to_lowercase().contains(query)
        || file.fileformat.to_lowercase().contains(query)
        || file.collection.to_lowercase().contains(query)
}

fn matches_filters(file: &DigitalFile, filters: &AppliedFilters) -> bool {
    if !filters.formats.is_empty() && !filters.formats.contains(&file.fileformat) {
        return false;
    }
    if !filters.collections.is_empty() && !filters.collections.contains(&file.collection) {
        return false;
    }
    if filters.start_date.is_some() || filters.end_date.is_some() {
        // A file without a parsable date can't satisfy a range filter.
        let Some(date) = parse_date(&file.datemodified) else {
            return false;
        };
        if filters.start_date.is_some_and(|start| date < start) {
            return false;
        }
        if filters.end_date.is_some_and(|end| date > end) {
            return false;
        }
    }
    true
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn sort_hits(hits: &mut [&DigitalFile], sort: &SortSpec) {
    hits.sort_by(|a, b| {
        let ordering = match sort.option.as_str() {
            "format" => a.fileformat.cmp(&b.fileformat),
            "size" => a.size_bytes.cmp(&b.size_bytes),
            "date" => a.datemodified.cmp(&b.datemodified),
            _ => a.filepath.cmp(&b.filepath),
        };
        match sort.dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });
}

fn aggregate(hits: &[&DigitalFile]) -> Aggregations {
    Aggregations {
        formats: count_buckets(hits.iter().map(|f| f.fileformat.as_str())),
        collections: count_buckets(
            hits.iter()
                .map(|f| f.collection.as_str())
                .filter(|c| !c.is_empty()),
        ),
    }
}

/// Buckets ordered by descending count, ties broken by value.
fn count_buckets<'a>(values: impl Iterator<Item = &'a str>) -> Vec<FacetBucket> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    let mut buckets: Vec<FacetBucket> = counts
        .into_iter()
        .map(|(value, count)| FacetBucket { value: value.to_string(), count })
        .collect();
    buckets.sort_by(|a, b| match b.count.cmp(&a.count) {
        Ordering::Equal => a.value.cmp(&b.value),
        other => other,
    });
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pagination::PageParams;

    fn file(path: &str, format: &str, size: u64, date: &str, collection: &str) -> DigitalFile {
        DigitalFile {
            filepath: path.to_string(),
            fileformat: format.to_string(),
            size_bytes: size,
            datemodified: date.to_string(),
            collection: collection.to_string(),
        }
    }

    fn index() -> MemoryIndex {
        MemoryIndex::new(vec![
            file("objects/a.jpg", "JPEG", 100, "2019-03-01", "Photographs"),
            file("objects/b.pdf", "PDF", 4096, "2020-06-15", "Reports"),
            file("objects/c.jpg", "JPEG", 200, "2021-01-20", "Photographs"),
        ])
    }

    fn request(filters: AppliedFilters) -> SearchRequest {
        SearchRequest {
            query: String::new(),
            filters,
            sort: SortSpec::from_params(None, None, &["path", "format", "size", "date"], "path"),
            page: PageParams::default(),
        }
    }

    #[test]
    fn blank_query_matches_everything() {
        let response = index().search(&request(AppliedFilters::default())).unwrap();
        assert_eq!(response.pagination.total, 3);
    }

    #[test]
    fn format_filter_narrows_hits_and_buckets() {
        let filters = AppliedFilters { formats: vec!["JPEG".to_string()], ..Default::default() };
        let response = index().search(&request(filters)).unwrap();
        assert_eq!(response.pagination.total, 2);
        assert_eq!(
            response.aggregations.formats,
            vec![FacetBucket { value: "JPEG".to_string(), count: 2 }]
        );
    }

    #[test]
    fn date_range_is_inclusive() {
        let filters = AppliedFilters {
            start_date: NaiveDate::from_ymd_opt(2020, 6, 15),
            end_date: NaiveDate::from_ymd_opt(2021, 1, 20),
            ..Default::default()
        };
        let response = index().search(&request(filters)).unwrap();
        let paths: Vec<&str> = response.hits.iter().map(|f| f.filepath.as_str()).collect();
        assert_eq!(paths, vec!["objects/b.pdf", "objects/c.jpg"]);
    }

    #[test]
    fn buckets_sort_by_count_then_value() {
        let response = index().search(&request(AppliedFilters::default())).unwrap();
        assert_eq!(
            response.aggregations.formats,
            vec![
                FacetBucket { value: "JPEG".to_string(), count: 2 },
                FacetBucket { value: "PDF".to_string(), count: 1 },
            ]
        );
    }
}
