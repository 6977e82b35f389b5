/// Page and limit as requested, before the total hit count is known.
///
/// Limit defaults to 10 and can't be set over 100; anything unparsable
/// or out of range falls back to the default rather than failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageParams {
    pub page: usize,
    pub limit: usize,
}

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 100;

impl PageParams {
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Self {
        let limit = limit
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|l| (1..=MAX_LIMIT).contains(l))
            .unwrap_or(DEFAULT_LIMIT);
        let page = page
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);
        PageParams { page, limit }
    }
}

impl Default for PageParams {
    fn default() -> Self {
        PageParams { page: 1, limit: DEFAULT_LIMIT }
    }
}

/// Resolved pagination state for one rendered page of results.
///
/// A requested page past the end clamps to the last page, mirroring how
/// the results are sliced, so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn build(params: PageParams, total: usize) -> Self {
        let total_pages = total.div_ceil(params.limit).max(1);
        Pagination {
            page: params.page.min(total_pages),
            limit: params.limit,
            total,
            total_pages,
        }
    }

    /// Index of the first hit on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.limit
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn prev_page(&self) -> usize {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> usize {
        (self.page + 1).min(self.total_pages)
    }

    /// Page numbers for the pager controls: the current page and up to
    /// two neighbors on each side.
    pub fn page_numbers(&self) -> Vec<usize> {
        let first = self.page.saturating_sub(2).max(1);
        let last = (self.page + 2).min(self.total_pages);
        (first..=last).collect()
    }
}
