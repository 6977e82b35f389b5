use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use url::Url;

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::filters::{self, ActiveFilter, FilterSet, removal};
use crate::models::pagination::PageParams;
use crate::models::sort::SortSpec;
use crate::search::{Aggregations, SearchBackend, SearchRequest};
use crate::templates_structs::{
    FacetOption, FilterTag, PageContext, PageLink, SearchTemplate, TableHeader,
};

/// Sort options accepted by the search page.
const SORT_OPTIONS: &[&str] = &["path", "format", "size", "date"];
const DEFAULT_SORT: &str = "path";

/// GET /search
/// Faceted digital file search: free-text query, format and collection
/// facets, date range, sortable columns, pagination. All state lives in
/// the query string.
pub async fn search(
    req: HttpRequest,
    session: Session,
    config: web::Data<AppConfig>,
    backend: web::Data<dyn SearchBackend>,
) -> Result<HttpResponse, AppError> {
    let current_url = request_url(&req)?;
    let pairs: Vec<(String, String)> = current_url.query_pairs().into_owned().collect();

    let parsed = filters::parse_filters(&pairs);
    let sort = SortSpec::from_params(
        param(&pairs, "sort"),
        param(&pairs, "sort_dir"),
        SORT_OPTIONS,
        DEFAULT_SORT,
    );
    let page = PageParams::from_params(param(&pairs, "page"), param(&pairs, "limit"));
    let query = param(&pairs, "query").unwrap_or("").to_string();

    let response = backend.search(&SearchRequest {
        query: query.clone(),
        filters: parsed.applied.clone(),
        sort: sort.clone(),
        page,
    })?;

    let filter_tags = build_filter_tags(&current_url, &parsed.display);
    let (format_options, collection_options) =
        build_facet_options(&response.aggregations, &parsed.display);
    let table_headers = build_table_headers(&current_url, &sort);

    let pagination = response.pagination;
    let prev_href = pagination
        .has_prev()
        .then(|| page_href(&current_url, pagination.prev_page()));
    let next_href = pagination
        .has_next()
        .then(|| page_href(&current_url, pagination.next_page()));
    let page_links = pagination
        .page_numbers()
        .into_iter()
        .map(|number| PageLink {
            number,
            href: page_href(&current_url, number),
            current: number == pagination.page,
        })
        .collect();

    let ctx = PageContext::build(&session, &config, &removal::local_href(&current_url));
    let tmpl = SearchTemplate {
        ctx,
        digital_files: response.hits,
        format_options,
        collection_options,
        filters: parsed.display,
        filter_tags,
        messages: parsed.messages,
        table_headers,
        sort,
        query,
        pagination,
        prev_href,
        next_href,
        page_links,
    };

    render(tmpl)
}

/// Rebuild the full request URL from the connection info; the filter
/// removal links are computed against it.
fn request_url(req: &HttpRequest) -> Result<Url, AppError> {
    let info = req.connection_info();
    let raw = format!("{}://{}{}", info.scheme(), info.host(), req.uri());
    Url::parse(&raw).map_err(|e| AppError::BadRequest(format!("Malformed request URL: {e}")))
}

/// Last value of `name`, matching how single-valued params win out when
/// a form submits duplicates.
fn param<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

fn build_filter_tags(current_url: &Url, display: &FilterSet) -> Vec<FilterTag> {
    display
        .active_filters()
        .into_iter()
        .map(|filter| {
            let label = match &filter {
                ActiveFilter::Facet { value, .. } => value.clone(),
                ActiveFilter::DateRange => date_range_label(display),
            };
            let remove_href = removal::local_href(&removal::remove_filter(current_url, &filter));
            FilterTag { label, remove_href }
        })
        .collect()
}

fn date_range_label(display: &FilterSet) -> String {
    match (display.start_date.is_empty(), display.end_date.is_empty()) {
        (false, false) => format!("Dates: {} to {}", display.start_date, display.end_date),
        (false, true) => format!("Dates: from {}", display.start_date),
        (true, false) => format!("Dates: until {}", display.end_date),
        (true, true) => "Dates".to_string(),
    }
}

fn build_facet_options(
    aggregations: &Aggregations,
    display: &FilterSet,
) -> (Vec<FacetOption>, Vec<FacetOption>) {
    let formats = aggregations
        .formats
        .iter()
        .map(|bucket| FacetOption {
            value: bucket.value.clone(),
            count: bucket.count,
            checked: display.formats.contains(&bucket.value),
        })
        .collect();
    let collections = aggregations
        .collections
        .iter()
        .map(|bucket| FacetOption {
            value: bucket.value.clone(),
            count: bucket.count,
            checked: display.collections.contains(&bucket.value),
        })
        .collect();
    (formats, collections)
}

fn build_table_headers(current_url: &Url, sort: &SortSpec) -> Vec<TableHeader> {
    let columns: &[(&str, Option<&str>)] = &[
        ("Filepath", Some("path")),
        ("Format", Some("format")),
        ("Size", Some("size")),
        ("Last modified", Some("date")),
        ("Collection name", None),
    ];
    columns
        .iter()
        .map(|(label, sort_param)| TableHeader {
            label: label.to_string(),
            sort_href: sort_param.map(|option| sort_href(current_url, sort, option)),
            active: sort_param.is_some_and(|option| option == sort.option),
        })
        .collect()
}

/// Header link: sort by `option`, flipping the direction when the
/// column is already active.
fn sort_href(current_url: &Url, sort: &SortSpec, option: &str) -> String {
    let dir = if sort.option == option { sort.toggle_dir() } else { "asc" };
    let next = removal::replace_param(current_url, "sort", option);
    let next = removal::replace_param(&next, "sort_dir", dir);
    removal::local_href(&next)
}

fn page_href(current_url: &Url, page: usize) -> String {
    removal::local_href(&removal::replace_param(current_url, "page", &page.to_string()))
}
