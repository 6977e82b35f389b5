use actix_session::Session;
use askama::Template;

use crate::config::AppConfig;
use crate::models::digital_file::DigitalFile;
use crate::models::filters::FilterSet;
use crate::models::pagination::Pagination;
use crate::models::sort::SortSpec;
use crate::session::{self, LANGUAGES, csrf};

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.languages`, etc.
pub struct PageContext {
    pub app_name: String,
    pub language: String,
    pub languages: Vec<LanguageOption>,
    pub flash: Vec<String>,
    pub csrf_token: String,
    /// Path plus query of the current request, used as the language
    /// form's return target.
    pub current_path: String,
}

pub struct LanguageOption {
    pub code: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig, current_path: &str) -> Self {
        let language = session::get_language(session);
        let languages = LANGUAGES
            .iter()
            .map(|&(code, label)| LanguageOption {
                code,
                label,
                active: code == language,
            })
            .collect();
        PageContext {
            app_name: config.app_name.clone(),
            language,
            languages,
            flash: session::take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
            current_path: current_path.to_string(),
        }
    }
}

/// One removable filter chip with its precomputed navigation target.
pub struct FilterTag {
    pub label: String,
    pub remove_href: String,
}

/// One entry in a facet dropdown.
pub struct FacetOption {
    pub value: String,
    pub count: usize,
    pub checked: bool,
}

/// Results table column; sortable columns carry the link that re-sorts
/// by them.
pub struct TableHeader {
    pub label: String,
    pub sort_href: Option<String>,
    pub active: bool,
}

pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
}

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub ctx: PageContext,
    pub digital_files: Vec<DigitalFile>,
    pub format_options: Vec<FacetOption>,
    pub collection_options: Vec<FacetOption>,
    pub filters: FilterSet,
    pub filter_tags: Vec<FilterTag>,
    pub messages: Vec<String>,
    pub table_headers: Vec<TableHeader>,
    pub sort: SortSpec,
    pub query: String,
    pub pagination: Pagination,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
    pub page_links: Vec<PageLink>,
}
