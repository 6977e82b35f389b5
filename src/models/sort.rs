#[derive(Debug, Clone, Default, PartialEq)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

/// Validated sort state for a results table.
///
/// Each page declares its own option whitelist; anything outside it
/// falls back to the page default, and any direction other than `desc`
/// falls back to ascending.
#[derive(Debug, Clone)]
pub struct SortSpec {
    pub option: String,
    pub dir: SortDir,
}

impl SortSpec {
    pub fn from_params(
        sort: Option<&str>,
        dir: Option<&str>,
        options: &[&str],
        default: &str,
    ) -> Self {
        let option = match sort {
            Some(s) if options.contains(&s) => s.to_string(),
            _ => default.to_string(),
        };
        SortSpec {
            option,
            dir: if dir == Some("desc") { SortDir::Desc } else { SortDir::Asc },
        }
    }

    pub fn dir_str(&self) -> &'static str {
        match self.dir { SortDir::Asc => "asc", SortDir::Desc => "desc" }
    }

    /// Direction a column header link should submit to flip the order.
    pub fn toggle_dir(&self) -> &'static str {
        match self.dir { SortDir::Asc => "desc", SortDir::Desc => "asc" }
    }
}
