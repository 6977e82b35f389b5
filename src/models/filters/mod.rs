use chrono::NaiveDate;

pub mod removal;

/// Query parameter carrying selected file formats.
pub const FORMAT_PARAM: &str = "for";
/// Query parameter carrying selected collection titles.
pub const COLLECTION_PARAM: &str = "col";
pub const START_DATE_PARAM: &str = "start_date";
pub const END_DATE_PARAM: &str = "end_date";
/// Pseudo-parameter used by the compound date-range tag. Not a real
/// query key; it selects the removal branch that drops both date params.
pub const DATES_PARAM: &str = "dates";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One removable filter selection as shown on the search page.
///
/// A `Facet` is a single (parameter, value) pair. `DateRange` is the
/// compound selection backed by the two reserved date parameters, which
/// are always removed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveFilter {
    Facet { name: String, value: String },
    DateRange,
}

impl ActiveFilter {
    pub fn facet(name: &str, value: &str) -> Self {
        ActiveFilter::Facet {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// Map a tag's wire parameters to a filter. Only the literal name
    /// `dates` selects the compound variant; any other name is an
    /// ordinary facet, the reserved date keys included.
    pub fn from_params(name: &str, value: Option<&str>) -> Self {
        if name == DATES_PARAM {
            ActiveFilter::DateRange
        } else {
            ActiveFilter::facet(name, value.unwrap_or(""))
        }
    }
}

/// All values of `name` in `pairs`, in insertion order.
pub fn values_of(pairs: &[(String, String)], name: &str) -> Vec<String> {
    pairs
        .iter()
        .filter(|(k, _)| k == name)
        .map(|(_, v)| v.clone())
        .collect()
}

/// Last value of `name` in `pairs`, empty string if absent.
fn last_value_of(pairs: &[(String, String)], name: &str) -> String {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.clone())
        .unwrap_or_default()
}

/// Filter values as submitted, used to re-render the search form.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    pub formats: Vec<String>,
    pub collections: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

impl FilterSet {
    /// Removable tags for the current selections, in display order:
    /// formats, collections, then the compound dates tag.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut filters: Vec<ActiveFilter> = self
            .formats
            .iter()
            .map(|v| ActiveFilter::facet(FORMAT_PARAM, v))
            .collect();
        filters.extend(
            self.collections
                .iter()
                .map(|v| ActiveFilter::facet(COLLECTION_PARAM, v)),
        );
        if !self.start_date.is_empty() || !self.end_date.is_empty() {
            filters.push(ActiveFilter::DateRange);
        }
        filters
    }
}

/// Filters that passed validation, ready to hand to the search backend.
#[derive(Debug, Clone, Default)]
pub struct AppliedFilters {
    pub formats: Vec<String>,
    pub collections: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Outcome of reading the filter parameters from the query pairs.
///
/// `display` keeps every submitted value so the form re-renders what the
/// user typed; `applied` drops invalid dates, which instead surface as a
/// message. An invalid date is degraded input, not an error.
#[derive(Debug, Clone, Default)]
pub struct ParsedFilters {
    pub display: FilterSet,
    pub applied: AppliedFilters,
    pub messages: Vec<String>,
}

/// Read and validate the filter parameters from the ordered query pairs.
pub fn parse_filters(pairs: &[(String, String)]) -> ParsedFilters {
    let display = FilterSet {
        formats: values_of(pairs, FORMAT_PARAM),
        collections: values_of(pairs, COLLECTION_PARAM),
        start_date: last_value_of(pairs, START_DATE_PARAM),
        end_date: last_value_of(pairs, END_DATE_PARAM),
    };

    let mut messages = Vec::new();
    let start_date = parse_date(&display.start_date, "start date", &mut messages);
    let end_date = parse_date(&display.end_date, "end date", &mut messages);

    let applied = AppliedFilters {
        formats: display.formats.clone(),
        collections: display.collections.clone(),
        start_date,
        end_date,
    };

    ParsedFilters {
        display,
        applied,
        messages,
    }
}

fn parse_date(value: &str, label: &str, messages: &mut Vec<String>) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            messages.push(format!(
                "Incorrect date format for {label} ({value}). Expected: yyyy-mm-dd."
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn from_params_maps_dates_to_compound() {
        let filter = ActiveFilter::from_params("dates", None);
        assert_eq!(filter, ActiveFilter::DateRange);
    }

    #[test]
    fn from_params_keeps_reserved_keys_as_facets() {
        // Only the literal "dates" tag is compound; the underlying date
        // keys behave as ordinary facets when addressed directly.
        let filter = ActiveFilter::from_params("start_date", Some("2020-01-01"));
        assert_eq!(filter, ActiveFilter::facet("start_date", "2020-01-01"));
    }

    #[test]
    fn parse_collects_repeated_values_in_order() {
        let parsed = parse_filters(&pairs(&[
            ("for", "JPEG"),
            ("col", "Photographs"),
            ("for", "PDF"),
        ]));
        assert_eq!(parsed.display.formats, vec!["JPEG", "PDF"]);
        assert_eq!(parsed.display.collections, vec!["Photographs"]);
        assert!(parsed.messages.is_empty());
    }

    #[test]
    fn parse_accepts_valid_dates() {
        let parsed = parse_filters(&pairs(&[
            ("start_date", "2020-01-01"),
            ("end_date", "2020-12-31"),
        ]));
        assert_eq!(
            parsed.applied.start_date,
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
        assert_eq!(
            parsed.applied.end_date,
            NaiveDate::from_ymd_opt(2020, 12, 31)
        );
        assert!(parsed.messages.is_empty());
    }

    #[test]
    fn parse_drops_invalid_date_but_keeps_it_displayed() {
        let parsed = parse_filters(&pairs(&[("start_date", "01/02/2020")]));
        assert_eq!(parsed.display.start_date, "01/02/2020");
        assert_eq!(parsed.applied.start_date, None);
        assert_eq!(
            parsed.messages,
            vec!["Incorrect date format for start date (01/02/2020). Expected: yyyy-mm-dd."]
        );
    }

    #[test]
    fn parse_reports_both_invalid_dates() {
        let parsed = parse_filters(&pairs(&[
            ("start_date", "bad"),
            ("end_date", "worse"),
        ]));
        assert_eq!(parsed.messages.len(), 2);
        assert!(parsed.messages[1].contains("end date (worse)"));
    }

    #[test]
    fn active_filters_order_and_compound_tag() {
        let parsed = parse_filters(&pairs(&[
            ("for", "JPEG"),
            ("col", "Maps"),
            ("start_date", "2020-01-01"),
        ]));
        assert_eq!(
            parsed.display.active_filters(),
            vec![
                ActiveFilter::facet("for", "JPEG"),
                ActiveFilter::facet("col", "Maps"),
                ActiveFilter::DateRange,
            ]
        );
    }

    #[test]
    fn no_dates_tag_without_date_values() {
        let parsed = parse_filters(&pairs(&[("for", "JPEG")]));
        assert_eq!(
            parsed.display.active_filters(),
            vec![ActiveFilter::facet("for", "JPEG")]
        );
    }
}
