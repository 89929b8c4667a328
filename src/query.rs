use crate::api::FilterKind;

/// The active search filter, as carried in /search query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    pub kind: FilterKind,
    pub value: String,
}

impl SearchFilter {
    pub fn new(kind: FilterKind, value: impl Into<String>) -> Self {
        SearchFilter {
            kind,
            value: value.into(),
        }
    }
}

/// Parses a `page` query parameter, defaulting to 1 when it is absent or not
/// a number. Out-of-range values are left alone here; pagination clamps them.
pub fn page_from_query(raw: Option<&str>) -> i64 {
    raw.map(str::trim)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1)
}

/// Rebuilds the /search URL a drink page links back to, echoing the active
/// filter and page so the reader lands on the result page they came from.
/// Page 1 is the default and is omitted; with nothing to echo the link is a
/// bare /search.
pub fn back_to_search_url(filter: Option<&SearchFilter>, page: i64) -> String {
    let mut params: Vec<String> = Vec::new();

    if let Some(filter) = filter {
        params.push(format!(
            "{}={}",
            filter.kind.query_param(),
            urlencoding::encode(&filter.value)
        ));
    }
    if page > 1 {
        params.push(format!("page={}", page));
    }

    if params.is_empty() {
        "/search".to_string()
    } else {
        format!("/search?{}", params.join("&"))
    }
}
