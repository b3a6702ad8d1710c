//! Listing request and response DTOs.

use pokedex_core::{DEFAULT_LIMIT, Entry, ListQuery, Page, PageWindow};
use serde::{Deserialize, Serialize};
use url::Url;

/// Raw query string of a listing request.
///
/// Kept as strings so malformed numbers fall back to defaults instead of
/// rejecting the request. A zero limit also takes the default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    #[serde(rename = "searchText")]
    pub search_text: Option<String>,
}

fn parse_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

impl ListParams {
    pub fn query(&self) -> ListQuery {
        let limit = match parse_or(self.limit.as_deref(), DEFAULT_LIMIT) {
            0 => DEFAULT_LIMIT,
            limit => limit,
        };
        let window = PageWindow::new(parse_or(self.offset.as_deref(), 0), limit);
        let query = ListQuery::new(window);
        match self.search_text.as_deref() {
            Some(search) if !search.is_empty() => query.with_search(search),
            _ => query,
        }
    }
}

/// Listing response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_offset: Option<usize>,
    pub results: Vec<Entry>,
}

impl ListResponse {
    /// Build the body for `page`, linking neighbours under `base`.
    pub fn from_page(page: Page<Entry>, base: &Url, namespace: &str, search: Option<&str>) -> Self {
        let link = |window: PageWindow| page_url(base, namespace, window, search);
        Self {
            count: page.count,
            next: page.next.map(link),
            previous: page.previous.map(link),
            next_limit: page.next.map(|w| w.limit),
            next_offset: page.next.map(|w| w.offset),
            previous_limit: page.previous.map(|w| w.limit),
            previous_offset: page.previous.map(|w| w.offset),
            results: page.results,
        }
    }
}

/// Absolute URL of the listing page `window` in `namespace`.
pub fn page_url(base: &Url, namespace: &str, window: PageWindow, search: Option<&str>) -> String {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(namespace).push("pokemons");
    }
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("limit", &window.limit.to_string())
            .append_pair("offset", &window.offset.to_string());
        if let Some(search) = search.filter(|s| !s.is_empty()) {
            pairs.append_pair("searchText", search);
        }
    }
    url.into()
}
