use std::collections::HashMap;
use tracing::debug;

/// Query key carrying the selected page
pub const PAGE_NUMBER_PARAM: &str = "pageNumber";
/// Query key carrying the search text
pub const SEARCH_QUERY_PARAM: &str = "searchQuery";
/// Pages offered by the page selector
pub const PAGE_CHOICES: [u32; 3] = [1, 2, 3];

/// Parameters sent with one fetch cycle.
///
/// Both fields are optional because URL parameters may carry either one alone.
/// Local state always fills both before a fetch is dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchParams {
    pub page_number: Option<u32>,
    pub search_query: Option<String>,
}

impl SearchParams {
    pub fn new(page_number: u32, search_query: impl Into<String>) -> Self {
        Self {
            page_number: Some(page_number),
            search_query: Some(search_query.into()),
        }
    }

    /// Read `pageNumber` and `searchQuery` out of decoded URL parameters.
    ///
    /// Empty values count as absent. A page number that is not a positive
    /// integer is dropped so local state never leaves the valid range.
    pub fn from_query_params(params: &HashMap<String, String>) -> Self {
        let page_number = params
            .get(PAGE_NUMBER_PARAM)
            .filter(|value| !value.is_empty())
            .and_then(|value| match value.trim().parse::<u32>() {
                Ok(page) if page > 0 => Some(page),
                _ => {
                    debug!("Ignoring invalid {} parameter: {:?}", PAGE_NUMBER_PARAM, value);
                    None
                }
            });

        let search_query = params
            .get(SEARCH_QUERY_PARAM)
            .filter(|value| !value.is_empty())
            .cloned();

        Self {
            page_number,
            search_query,
        }
    }

    /// Build `?pageNumber=1&searchQuery=cats&`.
    ///
    /// Every pair is followed by `&`, including the last one. A zero page or an
    /// empty search text is left out entirely.
    pub fn query_string(&self) -> String {
        let mut query = String::from("?");

        if let Some(page) = self.page_number.filter(|page| *page != 0) {
            query.push_str(&format!("{}={}&", PAGE_NUMBER_PARAM, page));
        }
        if let Some(text) = self.search_query.as_deref().filter(|text| !text.is_empty()) {
            query.push_str(&format!(
                "{}={}&",
                SEARCH_QUERY_PARAM,
                urlencoding::encode(text)
            ));
        }

        query
    }

    /// Relative request target, e.g. `api/whatever?pageNumber=1&`
    pub fn fetch_target(&self, endpoint: &str) -> String {
        format!("{}{}", endpoint, self.query_string())
    }

    /// Address pushed after a fetch: the current path, a `/`, then the query string.
    pub fn push_href(&self, pathname: &str) -> String {
        format!("{}/{}", pathname, self.query_string())
    }

    /// Result lines shown for a completed fetch.
    ///
    /// The response body is never consulted; the lines echo the submitted
    /// parameters. Each line is gated on the *other* field being present.
    pub fn synthesize_results(&self) -> Vec<String> {
        let mut results = Vec::with_capacity(2);

        if self.search_query.is_some() {
            results.push(format!("pageNumber: {}", self.page_number.unwrap_or(1)));
        }
        if self.page_number.is_some() {
            results.push(format!(
                "query: {}",
                self.search_query.as_deref().unwrap_or_default()
            ));
        }

        results
    }
}

/// Split a raw query string (with or without the leading `?`) into decoded pairs.
///
/// Empty segments such as the trailing one after the final `&` are skipped.
pub fn parse_query_string(raw: &str) -> HashMap<String, String> {
    raw.trim_start_matches('?')
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            let key = urlencoding::decode(key).ok()?.into_owned();
            let value = urlencoding::decode(&value.replace('+', " "))
                .ok()?
                .into_owned();
            Some((key, value))
        })
        .collect()
}
