// # Navigation
//
// Read-only view of the router's current location plus the history capability
// the search session pushes new addresses through.

use crate::search::query::{
    parse_query_string, SearchParams, PAGE_NUMBER_PARAM, SEARCH_QUERY_PARAM,
};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Location reported by the navigation layer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationSnapshot {
    /// The router has resolved its query parameters and they are safe to read
    pub is_ready: bool,
    pub pathname: String,
    pub query_params: HashMap<String, String>,
}

impl NavigationSnapshot {
    pub fn new(pathname: impl Into<String>, query_params: HashMap<String, String>) -> Self {
        Self {
            is_ready: true,
            pathname: pathname.into(),
            query_params,
        }
    }

    /// Snapshot for a router that has not resolved its parameters yet
    pub fn pending(pathname: impl Into<String>) -> Self {
        Self {
            is_ready: false,
            pathname: pathname.into(),
            query_params: HashMap::new(),
        }
    }

    /// Parse an href such as `/live/?pageNumber=2&` into a ready snapshot.
    ///
    /// A single trailing slash on the path is dropped so that pushing the
    /// resulting pathname again does not grow it.
    pub fn from_href(href: &str) -> Self {
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        let pathname = if trimmed.is_empty() { "/" } else { trimmed };
        Self::new(pathname, parse_query_string(query))
    }

    /// Build a snapshot from route query arguments, where the router hands
    /// absent arguments over as empty strings.
    pub fn from_route_args(pathname: &str, page_number: &str, search_query: &str) -> Self {
        let query_params = [
            (PAGE_NUMBER_PARAM, page_number),
            (SEARCH_QUERY_PARAM, search_query),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

        Self::new(pathname, query_params)
    }

    pub fn search_params(&self) -> SearchParams {
        SearchParams::from_query_params(&self.query_params)
    }
}

/// History capability handed to the search session.
///
/// Implementations update the address bar; they never trigger a fetch.
pub trait History: Send + Sync {
    /// Update the address without a full data reload
    fn push_shallow(&self, href: &str, params: &SearchParams);

    /// Navigate to `pathname` with every query parameter cleared
    fn push_clean(&self, pathname: &str);
}

/// Navigation request forwarded to whoever owns the real router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryRequest {
    PushShallow { href: String, params: SearchParams },
    PushClean { pathname: String },
}

/// History that forwards requests over a channel.
///
/// The router lives on the UI thread, so the session cannot call it directly;
/// the UI drains the receiver and applies each request to its navigator.
#[derive(Clone)]
pub struct ChannelHistory {
    requests_tx: mpsc::UnboundedSender<HistoryRequest>,
}

impl ChannelHistory {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<HistoryRequest>) {
        let (requests_tx, requests_rx) = mpsc::unbounded_channel();
        (Self { requests_tx }, requests_rx)
    }
}

impl History for ChannelHistory {
    fn push_shallow(&self, href: &str, params: &SearchParams) {
        info!("Pushing {}", href);
        let request = HistoryRequest::PushShallow {
            href: href.to_string(),
            params: params.clone(),
        };
        if self.requests_tx.send(request).is_err() {
            debug!("History receiver dropped, push of {} discarded", href);
        }
    }

    fn push_clean(&self, pathname: &str) {
        info!("Navigating to {} with no query", pathname);
        let request = HistoryRequest::PushClean {
            pathname: pathname.to_string(),
        };
        if self.requests_tx.send(request).is_err() {
            debug!("History receiver dropped, navigation to {} discarded", pathname);
        }
    }
}
