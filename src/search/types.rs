use crate::navigation::NavigationSnapshot;
use crate::search::query::SearchParams;

/// Local page state, owned by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub search_query: String,
    /// Always a positive integer
    pub page_number: u32,
    pub is_submitting: bool,
    pub results: Vec<String>,
    /// Reason the most recent fetch failed, cleared by the next successful one
    pub last_error: Option<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            page_number: 1,
            is_submitting: false,
            results: Vec::new(),
            last_error: None,
        }
    }
}

impl SearchState {
    /// Parameters a fetch for the current state would carry
    pub fn params(&self) -> SearchParams {
        SearchParams::new(self.page_number, self.search_query.clone())
    }
}

/// Which state changes dispatch a fetch on their own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchTrigger {
    /// Only submit, page selection and navigation fetch
    #[default]
    Explicit,
    /// Every page or search text change fetches, including each keystroke
    EveryChange,
}

/// Identifies one fetch cycle so late completions can be matched or dropped
pub type FetchCycle = u64;

/// How a fetch ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Completed,
    Failed(String),
}

/// Inputs to the controller, processed strictly one at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The router reported its location, on mount or after back/forward
    Navigated(NavigationSnapshot),
    /// Explicit form submission
    Submit,
    /// A page was picked from the selector
    ChangePage(u32),
    /// The search text input changed
    InputChanged(String),
    Reset,
    FetchCompleted {
        cycle: FetchCycle,
        outcome: FetchOutcome,
    },
}

/// Side effects requested by the controller, executed by the session in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommand {
    Fetch {
        cycle: FetchCycle,
        params: SearchParams,
    },
    PushShallow {
        href: String,
        params: SearchParams,
    },
    PushClean {
        pathname: String,
    },
}
