use super::query::{SearchParams, PAGE_CHOICES};
use super::types::{
    FetchCycle, FetchOutcome, FetchTrigger, SearchCommand, SearchEvent, SearchState,
};
use crate::navigation::NavigationSnapshot;
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// Fetch that has been dispatched and not yet completed
#[derive(Debug, Clone)]
struct InFlight {
    cycle: FetchCycle,
    params: SearchParams,
}

/// Reconciles page state, the address bar and the fetch for one search page.
///
/// Every input arrives as a [`SearchEvent`] and every side effect leaves as a
/// [`SearchCommand`]; the controller itself performs no I/O. Each event
/// dispatches at most one fetch, and at most one fetch is outstanding at a time.
#[derive(Debug)]
pub struct SearchController {
    state: SearchState,
    trigger: FetchTrigger,
    pathname: String,
    in_flight: Option<InFlight>,
    next_cycle: FetchCycle,
    /// Query string the address bar is known to show, either pushed by us
    /// or read from the router. Navigation that repeats it is an echo.
    synced_query: Option<String>,
    /// Pushed query strings the router has not reported back yet, oldest first
    pending_echoes: VecDeque<String>,
    /// Navigation that arrived while a fetch was outstanding
    deferred_navigation: Option<NavigationSnapshot>,
    /// State changed while a fetch was outstanding in `EveryChange` mode
    refetch_pending: bool,
}

impl SearchController {
    pub fn new(trigger: FetchTrigger, pathname: impl Into<String>) -> Self {
        Self {
            state: SearchState::default(),
            trigger,
            pathname: pathname.into(),
            in_flight: None,
            next_cycle: 1,
            synced_query: None,
            pending_echoes: VecDeque::new(),
            deferred_navigation: None,
            refetch_pending: false,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn trigger(&self) -> FetchTrigger {
        self.trigger
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight.is_none()
    }

    /// Apply one event and return the side effects it requires
    pub fn handle(&mut self, event: SearchEvent) -> Vec<SearchCommand> {
        match event {
            SearchEvent::Navigated(snapshot) => self.navigated(snapshot),
            SearchEvent::Submit => self.submit(),
            SearchEvent::ChangePage(page_number) => self.change_page(page_number),
            SearchEvent::InputChanged(text) => self.input_changed(text),
            SearchEvent::Reset => self.reset(),
            SearchEvent::FetchCompleted { cycle, outcome } => self.fetch_completed(cycle, outcome),
        }
    }

    fn submit(&mut self) -> Vec<SearchCommand> {
        if !self.is_idle() {
            debug!("Submit ignored, a fetch is already in flight");
            return Vec::new();
        }
        self.start_cycle(true)
    }

    fn change_page(&mut self, page_number: u32) -> Vec<SearchCommand> {
        if !PAGE_CHOICES.contains(&page_number) {
            warn!("Ignoring page {} outside {:?}", page_number, PAGE_CHOICES);
            return Vec::new();
        }
        if !self.is_idle() {
            debug!("Page change to {} ignored, a fetch is in flight", page_number);
            return Vec::new();
        }
        if self.state.page_number == page_number {
            return Vec::new();
        }

        self.state.page_number = page_number;
        self.start_cycle(true)
    }

    fn input_changed(&mut self, text: String) -> Vec<SearchCommand> {
        if self.state.search_query == text {
            return Vec::new();
        }
        self.state.search_query = text;

        match self.trigger {
            FetchTrigger::Explicit => Vec::new(),
            FetchTrigger::EveryChange if self.is_idle() => self.start_cycle(true),
            FetchTrigger::EveryChange => {
                self.refetch_pending = true;
                Vec::new()
            }
        }
    }

    fn reset(&mut self) -> Vec<SearchCommand> {
        if !self.is_idle() {
            debug!("Reset ignored, a fetch is in flight");
            return Vec::new();
        }

        self.state.search_query.clear();
        self.state.page_number = 1;
        self.state.results.clear();
        self.state.last_error = None;
        self.synced_query = None;
        self.pending_echoes.clear();
        self.refetch_pending = false;

        // Clearing the form never fetches, in either mode
        vec![SearchCommand::PushClean {
            pathname: self.pathname.clone(),
        }]
    }

    fn navigated(&mut self, snapshot: NavigationSnapshot) -> Vec<SearchCommand> {
        if !snapshot.is_ready {
            debug!("Router not ready, waiting for query parameters");
            return Vec::new();
        }
        self.pathname = snapshot.pathname.clone();

        if snapshot.query_params.is_empty() {
            return Vec::new();
        }

        let url_params = snapshot.search_params();
        let url_query = url_params.query_string();
        if self.confirm_echo(&url_query) {
            debug!("Router confirmed pushed address {}", url_query);
            return Vec::new();
        }
        if self.synced_query.as_deref() == Some(url_query.as_str()) {
            debug!("Address {} already reflects local state", url_query);
            return Vec::new();
        }

        if !self.is_idle() {
            debug!("Deferring navigation to {} until the current fetch settles", url_query);
            self.deferred_navigation = Some(snapshot);
            return Vec::new();
        }

        if let Some(page_number) = url_params.page_number {
            self.state.page_number = page_number;
        }
        if let Some(search_query) = url_params.search_query {
            self.state.search_query = search_query;
        }
        self.synced_query = Some(url_query);
        self.refetch_pending = false;

        // The address already shows these values, so nothing is pushed
        self.start_cycle(false)
    }

    fn fetch_completed(&mut self, cycle: FetchCycle, outcome: FetchOutcome) -> Vec<SearchCommand> {
        let in_flight = match self.in_flight.take() {
            Some(in_flight) if in_flight.cycle == cycle => in_flight,
            other => {
                debug!("Dropping completion of stale fetch cycle {}", cycle);
                self.in_flight = other;
                return Vec::new();
            }
        };

        self.state.is_submitting = false;
        match outcome {
            FetchOutcome::Completed => {
                self.state.results = in_flight.params.synthesize_results();
                self.state.last_error = None;
            }
            FetchOutcome::Failed(reason) => {
                warn!("Fetch cycle {} failed: {}", cycle, reason);
                self.state.last_error = Some(reason);
            }
        }

        if let Some(snapshot) = self.deferred_navigation.take() {
            return self.navigated(snapshot);
        }
        if std::mem::take(&mut self.refetch_pending) {
            return self.start_cycle(true);
        }
        Vec::new()
    }

    /// Match `query` against the pushes still waiting for the router. The router
    /// reports pushes in order, so a match also settles every older entry.
    fn confirm_echo(&mut self, query: &str) -> bool {
        match self.pending_echoes.iter().position(|pushed| pushed == query) {
            Some(index) => {
                self.pending_echoes.drain(..=index);
                true
            }
            None => false,
        }
    }

    fn start_cycle(&mut self, push_url: bool) -> Vec<SearchCommand> {
        let cycle = self.next_cycle;
        self.next_cycle += 1;

        let params = self.state.params();
        self.state.is_submitting = true;
        self.in_flight = Some(InFlight {
            cycle,
            params: params.clone(),
        });

        info!(
            "Dispatching fetch cycle {} with {}",
            cycle,
            params.query_string()
        );

        let mut commands = vec![SearchCommand::Fetch {
            cycle,
            params: params.clone(),
        }];
        if push_url {
            let query = params.query_string();
            // Pushing the address already shown does not change the route, so no echo follows
            if self.synced_query.as_deref() != Some(query.as_str()) {
                self.pending_echoes.push_back(query.clone());
            }
            self.synced_query = Some(query);
            commands.push(SearchCommand::PushShallow {
                href: params.push_href(&self.pathname),
                params,
            });
        }
        commands
    }
}
