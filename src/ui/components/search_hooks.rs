use crate::navigation::{ChannelHistory, HistoryRequest};
use crate::search::{FetchTrigger, SearchController, SearchHandle, SearchSession, SearchState};
use crate::ui::{AppContext, Route};
use dioxus::prelude::*;
use std::sync::Arc;
use tracing::debug;

/// Search session of the current page, shared with its child components
#[derive(Clone)]
pub struct SearchSessionContext {
    pub handle: SearchHandle,
    /// Mirror of the session state, updated whenever the session publishes
    pub state: Signal<SearchState>,
}

/// Start a search session for this page and mirror its state into a signal.
///
/// The session lives as long as the component: unmounting drops the handle,
/// which stops the session, and cancels the tasks spawned here.
pub fn use_search_session(trigger: FetchTrigger, pathname: String) -> SearchSessionContext {
    let app_context = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut state = use_signal(SearchState::default);

    let handle = use_hook(move || {
        let (history, mut history_rx) = ChannelHistory::new();
        let handle = SearchSession::start(
            SearchController::new(trigger, pathname),
            app_context.api.clone(),
            Arc::new(history),
            app_context.config.settle_delay,
            app_context.runtime_handle.clone(),
        );

        let mut state_rx = handle.subscribe();
        spawn(async move {
            while state_rx.changed().await.is_ok() {
                let latest = state_rx.borrow_and_update().clone();
                state.set(latest);
            }
        });

        // The router only accepts pushes from the UI side
        spawn(async move {
            while let Some(request) = history_rx.recv().await {
                navigator.push(route_for(trigger, request));
            }
        });

        handle
    });

    SearchSessionContext { handle, state }
}

/// Access the search session provided by the enclosing page
pub fn use_search_context() -> SearchSessionContext {
    use_context::<SearchSessionContext>()
}

fn route_for(trigger: FetchTrigger, request: HistoryRequest) -> Route {
    match request {
        HistoryRequest::PushShallow { href, params } => {
            debug!("Routing pushed address {}", href);
            Route::search(
                trigger,
                params
                    .page_number
                    .map(|page| page.to_string())
                    .unwrap_or_default(),
                params.search_query.unwrap_or_default(),
            )
        }
        HistoryRequest::PushClean { pathname } => {
            debug!("Routing clean navigation to {}", pathname);
            Route::search(trigger, String::new(), String::new())
        }
    }
}
