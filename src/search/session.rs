// # Search Session
//
// Owns one SearchController and runs it on a single task. Events from the UI and
// fetch completions are funnelled into that task and processed one at a time;
// the commands the controller returns are executed against the injected fetch
// and history capabilities.

use super::controller::SearchController;
use super::types::{FetchOutcome, SearchCommand, SearchEvent, SearchState};
use crate::api::SearchApi;
use crate::navigation::{History, NavigationSnapshot};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Search session has shut down")]
    Closed,
}

/// Handle for sending events to a running search session and observing its state.
///
/// The session stops once every clone of the handle is dropped. Fetches still
/// in flight at that point finish, but their completions are discarded.
#[derive(Clone)]
pub struct SearchHandle {
    events_tx: mpsc::UnboundedSender<SearchEvent>,
    state_rx: watch::Receiver<SearchState>,
}

impl SearchHandle {
    pub fn send(&self, event: SearchEvent) -> Result<(), SessionError> {
        self.events_tx.send(event).map_err(|_| SessionError::Closed)
    }

    pub fn navigated(&self, snapshot: NavigationSnapshot) {
        self.send_or_log(SearchEvent::Navigated(snapshot));
    }

    pub fn submit(&self) {
        self.send_or_log(SearchEvent::Submit);
    }

    pub fn change_page(&self, page_number: u32) {
        self.send_or_log(SearchEvent::ChangePage(page_number));
    }

    pub fn set_search_query(&self, text: String) {
        self.send_or_log(SearchEvent::InputChanged(text));
    }

    pub fn reset(&self) {
        self.send_or_log(SearchEvent::Reset);
    }

    /// Latest published state
    pub fn state(&self) -> SearchState {
        self.state_rx.borrow().clone()
    }

    /// Receiver that is notified after every processed event that changed state
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state_rx.clone()
    }

    fn send_or_log(&self, event: SearchEvent) {
        if let Err(e) = self.send(event) {
            debug!("Dropping search event: {}", e);
        }
    }
}

/// Search session that drives a controller
pub struct SearchSession {
    controller: SearchController,
    api: Arc<dyn SearchApi>,
    history: Arc<dyn History>,
    settle_delay: Duration,
    events_rx: mpsc::UnboundedReceiver<SearchEvent>,
    completions_tx: mpsc::UnboundedSender<SearchEvent>,
    completions_rx: mpsc::UnboundedReceiver<SearchEvent>,
    state_tx: watch::Sender<SearchState>,
    runtime_handle: tokio::runtime::Handle,
}

impl SearchSession {
    /// Spawn the session on `runtime_handle` and return its handle
    pub fn start(
        controller: SearchController,
        api: Arc<dyn SearchApi>,
        history: Arc<dyn History>,
        settle_delay: Duration,
        runtime_handle: tokio::runtime::Handle,
    ) -> SearchHandle {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(controller.state().clone());

        let session = SearchSession {
            controller,
            api,
            history,
            settle_delay,
            events_rx,
            completions_tx,
            completions_rx,
            state_tx,
            runtime_handle: runtime_handle.clone(),
        };
        runtime_handle.spawn(session.run());

        SearchHandle {
            events_tx,
            state_rx,
        }
    }

    async fn run(mut self) {
        info!(
            "Search session started for {} ({:?})",
            self.controller.pathname(),
            self.controller.trigger()
        );

        loop {
            let event = tokio::select! {
                event = self.events_rx.recv() => match event {
                    Some(event) => event,
                    None => break,
                },
                Some(completion) = self.completions_rx.recv() => completion,
            };

            let commands = self.controller.handle(event);
            for command in commands {
                self.execute(command);
            }

            let state = self.controller.state();
            self.state_tx.send_if_modified(|published| {
                if published != state {
                    *published = state.clone();
                    true
                } else {
                    false
                }
            });
        }

        info!("Search session for {} stopped", self.controller.pathname());
    }

    fn execute(&self, command: SearchCommand) {
        match command {
            SearchCommand::Fetch { cycle, params } => {
                let api = self.api.clone();
                let completions_tx = self.completions_tx.clone();
                let settle_delay = self.settle_delay;

                self.runtime_handle.spawn(async move {
                    let outcome = match api.fetch(&params).await {
                        Ok(()) => FetchOutcome::Completed,
                        Err(e) => FetchOutcome::Failed(e.to_string()),
                    };
                    if !settle_delay.is_zero() {
                        tokio::time::sleep(settle_delay).await;
                    }
                    let _ = completions_tx.send(SearchEvent::FetchCompleted { cycle, outcome });
                });
            }
            SearchCommand::PushShallow { href, params } => {
                self.history.push_shallow(&href, &params);
            }
            SearchCommand::PushClean { pathname } => {
                self.history.push_clean(&pathname);
            }
        }
    }
}
