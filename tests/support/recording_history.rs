use searchsync::navigation::{History, HistoryRequest};
use searchsync::search::SearchParams;
use std::sync::Mutex;

/// History that only records what was pushed
pub struct RecordingHistory {
    requests: Mutex<Vec<HistoryRequest>>,
}

impl RecordingHistory {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<HistoryRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Hrefs of every shallow push, in order
    pub fn pushed_hrefs(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter_map(|request| match request {
                HistoryRequest::PushShallow { href, .. } => Some(href),
                HistoryRequest::PushClean { .. } => None,
            })
            .collect()
    }
}

impl History for RecordingHistory {
    fn push_shallow(&self, href: &str, params: &SearchParams) {
        self.requests
            .lock()
            .unwrap()
            .push(HistoryRequest::PushShallow {
                href: href.to_string(),
                params: params.clone(),
            });
    }

    fn push_clean(&self, pathname: &str) {
        self.requests.lock().unwrap().push(HistoryRequest::PushClean {
            pathname: pathname.to_string(),
        });
    }
}
