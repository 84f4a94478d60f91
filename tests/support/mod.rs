pub mod fake_search_api;
pub mod recording_history;

pub use fake_search_api::FakeSearchApi;
pub use recording_history::RecordingHistory;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
