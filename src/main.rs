use searchsync::api::HttpSearchClient;
use searchsync::config::Config;
use searchsync::AppContext;
use std::sync::Arc;
use tracing::{error, info};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let api = match HttpSearchClient::from_config(&config) {
        Ok(api) => api,
        Err(e) => {
            error!("Failed to create search client: {}", e);
            std::process::exit(1);
        }
    };

    // Sessions and fetches run here; the UI thread only renders
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create runtime: {}", e);
            std::process::exit(1);
        }
    };

    let context = AppContext {
        config,
        api: Arc::new(api),
        runtime_handle: runtime.handle().clone(),
    };

    info!("Starting searchsync");
    launch(context);
}

#[cfg(feature = "desktop")]
fn launch(context: AppContext) {
    use searchsync::ui::{make_config, App};

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(context)
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch(_context: AppContext) {
    error!("searchsync was built without a renderer; enable the `desktop` feature");
    std::process::exit(1);
}
