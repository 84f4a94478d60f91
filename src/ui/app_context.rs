use crate::api::SearchApi;
use crate::config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
    pub api: Arc<dyn SearchApi>,
    pub runtime_handle: tokio::runtime::Handle,
}
