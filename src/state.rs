//! Shared state handed to every request handler.

use crate::{config::AppConfig, services::registry_service::EventRegistry};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    pub registry: EventRegistry,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            registry: EventRegistry::new(),
            config: Arc::new(config),
        }
    }

    /// Origin (`scheme://host:port`) advertised to clients: the configured
    /// public URL, else the request's `Host`, else the bind address with a
    /// wildcard host replaced by `localhost`.
    pub fn origin_for(&self, request_host: Option<&str>) -> String {
        if let Some(url) = &self.config.public_url {
            return url.clone();
        }
        if let Some(host) = request_host.filter(|h| !h.is_empty()) {
            return format!("http://{}", host);
        }
        let host = match self.config.host.as_str() {
            "" | "0.0.0.0" | "::" | "[::]" => "localhost",
            other => other,
        };
        format!("http://{}:{}", host, self.config.port)
    }
}
