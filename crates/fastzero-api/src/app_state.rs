//! Shared application state for the fastzero api.
//!
//! Owns the record store (behind the user service), the loaded config, and
//! the metrics registry. Cloned into every handler.

use std::sync::Arc;

use fastzero_core::{InMemoryUserStore, UserService, UserStore};

use crate::config::ApiConfig;
use crate::obs::ApiMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<ApiMetrics>,
}

struct AppStateInner {
    cfg: ApiConfig,
    users: UserService,
}

impl AppState {
    /// State backed by a fresh in-memory store.
    pub fn new(cfg: ApiConfig) -> Self {
        Self::with_store(cfg, Arc::new(InMemoryUserStore::new()))
    }

    pub fn with_store(cfg: ApiConfig, store: Arc<dyn UserStore>) -> Self {
        let users = UserService::new(store).with_max_field_bytes(cfg.users.max_field_bytes);
        Self {
            inner: Arc::new(AppStateInner { cfg, users }),
            metrics: Arc::new(ApiMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &ApiConfig {
        &self.inner.cfg
    }

    pub fn users(&self) -> &UserService {
        &self.inner.users
    }

    pub fn metrics(&self) -> Arc<ApiMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    /// Gauges computed at scrape time.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        match self.users().count() {
            Ok(n) => vec![("fastzero_users", n as u64)],
            Err(e) => {
                tracing::warn!(err = %e, "user count unavailable for metrics");
                vec![]
            }
        }
    }
}
