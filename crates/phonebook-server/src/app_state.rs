//! Shared application state for the phonebook server.
//!
//! The contact registry is constructed once here and handed to every handler
//! through axum `State`. Startup errors are returned, not panicked.

use std::sync::Arc;

use phonebook_core::error::Result;
use phonebook_core::{ContactStore, InMemoryContactStore};

use crate::config::ServiceConfig;
use crate::docs::ApiDocs;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<dyn ContactStore>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    docs: ApiDocs,
}

impl AppState {
    /// Build application state with an empty in-memory registry.
    pub fn new(cfg: ServiceConfig) -> Result<Self> {
        Self::with_store(cfg, Arc::new(InMemoryContactStore::new()))
    }

    pub fn with_store(cfg: ServiceConfig, store: Arc<dyn ContactStore>) -> Result<Self> {
        let docs = ApiDocs::load()?;

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, docs }),
            store,
        })
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn docs(&self) -> &ApiDocs {
        &self.inner.docs
    }

    pub fn store(&self) -> &dyn ContactStore {
        self.store.as_ref()
    }
}
