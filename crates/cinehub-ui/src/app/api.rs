//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one catalog client per app boot.
//! - Components reach it through context rather than constructing clients.

use crate::app::config;
use crate::services::tmdb::TmdbClient;
use std::rc::Rc;
use yew::prelude::*;

/// Shared catalog client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton catalog client instance.
    pub client: Rc<TmdbClient>,
}

impl ApiCtx {
    /// Create a new context with the configured base URL and credential.
    pub(crate) fn new(base_url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            client: Rc::new(TmdbClient::new(base_url, bearer_token)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

/// Reach the shared client, falling back to a fresh one outside the provider.
#[hook]
pub(crate) fn use_api() -> ApiCtx {
    use_context::<ApiCtx>()
        .unwrap_or_else(|| ApiCtx::new(config::TMDB_BASE_URL, config::TMDB_BEARER_TOKEN))
}
