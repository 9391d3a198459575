//! Context handle for the CafeChain backend client.
//!
//! The client carries the resolved [`UiConfig`], the session bearer token and
//! the abort handle of any login in flight, so the root builds it once and
//! every page shares that instance.

use crate::core::config::UiConfig;
use crate::services::api::ApiClient;
use std::rc::Rc;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Create a new context from the resolved configuration.
    pub(crate) fn new(config: UiConfig) -> Self {
        Self {
            client: Rc::new(ApiClient::new(config)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
