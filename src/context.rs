//! Per-request execution context.
//!
//! The store client is injected here rather than imported as a module
//! singleton, so two schemas can front two stores in one process and tests
//! can substitute doubles.

use std::sync::Arc;

use crate::config::GraphQlConfig;
use crate::store::{FilesController, StoreClient};

/// Caller identity forwarded to the store untouched; this layer never
/// interprets it.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    pub session_token: Option<String>,
    /// Set when the caller holds the master key.
    pub master: bool,
}

/// Everything a resolver needs to answer one request.
#[derive(Clone)]
pub struct RequestContext {
    pub store: Arc<dyn StoreClient>,
    pub files: Arc<dyn FilesController>,
    pub auth: AuthContext,
    pub config: GraphQlConfig,
}

impl RequestContext {
    pub fn new(
        store: Arc<dyn StoreClient>,
        files: Arc<dyn FilesController>,
        auth: AuthContext,
        config: GraphQlConfig,
    ) -> Self {
        Self {
            store,
            files,
            auth,
            config,
        }
    }
}
