//! Contracts for the external collaborators this layer is glue over.
//!
//! The object store owns persistence, authorization, and transport; this
//! layer only shapes what goes in and what comes out. Both collaborators
//! are injected as trait objects through
//! [RequestContext](crate::context::RequestContext).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::context::AuthContext;

/// Options forwarded to the store alongside a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Sort key; a `-` prefix flips to descending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_class_name_for_key: Option<String>,
}

/// Result envelope returned by both `find` and `get`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindResponse {
    pub results: Vec<Value>,
}

/// Narrow client contract against the REST object store.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Run a query against a class and return the matching records.
    async fn find(
        &self,
        auth: &AuthContext,
        class_name: &str,
        query: &Map<String, Value>,
        options: &FindOptions,
    ) -> anyhow::Result<FindResponse>;

    /// Point lookup of a single record by its store-assigned id.
    async fn get(
        &self,
        auth: &AuthContext,
        class_name: &str,
        object_id: &str,
        options: &FindOptions,
    ) -> anyhow::Result<FindResponse>;
}

/// Handle to a stored file, as reported back by the files controller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedFile {
    pub name: String,
    pub url: String,
}

/// Store-side file persistence, used by the upload marshalling path.
#[async_trait]
pub trait FilesController: Send + Sync {
    async fn create_file(
        &self,
        name: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> anyhow::Result<CreatedFile>;
}
