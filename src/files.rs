//! File-upload marshalling.
//!
//! Mutation inputs may carry inline file payloads on fields the class
//! schema types as `File`. Each payload becomes one store write; all writes
//! for one input run concurrently, and the input comes back with the
//! payloads replaced by store file handles.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use futures::future::try_join_all;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::context::RequestContext;
use crate::error::Error;
use crate::schema::SchemaMap;

/// Inline payload shape accepted on `File`-typed input fields.
#[derive(Debug, Deserialize)]
struct FilePayload {
    name: String,
    base64: String,
    #[serde(rename = "contentType")]
    content_type: String,
}

/// Upload every inline file payload in `input` and swap in the resulting
/// store handles.
///
/// Returns the updated input; fields the schema does not type as `File` are
/// untouched, and a class the schema provider does not know passes through
/// unchanged. One failed write fails the whole batch.
pub async fn handle_file_upload(
    ctx: &RequestContext,
    class_name: &str,
    mut input: Map<String, Value>,
    schema: &SchemaMap,
) -> Result<Map<String, Value>, Error> {
    let Some(class_schema) = schema.get(class_name) else {
        tracing::debug!(class_name, "no schema entry for class, skipping file marshalling");
        return Ok(input);
    };

    let mut uploads = Vec::new();
    for (field, definition) in &class_schema.fields {
        if !definition.is_file() {
            continue;
        }
        let Some(payload) = input.get(field) else {
            continue;
        };

        let payload: FilePayload = serde_json::from_value(payload.clone())
            .map_err(|_| Error::InvalidFileUpload {
                field: field.clone(),
            })?;
        let contents = BASE64
            .decode(&payload.base64)
            .map_err(|_| Error::InvalidFileUpload {
                field: field.clone(),
            })?;

        uploads.push(async move {
            let created = ctx
                .files
                .create_file(&payload.name, contents, &payload.content_type)
                .await?;
            Ok::<_, Error>((field.clone(), created))
        });
    }

    for (field, created) in try_join_all(uploads).await? {
        input.insert(
            field,
            json!({ "__type": "File", "name": created.name, "url": created.url }),
        );
    }
    Ok(input)
}
