//! Resolver orchestration over the store client.
//!
//! Three query shapes: list/find, point get, and polymorphic pointer
//! resolution, plus the cross-type `node` lookup by global id. Each call
//! recomputes everything from its arguments; no state crosses requests.

use async_graphql::{Context, ID, Json, Object, Result as GqlResult};
use serde_json::{Map, Value};

use crate::connection::ConnectionArgs;
use crate::context::RequestContext;
use crate::error::Error;
use crate::ids::decode_global_id;
use crate::query::{parse_connection_args, transform_query};
use crate::store::FindOptions;
use crate::transform::transform_result;

/// Run a find against the store and reshape the result page.
///
/// The caller's `where` tree is translated (never mutated), merged with the
/// resolver-supplied extra query and the pagination range constraints, and
/// issued with the computed options. Extra-query keys win over the
/// translated filter, pagination additions win over both. An empty page
/// short-circuits without touching the transformer.
pub async fn run_find(
    ctx: &RequestContext,
    class_name: &str,
    args: &ConnectionArgs,
    extra_query: Option<&Map<String, Value>>,
) -> Result<Vec<Value>, Error> {
    let mut query = match &args.r#where {
        Some(Json(where_tree)) => transform_query(where_tree),
        None => Map::new(),
    };
    if let Some(extra) = extra_query {
        for (key, value) in extra {
            query.insert(key.clone(), value.clone());
        }
    }
    let (options, additions) = parse_connection_args(args);
    for (key, value) in additions {
        query.insert(key, value);
    }

    tracing::debug!(class_name, ?options, "running find against the store");
    let response = ctx
        .store
        .find(&ctx.auth, class_name, &query, &options)
        .await?;

    if response.results.is_empty() {
        return Ok(Vec::new());
    }
    Ok(response
        .results
        .into_iter()
        .map(|result| transform_result(class_name, result))
        .collect())
}

/// Point lookup of one record; `None` when the store finds nothing.
pub async fn run_get(
    ctx: &RequestContext,
    class_name: &str,
    object_id: &str,
) -> Result<Option<Value>, Error> {
    tracing::debug!(class_name, object_id, "running get against the store");
    let response = ctx
        .store
        .get(&ctx.auth, class_name, object_id, &FindOptions::default())
        .await?;

    Ok(response
        .results
        .into_iter()
        .next()
        .map(|result| transform_result(class_name, result)))
}

/// True when a selection set asks for nothing beyond the identifiers a
/// pointer stub already carries.
pub fn contains_only_id_fields(selections: &[&str]) -> bool {
    let wants_id = selections.contains(&"id");
    let wants_object_id = selections.contains(&"objectId");
    (wants_id && wants_object_id && selections.len() == 2)
        || (wants_id && selections.len() == 1)
        || (wants_object_id && selections.len() == 1)
}

/// Resolve a pointer to a record in another class.
///
/// When the caller selected only identifier fields, the node is synthesized
/// from the stub without a store round-trip; otherwise the target record is
/// fetched in full from the class the stub names (falling back to the
/// declared target class). A stub with no `objectId` resolves to `None`.
pub async fn resolve_pointer(
    ctx: &RequestContext,
    target_class: &str,
    object: &Map<String, Value>,
    selected_fields: &[&str],
) -> Result<Option<Value>, Error> {
    if contains_only_id_fields(selected_fields) {
        return Ok(Some(transform_result(
            target_class,
            Value::Object(object.clone()),
        )));
    }

    let class_name = object
        .get("className")
        .and_then(Value::as_str)
        .unwrap_or(target_class);
    match object.get("objectId").and_then(Value::as_str) {
        Some(object_id) => run_get(ctx, class_name, object_id).await,
        None => Ok(None),
    }
}

/// Decode a global id and fetch the record it names, whatever its class.
pub async fn node_by_id(ctx: &RequestContext, id: &str) -> Result<Option<Value>, Error> {
    let global_id = decode_global_id(id)?;
    run_get(ctx, &global_id.class_name, &global_id.object_id).await
}

/// Root query fields for cross-type lookup.
#[derive(Default)]
pub struct NodeQueries;

#[Object]
impl NodeQueries {
    /// Fetch any record by its globally unique ID
    async fn node(&self, ctx: &Context<'_>, id: ID) -> GqlResult<Option<Json<Value>>> {
        let request = ctx.data_unchecked::<RequestContext>();
        let node = node_by_id(request, id.as_str())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(node.map(Json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_only_selection_sets() {
        assert!(contains_only_id_fields(&["id"]));
        assert!(contains_only_id_fields(&["objectId"]));
        assert!(contains_only_id_fields(&["id", "objectId"]));
        assert!(contains_only_id_fields(&["objectId", "id"]));

        assert!(!contains_only_id_fields(&[]));
        assert!(!contains_only_id_fields(&["id", "name"]));
        assert!(!contains_only_id_fields(&["id", "objectId", "name"]));
        assert!(!contains_only_id_fields(&["id", "id", "objectId"]));
    }
}
