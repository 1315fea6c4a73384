//! Translation of GraphQL query arguments into store query syntax.

use chrono::SecondsFormat;
use serde_json::{Map, Value, json};

use crate::connection::ConnectionArgs;
use crate::ids::decode_cursor;
use crate::store::FindOptions;

/// Map one GraphQL constraint onto the store operator syntax.
///
/// Operator names translate 1:1 by `$`-prefixing; there is no allow-list,
/// every key is treated as an operator. `nearSphere` additionally flattens
/// the `{point: {latitude, longitude}}` input wrapper, which the store's
/// geo operator does not understand.
pub fn transform_constraint(name: &str, value: Value) -> (String, Value) {
    let value = if name == "nearSphere" {
        let point = value.get("point").cloned().unwrap_or(Value::Null);
        json!({
            "latitude": point.get("latitude").cloned().unwrap_or(Value::Null),
            "longitude": point.get("longitude").cloned().unwrap_or(Value::Null),
        })
    } else {
        value
    };

    (format!("${name}"), value)
}

/// Translate every field-level constraint set in a filter tree.
///
/// Returns a new tree; the caller's arguments are never aliased or mutated.
pub fn transform_query(query: &Map<String, Value>) -> Map<String, Value> {
    query
        .iter()
        .map(|(field, constraints)| {
            let translated = match constraints {
                Value::Object(constraints) => Value::Object(
                    constraints
                        .iter()
                        .map(|(name, value)| transform_constraint(name, value.clone()))
                        .collect(),
                ),
                other => other.clone(),
            };
            (field.clone(), translated)
        })
        .collect()
}

/// Split connection arguments into store options and query additions.
///
/// `first`/`last` bound the page and pick the `createdAt` sort direction
/// (`last` wins when both are given). `after`/`before` become range
/// constraints on `createdAt`; both write the same key, so the later
/// (`before`) silently wins when combined. `redirectClassNameForKey` passes
/// through as a store option unchanged.
pub fn parse_connection_args(args: &ConnectionArgs) -> (FindOptions, Map<String, Value>) {
    let mut options = FindOptions::default();
    let mut additions = Map::new();

    if let Some(first) = args.first {
        options.limit = Some(i64::from(first));
        options.order = Some("createdAt".to_string());
    }
    if let Some(last) = args.last {
        options.limit = Some(i64::from(last));
        options.order = Some("-createdAt".to_string());
    }
    if let Some(after) = &args.after {
        additions.insert("createdAt".to_string(), json!({ "$gt": cursor_bound(after) }));
    }
    if let Some(before) = &args.before {
        additions.insert("createdAt".to_string(), json!({ "$lt": cursor_bound(before) }));
    }
    if let Some(redirect) = &args.redirect_class_name_for_key {
        options.redirect_class_name_for_key = Some(redirect.clone());
    }

    (options, additions)
}

/// Comparison value for a cursor: the decoded timestamp, or `null` when the
/// cursor is malformed (a degenerate query that matches nothing).
fn cursor_bound(cursor: &str) -> Value {
    match decode_cursor(cursor) {
        Some(ts) => Value::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => {
            tracing::warn!(cursor, "unparseable pagination cursor, query will match nothing");
            Value::Null
        }
    }
}
