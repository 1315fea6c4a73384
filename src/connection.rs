//! Cursor-based connection types and the page-boundary rules.
//!
//! Follows the Relay connection shape (nodes, edges, page info). The page
//! flags are heuristics computed from page-size saturation and argument
//! presence, not store counts: a page that exactly fills its bound is
//! assumed to have a neighbour.

use async_graphql::{InputObject, Json, SimpleObject};
use serde_json::{Map, Value};

use crate::ids::encode_cursor;

/// Relay pagination and filter arguments, recognized independently and
/// freely combined.
#[derive(InputObject, Default, Clone, Debug)]
pub struct ConnectionArgs {
    /// Return the first N records, oldest first
    pub first: Option<i32>,
    /// Only records created after this cursor
    pub after: Option<String>,
    /// Return the last N records, newest first
    pub last: Option<i32>,
    /// Only records created before this cursor
    pub before: Option<String>,
    /// Field-level constraints, translated into store operators
    #[graphql(name = "where")]
    pub r#where: Option<Json<Map<String, Value>>>,
    /// Query the class this key's pointer redirects to instead
    pub redirect_class_name_for_key: Option<String>,
}

/// Pagination flags for one page of results
#[derive(SimpleObject, Debug, Clone, Default, PartialEq)]
pub struct PageInfo {
    /// When paginating forwards, are there more items?
    pub has_next_page: bool,
    /// When paginating backwards, are there more items?
    pub has_previous_page: bool,
    /// Cursor of the first item in this page
    pub start_cursor: Option<String>,
    /// Cursor of the last item in this page
    pub end_cursor: Option<String>,
}

/// An edge in a connection: a node and the cursor marking its position
#[derive(SimpleObject, Debug, Clone)]
pub struct ConnectionEdge {
    pub node: Json<Value>,
    pub cursor: String,
}

/// A cursor-paginated view over one page of records
#[derive(SimpleObject, Debug, Clone)]
pub struct Connection {
    pub nodes: Vec<Json<Value>>,
    pub edges: Vec<ConnectionEdge>,
    pub page_info: PageInfo,
}

/// Build a connection from one result page and the arguments that produced
/// it.
///
/// The flags are saturation heuristics: a `first`-bounded page that came
/// back full is assumed to have a next page, a `last`-bounded one a
/// previous page. Paging forward from an `after` cursor implies a previous
/// page exists, and mirrored for `before`. A present `first`/`last`
/// short-circuits the cursor checks, so an under-full bounded page reports
/// no neighbour even when a cursor was supplied.
pub fn build_connection(
    results: Vec<Value>,
    args: &ConnectionArgs,
    default_page_size: usize,
) -> Connection {
    let page_size = args
        .first
        .or(args.last)
        .map(|n| n.max(0) as usize)
        .unwrap_or(default_page_size);

    let has_previous_page = if args.last.is_some() {
        results.len() == page_size
    } else {
        args.after.is_some()
    };
    let has_next_page = if args.first.is_some() {
        results.len() == page_size
    } else {
        args.before.is_some()
    };

    let edges: Vec<ConnectionEdge> = results
        .iter()
        .map(|node| ConnectionEdge {
            node: Json(node.clone()),
            cursor: created_at_cursor(node),
        })
        .collect();

    let page_info = PageInfo {
        has_next_page,
        has_previous_page,
        start_cursor: edges.first().map(|edge| edge.cursor.clone()),
        end_cursor: edges.last().map(|edge| edge.cursor.clone()),
    };

    Connection {
        nodes: results.into_iter().map(Json).collect(),
        edges,
        page_info,
    }
}

/// Cursor for a node: its raw `createdAt` value, base64-wrapped.
fn created_at_cursor(node: &Value) -> String {
    match node.get("createdAt") {
        Some(Value::String(created_at)) => encode_cursor(created_at),
        Some(other) if !other.is_null() => encode_cursor(&other.to_string()),
        _ => encode_cursor(""),
    }
}
