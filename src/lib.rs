//! GraphQL relay layer for a REST-style object store.
//!
//! Maps GraphQL queries, mutations, and Relay cursor-pagination arguments
//! onto an injected object-store client, and reshapes the store's responses
//! into GraphQL result shapes: globally unique ids, reshaped ACLs, and
//! cursor-paginated connections.
//!
//! The store itself (persistence, authorization, transport) stays behind
//! the [StoreClient](store::StoreClient) trait; this crate is the
//! translation layer in front of it. All collaborators are injected through
//! [RequestContext](context::RequestContext), never imported as globals.

pub mod acl;
pub mod config;
pub mod connection;
pub mod context;
pub mod error;
pub mod files;
pub mod ids;
pub mod query;
pub mod resolvers;
pub mod schema;
pub mod store;
pub mod transform;

pub use acl::to_graphql_acl;
pub use config::GraphQlConfig;
pub use connection::{Connection, ConnectionArgs, ConnectionEdge, PageInfo, build_connection};
pub use context::{AuthContext, RequestContext};
pub use error::Error;
pub use files::handle_file_upload;
pub use ids::{GlobalId, decode_cursor, decode_global_id, encode_cursor, encode_global_id};
pub use query::{parse_connection_args, transform_constraint, transform_query};
pub use resolvers::{
    NodeQueries, contains_only_id_fields, node_by_id, resolve_pointer, run_find, run_get,
};
pub use schema::{ClassSchema, FieldDefinition, SchemaMap};
pub use store::{CreatedFile, FilesController, FindOptions, FindResponse, StoreClient};
pub use transform::transform_result;
