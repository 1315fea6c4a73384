//! Store record → GraphQL node reshaping.

use serde_json::{Map, Value};

use crate::acl::to_graphql_acl;
use crate::ids::encode_global_id;

/// Reshape a raw store record (or page of records) into a GraphQL node.
///
/// Arrays are transformed elementwise, one level deep; nested object graphs
/// are left to the store's own expansion. A record carrying an `objectId`
/// gets a global `id`; an `ACL` field is rewritten into the GraphQL shape;
/// every record is stamped with the class it was queried from, record
/// fields winning over the stamp on collision.
///
/// Pure with respect to the store: consumes and returns a value.
pub fn transform_result(class_name: &str, result: Value) -> Value {
    match result {
        Value::Array(results) => Value::Array(
            results
                .into_iter()
                .map(|result| transform_result(class_name, result))
                .collect(),
        ),
        Value::Object(mut record) => {
            let object_id = record
                .get("objectId")
                .and_then(Value::as_str)
                .map(str::to_owned);
            if let Some(object_id) = object_id {
                let id = encode_global_id(class_name, &object_id);
                record.insert("id".to_string(), Value::String(id));
            }

            let reshaped_acl = record
                .get("ACL")
                .and_then(Value::as_object)
                .map(to_graphql_acl);
            if let Some(acl) = reshaped_acl {
                record.insert("ACL".to_string(), acl);
            }

            let mut node = Map::new();
            node.insert(
                "className".to_string(),
                Value::String(class_name.to_string()),
            );
            node.extend(record);
            Value::Object(node)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::decode_global_id;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn injects_global_id_and_class_name() {
        let node = transform_result("GameScore", json!({ "objectId": "xWMyZ4YEGZ", "score": 1337 }));

        assert_eq!(node["className"], "GameScore");
        assert_eq!(node["objectId"], "xWMyZ4YEGZ");
        assert_eq!(node["score"], 1337);

        let id = decode_global_id(node["id"].as_str().unwrap()).unwrap();
        assert_eq!(id.class_name, "GameScore");
        assert_eq!(id.object_id, "xWMyZ4YEGZ");
    }

    #[test]
    fn record_without_object_id_gets_no_global_id() {
        let node = transform_result("GameScore", json!({ "score": 1337 }));
        assert_eq!(node.get("id"), None);
        assert_eq!(node["className"], "GameScore");
    }

    #[test]
    fn arrays_transform_elementwise() {
        let nodes = transform_result(
            "Comment",
            json!([{ "objectId": "a" }, { "objectId": "b" }]),
        );
        let nodes = nodes.as_array().unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0]["className"], "Comment");
        assert_eq!(nodes[1]["className"], "Comment");
        assert_ne!(nodes[0]["id"], nodes[1]["id"]);
    }

    #[test]
    fn reshapes_acl_field() {
        let node = transform_result(
            "Post",
            json!({
                "objectId": "p1",
                "ACL": { "*": { "read": true }, "role:Admins": { "read": true, "write": true } },
            }),
        );

        assert_eq!(
            node["ACL"],
            json!({
                "public": { "read": true, "write": false },
                "roles": [{ "roleName": "Admins", "read": true, "write": true }],
            })
        );
    }

    #[test]
    fn transform_is_idempotent_on_class_name_and_id() {
        let once = transform_result("Post", json!({ "objectId": "p1", "title": "hi" }));
        let twice = transform_result("Post", once.clone());
        assert_eq!(once["className"], twice["className"]);
        assert_eq!(once["id"], twice["id"]);
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(transform_result("Post", json!(42)), json!(42));
        assert_eq!(transform_result("Post", Value::Null), Value::Null);
    }
}
