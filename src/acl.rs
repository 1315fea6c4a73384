//! Reshaping of store ACLs into the GraphQL-facing form.
//!
//! The store keys permissions by principal (`"*"`, `"role:<name>"`, or a
//! user id); GraphQL clients get explicit public, role, and user entries.

use serde_json::{Map, Value, json};

const ROLE_PREFIX: &str = "role:";

/// Reshape a raw store ACL into the GraphQL representation.
///
/// Pure; entries with unrecognized shapes contribute `false` permissions
/// rather than failing.
pub fn to_graphql_acl(acl: &Map<String, Value>) -> Value {
    let mut users = Vec::new();
    let mut roles = Vec::new();
    let mut public = None;

    for (principal, entry) in acl {
        let read = entry.get("read").and_then(Value::as_bool).unwrap_or(false);
        let write = entry.get("write").and_then(Value::as_bool).unwrap_or(false);

        if principal == "*" {
            public = Some(json!({ "read": read, "write": write }));
        } else if let Some(role_name) = principal.strip_prefix(ROLE_PREFIX) {
            roles.push(json!({ "roleName": role_name, "read": read, "write": write }));
        } else {
            users.push(json!({ "userId": principal, "read": read, "write": write }));
        }
    }

    let mut reshaped = Map::new();
    if !users.is_empty() {
        reshaped.insert("users".to_string(), Value::Array(users));
    }
    if !roles.is_empty() {
        reshaped.insert("roles".to_string(), Value::Array(roles));
    }
    if let Some(public) = public {
        reshaped.insert("public".to_string(), public);
    }
    Value::Object(reshaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_principals_into_public_roles_and_users() {
        let acl = json!({
            "*": { "read": true },
            "role:Moderators": { "read": true, "write": true },
            "u1JGGLzMSQ": { "read": true, "write": false },
        });

        let reshaped = to_graphql_acl(acl.as_object().unwrap());

        assert_eq!(
            reshaped,
            json!({
                "public": { "read": true, "write": false },
                "roles": [{ "roleName": "Moderators", "read": true, "write": true }],
                "users": [{ "userId": "u1JGGLzMSQ", "read": true, "write": false }],
            })
        );
    }

    #[test]
    fn empty_acl_reshapes_to_empty_object() {
        assert_eq!(to_graphql_acl(&Map::new()), json!({}));
    }
}
