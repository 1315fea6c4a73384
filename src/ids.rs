//! Global object identifiers and pagination cursors.
//!
//! Both are opaque base64 tokens, but they are different encodings: a global
//! identifier wraps `"{className}::{objectId}"` and names a record across
//! all collections, while a cursor wraps a bare `createdAt` timestamp and
//! marks a position in an ordered result page.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Utc};

use crate::error::Error;

/// A decoded global identifier: the collection a record lives in plus its
/// store-assigned primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalId {
    pub class_name: String,
    pub object_id: String,
}

/// Encode a `(class name, object id)` pair into an opaque, reversible token.
pub fn encode_global_id(class_name: &str, object_id: &str) -> String {
    BASE64.encode(format!("{class_name}::{object_id}"))
}

/// Decode a global identifier token back into its components.
///
/// Fails with [Error::InvalidId] unless the decoded payload splits on `::`
/// into exactly a class name and an object id. A class name that itself
/// contains `::` is ambiguous once encoded; such tokens are rejected rather
/// than guessed at.
pub fn decode_global_id(token: &str) -> Result<GlobalId, Error> {
    let bytes = BASE64.decode(token).map_err(|_| Error::InvalidId)?;
    let decoded = String::from_utf8(bytes).map_err(|_| Error::InvalidId)?;

    let components: Vec<&str> = decoded.split("::").collect();
    match components.as_slice() {
        [class_name, object_id] => Ok(GlobalId {
            class_name: (*class_name).to_string(),
            object_id: (*object_id).to_string(),
        }),
        _ => Err(Error::InvalidId),
    }
}

/// Encode a raw `createdAt` value as an opaque cursor.
pub fn encode_cursor(created_at: &str) -> String {
    BASE64.encode(created_at)
}

/// Decode a cursor back into the timestamp it marks.
///
/// Malformed cursors yield `None`; callers degrade to a comparison that
/// matches nothing instead of raising.
pub fn decode_cursor(cursor: &str) -> Option<DateTime<Utc>> {
    let bytes = BASE64.decode(cursor).ok()?;
    let decoded = String::from_utf8(bytes).ok()?;
    DateTime::parse_from_rfc3339(&decoded)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::SecondsFormat;

    #[test]
    fn global_id_roundtrip() {
        for (class_name, object_id) in [
            ("_User", "abc123"),
            ("GameScore", "xWMyZ4YEGZ"),
            ("a", ""),
        ] {
            let token = encode_global_id(class_name, object_id);
            let decoded = decode_global_id(&token).unwrap();
            assert_eq!(decoded.class_name, class_name);
            assert_eq!(decoded.object_id, object_id);
        }
    }

    #[test]
    fn rejects_token_without_separator() {
        let token = BASE64.encode("justanobjectid");
        assert_matches!(decode_global_id(&token), Err(Error::InvalidId));
    }

    #[test]
    fn rejects_garbage_token() {
        assert_matches!(
            decode_global_id("not-base64-with-no-separator"),
            Err(Error::InvalidId)
        );
    }

    #[test]
    fn rejects_class_name_containing_separator() {
        let token = encode_global_id("Bad::Class", "oid");
        assert_matches!(decode_global_id(&token), Err(Error::InvalidId));
    }

    #[test]
    fn cursor_roundtrip() {
        let cursor = encode_cursor("2024-05-04T10:00:00.000Z");
        let ts = decode_cursor(&cursor).unwrap();
        assert_eq!(
            ts.to_rfc3339_opts(SecondsFormat::Millis, true),
            "2024-05-04T10:00:00.000Z"
        );
    }

    #[test]
    fn malformed_cursor_decodes_to_none() {
        assert_eq!(decode_cursor("@@not-a-cursor@@"), None);
        assert_eq!(decode_cursor(&BASE64.encode("yesterday")), None);
    }
}
