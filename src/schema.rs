//! Schema-provider types.
//!
//! The store exposes class schemas as `{fieldName: {type, ...}}` maps; this
//! layer reads them only to find `File`-typed fields during upload
//! marshalling.

use std::collections::HashMap;

use serde::Deserialize;

/// Class name → schema, as served by the schema provider.
pub type SchemaMap = HashMap<String, ClassSchema>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassSchema {
    pub fields: HashMap<String, FieldDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDefinition {
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(rename = "targetClass", default)]
    pub target_class: Option<String>,
}

impl FieldDefinition {
    pub fn is_file(&self) -> bool {
        self.field_type == "File"
    }
}
