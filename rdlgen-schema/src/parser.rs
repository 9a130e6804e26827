//! RDL JSON schema loader.
//!
//! Reads the JSON form of an RDL schema into a [`Schema`]. Keys the model
//! does not know about (resources, includes, ...) are ignored.

use crate::error::SchemaError;
use crate::types::Schema;
use std::path::Path;

/// Parses an RDL schema from a JSON string.
///
/// # Arguments
/// * `json` - JSON schema content
///
/// # Returns
/// Parsed schema or error.
///
/// # Errors
/// Returns `SchemaError` if the JSON is malformed or is not a schema object.
pub fn parse_schema(json: &str) -> Result<Schema, SchemaError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(SchemaError::invalid_structure(
            "schema document must be a JSON object",
        ));
    }
    let schema: Schema = serde_json::from_value(value)?;
    tracing::debug!(
        "parsed schema {:?} with {} types",
        schema.name,
        schema.types.len()
    );
    Ok(schema)
}

/// Parses an RDL schema from a JSON file.
///
/// # Errors
/// Returns `SchemaError` if reading or parsing fails.
pub fn parse_schema_file(path: &Path) -> Result<Schema, SchemaError> {
    let json = std::fs::read_to_string(path)?;
    parse_schema(&json)
}
