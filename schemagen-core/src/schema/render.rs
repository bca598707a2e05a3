use crate::{schema::JsonSchema, Error, Result};
use std::borrow::Cow;

const MAP_VALUE_KEY: &str = "\"additionalProperty\":";
const ADDITIONAL_PROPERTIES_KEY: &str = "\"additionalProperties\":";

/// Rewrite the map value key of serialized output to `additionalProperties`
///
/// Only the exact key pattern `"additionalProperty":` is touched, which makes the rewrite
/// idempotent.
pub fn fix_additional_properties(json: &str) -> Cow<'_, str> {
    if json.contains(MAP_VALUE_KEY) {
        Cow::Owned(json.replace(MAP_VALUE_KEY, ADDITIONAL_PROPERTIES_KEY))
    } else {
        Cow::Borrowed(json)
    }
}

/// Render a schema as pretty printed JSON with a two space indent
///
/// The document is serialized, corrected with [`fix_additional_properties`], parsed back
/// (keeping key order) and indented.
pub fn render(schema: &JsonSchema) -> Result<String> {
    let compact = serde_json::to_string(schema).map_err(Error::SerializeSchema)?;
    let corrected = fix_additional_properties(&compact);
    let value: serde_json::Value = serde_json::from_str(&corrected).map_err(Error::ReparseSchema)?;
    serde_json::to_string_pretty(&value).map_err(Error::SerializeSchema)
}
