//! Conversion from draft-7 JSON Schema to the provider's response-schema dialect.
//!
//! The generation endpoint accepts an OpenAPI-flavoured subset: upper-case type
//! names, inline definitions and a `nullable` flag instead of `["string", "null"]`.

use serde_json::{json, Map, Value};

const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Build the provider descriptor for a schemars root schema.
pub fn provider_descriptor(schema: &Value) -> Value {
    let empty = Map::new();
    let definitions = schema
        .get("definitions")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    convert(schema, definitions)
}

fn convert(node: &Value, definitions: &Map<String, Value>) -> Value {
    if let Some(resolved) = resolve_reference(node, definitions) {
        return with_description(resolved, node);
    }

    if let Some(inner) = single_subschema(node, "allOf") {
        return with_description(convert(inner, definitions), node);
    }

    if let Some(inner) = nullable_variant(node) {
        let mut converted = with_description(convert(inner, definitions), node);
        if let Some(obj) = converted.as_object_mut() {
            obj.insert("nullable".to_string(), json!(true));
        }
        return converted;
    }

    let (type_name, nullable) = schema_type(node);
    let mut out = Map::new();

    if let Some(type_name) = type_name {
        out.insert("type".to_string(), json!(type_name.to_uppercase()));
    }
    if nullable {
        out.insert("nullable".to_string(), json!(true));
    }
    if let Some(description) = node.get("description") {
        out.insert("description".to_string(), description.clone());
    }
    if let Some(values) = node.get("enum") {
        out.insert("enum".to_string(), values.clone());
    }

    match type_name {
        Some("object") => {
            if let Some(properties) = node.get("properties").and_then(Value::as_object) {
                let converted: Map<String, Value> = properties
                    .iter()
                    .map(|(name, property)| (name.clone(), convert(property, definitions)))
                    .collect();
                out.insert("properties".to_string(), Value::Object(converted));
            }
            if let Some(required) = node.get("required").and_then(Value::as_array) {
                if !required.is_empty() {
                    out.insert("required".to_string(), Value::Array(required.clone()));
                }
            }
        }
        Some("array") => {
            if let Some(items) = node.get("items") {
                out.insert("items".to_string(), convert(items, definitions));
            }
        }
        _ => {}
    }

    Value::Object(out)
}

fn resolve_reference(node: &Value, definitions: &Map<String, Value>) -> Option<Value> {
    let reference = node.get("$ref")?.as_str()?;
    let target = definitions.get(reference.strip_prefix(DEFINITIONS_PREFIX)?)?;
    Some(convert(target, definitions))
}

fn single_subschema<'a>(node: &'a Value, keyword: &str) -> Option<&'a Value> {
    match node.get(keyword)?.as_array()?.as_slice() {
        [only] => Some(only),
        _ => None,
    }
}

/// `anyOf: [X, {"type": "null"}]`, as schemars emits for `Option<Struct>`.
fn nullable_variant(node: &Value) -> Option<&Value> {
    let variants = node.get("anyOf")?.as_array()?;
    if variants.len() != 2 {
        return None;
    }
    let is_null = |variant: &Value| variant.get("type").and_then(Value::as_str) == Some("null");
    match (is_null(&variants[0]), is_null(&variants[1])) {
        (false, true) => Some(&variants[0]),
        (true, false) => Some(&variants[1]),
        _ => None,
    }
}

fn schema_type(node: &Value) -> (Option<&str>, bool) {
    match node.get("type") {
        Some(Value::String(type_name)) => (Some(type_name.as_str()), false),
        Some(Value::Array(types)) => {
            let nullable = types.iter().any(|t| t.as_str() == Some("null"));
            let primary = types
                .iter()
                .filter_map(Value::as_str)
                .find(|t| *t != "null");
            (primary, nullable)
        }
        _ => (None, false),
    }
}

fn with_description(mut converted: Value, source: &Value) -> Value {
    if let (Some(obj), Some(description)) = (converted.as_object_mut(), source.get("description"))
    {
        obj.insert("description".to_string(), description.clone());
    }
    converted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_definitions_and_uppercases_types() {
        let schema = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "Plan",
            "type": "object",
            "required": ["days"],
            "properties": {
                "days": {"type": "array", "items": {"$ref": "#/definitions/Day"}}
            },
            "definitions": {
                "Day": {
                    "type": "object",
                    "required": ["title"],
                    "properties": {
                        "title": {"type": "string", "description": "Headline"},
                        "cost": {"type": "number", "format": "double"}
                    }
                }
            }
        });

        let descriptor = provider_descriptor(&schema);
        assert_eq!(
            descriptor,
            json!({
                "type": "OBJECT",
                "required": ["days"],
                "properties": {
                    "days": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "required": ["title"],
                            "properties": {
                                "title": {"type": "STRING", "description": "Headline"},
                                "cost": {"type": "NUMBER"}
                            }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_optional_fields_become_nullable() {
        let schema = json!({
            "type": "object",
            "properties": {
                "note": {"type": ["string", "null"]},
                "extra": {
                    "description": "Wrapped",
                    "anyOf": [{"$ref": "#/definitions/Extra"}, {"type": "null"}]
                }
            },
            "definitions": {
                "Extra": {"type": "object", "properties": {"n": {"type": "integer"}}}
            }
        });

        let descriptor = provider_descriptor(&schema);
        assert_eq!(descriptor["properties"]["note"], json!({"type": "STRING", "nullable": true}));
        assert_eq!(descriptor["properties"]["extra"]["type"], "OBJECT");
        assert_eq!(descriptor["properties"]["extra"]["nullable"], true);
        assert_eq!(descriptor["properties"]["extra"]["description"], "Wrapped");
        assert_eq!(
            descriptor["properties"]["extra"]["properties"]["n"]["type"],
            "INTEGER"
        );
        assert!(descriptor.get("required").is_none());
    }
}
