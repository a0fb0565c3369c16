//! Example synthesis: produce a representative JSON value for a schema.
//!
//! Priority order: an author-supplied `example` wins outright, then
//! `default`, then the declared type drives generation, then composition
//! (`oneOf`/`anyOf`/`allOf`). Anything unresolvable synthesizes to `Null`.
//!
//! Schema graphs can be cyclic, so the descent carries the reference
//! strings on the current path; revisiting one yields `Null` instead of
//! recursing. Acyclic structures, however deep, are never truncated.

use serde_json::{Map, Value};

use crate::resolve;
use crate::spec::{Schema, SchemaOrRef, SchemaType, Spec, TypeSet};

const SAMPLE_DATE: &str = "2024-01-15";
const SAMPLE_DATE_TIME: &str = "2024-01-15T09:30:00Z";
const SAMPLE_EMAIL: &str = "user@example.com";
const SAMPLE_UUID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
const SAMPLE_URI: &str = "https://example.com";

/// Synthesize an example value for `node`. Returns `Null` when the node
/// cannot be resolved or no rule applies.
pub fn synthesize(spec: &Spec, node: &SchemaOrRef) -> Value {
    synthesize_node(spec, node, &mut Vec::new())
}

fn synthesize_node(spec: &Spec, node: &SchemaOrRef, path: &mut Vec<String>) -> Value {
    match node {
        SchemaOrRef::Ref { ref_path } => {
            if path.iter().any(|seen| seen == ref_path) {
                return Value::Null;
            }
            let Some(target) = resolve::schema_target(spec, ref_path) else {
                return Value::Null;
            };
            path.push(ref_path.clone());
            let value = synthesize_node(spec, target, path);
            path.pop();
            value
        }
        SchemaOrRef::Schema(schema) => synthesize_schema(spec, schema, path),
    }
}

fn synthesize_schema(spec: &Spec, schema: &Schema, path: &mut Vec<String>) -> Value {
    if let Some(example) = &schema.example {
        return example.clone();
    }
    if let Some(default) = &schema.default_value {
        return default.clone();
    }

    if let Some(ty) = schema.schema_type.as_ref().and_then(TypeSet::primary) {
        return match ty {
            SchemaType::String => string_example(schema),
            SchemaType::Number | SchemaType::Integer => schema
                .enum_values
                .first()
                .cloned()
                .unwrap_or_else(|| Value::from(0)),
            SchemaType::Boolean => Value::Bool(true),
            SchemaType::Array => array_example(spec, schema, path),
            SchemaType::Object => object_example(spec, schema, path),
            SchemaType::Null => Value::Null,
        };
    }

    if let Some(first) = schema.one_of.first() {
        return synthesize_node(spec, first, path);
    }
    if let Some(first) = schema.any_of.first() {
        return synthesize_node(spec, first, path);
    }
    if !schema.all_of.is_empty() {
        // Shallow merge, left to right; later branches overwrite earlier
        // keys, non-object branches are skipped.
        let mut merged = Map::new();
        for branch in &schema.all_of {
            if let Value::Object(fields) = synthesize_node(spec, branch, path) {
                merged.extend(fields);
            }
        }
        return Value::Object(merged);
    }

    Value::Null
}

fn string_example(schema: &Schema) -> Value {
    if let Some(first) = schema.enum_values.first() {
        return first.clone();
    }
    let sample = match schema.format.as_deref() {
        Some("date") => SAMPLE_DATE,
        Some("date-time") => SAMPLE_DATE_TIME,
        Some("email") => SAMPLE_EMAIL,
        Some("uuid") => SAMPLE_UUID,
        Some("uri") => SAMPLE_URI,
        _ => "string",
    };
    Value::String(sample.to_string())
}

fn array_example(spec: &Spec, schema: &Schema, path: &mut Vec<String>) -> Value {
    let item = match &schema.items {
        Some(items) => synthesize_node(spec, items, path),
        None => Value::Null,
    };
    if item.is_null() {
        Value::Array(Vec::new())
    } else {
        Value::Array(vec![item])
    }
}

/// Properties in declaration order; a property synthesizing to `Null` is
/// still included.
fn object_example(spec: &Spec, schema: &Schema, path: &mut Vec<String>) -> Value {
    let mut fields = Map::new();
    for (name, property) in &schema.properties {
        fields.insert(name.clone(), synthesize_node(spec, property, path));
    }
    Value::Object(fields)
}
