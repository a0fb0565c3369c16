//! The shared half of snippet generation: turning (spec, endpoint, options)
//! into a concrete request description that every emitter renders.

use indexmap::IndexMap;
use serde_json::Value;

use oasdoc_core::Endpoint;
use oasdoc_core::resolve;
use oasdoc_core::spec::{HttpMethod, Parameter, ParameterLocation, Spec};
use oasdoc_core::synthesize;

/// Caller-supplied runtime options.
#[derive(Debug, Clone, Default)]
pub struct SnippetOptions {
    /// Overrides the document's first server URL when non-empty.
    pub base_url: String,
    /// Added as a bearer authorization header when non-empty.
    pub auth_token: String,
    /// Merged over the defaults, in order.
    pub headers: IndexMap<String, String>,
}

/// A fully preprocessed request: everything an emitter needs, with no
/// spec-model types left in it.
#[derive(Debug, Clone)]
pub struct RequestPlan {
    pub method: HttpMethod,
    pub url: String,
    pub headers: IndexMap<String, String>,
    /// Present only for the body-bearing verbs.
    pub body: Option<Value>,
}

impl RequestPlan {
    pub fn build(spec: &Spec, endpoint: &Endpoint<'_>, options: &SnippetOptions) -> Self {
        let body = if endpoint.method.has_body() {
            request_body_example(spec, endpoint)
        } else {
            None
        };
        Self {
            method: endpoint.method,
            url: build_url(spec, endpoint, options),
            headers: build_headers(options),
            body,
        }
    }
}

/// Substitute exampled path parameters into their `{name}` slots (a slot
/// without an example keeps its `{name}` token), then append a
/// percent-encoded query string from the exampled query parameters.
fn build_url(spec: &Spec, endpoint: &Endpoint<'_>, options: &SnippetOptions) -> String {
    let base = if options.base_url.is_empty() {
        spec.servers.first().map(|s| s.url.as_str()).unwrap_or("")
    } else {
        options.base_url.as_str()
    };
    let base = base.trim_end_matches('/');

    let mut path = endpoint.path.to_string();
    let mut query_pairs: Vec<String> = Vec::new();
    for node in &endpoint.parameters {
        let Some(parameter) = resolve::resolve_parameter(spec, node) else {
            continue;
        };
        let Some(value) = parameter_example(spec, parameter) else {
            continue;
        };
        match parameter.location {
            ParameterLocation::Path => {
                let slot = format!("{{{}}}", parameter.name);
                path = path.replace(&slot, &scalar_text(&value));
            }
            ParameterLocation::Query => {
                query_pairs.push(format!(
                    "{}={}",
                    urlencoding::encode(&parameter.name),
                    urlencoding::encode(&scalar_text(&value))
                ));
            }
            ParameterLocation::Header | ParameterLocation::Cookie => {}
        }
    }

    if query_pairs.is_empty() {
        format!("{base}{path}")
    } else {
        format!("{base}{path}?{}", query_pairs.join("&"))
    }
}

/// A parameter's sample value: its own literal example, else the example or
/// default of its resolved schema.
fn parameter_example(spec: &Spec, parameter: &Parameter) -> Option<Value> {
    if let Some(example) = &parameter.example {
        return Some(example.clone());
    }
    let schema = parameter
        .schema
        .as_ref()
        .and_then(|node| resolve::resolve_schema(spec, node))?;
    schema.example.clone().or_else(|| schema.default_value.clone())
}

fn build_headers(options: &SnippetOptions) -> IndexMap<String, String> {
    let mut headers = IndexMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    for (name, value) in &options.headers {
        headers.insert(name.clone(), value.clone());
    }
    if !options.auth_token.is_empty() {
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", options.auth_token),
        );
    }
    headers
}

/// The request body: the JSON media type's literal example, else a
/// synthesized example of its schema. Prefers `application/json`, falling
/// back to the first declared content type.
fn request_body_example(spec: &Spec, endpoint: &Endpoint<'_>) -> Option<Value> {
    let node = endpoint.operation.request_body.as_ref()?;
    let body = resolve::resolve_request_body(spec, node)?;
    let media = body
        .content
        .get("application/json")
        .or_else(|| body.content.first().map(|(_, media)| media))?;
    media
        .example
        .clone()
        .or_else(|| media.schema.as_ref().map(|schema| synthesize(spec, schema)))
}

/// Render a JSON scalar the way it appears in a URL: strings bare, numbers
/// and booleans as written, anything else as compact JSON.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&Value::from("abc")), "abc");
        assert_eq!(scalar_text(&Value::from(123)), "123");
        assert_eq!(scalar_text(&Value::from(true)), "true");
        assert_eq!(scalar_text(&serde_json::json!(["a", 1])), r#"["a",1]"#);
    }
}
