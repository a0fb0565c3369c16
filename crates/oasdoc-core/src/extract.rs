//! Flattening of the path map into stable endpoint views and tag groups.
//!
//! Both views are pure functions of one loaded [`Spec`]; they borrow from
//! it and are recomputed from scratch — never patched — when a new document
//! replaces it.

use indexmap::IndexMap;

use crate::spec::{HttpMethod, Operation, ParameterOrRef, Spec};

/// The sentinel group for operations that declare no tags.
pub const UNTAGGED: &str = "Untagged";

/// One (path, verb) operation, denormalized with the parameters inherited
/// from its path item.
#[derive(Debug, Clone)]
pub struct Endpoint<'a> {
    /// Derived from verb + path; stable across reloads of the same
    /// document for the same route.
    pub id: String,
    pub method: HttpMethod,
    pub path: &'a str,
    pub operation: &'a Operation,
    /// Path-item-level parameters first, then operation-level ones.
    pub parameters: Vec<&'a ParameterOrRef>,
}

/// A named grouping of endpoints, ordered by first encounter.
#[derive(Debug, Clone)]
pub struct TagGroup<'a> {
    pub name: String,
    pub description: String,
    pub endpoints: Vec<Endpoint<'a>>,
}

/// Flatten the path map: path declaration order, then canonical verb order.
pub fn extract_endpoints(spec: &Spec) -> Vec<Endpoint<'_>> {
    let mut endpoints = Vec::new();
    for (path, item) in &spec.paths {
        for method in HttpMethod::CANONICAL_ORDER {
            let Some(operation) = item.operation(method) else {
                continue;
            };
            let parameters = item
                .parameters
                .iter()
                .chain(&operation.parameters)
                .collect();
            endpoints.push(Endpoint {
                id: endpoint_id(method, path),
                method,
                path: path.as_str(),
                operation,
                parameters,
            });
        }
    }
    endpoints
}

/// Bucket endpoints by declared tag, `"Untagged"` when none. An endpoint
/// with several tags appears once under each. Group order is the order in
/// which tag names are first seen while scanning `endpoints`; descriptions
/// come from the document's top-level tag list, empty when undeclared.
pub fn group_endpoints_by_tag<'a>(
    spec: &Spec,
    endpoints: &[Endpoint<'a>],
) -> Vec<TagGroup<'a>> {
    let mut groups: IndexMap<&str, TagGroup<'a>> = IndexMap::new();
    for endpoint in endpoints {
        let tags: Vec<&str> = if endpoint.operation.tags.is_empty() {
            vec![UNTAGGED]
        } else {
            endpoint.operation.tags.iter().map(String::as_str).collect()
        };
        for tag in tags {
            groups
                .entry(tag)
                .or_insert_with(|| TagGroup {
                    name: tag.to_string(),
                    description: tag_description(spec, tag),
                    endpoints: Vec::new(),
                })
                .endpoints
                .push(endpoint.clone());
        }
    }
    groups.into_values().collect()
}

fn tag_description(spec: &Spec, name: &str) -> String {
    spec.tags
        .iter()
        .find(|tag| tag.name == name)
        .and_then(|tag| tag.description.clone())
        .unwrap_or_default()
}

/// Derive a stable id from verb + path: lowercased verb, then the path,
/// with every run of characters outside `[A-Za-z0-9]` collapsed to a
/// single hyphen. `GET /pets/{petId}` → `get-pets-petId`.
fn endpoint_id(method: HttpMethod, path: &str) -> String {
    let raw = format!("{}-{}", method.as_str().to_ascii_lowercase(), path);
    let mut id = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            id.push(ch);
        } else if !id.ends_with('-') {
            id.push('-');
        }
    }
    id.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_id() {
        assert_eq!(endpoint_id(HttpMethod::Get, "/a"), "get-a");
        assert_eq!(endpoint_id(HttpMethod::Post, "/a"), "post-a");
        assert_eq!(endpoint_id(HttpMethod::Get, "/pets/{petId}"), "get-pets-petId");
        assert_eq!(
            endpoint_id(HttpMethod::Delete, "/store/orders/{orderId}"),
            "delete-store-orders-orderId"
        );
        assert_eq!(endpoint_id(HttpMethod::Get, "/"), "get");
    }
}
