//! Dereferencing of internal `#/components/...` pointers.
//!
//! Resolution never fails loudly: anything that cannot be followed — an
//! external reference, a missing target, a reference cycle — is absent
//! (`None`), so one broken pointer degrades one value instead of the whole
//! document. The spec is never cloned or mutated, and resolving an already
//! concrete node returns it unchanged.

use std::collections::HashSet;

use crate::spec::{
    Components, Parameter, ParameterOrRef, RequestBody, RequestBodyOrRef, Response, ResponseOrRef,
    Schema, SchemaOrRef, Spec,
};

/// Resolve a schema node to its concrete target, following chains of
/// references.
pub fn resolve_schema<'a>(spec: &'a Spec, node: &'a SchemaOrRef) -> Option<&'a Schema> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = node;
    loop {
        match current {
            SchemaOrRef::Schema(schema) => return Some(schema),
            SchemaOrRef::Ref { ref_path } => {
                if !visited.insert(ref_path.as_str()) {
                    log::debug!("reference cycle at {ref_path}");
                    return None;
                }
                current = schema_target(spec, ref_path)?;
            }
        }
    }
}

/// Resolve a parameter node to its concrete target.
pub fn resolve_parameter<'a>(spec: &'a Spec, node: &'a ParameterOrRef) -> Option<&'a Parameter> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = node;
    loop {
        match current {
            ParameterOrRef::Parameter(parameter) => return Some(parameter),
            ParameterOrRef::Ref { ref_path } => {
                if !visited.insert(ref_path.as_str()) {
                    log::debug!("reference cycle at {ref_path}");
                    return None;
                }
                let name = ref_name(ref_path, "parameters")?;
                current = lookup(spec, ref_path, |c| c.parameters.get(name))?;
            }
        }
    }
}

/// Resolve a response node to its concrete target.
pub fn resolve_response<'a>(spec: &'a Spec, node: &'a ResponseOrRef) -> Option<&'a Response> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = node;
    loop {
        match current {
            ResponseOrRef::Response(response) => return Some(response),
            ResponseOrRef::Ref { ref_path } => {
                if !visited.insert(ref_path.as_str()) {
                    log::debug!("reference cycle at {ref_path}");
                    return None;
                }
                let name = ref_name(ref_path, "responses")?;
                current = lookup(spec, ref_path, |c| c.responses.get(name))?;
            }
        }
    }
}

/// Resolve a request-body node to its concrete target.
pub fn resolve_request_body<'a>(
    spec: &'a Spec,
    node: &'a RequestBodyOrRef,
) -> Option<&'a RequestBody> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = node;
    loop {
        match current {
            RequestBodyOrRef::RequestBody(body) => return Some(body),
            RequestBodyOrRef::Ref { ref_path } => {
                if !visited.insert(ref_path.as_str()) {
                    log::debug!("reference cycle at {ref_path}");
                    return None;
                }
                let name = ref_name(ref_path, "requestBodies")?;
                current = lookup(spec, ref_path, |c| c.request_bodies.get(name))?;
            }
        }
    }
}

/// One lookup step for a schema reference. Exposed to the synthesizer,
/// which tracks the reference strings on its own descent path.
pub(crate) fn schema_target<'a>(spec: &'a Spec, ref_path: &str) -> Option<&'a SchemaOrRef> {
    let name = ref_name(ref_path, "schemas")?;
    lookup(spec, ref_path, |c| c.schemas.get(name))
}

fn lookup<'a, T>(
    spec: &'a Spec,
    ref_path: &str,
    get: impl FnOnce(&'a Components) -> Option<&'a T>,
) -> Option<&'a T> {
    let target = spec.components.as_ref().and_then(get);
    if target.is_none() {
        log::debug!("unresolved reference: {ref_path}");
    }
    target
}

/// Extract the component name from a reference like
/// `#/components/schemas/Pet`. Only internal references into the expected
/// section qualify; anything else is absent.
fn ref_name<'a>(ref_path: &'a str, section: &str) -> Option<&'a str> {
    let stripped = ref_path.strip_prefix("#/components/")?;
    let (found, name) = stripped.split_once('/')?;
    (found == section && !name.is_empty() && !name.contains('/')).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_name() {
        assert_eq!(ref_name("#/components/schemas/Pet", "schemas"), Some("Pet"));
        assert_eq!(ref_name("#/components/schemas/Pet", "parameters"), None);
        assert_eq!(ref_name("#/definitions/Pet", "schemas"), None);
        assert_eq!(ref_name("https://example.com/pet.json", "schemas"), None);
        assert_eq!(ref_name("#/components/schemas/", "schemas"), None);
        assert_eq!(ref_name("#/components/schemas/Pet/id", "schemas"), None);
    }
}
