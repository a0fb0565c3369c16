pub mod body;
pub mod document;
pub mod parameter;
pub mod path;
pub mod schema;
pub mod server;

pub use body::{MediaType, RequestBody, RequestBodyOrRef, Response, ResponseOrRef};
pub use document::{Components, Contact, Info, License, Spec, Tag};
pub use parameter::{Parameter, ParameterLocation, ParameterOrRef};
pub use path::{HttpMethod, Operation, PathItem};
pub use schema::{Schema, SchemaOrRef, SchemaType, TypeSet};
pub use server::Server;

use crate::error::ParseError;

/// Parse a document from raw text: strict JSON first, YAML as the
/// permissive fallback. JSON is a YAML subset, so when both fail the YAML
/// error is the one reported.
pub fn from_str(input: &str) -> Result<Spec, ParseError> {
    match from_json(input) {
        Ok(spec) => Ok(spec),
        Err(_) => from_yaml(input),
    }
}

/// Parse a document from JSON.
pub fn from_json(input: &str) -> Result<Spec, ParseError> {
    let spec: Spec = serde_json::from_str(input)?;
    validate_document(&spec)?;
    Ok(spec)
}

/// Parse a document from YAML.
pub fn from_yaml(input: &str) -> Result<Spec, ParseError> {
    let spec: Spec = serde_yaml_ng::from_str(input)?;
    validate_document(&spec)?;
    Ok(spec)
}

/// The only structural validation performed: the version marker must be
/// present. The `paths` map is enforced by deserialization itself, and the
/// rest of the document is accepted as-is.
fn validate_document(spec: &Spec) -> Result<(), ParseError> {
    if spec.openapi.is_empty() {
        return Err(ParseError::MissingField("openapi".to_string()));
    }
    log::debug!(
        "loaded spec '{}' with {} paths",
        spec.info.title,
        spec.paths.len()
    );
    Ok(())
}
