//! Core engine for oasdoc: parses OpenAPI 3.x documents, resolves internal
//! `$ref` pointers, synthesizes example payloads, and flattens the path map
//! into stable endpoint and tag views.
//!
//! Everything here is a pure transformation over an immutable [`spec::Spec`].
//! The only hard failure is an unparseable document; a broken reference
//! degrades the single value that needed it and nothing else.

pub mod error;
pub mod example;
pub mod extract;
pub mod resolve;
pub mod spec;

pub use error::ParseError;
pub use example::synthesize;
pub use extract::{Endpoint, TagGroup, extract_endpoints, group_endpoints_by_tag};
