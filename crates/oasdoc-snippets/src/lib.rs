//! Runnable request snippets for oasdoc endpoints.
//!
//! Every target convention renders the same [`request::RequestPlan`], so the
//! four emitters only differ in surface syntax. Adding a fifth target is a
//! new emitter module plus one arm in [`generate`].

pub mod emitters;
pub mod request;

pub use request::{RequestPlan, SnippetOptions};

use oasdoc_core::Endpoint;
use oasdoc_core::spec::Spec;

/// The supported target calling conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetTarget {
    Curl,
    JavaScript,
    Python,
    Go,
}

impl SnippetTarget {
    pub const ALL: [SnippetTarget; 4] = [
        SnippetTarget::Curl,
        SnippetTarget::JavaScript,
        SnippetTarget::Python,
        SnippetTarget::Go,
    ];

    /// Display label for tab headers and the like.
    pub fn label(&self) -> &'static str {
        match self {
            SnippetTarget::Curl => "cURL",
            SnippetTarget::JavaScript => "JavaScript",
            SnippetTarget::Python => "Python",
            SnippetTarget::Go => "Go",
        }
    }
}

/// Render a request snippet for `endpoint` in the requested convention.
pub fn generate(
    target: SnippetTarget,
    spec: &Spec,
    endpoint: &Endpoint<'_>,
    options: &SnippetOptions,
) -> String {
    let plan = RequestPlan::build(spec, endpoint, options);
    match target {
        SnippetTarget::Curl => emitters::curl::emit(&plan),
        SnippetTarget::JavaScript => emitters::javascript::emit(&plan),
        SnippetTarget::Python => emitters::python::emit(&plan),
        SnippetTarget::Go => emitters::go::emit(&plan),
    }
}
