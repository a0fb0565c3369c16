pub mod curl;
pub mod go;
pub mod javascript;
pub mod python;

use minijinja::{Value, context};

use crate::request::RequestPlan;

/// Header entries in render order, ready for a template loop.
pub(crate) fn header_contexts(plan: &RequestPlan) -> Vec<Value> {
    plan.headers
        .iter()
        .map(|(name, value)| context! { name => name, value => value })
        .collect()
}

/// Indent every line after the first, so a pretty-printed literal stays
/// aligned when embedded mid-expression.
pub(crate) fn indent_tail(text: &str, pad: &str) -> String {
    text.replace('\n', &format!("\n{pad}"))
}
