use minijinja::{Environment, context};

use super::{header_contexts, indent_tail};
use crate::request::RequestPlan;

/// Emit a `fetch` call that prints the parsed response.
pub fn emit(plan: &RequestPlan) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("fetch.js.j2", include_str!("../../templates/fetch.js.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("fetch.js.j2").unwrap();

    tmpl.render(context! {
        method => plan.method.as_str(),
        url => plan.url.clone(),
        headers => header_contexts(plan),
        body => plan.body.as_ref().map(body_literal),
    })
    .expect("render should succeed")
}

/// A JSON literal is a valid JavaScript object expression; it only needs
/// re-indenting to sit inside the `fetch` options object.
fn body_literal(body: &serde_json::Value) -> String {
    let pretty = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
    indent_tail(&pretty, "  ")
}
