use minijinja::{Environment, context};

use super::header_contexts;
use crate::request::RequestPlan;

/// Emit a multi-line `curl` invocation.
pub fn emit(plan: &RequestPlan) -> String {
    let mut env = Environment::new();
    env.add_template("curl.sh.j2", include_str!("../../templates/curl.sh.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("curl.sh.j2").unwrap();

    tmpl.render(context! {
        method => plan.method.as_str(),
        url => plan.url.clone(),
        headers => header_contexts(plan),
        body => plan.body.as_ref().map(body_literal),
    })
    .expect("render should succeed")
}

fn body_literal(body: &serde_json::Value) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}
