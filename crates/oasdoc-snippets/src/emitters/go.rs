use minijinja::{Environment, context};

use super::header_contexts;
use crate::request::RequestPlan;

/// Emit a `net/http` program that prints the response body.
pub fn emit(plan: &RequestPlan) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("http.go.j2", include_str!("../../templates/http.go.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("http.go.j2").unwrap();

    tmpl.render(context! {
        method => plan.method.as_str(),
        url => plan.url.clone(),
        headers => header_contexts(plan),
        // Compact JSON inside a raw string literal.
        body => plan.body.as_ref().map(|body| body.to_string()),
    })
    .expect("render should succeed")
}
