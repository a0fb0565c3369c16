use minijinja::{Environment, context};
use serde_json::Value;

use super::header_contexts;
use crate::request::RequestPlan;

/// Emit a `requests` script that prints the parsed response.
pub fn emit(plan: &RequestPlan) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template(
        "requests.py.j2",
        include_str!("../../templates/requests.py.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("requests.py.j2").unwrap();

    tmpl.render(context! {
        method => plan.method.as_str().to_ascii_lowercase(),
        url => plan.url.clone(),
        headers => header_contexts(plan),
        body => plan.body.as_ref().map(|body| python_literal(body, 0)),
    })
    .expect("render should succeed")
}

/// Render a JSON value as a Python literal: `true`/`false`/`null` become
/// `True`/`False`/`None`; JSON string escaping is already valid Python.
fn python_literal(value: &Value, depth: usize) -> String {
    let pad = "    ".repeat(depth + 1);
    let close = "    ".repeat(depth);
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(_) => value.to_string(),
        Value::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            let lines: Vec<String> = items
                .iter()
                .map(|item| format!("{pad}{},", python_literal(item, depth + 1)))
                .collect();
            format!("[\n{}\n{close}]", lines.join("\n"))
        }
        Value::Object(fields) => {
            if fields.is_empty() {
                return "{}".to_string();
            }
            let lines: Vec<String> = fields
                .iter()
                .map(|(name, item)| {
                    format!(
                        "{pad}{}: {},",
                        Value::String(name.clone()),
                        python_literal(item, depth + 1)
                    )
                })
                .collect();
            format!("{{\n{}\n{close}}}", lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_python_literal() {
        assert_eq!(python_literal(&json!(null), 0), "None");
        assert_eq!(python_literal(&json!(true), 0), "True");
        assert_eq!(python_literal(&json!("a \"b\""), 0), r#""a \"b\"""#);
        assert_eq!(
            python_literal(&json!({"ok": false, "n": [1]}), 0),
            "{\n    \"ok\": False,\n    \"n\": [\n        1,\n    ],\n}"
        );
    }
}
