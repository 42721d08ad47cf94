//! Tiny `{{ field }}` template language used for note bodies and file names.
//!
//! Supported tags:
//! * `{{ title }}`: the value of the field. Lists are joined with `, `.
//! * `{{ LIST:genres }}`: a markdown bullet list, one item per line.
//! * `{{ ENUM:genres }}`: a comma separated list.
//!
//! Tags naming a field the model doesn't have are left untouched.
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::{Map, Value};

static TEMPLATE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*(?:(LIST|ENUM):\s*)?([A-Za-z0-9_]+)\s*\}\}").unwrap()
});

pub fn render_template(template: &str, data: &Map<String, Value>) -> String {
    TEMPLATE_TAG
        .replace_all(template, |caps: &Captures| {
            let Some(value) = data.get(&caps[2]) else {
                return caps[0].to_string();
            };

            match caps.get(1).map(|m| m.as_str()) {
                Some("LIST") => as_list(value),
                Some("ENUM") => as_enum(value),
                _ => as_scalar(value),
            }
        })
        .into_owned()
}

fn as_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => as_enum_items(items),
        other => other.to_string(),
    }
}

fn as_enum(value: &Value) -> String {
    match value {
        Value::Array(items) => as_enum_items(items),
        other => as_scalar(other),
    }
}

fn as_enum_items(items: &[Value]) -> String {
    items
        .iter()
        .map(as_scalar)
        .filter(|s| !s.is_empty())
        .collect::<Vec<String>>()
        .join(", ")
}

fn as_list(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(as_scalar)
            .filter(|s| !s.is_empty())
            .map(|s| format!("- {s}"))
            .collect::<Vec<String>>()
            .join("\n"),
        Value::Null => String::new(),
        other => format!("- {}", as_scalar(other)),
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn data() -> Map<String, Value> {
        let Value::Object(map) = json!({
            "title": "Inception",
            "year": 2010,
            "onlineRating": 8.8,
            "image": null,
            "genres": ["Action", "Sci-Fi"]
        }) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn scalar_tags() {
        let out = render_template("# {{ title }} ({{year}}) {{ onlineRating }}", &data());
        assert_eq!(out, "# Inception (2010) 8.8");
    }

    #[test]
    fn list_and_enum_tags() {
        let out = render_template("{{ LIST:genres }}\n{{ ENUM:genres }}", &data());
        assert_eq!(out, "- Action\n- Sci-Fi\nAction, Sci-Fi");
    }

    #[test]
    fn null_renders_empty_and_unknown_is_kept() {
        let out = render_template("[{{ image }}] {{ nope }}", &data());
        assert_eq!(out, "[] {{ nope }}");
    }
}
