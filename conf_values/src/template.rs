//! Placeholder substitution for templated configuration documents.
//!
//! Templates use `{{ .key }}` placeholders resolved against a mapping of
//! substitution values. Brace usage is validated before substitution so a
//! malformed template is reported as an error rather than rendered wrongly.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::ValuesError;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([^{}]*)\}\}").unwrap_or_else(|err| panic!("placeholder pattern: {err}"))
});

fn syntax_error(message: impl Into<String>) -> ValuesError {
    ValuesError::TemplateSyntax {
        message: message.into(),
    }
}

/// Reject unbalanced or nested placeholder braces before substitution.
fn validate_braces(template: &str) -> Result<(), ValuesError> {
    let bytes = template.as_bytes();
    let mut open = None;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i..].starts_with(b"{{") {
            if open.is_some() {
                return Err(syntax_error(format!("nested '{{{{' at position {i}")));
            }
            open = Some(i);
            i += 2;
        } else if bytes[i..].starts_with(b"}}") {
            if open.is_none() {
                return Err(syntax_error(format!("unmatched '}}}}' at position {i}")));
            }
            open = None;
            i += 2;
        } else {
            i += 1;
        }
    }
    match open {
        Some(pos) => Err(syntax_error(format!("unclosed '{{{{' at position {pos}"))),
        None => Ok(()),
    }
}

fn is_key(expr: &str) -> bool {
    let mut chars = expr.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn render_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "<no value>".to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(structured) => structured.to_string(),
    }
}

/// Render `template`, substituting `{{ .key }}` placeholders from `values`.
///
/// Strings render verbatim, numbers and booleans in their display form and
/// structured values as compact JSON. A key with no corresponding entry
/// renders as `<no value>`. The rendered document is returned as bytes,
/// ready for the decoder.
///
/// # Errors
///
/// Returns [`ValuesError::TemplateSyntax`] when braces are unbalanced or a
/// placeholder expression is not of the form `.key`.
pub fn render_template(template: &str, values: &Value) -> Result<Vec<u8>, ValuesError> {
    validate_braces(template)?;
    let map = values.as_object();
    let mut rendered = String::with_capacity(template.len());
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        let expr = caps.get(1).map_or("", |m| m.as_str()).trim();
        let Some(key) = expr.strip_prefix('.').filter(|k| is_key(k)) else {
            return Err(syntax_error(format!(
                "malformed placeholder expression '{expr}'"
            )));
        };
        rendered.push_str(&template[last..whole.start()]);
        rendered.push_str(&render_value(map.and_then(|m| m.get(key))));
        last = whole.end();
    }
    rendered.push_str(&template[last..]);
    Ok(rendered.into_bytes())
}
