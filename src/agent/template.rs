//! Template engine for variable substitution.
//!
//! Performs `{variable}` substitution in artifact templates. The engine is
//! fail-closed: an undefined variable is an error rather than a silent
//! substitution with an empty string, so a typo in a template cannot
//! produce a half-rendered artifact.
//!
//! # Syntax
//!
//! - `{name}` substitutes the value of variable `name`
//! - `{{` renders a literal `{`, `}}` a literal `}`
//! - a lone `}` passes through unchanged

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    #[error("undefined variable '{name}' at byte {position} in template")]
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// Byte offset of the opening `{`.
        position: usize,
    },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at byte {position} in template")]
    UnmatchedBrace {
        /// Byte offset of the unmatched `{`.
        position: usize,
    },

    /// An empty variable name was found (`{}` or `{  }`).
    #[error("empty variable name at byte {position} in template")]
    EmptyVariableName {
        /// Byte offset of the opening `{`.
        position: usize,
    },
}

/// Render a template string by substituting variables.
///
/// Substitution is single-pass: values are emitted verbatim and never
/// re-scanned, so braces inside a value cannot trigger further expansion.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use switchboard::agent::template::render_template;
///
/// let mut vars = HashMap::new();
/// vars.insert("target".to_string(), "login".to_string());
///
/// let rendered = render_template("Test cases for {target}", &vars).unwrap();
/// assert_eq!(rendered, "Test cases for login");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;

    while let Some(rel) = template[cursor..].find(['{', '}']) {
        let pos = cursor + rel;
        out.push_str(&template[cursor..pos]);

        if template[pos..].starts_with("{{") {
            out.push('{');
            cursor = pos + 2;
        } else if template[pos..].starts_with("}}") {
            out.push('}');
            cursor = pos + 2;
        } else if template[pos..].starts_with('}') {
            // A lone closing brace is ordinary text.
            out.push('}');
            cursor = pos + 1;
        } else {
            let Some(len) = template[pos + 1..].find('}') else {
                return Err(TemplateError::UnmatchedBrace { position: pos });
            };
            let name = template[pos + 1..pos + 1 + len].trim();
            if name.is_empty() {
                return Err(TemplateError::EmptyVariableName { position: pos });
            }
            match variables.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    return Err(TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position: pos,
                    });
                }
            }
            cursor = pos + 1 + len + 1;
        }
    }

    out.push_str(&template[cursor..]);
    Ok(out)
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
