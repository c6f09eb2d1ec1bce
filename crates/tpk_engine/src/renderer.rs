//! Inline code template rendering.
//!
//! Resolves the small placeholder language used by inline script templates:
//! conditional blocks `{{#name}}...{{/name}}` first, then variable
//! placeholders `{{name}}`. No loops, no nesting, no escaping beyond literal
//! serialization; callers own injection safety.

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;

use crate::definition::Inputs;
use crate::value::is_truthy;

/// Renderer for inline script code templates.
pub struct CodeRenderer {
    conditional_open: Regex,
    variable: Regex,
}

impl Default for CodeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeRenderer {
    /// Create a new code renderer.
    pub fn new() -> Self {
        Self {
            // Match {{#name}} opening markers
            conditional_open: Regex::new(r"\{\{#([^{}]+?)\}\}").unwrap(),
            // Match {{name}} placeholders
            variable: Regex::new(r"\{\{([^{}]+?)\}\}").unwrap(),
        }
    }

    /// Renders a code template against the given arguments and optional
    /// parameter defaults, in two ordered passes: conditional blocks, then
    /// variable placeholders on the conditionals' output.
    pub fn render(&self, code: &str, args: &Inputs, defaults: &IndexMap<String, Value>) -> String {
        let code = self.apply_conditionals(code, args, defaults);
        self.apply_variables(&code, args, defaults)
    }

    /// Strips or keeps `{{#name}}BODY{{/name}}` blocks. The closing marker
    /// is matched greedily (the last one with the same name); an opening
    /// marker without a close is left verbatim.
    fn apply_conditionals(
        &self,
        code: &str,
        args: &Inputs,
        defaults: &IndexMap<String, Value>,
    ) -> String {
        let mut output = String::with_capacity(code.len());
        let mut rest = code;

        while let Some(caps) = self.conditional_open.captures(rest) {
            let open = caps.get(0).unwrap();
            let name = &caps[1];
            let close = format!("{{{{/{name}}}}}");
            let after_open = &rest[open.end()..];

            match after_open.rfind(&close) {
                Some(close_start) => {
                    output.push_str(&rest[..open.start()]);
                    if resolve(name, args, defaults).map(is_truthy).unwrap_or(false) {
                        output.push_str(&after_open[..close_start]);
                    }
                    rest = &after_open[close_start + close.len()..];
                }
                None => {
                    output.push_str(&rest[..open.end()]);
                    rest = after_open;
                }
            }
        }

        output.push_str(rest);
        output
    }

    /// Replaces `{{name}}` placeholders with the JSON literal of the
    /// resolved value. A name found in neither source serializes to the
    /// empty-string literal `""`.
    fn apply_variables(
        &self,
        code: &str,
        args: &Inputs,
        defaults: &IndexMap<String, Value>,
    ) -> String {
        self.variable
            .replace_all(code, |caps: &regex::Captures| {
                match resolve(&caps[1], args, defaults) {
                    Some(value) => value.to_string(),
                    None => "\"\"".to_string(),
                }
            })
            .into_owned()
    }
}

/// Looks a name up in `args` first (explicit presence wins, falsy values
/// included), then in the optional-parameter defaults.
fn resolve<'a>(
    name: &str,
    args: &'a Inputs,
    defaults: &'a IndexMap<String, Value>,
) -> Option<&'a Value> {
    args.get(name).or_else(|| defaults.get(name))
}
