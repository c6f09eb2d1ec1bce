//! HTML attribute serialization.
//!
//! Converts a resolved attribute map into the attribute string appended to
//! an element tag. Values are not HTML-escaped; definitions and inputs are
//! trusted upstream.

use indexmap::IndexMap;
use serde_json::Value;

use crate::value::coerce_to_string;

/// Serializes resolved attributes into a leading-space-delimited string, in
/// insertion order.
///
/// Boolean `true` renders the bare attribute name; boolean `false` and null
/// are skipped entirely; any other scalar renders as `name="value"`.
pub fn serialize_attributes(attributes: &IndexMap<String, Value>) -> String {
    let mut output = String::new();
    for (name, value) in attributes {
        match value {
            Value::Bool(true) => {
                output.push(' ');
                output.push_str(name);
            }
            Value::Bool(false) | Value::Null => {}
            other => {
                output.push(' ');
                output.push_str(name);
                output.push_str("=\"");
                output.push_str(&coerce_to_string(other));
                output.push('"');
            }
        }
    }
    output
}

/// Renders a full element tag with the given resolved attributes.
pub fn render_element(element: &str, attributes: &IndexMap<String, Value>) -> String {
    format!("<{element}{}></{element}>", serialize_attributes(attributes))
}
