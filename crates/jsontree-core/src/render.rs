//! Best-effort printer — converts a [`Value`] tree back into JSON text.
//!
//! Scalars render literally, lists as comma-separated bracketed elements in
//! order, and dicts as comma-separated `"key": value` pairs in insertion
//! order. Strings are wrapped in quotes **without re-escaping**: a string
//! containing `"` or `\` will not survive a render/parse round trip. That is
//! a documented limitation of this printer, not of the parser.

use crate::value::Value;

/// Render a value tree as JSON text.
///
/// For any parsed tree, parsing the rendered text reproduces an equal tree,
/// except for `String` values containing characters that would need
/// re-escaping.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(n) => out.push_str(&n.to_string()),
        // Debug formatting keeps the shortest representation that parses
        // back to the same bits and never drops the `.0`, so a Double stays
        // a Double across a round trip.
        Value::Double(d) => out.push_str(&format!("{:?}", d)),
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Dict(entries) => {
            out.push('{');
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push('"');
                out.push_str(key);
                out.push_str("\": ");
                write_value(value, out);
            }
            out.push('}');
        }
    }
}
