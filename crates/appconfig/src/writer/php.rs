//! Renders a JSON value tree as a PHP file returning a nested array.

use serde_json::Value;

const INDENT: &str = "    ";

/// Render `value` as `<?php return [...];`.
pub fn render(value: &Value) -> String {
    let mut out = String::from("<?php\nreturn ");
    write_value(&mut out, value, 0);
    out.push_str(";\n");
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(&quote(s)),
        Value::Array(items) => {
            let entries = items.iter().map(|item| (None, item));
            write_array(out, entries, items.is_empty(), depth);
        }
        Value::Object(map) => {
            let entries = map.iter().map(|(key, item)| (Some(key.as_str()), item));
            write_array(out, entries, map.is_empty(), depth);
        }
    }
}

fn write_array<'a>(
    out: &mut String,
    entries: impl Iterator<Item = (Option<&'a str>, &'a Value)>,
    empty: bool,
    depth: usize,
) {
    if empty {
        out.push_str("[]");
        return;
    }

    out.push_str("[\n");
    for (key, item) in entries {
        out.push_str(&INDENT.repeat(depth + 1));
        if let Some(key) = key {
            out.push_str(&array_key(key));
            out.push_str(" => ");
        }
        write_value(out, item, depth + 1);
        out.push_str(",\n");
    }
    out.push_str(&INDENT.repeat(depth));
    out.push(']');
}

/// PHP casts canonical decimal keys within the `i64` range to ints, so emit those bare.
fn array_key(key: &str) -> String {
    if is_integer_key(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

fn is_integer_key(key: &str) -> bool {
    let digits = key.strip_prefix('-').unwrap_or(key);
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'))
        && key != "-0"
        && key.parse::<i64>().is_ok()
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}
