//! CLI output formatting.

use colored::Colorize;
use serde_json::Value;

/// Prints JSON with syntax highlighting.
///
/// Colors:
/// - Keys: Cyan
/// - Strings: Green
/// - Numbers: Yellow
/// - Booleans/Null: Magenta
pub fn print_highlighted_json(value: &Value) {
    println!("{}", highlight_json(value, 0));
}

/// Renders `value` as pretty JSON with ANSI colors.
fn highlight_json(value: &Value, indent: usize) -> String {
    let pad = "  ".repeat(indent + 1);
    let close_pad = "  ".repeat(indent);

    match value {
        Value::Null => "null".magenta().to_string(),
        Value::Bool(b) => b.to_string().magenta().to_string(),
        Value::Number(n) => n.to_string().yellow().to_string(),
        Value::String(_) => value.to_string().green().to_string(),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let body: Vec<String> =
                items.iter().map(|item| format!("{pad}{}", highlight_json(item, indent + 1))).collect();
            format!("[\n{}\n{close_pad}]", body.join(",\n"))
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let body: Vec<String> = map
                .iter()
                .map(|(key, item)| {
                    let key = Value::String(key.clone()).to_string();
                    format!("{pad}{}: {}", key.cyan(), highlight_json(item, indent + 1))
                })
                .collect();
            format!("{{\n{}\n{close_pad}}}", body.join(",\n"))
        }
    }
}
