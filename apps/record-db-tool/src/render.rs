//! Text rendering of store results.

use std::collections::BTreeMap;

use record_db_core::{Intersection, Value};

/// Renders one `name: value` line per field.
pub fn render_table(values: &BTreeMap<String, Value>) -> String {
    values
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one `name: [values]` line per match followed by a match count.
pub fn render_intersection(result: &Intersection) -> String {
    let mut lines: Vec<String> = result
        .iter()
        .map(|(name, values)| {
            let values: Vec<String> = values.iter().map(Value::to_string).collect();
            format!("{}: [{}]", name, values.join(", "))
        })
        .collect();
    lines.push(format!("Found {} match(es)", result.len()));
    lines.join("\n")
}
