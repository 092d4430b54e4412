//! Structural summaries of arbitrary JSON, for inspecting unfamiliar exports

use serde_json::Value;

/// Columns added per nesting level
pub const SUMMARY_INDENT: usize = 2;

/// One line of a structure summary and the lines nested under it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryLine {
    pub statement: String,
    pub children: Vec<SummaryLine>,
    pub indent: usize,
}

impl SummaryLine {
    fn leaf(statement: impl Into<String>, indent: usize) -> Self {
        SummaryLine {
            statement: statement.into(),
            children: Vec::new(),
            indent,
        }
    }
}

/// Summarise the shape of `data` as an indented multi-line string
pub fn structure_summary(data: &Value) -> String {
    compile_summary(&summarise(data))
}

/// Build the summary tree for `data` rooted at indent 0
pub fn summarise(data: &Value) -> SummaryLine {
    summarise_at(data, 0)
}

fn summarise_at(data: &Value, indent: usize) -> SummaryLine {
    match data {
        // Only the first element is described
        Value::Array(items) => match items.first() {
            Some(first) => SummaryLine {
                statement: "List of".to_string(),
                children: vec![summarise_at(first, indent + SUMMARY_INDENT)],
                indent,
            },
            None => SummaryLine::leaf("Empty list", indent),
        },
        Value::Object(fields) => SummaryLine {
            statement: "Object of".to_string(),
            children: fields
                .iter()
                .map(|(key, contents)| {
                    let mut child = summarise_at(contents, indent + SUMMARY_INDENT);
                    child.statement = format!("{}: {}", key, child.statement);
                    child
                })
                .collect(),
            indent,
        },
        scalar => SummaryLine::leaf(scalar_type_name(scalar), indent),
    }
}

fn scalar_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Flatten a summary tree into text, one line per node in pre-order
pub fn compile_summary(line: &SummaryLine) -> String {
    let mut out = String::new();
    push_lines(line, &mut out);
    out
}

fn push_lines(line: &SummaryLine, out: &mut String) {
    out.push_str(&" ".repeat(line.indent));
    out.push_str(&line.statement);
    out.push('\n');
    for child in &line.children {
        push_lines(child, out);
    }
}
