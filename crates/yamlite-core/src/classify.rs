//! Schema-free type inference for value text.
//!
//! Checks run in a fixed order and the first match wins:
//!
//! | text                                   | result     |
//! |----------------------------------------|------------|
//! | empty                                  | `Absent`   |
//! | exactly `true` / `false`               | `Boolean`  |
//! | `[` ... `]`                            | `Sequence` |
//! | digits, optional leading `-`           | `Integer`  |
//! | digits, optional leading `-`, one `.`  | `Float`    |
//! | anything else                          | `Text`     |
//!
//! Classification never fails. Text shaped like a number that does not fit
//! the target type (an `i64` overflow, a bare `-` or `.`) stays `Text`, as do
//! dotted strings such as `127.0.0.1`.

use crate::types::Value;

/// Infers the value represented by `text`.
pub fn classify(text: &str) -> Value {
    if text.is_empty() {
        return Value::Absent;
    }

    match text {
        "true" => return Value::Boolean(true),
        "false" => return Value::Boolean(false),
        _ => {}
    }

    if text.starts_with('[') && text.ends_with(']') {
        let elements = split_sequence(text);
        return Value::Sequence(elements.iter().map(|element| classify(element)).collect());
    }

    match numeric_shape(text) {
        Some(NumericShape::Integer) => text
            .parse()
            .map_or_else(|_| Value::Text(text.to_string()), Value::Integer),
        Some(NumericShape::Float) => text
            .parse()
            .map_or_else(|_| Value::Text(text.to_string()), Value::Float),
        None => Value::Text(text.to_string()),
    }
}

enum NumericShape {
    Integer,
    Float,
}

fn numeric_shape(text: &str) -> Option<NumericShape> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let mut dots = 0;
    for byte in digits.bytes() {
        match byte {
            b'0'..=b'9' => {}
            b'.' => dots += 1,
            _ => return None,
        }
    }
    match dots {
        0 => Some(NumericShape::Integer),
        1 => Some(NumericShape::Float),
        _ => None,
    }
}

/// Splits an inline array into its top-level element texts.
///
/// A running depth counts `[` up and `]` down; a `,` or `]` only ends an
/// element while the depth is at most one, so nested arrays stay whole. The
/// `]` that closes a nested array is consumed as the separator, so an
/// element starting with `[` gets it back. Empty elements are dropped.
fn split_sequence(text: &str) -> Vec<String> {
    let mut elements = Vec::new();
    let mut depth: i32 = 0;
    // Byte offset of the bracket or comma that opened the current element.
    let mut opened_at = 0;

    for (pos, byte) in text.bytes().enumerate() {
        match byte {
            b'[' => depth += 1,
            b']' => depth -= 1,
            _ => {}
        }
        if (byte == b',' || byte == b']') && depth <= 1 {
            let element = &text[opened_at + 1..pos];
            if element.starts_with('[') {
                elements.push(format!("{element}]"));
            } else if !element.is_empty() {
                elements.push(element.to_string());
            }
            opened_at = pos;
        }
    }
    elements
}
