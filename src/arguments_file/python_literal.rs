//!
//! The JSON value to Python literal renderer.
//!
//! The legacy `verify.py` wrote the constructor arguments with Python's `str()`, so the output
//! follows the `repr` rules of Python lists, dicts, strings, and floats.
//!

use std::fmt::Write;

use unicode_general_category::get_general_category;
use unicode_general_category::GeneralCategory;

///
/// Renders the JSON value as a Python literal.
///
pub fn render(value: &serde_json::Value) -> String {
    let mut buffer = String::with_capacity(64);
    write_value(&mut buffer, value);
    buffer
}

///
/// Appends the value to the buffer.
///
fn write_value(buffer: &mut String, value: &serde_json::Value) {
    match value {
        serde_json::Value::Null => buffer.push_str("None"),
        serde_json::Value::Bool(true) => buffer.push_str("True"),
        serde_json::Value::Bool(false) => buffer.push_str("False"),
        serde_json::Value::Number(number) => write_number(buffer, number),
        serde_json::Value::String(string) => write_string(buffer, string.as_str()),
        serde_json::Value::Array(array) => {
            buffer.push('[');
            for (index, element) in array.iter().enumerate() {
                if index > 0 {
                    buffer.push_str(", ");
                }
                write_value(buffer, element);
            }
            buffer.push(']');
        }
        serde_json::Value::Object(object) => {
            buffer.push('{');
            for (index, (key, element)) in object.iter().enumerate() {
                if index > 0 {
                    buffer.push_str(", ");
                }
                write_string(buffer, key.as_str());
                buffer.push_str(": ");
                write_value(buffer, element);
            }
            buffer.push('}');
        }
    }
}

///
/// Appends the number, following the Python `int` and `float` representations.
///
/// Integers keep their original digits, since Python integers are unbounded and uint256
/// values do not fit any native type.
///
fn write_number(buffer: &mut String, number: &serde_json::Number) {
    let text = number.to_string();
    if text.contains(|character| matches!(character, '.' | 'e' | 'E')) {
        if let Some(float) = number.as_f64() {
            write_float(buffer, float);
            return;
        }
    }

    buffer.push_str(text.as_str());
}

///
/// Appends the float in the shortest round-trip form.
///
/// Python switches to the scientific notation when the decimal exponent is below -4 or
/// at least 16, and always prints at least two exponent digits.
///
fn write_float(buffer: &mut String, float: f64) {
    let scientific = format!("{:e}", float);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or_default()),
        None => (scientific.as_str(), 0),
    };

    if (-4..16).contains(&exponent) {
        let positional = float.to_string();
        buffer.push_str(positional.as_str());
        if !positional.contains('.') {
            buffer.push_str(".0");
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let _ = write!(buffer, "{}e{}{:02}", mantissa, sign, exponent.abs());
    }
}

///
/// Appends the string, quoted and escaped as Python `repr` does.
///
fn write_string(buffer: &mut String, string: &str) {
    let quote = if string.contains('\'') && !string.contains('"') {
        '"'
    } else {
        '\''
    };

    buffer.push(quote);
    for character in string.chars() {
        match character {
            '\\' => buffer.push_str("\\\\"),
            '\t' => buffer.push_str("\\t"),
            '\n' => buffer.push_str("\\n"),
            '\r' => buffer.push_str("\\r"),
            character if character == quote => {
                buffer.push('\\');
                buffer.push(character);
            }
            character if !is_printable(character) => {
                let code = character as u32;
                let _ = if code <= 0xff {
                    write!(buffer, "\\x{:02x}", code)
                } else if code <= 0xffff {
                    write!(buffer, "\\u{:04x}", code)
                } else {
                    write!(buffer, "\\U{:08x}", code)
                };
            }
            character => buffer.push(character),
        }
    }
    buffer.push(quote);
}

///
/// Mirrors Python `str.isprintable`: the ASCII space is printable, other separators,
/// the control, format, surrogate, private use, and unassigned characters are not.
///
fn is_printable(character: char) -> bool {
    if character == ' ' {
        return true;
    }

    !matches!(
        get_general_category(character),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}
