//! Lenient decoding of guest payload fields.
//!
//! Guest pages send sloppy payloads
//! (missing fields, strings for numbers). Numbers are converted the way the
//! guest engine converts to a 32-bit integer, so a field the page thinks is
//! `"12"` or `12.9` means `12` here too, and anything unusable becomes `0`.

use serde_json::Value;
use tracing::debug;

use hudkit_common::Rect;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Guest-style integer conversion of an optional JSON value.
pub fn to_int32(value: Option<&Value>) -> i32 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i as i32
            } else if let Some(u) = n.as_u64() {
                u as i32
            } else {
                n.as_f64().map(float_to_int32).unwrap_or(0)
            }
        }
        Some(Value::Bool(b)) => i32::from(*b),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0
            } else {
                s.parse::<f64>().map(float_to_int32).unwrap_or(0)
            }
        }
        _ => 0,
    }
}

fn float_to_int32(f: f64) -> i32 {
    if !f.is_finite() {
        return 0;
    }
    let wrapped = f.trunc().rem_euclid(TWO_POW_32);
    wrapped as u64 as u32 as i32
}

/// True when `value` is already an integer in `i32` range.
fn is_exact_int32(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Number(n)) if n.as_i64().is_some_and(|i| i32::try_from(i).is_ok()))
}

/// Integer field `key` of an object payload. Logs when coercion happens.
pub fn int_field(payload: &Value, key: &str) -> i32 {
    let value = payload.get(key);
    let n = to_int32(value);
    if !is_exact_int32(value) {
        debug!(field = key, raw = ?value, coerced = n, "coerced payload field");
    }
    n
}

/// Guest truthiness of field `key`.
pub fn bool_field(payload: &Value, key: &str) -> bool {
    match payload.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// String form of a value: strings as-is, `null`/missing as empty, anything
/// else as its JSON text.
pub fn to_string_lossy(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}

pub fn str_field(payload: &Value, key: &str) -> String {
    let value = payload.get(key);
    if !matches!(value, Some(Value::String(_))) {
        debug!(field = key, raw = ?value, "coerced payload field to string");
    }
    to_string_lossy(value)
}

/// Array of strings in field `key`. A non-array yields an empty list.
pub fn string_list(payload: &Value, key: &str) -> Vec<String> {
    match payload.get(key) {
        Some(Value::Array(items)) => items.iter().map(|v| to_string_lossy(Some(v))).collect(),
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            debug!(field = key, raw = %other, "expected array, using empty list");
            Vec::new()
        }
    }
}

/// Array of `{x, y, width, height}` objects in field `key`.
pub fn rect_list(payload: &Value, key: &str) -> Vec<Rect> {
    match payload.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                Rect::new(
                    int_field(item, "x"),
                    int_field(item, "y"),
                    int_field(item, "width"),
                    int_field(item, "height"),
                )
            })
            .collect(),
        other => {
            debug!(field = key, raw = ?other, "expected rectangle array, using empty list");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_pass_through() {
        assert_eq!(to_int32(Some(&json!(42))), 42);
        assert_eq!(to_int32(Some(&json!(-7))), -7);
    }

    #[test]
    fn missing_and_garbage_become_zero() {
        let payload = json!({"a": null, "b": "abc", "c": {}, "d": []});
        for key in ["a", "b", "c", "d", "missing"] {
            assert_eq!(int_field(&payload, key), 0, "field {key}");
        }
        assert_eq!(int_field(&json!(5), "x"), 0);
    }

    #[test]
    fn floats_truncate_toward_zero() {
        assert_eq!(to_int32(Some(&json!(12.9))), 12);
        assert_eq!(to_int32(Some(&json!(-12.9))), -12);
    }

    #[test]
    fn large_values_wrap_to_32_bits() {
        assert_eq!(to_int32(Some(&json!(4_294_967_296u64 + 5))), 5);
        assert_eq!(to_int32(Some(&json!(2_147_483_648u64))), i32::MIN);
        assert_eq!(to_int32(Some(&json!(4_294_967_301.5))), 5);
        assert_eq!(to_int32(Some(&json!(u64::MAX))), -1);
    }

    #[test]
    fn booleans_and_numeric_strings() {
        assert_eq!(to_int32(Some(&json!(true))), 1);
        assert_eq!(to_int32(Some(&json!(false))), 0);
        assert_eq!(to_int32(Some(&json!(" 12 "))), 12);
        assert_eq!(to_int32(Some(&json!("7.5"))), 7);
        assert_eq!(to_int32(Some(&json!(""))), 0);
    }

    #[test]
    fn truthiness() {
        let payload = json!({
            "t": true, "f": false, "one": 1, "zero": 0,
            "s": "x", "empty": "", "obj": {}, "null": null
        });
        assert!(bool_field(&payload, "t"));
        assert!(!bool_field(&payload, "f"));
        assert!(bool_field(&payload, "one"));
        assert!(!bool_field(&payload, "zero"));
        assert!(bool_field(&payload, "s"));
        assert!(!bool_field(&payload, "empty"));
        assert!(bool_field(&payload, "obj"));
        assert!(!bool_field(&payload, "null"));
        assert!(!bool_field(&payload, "missing"));
    }

    #[test]
    fn strings_and_lists() {
        let payload = json!({"program": "echo", "args": ["hi", 3, null], "bad": "x"});
        assert_eq!(str_field(&payload, "program"), "echo");
        assert_eq!(str_field(&payload, "missing"), "");
        assert_eq!(string_list(&payload, "args"), vec!["hi", "3", ""]);
        assert!(string_list(&payload, "bad").is_empty());
        assert!(string_list(&payload, "missing").is_empty());
    }

    #[test]
    fn rectangles_with_missing_fields() {
        let payload = json!({"rectangles": [
            {"x": 1, "y": 2, "width": 3, "height": 4},
            {"x": 5, "width": "6"},
        ]});
        assert_eq!(
            rect_list(&payload, "rectangles"),
            vec![Rect::new(1, 2, 3, 4), Rect::new(5, 0, 6, 0)]
        );
        assert!(rect_list(&json!({}), "rectangles").is_empty());
    }
}
