use serde::{Deserialize, Serialize};

/// A scalar operand entered in a filter row.
///
/// Serialized untagged so form values and selection payloads carry plain
/// JSON scalars (`7`, `"NYC"`, `true`, `null`). Integers above `i64::MAX`
/// land in `Uint` instead of degrading to a float.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Null,
    Boolean(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_deserialization() {
        let values: Vec<Value> = serde_json::from_str(r#"[7, 2.5, "NYC", true, null]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Int(7),
                Value::Float(2.5),
                Value::String("NYC".into()),
                Value::Boolean(true),
                Value::Null,
            ]
        );
    }

    #[test]
    fn test_serializes_as_plain_scalar() {
        assert_eq!(serde_json::to_string(&Value::Int(18)).unwrap(), "18");
        assert_eq!(
            serde_json::to_string(&Value::String("a".into())).unwrap(),
            r#""a""#
        );
    }

    #[test]
    fn test_large_unsigned_keeps_precision() {
        let raw = "18446744073709551615";
        let value: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(value, Value::Uint(u64::MAX));
        assert_eq!(serde_json::to_string(&value).unwrap(), raw);

        let value: Value = serde_json::from_str("9223372036854775807").unwrap();
        assert_eq!(value, Value::Int(i64::MAX));
    }
}
