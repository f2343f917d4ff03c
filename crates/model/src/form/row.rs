use crate::{
    core::value::Value,
    query::operator::{Junction, Operator},
};
use serde::{Deserialize, Serialize};

/// One user-entered filter row, exactly as the form submits it.
///
/// Operands live under the key named after the operator they belong to
/// (`Equal`, `Less`, `In`, ...). `Between` reads its bounds from `Max` and
/// `Min`. `condition` stays a raw string so an unrecognised tag surfaces
/// when the row is built, not while the payload is parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(rename = "Equal", default, skip_serializing_if = "Option::is_none")]
    pub equal: Option<Value>,

    #[serde(rename = "NotEqual", default, skip_serializing_if = "Option::is_none")]
    pub not_equal: Option<Value>,

    #[serde(rename = "Less", default, skip_serializing_if = "Option::is_none")]
    pub less: Option<Value>,

    #[serde(rename = "LessEqual", default, skip_serializing_if = "Option::is_none")]
    pub less_equal: Option<Value>,

    #[serde(rename = "Greater", default, skip_serializing_if = "Option::is_none")]
    pub greater: Option<Value>,

    #[serde(rename = "GreaterEqual", default, skip_serializing_if = "Option::is_none")]
    pub greater_equal: Option<Value>,

    #[serde(rename = "Like", default, skip_serializing_if = "Option::is_none")]
    pub like: Option<Value>,

    #[serde(rename = "In", default, skip_serializing_if = "Option::is_none")]
    pub in_values: Option<Vec<Value>>,

    #[serde(rename = "Max", default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Value>,

    #[serde(rename = "Min", default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Value>,

    /// Junction joining this row to the previous one in the same list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub junction: Option<Junction>,

    /// Parenthesized sub-group owned by this row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Vec<FilterRow>>,
}

impl FilterRow {
    pub fn new(column: impl Into<String>, condition: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            condition: Some(condition.into()),
            ..Default::default()
        }
    }

    /// Stores a scalar operand under the key of `op`. No-op for `In` and
    /// `Between`, whose operands live under `In` and `Max`/`Min`.
    pub fn with_operand(mut self, op: Operator, value: impl Into<Value>) -> Self {
        let value = Some(value.into());
        match op {
            Operator::Equal => self.equal = value,
            Operator::NotEqual => self.not_equal = value,
            Operator::Less => self.less = value,
            Operator::LessEqual => self.less_equal = value,
            Operator::Greater => self.greater = value,
            Operator::GreaterEqual => self.greater_equal = value,
            Operator::Like => self.like = value,
            Operator::In | Operator::Between => {}
        }
        self
    }

    pub fn with_junction(mut self, junction: Junction) -> Self {
        self.junction = Some(junction);
        self
    }

    pub fn with_filter(mut self, rows: Vec<FilterRow>) -> Self {
        self.filter = Some(rows);
        self
    }

    /// The scalar operand stored under the key of `op`, if any.
    pub fn scalar_operand(&self, op: Operator) -> Option<&Value> {
        match op {
            Operator::Equal => self.equal.as_ref(),
            Operator::NotEqual => self.not_equal.as_ref(),
            Operator::Less => self.less.as_ref(),
            Operator::LessEqual => self.less_equal.as_ref(),
            Operator::Greater => self.greater.as_ref(),
            Operator::GreaterEqual => self.greater_equal.as_ref(),
            Operator::Like => self.like.as_ref(),
            Operator::In | Operator::Between => None,
        }
    }

    pub fn has_sub_filter(&self) -> bool {
        self.filter.as_ref().is_some_and(|rows| !rows.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_form_row() {
        let row: FilterRow = serde_json::from_value(json!({
            "junction": "And",
            "column": "age",
            "condition": "Between",
            "Max": 65,
            "Min": 18
        }))
        .unwrap();

        assert_eq!(row.column.as_deref(), Some("age"));
        assert_eq!(row.condition.as_deref(), Some("Between"));
        assert_eq!(row.max, Some(Value::Int(65)));
        assert_eq!(row.min, Some(Value::Int(18)));
        assert_eq!(row.junction, Some(Junction::And));
        assert!(!row.has_sub_filter());
    }

    #[test]
    fn test_nested_rows_deserialize() {
        let row: FilterRow = serde_json::from_value(json!({
            "column": "age",
            "condition": "Greater",
            "Greater": 18,
            "filter": [{"column": "city", "condition": "Equal", "Equal": "NYC"}]
        }))
        .unwrap();

        assert!(row.has_sub_filter());
        assert_eq!(
            row.filter.unwrap()[0].scalar_operand(Operator::Equal),
            Some(&Value::String("NYC".into()))
        );
    }

    #[test]
    fn test_unknown_condition_still_parses() {
        let row: FilterRow =
            serde_json::from_value(json!({"column": "a", "condition": "Contains"})).unwrap();
        assert_eq!(row.condition.as_deref(), Some("Contains"));
    }

    #[test]
    fn test_builder_helpers() {
        let row = FilterRow::new("a", "Less").with_operand(Operator::Less, 3);
        assert_eq!(row.scalar_operand(Operator::Less), Some(&Value::Int(3)));
        assert_eq!(row.scalar_operand(Operator::Equal), None);
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!({"column": "a", "condition": "Less", "Less": 3})
        );
    }
}
