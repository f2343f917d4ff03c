use crate::query::expression::Expression;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Asc,
    Desc,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Asc => write!(f, "ASC"),
            OrderType::Desc => write!(f, "DESC"),
        }
    }
}

/// Sort key for a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Column to sort by.
    pub name: String,
    pub order: OrderType,
}

/// The complete query submission sent to the execution backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Target table.
    pub table: String,

    /// Columns to return.
    pub columns: Vec<String>,

    /// Alternating operand/junction sequence. Empty means no filtering.
    #[serde(default)]
    pub filter: Vec<Expression>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<Order>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_are_omitted() {
        let selection = Selection {
            table: "users".into(),
            columns: vec!["id".into()],
            filter: vec![],
            order: None,
            limit: None,
            offset: None,
        };

        assert_eq!(
            serde_json::to_value(&selection).unwrap(),
            json!({"table": "users", "columns": ["id"], "filter": []})
        );
    }

    #[test]
    fn test_order_round_trips() {
        let raw = json!({
            "table": "t",
            "columns": ["a"],
            "order": [{"name": "a", "order": "Desc"}],
            "limit": 10
        });
        let selection: Selection = serde_json::from_value(raw).unwrap();
        assert_eq!(
            selection.order,
            Some(vec![Order {
                name: "a".into(),
                order: OrderType::Desc,
            }])
        );
        assert_eq!(selection.limit, Some(10));
        assert!(selection.filter.is_empty());
    }

    #[test]
    fn test_negative_limit_is_rejected() {
        let raw = json!({"table": "t", "columns": ["a"], "limit": -1});
        assert!(serde_json::from_value::<Selection>(raw).is_err());
    }
}
