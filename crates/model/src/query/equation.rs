use crate::{core::value::Value, query::operator::Operator};
use serde::{Deserialize, Serialize};

/// A single-operator comparison against a column.
///
/// Serialized externally tagged, so exactly one operator key is ever
/// present: `{"Equal": 7}`, `{"In": [1, 2]}`, `{"Between": [max, min]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Equation {
    Equal(Value),
    NotEqual(Value),
    Less(Value),
    LessEqual(Value),
    Greater(Value),
    GreaterEqual(Value),
    Like(Value),
    In(Vec<Value>),
    /// Bounds in `(max, min)` order. The consuming backend expects the
    /// upper bound first.
    Between(Value, Value),
}

impl Equation {
    pub fn between(max: Value, min: Value) -> Self {
        Equation::Between(max, min)
    }

    pub fn operator(&self) -> Operator {
        match self {
            Equation::Equal(_) => Operator::Equal,
            Equation::NotEqual(_) => Operator::NotEqual,
            Equation::Less(_) => Operator::Less,
            Equation::LessEqual(_) => Operator::LessEqual,
            Equation::Greater(_) => Operator::Greater,
            Equation::GreaterEqual(_) => Operator::GreaterEqual,
            Equation::Like(_) => Operator::Like,
            Equation::In(_) => Operator::In,
            Equation::Between(_, _) => Operator::Between,
        }
    }
}
