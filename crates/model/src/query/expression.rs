use crate::query::{equation::Equation, operator::Junction};
use serde::{Deserialize, Serialize};

/// Leaf node pairing a column with its equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub column: String,
    pub equation: Equation,
}

impl Condition {
    pub fn new(column: impl Into<String>, equation: Equation) -> Self {
        Self {
            column: column.into(),
            equation,
        }
    }
}

/// One element of a selection filter.
///
/// Untagged on the wire: a condition is an object, a junction a bare
/// string and a nested group an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expression {
    Simple(Condition),
    Conjunction(Junction),
    Nested(Vec<Expression>),
}

impl Expression {
    pub fn is_junction(&self) -> bool {
        matches!(self, Expression::Conjunction(_))
    }
}
