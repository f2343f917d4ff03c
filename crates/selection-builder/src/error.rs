use model::query::operator::Operator;
use std::fmt;
use thiserror::Error;

/// Location of a filter row inside the form, as row indices per nesting
/// level. Renders as `filter[1].filter[0]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowPath(Vec<usize>);

impl RowPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(index);
        Self(segments)
    }
}

impl From<Vec<usize>> for RowPath {
    fn from(segments: Vec<usize>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for RowPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "form");
        }
        let parts = self
            .0
            .iter()
            .map(|i| format!("filter[{i}]"))
            .collect::<Vec<_>>();
        write!(f, "{}", parts.join("."))
    }
}

/// Failures while turning form values into a selection.
///
/// All of them are caused by the submitted input; nothing is retried and
/// no partial selection is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("{path}: unknown operator '{operator}'")]
    UnknownOperator { path: RowPath, operator: String },

    #[error("{path}: filter nesting exceeds the maximum depth of {max_depth}")]
    FilterTooDeep { path: RowPath, max_depth: usize },

    #[error("{path}: missing required field '{field}'")]
    MissingRequiredField { path: RowPath, field: &'static str },

    #[error("{path}: operator {operator} requires a value for '{field}'")]
    MissingOperand {
        path: RowPath,
        operator: Operator,
        field: &'static str,
    },

    #[error("{path}: the first row of a filter cannot carry a junction")]
    UnexpectedJunction { path: RowPath },

    #[error("{path}: rows after the first must carry a junction")]
    MissingJunction { path: RowPath },
}
