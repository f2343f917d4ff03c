//! Structural checks for an already-built selection filter.
//!
//! A filter is a sequence of operand units separated by junctions, where a
//! unit is either a condition (optionally followed by the group owned by the
//! same form row) or a standalone group:
//!
//! ```text
//! filter := ε | unit (junction unit)*
//! unit   := condition [group] | group
//! group  := non-empty filter
//! ```

use model::query::{expression::Expression, selection::Selection};
use std::fmt;
use thiserror::Error;

/// Position of an element in a filter, e.g. `filter[2][0]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementPath(Vec<usize>);

impl ElementPath {
    fn child(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(index);
        Self(segments)
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "filter")?;
        for i in &self.0 {
            write!(f, "[{i}]")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("selection is missing required field '{0}'")]
    MissingRequiredField(&'static str),

    #[error("{0}: a junction must follow an operand")]
    UnexpectedJunction(ElementPath),

    #[error("{0}: operands must be separated by a junction")]
    MissingJunction(ElementPath),

    #[error("{0}: filter ends with a junction")]
    TrailingJunction(ElementPath),

    #[error("{0}: nested group is empty")]
    EmptyGroup(ElementPath),

    #[error("{0}: condition has an empty column")]
    EmptyColumn(ElementPath),

    #[error("{path}: filter nesting exceeds the maximum depth of {max_depth}")]
    FilterTooDeep { path: ElementPath, max_depth: usize },
}

/// Checks `table`, `columns` and the filter structure of a selection.
pub fn validate_selection(selection: &Selection, max_depth: usize) -> Result<(), StructureError> {
    if selection.table.trim().is_empty() {
        return Err(StructureError::MissingRequiredField("table"));
    }
    if selection.columns.is_empty() {
        return Err(StructureError::MissingRequiredField("columns"));
    }
    validate_filter(&selection.filter, max_depth)
}

/// Checks a filter against the operand/junction grammar and depth bound.
pub fn validate_filter(filter: &[Expression], max_depth: usize) -> Result<(), StructureError> {
    check_sequence(filter, 1, max_depth, &ElementPath::default())
}

fn check_sequence(
    items: &[Expression],
    depth: usize,
    max_depth: usize,
    path: &ElementPath,
) -> Result<(), StructureError> {
    if depth > max_depth {
        return Err(StructureError::FilterTooDeep {
            path: path.clone(),
            max_depth,
        });
    }

    let mut expect_operand = true;
    let mut after_condition = false;

    for (index, item) in items.iter().enumerate() {
        let at = path.child(index);
        match item {
            Expression::Conjunction(_) => {
                if expect_operand {
                    return Err(StructureError::UnexpectedJunction(at));
                }
                expect_operand = true;
                after_condition = false;
            }
            Expression::Simple(condition) => {
                if !expect_operand {
                    return Err(StructureError::MissingJunction(at));
                }
                if condition.column.trim().is_empty() {
                    return Err(StructureError::EmptyColumn(at));
                }
                expect_operand = false;
                after_condition = true;
            }
            Expression::Nested(group) => {
                // A group directly after a condition belongs to that condition's row.
                if !expect_operand && !after_condition {
                    return Err(StructureError::MissingJunction(at));
                }
                if group.is_empty() {
                    return Err(StructureError::EmptyGroup(at));
                }
                check_sequence(group, depth + 1, max_depth, &at)?;
                expect_operand = false;
                after_condition = false;
            }
        }
    }

    if items.last().is_some_and(Expression::is_junction) {
        return Err(StructureError::TrailingJunction(path.child(items.len() - 1)));
    }

    Ok(())
}
