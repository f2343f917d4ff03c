use crate::error::{ConvertError, RowPath};
use model::{
    core::value::Value,
    form::row::FilterRow,
    query::{equation::Equation, operator::Operator},
};

/// Builds the equation selected by `row.condition`.
pub fn build_equation(row: &FilterRow) -> Result<Equation, ConvertError> {
    equation_at(row, &RowPath::root())
}

pub(crate) fn equation_at(row: &FilterRow, path: &RowPath) -> Result<Equation, ConvertError> {
    let tag = row
        .condition
        .as_deref()
        .ok_or_else(|| ConvertError::MissingRequiredField {
            path: path.clone(),
            field: "condition",
        })?;

    let operator = tag
        .parse::<Operator>()
        .map_err(|e| ConvertError::UnknownOperator {
            path: path.clone(),
            operator: e.0,
        })?;

    let scalar = |field: &'static str| -> Result<Value, ConvertError> {
        row.scalar_operand(operator)
            .cloned()
            .ok_or_else(|| missing(path, operator, field))
    };

    let equation = match operator {
        Operator::In => {
            let values = row
                .in_values
                .clone()
                .ok_or_else(|| missing(path, operator, "In"))?;
            Equation::In(values)
        }
        Operator::Between => {
            let max = row.max.clone().ok_or_else(|| missing(path, operator, "Max"))?;
            let min = row.min.clone().ok_or_else(|| missing(path, operator, "Min"))?;
            Equation::between(max, min)
        }
        Operator::Like => Equation::Like(scalar("Like")?),
        Operator::Equal => Equation::Equal(scalar("Equal")?),
        Operator::NotEqual => Equation::NotEqual(scalar("NotEqual")?),
        Operator::Less => Equation::Less(scalar("Less")?),
        Operator::LessEqual => Equation::LessEqual(scalar("LessEqual")?),
        Operator::Greater => Equation::Greater(scalar("Greater")?),
        Operator::GreaterEqual => Equation::GreaterEqual(scalar("GreaterEqual")?),
    };

    Ok(equation)
}

fn missing(path: &RowPath, operator: Operator, field: &'static str) -> ConvertError {
    ConvertError::MissingOperand {
        path: path.clone(),
        operator,
        field,
    }
}
