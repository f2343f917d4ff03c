use crate::query::renderer::{Render, Renderer};
use model::{
    core::value::Value,
    query::{
        equation::Equation,
        expression::{Condition, Expression},
        operator::{Junction, Operator},
    },
};

/// A filter sequence rendered as a boolean SQL expression.
pub struct FilterClause<'a>(pub &'a [Expression]);

impl Render for FilterClause<'_> {
    fn render(&self, r: &mut Renderer) {
        let mut previous: Option<&Expression> = None;

        for item in self.0 {
            match item {
                Expression::Conjunction(junction) => junction.render(r),
                Expression::Simple(condition) => condition.render(r),
                Expression::Nested(group) => {
                    // A group right after a condition is owned by that row.
                    if matches!(previous, Some(Expression::Simple(_))) {
                        r.sql.push_str(" AND ");
                    }
                    r.sql.push('(');
                    FilterClause(group).render(r);
                    r.sql.push(')');
                }
            }
            previous = Some(item);
        }
    }
}

impl Render for Junction {
    fn render(&self, r: &mut Renderer) {
        match self {
            Junction::And => r.sql.push_str(" AND "),
            Junction::Or => r.sql.push_str(" OR "),
        }
    }
}

impl Render for Condition {
    fn render(&self, r: &mut Renderer) {
        match &self.equation {
            Equation::Equal(Value::Null) => {
                r.render_identifier(&self.column);
                r.sql.push_str(" IS NULL");
            }
            Equation::NotEqual(Value::Null) => {
                r.render_identifier(&self.column);
                r.sql.push_str(" IS NOT NULL");
            }
            Equation::In(values) if values.is_empty() => {
                // Nothing can match an empty set.
                r.sql.push_str("1 = 0");
            }
            Equation::In(values) => {
                r.render_identifier(&self.column);
                r.sql.push_str(" IN (");
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(", ");
                    }
                    r.add_param(value.clone());
                }
                r.sql.push(')');
            }
            Equation::Between(max, min) => {
                r.render_identifier(&self.column);
                r.sql.push_str(" BETWEEN ");
                r.add_param(min.clone());
                r.sql.push_str(" AND ");
                r.add_param(max.clone());
            }
            Equation::Equal(v)
            | Equation::NotEqual(v)
            | Equation::Less(v)
            | Equation::LessEqual(v)
            | Equation::Greater(v)
            | Equation::GreaterEqual(v)
            | Equation::Like(v) => {
                r.render_identifier(&self.column);
                r.sql.push(' ');
                r.sql.push_str(comparator(self.equation.operator()));
                r.sql.push(' ');
                r.add_param(v.clone());
            }
        }
    }
}

fn comparator(operator: Operator) -> &'static str {
    match operator {
        Operator::Equal => "=",
        Operator::NotEqual => "<>",
        Operator::Less => "<",
        Operator::LessEqual => "<=",
        Operator::Greater => ">",
        Operator::GreaterEqual => ">=",
        Operator::Like => "LIKE",
        Operator::In => "IN",
        Operator::Between => "BETWEEN",
    }
}
