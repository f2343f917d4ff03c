use crate::{
    config::BuilderConfig,
    equation::equation_at,
    error::{ConvertError, RowPath},
};
use model::{
    form::{row::FilterRow, values::FormValues},
    query::{
        expression::{Condition, Expression},
        selection::Selection,
    },
};
use tracing::{debug, info};

/// Converts submitted form values into a [`Selection`].
pub struct SelectionBuilder {
    config: BuilderConfig,
}

impl Default for SelectionBuilder {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

impl SelectionBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// Builds the selection, replacing the raw filter rows with the
    /// expression sequence and passing every other field through.
    pub fn build(&self, form: &FormValues) -> Result<Selection, ConvertError> {
        let table = form
            .table
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ConvertError::MissingRequiredField {
                path: RowPath::root(),
                field: "table",
            })?;

        let columns = form
            .columns
            .as_ref()
            .filter(|cols| !cols.is_empty())
            .ok_or_else(|| ConvertError::MissingRequiredField {
                path: RowPath::root(),
                field: "columns",
            })?;

        let filter = self.build_filter(&form.filter)?;

        info!(
            "Built selection on '{}' with {} column(s) and {} filter element(s)",
            table,
            columns.len(),
            filter.len()
        );

        Ok(Selection {
            table: table.to_string(),
            columns: columns.clone(),
            filter,
            order: form.order.clone(),
            limit: form.limit,
            offset: form.offset,
        })
    }

    /// Builds the expression sequence for a list of rows.
    pub fn build_filter(&self, rows: &[FilterRow]) -> Result<Vec<Expression>, ConvertError> {
        self.build_level(rows, 1, &RowPath::root())
    }

    fn build_level(
        &self,
        rows: &[FilterRow],
        depth: usize,
        parent: &RowPath,
    ) -> Result<Vec<Expression>, ConvertError> {
        if depth > self.config.max_depth {
            return Err(ConvertError::FilterTooDeep {
                path: parent.clone(),
                max_depth: self.config.max_depth,
            });
        }

        let mut expressions = Vec::with_capacity(rows.len() * 2);

        for (index, row) in rows.iter().enumerate() {
            let path = parent.child(index);

            match (index, row.junction) {
                (0, Some(_)) => return Err(ConvertError::UnexpectedJunction { path }),
                (0, None) => {}
                (_, Some(junction)) => expressions.push(Expression::Conjunction(junction)),
                (_, None) => return Err(ConvertError::MissingJunction { path }),
            }

            let column = row
                .column
                .as_deref()
                .filter(|c| !c.trim().is_empty())
                .ok_or_else(|| ConvertError::MissingRequiredField {
                    path: path.clone(),
                    field: "column",
                })?;

            let equation = equation_at(row, &path)?;
            debug!("{path}: {column} {:?}", equation);
            expressions.push(Expression::Simple(Condition::new(column, equation)));

            if row.has_sub_filter() {
                let sub_rows = row.filter.as_deref().unwrap_or_default();
                let group = self.build_level(sub_rows, depth + 1, &path)?;
                debug!("{path}: nested group with {} element(s)", group.len());
                expressions.push(Expression::Nested(group));
            }
        }

        Ok(expressions)
    }
}

/// Converts form values with the default configuration.
pub fn convert(form: &FormValues) -> Result<Selection, ConvertError> {
    SelectionBuilder::default().build(form)
}

/// Builds a filter expression sequence with the default configuration.
pub fn build_filter(rows: &[FilterRow]) -> Result<Vec<Expression>, ConvertError> {
    SelectionBuilder::default().build_filter(rows)
}
