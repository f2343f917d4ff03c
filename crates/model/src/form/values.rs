use crate::{form::row::FilterRow, query::selection::Order};
use serde::{Deserialize, Serialize};

/// Raw submission of the selection form.
///
/// Required-ness of `table` and `columns` is checked by the converter, so
/// both are optional here and a missing field yields a typed error instead
/// of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormValues {
    #[serde(default)]
    pub table: Option<String>,

    #[serde(default)]
    pub columns: Option<Vec<String>>,

    /// Top-level filter rows.
    #[serde(default)]
    pub filter: Vec<FilterRow>,

    #[serde(default)]
    pub order: Option<Vec<Order>>,

    #[serde(default)]
    pub limit: Option<u64>,

    #[serde(default)]
    pub offset: Option<u64>,
}

impl FormValues {
    pub fn new(table: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            table: Some(table.into()),
            columns: Some(columns),
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, rows: Vec<FilterRow>) -> Self {
        self.filter = rows;
        self
    }
}
