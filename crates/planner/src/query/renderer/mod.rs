//! Defines the core rendering trait and context for converting a selection
//! to SQL.

use crate::query::dialect::Dialect;
use model::{core::value::Value, query::selection::Selection};
use selection_builder::{StructureError, validate_selection};
use thiserror::Error;
use tracing::debug;

pub mod filter;
pub mod select;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cannot render an invalid selection: {0}")]
    InvalidStructure(#[from] StructureError),
}

/// A trait for any node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters, and provides
/// access to the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    pub fn add_param(&mut self, value: Value) {
        self.params.push(value);
        let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
    }

    pub fn render_identifier(&mut self, ident: &str) {
        let quoted = self.dialect.quote_qualified(ident);
        self.sql.push_str(&quoted);
    }
}

/// Renders a parameterized `SELECT` for the selection.
///
/// The selection is validated first, so the filter is known to alternate
/// operands and junctions when it is rendered.
pub fn render_selection(
    selection: &Selection,
    dialect: &dyn Dialect,
    max_depth: usize,
) -> Result<(String, Vec<Value>), RenderError> {
    validate_selection(selection, max_depth)?;

    let mut renderer = Renderer::new(dialect);
    selection.render(&mut renderer);
    let (sql, params) = renderer.finish();

    debug!(
        "Rendered {} selection with {} parameter(s)",
        dialect.name(),
        params.len()
    );
    Ok((sql, params))
}
