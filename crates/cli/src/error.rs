use planner::query::RenderError;
use selection_builder::{ConvertError, StructureError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse the input as JSON: {0}")]
    InputDeserialize(#[from] serde_json::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Failed to convert the form: {0}")]
    Convert(#[from] ConvertError),

    #[error("Invalid selection: {0}")]
    Structure(#[from] StructureError),

    #[error("Failed to render SQL: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid SQL dialect provided: {0}")]
    InvalidDialect(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
