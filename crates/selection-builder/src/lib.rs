pub mod config;
pub mod convert;
pub mod equation;
pub mod error;
pub mod validate;

pub use config::BuilderConfig;
pub use convert::{SelectionBuilder, build_filter, convert};
pub use equation::build_equation;
pub use error::{ConvertError, RowPath};
pub use validate::{ElementPath, StructureError, validate_filter, validate_selection};
