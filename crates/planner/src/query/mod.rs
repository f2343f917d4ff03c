pub mod dialect;
pub mod renderer;

pub use renderer::{RenderError, render_selection};
