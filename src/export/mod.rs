//! Debug output for external tools

pub mod graphics;

pub use graphics::{render_graphics, save_graphics};
