//! Data types for colors and palettes.

mod color;
mod palette;

pub use color::*;
pub use palette::*;
