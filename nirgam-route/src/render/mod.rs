//! Rendering of layouts, graphs and routes for inspection.

pub mod svg;

pub use self::svg::{render_svg, save_svg};
