//! Core value types shared by every stage of the planner.
//!
//! - [`Point2D`]: venue coordinates (layout units, y grows downward as in the layout file)
//! - [`Rect`]: center/extent rectangle used for seat blocks and exits

mod point;
mod rect;

pub use point::Point2D;
pub use rect::Rect;
