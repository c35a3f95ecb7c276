//! Pure geometry for slideout
//!
//! Points, sizes, rectangles and edge insets used for hit regions and panel
//! placement. No rendering lives here.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
