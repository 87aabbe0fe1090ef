//! Painting: display-list generation from the laid-out tree.

mod display_list;
mod painter;

pub use display_list::{PaintList, PaintOp};
pub use painter::{paint, paint_background};
