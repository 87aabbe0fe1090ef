//! Style computation: defaults, inheritance, and declaration application.

mod cascade;
mod computed;
mod values;

pub use cascade::compute_style;
pub use computed::{AlignItems, Color, ComputedStyle, DisplayValue, Edges, JustifyContent};
pub use values::apply_declaration;
