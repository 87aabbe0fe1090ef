//! The computed-style record and its value types.
//!
//! Each element resolves to one flat [`ComputedStyle`]. All fields carry
//! concrete values; `width`/`height` use `None` for `auto`. The record is
//! `Copy` so layout can pass styles by value.

use core::fmt;

use strum_macros::Display;

/// The outer display type of an element.
///
/// `Flex` is parsed and stored but lays out as block; it is reserved for
/// future flex support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DisplayValue {
    /// Block-level box, participates in vertical block flow.
    #[default]
    Block,
    /// Inline box. Layout currently treats it like block.
    Inline,
    /// Generates no box; the subtree is dropped from the layout tree.
    None,
    /// Flex container (reserved).
    Flex,
}

/// Main-axis alignment for flex containers (reserved, unused by block
/// layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum JustifyContent {
    /// Items packed toward the start of the line.
    #[default]
    FlexStart,
    /// Items packed toward the end of the line.
    FlexEnd,
    /// Items packed toward the center of the line.
    Center,
    /// Items evenly distributed.
    SpaceBetween,
    /// Items evenly distributed with half-size end spaces.
    SpaceAround,
}

/// Cross-axis alignment for flex containers (reserved, unused by block
/// layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum AlignItems {
    /// Items flush with the cross-start edge.
    FlexStart,
    /// Items flush with the cross-end edge.
    FlexEnd,
    /// Items centered in the cross axis.
    Center,
    /// Items stretched to fill the line.
    #[default]
    Stretch,
}

/// An 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel. 0 is fully transparent.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Construct a colour from its channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Per-edge pixel lengths for margin, padding and border widths.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
    /// Left edge.
    pub left: f32,
}

impl Edges {
    /// All four edges set to the same length.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Computed style for one element.
///
/// `color` and `font_size` inherit from the parent; every other field
/// starts from its default unless a matching rule sets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedStyle {
    /// Outer display type.
    pub display: DisplayValue,
    /// Explicit width in px; `None` is auto.
    pub width: Option<f32>,
    /// Explicit height in px; `None` is auto.
    pub height: Option<f32>,
    /// Margin edges.
    pub margin: Edges,
    /// Padding edges.
    pub padding: Edges,
    /// Border widths.
    pub border: Edges,
    /// Background colour.
    pub background: Color,
    /// Border colour, shared by all four edges.
    pub border_color: Color,
    /// Text colour. Inherited.
    pub color: Color,
    /// Font size in px. Inherited. Affects line height for layout, not
    /// glyph size for raster.
    pub font_size: f32,
    /// Flex grow factor (reserved).
    pub flex_grow: f32,
    /// Main-axis alignment (reserved).
    pub justify_content: JustifyContent,
    /// Cross-axis alignment (reserved).
    pub align_items: AlignItems,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: DisplayValue::Block,
            width: None,
            height: None,
            margin: Edges::default(),
            padding: Edges::default(),
            border: Edges::default(),
            background: Color::TRANSPARENT,
            border_color: Color::BLACK,
            color: Color::BLACK,
            font_size: 16.0,
            flex_grow: 0.0,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
        }
    }
}
