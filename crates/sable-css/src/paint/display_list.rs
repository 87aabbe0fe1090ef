//! The display list: an ordered sequence of drawing commands.
//!
//! Commands are recorded in painting order (back to front), so the
//! rasteriser can simply iterate and execute each one.

use std::fmt::Write;

use crate::layout::Rect;
use crate::style::Color;

/// A single drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    /// Fill a rectangle with a solid colour.
    FillRect {
        /// The rectangle to fill.
        rect: Rect,
        /// The fill colour.
        color: Color,
    },
    /// Draw a 1-pixel outline along the rectangle's edges.
    StrokeRect {
        /// The rectangle to outline.
        rect: Rect,
        /// The stroke colour.
        color: Color,
    },
    /// Draw a text run with its top-left at the rectangle's origin.
    DrawText {
        /// The text area (the run may extend past its right edge).
        rect: Rect,
        /// The text to draw.
        text: String,
        /// The text colour.
        color: Color,
        /// Font size in px. Sets the baseline offset; the glyph bitmaps
        /// are fixed-size.
        font_size: f32,
    },
    /// Clip subsequent drawing to a rectangle. Reserved: the rasteriser
    /// honours it as a no-op.
    ClipRect {
        /// The clip rectangle.
        rect: Rect,
    },
}

/// An ordered list of paint operations.
#[derive(Debug, Clone, Default)]
pub struct PaintList {
    ops: Vec<PaintOp>,
}

impl PaintList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation.
    pub fn push(&mut self, op: PaintOp) {
        self.ops.push(op);
    }

    /// Append a fill.
    pub fn push_fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::FillRect { rect, color });
    }

    /// Append a stroke.
    pub fn push_stroke_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::StrokeRect { rect, color });
    }

    /// Append a text run.
    pub fn push_draw_text(&mut self, rect: Rect, text: String, color: Color, font_size: f32) {
        self.ops.push(PaintOp::DrawText {
            rect,
            text,
            color,
            font_size,
        });
    }

    /// Append a clip (reserved).
    pub fn push_clip_rect(&mut self, rect: Rect) {
        self.ops.push(PaintOp::ClipRect { rect });
    }

    /// Append another list's operations, preserving order.
    pub fn extend(&mut self, other: PaintList) {
        self.ops.extend(other.ops);
    }

    /// The operations in painting order.
    #[must_use]
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True when no operations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Render the list as a numbered debug listing.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (i, op) in self.ops.iter().enumerate() {
            match op {
                PaintOp::FillRect { rect, color } => {
                    let _ = writeln!(out, "{i}: FillRect {} {color}", fmt_rect(rect));
                }
                PaintOp::StrokeRect { rect, color } => {
                    let _ = writeln!(out, "{i}: StrokeRect {} {color}", fmt_rect(rect));
                }
                PaintOp::DrawText {
                    rect,
                    text,
                    color,
                    font_size,
                } => {
                    let _ = writeln!(
                        out,
                        "{i}: DrawText {} {color} fontSize={font_size:.1} {text:?}",
                        fmt_rect(rect)
                    );
                }
                PaintOp::ClipRect { rect } => {
                    let _ = writeln!(out, "{i}: ClipRect {}", fmt_rect(rect));
                }
            }
        }
        out
    }
}

fn fmt_rect(rect: &Rect) -> String {
    format!(
        "({:.1}, {:.1}, {:.1}, {:.1})",
        rect.x, rect.y, rect.width, rect.height
    )
}
