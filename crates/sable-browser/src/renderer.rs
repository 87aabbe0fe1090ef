//! Software rasteriser for headless rendering.
//!
//! Executes a [`PaintList`] into an RGBA pixel buffer. The renderer knows
//! nothing about CSS, layout or the DOM: it only executes drawing
//! commands.
//!
//! Fills are opaque overwrites: the op's colour (including its alpha
//! channel) replaces the destination pixel, with no blending. Every write
//! is clipped to the image rectangle; nothing outside `[0,W)×[0,H)` is
//! ever touched.

use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use sable_css::{Color, PaintList, PaintOp, Rect};

use crate::font_face;

/// Rasterise a paint list into a fresh RGBA buffer of the given size.
#[must_use]
pub fn rasterize(list: &PaintList, width: u32, height: u32) -> RgbaImage {
    let mut renderer = Renderer::new(width, height);
    renderer.render(list);
    renderer.into_image()
}

/// Software renderer that executes a display list into a pixel buffer.
pub struct Renderer {
    /// RGBA pixel buffer. Starts fully transparent.
    buffer: RgbaImage,
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
}

impl Renderer {
    /// Create a renderer with a transparent buffer of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbaImage::new(width, height),
            width,
            height,
        }
    }

    /// Buffer width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The rendered pixel buffer.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Consume the renderer and take the pixel buffer.
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.buffer
    }

    /// Execute a display list, drawing every op in order.
    pub fn render(&mut self, list: &PaintList) {
        for op in list.ops() {
            self.execute_op(op);
        }
    }

    fn execute_op(&mut self, op: &PaintOp) {
        match op {
            PaintOp::FillRect { rect, color } => self.fill_rect(rect, *color),
            PaintOp::StrokeRect { rect, color } => self.stroke_rect(rect, *color),
            PaintOp::DrawText {
                rect,
                text,
                color,
                font_size,
            } => self.draw_text(text, rect, *color, *font_size),
            // Clipping is reserved and honoured as a no-op
            PaintOp::ClipRect { .. } => {}
        }
    }

    /// Write one pixel, bounds-checked.
    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.buffer
                .put_pixel(x as u32, y as u32, Rgba([color.r, color.g, color.b, color.a]));
        }
    }

    /// Pixel-axis-aligned rectangle fill, clipped to the image.
    #[allow(clippy::cast_possible_truncation)]
    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        let x0 = (rect.x as i32).max(0);
        let y0 = (rect.y as i32).max(0);
        let x1 = ((rect.x + rect.width) as i32).min(self.width as i32);
        let y1 = ((rect.y + rect.height) as i32).min(self.height as i32);

        let pixel = Rgba([color.r, color.g, color.b, color.a]);
        for y in y0..y1 {
            for x in x0..x1 {
                self.buffer.put_pixel(x as u32, y as u32, pixel);
            }
        }
    }

    /// 1-pixel outline along the four edges of the rect.
    #[allow(clippy::cast_possible_truncation)]
    fn stroke_rect(&mut self, rect: &Rect, color: Color) {
        let x0 = rect.x as i32;
        let y0 = rect.y as i32;
        let x1 = (rect.x + rect.width) as i32;
        let y1 = (rect.y + rect.height) as i32;

        for x in x0..x1 {
            self.put_pixel(x, y0, color);
            self.put_pixel(x, y1 - 1, color);
        }
        for y in y0..y1 {
            self.put_pixel(x0, y, color);
            self.put_pixel(x1 - 1, y, color);
        }
    }

    /// Draw a text run with the fixed bitmap face.
    ///
    /// The baseline sits at `rect.y + font_size`; the glyphs themselves do
    /// not scale with the font size. No kerning, no shaping, and no
    /// clipping to the rect: the run may extend past its right edge.
    #[allow(clippy::cast_possible_truncation)]
    fn draw_text(&mut self, text: &str, rect: &Rect, color: Color, font_size: f32) {
        let baseline = (rect.y + font_size) as i32;
        let top = baseline - font_face::ASCENT;
        let mut cursor_x = rect.x as i32;

        for ch in text.chars() {
            let rows = font_face::glyph(ch);
            for (row, &bits) in rows.iter().enumerate() {
                for col in 0..font_face::GLYPH_WIDTH {
                    if bits & (0x40 >> col) != 0 {
                        self.put_pixel(cursor_x + col as i32, top + row as i32, color);
                    }
                }
            }
            cursor_x += font_face::GLYPH_WIDTH as i32;
        }
    }

    /// Save the rendered image to a file. The format follows the path's
    /// extension; `.png` is the lossless default.
    ///
    /// # Errors
    ///
    /// Returns an error when the image cannot be encoded or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.buffer
            .save(path)
            .with_context(|| format!("failed to save image to '{}'", path.display()))
    }
}
