//! The fixed 7×13 bitmap face used for all text raster.
//!
//! Glyphs cover printable ASCII (0x20..=0x7E); anything else renders as
//! the fallback block. Each glyph is 13 rows of a 7-bit mask with bit 6 as
//! the leftmost column. The baseline sits [`ASCENT`] rows below the glyph
//! top, leaving two descender rows.
//!
//! The face is intentionally size-independent: `font-size` moves the
//! baseline during layout and paint but never scales the bitmaps.

/// Glyph advance width in pixels.
pub const GLYPH_WIDTH: u32 = 7;
/// Glyph height in pixels.
pub const GLYPH_HEIGHT: u32 = 13;
/// Rows above the baseline.
pub const ASCENT: i32 = 11;

/// Rendered for any character outside the printable ASCII range.
pub const FALLBACK: [u8; 13] = [
    0x00, 0x00, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x3E, 0x00, 0x00,
];

/// Look up the bitmap rows for a character.
#[must_use]
pub fn glyph(ch: char) -> &'static [u8; 13] {
    let code = ch as u32;
    if (0x20..=0x7E).contains(&code) {
        &GLYPHS[(code - 0x20) as usize]
    } else {
        &FALLBACK
    }
}

/// Bitmap rows for 0x20..=0x7E, in code-point order.
#[rustfmt::skip]
static GLYPHS: [[u8; 13]; 95] = [
    // ' '
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '!'
    [0x00, 0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x08, 0x00, 0x00],
    // '"'
    [0x00, 0x00, 0x14, 0x14, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '#'
    [0x00, 0x00, 0x00, 0x14, 0x3E, 0x14, 0x14, 0x14, 0x3E, 0x14, 0x00, 0x00, 0x00],
    // '$'
    [0x00, 0x00, 0x00, 0x08, 0x1E, 0x28, 0x1C, 0x0A, 0x3C, 0x08, 0x00, 0x00, 0x00],
    // '%'
    [0x00, 0x00, 0x00, 0x32, 0x34, 0x04, 0x08, 0x10, 0x16, 0x26, 0x00, 0x00, 0x00],
    // '&'
    [0x00, 0x00, 0x00, 0x18, 0x24, 0x28, 0x10, 0x2A, 0x24, 0x1A, 0x00, 0x00, 0x00],
    // '\''
    [0x00, 0x00, 0x08, 0x08, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '('
    [0x00, 0x00, 0x04, 0x08, 0x10, 0x10, 0x10, 0x10, 0x10, 0x08, 0x04, 0x00, 0x00],
    // ')'
    [0x00, 0x00, 0x10, 0x08, 0x04, 0x04, 0x04, 0x04, 0x04, 0x08, 0x10, 0x00, 0x00],
    // '*'
    [0x00, 0x00, 0x00, 0x00, 0x08, 0x2A, 0x1C, 0x2A, 0x08, 0x00, 0x00, 0x00, 0x00],
    // '+'
    [0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x3E, 0x08, 0x08, 0x00, 0x00, 0x00, 0x00],
    // ','
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
    // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '.'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00],
    // '/'
    [0x00, 0x00, 0x02, 0x02, 0x04, 0x04, 0x08, 0x10, 0x10, 0x20, 0x20, 0x00, 0x00],
    // '0'
    [0x00, 0x00, 0x1C, 0x22, 0x22, 0x26, 0x2A, 0x32, 0x22, 0x22, 0x1C, 0x00, 0x00],
    // '1'
    [0x00, 0x00, 0x08, 0x18, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x1C, 0x00, 0x00],
    // '2'
    [0x00, 0x00, 0x1C, 0x22, 0x02, 0x02, 0x04, 0x08, 0x10, 0x20, 0x3E, 0x00, 0x00],
    // '3'
    [0x00, 0x00, 0x3E, 0x02, 0x04, 0x08, 0x1C, 0x02, 0x02, 0x22, 0x1C, 0x00, 0x00],
    // '4'
    [0x00, 0x00, 0x04, 0x0C, 0x14, 0x24, 0x24, 0x3E, 0x04, 0x04, 0x04, 0x00, 0x00],
    // '5'
    [0x00, 0x00, 0x3E, 0x20, 0x20, 0x3C, 0x02, 0x02, 0x02, 0x22, 0x1C, 0x00, 0x00],
    // '6'
    [0x00, 0x00, 0x0C, 0x10, 0x20, 0x3C, 0x22, 0x22, 0x22, 0x22, 0x1C, 0x00, 0x00],
    // '7'
    [0x00, 0x00, 0x3E, 0x02, 0x04, 0x04, 0x08, 0x08, 0x10, 0x10, 0x10, 0x00, 0x00],
    // '8'
    [0x00, 0x00, 0x1C, 0x22, 0x22, 0x22, 0x1C, 0x22, 0x22, 0x22, 0x1C, 0x00, 0x00],
    // '9'
    [0x00, 0x00, 0x1C, 0x22, 0x22, 0x22, 0x1E, 0x02, 0x02, 0x04, 0x18, 0x00, 0x00],
    // ':'
    [0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00],
    // ';'
    [0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08, 0x00],
    // '<'
    [0x00, 0x00, 0x00, 0x04, 0x08, 0x10, 0x20, 0x10, 0x08, 0x04, 0x00, 0x00, 0x00],
    // '='
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x00, 0x00],
    // '>'
    [0x00, 0x00, 0x00, 0x10, 0x08, 0x04, 0x02, 0x04, 0x08, 0x10, 0x00, 0x00, 0x00],
    // '?'
    [0x00, 0x00, 0x1C, 0x22, 0x02, 0x04, 0x08, 0x08, 0x00, 0x00, 0x08, 0x00, 0x00],
    // '@'
    [0x00, 0x00, 0x1C, 0x22, 0x2E, 0x2A, 0x2A, 0x2E, 0x20, 0x20, 0x1E, 0x00, 0x00],
    // 'A'
    [0x00, 0x00, 0x08, 0x14, 0x22, 0x22, 0x3E, 0x22, 0x22, 0x22, 0x22, 0x00, 0x00],
    // 'B'
    [0x00, 0x00, 0x3C, 0x22, 0x22, 0x22, 0x3C, 0x22, 0x22, 0x22, 0x3C, 0x00, 0x00],
    // 'C'
    [0x00, 0x00, 0x1C, 0x22, 0x20, 0x20, 0x20, 0x20, 0x20, 0x22, 0x1C, 0x00, 0x00],
    // 'D'
    [0x00, 0x00, 0x3C, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x3C, 0x00, 0x00],
    // 'E'
    [0x00, 0x00, 0x3E, 0x20, 0x20, 0x20, 0x3C, 0x20, 0x20, 0x20, 0x3E, 0x00, 0x00],
    // 'F'
    [0x00, 0x00, 0x3E, 0x20, 0x20, 0x20, 0x3C, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00],
    // 'G'
    [0x00, 0x00, 0x1C, 0x22, 0x20, 0x20, 0x20, 0x2E, 0x22, 0x22, 0x1C, 0x00, 0x00],
    // 'H'
    [0x00, 0x00, 0x22, 0x22, 0x22, 0x22, 0x3E, 0x22, 0x22, 0x22, 0x22, 0x00, 0x00],
    // 'I'
    [0x00, 0x00, 0x1C, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x1C, 0x00, 0x00],
    // 'J'
    [0x00, 0x00, 0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x24, 0x18, 0x00, 0x00],
    // 'K'
    [0x00, 0x00, 0x22, 0x24, 0x28, 0x30, 0x30, 0x28, 0x24, 0x22, 0x22, 0x00, 0x00],
    // 'L'
    [0x00, 0x00, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x3E, 0x00, 0x00],
    // 'M'
    [0x00, 0x00, 0x22, 0x36, 0x2A, 0x2A, 0x22, 0x22, 0x22, 0x22, 0x22, 0x00, 0x00],
    // 'N'
    [0x00, 0x00, 0x22, 0x32, 0x2A, 0x26, 0x22, 0x22, 0x22, 0x22, 0x22, 0x00, 0x00],
    // 'O'
    [0x00, 0x00, 0x1C, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x1C, 0x00, 0x00],
    // 'P'
    [0x00, 0x00, 0x3C, 0x22, 0x22, 0x22, 0x3C, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00],
    // 'Q'
    [0x00, 0x00, 0x1C, 0x22, 0x22, 0x22, 0x22, 0x22, 0x2A, 0x24, 0x1A, 0x00, 0x00],
    // 'R'
    [0x00, 0x00, 0x3C, 0x22, 0x22, 0x22, 0x3C, 0x28, 0x24, 0x22, 0x22, 0x00, 0x00],
    // 'S'
    [0x00, 0x00, 0x1C, 0x22, 0x20, 0x20, 0x1C, 0x02, 0x02, 0x22, 0x1C, 0x00, 0x00],
    // 'T'
    [0x00, 0x00, 0x3E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00],
    // 'U'
    [0x00, 0x00, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x1C, 0x00, 0x00],
    // 'V'
    [0x00, 0x00, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x14, 0x14, 0x08, 0x00, 0x00],
    // 'W'
    [0x00, 0x00, 0x22, 0x22, 0x22, 0x22, 0x2A, 0x2A, 0x2A, 0x36, 0x22, 0x00, 0x00],
    // 'X'
    [0x00, 0x00, 0x22, 0x22, 0x14, 0x14, 0x08, 0x14, 0x14, 0x22, 0x22, 0x00, 0x00],
    // 'Y'
    [0x00, 0x00, 0x22, 0x22, 0x14, 0x14, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00],
    // 'Z'
    [0x00, 0x00, 0x3E, 0x02, 0x04, 0x04, 0x08, 0x10, 0x10, 0x20, 0x3E, 0x00, 0x00],
    // '['
    [0x00, 0x00, 0x1C, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1C, 0x00, 0x00],
    // '\\'
    [0x00, 0x00, 0x20, 0x20, 0x10, 0x10, 0x08, 0x04, 0x04, 0x02, 0x02, 0x00, 0x00],
    // ']'
    [0x00, 0x00, 0x1C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x1C, 0x00, 0x00],
    // '^'
    [0x00, 0x00, 0x08, 0x14, 0x22, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '_'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3E, 0x00],
    // '`'
    [0x00, 0x00, 0x10, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'a'
    [0x00, 0x00, 0x00, 0x00, 0x1C, 0x02, 0x1E, 0x22, 0x22, 0x26, 0x1A, 0x00, 0x00],
    // 'b'
    [0x00, 0x00, 0x20, 0x20, 0x2C, 0x32, 0x22, 0x22, 0x22, 0x32, 0x2C, 0x00, 0x00],
    // 'c'
    [0x00, 0x00, 0x00, 0x00, 0x1C, 0x22, 0x20, 0x20, 0x20, 0x22, 0x1C, 0x00, 0x00],
    // 'd'
    [0x00, 0x00, 0x02, 0x02, 0x1A, 0x26, 0x22, 0x22, 0x22, 0x26, 0x1A, 0x00, 0x00],
    // 'e'
    [0x00, 0x00, 0x00, 0x00, 0x1C, 0x22, 0x22, 0x3E, 0x20, 0x22, 0x1C, 0x00, 0x00],
    // 'f'
    [0x00, 0x00, 0x0C, 0x12, 0x10, 0x3C, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00],
    // 'g'
    [0x00, 0x00, 0x00, 0x00, 0x1A, 0x26, 0x22, 0x22, 0x26, 0x1A, 0x02, 0x22, 0x1C],
    // 'h'
    [0x00, 0x00, 0x20, 0x20, 0x2C, 0x32, 0x22, 0x22, 0x22, 0x22, 0x22, 0x00, 0x00],
    // 'i'
    [0x00, 0x00, 0x00, 0x08, 0x00, 0x18, 0x08, 0x08, 0x08, 0x08, 0x1C, 0x00, 0x00],
    // 'j'
    [0x00, 0x00, 0x00, 0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x24, 0x18],
    // 'k'
    [0x00, 0x00, 0x20, 0x20, 0x22, 0x24, 0x28, 0x30, 0x28, 0x24, 0x22, 0x00, 0x00],
    // 'l'
    [0x00, 0x00, 0x18, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x1C, 0x00, 0x00],
    // 'm'
    [0x00, 0x00, 0x00, 0x00, 0x34, 0x2A, 0x2A, 0x2A, 0x2A, 0x2A, 0x2A, 0x00, 0x00],
    // 'n'
    [0x00, 0x00, 0x00, 0x00, 0x2C, 0x32, 0x22, 0x22, 0x22, 0x22, 0x22, 0x00, 0x00],
    // 'o'
    [0x00, 0x00, 0x00, 0x00, 0x1C, 0x22, 0x22, 0x22, 0x22, 0x22, 0x1C, 0x00, 0x00],
    // 'p'
    [0x00, 0x00, 0x00, 0x00, 0x2C, 0x32, 0x22, 0x22, 0x32, 0x2C, 0x20, 0x20, 0x20],
    // 'q'
    [0x00, 0x00, 0x00, 0x00, 0x1A, 0x26, 0x22, 0x22, 0x26, 0x1A, 0x02, 0x02, 0x02],
    // 'r'
    [0x00, 0x00, 0x00, 0x00, 0x2C, 0x32, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00],
    // 's'
    [0x00, 0x00, 0x00, 0x00, 0x1E, 0x20, 0x20, 0x1C, 0x02, 0x02, 0x3C, 0x00, 0x00],
    // 't'
    [0x00, 0x00, 0x10, 0x10, 0x3C, 0x10, 0x10, 0x10, 0x10, 0x12, 0x0C, 0x00, 0x00],
    // 'u'
    [0x00, 0x00, 0x00, 0x00, 0x22, 0x22, 0x22, 0x22, 0x22, 0x26, 0x1A, 0x00, 0x00],
    // 'v'
    [0x00, 0x00, 0x00, 0x00, 0x22, 0x22, 0x22, 0x22, 0x14, 0x14, 0x08, 0x00, 0x00],
    // 'w'
    [0x00, 0x00, 0x00, 0x00, 0x22, 0x22, 0x2A, 0x2A, 0x2A, 0x2A, 0x14, 0x00, 0x00],
    // 'x'
    [0x00, 0x00, 0x00, 0x00, 0x22, 0x22, 0x14, 0x08, 0x14, 0x22, 0x22, 0x00, 0x00],
    // 'y'
    [0x00, 0x00, 0x00, 0x00, 0x22, 0x22, 0x22, 0x22, 0x26, 0x1A, 0x02, 0x22, 0x1C],
    // 'z'
    [0x00, 0x00, 0x00, 0x00, 0x3E, 0x02, 0x04, 0x08, 0x10, 0x20, 0x3E, 0x00, 0x00],
    // '{'
    [0x00, 0x00, 0x0C, 0x08, 0x08, 0x08, 0x10, 0x08, 0x08, 0x08, 0x0C, 0x00, 0x00],
    // '|'
    [0x00, 0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00],
    // '}'
    [0x00, 0x00, 0x18, 0x08, 0x08, 0x08, 0x04, 0x08, 0x08, 0x08, 0x18, 0x00, 0x00],
    // '~'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x1A, 0x2C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
];
