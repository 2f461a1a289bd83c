//! Tiny 3x5 bitmap font for frame overlays.
//!
//! Each glyph is five rows of three bits, most significant bit on the left.
//! Only the characters used by the overlay labels are present; anything
//! else renders as a single centre dot.

use super::buffer::PixelBuffer;

pub const GLYPH_WIDTH: i32 = 3;
pub const GLYPH_HEIGHT: i32 = 5;
/// Horizontal distance between consecutive glyph origins.
pub const GLYPH_ADVANCE: i32 = 6;

pub type Glyph = [u8; 5];

pub const FALLBACK: Glyph = [0b000, 0b000, 0b010, 0b000, 0b000];

static GLYPHS: &[(char, Glyph)] = &[
    (' ', [0b000, 0b000, 0b000, 0b000, 0b000]),
    ('0', [0b111, 0b101, 0b101, 0b101, 0b111]),
    ('1', [0b010, 0b110, 0b010, 0b010, 0b111]),
    ('2', [0b111, 0b001, 0b111, 0b100, 0b111]),
    ('3', [0b111, 0b001, 0b111, 0b001, 0b111]),
    ('4', [0b101, 0b101, 0b111, 0b001, 0b001]),
    ('5', [0b111, 0b100, 0b111, 0b001, 0b111]),
    ('6', [0b111, 0b100, 0b111, 0b101, 0b111]),
    ('7', [0b111, 0b001, 0b010, 0b010, 0b010]),
    ('8', [0b111, 0b101, 0b111, 0b101, 0b111]),
    ('9', [0b111, 0b101, 0b111, 0b001, 0b111]),
    (':', [0b000, 0b010, 0b000, 0b010, 0b000]),
    ('A', [0b010, 0b101, 0b111, 0b101, 0b101]),
    ('F', [0b111, 0b100, 0b110, 0b100, 0b100]),
    ('L', [0b100, 0b100, 0b100, 0b100, 0b111]),
    ('a', [0b000, 0b011, 0b101, 0b101, 0b011]),
    ('c', [0b000, 0b011, 0b100, 0b100, 0b011]),
    ('e', [0b010, 0b101, 0b111, 0b100, 0b011]),
    ('i', [0b010, 0b000, 0b010, 0b010, 0b010]),
    ('m', [0b000, 0b110, 0b111, 0b101, 0b101]),
    ('n', [0b000, 0b110, 0b101, 0b101, 0b101]),
    ('o', [0b010, 0b101, 0b101, 0b101, 0b010]),
    ('r', [0b000, 0b100, 0b110, 0b100, 0b100]),
    ('t', [0b010, 0b111, 0b010, 0b010, 0b001]),
    ('z', [0b000, 0b111, 0b001, 0b010, 0b111]),
];

/// Bitmap for `ch`, or [`FALLBACK`] when the table has no entry.
pub fn glyph_for(ch: char) -> &'static Glyph {
    GLYPHS
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, g)| g)
        .unwrap_or(&FALLBACK)
}

pub fn has_glyph(ch: char) -> bool {
    GLYPHS.iter().any(|(c, _)| *c == ch)
}

/// Draw one character with its top-left corner at (x, y).
pub fn draw_glyph(buf: &mut PixelBuffer, x: i32, y: i32, ch: char, index: u8) {
    draw_glyph_at(buf, x as i64, y as i64, ch, index);
}

/// Draw a string left to right, one glyph every [`GLYPH_ADVANCE`] pixels.
/// No wrapping: text running off the right edge is clipped.
pub fn draw_text(buf: &mut PixelBuffer, x: i32, y: i32, text: &str, index: u8) {
    let mut cursor = x as i64;
    for ch in text.chars() {
        if cursor >= buf.width() as i64 {
            break;
        }
        draw_glyph_at(buf, cursor, y as i64, ch, index);
        cursor += GLYPH_ADVANCE as i64;
    }
}

fn draw_glyph_at(buf: &mut PixelBuffer, x: i64, y: i64, ch: char, index: u8) {
    let glyph = glyph_for(ch);
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..GLYPH_WIDTH as i64 {
            if bits & (1 << (GLYPH_WIDTH as i64 - 1 - col)) != 0 {
                buf.put(x + col, y + row as i64, index);
            }
        }
    }
}
