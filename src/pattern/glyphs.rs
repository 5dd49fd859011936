//! Built-in 5x7 face with both cases, rasterized without anti-aliasing so text never
//! introduces colours outside the bar palette.

use crate::color::Rgba;
use crate::surface::PixelBuffer;

/// Nominal font size in px; the baseline sits this far below the line top.
pub const FONT_SIZE: u32 = 30;

const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: u32 = 7;
const SCALE: u32 = 3;
/// Extra pixels smeared right of every lit cell for the bold weight.
const BOLD: u32 = 1;
const ADVANCE: u32 = (GLYPH_COLS + 1) * SCALE + BOLD;

/// Rows top to bottom, bit 4 is the leftmost column. Descenders are folded
/// into the 7-row cell so nothing drops below the baseline.
fn glyph(c: char) -> Option<[u8; 7]> {
    Some(match c {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        'a' => [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F],
        'b' => [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E],
        'c' => [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E],
        'd' => [0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F],
        'e' => [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E],
        'f' => [0x06, 0x09, 0x08, 0x1C, 0x08, 0x08, 0x08],
        'g' => [0x00, 0x0F, 0x11, 0x11, 0x0F, 0x01, 0x0E],
        'h' => [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11],
        'i' => [0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E],
        'j' => [0x02, 0x00, 0x06, 0x02, 0x02, 0x12, 0x0C],
        'k' => [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12],
        'l' => [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'm' => [0x00, 0x00, 0x1A, 0x15, 0x15, 0x11, 0x11],
        'n' => [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11],
        'o' => [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E],
        'p' => [0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10],
        'q' => [0x00, 0x00, 0x0D, 0x13, 0x0F, 0x01, 0x01],
        'r' => [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10],
        's' => [0x00, 0x00, 0x0E, 0x10, 0x0E, 0x01, 0x1E],
        't' => [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06],
        'u' => [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D],
        'v' => [0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'w' => [0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A],
        'x' => [0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11],
        'y' => [0x00, 0x00, 0x11, 0x11, 0x0F, 0x01, 0x0E],
        'z' => [0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        ' ' => [0x00; 7],
        _ => return None,
    })
}

/// Horizontal advance of `text` in pixels.
pub fn text_width(text: &str) -> u32 {
    text.chars().count() as u32 * ADVANCE
}

/// Draws `text` with its baseline at `baseline`. Unknown characters advance
/// without ink; pixels outside `buf` are dropped.
pub(super) fn draw_text(buf: &mut PixelBuffer, text: &str, x: i64, baseline: i64, color: Rgba) {
    let top = baseline - (GLYPH_ROWS * SCALE) as i64;
    let mut pen = x;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_COLS {
                    if bits & (1 << (GLYPH_COLS - 1 - col)) == 0 {
                        continue;
                    }
                    let x0 = pen + (col * SCALE) as i64;
                    let y0 = top + row as i64 * SCALE as i64;
                    buf.fill_rect(
                        x0,
                        y0,
                        x0 + (SCALE + BOLD) as i64,
                        y0 + SCALE as i64,
                        color,
                    );
                }
            }
        }
        pen += ADVANCE as i64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ACCENT_RED, WHITE};
    use crate::pattern::VOCABULARY;

    #[test]
    fn every_vocabulary_character_has_a_glyph() {
        for word in VOCABULARY {
            for c in word.chars() {
                assert!(glyph(c).is_some(), "missing glyph for {c:?} in {word}");
            }
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        for (lower, upper) in ('a'..='z').zip('A'..='Z') {
            let (l, u) = (glyph(lower).unwrap(), glyph(upper).unwrap());
            assert_ne!(l, u, "{lower} drawn as {upper}");
            assert!(l.iter().any(|row| *row != 0), "{lower} is blank");
        }
        assert!(glyph('?').is_none());
    }

    #[test]
    fn lowercase_word_keeps_its_x_height() {
        let mut buf = PixelBuffer::filled(text_width("sun"), FONT_SIZE, ACCENT_RED).unwrap();
        draw_text(&mut buf, "sun", 0, FONT_SIZE as i64, WHITE);

        // No ascenders in "sun": the top two glyph rows stay empty.
        let top = FONT_SIZE - GLYPH_ROWS * SCALE;
        for y in 0..top + 2 * SCALE {
            for x in 0..buf.width() {
                assert_eq!(buf.pixel(x, y), ACCENT_RED, "ink above x-height at ({x}, {y})");
            }
        }
        assert!(buf.pixels().any(|px| px == WHITE));
    }

    #[test]
    fn width_scales_with_length() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("cap"), 3 * ADVANCE);
    }

    #[test]
    fn hyphen_lights_a_single_band() {
        let mut buf = PixelBuffer::filled(ADVANCE, FONT_SIZE, ACCENT_RED).unwrap();
        draw_text(&mut buf, "-", 0, FONT_SIZE as i64, WHITE);

        let top = FONT_SIZE - GLYPH_ROWS * SCALE;
        for y in 0..FONT_SIZE {
            let lit = y >= top + 3 * SCALE && y < top + 4 * SCALE;
            assert_eq!(buf.pixel(0, y) == WHITE, lit, "row {y}");
        }
    }
}
