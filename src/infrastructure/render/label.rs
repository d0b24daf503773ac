//! Bitmap label measurement and drawing.
//!
//! Glyphs come from the 8x8 `font8x8` set and are drawn at [`SCALE`]x, so every
//! character occupies a `CELL x CELL` square.

use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};

const GLYPH_SIZE: u32 = 8;

/// Integer upscale applied to every glyph pixel.
pub const SCALE: u32 = 2;

/// Side of a rendered character cell, in pixels.
pub const CELL: u32 = GLYPH_SIZE * SCALE;

/// Returns the `(width, height)` in pixels the text occupies when drawn.
pub fn measure(text: &str) -> (u32, u32) {
    let chars = text.chars().count() as u32;
    (chars.saturating_mul(CELL), CELL)
}

/// Draws `text` with its top-left corner at `(left, top)`.
///
/// Pixels falling outside the canvas are clipped. Characters missing from the
/// font advance the cursor without drawing.
pub fn draw(canvas: &mut RgbImage, text: &str, left: u32, top: u32, color: Rgb<u8>) {
    let (canvas_width, canvas_height) = canvas.dimensions();

    for (index, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let origin_x = left + index as u32 * CELL;

        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                // Least significant bit is the leftmost pixel.
                if *bits & (1u8 << col) == 0 {
                    continue;
                }

                let x0 = origin_x + col * SCALE;
                let y0 = top + row as u32 * SCALE;
                for dy in 0..SCALE {
                    for dx in 0..SCALE {
                        let (x, y) = (x0 + dx, y0 + dy);
                        if x < canvas_width && y < canvas_height {
                            canvas.put_pixel(x, y, color);
                        }
                    }
                }
            }
        }
    }
}
