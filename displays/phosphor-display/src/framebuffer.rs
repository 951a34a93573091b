//! Page-organized monochrome frame buffer
//!
//! Holds one full 128x64 frame in the byte order the panel consumes:
//! eight horizontal pages of 128 columns, one byte per column with
//! bit 0 at the top row of the page. All drawing happens here in
//! memory; a device driver streams the finished frame out in one go.

use crate::font;

/// Panel width in pixels (columns)
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// Frame buffer size in bytes
pub const BUF_SIZE: usize = WIDTH * PAGES;

/// Rightmost column a 6-wide character cell may start at
const MAX_CHAR_X: u8 = 120;

/// One full frame, one bit per pixel
///
/// Pixel (`x`, `y`) lives in byte `(y / 8) * WIDTH + x`, bit `y % 8`.
/// Drawing never reports errors: out-of-range coordinates are dropped
/// so callers can draw shapes that spill off the panel edge.
#[derive(Clone)]
pub struct Framebuffer {
    buf: [u8; BUF_SIZE],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a blank frame buffer (all pixels off)
    pub const fn new() -> Self {
        Self { buf: [0; BUF_SIZE] }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.buf.fill(0);
    }

    /// Turn on the pixel at (`x`, `y`)
    ///
    /// Only ever sets bits, so overlapping shapes merge rather than
    /// erase. Coordinates off the panel are ignored.
    pub fn set_pixel(&mut self, x: u8, y: u8) {
        if (x as usize) < WIDTH && (y as usize) < HEIGHT {
            self.buf[x as usize + WIDTH * (y as usize / 8)] |= 1 << (y % 8);
        }
    }

    /// Check whether the pixel at (`x`, `y`) is on
    ///
    /// Coordinates off the panel read as off.
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        if (x as usize) < WIDTH && (y as usize) < HEIGHT {
            self.buf[x as usize + WIDTH * (y as usize / 8)] & (1 << (y % 8)) != 0
        } else {
            false
        }
    }

    /// Draw one character at column `x` on text row `page`
    ///
    /// Writes a 6-column cell: five glyph columns and one blank
    /// spacing column, replacing whatever the cell held. Characters
    /// without a printable ASCII glyph render as the fallback box.
    /// Cells starting past column 120 or below row 7 are dropped
    /// whole; a character is never clipped mid-glyph.
    pub fn draw_char(&mut self, x: u8, page: u8, ch: char) {
        if x > MAX_CHAR_X || page as usize >= PAGES {
            return;
        }
        let code = if ch.is_ascii() { ch as u8 } else { 0x80 };
        let base = page as usize * WIDTH + x as usize;
        let cell = &mut self.buf[base..base + 6];
        cell[..5].copy_from_slice(font::glyph(code));
        cell[5] = 0;
    }

    /// Draw a string left to right from column `x` on text row `page`
    ///
    /// Each character advances the cursor by six columns. Drawing
    /// stops at the first character whose cell would start past
    /// column 120; long strings truncate instead of wrapping.
    pub fn draw_text(&mut self, x: u8, page: u8, text: &str) {
        let mut x = x;
        for ch in text.chars() {
            if x > MAX_CHAR_X {
                break;
            }
            self.draw_char(x, page, ch);
            x += 6;
        }
    }

    /// Draw a straight line from (`x1`, `y1`) to (`x2`, `y2`)
    ///
    /// Integer Bresenham stepped along the longer axis: plots exactly
    /// `max(dx, dy) + 1` pixels including both endpoints. Portions
    /// off the panel clip pixel by pixel.
    pub fn draw_line(&mut self, x1: u8, y1: u8, x2: u8, y2: u8) {
        let (mut x, mut y) = (i32::from(x1), i32::from(y1));
        let (x2, y2) = (i32::from(x2), i32::from(y2));
        let dx = (x2 - x).abs();
        let dy = (y2 - y).abs();
        let addx = if x > x2 { -1 } else { 1 };
        let addy = if y > y2 { -1 } else { 1 };

        // x and y never leave the endpoints' range, so the u8 casts
        // below cannot truncate
        if dx >= dy {
            let mut p = 2 * dy - dx;
            for _ in 0..=dx {
                self.set_pixel(x as u8, y as u8);
                if p < 0 {
                    p += 2 * dy;
                    x += addx;
                } else {
                    p += 2 * dy - 2 * dx;
                    x += addx;
                    y += addy;
                }
            }
        } else {
            let mut p = 2 * dx - dy;
            for _ in 0..=dy {
                self.set_pixel(x as u8, y as u8);
                if p < 0 {
                    p += 2 * dx;
                    y += addy;
                } else {
                    p += 2 * dx - 2 * dy;
                    x += addx;
                    y += addy;
                }
            }
        }
    }

    /// Borrow the raw frame, page-major, ready to stream to the panel
    pub fn as_bytes(&self) -> &[u8; BUF_SIZE] {
        &self.buf
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Framebuffer {
    fn format(&self, f: defmt::Formatter) {
        let lit: u32 = self.buf.iter().map(|b| b.count_ones()).sum();
        defmt::write!(f, "Framebuffer[{=u32} px on]", lit);
    }
}
