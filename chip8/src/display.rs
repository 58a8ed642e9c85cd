//! Display surface.
use std::fmt::{self, Write};

use crate::constants::*;

/// 64x32 monochrome pixel grid.
///
/// Cells are addressed as `row * 64 + column`. Pixel state is kept as
/// booleans, and the packed colour buffer consumed by renderers is derived
/// from it with [`Display::to_packed`].
#[derive(Clone)]
pub struct Display {
    pixels: Box<[bool; DISPLAY_BUFFER_SIZE]>,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            pixels: Box::new([false; DISPLAY_BUFFER_SIZE]),
        }
    }
}

impl Display {
    pub fn new() -> Self {
        Default::default()
    }

    /// Switch every pixel off.
    pub fn clear(&mut self) {
        self.pixels.fill(false);
    }

    /// XOR the cell at `index` with an "on" pixel.
    ///
    /// The index wraps around the end of the buffer. Returns `true` when
    /// the pixel was on before the toggle, which is a collision.
    #[inline]
    pub fn toggle(&mut self, index: usize) -> bool {
        let cell = &mut self.pixels[index % DISPLAY_BUFFER_SIZE];
        let collision = *cell;
        *cell = !*cell;
        collision
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[(y * DISPLAY_WIDTH + x) % DISPLAY_BUFFER_SIZE]
    }

    pub fn pixels(&self) -> &[bool; DISPLAY_BUFFER_SIZE] {
        &self.pixels
    }

    /// Packed colour of a single cell.
    #[inline(always)]
    pub fn cell(&self, index: usize) -> u16 {
        if self.pixels[index % DISPLAY_BUFFER_SIZE] {
            PIXEL_ON_COLOR
        } else {
            0
        }
    }

    /// Buffer of packed RGBA4444 colours, one per cell.
    pub fn to_packed(&self) -> Box<[u16; DISPLAY_BUFFER_SIZE]> {
        let mut buf = Box::new([0; DISPLAY_BUFFER_SIZE]);
        for (index, cell) in buf.iter_mut().enumerate() {
            *cell = self.cell(index);
        }
        buf
    }

    /// Packed colours as little-endian bytes, with a pitch of
    /// `DISPLAY_WIDTH * 2` bytes per row. Suitable for uploading to an
    /// RGBA4444 streaming texture.
    pub fn to_rgba4444(&self) -> Vec<u8> {
        (0..DISPLAY_BUFFER_SIZE)
            .flat_map(|index| self.cell(index).to_le_bytes())
            .collect()
    }

    /// Number of pixels currently switched on.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|px| **px).count()
    }

    /// Write the grid as text, `#` for on and `.` for off.
    pub fn dump<W: Write>(&self, w: &mut W) -> fmt::Result {
        for y in 0..DISPLAY_HEIGHT {
            for x in 0..DISPLAY_WIDTH {
                if self.pixel(x, y) {
                    write!(w, "#")?;
                } else {
                    write!(w, ".")?;
                }
            }
            writeln!(w)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Display")
            .field("lit", &self.lit_count())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clear() {
        let mut display = Display::new();
        display.toggle(0);
        display.toggle(1000);
        display.toggle(DISPLAY_BUFFER_SIZE - 1);
        assert_eq!(display.lit_count(), 3);

        display.clear();
        assert!((0..DISPLAY_BUFFER_SIZE).all(|i| display.cell(i) == 0));
    }

    #[test]
    fn test_toggle_collision() {
        let mut display = Display::new();
        assert!(!display.toggle(5));
        assert_eq!(display.cell(5), PIXEL_ON_COLOR);
        assert!(display.toggle(5));
        assert_eq!(display.cell(5), 0);
    }

    #[test]
    fn test_toggle_wraps() {
        let mut display = Display::new();
        display.toggle(DISPLAY_BUFFER_SIZE + 3);
        assert!(display.pixel(3, 0));
    }

    #[test]
    fn test_packed_buffer() {
        let mut display = Display::new();
        display.toggle(DISPLAY_WIDTH + 2);

        let packed = display.to_packed();
        assert_eq!(packed[DISPLAY_WIDTH + 2], PIXEL_ON_COLOR);
        assert_eq!(packed.iter().filter(|c| **c != 0).count(), 1);

        let bytes = display.to_rgba4444();
        assert_eq!(bytes.len(), DISPLAY_BUFFER_SIZE * 2);
        let offset = (DISPLAY_WIDTH + 2) * 2;
        assert_eq!(bytes[offset], 0x8D);
        assert_eq!(bytes[offset + 1], 0xBD);
    }

    #[test]
    fn test_dump() {
        let mut display = Display::new();
        display.toggle(1);

        let mut buf = String::new();
        display.dump(&mut buf).unwrap();

        let lines: Vec<&str> = buf.lines().collect();
        assert_eq!(lines.len(), DISPLAY_HEIGHT);
        assert!(lines[0].starts_with(".#.."));
        assert!(lines.iter().all(|line| line.len() == DISPLAY_WIDTH));
    }
}
