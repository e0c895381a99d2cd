// Indexed Frame Buffer - 8-bit palette indices for the engine's screen
//
// The engine draws into a 320×200 buffer of palette indices (0-255). The
// buffer is owned by the engine; this type is the reference storage used by
// the demo binary and by tests to play the engine's part.

/// Logical screen width in pixels
pub const SCREEN_WIDTH: usize = 320;

/// Logical screen height in pixels
pub const SCREEN_HEIGHT: usize = 200;

/// Total number of pixels in the frame buffer
pub const SCREEN_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// Frame buffer of palette indices
///
/// Stores one byte per pixel (320×200 = 64,000 pixels), row-major.
pub struct FrameBuffer {
    pixels: Box<[u8]>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with palette index 0
    pub fn new() -> Self {
        Self {
            pixels: vec![0; SCREEN_SIZE].into_boxed_slice(),
        }
    }

    /// Set a pixel at the given coordinates
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, index: u8) {
        assert!(x < SCREEN_WIDTH, "X coordinate {} out of bounds", x);
        assert!(y < SCREEN_HEIGHT, "Y coordinate {} out of bounds", y);

        self.pixels[y * SCREEN_WIDTH + x] = index;
    }

    /// Get the palette index at the given coordinates
    ///
    /// # Panics
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u8 {
        assert!(x < SCREEN_WIDTH, "X coordinate {} out of bounds", x);
        assert!(y < SCREEN_HEIGHT, "Y coordinate {} out of bounds", y);

        self.pixels[y * SCREEN_WIDTH + x]
    }

    /// Fill the whole buffer with one palette index
    pub fn clear(&mut self, index: u8) {
        self.pixels.fill(index);
    }

    /// Raw palette indices
    pub fn as_slice(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable raw palette indices
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Fill with 16×16 blocks cycling through all 256 palette indices
    pub fn test_pattern(&mut self) {
        for y in 0..SCREEN_HEIGHT {
            for x in 0..SCREEN_WIDTH {
                let index = ((x / 16) + (y / 16) * 16) % 256;
                self.set_pixel(x, y, index as u8);
            }
        }
    }

    /// Fill with a horizontal ramp across all 256 palette indices
    pub fn gradient_pattern(&mut self) {
        for y in 0..SCREEN_HEIGHT {
            for x in 0..SCREEN_WIDTH {
                let index = x * 256 / SCREEN_WIDTH;
                self.set_pixel(x, y, index as u8);
            }
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framebuffer_creation() {
        let fb = FrameBuffer::new();
        assert_eq!(fb.as_slice().len(), SCREEN_SIZE);
        assert!(fb.as_slice().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(100, 100, 0xC8);
        assert_eq!(fb.get_pixel(100, 100), 0xC8);
        assert_eq!(fb.as_slice()[100 * SCREEN_WIDTH + 100], 0xC8);
    }

    #[test]
    fn test_clear() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 0, 0xFF);
        fb.clear(0x10);
        assert_eq!(fb.get_pixel(0, 0), 0x10);
        assert_eq!(fb.get_pixel(319, 199), 0x10);
    }

    #[test]
    fn test_gradient_spans_palette() {
        let mut fb = FrameBuffer::new();
        fb.gradient_pattern();
        assert_eq!(fb.get_pixel(0, 0), 0);
        assert_eq!(fb.get_pixel(SCREEN_WIDTH - 1, 0), 255);
    }

    #[test]
    #[should_panic]
    fn test_set_pixel_out_of_bounds_x() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(320, 0, 0x00);
    }

    #[test]
    #[should_panic]
    fn test_set_pixel_out_of_bounds_y() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 200, 0x00);
    }
}
