// Frame Compositor - expands the indexed screen to true color
//
// Every tick the whole 320×200 indexed screen is looked up through the
// palette into an ARGB8888 buffer, which the backend then uploads and
// presents. There is no dirty tracking: the frame is small and fixed.

use super::framebuffer::SCREEN_SIZE;
use super::palette::Palette;
use crate::video::VideoError;

/// Owner of the true-color frame
pub struct Compositor {
    frame: Vec<u32>,
}

impl Compositor {
    /// Allocate a black true-color frame
    ///
    /// # Returns
    /// `VideoError::Buffer` if the allocation cannot be satisfied
    pub fn new() -> Result<Self, VideoError> {
        let mut frame = Vec::new();
        frame
            .try_reserve_exact(SCREEN_SIZE)
            .map_err(|_| VideoError::Buffer)?;
        frame.resize(SCREEN_SIZE, 0);
        Ok(Self { frame })
    }

    /// Rebuild the whole true-color frame from `indexed`
    ///
    /// # Arguments
    /// * `indexed` - Exactly `SCREEN_SIZE` palette indices
    /// * `palette` - Current palette
    ///
    /// # Returns
    /// The composed ARGB frame, or `VideoError::ScreenSize` if `indexed` has
    /// the wrong length
    pub fn compose(&mut self, indexed: &[u8], palette: &Palette) -> Result<&[u32], VideoError> {
        if indexed.len() != SCREEN_SIZE {
            return Err(VideoError::ScreenSize {
                expected: SCREEN_SIZE,
                actual: indexed.len(),
            });
        }

        let colors = palette.as_slice();
        for (out, &index) in self.frame.iter_mut().zip(indexed) {
            *out = colors[index as usize];
        }

        Ok(&self.frame)
    }

    /// The most recently composed frame
    pub fn frame(&self) -> &[u32] {
        &self.frame
    }
}
