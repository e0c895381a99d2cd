// VGA Palette - 256-entry indexed color table
//
// The engine stores colors as VGA DAC triples: 6 bits per channel (0-63).
// Each channel is widened to 8 bits with the classic `(v * 0x41) >> 4`
// expansion and packed as opaque ARGB8888 (0xAARRGGBB).
//
// The palette is shared between the palette setter and the compositor, so it
// lives behind a short-lived mutex (see `SharedPalette`).

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Number of entries in the palette
pub const PALETTE_SIZE: usize = 256;

/// Bytes per palette entry in the engine's RGB format
pub const BYTES_PER_ENTRY: usize = 3;

/// Alpha bits of every stored color (fully opaque)
pub const OPAQUE: u32 = 0xFF00_0000;

/// Expand a 6-bit VGA DAC channel to 8 bits
///
/// Only the low 6 bits of `value` are used. The result is the top byte of
/// `(value & 0x3F) * 0x41`, so 0 maps to 0 and 63 maps to 255.
#[inline]
pub fn expand_6bit(value: u8) -> u8 {
    ((u32::from(value & 0x3F) * 0x41) >> 4) as u8
}

/// Pack a 6-bit RGB triple into an opaque ARGB8888 color
#[inline]
pub fn vga_to_argb(r: u8, g: u8, b: u8) -> u32 {
    OPAQUE
        | (u32::from(expand_6bit(r)) << 16)
        | (u32::from(expand_6bit(g)) << 8)
        | u32::from(expand_6bit(b))
}

/// 256-entry ARGB palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [u32; PALETTE_SIZE],
}

impl Palette {
    /// Create a palette with every entry set to opaque black
    pub fn new() -> Self {
        Self {
            colors: [OPAQUE; PALETTE_SIZE],
        }
    }

    /// Get the ARGB color stored at `index`
    #[inline]
    pub fn get(&self, index: u8) -> u32 {
        self.colors[index as usize]
    }

    /// All 256 colors, indexable by palette index
    pub fn as_slice(&self) -> &[u32; PALETTE_SIZE] {
        &self.colors
    }

    /// Replace entries `[from, from + length)` from packed 6-bit RGB triples
    ///
    /// # Arguments
    /// * `rgb` - At least `length * 3` bytes: R, G, B for each entry in turn
    /// * `from` - First palette index to update
    /// * `length` - Number of entries to update
    ///
    /// # Returns
    /// `Err(RangeError)` without touching the palette if the range does not
    /// fit in 256 entries or `rgb` is too short.
    pub fn set_range(&mut self, rgb: &[u8], from: usize, length: usize) -> Result<(), RangeError> {
        let end = from
            .checked_add(length)
            .filter(|&end| end <= PALETTE_SIZE)
            .ok_or(RangeError::OutOfBounds { from, length })?;

        let needed = length * BYTES_PER_ENTRY;
        if rgb.len() < needed {
            return Err(RangeError::ShortBuffer {
                expected: needed,
                actual: rgb.len(),
            });
        }

        for (slot, entry) in self.colors[from..end]
            .iter_mut()
            .zip(rgb.chunks_exact(BYTES_PER_ENTRY))
        {
            *slot = vga_to_argb(entry[0], entry[1], entry[2]);
        }

        Ok(())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a palette update was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// `from + length` runs past the last palette entry
    OutOfBounds { from: usize, length: usize },
    /// The RGB buffer holds fewer bytes than the range needs
    ShortBuffer { expected: usize, actual: usize },
}

/// Palette shared between the palette setter and the compositor
///
/// Cloning yields another handle to the same palette.
#[derive(Debug, Clone, Default)]
pub struct SharedPalette {
    inner: Arc<Mutex<Palette>>,
}

impl SharedPalette {
    /// Create a shared palette initialized to opaque black
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the palette for the duration of one update or composite pass
    ///
    /// A panic while the lock was held leaves plain color data behind, so a
    /// poisoned lock is recovered rather than propagated.
    pub fn lock(&self) -> MutexGuard<'_, Palette> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Update entries `[from, from + length)`, see [`Palette::set_range`]
    pub fn set_range(&self, rgb: &[u8], from: usize, length: usize) -> Result<(), RangeError> {
        self.lock().set_range(rgb, from, length)
    }

    /// Copy of the current palette
    pub fn snapshot(&self) -> Palette {
        self.lock().clone()
    }
}
