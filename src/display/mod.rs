// Display module - palette, compositing and the host window
//
// This module provides:
// - 256-entry VGA palette with 6-bit to 8-bit channel expansion
// - Indexed frame buffer (320×200 palette indices)
// - Frame compositor expanding indices to ARGB8888 every tick
// - Host backend trait and the winit + pixels implementation
// - Window <-> logical pixel scaling for pointer events and warps

pub mod backend;
pub mod compositor;
pub mod framebuffer;
pub mod palette;
pub mod scaling;
pub mod window;

pub use backend::{HostButton, HostEvent, VideoBackend};
pub use compositor::Compositor;
pub use framebuffer::{FrameBuffer, SCREEN_HEIGHT, SCREEN_SIZE, SCREEN_WIDTH};
pub use palette::{expand_6bit, vga_to_argb, Palette, SharedPalette, PALETTE_SIZE};
pub use scaling::ScalingTransform;
pub use window::WinitBackend;
