// Retro Video Library
// Indexed-color video output and DOS-style input for a 2D game engine

// Public modules
pub mod display;
pub mod engine;
pub mod input;
pub mod video;

// Re-export main types for convenience
pub use display::{
    FrameBuffer, HostButton, HostEvent, Palette, SharedPalette, VideoBackend, WinitBackend,
    SCREEN_HEIGHT, SCREEN_SIZE, SCREEN_WIDTH,
};
pub use engine::{Engine, InputSink, MouseSink};
pub use input::{MouseRegion, MouseReport, Scancode};
pub use video::{TickOutcome, Video, VideoConfig, VideoError, VideoLock};
