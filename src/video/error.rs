// Video errors

use crate::display::palette::RangeError;

/// Errors reported by the video context and its backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoError {
    /// Host video subsystem could not be started
    Subsystem(String),

    /// Window creation failed
    Window(String),

    /// Renderer creation failed
    Renderer(String),

    /// Logical render size was refused
    LogicalSize(String),

    /// Streaming texture creation failed
    Texture(String),

    /// True-color frame could not be allocated
    Buffer,

    /// Frame upload to the texture failed
    Upload(String),

    /// Present failed
    Present(String),

    /// The engine's screen is not `expected` bytes long
    ScreenSize { expected: usize, actual: usize },

    /// Palette range runs past entry 255
    PaletteRange { from: usize, length: usize },

    /// Palette buffer shorter than the range needs
    PaletteData { expected: usize, actual: usize },
}

impl std::fmt::Display for VideoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoError::Subsystem(e) => write!(f, "Could not initialize video: {}", e),
            VideoError::Window(e) => write!(f, "Could not create window: {}", e),
            VideoError::Renderer(e) => write!(f, "Could not create renderer: {}", e),
            VideoError::LogicalSize(e) => write!(f, "Could not set logical size: {}", e),
            VideoError::Texture(e) => write!(f, "Could not create texture: {}", e),
            VideoError::Buffer => write!(f, "Could not create screen buffer"),
            VideoError::Upload(e) => write!(f, "Could not update texture: {}", e),
            VideoError::Present(e) => write!(f, "Could not present frame: {}", e),
            VideoError::ScreenSize { expected, actual } => write!(
                f,
                "Screen buffer has {} pixels, expected {}",
                actual, expected
            ),
            VideoError::PaletteRange { from, length } => write!(
                f,
                "Palette range {}..{} exceeds 256 entries",
                from,
                from.saturating_add(*length)
            ),
            VideoError::PaletteData { expected, actual } => write!(
                f,
                "Palette data has {} bytes, expected at least {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<RangeError> for VideoError {
    fn from(e: RangeError) -> Self {
        match e {
            RangeError::OutOfBounds { from, length } => VideoError::PaletteRange { from, length },
            RangeError::ShortBuffer { expected, actual } => {
                VideoError::PaletteData { expected, actual }
            }
        }
    }
}
