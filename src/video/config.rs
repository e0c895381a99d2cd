// Video configuration
//
// Window title and size, cursor handling and the demo tick rate. Stored as
// TOML next to the binary.

use crate::display::{SCREEN_HEIGHT, SCREEN_WIDTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Default window width in pixels (2x the logical screen)
pub const DEFAULT_WINDOW_WIDTH: u32 = 640;

/// Default window height in pixels (2x the logical screen)
pub const DEFAULT_WINDOW_HEIGHT: u32 = 400;

/// Video configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Window caption
    pub title: String,

    /// Window width in pixels
    pub window_width: u32,

    /// Window height in pixels
    pub window_height: u32,

    /// Hide the host pointer; the engine draws its own cursor
    pub hide_cursor: bool,

    /// Ticks per second for the driving loop
    pub tick_rate: u32,
}

impl VideoConfig {
    /// Create a configuration with default values
    ///
    /// Default: 640x400 window, host cursor hidden, 60 ticks per second
    pub fn new() -> Self {
        Self {
            title: "Retro Video".to_string(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            hide_cursor: true,
            tick_rate: 60,
        }
    }

    /// Set the window caption
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size; never smaller than the logical screen
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width.max(SCREEN_WIDTH as u32);
        self.window_height = height.max(SCREEN_HEIGHT as u32);
        self
    }

    /// Set whether the host pointer is hidden
    pub fn with_hide_cursor(mut self, hide: bool) -> Self {
        self.hide_cursor = hide;
        self
    }

    /// Set the tick rate
    pub fn with_tick_rate(mut self, rate: u32) -> Self {
        self.tick_rate = rate.max(1);
        self
    }

    /// Time between ticks
    pub fn tick_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.tick_rate.max(1)))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, contents)
    }

    /// Load configuration from file, or fall back to defaults
    ///
    /// The defaults are written to `path` when loading fails.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load_from_file(&path).unwrap_or_else(|e| {
            log::info!("Could not load video config ({}), using defaults", e);
            let config = Self::new();
            if let Err(e) = config.save_to_file(&path) {
                log::warn!("Could not save default video config: {}", e);
            }
            config
        })
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VideoConfig::new();
        assert_eq!(config.window_width, 640);
        assert_eq!(config.window_height, 400);
        assert!(config.hide_cursor);
        assert_eq!(config.tick_rate, 60);
    }

    #[test]
    fn test_builder() {
        let config = VideoConfig::new()
            .with_title("Dune")
            .with_window_size(960, 600)
            .with_hide_cursor(false)
            .with_tick_rate(0);

        assert_eq!(config.title, "Dune");
        assert_eq!((config.window_width, config.window_height), (960, 600));
        assert!(!config.hide_cursor);
        assert_eq!(config.tick_rate, 1);
    }

    #[test]
    fn test_window_never_below_logical_size() {
        let config = VideoConfig::new().with_window_size(100, 100);
        assert_eq!((config.window_width, config.window_height), (320, 200));
    }

    #[test]
    fn test_tick_duration() {
        assert_eq!(VideoConfig::new().tick_duration().as_micros(), 16666);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: VideoConfig = toml::from_str("title = \"Partial\"").unwrap();
        assert_eq!(config.title, "Partial");
        assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
        assert!(config.hide_cursor);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("video.toml");

        let config = VideoConfig::new().with_title("Saved").with_window_size(1280, 800);
        config.save_to_file(&path).unwrap();

        assert_eq!(VideoConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_default_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let config = VideoConfig::load_or_default(&path);
        assert_eq!(config, VideoConfig::new());
        assert!(path.exists());
    }
}
