// Host backend - window, renderer, texture and event primitives
//
// The video context drives the host through this trait only, one method per
// host call. `WinitBackend` implements it on top of winit + pixels; tests use
// a recording implementation.

use crate::video::VideoError;

/// Mouse button reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostButton {
    Left,
    Right,
    /// Any other button; ignored by the video context
    Other,
}

/// Event drained from the host queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The user asked to close the window
    Quit,
    /// Pointer moved to an absolute position in logical screen pixels
    MouseMotion { x: u16, y: u16 },
    /// Mouse button pressed or released
    MouseButton { button: HostButton, pressed: bool },
    /// Key pressed or released
    ///
    /// `code` is a host key symbol: ASCII for printable keys, `0x100` and up
    /// for keypad, navigation, function and modifier keys.
    Key { code: u32, pressed: bool },
}

/// Host display and event primitives
pub trait VideoBackend {
    /// Bring up the host video subsystem
    fn init_subsystem(&mut self) -> Result<(), VideoError>;

    /// Create the host window with the given pixel size
    fn create_window(&mut self, title: &str, width: u32, height: u32) -> Result<(), VideoError>;

    /// Create the renderer attached to the window
    fn create_renderer(&mut self) -> Result<(), VideoError>;

    /// Fix the logical render size; the host scales it to the window
    fn set_logical_size(&mut self, width: u32, height: u32) -> Result<(), VideoError>;

    /// Create the streaming ARGB8888 texture frames are uploaded to
    fn create_texture(&mut self, width: u32, height: u32) -> Result<(), VideoError>;

    /// Show or hide the host pointer
    fn set_cursor_visible(&mut self, visible: bool);

    fn destroy_texture(&mut self);

    fn destroy_renderer(&mut self);

    fn destroy_window(&mut self);

    fn quit_subsystem(&mut self);

    /// Next pending host event, or `None` once the queue is drained
    ///
    /// Never blocks.
    fn poll_event(&mut self) -> Option<HostEvent>;

    /// Upload a full frame of ARGB8888 pixels to the texture
    fn update_texture(&mut self, pixels: &[u32]) -> Result<(), VideoError>;

    /// Copy the texture to the window and present it
    fn present(&mut self) -> Result<(), VideoError>;

    /// Move the host pointer to a logical screen position
    ///
    /// # Returns
    /// `true` if the host will report the warp as a motion event of its own,
    /// `false` if the caller has to account for the new position itself.
    fn warp_pointer(&mut self, x: u16, y: u16) -> bool;
}
