// Window module - winit + pixels host backend
//
// The video context is tick driven, so instead of handing control to
// `EventLoop::run_app` the backend pumps the event loop without blocking
// whenever its event queue runs dry. Window events are translated into
// `HostEvent`s on the way in: pointer positions to logical screen pixels,
// physical keys to keysyms.
//
// Frames are uploaded into a pixels buffer created with a BGRA texture, which
// is the byte order of an ARGB8888 word in little-endian memory.

use super::backend::{HostButton, HostEvent, VideoBackend};
use super::scaling::ScalingTransform;
use crate::display::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::input::keysym::keysym;
use crate::video::VideoError;
use pixels::wgpu::TextureFormat;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

/// Event loop iterations to wait for the window to appear
const WINDOW_PUMP_ATTEMPTS: usize = 16;

/// Whether `set_cursor_position` is reported back as a `CursorMoved` event
const WARP_ECHOES_MOTION: bool = !cfg!(target_os = "macos");

/// Per-pump application state: the window and the translated event queue
struct HostState {
    window: Option<Arc<Window>>,
    pending_window: Option<WindowAttributes>,
    window_error: Option<String>,
    resumed: bool,
    events: VecDeque<HostEvent>,
    logical: (u32, u32),
    transform: ScalingTransform,
    resized: Option<PhysicalSize<u32>>,
}

impl HostState {
    fn new() -> Self {
        let logical = (SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
        Self {
            window: None,
            pending_window: None,
            window_error: None,
            resumed: false,
            events: VecDeque::new(),
            logical,
            transform: ScalingTransform::new(logical, logical),
            resized: None,
        }
    }

    fn create_pending_window(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attributes) = self.pending_window.take() else {
            return;
        };

        match event_loop.create_window(attributes) {
            Ok(window) => {
                let size = window.inner_size();
                self.transform = ScalingTransform::new(self.logical, (size.width, size.height));
                self.window = Some(Arc::new(window));
            }
            Err(e) => self.window_error = Some(e.to_string()),
        }
    }

    fn update_transform(&mut self) {
        if let Some(window) = &self.window {
            let size = window.inner_size();
            self.transform = ScalingTransform::new(self.logical, (size.width, size.height));
        }
    }
}

impl ApplicationHandler for HostState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.resumed = true;
        self.create_pending_window(event_loop);
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.events.push_back(HostEvent::Quit);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = self.transform.to_logical(position.x, position.y);
                self.events.push_back(HostEvent::MouseMotion { x, y });
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    MouseButton::Left => HostButton::Left,
                    MouseButton::Right => HostButton::Right,
                    _ => HostButton::Other,
                };
                self.events.push_back(HostEvent::MouseButton {
                    button,
                    pressed: state == ElementState::Pressed,
                });
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        ..
                    },
                ..
            } => match keysym(physical_key) {
                Some(code) => self.events.push_back(HostEvent::Key {
                    code,
                    pressed: state == ElementState::Pressed,
                }),
                None => log::debug!("No keysym for {:?}", physical_key),
            },
            WindowEvent::Resized(size) => {
                self.transform = ScalingTransform::new(self.logical, (size.width, size.height));
                self.resized = Some(size);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Windows requested after the initial resume
        if self.resumed {
            self.create_pending_window(event_loop);
        }
    }
}

/// Host backend on winit + pixels
pub struct WinitBackend {
    event_loop: Option<EventLoop<()>>,
    state: HostState,
    surface: Option<SurfaceTexture<Arc<Window>>>,
    pixels: Option<Pixels<'static>>,
}

impl WinitBackend {
    /// Create a backend; nothing is opened until the video context inits
    pub fn new() -> Self {
        Self {
            event_loop: None,
            state: HostState::new(),
            surface: None,
            pixels: None,
        }
    }

    /// Run the event loop once without blocking
    fn pump(&mut self) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            return;
        };

        if let PumpStatus::Exit(code) =
            event_loop.pump_app_events(Some(Duration::ZERO), &mut self.state)
        {
            log::debug!("Event loop exited with code {}", code);
            self.state.events.push_back(HostEvent::Quit);
        }

        if let (Some(size), Some(pixels)) = (self.state.resized.take(), self.pixels.as_mut()) {
            if let Err(e) = pixels.resize_surface(size.width, size.height) {
                log::warn!("Could not resize surface: {}", e);
            }
        }
    }
}

impl Default for WinitBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoBackend for WinitBackend {
    fn init_subsystem(&mut self) -> Result<(), VideoError> {
        // winit allows one event loop per process, so it outlives uninit
        if self.event_loop.is_none() {
            let event_loop =
                EventLoop::new().map_err(|e| VideoError::Subsystem(e.to_string()))?;
            self.event_loop = Some(event_loop);
        }
        Ok(())
    }

    fn create_window(&mut self, title: &str, width: u32, height: u32) -> Result<(), VideoError> {
        if self.event_loop.is_none() {
            return Err(VideoError::Window("video subsystem not initialized".to_string()));
        }

        self.state.pending_window = Some(
            Window::default_attributes()
                .with_title(title)
                .with_inner_size(LogicalSize::new(width, height))
                .with_resizable(false),
        );

        for _ in 0..WINDOW_PUMP_ATTEMPTS {
            self.pump();

            if let Some(e) = self.state.window_error.take() {
                return Err(VideoError::Window(e));
            }
            if self.state.window.is_some() {
                return Ok(());
            }
        }

        self.state.pending_window = None;
        Err(VideoError::Window("host did not create the window".to_string()))
    }

    fn create_renderer(&mut self) -> Result<(), VideoError> {
        let window = self
            .state
            .window
            .clone()
            .ok_or_else(|| VideoError::Renderer("no window".to_string()))?;

        let size = window.inner_size();
        self.surface = Some(SurfaceTexture::new(size.width, size.height, window));
        Ok(())
    }

    fn set_logical_size(&mut self, width: u32, height: u32) -> Result<(), VideoError> {
        if width == 0 || height == 0 {
            return Err(VideoError::LogicalSize(format!("{}x{}", width, height)));
        }

        self.state.logical = (width, height);
        self.state.update_transform();

        if let Some(pixels) = self.pixels.as_mut() {
            pixels
                .resize_buffer(width, height)
                .map_err(|e| VideoError::LogicalSize(e.to_string()))?;
        }
        Ok(())
    }

    fn create_texture(&mut self, width: u32, height: u32) -> Result<(), VideoError> {
        // The surface becomes part of the pixels renderer from here on
        let surface = self
            .surface
            .take()
            .ok_or_else(|| VideoError::Texture("no renderer".to_string()))?;

        let pixels = PixelsBuilder::new(width, height, surface)
            .texture_format(TextureFormat::Bgra8UnormSrgb)
            .build()
            .map_err(|e| VideoError::Texture(e.to_string()))?;

        self.pixels = Some(pixels);
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        if let Some(window) = &self.state.window {
            window.set_cursor_visible(visible);
        }
    }

    fn destroy_texture(&mut self) {
        self.pixels = None;
    }

    fn destroy_renderer(&mut self) {
        self.surface = None;
    }

    fn destroy_window(&mut self) {
        self.state.window = None;
        self.state.pending_window = None;
    }

    fn quit_subsystem(&mut self) {
        self.state.events.clear();
        self.state.resized = None;
    }

    fn poll_event(&mut self) -> Option<HostEvent> {
        if self.state.events.is_empty() {
            self.pump();
        }
        self.state.events.pop_front()
    }

    fn update_texture(&mut self, frame: &[u32]) -> Result<(), VideoError> {
        let pixels = self
            .pixels
            .as_mut()
            .ok_or_else(|| VideoError::Upload("no texture".to_string()))?;

        let target = pixels.frame_mut();
        if target.len() != frame.len() * 4 {
            return Err(VideoError::Upload(format!(
                "frame has {} pixels, texture holds {}",
                frame.len(),
                target.len() / 4
            )));
        }

        for (dst, &argb) in target.chunks_exact_mut(4).zip(frame) {
            dst.copy_from_slice(&argb.to_le_bytes());
        }
        Ok(())
    }

    fn present(&mut self) -> Result<(), VideoError> {
        let pixels = self
            .pixels
            .as_ref()
            .ok_or_else(|| VideoError::Present("no texture".to_string()))?;

        pixels
            .render()
            .map_err(|e| VideoError::Present(e.to_string()))
    }

    fn warp_pointer(&mut self, x: u16, y: u16) -> bool {
        let Some(window) = &self.state.window else {
            return false;
        };

        let (wx, wy) = self.state.transform.to_window(x, y);
        match window.set_cursor_position(PhysicalPosition::new(wx, wy)) {
            Ok(()) => WARP_ECHOES_MOTION,
            Err(e) => {
                log::debug!("Pointer warp not supported: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_starts_closed() {
        let mut backend = WinitBackend::new();
        assert!(backend.event_loop.is_none());
        assert!(backend.poll_event().is_none());
        assert!(!backend.warp_pointer(10, 10));
    }

    #[test]
    fn test_steps_out_of_order_fail() {
        let mut backend = WinitBackend::new();
        assert!(matches!(
            backend.create_window("x", 640, 400),
            Err(VideoError::Window(_))
        ));
        assert!(matches!(backend.create_renderer(), Err(VideoError::Renderer(_))));
        assert!(matches!(
            backend.create_texture(320, 200),
            Err(VideoError::Texture(_))
        ));
        assert!(matches!(backend.update_texture(&[0; 4]), Err(VideoError::Upload(_))));
        assert!(matches!(backend.present(), Err(VideoError::Present(_))));
    }

    #[test]
    fn test_logical_size_rejects_zero() {
        let mut backend = WinitBackend::new();
        assert!(backend.set_logical_size(320, 200).is_ok());
        assert!(matches!(
            backend.set_logical_size(0, 200),
            Err(VideoError::LogicalSize(_))
        ));
    }

    #[test]
    fn test_teardown_without_init_is_safe() {
        let mut backend = WinitBackend::new();
        backend.set_cursor_visible(false);
        backend.destroy_texture();
        backend.destroy_renderer();
        backend.destroy_window();
        backend.quit_subsystem();
    }
}
