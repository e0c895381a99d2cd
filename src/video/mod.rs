// Video module - the composed video and input context
//
// `Video` owns the host backend, the palette, the mouse tracker and the
// true-color frame. The host application calls `tick` periodically; each
// tick drains host events into the engine and then recomposes and presents
// the whole frame.

pub mod config;
pub mod error;
pub mod lock;

pub use config::VideoConfig;
pub use error::VideoError;
pub use lock::{LockGuard, VideoLock};

use crate::display::backend::{HostButton, HostEvent, VideoBackend};
use crate::display::compositor::Compositor;
use crate::display::palette::SharedPalette;
use crate::display::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::engine::{Engine, InputSink, MouseSink};
use crate::input::keymap;
use crate::input::mouse::{MouseButton, MouseRegion, MouseReport, MouseTracker, MoveOutcome};

/// What a call to [`Video::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing ran: not initialized, a file operation is active, or the
    /// guard was already held
    Skipped,
    /// Events were drained and a frame was presented
    Presented,
    /// The host asked to quit; the engine's shutdown hook has run and the
    /// caller should end the process
    Quit,
}

/// Video output and input adapter
pub struct Video<B: VideoBackend> {
    backend: B,
    config: VideoConfig,
    initialized: bool,
    lock: VideoLock,
    palette: SharedPalette,
    mouse: MouseTracker,
    compositor: Option<Compositor>,
    /// Pointer warp the host will not echo back as a motion event
    pending_motion: Option<(u16, u16)>,
    last_key: Option<u8>,
}

impl<B: VideoBackend> Video<B> {
    /// Create an uninitialized context; nothing is acquired until `init`
    pub fn new(backend: B, config: VideoConfig) -> Self {
        Self {
            backend,
            config,
            initialized: false,
            lock: VideoLock::new(),
            palette: SharedPalette::new(),
            mouse: MouseTracker::new(),
            compositor: None,
            pending_motion: None,
            last_key: None,
        }
    }

    /// Bring up the window, renderer and texture
    ///
    /// Calling it again after a successful init does nothing. On failure
    /// everything acquired so far is released and the context stays
    /// uninitialized.
    pub fn init(&mut self) -> Result<(), VideoError> {
        if self.initialized {
            return Ok(());
        }

        if let Err(e) = self.acquire() {
            log::error!("{}", e);
            self.release();
            return Err(e);
        }

        self.initialized = true;
        log::info!(
            "Video initialized: {}x{} window, {}x{} logical",
            self.config.window_width,
            self.config.window_height,
            SCREEN_WIDTH,
            SCREEN_HEIGHT
        );
        Ok(())
    }

    fn acquire(&mut self) -> Result<(), VideoError> {
        self.backend.init_subsystem()?;
        self.backend.create_window(
            &self.config.title,
            self.config.window_width,
            self.config.window_height,
        )?;
        self.backend.create_renderer()?;
        self.backend
            .set_logical_size(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)?;
        self.backend
            .create_texture(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)?;
        self.compositor = Some(Compositor::new()?);

        if self.config.hide_cursor {
            self.backend.set_cursor_visible(false);
        }

        Ok(())
    }

    /// Tear everything down in reverse order of acquisition
    ///
    /// Safe to call more than once and on a context that never initialized.
    pub fn uninit(&mut self) {
        if self.initialized {
            log::info!("Video shutting down");
        }
        self.initialized = false;
        self.release();
    }

    fn release(&mut self) {
        self.compositor = None;
        self.pending_motion = None;
        self.backend.destroy_texture();
        self.backend.destroy_renderer();
        self.backend.destroy_window();
        self.backend.quit_subsystem();
    }

    /// Run one frame: drain host events, then compose and present
    ///
    /// # Returns
    /// * `Ok(TickOutcome::Skipped)` when not initialized, while the engine
    ///   reports a file operation, or while the guard is held elsewhere
    /// * `Ok(TickOutcome::Quit)` when the host asked to close; remaining
    ///   events are not processed and no frame is drawn
    /// * `Err` if uploading or presenting the frame failed
    pub fn tick<E: Engine>(&mut self, engine: &mut E) -> Result<TickOutcome, VideoError> {
        if !self.initialized || engine.file_operation_active() {
            return Ok(TickOutcome::Skipped);
        }

        let lock = self.lock.clone();
        let Some(guard) = lock.try_acquire() else {
            return Ok(TickOutcome::Skipped);
        };

        if let Some((x, y)) = self.pending_motion.take() {
            self.mouse_move(x, y, engine);
        }

        while let Some(event) = self.backend.poll_event() {
            match event {
                HostEvent::Quit => {
                    drop(guard);
                    log::info!("Quit requested");
                    engine.prepare_end();
                    return Ok(TickOutcome::Quit);
                }
                HostEvent::MouseMotion { x, y } => self.mouse_move(x, y, engine),
                HostEvent::MouseButton { button, pressed } => {
                    self.mouse_button(button, pressed, engine)
                }
                HostEvent::Key { code, pressed } => self.key(code, pressed, engine),
            }
        }

        self.draw(engine)?;
        self.backend.present()?;

        Ok(TickOutcome::Presented)
    }

    fn draw<E: Engine>(&mut self, engine: &E) -> Result<(), VideoError> {
        let compositor = self.compositor.as_mut().ok_or(VideoError::Buffer)?;
        let frame = {
            let palette = self.palette.lock();
            compositor.compose(engine.screen(), &palette)?
        };
        self.backend.update_texture(frame)
    }

    fn mouse_move<S: MouseSink>(&mut self, x: u16, y: u16, sink: &mut S) {
        match self.mouse.on_move(x, y) {
            MoveOutcome::Report(report) => sink.mouse_event(report),
            MoveOutcome::Warp { x, y } => {
                if self.backend.warp_pointer(x, y) {
                    return;
                }
                // No echo from the host: accept the clamped position now
                if let MoveOutcome::Report(report) = self.mouse.on_move(x, y) {
                    sink.mouse_event(report);
                }
            }
        }
    }

    fn mouse_button<S: MouseSink>(&mut self, button: HostButton, pressed: bool, sink: &mut S) {
        let button = match button {
            HostButton::Left => MouseButton::Left,
            HostButton::Right => MouseButton::Right,
            HostButton::Other => return,
        };
        sink.mouse_event(self.mouse.on_button(button, pressed));
    }

    fn key<S: InputSink>(&mut self, code: u32, pressed: bool, sink: &mut S) {
        let Some(scancode) = keymap::translate(code) else {
            log::warn!("Unhandled key {:X}", code);
            return;
        };

        let byte = scancode.for_state(pressed);
        self.last_key = Some(byte);
        sink.input_event(byte);
    }

    /// Replace palette entries `[from, from + length)` from 6-bit RGB triples
    ///
    /// Entries outside the range are left unchanged. The palette lock is
    /// held for the update loop only.
    pub fn set_palette(&self, rgb: &[u8], from: usize, length: usize) -> Result<(), VideoError> {
        self.palette.set_range(rgb, from, length)?;
        Ok(())
    }

    /// Move the host pointer to a logical position
    ///
    /// The stored position changes only when the resulting motion is
    /// processed on a later tick.
    pub fn set_mouse_position(&mut self, x: u16, y: u16) {
        if !self.initialized {
            return;
        }
        if !self.backend.warp_pointer(x, y) {
            self.pending_motion = Some((x, y));
        }
    }

    /// Limit pointer movement; 0 on any side means unlimited on that side
    pub fn set_mouse_region(&mut self, min_x: u16, max_x: u16, min_y: u16, max_y: u16) {
        self.mouse
            .set_region(MouseRegion::new(min_x, max_x, min_y, max_y));
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &VideoConfig {
        &self.config
    }

    /// Handle to the palette, usable from other owners
    pub fn palette(&self) -> SharedPalette {
        self.palette.clone()
    }

    /// Handle to the tick guard
    pub fn lock(&self) -> VideoLock {
        self.lock.clone()
    }

    /// Last known mouse state
    pub fn mouse_state(&self) -> MouseReport {
        self.mouse.state()
    }

    pub fn mouse_region(&self) -> MouseRegion {
        self.mouse.region()
    }

    /// Most recent byte forwarded to the input sink
    pub fn last_key(&self) -> Option<u8> {
        self.last_key
    }

    /// The last composed true-color frame, if initialized
    pub fn frame(&self) -> Option<&[u32]> {
        self.compositor.as_ref().map(Compositor::frame)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: VideoBackend> Drop for Video<B> {
    fn drop(&mut self) {
        if self.initialized {
            self.uninit();
        }
    }
}
