// Retro Video - Demo Entry Point
//
// Opens the window, loads a palette and ticks a stand-in engine that shows a
// test pattern with a software cursor. Key and mouse reports are logged
// (run with RUST_LOG=info). Space rotates the palette.

use retro_video::display::{FrameBuffer, WinitBackend, SCREEN_HEIGHT, SCREEN_WIDTH};
use retro_video::engine::{Engine, InputSink, MouseSink};
use retro_video::input::MouseReport;
use retro_video::{TickOutcome, Video, VideoConfig};
use std::time::Instant;

/// Scancode of the space bar
const SCANCODE_SPACE: u8 = 0x39;

/// Palette index used for the cursor
const CURSOR_COLOR: u8 = 255;

struct DemoEngine {
    background: FrameBuffer,
    screen: FrameBuffer,
    palette_shift: usize,
    palette_dirty: bool,
}

impl DemoEngine {
    fn new() -> Self {
        let mut background = FrameBuffer::new();
        background.test_pattern();
        let mut screen = FrameBuffer::new();
        screen.as_mut_slice().copy_from_slice(background.as_slice());

        Self {
            background,
            screen,
            palette_shift: 0,
            palette_dirty: true,
        }
    }

    /// 6-bit RGB triples for all 256 entries, rotated by `palette_shift`
    fn palette(&self) -> Vec<u8> {
        let mut rgb: Vec<u8> = (0..256)
            .flat_map(|i| {
                let i = (i + self.palette_shift) % 256;
                [(i % 64) as u8, ((i / 4) % 64) as u8, (63 - i % 64) as u8]
            })
            .collect();
        let cursor = CURSOR_COLOR as usize * 3;
        rgb[cursor..cursor + 3].fill(63);
        rgb
    }

    fn draw_cursor(&mut self, x: u16, y: u16) {
        self.screen
            .as_mut_slice()
            .copy_from_slice(self.background.as_slice());

        let (x, y) = (x as usize, y as usize);
        for cy in y.saturating_sub(1)..=(y + 1).min(SCREEN_HEIGHT - 1) {
            for cx in x.saturating_sub(1)..=(x + 1).min(SCREEN_WIDTH - 1) {
                self.screen.set_pixel(cx, cy, CURSOR_COLOR);
            }
        }
    }
}

impl InputSink for DemoEngine {
    fn input_event(&mut self, code: u8) {
        log::info!("Key {:02X}", code);
        if code == SCANCODE_SPACE {
            self.palette_shift = (self.palette_shift + 16) % 256;
            self.palette_dirty = true;
        }
    }
}

impl MouseSink for DemoEngine {
    fn mouse_event(&mut self, report: MouseReport) {
        log::info!(
            "Mouse ({}, {}) left={} right={}",
            report.x,
            report.y,
            report.left,
            report.right
        );
        self.draw_cursor(report.x, report.y);
    }
}

impl Engine for DemoEngine {
    fn screen(&self) -> &[u8] {
        self.screen.as_slice()
    }

    fn prepare_end(&mut self) {
        log::info!("Shutting down demo");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config_path = "video_config.toml";
    let config = VideoConfig::load_or_default(config_path);
    let tick = config.tick_duration();

    let mut engine = DemoEngine::new();
    let mut video = Video::new(WinitBackend::new(), config);
    video.init()?;

    // Keep the software cursor off the outermost pixels
    video.set_mouse_region(1, SCREEN_WIDTH as u16 - 2, 1, SCREEN_HEIGHT as u16 - 2);
    video.set_mouse_position(SCREEN_WIDTH as u16 / 2, SCREEN_HEIGHT as u16 / 2);

    loop {
        let started = Instant::now();

        if engine.palette_dirty {
            video.set_palette(&engine.palette(), 0, 256)?;
            engine.palette_dirty = false;
        }

        if video.tick(&mut engine)? == TickOutcome::Quit {
            video.uninit();
            std::process::exit(0);
        }

        if let Some(remaining) = tick.checked_sub(started.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
}
