// Engine collaborators
//
// The video context never names concrete engine modules. Whatever owns the
// game state implements these traits and is handed to `Video::tick`.

use crate::input::MouseReport;

/// Receives scancode bytes (bit 7 set on release)
pub trait InputSink {
    fn input_event(&mut self, code: u8);
}

/// Receives mouse position and button snapshots
pub trait MouseSink {
    fn mouse_event(&mut self, report: MouseReport);
}

/// Everything one tick needs from the engine
pub trait Engine: InputSink + MouseSink {
    /// The primary indexed screen, `SCREEN_WIDTH * SCREEN_HEIGHT` bytes
    fn screen(&self) -> &[u8];

    /// While a file operation runs, ticks are skipped entirely
    fn file_operation_active(&self) -> bool {
        false
    }

    /// Called once when the host asks to quit, before the process ends
    fn prepare_end(&mut self) {}
}
