// Input module - keyboard and mouse translation for the engine
//
// Host key symbols become PC/XT scancodes through a fixed table; mouse
// positions are clamped to the engine's region and reported with button
// state.

pub mod keymap;
pub mod keysym;
pub mod mouse;

pub use keymap::{translate, Scancode, BREAK_BIT};
pub use keysym::keysym;
pub use mouse::{MouseButton, MouseRegion, MouseReport, MouseTracker, MoveOutcome};
