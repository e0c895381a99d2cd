// Host key symbols for winit key codes
//
// The scancode table is indexed by classic keysym numbers: printable keys use
// their (lower case) ASCII value, everything else lives at 0x100 and up. This
// module gives each physical winit key its keysym.

use winit::keyboard::{KeyCode, PhysicalKey};

pub const KEYSYM_BACKSPACE: u32 = 0x08;
pub const KEYSYM_TAB: u32 = 0x09;
pub const KEYSYM_RETURN: u32 = 0x0D;
pub const KEYSYM_PAUSE: u32 = 0x13;
pub const KEYSYM_ESCAPE: u32 = 0x1B;
pub const KEYSYM_SPACE: u32 = 0x20;
pub const KEYSYM_DELETE: u32 = 0x7F;

pub const KEYSYM_KP0: u32 = 0x100;
pub const KEYSYM_KP_PERIOD: u32 = 0x10A;
pub const KEYSYM_KP_DIVIDE: u32 = 0x10B;
pub const KEYSYM_KP_MULTIPLY: u32 = 0x10C;
pub const KEYSYM_KP_MINUS: u32 = 0x10D;
pub const KEYSYM_KP_PLUS: u32 = 0x10E;
pub const KEYSYM_KP_ENTER: u32 = 0x10F;
pub const KEYSYM_KP_EQUALS: u32 = 0x110;

pub const KEYSYM_UP: u32 = 0x111;
pub const KEYSYM_DOWN: u32 = 0x112;
pub const KEYSYM_RIGHT: u32 = 0x113;
pub const KEYSYM_LEFT: u32 = 0x114;
pub const KEYSYM_INSERT: u32 = 0x115;
pub const KEYSYM_HOME: u32 = 0x116;
pub const KEYSYM_END: u32 = 0x117;
pub const KEYSYM_PAGEUP: u32 = 0x118;
pub const KEYSYM_PAGEDOWN: u32 = 0x119;

/// F1; F2..F15 follow consecutively
pub const KEYSYM_F1: u32 = 0x11A;

pub const KEYSYM_NUMLOCK: u32 = 0x12C;
pub const KEYSYM_CAPSLOCK: u32 = 0x12D;
pub const KEYSYM_SCROLLOCK: u32 = 0x12E;
pub const KEYSYM_RSHIFT: u32 = 0x12F;
pub const KEYSYM_LSHIFT: u32 = 0x130;
pub const KEYSYM_RCTRL: u32 = 0x131;
pub const KEYSYM_LCTRL: u32 = 0x132;
pub const KEYSYM_RALT: u32 = 0x133;
pub const KEYSYM_LALT: u32 = 0x134;
pub const KEYSYM_LSUPER: u32 = 0x137;
pub const KEYSYM_RSUPER: u32 = 0x138;
pub const KEYSYM_PRINT: u32 = 0x13C;
pub const KEYSYM_MENU: u32 = 0x13F;

/// Keysym for a physical key, if it has one
pub fn keysym(key: PhysicalKey) -> Option<u32> {
    match key {
        PhysicalKey::Code(code) => keysym_for_code(code),
        PhysicalKey::Unidentified(_) => None,
    }
}

/// Keysym for a winit key code, if it has one
pub fn keysym_for_code(code: KeyCode) -> Option<u32> {
    use KeyCode::*;

    let sym = match code {
        Backspace => KEYSYM_BACKSPACE,
        Tab => KEYSYM_TAB,
        Enter => KEYSYM_RETURN,
        Pause => KEYSYM_PAUSE,
        Escape => KEYSYM_ESCAPE,
        Space => KEYSYM_SPACE,
        Quote => u32::from(b'\''),
        Comma => u32::from(b','),
        Minus => u32::from(b'-'),
        Period => u32::from(b'.'),
        Slash => u32::from(b'/'),
        Semicolon => u32::from(b';'),
        Equal => u32::from(b'='),
        BracketLeft => u32::from(b'['),
        Backslash => u32::from(b'\\'),
        BracketRight => u32::from(b']'),
        Backquote => u32::from(b'`'),
        Delete => KEYSYM_DELETE,

        Digit0 => u32::from(b'0'),
        Digit1 => u32::from(b'1'),
        Digit2 => u32::from(b'2'),
        Digit3 => u32::from(b'3'),
        Digit4 => u32::from(b'4'),
        Digit5 => u32::from(b'5'),
        Digit6 => u32::from(b'6'),
        Digit7 => u32::from(b'7'),
        Digit8 => u32::from(b'8'),
        Digit9 => u32::from(b'9'),

        KeyA => u32::from(b'a'),
        KeyB => u32::from(b'b'),
        KeyC => u32::from(b'c'),
        KeyD => u32::from(b'd'),
        KeyE => u32::from(b'e'),
        KeyF => u32::from(b'f'),
        KeyG => u32::from(b'g'),
        KeyH => u32::from(b'h'),
        KeyI => u32::from(b'i'),
        KeyJ => u32::from(b'j'),
        KeyK => u32::from(b'k'),
        KeyL => u32::from(b'l'),
        KeyM => u32::from(b'm'),
        KeyN => u32::from(b'n'),
        KeyO => u32::from(b'o'),
        KeyP => u32::from(b'p'),
        KeyQ => u32::from(b'q'),
        KeyR => u32::from(b'r'),
        KeyS => u32::from(b's'),
        KeyT => u32::from(b't'),
        KeyU => u32::from(b'u'),
        KeyV => u32::from(b'v'),
        KeyW => u32::from(b'w'),
        KeyX => u32::from(b'x'),
        KeyY => u32::from(b'y'),
        KeyZ => u32::from(b'z'),

        Numpad0 => KEYSYM_KP0,
        Numpad1 => KEYSYM_KP0 + 1,
        Numpad2 => KEYSYM_KP0 + 2,
        Numpad3 => KEYSYM_KP0 + 3,
        Numpad4 => KEYSYM_KP0 + 4,
        Numpad5 => KEYSYM_KP0 + 5,
        Numpad6 => KEYSYM_KP0 + 6,
        Numpad7 => KEYSYM_KP0 + 7,
        Numpad8 => KEYSYM_KP0 + 8,
        Numpad9 => KEYSYM_KP0 + 9,
        NumpadDecimal => KEYSYM_KP_PERIOD,
        NumpadDivide => KEYSYM_KP_DIVIDE,
        NumpadMultiply => KEYSYM_KP_MULTIPLY,
        NumpadSubtract => KEYSYM_KP_MINUS,
        NumpadAdd => KEYSYM_KP_PLUS,
        NumpadEnter => KEYSYM_KP_ENTER,
        NumpadEqual => KEYSYM_KP_EQUALS,

        ArrowUp => KEYSYM_UP,
        ArrowDown => KEYSYM_DOWN,
        ArrowRight => KEYSYM_RIGHT,
        ArrowLeft => KEYSYM_LEFT,
        Insert => KEYSYM_INSERT,
        Home => KEYSYM_HOME,
        End => KEYSYM_END,
        PageUp => KEYSYM_PAGEUP,
        PageDown => KEYSYM_PAGEDOWN,

        F1 => KEYSYM_F1,
        F2 => KEYSYM_F1 + 1,
        F3 => KEYSYM_F1 + 2,
        F4 => KEYSYM_F1 + 3,
        F5 => KEYSYM_F1 + 4,
        F6 => KEYSYM_F1 + 5,
        F7 => KEYSYM_F1 + 6,
        F8 => KEYSYM_F1 + 7,
        F9 => KEYSYM_F1 + 8,
        F10 => KEYSYM_F1 + 9,
        F11 => KEYSYM_F1 + 10,
        F12 => KEYSYM_F1 + 11,
        F13 => KEYSYM_F1 + 12,
        F14 => KEYSYM_F1 + 13,
        F15 => KEYSYM_F1 + 14,

        NumLock => KEYSYM_NUMLOCK,
        CapsLock => KEYSYM_CAPSLOCK,
        ScrollLock => KEYSYM_SCROLLOCK,
        ShiftRight => KEYSYM_RSHIFT,
        ShiftLeft => KEYSYM_LSHIFT,
        ControlRight => KEYSYM_RCTRL,
        ControlLeft => KEYSYM_LCTRL,
        AltRight => KEYSYM_RALT,
        AltLeft => KEYSYM_LALT,
        SuperLeft => KEYSYM_LSUPER,
        SuperRight => KEYSYM_RSUPER,
        PrintScreen => KEYSYM_PRINT,
        ContextMenu => KEYSYM_MENU,

        _ => return None,
    };

    Some(sym)
}
