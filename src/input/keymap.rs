// Key translation - host key symbols to PC/XT scancodes
//
// The engine understands DOS BIOS style scancodes: the low 7 bits name the
// physical key and bit 7 marks a release ("break") code. Host key symbols
// index a fixed table; a zero entry means the key has no scancode.

use std::num::NonZeroU8;

/// Bit set on a scancode to turn a make code into a break code
pub const BREAK_BIT: u8 = 0x80;

/// Number of host key symbols covered by the table
pub const KEYMAP_LEN: usize = 0x140;

/// Host key symbol -> scancode, 0 = unmapped
///
/// US layout plus keypad, cursor block and function keys. The values are
/// relied on by the engine and must not change.
#[rustfmt::skip]
static KEYMAP: [u8; KEYMAP_LEN] = [
       0,    0,    0,    0,    0,    0,    0,    0, 0x0E, 0x0F,    0,    0,    0, 0x1C,    0,    0, /*  0x00 -  0x0F */
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 0x01,    0,    0,    0,    0, /*  0x10 -  0x1F */
    0x39,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, 0x33, 0x0C, 0x34, 0x35, /*  0x20 -  0x2F */
    0x0B, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A,    0,    0,    0, 0x0D,    0,    0, /*  0x30 -  0x3F */
       0, 0x1E, 0x30, 0x2E, 0x20, 0x12, 0x21, 0x22, 0x23, 0x17, 0x24, 0x25, 0x26, 0x32, 0x31, 0x18, /*  0x40 -  0x4F */
    0x19, 0x10, 0x13, 0x1F, 0x14, 0x16, 0x2F, 0x11, 0x2D, 0x15, 0x2C,    0, 0x2B,    0,    0,    0, /*  0x50 -  0x5F */
    0x29, 0x1E, 0x30, 0x2E, 0x20, 0x12, 0x21, 0x22, 0x23, 0x17, 0x24, 0x25, 0x26, 0x32, 0x31, 0x18, /*  0x60 -  0x6F */
    0x19, 0x10, 0x13, 0x1F, 0x14, 0x16, 0x2F, 0x11, 0x2D, 0x15, 0x2C,    0,    0,    0,    0, 0x53, /*  0x70 -  0x7F */
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, /*  0x80 -  0x8F */
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, /*  0x90 -  0x9F */
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, /*  0xA0 -  0xAF */
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, /*  0xB0 -  0xBF */
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, /*  0xC0 -  0xCF */
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, /*  0xD0 -  0xDF */
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, /*  0xE0 -  0xEF */
       0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, /*  0xF0 -  0xFF */
       0, 0x4F, 0x50, 0x51, 0x4B, 0x1C, 0x4D, 0x47, 0x48, 0x49,    0,    0,    0,    0,    0,    0, /* 0x100 - 0x10F */
       0, 0x48, 0x50, 0x4D, 0x4B, 0x52, 0x47, 0x4F, 0x49, 0x51, 0x3B, 0x3C, 0x3D, 0x3E, 0x3F, 0x40, /* 0x110 - 0x11F */
    0x41, 0x42, 0x43, 0x44, 0x57, 0x58,    0,    0,    0,    0,    0,    0,    0,    0,    0, 0x36, /* 0x120 - 0x12F */
    0x36,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, /* 0x130 - 0x13F */
];

/// A make scancode known to the engine (bit 7 clear, never zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scancode(NonZeroU8);

impl Scancode {
    /// The make code as stored in the table
    pub fn code(self) -> u8 {
        self.0.get()
    }

    /// Byte to forward for a key press
    pub fn make(self) -> u8 {
        self.code()
    }

    /// Byte to forward for a key release
    pub fn break_code(self) -> u8 {
        self.code() | BREAK_BIT
    }

    /// Byte to forward for a press (`pressed = true`) or release
    pub fn for_state(self, pressed: bool) -> u8 {
        if pressed {
            self.make()
        } else {
            self.break_code()
        }
    }
}

/// Look up the scancode for a host key symbol
///
/// # Returns
/// `None` if `code` is past the end of the table or has no scancode
pub fn translate(code: u32) -> Option<Scancode> {
    let index = usize::try_from(code).ok()?;
    KEYMAP.get(index).copied().and_then(NonZeroU8::new).map(Scancode)
}
