//! Constant values of the Chip-8 architecture.
//!
//! Memory layout of the 4K image:
//!
//! ```text
//! start   end     region
//! 0x000 - 0x1FF   unused
//! 0x200 - 0xE4F   program text
//! 0xE50 - 0xE9F   font glyphs
//! 0xEA0 - 0xEFF   call stack
//! 0xF00 - 0xFFF   reserved for display, unused
//! ```
//!
//! Regions are a convention only. All addressing wraps modulo [`MEM_SIZE`].

/// Number of general purpose registers.
pub const REGISTER_COUNT: usize = 0x10; // 16

/// Register overwritten by arithmetic, shift and draw instructions as a flag.
pub const FLAG_REGISTER: usize = 0xF;

/// Programs are loaded and start executing at this address.
pub const MEM_START: usize = 0x200; // 512
pub const MEM_SIZE: usize = 0x1000; // 4096
pub const MEM_MASK: usize = MEM_SIZE - 1;

/// Largest program that fits between [`MEM_START`] and the end of memory.
pub const MAX_PROGRAM_SIZE: usize = MEM_SIZE - MEM_START;

/// Address of the built-in hexadecimal font glyphs.
pub const FONTSET_START: u16 = 0xE50;
/// Each glyph is 5 rows of 8 pixels.
pub const FONTSET_HEIGHT: usize = 5;
pub const FONTSET_DATA_LENGTH: usize = FONTSET_HEIGHT * 16; // 80

/// Base of the call stack region. Return addresses are pushed upwards
/// as byte pairs, low byte first.
pub const STACK_START: u16 = 0xEA0;
/// One past the last byte of the call stack region.
pub const STACK_END: u16 = 0xF00;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;
pub const DISPLAY_BUFFER_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// Packed RGBA4444 colour of a pixel that is switched on.
///
/// Sprite drawing toggles a cell by XOR with this pattern, and a collision
/// is any cell holding one of its bits.
pub const PIXEL_ON_COLOR: u16 = 0xBD8D;

/// Number of clock cycles in a second that delay timers count down.
pub const DELAY_FREQUENCY: u64 = 60;

/// Number of nanoseconds in a second
#[doc(hidden)]
pub const NANOS_IN_SECOND: u64 = 1_000_000_000;

/// Number of keys on the keypad (0x0-0xF)
pub const KEY_COUNT: u8 = 16;

/// Value of a keypad slot while the key is held down.
pub const KEY_PRESSED: u8 = 0xFF;
/// Value of a keypad slot while the key is up.
pub const KEY_RELEASED: u8 = 0x00;

/// Type for storing the 12-bit memory addresses.
pub type Address = u16;

/// Built-in glyphs for the hexadecimal digits 0-F.
#[rustfmt::skip]
pub const FONTSET: [u8; FONTSET_DATA_LENGTH] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
