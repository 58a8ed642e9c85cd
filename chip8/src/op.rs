//! Decoded instructions.
//!
//! Every instruction word decodes to exactly one [`Op`]. Words that don't
//! match any instruction decode to [`Op::Unknown`], which the virtual
//! machine treats as a no-op unless strict mode is on.
use std::fmt::{self, Formatter};

use crate::{bytecode::*, constants::Address};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum Op {
    /// 0nnn (SYS addr)
    ///
    /// Machine code routine on the original hardware. Ignored.
    Sys {
        address: Address,
    },
    /// 00E0 (CLS)
    ///
    /// Clear the screen.
    ClearScreen,
    /// 00EE (RET)
    ///
    /// Return from the sub-routine.
    Return,
    /// 1nnn (JP addr)
    ///
    /// Jump to the address in `nnn`.
    JumpAddress {
        address: Address,
    },
    /// 2nnn (CALL addr)
    ///
    /// Call the sub-routine at address `nnn`.
    Call {
        address: Address,
    },
    /// 3xnn (SE Vx, byte)
    ///
    /// Skip the next instruction if register `Vx` equals value `nn`
    Skip_Eq_Byte {
        vx: u8,
        nn: u8,
    },
    /// 4xnn (SNE Vx, byte)
    ///
    /// Skip the next instruction if register `Vx` does not equal value `nn`.
    Skip_NotEq_Byte {
        vx: u8,
        nn: u8,
    },
    /// 5xy0 (SE Vx, Vy)
    ///
    /// Skip the next instruction if register `Vx` equals register `Vy`.
    /// The low nibble is not checked.
    Skip_Eq {
        vx: u8,
        vy: u8,
    },
    /// 6xnn (LD Vx, byte)
    Load_Byte {
        vx: u8,
        nn: u8,
    },
    /// 7xnn (ADD Vx, byte)
    ///
    /// Add byte to the value in register `Vx`, store the result in `Vx`.
    /// Carry flag is not set.
    Add_Byte {
        vx: u8,
        nn: u8,
    },

    // ------------------------------------------------------------------------
    // Math
    /// 8xy0 (LD Vx, Vy)
    Load_Vx_Vy {
        vx: u8,
        vy: u8,
    },
    /// 8xy1 (OR Vx, Vy)
    Or_Vx_Vy {
        vx: u8,
        vy: u8,
    },
    /// 8xy2 (AND Vx, Vy)
    And_Vx_Vy {
        vx: u8,
        vy: u8,
    },
    /// 8xy3 (XOR Vx, Vy)
    Xor_Vx_Vy {
        vx: u8,
        vy: u8,
    },
    /// 8xy4 (ADD Vx, Vy)
    ///
    /// VF is set to 1 when the sum overflows a byte.
    Add_Vx_Vy {
        vx: u8,
        vy: u8,
    },
    /// 8xy5 (SUB Vx, Vy)
    ///
    /// VF is set to 1 when `Vx` is strictly greater than `Vy`.
    Sub_Vx_Vy {
        vx: u8,
        vy: u8,
    },
    /// 8xy6 (SHR Vx)
    ///
    /// VF receives the bit shifted out. `Vy` is unused.
    ShiftRight {
        vx: u8,
    },
    /// 8xy7 (SUBN Vx, Vy)
    ///
    /// Subtracts `Vx` from `Vy`, and stores the result in `Vx`.
    /// VF is set to 1 when `Vx` is strictly less than `Vy`.
    SubReverse_Vx_Vy {
        vx: u8,
        vy: u8,
    },
    /// 8xyE (SHL Vx)
    ///
    /// VF receives the bit shifted out. `Vy` is unused.
    ShiftLeft {
        vx: u8,
    },

    /// 9xy0 (SNE Vx, Vy)
    ///
    /// The low nibble is not checked.
    Skip_NotEq {
        vx: u8,
        vy: u8,
    },
    /// Annn (LD I, addr)
    Load_Address {
        address: Address,
    },
    /// Bnnn (JP V0, addr)
    ///
    /// Jump to location `nnn + V0`.
    Jump_V0 {
        address: Address,
    },
    /// Cxnn (RND Vx, byte)
    Random {
        vx: u8,
        nn: u8,
    },
    /// Dxyn (DRW Vx, Vy, nibble)
    ///
    /// Draw an `n` row sprite from memory at `I`.
    Draw {
        vx: u8,
        vy: u8,
        n: u8,
    },

    // ------------------------------------------------------------------------
    // Keypad
    /// Ex9E (SKP Vx)
    Skip_Key {
        vx: u8,
    },
    /// ExA1 (SKNP Vx)
    Skip_NotKey {
        vx: u8,
    },
    /// Fx0A (LD Vx, K)
    ///
    /// Matched on the low nibble only, so any `FxnA` waits for a key.
    Wait_Key {
        vx: u8,
    },

    // ------------------------------------------------------------------------
    // Timers and memory
    /// Fx07 (LD Vx, DT)
    Load_Vx_Delay {
        vx: u8,
    },
    /// Fx15 (LD DT, Vx)
    Load_Delay_Vx {
        vx: u8,
    },
    /// Fx18 (LD ST, Vx)
    Load_Sound_Vx {
        vx: u8,
    },
    /// Fx1E (ADD I, Vx)
    Add_I_Vx {
        vx: u8,
    },
    /// Fx29 (LD F, Vx)
    Load_Font {
        vx: u8,
    },
    /// Fx33 (LD B, Vx)
    Store_Bcd {
        vx: u8,
    },
    /// Fx55 (LD [I], Vx)
    Store_Registers {
        vx: u8,
    },
    /// Fx65 (LD Vx, [I])
    Load_Registers {
        vx: u8,
    },

    Unknown(u16),
}

impl Op {
    /// Decode a logical instruction word (high byte first).
    pub fn decode(word: u16) -> Self {
        let (vx, vy, n) = op_xyn(word);
        let nn = op_nn(word);
        let address = op_nnn(word);

        match op_code(word) {
            0x0 => match word {
                0x00E0 => Op::ClearScreen,
                0x00EE => Op::Return,
                _ => Op::Sys { address },
            },
            0x1 => Op::JumpAddress { address },
            0x2 => Op::Call { address },
            0x3 => Op::Skip_Eq_Byte { vx, nn },
            0x4 => Op::Skip_NotEq_Byte { vx, nn },
            0x5 => Op::Skip_Eq { vx, vy },
            0x6 => Op::Load_Byte { vx, nn },
            0x7 => Op::Add_Byte { vx, nn },
            0x8 => match n {
                0x0 => Op::Load_Vx_Vy { vx, vy },
                0x1 => Op::Or_Vx_Vy { vx, vy },
                0x2 => Op::And_Vx_Vy { vx, vy },
                0x3 => Op::Xor_Vx_Vy { vx, vy },
                0x4 => Op::Add_Vx_Vy { vx, vy },
                0x5 => Op::Sub_Vx_Vy { vx, vy },
                0x6 => Op::ShiftRight { vx },
                0x7 => Op::SubReverse_Vx_Vy { vx, vy },
                0xE => Op::ShiftLeft { vx },
                _ => Op::Unknown(word),
            },
            0x9 => Op::Skip_NotEq { vx, vy },
            0xA => Op::Load_Address { address },
            0xB => Op::Jump_V0 { address },
            0xC => Op::Random { vx, nn },
            0xD => Op::Draw { vx, vy, n },
            0xE => match nn {
                0x9E => Op::Skip_Key { vx },
                0xA1 => Op::Skip_NotKey { vx },
                _ => Op::Unknown(word),
            },
            0xF => match nn {
                0x07 => Op::Load_Vx_Delay { vx },
                0x15 => Op::Load_Delay_Vx { vx },
                0x18 => Op::Load_Sound_Vx { vx },
                0x1E => Op::Add_I_Vx { vx },
                0x29 => Op::Load_Font { vx },
                0x33 => Op::Store_Bcd { vx },
                0x55 => Op::Store_Registers { vx },
                0x65 => Op::Load_Registers { vx },
                _ if n == 0xA => Op::Wait_Key { vx },
                _ => Op::Unknown(word),
            },
            _ => unreachable!("opcode family is a nibble"),
        }
    }
}

/// Assembly mnemonic form.
impl fmt::Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Op::Sys { address } => write!(f, "SYS {address:03X}"),
            Op::ClearScreen => write!(f, "CLS"),
            Op::Return => write!(f, "RET"),
            Op::JumpAddress { address } => write!(f, "JP {address:03X}"),
            Op::Call { address } => write!(f, "CALL {address:03X}"),
            Op::Skip_Eq_Byte { vx, nn } => write!(f, "SE V{vx:X}, {nn:02X}"),
            Op::Skip_NotEq_Byte { vx, nn } => write!(f, "SNE V{vx:X}, {nn:02X}"),
            Op::Skip_Eq { vx, vy } => write!(f, "SE V{vx:X}, V{vy:X}"),
            Op::Load_Byte { vx, nn } => write!(f, "LD V{vx:X}, {nn:02X}"),
            Op::Add_Byte { vx, nn } => write!(f, "ADD V{vx:X}, {nn:02X}"),
            Op::Load_Vx_Vy { vx, vy } => write!(f, "LD V{vx:X}, V{vy:X}"),
            Op::Or_Vx_Vy { vx, vy } => write!(f, "OR V{vx:X}, V{vy:X}"),
            Op::And_Vx_Vy { vx, vy } => write!(f, "AND V{vx:X}, V{vy:X}"),
            Op::Xor_Vx_Vy { vx, vy } => write!(f, "XOR V{vx:X}, V{vy:X}"),
            Op::Add_Vx_Vy { vx, vy } => write!(f, "ADD V{vx:X}, V{vy:X}"),
            Op::Sub_Vx_Vy { vx, vy } => write!(f, "SUB V{vx:X}, V{vy:X}"),
            Op::ShiftRight { vx } => write!(f, "SHR V{vx:X}"),
            Op::SubReverse_Vx_Vy { vx, vy } => write!(f, "SUBN V{vx:X}, V{vy:X}"),
            Op::ShiftLeft { vx } => write!(f, "SHL V{vx:X}"),
            Op::Skip_NotEq { vx, vy } => write!(f, "SNE V{vx:X}, V{vy:X}"),
            Op::Load_Address { address } => write!(f, "LD I, {address:03X}"),
            Op::Jump_V0 { address } => write!(f, "JP V0, {address:03X}"),
            Op::Random { vx, nn } => write!(f, "RND V{vx:X}, {nn:02X}"),
            Op::Draw { vx, vy, n } => write!(f, "DRW V{vx:X}, V{vy:X}, {n:X}"),
            Op::Skip_Key { vx } => write!(f, "SKP V{vx:X}"),
            Op::Skip_NotKey { vx } => write!(f, "SKNP V{vx:X}"),
            Op::Wait_Key { vx } => write!(f, "LD V{vx:X}, K"),
            Op::Load_Vx_Delay { vx } => write!(f, "LD V{vx:X}, DT"),
            Op::Load_Delay_Vx { vx } => write!(f, "LD DT, V{vx:X}"),
            Op::Load_Sound_Vx { vx } => write!(f, "LD ST, V{vx:X}"),
            Op::Add_I_Vx { vx } => write!(f, "ADD I, V{vx:X}"),
            Op::Load_Font { vx } => write!(f, "LD F, V{vx:X}"),
            Op::Store_Bcd { vx } => write!(f, "LD B, V{vx:X}"),
            Op::Store_Registers { vx } => write!(f, "LD [I], V{vx:X}"),
            Op::Load_Registers { vx } => write!(f, "LD V{vx:X}, [I]"),
            Op::Unknown(word) => write!(f, "DW {word:04X}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decode_families() {
        assert_eq!(Op::decode(0x00E0), Op::ClearScreen);
        assert_eq!(Op::decode(0x00EE), Op::Return);
        assert_eq!(Op::decode(0x0123), Op::Sys { address: 0x123 });
        assert_eq!(Op::decode(0x1ABC), Op::JumpAddress { address: 0xABC });
        assert_eq!(Op::decode(0x2ABC), Op::Call { address: 0xABC });
        assert_eq!(Op::decode(0x3A42), Op::Skip_Eq_Byte { vx: 0xA, nn: 0x42 });
        assert_eq!(
            Op::decode(0x4A42),
            Op::Skip_NotEq_Byte { vx: 0xA, nn: 0x42 }
        );
        assert_eq!(Op::decode(0x5120), Op::Skip_Eq { vx: 1, vy: 2 });
        assert_eq!(Op::decode(0x6005), Op::Load_Byte { vx: 0, nn: 5 });
        assert_eq!(Op::decode(0x7003), Op::Add_Byte { vx: 0, nn: 3 });
        assert_eq!(Op::decode(0x9120), Op::Skip_NotEq { vx: 1, vy: 2 });
        assert_eq!(Op::decode(0xA123), Op::Load_Address { address: 0x123 });
        assert_eq!(Op::decode(0xB123), Op::Jump_V0 { address: 0x123 });
        assert_eq!(Op::decode(0xC3FF), Op::Random { vx: 3, nn: 0xFF });
        assert_eq!(Op::decode(0xD125), Op::Draw { vx: 1, vy: 2, n: 5 });
    }

    #[test]
    fn test_decode_math() {
        assert_eq!(Op::decode(0x8120), Op::Load_Vx_Vy { vx: 1, vy: 2 });
        assert_eq!(Op::decode(0x8121), Op::Or_Vx_Vy { vx: 1, vy: 2 });
        assert_eq!(Op::decode(0x8122), Op::And_Vx_Vy { vx: 1, vy: 2 });
        assert_eq!(Op::decode(0x8123), Op::Xor_Vx_Vy { vx: 1, vy: 2 });
        assert_eq!(Op::decode(0x8124), Op::Add_Vx_Vy { vx: 1, vy: 2 });
        assert_eq!(Op::decode(0x8125), Op::Sub_Vx_Vy { vx: 1, vy: 2 });
        assert_eq!(Op::decode(0x8126), Op::ShiftRight { vx: 1 });
        assert_eq!(Op::decode(0x8127), Op::SubReverse_Vx_Vy { vx: 1, vy: 2 });
        assert_eq!(Op::decode(0x812E), Op::ShiftLeft { vx: 1 });
        assert_eq!(Op::decode(0x8128), Op::Unknown(0x8128));
    }

    #[test]
    fn test_decode_misc() {
        assert_eq!(Op::decode(0xE59E), Op::Skip_Key { vx: 5 });
        assert_eq!(Op::decode(0xE5A1), Op::Skip_NotKey { vx: 5 });
        assert_eq!(Op::decode(0xE5A2), Op::Unknown(0xE5A2));
        assert_eq!(Op::decode(0xF507), Op::Load_Vx_Delay { vx: 5 });
        assert_eq!(Op::decode(0xF50A), Op::Wait_Key { vx: 5 });
        assert_eq!(Op::decode(0xF515), Op::Load_Delay_Vx { vx: 5 });
        assert_eq!(Op::decode(0xF518), Op::Load_Sound_Vx { vx: 5 });
        assert_eq!(Op::decode(0xF51E), Op::Add_I_Vx { vx: 5 });
        assert_eq!(Op::decode(0xF529), Op::Load_Font { vx: 5 });
        assert_eq!(Op::decode(0xF533), Op::Store_Bcd { vx: 5 });
        assert_eq!(Op::decode(0xF555), Op::Store_Registers { vx: 5 });
        assert_eq!(Op::decode(0xF565), Op::Load_Registers { vx: 5 });
        assert_eq!(Op::decode(0xF5FF), Op::Unknown(0xF5FF));
    }

    #[test]
    fn test_decode_lenient_nibbles() {
        assert_eq!(Op::decode(0x5127), Op::Skip_Eq { vx: 1, vy: 2 });
        assert_eq!(Op::decode(0x912F), Op::Skip_NotEq { vx: 1, vy: 2 });
        assert_eq!(Op::decode(0xF33A), Op::Wait_Key { vx: 3 });
    }

    #[test]
    fn test_mnemonics() {
        assert_eq!(Op::decode(0x6005).to_string(), "LD V0, 05");
        assert_eq!(Op::decode(0xD125).to_string(), "DRW V1, V2, 5");
        assert_eq!(Op::decode(0xF10A).to_string(), "LD V1, K");
        assert_eq!(Op::decode(0x2ABC).to_string(), "CALL ABC");
        assert_eq!(Op::decode(0xFFFF).to_string(), "DW FFFF");
    }
}
