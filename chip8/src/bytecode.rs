//! Helpers for extracting operands from a logical instruction word.
//!
//! The word is in instruction order, with the opcode family in the
//! highest nibble: `0xFXYN`.

/// Extract the opcode family, bits 12-15.
#[inline(always)]
pub fn op_code(word: u16) -> u8 {
    (word >> 12) as u8
}

/// Extract operand NNN, the 12-bit address in bits 0-11.
#[inline(always)]
pub fn op_nnn(word: u16) -> u16 {
    word & 0x0FFF
}

/// Extract operand NN, the immediate byte in bits 0-7.
#[inline(always)]
pub fn op_nn(word: u16) -> u8 {
    (word & 0x00FF) as u8
}

/// Extract operand X, the register index in bits 8-11.
#[inline(always)]
pub fn op_x(word: u16) -> u8 {
    ((word & 0x0F00) >> 8) as u8
}

/// Extract operand Y, the register index in bits 4-7.
#[inline(always)]
pub fn op_y(word: u16) -> u8 {
    ((word & 0x00F0) >> 4) as u8
}

/// Extract operand N, the nibble in bits 0-3.
#[inline(always)]
pub fn op_n(word: u16) -> u8 {
    (word & 0x000F) as u8
}

/// Extract operands X, Y and N.
#[inline(always)]
pub fn op_xyn(word: u16) -> (u8, u8, u8) {
    (op_x(word), op_y(word), op_n(word))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_operands() {
        let word = 0xD12A;
        assert_eq!(op_code(word), 0xD);
        assert_eq!(op_nnn(word), 0x12A);
        assert_eq!(op_nn(word), 0x2A);
        assert_eq!(op_xyn(word), (0x1, 0x2, 0xA));
        assert_eq!(op_x(0x7F03), 0xF);
        assert_eq!(op_y(0x8AB4), 0xB);
    }
}
