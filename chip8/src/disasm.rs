//! Disassembler.
use std::fmt::{self, Write as FmtWrite};

use crate::{constants::MEM_START, op::Op};

/// Linear listing of a program, one line per instruction word.
///
/// Data embedded in the program, like sprites, is listed as whatever
/// instruction its bytes happen to decode to.
pub struct Disassembler<'a> {
    bytecode: &'a [u8],
    cursor: usize,
}

impl<'a> Disassembler<'a> {
    pub fn new(bytecode: &'a [u8]) -> Self {
        Self {
            bytecode,
            cursor: 0,
        }
    }

    /// Write the whole program to the given writer.
    pub fn disassemble<W: FmtWrite>(&mut self, w: &mut W) -> fmt::Result {
        self.cursor = 0;
        while self.cursor < self.bytecode.len() {
            self.disassemble_next(w)?;
        }
        self.cursor = 0;

        Ok(())
    }

    /// Write a single instruction to the given writer, and advance the cursor.
    fn disassemble_next<W: FmtWrite>(&mut self, w: &mut W) -> fmt::Result {
        let addr = MEM_START + self.cursor;

        match self.bytecode[self.cursor..] {
            [a, b, ..] => {
                let op = Op::decode(u16::from_be_bytes([a, b]));
                writeln!(w, "{addr:04X}: {a:02X}{b:02X}  {op}")?;
                self.cursor += 2;
            }
            [a] => {
                // Trailing odd byte.
                writeln!(w, "{addr:04X}: {a:02X}    DB {a:02X}")?;
                self.cursor += 1;
            }
            [] => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    #[rustfmt::skip]
    fn test_disassemble() {
        let mut disasm = Disassembler::new(&[
            0x60, 0x05,
            0x70, 0x03,
            0xD0, 0x15,
            0xAB,
        ]);

        let mut buf = String::new();
        disasm.disassemble(&mut buf).unwrap();

        let lines: Vec<&str> = buf.lines().collect();
        assert_eq!(lines, vec![
            "0200: 6005  LD V0, 05",
            "0202: 7003  ADD V0, 03",
            "0204: D015  DRW V0, V1, 5",
            "0206: AB    DB AB",
        ]);
    }
}
