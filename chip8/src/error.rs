//! Result and errors.
use std::fmt::{self, Display, Formatter};

use crate::constants::Address;

pub type Chip8Result<T> = std::result::Result<T, Chip8Error>;

/// Errors raised by loading or running a program.
///
/// A step that fails leaves the machine as it was before the step,
/// so the failing instruction is at the program counter.
#[derive(Debug)]
pub enum Chip8Error {
    /// Attempt to load a bytecode program that can't fit in memory.
    LargeProgram,
    /// Font data has the wrong shape.
    Font(String),
    /// Instruction word that does not decode to any operation.
    ///
    /// Only raised in strict mode.
    UnknownOpcode {
        addr: Address,
        word: u16,
    },
    /// Subroutine call pushed past the end of the stack region.
    ///
    /// Only raised in strict mode.
    StackOverflow {
        sp: Address,
    },
    /// Return popped below the start of the stack region.
    ///
    /// Only raised in strict mode.
    StackUnderflow {
        sp: Address,
    },
    /// Memory access at or beyond the end of memory.
    ///
    /// Only raised in strict mode.
    AddressOverflow {
        addr: usize,
    },
    Fmt(fmt::Error),
}

impl Display for Chip8Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::LargeProgram => write!(f, "program too large for VM memory"),
            Self::Font(msg) => write!(f, "font error: {msg}"),
            Self::UnknownOpcode { addr, word } => {
                write!(f, "unknown opcode {word:04X} at {addr:04X}")
            }
            Self::StackOverflow { sp } => write!(f, "call stack overflow, sp={sp:04X}"),
            Self::StackUnderflow { sp } => write!(f, "call stack underflow, sp={sp:04X}"),
            Self::AddressOverflow { addr } => write!(f, "memory access out of range: {addr:04X}"),
            Self::Fmt(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Chip8Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fmt(err) => Some(err),
            _ => None,
        }
    }
}

impl From<fmt::Error> for Chip8Error {
    fn from(err: fmt::Error) -> Self {
        Chip8Error::Fmt(err)
    }
}
