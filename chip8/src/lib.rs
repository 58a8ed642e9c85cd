mod bytecode;
mod clock;
pub mod constants;
mod cpu;
mod disasm;
mod display;
mod error;
mod keypad;
mod op;
mod vm;

pub use self::{
    keypad::{InvalidKeyCode, KeyCode},
    vm::{Hz, TimerMode},
};

pub const IMPL_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use super::{
        cpu::Chip8Cpu,
        disasm::Disassembler,
        display::Display,
        error::{Chip8Error, Chip8Result},
        keypad::{KeyCode, Keypad},
        op::Op,
        vm::{Chip8Conf, Chip8Vm, Flow, Hz, TimerMode},
    };
}
