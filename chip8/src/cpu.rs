//! CPU and memory state.
use crate::{constants::*, display::Display, keypad::Keypad};

/// Core state for a chip8 interpreter.
///
/// One value owns everything an instruction can touch, so independent
/// machines can run side by side.
#[derive(Debug, Clone)]
pub struct Chip8Cpu {
    // ------------------------------------------------------------------------
    // Registers
    /// Program counter pointing to the next instruction in memory.
    pub(crate) pc: Address,
    /// Stack pointer, indicating the next free byte in the stack region.
    pub(crate) sp: Address,
    /// General purpose registers for temporary values.
    ///
    /// Register 16 (VF) is used for either the carry flag or borrow switch depending on opcode.
    pub(crate) registers: [u8; REGISTER_COUNT],
    /// (I) Pointer register used for memory block instructions and sprite data.
    pub(crate) address: Address,
    /// (DT) Delay timer that counts down to 0.
    pub(crate) delay_timer: u8,
    /// (ST) Sound timer that counts down to 0. When it has a non-zero value, a beep is played.
    pub(crate) sound_timer: u8,
    /// Register waiting to receive the next key press, set by `Fx0A`.
    pub(crate) key_wait: Option<u8>,

    // ------------------------------------------------------------------------
    // Memory
    /// Main memory storage space, including the font and stack regions.
    pub(crate) ram: Box<[u8; MEM_SIZE]>,
    /// Screen buffer that is drawn to.
    pub(crate) display: Display,
    /// Keyboard input state, written by the host between steps.
    pub(crate) keypad: Keypad,

    // ------------------------------------------------------------------------
    // Control
    /// Interrupt for VM loop.
    pub(crate) trap: bool,
}

impl Default for Chip8Cpu {
    fn default() -> Self {
        Self {
            pc: MEM_START as Address,
            sp: STACK_START,
            registers: [0; REGISTER_COUNT],
            address: 0,
            delay_timer: 0,
            sound_timer: 0,
            key_wait: None,

            ram: Box::new([0; MEM_SIZE]),
            display: Display::new(),
            keypad: Keypad::new(),

            trap: false,
        }
    }
}

impl Chip8Cpu {
    pub fn new() -> Self {
        Default::default()
    }

    /// Erase the contents of memory and the display.
    pub(crate) fn clear_memory(&mut self) {
        self.ram.fill(0);
        self.display.clear();
    }

    /// Put the registers back to their power-on values.
    pub(crate) fn reset_registers(&mut self) {
        self.pc = MEM_START as Address;
        self.sp = STACK_START;
        self.registers.fill(0);
        self.address = 0;
        self.delay_timer = 0;
        self.sound_timer = 0;
        self.key_wait = None;
        self.trap = false;
    }

    /// Read a byte, wrapping the address around the end of memory.
    #[inline(always)]
    pub fn read(&self, addr: usize) -> u8 {
        self.ram[addr & MEM_MASK]
    }

    /// Write a byte, wrapping the address around the end of memory.
    #[inline(always)]
    pub fn write(&mut self, addr: usize, value: u8) {
        self.ram[addr & MEM_MASK] = value;
    }

    /// The two bytes at the program counter, in memory order.
    #[inline(always)]
    pub fn instr(&self) -> [u8; 2] {
        let pc = self.pc as usize;
        [self.read(pc), self.read(pc + 1)]
    }

    #[inline(always)]
    pub fn register(&self, index: u8) -> u8 {
        self.registers[index as usize & 0xF]
    }

    #[inline(always)]
    pub(crate) fn set_register(&mut self, index: u8, value: u8) {
        self.registers[index as usize & 0xF] = value;
    }

    #[inline(always)]
    pub(crate) fn set_flag(&mut self, value: bool) {
        self.registers[FLAG_REGISTER] = value as u8;
    }

    /// Count down the delay timer.
    #[inline]
    pub fn tick_delay(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
    }

    /// Count down the sound timer.
    #[inline]
    pub fn tick_sound(&mut self) {
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    pub fn sp(&self) -> Address {
        self.sp
    }

    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.registers
    }

    /// Value of the index register `I`.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }

    /// The buzzer sounds while the sound timer is counting down.
    pub fn is_buzzing(&self) -> bool {
        self.sound_timer > 0
    }

    /// Whether execution is stalled on `Fx0A`.
    pub fn is_waiting_for_key(&self) -> bool {
        self.key_wait.is_some()
    }

    pub fn ram(&self) -> &[u8; MEM_SIZE] {
        &self.ram
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_power_on_state() {
        let cpu = Chip8Cpu::new();
        assert_eq!(cpu.pc(), 0x200);
        assert_eq!(cpu.sp(), 0xEA0);
        assert_eq!(cpu.address(), 0);
        assert!(cpu.registers().iter().all(|v| *v == 0));
        assert!(!cpu.is_waiting_for_key());
    }

    #[test]
    fn test_memory_wraps() {
        let mut cpu = Chip8Cpu::new();
        cpu.write(MEM_SIZE + 0x10, 0xAB);
        assert_eq!(cpu.read(0x10), 0xAB);
        assert_eq!(cpu.ram()[0x10], 0xAB);
    }

    #[test]
    fn test_instr_wraps_at_end_of_memory() {
        let mut cpu = Chip8Cpu::new();
        cpu.write(MEM_SIZE - 1, 0x12);
        cpu.write(0, 0x34);
        cpu.pc = (MEM_SIZE - 1) as Address;
        assert_eq!(cpu.instr(), [0x12, 0x34]);
    }

    #[test]
    fn test_timers_stop_at_zero() {
        let mut cpu = Chip8Cpu::new();
        cpu.delay_timer = 1;
        cpu.sound_timer = 2;

        cpu.tick_delay();
        cpu.tick_sound();
        assert_eq!(cpu.delay_timer(), 0);
        assert_eq!(cpu.sound_timer(), 1);
        assert!(cpu.is_buzzing());

        cpu.tick_delay();
        cpu.tick_sound();
        assert_eq!(cpu.delay_timer(), 0);
        assert_eq!(cpu.sound_timer(), 0);
        assert!(!cpu.is_buzzing());
    }
}
