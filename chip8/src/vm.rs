//! Virtual machine.
use std::{
    fmt::{self, Write},
    time::Duration,
};

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    clock::Clock,
    constants::*,
    cpu::Chip8Cpu,
    display::Display,
    error::{Chip8Error, Chip8Result},
    keypad::KeyCode,
    op::Op,
};

pub struct Chip8Vm {
    cpu: Chip8Cpu,
    /// Paces `execute` when a clock frequency is configured.
    clock: Clock,
    /// Paces the delay and sound timers in `TimerMode::Clock`.
    timer: Clock,
    /// Steps since the timers last counted down, for `TimerMode::Ratio`.
    timer_steps: u32,
    rng: StdRng,
    /// One past the last byte of the loaded program.
    program_end: usize,
    conf: Chip8Conf,
}

impl Chip8Vm {
    pub fn new(conf: Chip8Conf) -> Self {
        let timer_interval = match conf.timer_mode {
            TimerMode::Clock(freq) => freq.into(),
            _ => Hz(DELAY_FREQUENCY).into(),
        };
        let rng = match conf.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Chip8Vm {
            cpu: Chip8Cpu::new(),
            clock: Clock::new(conf.clock_frequency.unwrap_or_default().into()),
            timer: Clock::new(timer_interval),
            timer_steps: 0,
            rng,
            program_end: MEM_START,
            conf,
        }
    }

    /// Configuration that was used to instantiate the VM.
    pub fn config(&self) -> &Chip8Conf {
        &self.conf
    }

    pub fn load_builtin_font(&mut self) -> Chip8Result<()> {
        self.load_font(&FONTSET)
    }

    pub fn load_font(&mut self, fontset: &[u8]) -> Chip8Result<()> {
        if fontset.len() != FONTSET_DATA_LENGTH {
            return Err(Chip8Error::Font(format!(
                "fontset data must be {FONTSET_DATA_LENGTH} bytes, got {}",
                fontset.len()
            )));
        }

        let start = FONTSET_START as usize;
        self.cpu.ram[start..start + FONTSET_DATA_LENGTH].copy_from_slice(fontset);

        Ok(())
    }

    pub fn load_bytecode(&mut self, bytecode: &[u8]) -> Chip8Result<()> {
        if bytecode.len() > MAX_PROGRAM_SIZE {
            return Err(Chip8Error::LargeProgram);
        }

        // Start with clean memory to avoid leaking previous program.
        self.cpu.clear_memory();
        self.cpu.reset_registers();

        // Fonts go in first. A program long enough to reach the
        // font region overwrites it.
        self.load_builtin_font()?;

        // Load program into virtual RAM
        self.cpu.ram[MEM_START..MEM_START + bytecode.len()].copy_from_slice(bytecode);
        self.program_end = MEM_START + bytecode.len();

        self.reset();

        info!(
            "loaded {} byte program at {MEM_START:04X}-{:04X}",
            bytecode.len(),
            self.program_end
        );

        Ok(())
    }

    pub fn cpu(&self) -> &Chip8Cpu {
        &self.cpu
    }

    pub fn display(&self) -> &Display {
        &self.cpu.display
    }

    /// Length in bytes of the loaded program.
    pub fn program_len(&self) -> usize {
        self.program_end - MEM_START
    }

    /// The program has run off its end.
    ///
    /// There is no halt instruction. Execution is over once the program
    /// counter reaches the first address past the loaded program.
    pub fn is_finished(&self) -> bool {
        self.cpu.pc as usize >= self.program_end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Flow {
    Ok,
    /// Run loop stopped before the end of the program, by `interrupt`
    /// or the step limit.
    Interrupt,
    /// Program counter has jumped to a new address.
    ///
    /// This is useful for the caller to avoid being
    /// blocked on infinite or long running loops.
    ///
    /// This is returned when the interpreter encounters:
    ///
    /// - 1nnn (`JP addr`)
    /// - 2nnn (`CALL addr`)
    /// - 00EE (`RET`)
    /// - Bnnn (`JP V0, addr`)
    Jump,
    /// Display buffer changed.
    Draw,
    /// Sound timer was set.
    Sound,
    /// Wait for a keypress.
    ///
    /// This is triggered by the opcode `Fx0A` (`LD Vx, K`). The step returns
    /// immediately, and each following step checks the keypad again until a
    /// key is down.
    KeyWait,
}

/// VM Configuration Parameters.
#[derive(Debug, Default, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default)
)]
pub struct Chip8Conf {
    /// Throttle `execute` to this many steps per second.
    pub clock_frequency: Option<Hz>,
    pub timer_mode: TimerMode,
    /// Report unknown opcodes, call stack misuse and out of range memory
    /// access as errors, instead of ignoring or wrapping them.
    pub strict: bool,
    /// Maximum number of steps `execute` runs before giving up.
    pub step_limit: Option<usize>,
    /// Seed for `Cxnn`. Seeded from entropy when not set.
    pub rng_seed: Option<u64>,
}

/// How the delay and sound timers count down.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(tag = "mode", content = "value", rename_all = "snake_case")
)]
pub enum TimerMode {
    /// Once per executed step.
    #[default]
    Step,
    /// Once every `n` executed steps.
    Ratio(u32),
    /// At a wall clock frequency, independent of the step rate.
    Clock(Hz),
}

/// CPU clock frequency, in hertz (per second)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
pub struct Hz(pub u64);

impl From<Hz> for Duration {
    fn from(freq: Hz) -> Self {
        if freq.0 == 0 {
            Duration::from_nanos(0)
        } else {
            Duration::from_nanos(NANOS_IN_SECOND / freq.0)
        }
    }
}

/// Interpreter
impl Chip8Vm {
    /// Sets the keyboard key input state.
    ///
    /// Must only be called between steps.
    pub fn set_key(&mut self, key: KeyCode, pressed: bool) {
        self.cpu.keypad.set(key, pressed);
    }

    /// Clear the keyboard input state, setting all keys to up.
    pub fn clear_keys(&mut self) {
        self.cpu.keypad.clear()
    }

    /// Stop the run loop before the next step.
    ///
    /// The machine stays interrupted until `resume` is called or a
    /// program is loaded.
    pub fn interrupt(&mut self) {
        self.cpu.trap = true;
    }

    pub fn resume(&mut self) {
        self.cpu.trap = false;
    }

    pub fn is_interrupted(&self) -> bool {
        self.cpu.trap
    }

    /// Clear internal state in preparation for a fresh startup.
    fn reset(&mut self) {
        self.timer_steps = 0;
        self.clock.reset();
        self.timer.reset();
    }

    fn is_throttled(&self) -> bool {
        matches!(self.conf.clock_frequency, Some(Hz(freq)) if freq > 0)
    }

    /// Run until the program counter moves past the end of the program.
    ///
    /// Returns `Flow::Interrupt` if the machine is interrupted, or the
    /// configured step limit is reached first.
    pub fn execute(&mut self) -> Chip8Result<Flow> {
        self.reset();

        let mut steps = 0;
        while !self.is_finished() {
            if matches!(self.conf.step_limit, Some(limit) if steps >= limit) {
                info!("step limit reached at {:04X}", self.cpu.pc);
                return Ok(Flow::Interrupt);
            }

            if self.is_throttled() {
                self.clock.wait();
            }

            if self.step()? == Flow::Interrupt {
                return Ok(Flow::Interrupt);
            }
            steps += 1;
        }

        Ok(Flow::Ok)
    }

    /// Run at most `step_count` steps, stopping early at the end of the
    /// program. Returns the control flow of the last step.
    pub fn run_steps(&mut self, step_count: usize) -> Chip8Result<Flow> {
        let mut flow = Flow::Ok;

        for _ in 0..step_count {
            if self.is_finished() {
                break;
            }
            flow = self.step()?;
            if flow == Flow::Interrupt {
                break;
            }
        }

        Ok(flow)
    }

    /// Execute a single step.
    pub fn tick(&mut self) -> Chip8Result<Flow> {
        self.step()
    }

    /// Read the instruction word at the program counter, and advance it.
    ///
    /// The word is read in memory byte order as a little-endian `u16`.
    /// Instructions are stored high byte first, so the bytes of the word
    /// must be swapped before decoding.
    pub fn fetch(&mut self) -> Chip8Result<u16> {
        self.check_range(self.cpu.pc, 2)?;

        let raw = u16::from_le_bytes(self.cpu.instr());
        self.cpu.pc = self.cpu.pc.wrapping_add(2);

        Ok(raw)
    }

    fn step(&mut self) -> Chip8Result<Flow> {
        if self.cpu.trap {
            // Interrupt signal is set.
            return Ok(Flow::Interrupt);
        }

        // Instructions check for errors before touching memory or
        // registers, so only the program counter and timers need to be
        // put back.
        let pc = self.cpu.pc;
        let timers = (self.cpu.delay_timer, self.cpu.sound_timer);
        let timer_steps = self.timer_steps;
        let timer = self.timer.clone();

        match self.step_instruction() {
            Ok(flow) => Ok(flow),
            Err(err) => {
                self.cpu.pc = pc;
                (self.cpu.delay_timer, self.cpu.sound_timer) = timers;
                self.timer_steps = timer_steps;
                self.timer = timer;
                Err(err)
            }
        }
    }

    fn step_instruction(&mut self) -> Chip8Result<Flow> {
        // Timers count down before the instruction, including steps
        // stalled on a key press.
        self.tick_timers();

        if let Some(vx) = self.cpu.key_wait {
            return Ok(self.resume_key_wait(vx));
        }

        let addr = self.cpu.pc;
        let word = self.fetch()?.swap_bytes();
        let op = Op::decode(word);

        op_trace(addr, word, &op);

        self.exec(op)
    }

    fn tick_timers(&mut self) {
        let count_down = match self.conf.timer_mode {
            TimerMode::Step => true,
            TimerMode::Ratio(n) => {
                self.timer_steps += 1;
                if self.timer_steps >= n.max(1) {
                    self.timer_steps = 0;
                    true
                } else {
                    false
                }
            }
            TimerMode::Clock(_) => self.timer.tick(),
        };

        if count_down {
            self.cpu.tick_delay();
            self.cpu.tick_sound();
        }
    }

    /// Fail in strict mode when `len` bytes starting at `base` run past
    /// the end of memory.
    fn check_range(&self, base: Address, len: usize) -> Chip8Result<()> {
        let end = base as usize + len;
        if self.conf.strict && len > 0 && end > MEM_SIZE {
            Err(Chip8Error::AddressOverflow { addr: end - 1 })
        } else {
            Ok(())
        }
    }

    /// Skip the next instruction.
    #[inline(always)]
    fn skip_if(&mut self, cond: bool) {
        if cond {
            self.cpu.pc = self.cpu.pc.wrapping_add(2);
        }
    }

    /// Instruction that decoded to nothing the machine implements.
    fn unsupported(&self, word: u16) -> Chip8Result<Flow> {
        let addr = self.cpu.pc.wrapping_sub(2);
        if self.conf.strict {
            Err(Chip8Error::UnknownOpcode { addr, word })
        } else {
            debug!("ignoring opcode {word:04X} at {addr:04X}");
            Ok(Flow::Ok)
        }
    }

    /// Apply the effects of one decoded instruction.
    ///
    /// The program counter is expected to already point past the instruction.
    pub(crate) fn exec(&mut self, op: Op) -> Chip8Result<Flow> {
        let mut control_flow = Flow::Ok;

        match op {
            Op::Sys { address } => return self.unsupported(address),
            Op::ClearScreen => {
                self.cpu.display.clear();
                control_flow = Flow::Draw;
            }
            Op::Return => control_flow = self.ret()?,
            Op::JumpAddress { address } => {
                self.cpu.pc = address;
                control_flow = Flow::Jump;
            }
            Op::Call { address } => control_flow = self.call(address)?,
            Op::Skip_Eq_Byte { vx, nn } => self.skip_if(self.cpu.register(vx) == nn),
            Op::Skip_NotEq_Byte { vx, nn } => self.skip_if(self.cpu.register(vx) != nn),
            Op::Skip_Eq { vx, vy } => self.skip_if(self.cpu.register(vx) == self.cpu.register(vy)),
            Op::Skip_NotEq { vx, vy } => {
                self.skip_if(self.cpu.register(vx) != self.cpu.register(vy))
            }
            Op::Load_Byte { vx, nn } => self.cpu.set_register(vx, nn),
            Op::Add_Byte { vx, nn } => {
                let x = self.cpu.register(vx);
                self.cpu.set_register(vx, x.wrapping_add(nn));
            }
            Op::Load_Vx_Vy { .. }
            | Op::Or_Vx_Vy { .. }
            | Op::And_Vx_Vy { .. }
            | Op::Xor_Vx_Vy { .. }
            | Op::Add_Vx_Vy { .. }
            | Op::Sub_Vx_Vy { .. }
            | Op::ShiftRight { .. }
            | Op::SubReverse_Vx_Vy { .. }
            | Op::ShiftLeft { .. } => self.exec_math(op),
            Op::Load_Address { address } => self.cpu.address = address,
            Op::Jump_V0 { address } => {
                self.cpu.pc = self.cpu.register(0) as Address + address;
                control_flow = Flow::Jump;
            }
            Op::Random { vx, nn } => {
                let value = self.rng.gen::<u8>() & nn;
                self.cpu.set_register(vx, value);
            }
            Op::Draw { vx, vy, n } => control_flow = self.draw(vx, vy, n)?,
            Op::Skip_Key { vx } => {
                let key = self.cpu.register(vx);
                self.skip_if(self.cpu.keypad.is_pressed(key));
            }
            Op::Skip_NotKey { vx } => {
                let key = self.cpu.register(vx);
                self.skip_if(!self.cpu.keypad.is_pressed(key));
            }
            Op::Wait_Key { vx } => control_flow = self.wait_key(vx),
            Op::Load_Vx_Delay { vx } => self.cpu.set_register(vx, self.cpu.delay_timer),
            Op::Load_Delay_Vx { vx } => self.cpu.delay_timer = self.cpu.register(vx),
            Op::Load_Sound_Vx { vx } => {
                self.cpu.sound_timer = self.cpu.register(vx);
                control_flow = Flow::Sound;
            }
            Op::Add_I_Vx { vx } => {
                let x = self.cpu.register(vx) as Address;
                self.cpu.address = self.cpu.address.wrapping_add(x);
            }
            Op::Load_Font { vx } => {
                let x = self.cpu.register(vx) as Address;
                self.cpu.address = FONTSET_START + x * FONTSET_HEIGHT as Address;
            }
            Op::Store_Bcd { vx } => self.store_bcd(vx)?,
            Op::Store_Registers { vx } => self.store_registers(vx)?,
            Op::Load_Registers { vx } => self.load_registers(vx)?,
            Op::Unknown(word) => return self.unsupported(word),
        }

        Ok(control_flow)
    }

    /// Execute an arithmetic instruction.
    ///
    /// Where VF is an output, it is written before the result, and the
    /// result is computed from the registers after that write.
    #[inline]
    fn exec_math(&mut self, op: Op) {
        match op {
            // 8XY0 (LD Vx, Vy)
            Op::Load_Vx_Vy { vx, vy } => self.cpu.set_register(vx, self.cpu.register(vy)),
            // 8XY1 (OR Vx, Vy)
            Op::Or_Vx_Vy { vx, vy } => {
                let value = self.cpu.register(vx) | self.cpu.register(vy);
                self.cpu.set_register(vx, value);
            }
            // 8XY2 (AND Vx, Vy)
            Op::And_Vx_Vy { vx, vy } => {
                let value = self.cpu.register(vx) & self.cpu.register(vy);
                self.cpu.set_register(vx, value);
            }
            // 8XY3 (XOR Vx, Vy)
            Op::Xor_Vx_Vy { vx, vy } => {
                let value = self.cpu.register(vx) ^ self.cpu.register(vy);
                self.cpu.set_register(vx, value);
            }
            // 8XY4 (ADD Vx, Vy)
            //
            // VF is 1 when the sum overflows, else 0.
            Op::Add_Vx_Vy { vx, vy } => {
                let sum = self.cpu.register(vx) as u16 + self.cpu.register(vy) as u16;
                self.cpu.set_flag(sum > 0xFF);
                let value = self.cpu.register(vx).wrapping_add(self.cpu.register(vy));
                self.cpu.set_register(vx, value);
            }
            // 8XY5 (SUB Vx, Vy)
            //
            // VF is 1 when Vx is strictly greater than Vy, else 0.
            Op::Sub_Vx_Vy { vx, vy } => {
                self.cpu
                    .set_flag(self.cpu.register(vx) > self.cpu.register(vy));
                let value = self.cpu.register(vx).wrapping_sub(self.cpu.register(vy));
                self.cpu.set_register(vx, value);
            }
            // 8XY6 (SHR Vx)
            Op::ShiftRight { vx } => {
                self.cpu.registers[FLAG_REGISTER] = self.cpu.register(vx) & 1;
                let value = self.cpu.register(vx) >> 1;
                self.cpu.set_register(vx, value);
            }
            // 8XY7 (SUBN Vx, Vy)
            //
            // VF is 1 when Vx is strictly less than Vy, else 0.
            Op::SubReverse_Vx_Vy { vx, vy } => {
                self.cpu
                    .set_flag(self.cpu.register(vx) < self.cpu.register(vy));
                let value = self.cpu.register(vy).wrapping_sub(self.cpu.register(vx));
                self.cpu.set_register(vx, value);
            }
            // 8XYE (SHL Vx)
            Op::ShiftLeft { vx } => {
                self.cpu.registers[FLAG_REGISTER] = (self.cpu.register(vx) & 0x80) >> 7;
                let value = self.cpu.register(vx) << 1;
                self.cpu.set_register(vx, value);
            }
            _ => unreachable!("not an arithmetic instruction: {op:?}"),
        }
    }

    /// 2NNN (CALL addr)
    ///
    /// Push the return address onto the stack region, low byte then
    /// high byte, and jump.
    fn call(&mut self, address: Address) -> Chip8Result<Flow> {
        let sp = self.cpu.sp;
        if self.conf.strict && sp as usize + 2 > STACK_END as usize {
            return Err(Chip8Error::StackOverflow { sp });
        }

        let [lo, hi] = self.cpu.pc.to_le_bytes();
        self.cpu.write(sp as usize, lo);
        self.cpu.write(sp.wrapping_add(1) as usize, hi);
        self.cpu.sp = sp.wrapping_add(2);
        self.cpu.pc = address;

        Ok(Flow::Jump)
    }

    /// 00EE (RET)
    ///
    /// Pop the return address, high byte first.
    fn ret(&mut self) -> Chip8Result<Flow> {
        let sp = self.cpu.sp;
        if self.conf.strict && sp < STACK_START + 2 {
            return Err(Chip8Error::StackUnderflow { sp });
        }

        let hi = self.cpu.read(sp.wrapping_sub(1) as usize);
        let lo = self.cpu.read(sp.wrapping_sub(2) as usize);
        self.cpu.sp = sp.wrapping_sub(2);
        self.cpu.pc = Address::from_be_bytes([hi, lo]);

        Ok(Flow::Jump)
    }

    /// Dxyn (DRW Vx, Vy, nibble)
    ///
    /// Draw sprite to the display buffer, at coordinate as per registers Vx and Vy.
    /// Sprite is encoded as 8 pixels wide, N pixels high, stored in bits located in
    /// memory pointed to by address register I.
    ///
    /// Cells are addressed in a flat buffer, so a sprite crossing the right edge
    /// continues on the next row, and one crossing the bottom continues at the top.
    ///
    /// VF is cleared before drawing, and set to 1 if any pixel is erased.
    fn draw(&mut self, vx: u8, vy: u8, n: u8) -> Chip8Result<Flow> {
        let base = self.cpu.address;
        self.check_range(base, n as usize)?;

        self.cpu.set_flag(false);

        for r in 0..n as usize {
            // Each row is 8 bits representing the 8 pixels of the sprite.
            let row = self.cpu.read(base as usize + r);

            for c in 0..8 {
                if row & (0x80 >> c) == 0 {
                    continue;
                }

                // Coordinates are read per pixel, VF may be one of them.
                let x = self.cpu.register(vx) as usize;
                let y = self.cpu.register(vy) as usize;
                let d = ((y + r) * DISPLAY_WIDTH + x + c) % DISPLAY_BUFFER_SIZE;

                if self.cpu.display.toggle(d) {
                    self.cpu.set_flag(true);
                }
            }
        }

        Ok(Flow::Draw)
    }

    /// Fx0A (LD Vx, K)
    ///
    /// Store the lowest pressed key in Vx. If no key is down, the program
    /// counter is rewound onto this instruction and the machine enters the
    /// waiting state.
    fn wait_key(&mut self, vx: u8) -> Flow {
        match self.cpu.keypad.first_key() {
            Some(key) => {
                self.cpu.set_register(vx, key);
                Flow::Ok
            }
            None => {
                self.cpu.pc = self.cpu.pc.wrapping_sub(2);
                self.cpu.key_wait = Some(vx);
                Flow::KeyWait
            }
        }
    }

    /// Leave the waiting state once a key is down, moving past the `Fx0A`.
    fn resume_key_wait(&mut self, vx: u8) -> Flow {
        match self.cpu.keypad.first_key() {
            Some(key) => {
                self.cpu.set_register(vx, key);
                self.cpu.key_wait = None;
                self.cpu.pc = self.cpu.pc.wrapping_add(2);
                Flow::Ok
            }
            None => Flow::KeyWait,
        }
    }

    /// Fx33 (LD B, Vx)
    ///
    /// Store the binary-coded decimal representation of Vx
    /// in the memory locations I, I+1, and I+2.
    #[rustfmt::skip]
    fn store_bcd(&mut self, vx: u8) -> Chip8Result<()> {
        let addr = self.cpu.address as usize;
        self.check_range(self.cpu.address, 3)?;

        let x = self.cpu.register(vx);
        self.cpu.write(addr,     x / 100 % 10);
        self.cpu.write(addr + 1, x / 10  % 10);
        self.cpu.write(addr + 2, x       % 10);

        Ok(())
    }

    /// Fx55 (LD [I], Vx)
    ///
    /// Store registers V0 through Vx in memory starting at location I.
    fn store_registers(&mut self, vx: u8) -> Chip8Result<()> {
        let addr = self.cpu.address as usize;
        self.check_range(self.cpu.address, vx as usize + 1)?;

        for v in 0..=vx as usize {
            self.cpu.write(addr + v, self.cpu.registers[v]);
        }

        Ok(())
    }

    /// Fx65 (LD Vx, [I])
    ///
    /// Read registers V0 through Vx from memory starting at location I.
    fn load_registers(&mut self, vx: u8) -> Chip8Result<()> {
        let addr = self.cpu.address as usize;
        self.check_range(self.cpu.address, vx as usize + 1)?;

        for v in 0..=vx as usize {
            self.cpu.registers[v] = self.cpu.read(addr + v);
        }

        Ok(())
    }
}

/// Troubleshooting
#[allow(dead_code)]
#[doc(hidden)]
impl Chip8Vm {
    /// Returns the contents of the memory as a human readable string.
    pub fn dump_ram(&self, count: usize) -> Result<String, fmt::Error> {
        let mut buf = String::new();

        for addr in (MEM_START..MEM_START + count).step_by(2) {
            let [a, b] = [self.cpu.read(addr), self.cpu.read(addr + 1)];
            writeln!(buf, "{addr:04X}: {a:02X}{b:02X}")?;
        }

        Ok(buf)
    }

    pub fn dump_display(&self) -> Result<String, fmt::Error> {
        let mut buf = String::new();
        self.cpu.display.dump(&mut buf)?;
        Ok(buf)
    }

    pub fn dump_keys(&self) -> Result<String, fmt::Error> {
        let mut buf = String::new();

        if self.cpu.keypad.any_key() {
            write!(buf, "keys: ")?;
            for i in 0..KEY_COUNT {
                if self.cpu.keypad.is_pressed(i) {
                    write!(buf, "k{i:x}")?;
                }
            }
        }

        Ok(buf)
    }
}

#[cfg(feature = "op_trace")]
#[inline]
fn op_trace(addr: Address, word: u16, op: &Op) {
    log::trace!("{addr:04X}: {word:04X} {op}");
}

#[cfg(not(feature = "op_trace"))]
#[inline]
fn op_trace(_: Address, _: u16, _: &Op) {}
