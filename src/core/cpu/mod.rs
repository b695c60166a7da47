// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::core::error::Result;
use crate::core::memory::Memory;

mod decode;
mod instructions;

#[cfg(test)]
mod tests;

/// Reset value of the program counter (start of the text segment)
pub const RESET_PC: u32 = 0x0040_0000;

/// Conventional ABI names for the 32 general purpose registers
const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// One complete copy of the architectural state
///
/// Two copies are held by the CPU: the committed state that instruction
/// reads observe, and a shadow that instruction writes target. The shadow
/// replaces the committed state when a step succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    /// General purpose registers (r0-r31)
    ///
    /// r0 is hardwired to always return 0
    regs: [u32; 32],

    /// HI register (multiplication/division result upper 32 bits)
    hi: u32,

    /// LO register (multiplication/division result lower 32 bits)
    lo: u32,

    /// Program counter
    pc: u32,
}

impl State {
    fn new() -> Self {
        Self {
            regs: [0u32; 32],
            hi: 0,
            lo: 0,
            pc: RESET_PC,
        }
    }
}

/// CPU (32-bit MIPS I integer subset) emulation implementation
///
/// The CPU advances one instruction per call to [`Cpu::step`]. Each step
/// reads the committed state, stages all of its writes into a shadow copy,
/// and commits the shadow on success, so every read within a step observes
/// the values from before the step.
///
/// # Example
/// ```
/// use mipsim::core::cpu::Cpu;
///
/// let cpu = Cpu::new();
/// assert_eq!(cpu.reg(0), 0); // r0 is always 0
/// assert_eq!(cpu.pc(), mipsim::core::cpu::RESET_PC);
/// ```
pub struct Cpu {
    /// Committed state; all reads during execution come from here
    current: State,

    /// Staged state; all writes during execution go here
    next: State,

    /// Run flag; cleared by the halting SYSCALL or an all-zero fetch
    running: bool,
}

impl Cpu {
    /// Create a new CPU instance with initial state
    ///
    /// The CPU is initialized with the following state:
    /// - All general purpose registers: 0
    /// - HI, LO: 0
    /// - PC: [`RESET_PC`]
    /// - run flag: set
    ///
    /// # Returns
    /// Initialized CPU instance
    pub fn new() -> Self {
        Self {
            current: State::new(),
            next: State::new(),
            running: true,
        }
    }

    /// Reset CPU to initial state
    ///
    /// Resets all registers, the PC, and the run flag to initial values.
    pub fn reset(&mut self) {
        self.current = State::new();
        self.next = State::new();
        self.running = true;
    }

    /// Read from general purpose register
    ///
    /// Reads observe the committed state; writes staged during the current
    /// step are not visible.
    ///
    /// # Arguments
    /// - `index`: Register number (0-31)
    ///
    /// # Returns
    /// Register value. r0 always returns 0.
    ///
    /// # Example
    /// ```
    /// use mipsim::core::cpu::Cpu;
    ///
    /// let cpu = Cpu::new();
    /// assert_eq!(cpu.reg(0), 0); // r0 is always 0
    /// ```
    #[inline(always)]
    pub fn reg(&self, index: u8) -> u32 {
        if index == 0 {
            0
        } else {
            self.current.regs[index as usize]
        }
    }

    /// Write to general purpose register
    ///
    /// The write is staged; it becomes visible to reads after the next
    /// [`Cpu::commit`] (or at the end of the step that staged it).
    ///
    /// # Arguments
    /// - `index`: Register number (0-31)
    /// - `value`: Value to write
    ///
    /// # Note
    /// Writes to r0 are ignored (r0 is always 0).
    ///
    /// # Example
    /// ```
    /// use mipsim::core::cpu::Cpu;
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.set_reg(1, 0x12345678);
    /// cpu.commit();
    /// assert_eq!(cpu.reg(1), 0x12345678);
    ///
    /// // Writes to r0 are ignored
    /// cpu.set_reg(0, 0xDEADBEEF);
    /// cpu.commit();
    /// assert_eq!(cpu.reg(0), 0);
    /// ```
    #[inline(always)]
    pub fn set_reg(&mut self, index: u8, value: u32) {
        if index != 0 {
            self.next.regs[index as usize] = value;
        }
    }

    /// Read the HI register (committed state)
    pub fn hi(&self) -> u32 {
        self.current.hi
    }

    /// Stage a write to the HI register
    pub fn set_hi(&mut self, value: u32) {
        self.next.hi = value;
    }

    /// Read the LO register (committed state)
    pub fn lo(&self) -> u32 {
        self.current.lo
    }

    /// Stage a write to the LO register
    pub fn set_lo(&mut self, value: u32) {
        self.next.lo = value;
    }

    /// Read the program counter (committed state)
    pub fn pc(&self) -> u32 {
        self.current.pc
    }

    /// Stage a write to the program counter
    pub fn set_pc(&mut self, pc: u32) {
        self.next.pc = pc;
    }

    /// Commit all staged writes, making them visible to reads
    ///
    /// Within [`Cpu::step`] this runs automatically after a successful
    /// instruction. Hosts call it directly when staging state of their own,
    /// for example to preload registers or to point the PC at a freshly
    /// loaded program.
    pub fn commit(&mut self) {
        self.current = self.next;
    }

    /// Whether the CPU is still willing to execute
    ///
    /// Cleared by the halting SYSCALL, by fetching an all-zero word, or by
    /// the host via [`Cpu::halt`]. Once cleared it stays cleared until
    /// [`Cpu::reset`].
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Clear the run flag
    ///
    /// Safe to call between steps only; the flag is not examined while an
    /// instruction is in flight.
    pub fn halt(&mut self) {
        self.running = false;
    }

    /// Execute one instruction and commit the resulting state
    ///
    /// Fetches the word at the current PC, dispatches it to the matching
    /// handler, and commits the staged state if the handler succeeds. On an
    /// unrecognized encoding the error is returned, nothing is committed,
    /// and the run flag is left untouched; whether to continue is the
    /// host's decision.
    ///
    /// Fetching an all-zero word clears the run flag and succeeds without
    /// executing anything. A zeroed memory image reads as NOP words, so
    /// running off the end of a program halts instead of walking the rest
    /// of the address space. This is host policy, not ISA behaviour.
    ///
    /// # Arguments
    ///
    /// * `mem` - Memory capability for instruction fetch and loads/stores
    ///
    /// # Returns
    ///
    /// Ok(true) if an instruction retired, Ok(false) if the sentinel fetch
    /// halted the CPU instead, or the decode error for the fetched word
    pub fn step<M: Memory>(&mut self, mem: &mut M) -> Result<bool> {
        let instr = mem.read_word(self.current.pc);

        if instr == 0 {
            log::trace!("all-zero fetch at PC=0x{:08X}, halting", self.current.pc);
            self.running = false;
            return Ok(false);
        }

        // Seed the shadow and advance the PC past this instruction.
        // Control-flow handlers overwrite the staged PC.
        self.next = self.current;
        self.next.pc = self.current.pc.wrapping_add(4);

        self.execute_instruction(instr, mem)?;
        self.commit();
        Ok(true)
    }

    /// Print the register file, HI/LO, and PC to stdout
    ///
    /// Registers are labelled with their ABI names, four per row.
    pub fn dump_registers(&self) {
        for (i, chunk) in self.current.regs.chunks(4).enumerate() {
            let cols: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(j, value)| {
                    let index = i * 4 + j;
                    format!("r{index:<2} ({:>4}) = 0x{value:08X}", REG_NAMES[index])
                })
                .collect();
            println!("{}", cols.join("  "));
        }
        println!(
            "hi = 0x{:08X}  lo = 0x{:08X}  pc = 0x{:08X}  running = {}",
            self.current.hi, self.current.lo, self.current.pc, self.running
        );
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
