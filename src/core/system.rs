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

//! System integration
//!
//! [`System`] owns the CPU and the memory image and plays the host role:
//! it loads programs, drives the step loop, and decides what to do with
//! the run flag. The CPU itself never re-enters; each step runs to
//! completion before the next is considered.

use crate::core::config::SimConfig;
use crate::core::cpu::Cpu;
use crate::core::error::{Result, SimError};
use crate::core::loader::Program;
use crate::core::memory::{Bus, Memory};

/// How a bounded run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The CPU cleared its run flag (exit syscall or all-zero fetch)
    Halted,
    /// The step budget ran out with the CPU still willing to execute
    StepLimit,
}

/// The simulator host: CPU plus memory image
///
/// # Example
///
/// ```
/// use mipsim::core::system::{RunOutcome, System};
///
/// let mut system = System::new();
/// // ADDIU r2, r0, 10 then the exit syscall
/// system.load_words(&[0x2402_000A, 0x0000_000C]).unwrap();
///
/// assert_eq!(system.run(100).unwrap(), RunOutcome::Halted);
/// assert_eq!(system.cpu().reg(2), 10);
/// ```
pub struct System {
    cpu: Cpu,
    bus: Bus,
    config: SimConfig,

    /// Instructions retired since the last reset
    retired: u64,
}

impl System {
    /// Create a new System with the default configuration
    pub fn new() -> Self {
        Self::with_config(SimConfig::default())
    }

    /// Create a new System from a configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Memory layout, entry point, and step budget
    pub fn with_config(config: SimConfig) -> Self {
        let mut cpu = Cpu::new();
        cpu.set_pc(config.entry);
        cpu.commit();

        Self {
            cpu,
            bus: Bus::with_layout(config.memory),
            config,
            retired: 0,
        }
    }

    /// Reset the system to its initial state
    ///
    /// Clears the CPU, wipes all memory segments, and re-arms the run
    /// flag. Any loaded program is gone afterwards.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.cpu.set_pc(self.config.entry);
        self.cpu.commit();
        self.bus.reset();
        self.retired = 0;
    }

    /// Load a program listing from a file and place it at the entry point
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the listing
    pub fn load_program(&mut self, path: &str) -> Result<()> {
        let program = Program::from_file(path)?;
        self.load_words(program.words())
    }

    /// Place instruction words at the entry point and aim the PC there
    ///
    /// # Arguments
    ///
    /// * `words` - Instruction words in text order
    ///
    /// # Returns
    ///
    /// - `Ok(())` on success
    /// - `Err(SimError::ProgramTooLarge)` if the words overrun the text
    ///   segment
    pub fn load_words(&mut self, words: &[u32]) -> Result<()> {
        let layout = &self.config.memory;
        let text_end = layout.text_base.wrapping_add(layout.text_size);
        let capacity = (text_end.saturating_sub(self.config.entry) / 4) as usize;

        if words.len() > capacity {
            return Err(SimError::ProgramTooLarge {
                words: words.len(),
                capacity,
            });
        }

        for (i, word) in words.iter().enumerate() {
            self.bus
                .write_word(self.config.entry + (i as u32) * 4, *word);
        }

        self.cpu.set_pc(self.config.entry);
        self.cpu.commit();
        Ok(())
    }

    /// Execute one instruction
    ///
    /// # Returns
    ///
    /// Ok(()) on success; the decode error otherwise. State is not
    /// committed on error and the run flag is left as it was, so the
    /// caller decides whether the run is over.
    pub fn step(&mut self) -> Result<()> {
        if self.cpu.step(&mut self.bus)? {
            self.retired += 1;
        }
        Ok(())
    }

    /// Run until the CPU halts or the step budget is exhausted
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum number of instructions to execute
    ///
    /// # Returns
    ///
    /// The [`RunOutcome`] on success; the first decode error otherwise.
    pub fn run(&mut self, limit: u64) -> Result<RunOutcome> {
        for _ in 0..limit {
            if !self.cpu.is_running() {
                return Ok(RunOutcome::Halted);
            }
            self.step()?;
        }

        if self.cpu.is_running() {
            Ok(RunOutcome::StepLimit)
        } else {
            Ok(RunOutcome::Halted)
        }
    }

    /// Run with the configured step budget
    pub fn run_to_halt(&mut self) -> Result<RunOutcome> {
        self.run(self.config.step_limit)
    }

    /// Current program counter
    pub fn pc(&self) -> u32 {
        self.cpu.pc()
    }

    /// Instructions retired since the last reset
    pub fn retired(&self) -> u64 {
        self.retired
    }

    /// The configuration this system was built with
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Shared access to the CPU
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Exclusive access to the CPU
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Shared access to the memory image
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Exclusive access to the memory image
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
