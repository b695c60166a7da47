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

//! Instruction-level MIPS I simulator core library
//!
//! This library provides the core components of an instruction-level
//! simulator for the 32-bit MIPS integer instruction set: the CPU
//! (register file, HI/LO, program counter), the memory image, and the
//! program loader.
//!
//! # Example
//!
//! ```
//! use mipsim::core::cpu::Cpu;
//! use mipsim::core::memory::{Bus, Memory};
//!
//! let mut cpu = Cpu::new();
//! let mut bus = Bus::new();
//!
//! // ADDIU r2, r0, 5 at the entry point
//! bus.write_word(cpu.pc(), 0x2402_0005);
//! cpu.step(&mut bus).unwrap();
//! assert_eq!(cpu.reg(2), 5);
//! ```

pub mod core;
