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

//! Shared helpers for the CPU tests

use crate::core::cpu::Cpu;
use crate::core::memory::{Bus, Memory};

/// Fresh CPU and zeroed memory image
pub(super) fn setup() -> (Cpu, Bus) {
    (Cpu::new(), Bus::new())
}

/// Write `word` at the current PC and execute it
pub(super) fn execute(cpu: &mut Cpu, bus: &mut Bus, word: u32) {
    bus.write_word(cpu.pc(), word);
    cpu.step(bus).expect("instruction should execute");
}

/// Stage a register value and make it visible immediately
pub(super) fn preload_reg(cpu: &mut Cpu, index: u8, value: u32) {
    cpu.set_reg(index, value);
    cpu.commit();
}

/// Assemble an R-type (SPECIAL) instruction
pub(super) fn encode_r(rs: u8, rt: u8, rd: u8, shamt: u8, funct: u8) -> u32 {
    ((rs as u32) << 21)
        | ((rt as u32) << 16)
        | ((rd as u32) << 11)
        | ((shamt as u32) << 6)
        | funct as u32
}

/// Assemble an I-type instruction
pub(super) fn encode_i(op: u8, rs: u8, rt: u8, imm: u16) -> u32 {
    ((op as u32) << 26) | ((rs as u32) << 21) | ((rt as u32) << 16) | imm as u32
}

/// Assemble a J-type instruction
pub(super) fn encode_j(op: u8, target: u32) -> u32 {
    ((op as u32) << 26) | (target & 0x03FF_FFFF)
}

/// Assemble a REGIMM instruction (opcode 1, condition in the rt field)
pub(super) fn encode_regimm(code: u8, rs: u8, imm: u16) -> u32 {
    encode_i(0x01, rs, code, imm)
}
