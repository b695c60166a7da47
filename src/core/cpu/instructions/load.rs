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

use super::super::decode::{decode_i_type, sign_extend};
use super::super::Cpu;
use crate::core::error::Result;
use crate::core::memory::Memory;

/// Read the byte at `addr` out of its containing aligned word
///
/// The memory capability only offers aligned word reads, so sub-word
/// loads fetch the containing word and pick the byte out by its in-word
/// offset (little-endian byte numbering).
#[inline(always)]
fn read_byte<M: Memory>(mem: &M, addr: u32) -> u8 {
    let word = mem.read_word(addr & !0x3);
    let shift = (addr & 0x3) * 8;
    (word >> shift) as u8
}

/// Read the halfword at `addr` out of its containing aligned word
///
/// Only the halfword-within-word bit of the address participates, so a
/// misaligned address resolves to the halfword it falls in.
#[inline(always)]
fn read_halfword<M: Memory>(mem: &M, addr: u32) -> u16 {
    let word = mem.read_word(addr & !0x3);
    let shift = (addr & 0x2) * 8;
    (word >> shift) as u16
}

impl Cpu {
    // === Load Instructions ===

    /// LW: Load Word (32-bit)
    ///
    /// Loads a 32-bit word from memory.
    ///
    /// Format: lw rt, offset(rs)
    /// Operation: rt = memory[rs + sign_extend(offset)]
    ///
    /// # Arguments
    ///
    /// * `instruction` - The full 32-bit instruction
    /// * `mem` - Memory capability for reading
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_lw<M: Memory>(
        &mut self,
        instruction: u32,
        mem: &M,
    ) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instruction);
        let addr = self.reg(rs).wrapping_add(sign_extend(imm));

        let value = mem.read_word(addr);
        self.set_reg(rt, value);
        Ok(())
    }

    /// LH: Load Halfword (16-bit, sign-extended)
    ///
    /// Loads a 16-bit halfword from memory and sign-extends it to 32 bits.
    ///
    /// Format: lh rt, offset(rs)
    /// Operation: rt = sign_extend(memory[rs + sign_extend(offset)])
    ///
    /// # Arguments
    ///
    /// * `instruction` - The full 32-bit instruction
    /// * `mem` - Memory capability for reading
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_lh<M: Memory>(
        &mut self,
        instruction: u32,
        mem: &M,
    ) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instruction);
        let addr = self.reg(rs).wrapping_add(sign_extend(imm));

        let value = read_halfword(mem, addr) as i16 as i32 as u32; // Sign extend
        self.set_reg(rt, value);
        Ok(())
    }

    /// LHU: Load Halfword Unsigned (16-bit, zero-extended)
    ///
    /// Loads a 16-bit halfword from memory and zero-extends it to 32 bits.
    ///
    /// Format: lhu rt, offset(rs)
    /// Operation: rt = zero_extend(memory[rs + sign_extend(offset)])
    ///
    /// # Arguments
    ///
    /// * `instruction` - The full 32-bit instruction
    /// * `mem` - Memory capability for reading
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_lhu<M: Memory>(
        &mut self,
        instruction: u32,
        mem: &M,
    ) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instruction);
        let addr = self.reg(rs).wrapping_add(sign_extend(imm));

        let value = read_halfword(mem, addr) as u32; // Zero extend
        self.set_reg(rt, value);
        Ok(())
    }

    /// LB: Load Byte (8-bit, sign-extended)
    ///
    /// Loads an 8-bit byte from memory and sign-extends it to 32 bits.
    ///
    /// Format: lb rt, offset(rs)
    /// Operation: rt = sign_extend(memory[rs + sign_extend(offset)])
    ///
    /// # Arguments
    ///
    /// * `instruction` - The full 32-bit instruction
    /// * `mem` - Memory capability for reading
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_lb<M: Memory>(
        &mut self,
        instruction: u32,
        mem: &M,
    ) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instruction);
        let addr = self.reg(rs).wrapping_add(sign_extend(imm));

        let value = read_byte(mem, addr) as i8 as i32 as u32; // Sign extend
        self.set_reg(rt, value);
        Ok(())
    }

    /// LBU: Load Byte Unsigned (8-bit, zero-extended)
    ///
    /// Loads an 8-bit byte from memory and zero-extends it to 32 bits.
    ///
    /// Format: lbu rt, offset(rs)
    /// Operation: rt = zero_extend(memory[rs + sign_extend(offset)])
    ///
    /// # Arguments
    ///
    /// * `instruction` - The full 32-bit instruction
    /// * `mem` - Memory capability for reading
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_lbu<M: Memory>(
        &mut self,
        instruction: u32,
        mem: &M,
    ) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instruction);
        let addr = self.reg(rs).wrapping_add(sign_extend(imm));

        let value = read_byte(mem, addr) as u32; // Zero extend
        self.set_reg(rt, value);
        Ok(())
    }
}
