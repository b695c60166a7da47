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

impl Cpu {
    // === Store Instructions ===

    /// SW: Store Word (32-bit)
    ///
    /// Stores a 32-bit word to memory.
    ///
    /// Format: sw rt, offset(rs)
    /// Operation: memory[rs + sign_extend(offset)] = rt
    ///
    /// # Arguments
    ///
    /// * `instruction` - The full 32-bit instruction
    /// * `mem` - Memory capability for writing
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_sw<M: Memory>(
        &mut self,
        instruction: u32,
        mem: &mut M,
    ) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instruction);
        let addr = self.reg(rs).wrapping_add(sign_extend(imm));

        mem.write_word(addr, self.reg(rt));
        Ok(())
    }

    /// SH: Store Halfword (16-bit)
    ///
    /// Stores the lower 16 bits of a register to memory. The memory
    /// capability only offers aligned word access, so the containing word
    /// is read, its low halfword replaced, and the merged word written
    /// back.
    ///
    /// Format: sh rt, offset(rs)
    /// Operation: memory[rs + sign_extend(offset)] = rt[15:0]
    ///
    /// # Arguments
    ///
    /// * `instruction` - The full 32-bit instruction
    /// * `mem` - Memory capability for writing
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_sh<M: Memory>(
        &mut self,
        instruction: u32,
        mem: &mut M,
    ) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instruction);
        let addr = self.reg(rs).wrapping_add(sign_extend(imm)) & !0x3;

        let merged = (mem.read_word(addr) & 0xFFFF_0000) | (self.reg(rt) & 0xFFFF);
        mem.write_word(addr, merged);
        Ok(())
    }

    /// SB: Store Byte (8-bit)
    ///
    /// Stores the lower 8 bits of a register to memory. The memory
    /// capability only offers aligned word access, so the containing word
    /// is read, its low byte replaced, and the merged word written back.
    ///
    /// Format: sb rt, offset(rs)
    /// Operation: memory[rs + sign_extend(offset)] = rt[7:0]
    ///
    /// # Arguments
    ///
    /// * `instruction` - The full 32-bit instruction
    /// * `mem` - Memory capability for writing
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_sb<M: Memory>(
        &mut self,
        instruction: u32,
        mem: &mut M,
    ) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instruction);
        let addr = self.reg(rs).wrapping_add(sign_extend(imm)) & !0x3;

        let merged = (mem.read_word(addr) & 0xFFFF_FF00) | (self.reg(rt) & 0xFF);
        mem.write_word(addr, merged);
        Ok(())
    }
}
