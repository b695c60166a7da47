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

/// Link register written by the branch-and-link instructions
const REG_LINK: u8 = 31;

impl Cpu {
    // === Branch Instructions ===

    /// BEQ: Branch on Equal
    ///
    /// Conditional branch if two registers are equal. Branch delay slots
    /// are not modelled: the branch target is fetched on the next step.
    ///
    /// Format: beq rs, rt, offset
    /// Operation: if (rs == rt) PC = PC + (sign_extend(offset) << 2)
    ///
    /// # Arguments
    ///
    /// * `instruction` - The full 32-bit instruction
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_beq(&mut self, instruction: u32) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instruction);

        if self.reg(rs) == self.reg(rt) {
            self.branch(imm);
        }
        Ok(())
    }

    /// BNE: Branch on Not Equal
    ///
    /// Format: bne rs, rt, offset
    /// Operation: if (rs != rt) PC = PC + (sign_extend(offset) << 2)
    ///
    /// # Arguments
    ///
    /// * `instruction` - The full 32-bit instruction
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_bne(&mut self, instruction: u32) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instruction);

        if self.reg(rs) != self.reg(rt) {
            self.branch(imm);
        }
        Ok(())
    }

    /// BLEZ: Branch on Less Than or Equal to Zero
    ///
    /// Conditional branch if register is less than or equal to zero
    /// (signed comparison).
    ///
    /// Format: blez rs, offset
    /// Operation: if (rs <= 0) PC = PC + (sign_extend(offset) << 2)
    ///
    /// # Arguments
    ///
    /// * `instruction` - The full 32-bit instruction
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_blez(&mut self, instruction: u32) -> Result<()> {
        let (_, rs, _, imm) = decode_i_type(instruction);

        if (self.reg(rs) as i32) <= 0 {
            self.branch(imm);
        }
        Ok(())
    }

    /// BGTZ: Branch on Greater Than Zero
    ///
    /// Conditional branch if register is greater than zero (signed
    /// comparison).
    ///
    /// Format: bgtz rs, offset
    /// Operation: if (rs > 0) PC = PC + (sign_extend(offset) << 2)
    ///
    /// # Arguments
    ///
    /// * `instruction` - The full 32-bit instruction
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_bgtz(&mut self, instruction: u32) -> Result<()> {
        let (_, rs, _, imm) = decode_i_type(instruction);

        if (self.reg(rs) as i32) > 0 {
            self.branch(imm);
        }
        Ok(())
    }

    // === REGIMM Branch Instructions ===

    /// BLTZ: Branch on Less Than Zero
    ///
    /// Format: bltz rs, offset
    /// Operation: if (rs < 0) PC = PC + (sign_extend(offset) << 2)
    ///
    /// # Arguments
    ///
    /// * `rs` - Source register
    /// * `imm` - Raw 16-bit branch offset field
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_bltz(&mut self, rs: u8, imm: u16) -> Result<()> {
        if (self.reg(rs) as i32) < 0 {
            self.branch(imm);
        }
        Ok(())
    }

    /// BGEZ: Branch on Greater Than or Equal to Zero
    ///
    /// Format: bgez rs, offset
    /// Operation: if (rs >= 0) PC = PC + (sign_extend(offset) << 2)
    ///
    /// # Arguments
    ///
    /// * `rs` - Source register
    /// * `imm` - Raw 16-bit branch offset field
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_bgez(&mut self, rs: u8, imm: u16) -> Result<()> {
        if (self.reg(rs) as i32) >= 0 {
            self.branch(imm);
        }
        Ok(())
    }

    /// BLTZAL: Branch on Less Than Zero And Link
    ///
    /// The return address is written to r31 whether or not the branch is
    /// taken.
    ///
    /// Format: bltzal rs, offset
    /// Operation: r31 = PC + 4; if (rs < 0) PC = PC + (sign_extend(offset) << 2)
    ///
    /// # Arguments
    ///
    /// * `rs` - Source register
    /// * `imm` - Raw 16-bit branch offset field
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_bltzal(&mut self, rs: u8, imm: u16) -> Result<()> {
        self.set_reg(REG_LINK, self.pc().wrapping_add(4));

        if (self.reg(rs) as i32) < 0 {
            self.branch(imm);
        }
        Ok(())
    }

    /// BGEZAL: Branch on Greater Than or Equal to Zero And Link
    ///
    /// The return address is written to r31 whether or not the branch is
    /// taken.
    ///
    /// Format: bgezal rs, offset
    /// Operation: r31 = PC + 4; if (rs >= 0) PC = PC + (sign_extend(offset) << 2)
    ///
    /// # Arguments
    ///
    /// * `rs` - Source register
    /// * `imm` - Raw 16-bit branch offset field
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_bgezal(&mut self, rs: u8, imm: u16) -> Result<()> {
        self.set_reg(REG_LINK, self.pc().wrapping_add(4));

        if (self.reg(rs) as i32) >= 0 {
            self.branch(imm);
        }
        Ok(())
    }

    /// Take a branch (stages the new PC)
    ///
    /// The raw 16-bit offset field is sign-extended, scaled to words, and
    /// applied to the address of the branch instruction itself. With no
    /// delay slot the taken target is simply the next instruction fetched.
    ///
    /// # Arguments
    ///
    /// * `imm` - Raw 16-bit branch offset field
    pub(in crate::core::cpu) fn branch(&mut self, imm: u16) {
        let offset = sign_extend(imm) << 2;
        self.set_pc(self.pc().wrapping_add(offset));
    }
}
