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

//! CPU instruction implementations
//!
//! This module contains all instruction implementations of the MIPS I
//! integer subset, organized by instruction type for better
//! maintainability. Dispatch is a three-level match: the primary opcode,
//! the funct field for SPECIAL (opcode 0), and the rt field for REGIMM
//! (opcode 1). The fall-through arm of each match rejects the word.

use super::decode::{decode_i_type, decode_opcode, decode_r_type};
use super::Cpu;
use crate::core::error::{Result, SimError};
use crate::core::memory::Memory;

// Instruction modules organized by type
mod arithmetic;
mod branch;
mod jump;
mod load;
mod logical;
mod multiply;
mod shift;
mod store;
mod system;

impl Cpu {
    /// Decode and execute one instruction
    ///
    /// Dispatches the instruction to the appropriate handler based on its
    /// opcode (upper 6 bits).
    ///
    /// # Arguments
    ///
    /// * `instruction` - The full 32-bit instruction
    /// * `mem` - Memory capability for loads and stores
    ///
    /// # Returns
    ///
    /// Ok(()) on success, or an error for an unrecognized encoding
    pub(super) fn execute_instruction<M: Memory>(
        &mut self,
        instruction: u32,
        mem: &mut M,
    ) -> Result<()> {
        let opcode = decode_opcode(instruction);

        match opcode {
            0x00 => self.execute_special(instruction),
            0x01 => self.execute_regimm(instruction),
            0x02 => self.op_j(instruction),        // J
            0x03 => self.op_jal(instruction),      // JAL
            0x04 => self.op_beq(instruction),      // BEQ
            0x05 => self.op_bne(instruction),      // BNE
            0x06 => self.op_blez(instruction),     // BLEZ
            0x07 => self.op_bgtz(instruction),     // BGTZ
            0x08 => self.op_addi(instruction),     // ADDI
            0x09 => self.op_addiu(instruction),    // ADDIU
            0x0A => self.op_slti(instruction),     // SLTI
            0x0B => self.op_sltiu(instruction),    // SLTIU
            0x0C => self.op_andi(instruction),     // ANDI
            0x0D => self.op_ori(instruction),      // ORI
            0x0E => self.op_xori(instruction),     // XORI
            0x0F => self.op_lui(instruction),      // LUI
            0x20 => self.op_lb(instruction, mem),  // LB
            0x21 => self.op_lh(instruction, mem),  // LH
            0x23 => self.op_lw(instruction, mem),  // LW
            0x24 => self.op_lbu(instruction, mem), // LBU
            0x25 => self.op_lhu(instruction, mem), // LHU
            0x28 => self.op_sb(instruction, mem),  // SB
            0x29 => self.op_sh(instruction, mem),  // SH
            0x2B => self.op_sw(instruction, mem),  // SW
            _ => {
                log::error!(
                    "unrecognized opcode 0x{:02X} at PC=0x{:08X}",
                    opcode,
                    self.pc()
                );
                Err(SimError::UnrecognizedOpcode {
                    opcode,
                    pc: self.pc(),
                })
            }
        }
    }

    /// Handle SPECIAL instructions (opcode 0x00)
    ///
    /// SPECIAL instructions use the lower 6 bits (funct field) to determine
    /// the specific operation.
    ///
    /// # Arguments
    ///
    /// * `instruction` - The full 32-bit instruction
    ///
    /// # Returns
    ///
    /// Ok(()) on success, or an error for an unrecognized function code
    pub(super) fn execute_special(&mut self, instruction: u32) -> Result<()> {
        let (rs, rt, rd, shamt, funct) = decode_r_type(instruction);

        match funct {
            0x00 => self.op_sll(rt, rd, shamt), // SLL
            0x02 => self.op_srl(rt, rd, shamt), // SRL
            0x03 => self.op_sra(rt, rd, shamt), // SRA
            0x04 => self.op_sllv(rs, rt, rd),   // SLLV
            0x06 => self.op_srlv(rs, rt, rd),   // SRLV
            0x07 => self.op_srav(rs, rt, rd),   // SRAV
            0x08 => self.op_jr(rs),             // JR
            0x09 => self.op_jalr(rs, rd),       // JALR
            0x0C => self.op_syscall(),          // SYSCALL
            0x10 => self.op_mfhi(rd),           // MFHI
            0x11 => self.op_mthi(rs),           // MTHI
            0x12 => self.op_mflo(rd),           // MFLO
            0x13 => self.op_mtlo(rs),           // MTLO
            0x18 => self.op_mult(rs, rt),       // MULT
            0x19 => self.op_multu(rs, rt),      // MULTU
            0x1A => self.op_div(rs, rt),        // DIV
            0x1B => self.op_divu(rs, rt),       // DIVU
            0x20 => self.op_add(rs, rt, rd),    // ADD
            0x21 => self.op_addu(rs, rt, rd),   // ADDU
            0x22 => self.op_sub(rs, rt, rd),    // SUB
            0x23 => self.op_subu(rs, rt, rd),   // SUBU
            0x24 => self.op_and(rs, rt, rd),    // AND
            0x25 => self.op_or(rs, rt, rd),     // OR
            0x26 => self.op_xor(rs, rt, rd),    // XOR
            0x27 => self.op_nor(rs, rt, rd),    // NOR
            0x2A => self.op_slt(rs, rt, rd),    // SLT
            0x2B => self.op_sltu(rs, rt, rd),   // SLTU
            _ => {
                log::error!(
                    "unrecognized SPECIAL function 0x{:02X} at PC=0x{:08X}",
                    funct,
                    self.pc()
                );
                Err(SimError::UnrecognizedFunction {
                    funct,
                    pc: self.pc(),
                })
            }
        }
    }

    /// Handle REGIMM instructions (opcode 0x01)
    ///
    /// REGIMM instructions include BLTZ, BGEZ, BLTZAL, and BGEZAL. The rt
    /// field selects the specific branch condition.
    ///
    /// # Arguments
    ///
    /// * `instruction` - The full 32-bit instruction
    ///
    /// # Returns
    ///
    /// Ok(()) on success, or an error for an unrecognized branch code
    pub(super) fn execute_regimm(&mut self, instruction: u32) -> Result<()> {
        let (_, rs, rt, imm) = decode_i_type(instruction);

        match rt {
            0x00 => self.op_bltz(rs, imm),   // BLTZ
            0x01 => self.op_bgez(rs, imm),   // BGEZ
            0x10 => self.op_bltzal(rs, imm), // BLTZAL
            0x11 => self.op_bgezal(rs, imm), // BGEZAL
            _ => {
                log::error!(
                    "unrecognized REGIMM code 0x{:02X} at PC=0x{:08X}",
                    rt,
                    self.pc()
                );
                Err(SimError::UnrecognizedRegimm {
                    code: rt,
                    pc: self.pc(),
                })
            }
        }
    }
}
