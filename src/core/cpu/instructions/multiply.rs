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

use super::super::Cpu;
use crate::core::error::Result;

impl Cpu {
    // === Multiply/Divide Instructions ===

    /// MULT: Multiply (signed)
    ///
    /// Multiplies two 32-bit signed integers and stores the 64-bit result
    /// in the HI and LO registers.
    ///
    /// Format: mult rs, rt
    /// Operation: (HI, LO) = rs * rt (signed 64-bit result)
    ///
    /// # Arguments
    ///
    /// * `rs` - First source register
    /// * `rt` - Second source register
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    ///
    /// # Example
    ///
    /// ```ignore
    /// // Multiply 100 * 200 = 20000
    /// // LO = 20000 (0x4E20), HI = 0
    /// cpu.op_mult(1, 2);
    /// ```
    pub(in crate::core::cpu) fn op_mult(&mut self, rs: u8, rt: u8) -> Result<()> {
        let a = self.reg(rs) as i32 as i64;
        let b = self.reg(rt) as i32 as i64;
        let result = a * b;

        self.set_lo(result as u32);
        self.set_hi((result >> 32) as u32);
        Ok(())
    }

    /// MULTU: Multiply Unsigned
    ///
    /// Multiplies two 32-bit unsigned integers and stores the 64-bit result
    /// in the HI and LO registers.
    ///
    /// Format: multu rs, rt
    /// Operation: (HI, LO) = rs * rt (unsigned 64-bit result)
    ///
    /// # Arguments
    ///
    /// * `rs` - First source register
    /// * `rt` - Second source register
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    ///
    /// # Example
    ///
    /// ```ignore
    /// // Multiply 0xFFFFFFFF * 2
    /// // Result = 0x1FFFFFFFE
    /// // LO = 0xFFFFFFFE, HI = 1
    /// cpu.op_multu(1, 2);
    /// ```
    pub(in crate::core::cpu) fn op_multu(&mut self, rs: u8, rt: u8) -> Result<()> {
        let a = self.reg(rs) as u64;
        let b = self.reg(rt) as u64;
        let result = a * b;

        self.set_lo(result as u32);
        self.set_hi((result >> 32) as u32);
        Ok(())
    }

    /// DIV: Divide (signed)
    ///
    /// Divides two 32-bit signed integers and stores the quotient in LO
    /// and the remainder in HI.
    ///
    /// Format: div rs, rt
    /// Operation: LO = rs / rt (quotient), HI = rs % rt (remainder)
    ///
    /// # Arguments
    ///
    /// * `rs` - Dividend register
    /// * `rt` - Divisor register
    ///
    /// # Special Cases
    ///
    /// * Division by zero leaves HI and LO unchanged; execution continues.
    /// * i32::MIN / -1 wraps: LO = i32::MIN, HI = 0.
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_div(&mut self, rs: u8, rt: u8) -> Result<()> {
        let numerator = self.reg(rs) as i32;
        let denominator = self.reg(rt) as i32;

        if denominator == 0 {
            log::trace!("DIV by zero at PC=0x{:08X}, HI/LO unchanged", self.pc());
            return Ok(());
        }

        self.set_lo(numerator.wrapping_div(denominator) as u32);
        self.set_hi(numerator.wrapping_rem(denominator) as u32);
        Ok(())
    }

    /// DIVU: Divide Unsigned
    ///
    /// Divides two 32-bit unsigned integers and stores the quotient in LO
    /// and the remainder in HI.
    ///
    /// Format: divu rs, rt
    /// Operation: LO = rs / rt (quotient), HI = rs % rt (remainder)
    ///
    /// # Arguments
    ///
    /// * `rs` - Dividend register
    /// * `rt` - Divisor register
    ///
    /// # Special Cases
    ///
    /// * Division by zero leaves HI and LO unchanged; execution continues.
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_divu(&mut self, rs: u8, rt: u8) -> Result<()> {
        let numerator = self.reg(rs);
        let denominator = self.reg(rt);

        if denominator == 0 {
            log::trace!("DIVU by zero at PC=0x{:08X}, HI/LO unchanged", self.pc());
            return Ok(());
        }

        self.set_lo(numerator / denominator);
        self.set_hi(numerator % denominator);
        Ok(())
    }

    /// MFHI: Move From HI
    ///
    /// Copies the value of the HI register to a general-purpose register.
    ///
    /// Format: mfhi rd
    /// Operation: rd = HI
    ///
    /// # Arguments
    ///
    /// * `rd` - Destination register
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_mfhi(&mut self, rd: u8) -> Result<()> {
        self.set_reg(rd, self.hi());
        Ok(())
    }

    /// MFLO: Move From LO
    ///
    /// Copies the value of the LO register to a general-purpose register.
    ///
    /// Format: mflo rd
    /// Operation: rd = LO
    ///
    /// # Arguments
    ///
    /// * `rd` - Destination register
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_mflo(&mut self, rd: u8) -> Result<()> {
        self.set_reg(rd, self.lo());
        Ok(())
    }

    /// MTHI: Move To HI
    ///
    /// Copies the value of a general-purpose register to the HI register.
    ///
    /// Format: mthi rs
    /// Operation: HI = rs
    ///
    /// # Arguments
    ///
    /// * `rs` - Source register
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_mthi(&mut self, rs: u8) -> Result<()> {
        let value = self.reg(rs);
        self.set_hi(value);
        Ok(())
    }

    /// MTLO: Move To LO
    ///
    /// Copies the value of a general-purpose register to the LO register.
    ///
    /// Format: mtlo rs
    /// Operation: LO = rs
    ///
    /// # Arguments
    ///
    /// * `rs` - Source register
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_mtlo(&mut self, rs: u8) -> Result<()> {
        let value = self.reg(rs);
        self.set_lo(value);
        Ok(())
    }
}
