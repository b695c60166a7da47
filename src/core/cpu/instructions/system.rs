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

//! System call instruction

use super::super::Cpu;
use crate::core::error::Result;

/// Register conventionally holding the syscall number (v0)
const REG_SYSCALL: u8 = 2;

/// Syscall number that halts the simulation
const SYSCALL_EXIT: u32 = 0x0000_000A;

impl Cpu {
    /// SYSCALL: System Call
    ///
    /// A single environment call is recognized: when v0 holds 0x0A the
    /// run flag is cleared and the simulation halts after this step. Any
    /// other syscall number has no effect. Exception vectors are not
    /// modelled; either way the PC advances to the next instruction.
    ///
    /// Format: syscall
    /// Operation: if (v0 == 0x0A) halt
    ///
    /// # Returns
    ///
    /// Ok(()) on success
    pub(in crate::core::cpu) fn op_syscall(&mut self) -> Result<()> {
        if self.reg(REG_SYSCALL) == SYSCALL_EXIT {
            log::debug!("exit syscall at PC=0x{:08X}", self.pc());
            self.halt();
        }
        Ok(())
    }
}
